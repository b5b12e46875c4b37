pub mod camera;
pub mod cli;
pub mod core;
pub mod math;
pub mod renderer;
pub mod scene;
pub mod types;

// Re-export the types most hosts need
pub use crate::camera::{Camera, CameraError, ClickCallback, Viewport};
pub use crate::core::{CameraEvent, MatrixSlot, PointerButton, WinitAdapter};

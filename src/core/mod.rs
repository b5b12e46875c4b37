//! Input plumbing and the uniform seam the camera is built against.

pub mod controller;
pub mod input_adapter;
pub mod input_state;
pub mod uniform;

pub use controller::{CameraEvent, PointerButton};
pub use input_adapter::WinitAdapter;
pub use input_state::InputState;
pub use uniform::MatrixSlot;

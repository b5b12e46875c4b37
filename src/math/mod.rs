//! Transform construction for the camera.
//!
//! The camera never builds matrices by hand: it goes through these
//! constructors and composes them with `Mat4` multiplication
//! (left-multiply applies a transform after the existing one). Vector
//! ops (normalize, cross, negate) come from `glam::Vec3` directly.

mod transform;

pub use transform::{axis_rotation, identity, rotation_x, translation};

use glam::{Mat4, Vec3};

/// Identity transform.
pub fn identity() -> Mat4 {
    Mat4::IDENTITY
}

/// Translation by `offset`.
pub fn translation(offset: Vec3) -> Mat4 {
    Mat4::from_translation(offset)
}

/// Rotation of `angle` radians about the world X axis.
pub fn rotation_x(angle: f32) -> Mat4 {
    Mat4::from_rotation_x(angle)
}

/// Rotation of `angle` radians about `axis` (must be normalized).
pub fn axis_rotation(axis: Vec3, angle: f32) -> Mat4 {
    Mat4::from_axis_angle(axis, angle)
}

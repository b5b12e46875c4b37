/// A bound 4x4-matrix shader uniform.
///
/// This is the camera's only view of the graphics stack: a "set 4x4
/// uniform matrix" call against an opaque location. Matrices cross the
/// seam as column-major float arrays. The demo renderer backs slots
/// with wgpu buffer writes; tests back them with in-memory recorders.
pub trait MatrixSlot {
    /// Upload `matrix` to the bound uniform location.
    fn set(&mut self, matrix: [[f32; 4]; 4]);
}

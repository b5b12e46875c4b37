/// Scene uniform buffer data for GPU
///
/// Layout matches the `Uniforms` struct in `scene.wgsl`: the view matrix
/// at offset 0 and the projection matrix at offset 64, so each can be
/// written independently through its own slot.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneUniforms {
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
}

/// Byte offset of the view matrix within `SceneUniforms`.
pub const VIEW_OFFSET: u64 = 0;
/// Byte offset of the projection matrix within `SceneUniforms`.
pub const PROJECTION_OFFSET: u64 = 64;

impl SceneUniforms {
    pub fn identity() -> Self {
        let identity = glam::Mat4::IDENTITY.to_cols_array_2d();
        Self {
            view: identity,
            projection: identity,
        }
    }
}

/// Colored vertex for the demo scene
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

impl Vertex {
    pub const fn new(position: [f32; 3], color: [f32; 3]) -> Self {
        Self { position, color }
    }

    /// Vertex buffer layout matching the `@location` attributes in
    /// `scene.wgsl`.
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
            wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &ATTRIBUTES,
        }
    }
}

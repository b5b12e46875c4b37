use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::types::Vertex;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Per-face brightness so box silhouettes read without lighting.
const FACE_SHADE: [f32; 6] = [1.0, 0.55, 0.8, 0.8, 0.65, 0.65];

/// An axis-aligned colored box in the demo scene.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BoxSpec {
    pub center: [f32; 3],
    pub size: [f32; 3],
    pub color: [f32; 3],
}

impl BoxSpec {
    pub const fn new(center: [f32; 3], size: [f32; 3], color: [f32; 3]) -> Self {
        Self { center, size, color }
    }
}

/// Demo scene description: just a list of boxes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scene {
    pub boxes: Vec<BoxSpec>,
}

impl Scene {
    /// Load a scene from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let scene = serde_json::from_str(&contents)?;
        Ok(scene)
    }

    /// Flatten the scene into a triangle list for the vertex buffer.
    pub fn vertices(&self) -> Vec<Vertex> {
        self.boxes.iter().flat_map(box_vertices).collect()
    }
}

/// The built-in scene: a ground slab and a ring of pillars around the
/// origin, sized so the default reset pose frames all of it.
pub fn default_scene() -> Scene {
    let mut boxes = vec![
        // Ground
        BoxSpec::new([0.0, -1.0, 0.0], [40.0, 0.5, 40.0], [0.35, 0.5, 0.3]),
        // Center marker
        BoxSpec::new([0.0, 1.0, 0.0], [2.0, 4.0, 2.0], [0.85, 0.3, 0.25]),
    ];

    let pillar_count = 8;
    for i in 0..pillar_count {
        let angle = (i as f32 / pillar_count as f32) * std::f32::consts::TAU;
        let hue_shift = i as f32 / pillar_count as f32;
        boxes.push(BoxSpec::new(
            [angle.cos() * 12.0, 0.5, angle.sin() * 12.0],
            [1.5, 3.0, 1.5],
            [0.3 + 0.5 * hue_shift, 0.4, 0.8 - 0.5 * hue_shift],
        ));
    }

    Scene { boxes }
}

/// 36 vertices (12 triangles) for one box, CCW from outside.
fn box_vertices(spec: &BoxSpec) -> Vec<Vertex> {
    let [cx, cy, cz] = spec.center;
    let [hx, hy, hz] = [spec.size[0] * 0.5, spec.size[1] * 0.5, spec.size[2] * 0.5];

    let corner = |sx: f32, sy: f32, sz: f32| [cx + sx * hx, cy + sy * hy, cz + sz * hz];

    // Each face as two triangles; winding keeps outward faces CCW.
    let faces: [[[f32; 3]; 4]; 6] = [
        // +Y (top), -Y (bottom), +X, -X, +Z, -Z
        [
            corner(-1.0, 1.0, -1.0),
            corner(-1.0, 1.0, 1.0),
            corner(1.0, 1.0, 1.0),
            corner(1.0, 1.0, -1.0),
        ],
        [
            corner(-1.0, -1.0, -1.0),
            corner(1.0, -1.0, -1.0),
            corner(1.0, -1.0, 1.0),
            corner(-1.0, -1.0, 1.0),
        ],
        [
            corner(1.0, -1.0, -1.0),
            corner(1.0, 1.0, -1.0),
            corner(1.0, 1.0, 1.0),
            corner(1.0, -1.0, 1.0),
        ],
        [
            corner(-1.0, -1.0, -1.0),
            corner(-1.0, -1.0, 1.0),
            corner(-1.0, 1.0, 1.0),
            corner(-1.0, 1.0, -1.0),
        ],
        [
            corner(-1.0, -1.0, 1.0),
            corner(1.0, -1.0, 1.0),
            corner(1.0, 1.0, 1.0),
            corner(-1.0, 1.0, 1.0),
        ],
        [
            corner(-1.0, -1.0, -1.0),
            corner(-1.0, 1.0, -1.0),
            corner(1.0, 1.0, -1.0),
            corner(1.0, -1.0, -1.0),
        ],
    ];

    let mut vertices = Vec::with_capacity(36);
    for (face, shade) in faces.iter().zip(FACE_SHADE) {
        let color = [
            spec.color[0] * shade,
            spec.color[1] * shade,
            spec.color[2] * shade,
        ];
        for &index in &[0usize, 1, 2, 0, 2, 3] {
            vertices.push(Vertex::new(face[index], color));
        }
    }
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn box_produces_36_vertices() {
        let spec = BoxSpec::new([0.0, 0.0, 0.0], [2.0, 2.0, 2.0], [1.0, 1.0, 1.0]);
        assert_eq!(box_vertices(&spec).len(), 36);
    }

    #[test]
    fn box_vertices_stay_within_bounds() {
        let spec = BoxSpec::new([1.0, 2.0, 3.0], [2.0, 4.0, 6.0], [1.0, 1.0, 1.0]);
        for vertex in box_vertices(&spec) {
            let [x, y, z] = vertex.position;
            assert!((0.0..=2.0).contains(&x));
            assert!((0.0..=4.0).contains(&y));
            assert!((0.0..=6.0).contains(&z));
        }
    }

    #[test]
    fn default_scene_is_nonempty() {
        let scene = default_scene();
        assert!(!scene.boxes.is_empty());
        assert_eq!(scene.vertices().len(), scene.boxes.len() * 36);
    }

    #[test]
    fn scene_json_round_trip() {
        let scene = default_scene();
        let json = serde_json::to_string(&scene).unwrap();
        let parsed: Scene = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.boxes.len(), scene.boxes.len());
        assert_eq!(parsed.boxes[0].center, scene.boxes[0].center);
    }
}

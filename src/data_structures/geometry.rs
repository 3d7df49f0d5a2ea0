//! Renderer-native geometry: flat vertex and face buffers.

use cgmath::{Matrix4, Vector2, Vector4};

/// One triangle mesh in the renderer's layout.
///
/// Vertex positions are homogeneous (`w == 1` until transformed). Faces index
/// into `vertices`; `tex_faces` runs in parallel with `faces` and indexes
/// into `tex_coords`, which may be empty for untextured geometry. Counts are
/// fixed at extraction and every face index is `< vertices.len()`.
#[derive(Clone, Debug)]
pub struct Geometry {
    pub vertices: Vec<Vector4<f32>>,
    pub tex_coords: Vec<Vector2<f32>>,
    pub faces: Vec<[u32; 3]>,
    pub tex_faces: Vec<[u32; 3]>,
}

impl Geometry {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Apply a transform to every vertex position in place.
    pub fn transform(&mut self, m: &Matrix4<f32>) {
        for v in &mut self.vertices {
            *v = m * *v;
        }
    }
}

/// One instantiated (geometry, material) pair, ready for drawing.
///
/// Owns its geometry, which is already transformed into world space. The
/// material is a handle into the material table; `None` means the primitive
/// declared no material and draws with [`Material::UNKNOWN`].
///
/// [`Material::UNKNOWN`]: crate::data_structures::material::Material::UNKNOWN
#[derive(Clone, Debug)]
pub struct RenderItem {
    pub geometry: Geometry,
    pub material: Option<usize>,
}

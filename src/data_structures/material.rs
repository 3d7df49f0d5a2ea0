//! Renderer material descriptors.

/// How an item is shaded: a flat gray intensity or a texture handle into the
/// texture table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Material {
    Flat { color: u8 },
    Textured { image: usize },
}

impl Material {
    /// Fallback for primitives that declare no material at all. Lives for the
    /// whole process, independent of any table.
    pub const UNKNOWN: Material = Material::Flat { color: u8::MAX };
}

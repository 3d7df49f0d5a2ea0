//! Renderer data structures: geometry, materials, and textures.
//!
//! - `geometry` contains the flat vertex/face buffers and render items
//! - `material` contains the flat/textured material variant
//! - `texture` contains decoded grayscale images and decode options

pub mod geometry;
pub mod material;
pub mod texture;

//! Minimal grayscale software rasterizer.
//!
//! The scene pipeline treats this as a collaborator with a narrow surface:
//! a frame with clear and PNG export (`frame`), a reusable clip-space
//! geometry buffer, draw state, and a triangle fill (`raster`).

pub mod frame;
pub mod raster;

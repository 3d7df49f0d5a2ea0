//! grisaille
//!
//! A small grayscale software renderer around a glTF scene resolution
//! pipeline. The crate turns an asset-format graph of indices and accessors
//! into flat, renderer-ready buffers: decoded images in a texture table,
//! resolved material descriptors, world-space geometry paired with material
//! handles, and the active camera's view/projection state. A minimal
//! rasterizer fills the resulting render list into a gray framebuffer.
//!
//! High-level modules
//! - `camera`: view/projection state and camera defaults
//! - `context`: render context owning the frame and scratch buffers
//! - `data_structures`: renderer data models (geometry, materials, textures)
//! - `rasterizer`: grayscale frame and triangle fill
//! - `render`: render list dispatch
//! - `resources`: glTF loading into tables, items, and camera state
//!

pub mod camera;
pub mod context;
pub mod data_structures;
pub mod rasterizer;
pub mod render;
pub mod resources;

// Re-exports commonly used types for convenience in downstream code.
pub use cgmath::*;

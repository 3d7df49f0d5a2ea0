//! Explicit render context: the frame, the combined transform, and the
//! scratch geometry buffer, passed by reference into the dispatcher instead
//! of living in process-wide globals.

use cgmath::{Matrix4, SquareMatrix};

use crate::rasterizer::frame::Frame;
use crate::rasterizer::raster::ObjBuf;

pub struct RenderContext {
    pub frame: Frame,
    /// Combined view-projection transform applied to every item's
    /// world-space geometry.
    pub transform: Matrix4<f32>,
    pub(crate) buf: ObjBuf,
}

impl RenderContext {
    /// `max_vertices` sizes the scratch geometry buffer for the largest
    /// primitive expected in a scene.
    pub fn new(width: u32, height: u32, max_vertices: usize) -> Self {
        Self {
            frame: Frame::new(width, height),
            transform: Matrix4::identity(),
            buf: ObjBuf::new(max_vertices),
        }
    }
}

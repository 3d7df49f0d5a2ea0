//! Grayscale framebuffer with a depth attachment.

use anyhow::{Context, Result};
use image::GrayImage;
use std::path::Path;

/// Render target: one gray byte and one depth value per pixel.
///
/// Depth runs 0.0 (near) to 1.0 (far); a fragment lands only when its depth
/// is strictly less than the stored value.
pub struct Frame {
    width: u32,
    height: u32,
    color: Vec<u8>,
    depth: Vec<f32>,
}

impl Frame {
    pub fn new(width: u32, height: u32) -> Self {
        let pixels = (width * height) as usize;
        Self {
            width,
            height,
            color: vec![0; pixels],
            depth: vec![1.0; pixels],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    /// Reset every pixel to the given intensity (0.0..=1.0) and depth.
    pub fn clear(&mut self, color: f32, depth: f32) {
        let g = (color.clamp(0.0, 1.0) * 255.0) as u8;
        self.color.fill(g);
        self.depth.fill(depth);
    }

    pub fn get(&self, x: u32, y: u32) -> u8 {
        self.color[(y * self.width + x) as usize]
    }

    pub(crate) fn plot(&mut self, x: u32, y: u32, color: u8, depth: f32) {
        let i = (y * self.width + x) as usize;
        if depth < self.depth[i] {
            self.depth[i] = depth;
            self.color[i] = color;
        }
    }

    pub fn to_image(&self) -> GrayImage {
        GrayImage::from_raw(self.width, self.height, self.color.clone())
            .expect("color buffer matches frame dimensions")
    }

    /// Encode the color buffer and write it to `path` (format by extension).
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.to_image()
            .save(path)
            .with_context(|| format!("failed to write frame to {}", path.display()))
    }
}

//! Decoded grayscale textures.
//!
//! The renderer shades in a single gray channel, so every source image is
//! collapsed to luma on decode. Pixel storage is a tagged variant over the
//! two supported layouts: gray (`G8`) and gray plus alpha (`GA8`).

use anyhow::{Context, Result};
use image::{DynamicImage, GenericImageView, ImageFormat};
use std::path::Path;

/// Options for the image-decode step.
#[derive(Clone, Copy, Debug, Default)]
pub struct TexReadOpts {
    /// Drop the alpha channel even when the source image carries one.
    pub force_g8: bool,
    /// Synthesize a constant alpha channel when the source image has none.
    pub alpha_fill: Option<u8>,
}

/// Pixel layout tag, one per [`Pixels`] variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PixelFmt {
    G8,
    GA8,
}

/// Row-major pixel storage, tagged by layout.
#[derive(Clone, Debug)]
pub enum Pixels {
    G8(Vec<u8>),
    GA8(Vec<[u8; 2]>),
}

/// A decoded image, owned by the texture table for the table's lifetime.
#[derive(Clone, Debug)]
pub struct Texture {
    width: u32,
    height: u32,
    pixels: Pixels,
}

impl Texture {
    /// Decode an image file from disk.
    pub fn read(path: &Path, opts: &TexReadOpts) -> Result<Self> {
        let img = image::open(path)
            .with_context(|| format!("failed to decode image {}", path.display()))?;
        Ok(Self::from_image(&img, opts))
    }

    /// Decode an image from raw file bytes (e.g. a glTF buffer view).
    ///
    /// `format` is an optional extension hint such as `"png"`; without it the
    /// format is guessed from the byte signature.
    pub fn from_bytes(bytes: &[u8], format: Option<&str>, opts: &TexReadOpts) -> Result<Self> {
        let img = match format {
            None => image::load_from_memory(bytes)?,
            Some(fmt) => {
                let fmt = ImageFormat::from_extension(fmt)
                    .with_context(|| format!("unknown image format hint {fmt:?}"))?;
                image::load_from_memory_with_format(bytes, fmt)?
            }
        };
        Ok(Self::from_image(&img, opts))
    }

    pub fn from_image(img: &DynamicImage, opts: &TexReadOpts) -> Self {
        let (width, height) = img.dimensions();
        let has_alpha = img.color().has_alpha();

        let pixels = if opts.force_g8 || (!has_alpha && opts.alpha_fill.is_none()) {
            Pixels::G8(img.to_luma8().into_raw())
        } else if has_alpha {
            Pixels::GA8(img.to_luma_alpha8().pixels().map(|p| [p.0[0], p.0[1]]).collect())
        } else {
            let fill = opts.alpha_fill.unwrap_or(u8::MAX);
            Pixels::GA8(img.to_luma8().pixels().map(|p| [p.0[0], fill]).collect())
        };

        Self { width, height, pixels }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn format(&self) -> PixelFmt {
        match self.pixels {
            Pixels::G8(_) => PixelFmt::G8,
            Pixels::GA8(_) => PixelFmt::GA8,
        }
    }

    /// Sample the texture at normalized coordinates with repeat wrapping and
    /// nearest filtering. Returns `(gray, alpha)`; `G8` textures are opaque.
    pub fn sample(&self, u: f32, v: f32) -> (u8, u8) {
        let x = (wrap(u) * self.width as f32) as u32;
        let y = (wrap(v) * self.height as f32) as u32;
        self.texel(x.min(self.width - 1), y.min(self.height - 1))
    }

    fn texel(&self, x: u32, y: u32) -> (u8, u8) {
        let i = (y * self.width + x) as usize;
        match &self.pixels {
            Pixels::G8(data) => (data[i], u8::MAX),
            Pixels::GA8(data) => (data[i][0], data[i][1]),
        }
    }
}

fn wrap(t: f32) -> f32 {
    t - t.floor()
}

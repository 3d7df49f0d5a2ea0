//! Texture table: decoded images indexed by the asset's image list.

use std::path::Path;

use anyhow::anyhow;

use crate::data_structures::texture::{TexReadOpts, Texture};

/// Owns every decoded image of one asset, slot `i` matching image `i` in the
/// source file. A slot is `None` when decoding failed; consumers treat that
/// as a per-material degradation, never a load failure.
pub struct TextureTable {
    slots: Vec<Option<Texture>>,
}

impl TextureTable {
    /// Decode every image descriptor. Relative URIs resolve against
    /// `base_path`; buffer-view sources are sliced out of `buffers`.
    pub fn load(base_path: &Path, images: gltf::iter::Images, buffers: &[Vec<u8>]) -> Self {
        let opts = TexReadOpts::default();
        let mut slots = Vec::with_capacity(images.len());

        for image in images {
            let index = image.index();
            let tex = match image.source() {
                gltf::image::Source::Uri { uri, mime_type: _ } => {
                    let path = base_path.join(uri);
                    log::info!("reading image {}", path.display());
                    Texture::read(&path, &opts)
                }
                gltf::image::Source::View { view, mime_type } => {
                    // The declared byteLength may exceed what the buffer file
                    // actually held, so the slice has to be checked.
                    let end = view.offset() + view.length();
                    match buffers
                        .get(view.buffer().index())
                        .and_then(|buffer| buffer.get(view.offset()..end))
                    {
                        Some(bytes) => {
                            Texture::from_bytes(bytes, mime_type.split('/').next_back(), &opts)
                        }
                        None => Err(anyhow!(
                            "buffer view {}..{end} is out of bounds",
                            view.offset()
                        )),
                    }
                }
            };
            match tex {
                Ok(tex) => slots.push(Some(tex)),
                Err(err) => {
                    log::warn!("can't load image {index}: {err:#}");
                    slots.push(None);
                }
            }
        }

        Self { slots }
    }

    /// Fails closed: `None` for out-of-range indices and for slots whose
    /// image never decoded.
    pub fn lookup(&self, index: usize) -> Option<&Texture> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

//! Material table: asset materials resolved into renderer descriptors.

use crate::data_structures::material::Material;
use crate::resources::texture::TextureTable;

/// Renderer materials, entry `i` matching material `i` in the source file.
pub struct MaterialTable {
    entries: Vec<Material>,
}

impl MaterialTable {
    /// Resolve every material descriptor. Must run after [`TextureTable::load`]
    /// so that texture references point at populated slots.
    pub fn resolve(materials: gltf::iter::Materials, textures: &TextureTable) -> Self {
        let mut entries = Vec::with_capacity(materials.len());

        for material in materials {
            let index = entries.len();
            log::info!("material {index}: {}", material.name().unwrap_or("unnamed"));

            let pbr = material.pbr_metallic_roughness();
            let entry = match pbr.base_color_texture() {
                Some(info) => {
                    let image = info.texture().source().index();
                    if textures.lookup(image).is_none() {
                        log::warn!(
                            "material {index} references image {image} which did not decode; it will draw untextured"
                        );
                    }
                    Material::Textured { image }
                }
                // No base-color texture: fall back to the declared base-color
                // factor collapsed to luma.
                None => Material::Flat { color: luma(pbr.base_color_factor()) },
            };
            entries.push(entry);
        }

        Self { entries }
    }

    /// Fails closed: `None` for out-of-range indices.
    pub fn lookup(&self, index: usize) -> Option<&Material> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Rec. 709 luma of a linear RGBA color factor, scaled to `u8`.
fn luma([r, g, b, _a]: [f32; 4]) -> u8 {
    ((0.2126 * r + 0.7152 * g + 0.0722 * b).clamp(0.0, 1.0) * 255.0) as u8
}

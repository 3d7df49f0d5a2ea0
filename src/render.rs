//! Render list dispatch.
//!
//! Issues one draw per render item, strictly in list order, binding the
//! item's material state before each draw. No sorting, batching, or
//! state-change coalescing happens here.

use crate::context::RenderContext;
use crate::data_structures::material::Material;
use crate::rasterizer::raster::{self, DrawStats, Shading};
use crate::resources::SceneContext;

pub fn render_scene(ctx: &mut RenderContext, scene: &SceneContext) {
    let mut stats = DrawStats::default();

    for item in &scene.items {
        let material = item
            .material
            .and_then(|index| scene.materials.lookup(index))
            .unwrap_or(&Material::UNKNOWN);

        let shading = match material {
            Material::Flat { color } => Shading::Flat(*color),
            Material::Textured { image } => match scene.textures.lookup(*image) {
                Some(texture) => Shading::Textured(texture),
                // The image never decoded; the item draws untextured.
                None => Shading::Flat(u8::MAX),
            },
        };

        ctx.buf.load(&item.geometry, &ctx.transform);
        stats += raster::draw(&mut ctx.frame, &ctx.buf, &shading);
    }

    log::debug!("rendered {} items: {stats:?}", scene.items.len());
}

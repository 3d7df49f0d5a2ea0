//! Scene loading: resolves a glTF asset into renderer-ready tables, render
//! items, and camera state.
//!
//! Load order is fixed: buffers, then images, then the materials that
//! reference them, then the node walk that instantiates geometry.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result, bail};
use cgmath::{Matrix4, Rad, SquareMatrix};

use crate::camera::{CameraState, DEFAULT_ZFAR};
use crate::data_structures::geometry::RenderItem;
use crate::resources::material::MaterialTable;
use crate::resources::mesh::extract_triangles;
use crate::resources::texture::TextureTable;

pub mod material;
pub mod mesh;
pub mod texture;

/// Everything resolved out of one asset file. Owns the texture and material
/// tables and the render item list; dropped as one unit.
pub struct SceneContext {
    pub textures: TextureTable,
    pub materials: MaterialTable,
    /// Render list, in traversal order of mesh-bearing primitives.
    pub items: Vec<RenderItem>,
    pub camera: CameraState,
}

/// Load a glTF scene from `file_name`.
///
/// `camera` supplies the view/projection used when the asset declares no
/// camera; `fallback_aspect` is used when a perspective camera omits its
/// aspect ratio (typically the output frame's aspect).
///
/// Any fatal input error (parse failure, missing buffer, unsupported
/// topology, attribute, or camera projection) aborts the whole load; no
/// partial scene is returned.
pub fn load_gltf(
    file_name: impl AsRef<Path>,
    camera: CameraState,
    fallback_aspect: f32,
) -> Result<SceneContext> {
    let path = file_name.as_ref();
    log::info!("reading {}", path.display());

    let gltf = gltf::Gltf::open(path)
        .with_context(|| format!("failed to load glTF file {}", path.display()))?;
    let base_path = path.parent().unwrap_or_else(|| Path::new("."));

    // Load buffers
    let mut buffer_data = Vec::new();
    for buffer in gltf.buffers() {
        match buffer.source() {
            gltf::buffer::Source::Bin => {
                let blob = gltf.blob.as_deref().context("binary glTF chunk is missing")?;
                buffer_data.push(blob.to_vec());
            }
            gltf::buffer::Source::Uri(uri) => {
                let bin = std::fs::read(base_path.join(uri))
                    .with_context(|| format!("failed to load buffer {uri}"))?;
                buffer_data.push(bin);
            }
        }
    }

    // Images must be populated before the materials that reference them.
    let textures = TextureTable::load(base_path, gltf.images(), &buffer_data);
    let materials = MaterialTable::resolve(gltf.materials(), &textures);

    let scene = gltf
        .default_scene()
        .or_else(|| gltf.scenes().next())
        .context("glTF file contains no scene")?;

    let mut walker = SceneWalker {
        buffers: &buffer_data,
        items: Vec::new(),
        camera,
        fallback_aspect,
        visited: HashSet::new(),
    };
    for node in scene.nodes() {
        walker.visit(node, Matrix4::identity())?;
    }

    Ok(SceneContext {
        textures,
        materials,
        items: walker.items,
        camera: walker.camera,
    })
}

struct SceneWalker<'a> {
    buffers: &'a [Vec<u8>],
    items: Vec<RenderItem>,
    camera: CameraState,
    fallback_aspect: f32,
    visited: HashSet<usize>,
}

impl SceneWalker<'_> {
    /// Visit one node: accumulate its world transform, instantiate geometry
    /// for a mesh reference, pick up a camera reference, then descend.
    fn visit(&mut self, node: gltf::Node, parent: Matrix4<f32>) -> Result<()> {
        // glTF nodes form a strict tree, but the parser does not enforce
        // acyclicity; a revisited node means a malformed graph.
        if !self.visited.insert(node.index()) {
            bail!("scene graph contains a cycle at node {}", node.index());
        }
        let world = parent * Matrix4::from(node.transform().matrix());
        log::debug!("node {}: {}", node.index(), node.name().unwrap_or("unnamed"));

        if let Some(mesh) = node.mesh() {
            log::debug!("  mesh: {}", mesh.name().unwrap_or("unnamed"));
            for primitive in mesh.primitives() {
                let (mut geometry, material) = extract_triangles(&primitive, self.buffers)?;
                geometry.transform(&world);
                self.items.push(RenderItem { geometry, material });
            }
        }

        if let Some(camera) = node.camera() {
            log::debug!("  camera: {}", camera.name().unwrap_or("unnamed"));
            match camera.projection() {
                gltf::camera::Projection::Perspective(persp) => {
                    let view = world
                        .invert()
                        .context("camera node transform is not invertible")?;
                    let zfar = persp.zfar().unwrap_or(DEFAULT_ZFAR);
                    let aspect = persp.aspect_ratio().unwrap_or(self.fallback_aspect);
                    let proj =
                        cgmath::perspective(Rad(persp.yfov()), aspect, persp.znear(), zfar);
                    // Last camera in traversal order wins.
                    self.camera = CameraState { view, proj };
                }
                gltf::camera::Projection::Orthographic(_) => {
                    bail!("orthographic cameras are not supported")
                }
            }
        }

        for child in node.children() {
            self.visit(child, world)?;
        }
        Ok(())
    }
}

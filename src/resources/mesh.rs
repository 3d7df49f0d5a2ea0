//! Geometry extraction: one glTF triangle primitive into flat buffers.

use anyhow::{Context, Result, bail, ensure};
use cgmath::{Vector2, Vector4};
use gltf::mesh::Semantic;

use crate::data_structures::geometry::Geometry;

/// Convert one triangle-list primitive into renderer geometry and resolve
/// its material handle.
///
/// Fatal errors: a non-triangle topology, a missing index accessor, an index
/// count that is not a multiple of 3, a face index out of range, or any
/// vertex attribute other than `POSITION` and `TEXCOORD_0`.
pub fn extract_triangles(
    primitive: &gltf::Primitive,
    buffers: &[Vec<u8>],
) -> Result<(Geometry, Option<usize>)> {
    ensure!(
        primitive.mode() == gltf::mesh::Mode::Triangles,
        "unsupported primitive mode {:?}, only triangle lists are supported",
        primitive.mode()
    );

    let reader = primitive.reader(|buffer| buffers.get(buffer.index()).map(Vec::as_slice));

    let indices: Vec<u32> = reader
        .read_indices()
        .context("primitive has no index accessor")?
        .into_u32()
        .collect();
    ensure!(
        indices.len() % 3 == 0,
        "index count {} is not a multiple of 3",
        indices.len()
    );

    let faces: Vec<[u32; 3]> = indices
        .chunks_exact(3)
        .map(|tri| [tri[0], tri[1], tri[2]])
        .collect();
    // glTF attributes are indexed per vertex, so texture-coordinate faces
    // mirror the position faces.
    let tex_faces = faces.clone();

    let mut vertices: Vec<Vector4<f32>> = Vec::new();
    let mut tex_coords: Vec<Vector2<f32>> = Vec::new();
    for (semantic, _) in primitive.attributes() {
        match semantic {
            Semantic::Positions => {
                let positions = reader
                    .read_positions()
                    .context("POSITION accessor is unreadable")?;
                vertices = positions
                    .map(|[x, y, z]| Vector4::new(x, y, z, 1.0))
                    .collect();
            }
            Semantic::TexCoords(0) => {
                let coords = reader
                    .read_tex_coords(0)
                    .context("TEXCOORD_0 accessor is unreadable")?;
                tex_coords = coords.into_f32().map(Vector2::from).collect();
            }
            other => bail!("unsupported vertex attribute {other:?}"),
        }
    }
    ensure!(!vertices.is_empty(), "primitive has no POSITION attribute");

    if let Some(max) = indices.iter().max() {
        ensure!(
            (*max as usize) < vertices.len(),
            "face index {max} out of range for {} vertices",
            vertices.len()
        );
    }

    let material = primitive.material().index();
    Ok((Geometry { vertices, tex_coords, faces, tex_faces }, material))
}

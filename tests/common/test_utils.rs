//! Helpers for writing small glTF fixtures into a scratch directory.

use std::fs;
use std::path::PathBuf;

/// Shared buffer/accessor/asset JSON for a single triangle.
///
/// Accessor 0 is the `u16` index accessor, 1 the positions
/// `(0,0,0) (1,0,0) (0,1,0)`, 2 the texture coordinates `(0,0) (1,0) (0,1)`.
pub const TRIANGLE_CORE: &str = r#"  "asset": { "version": "2.0" },
  "buffers": [{ "uri": "tri.bin", "byteLength": 68 }],
  "bufferViews": [
    { "buffer": 0, "byteOffset": 0, "byteLength": 6 },
    { "buffer": 0, "byteOffset": 8, "byteLength": 36 },
    { "buffer": 0, "byteOffset": 44, "byteLength": 24 }
  ],
  "accessors": [
    { "bufferView": 0, "componentType": 5123, "count": 3, "type": "SCALAR" },
    { "bufferView": 1, "componentType": 5126, "count": 3, "type": "VEC3",
      "min": [0.0, 0.0, 0.0], "max": [1.0, 1.0, 0.0] },
    { "bufferView": 2, "componentType": 5126, "count": 3, "type": "VEC2" }
  ]"#;

/// The binary buffer `TRIANGLE_CORE` describes: indices, two bytes of
/// alignment padding, positions, texture coordinates.
pub fn triangle_bin() -> Vec<u8> {
    let mut bin = Vec::with_capacity(68);
    for i in [0u16, 1, 2] {
        bin.extend_from_slice(&i.to_le_bytes());
    }
    bin.extend_from_slice(&[0, 0]);
    for p in [[0.0f32, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]] {
        for c in p {
            bin.extend_from_slice(&c.to_le_bytes());
        }
    }
    for uv in [[0.0f32, 0.0], [1.0, 0.0], [0.0, 1.0]] {
        for c in uv {
            bin.extend_from_slice(&c.to_le_bytes());
        }
    }
    assert_eq!(bin.len(), 68);
    bin
}

/// Write `scene.gltf` plus the shared triangle buffer into a fresh scratch
/// directory and return the scene file's path.
pub fn scratch_scene(name: &str, gltf_json: &str) -> PathBuf {
    let dir = scratch_dir(name);
    fs::write(dir.join("tri.bin"), triangle_bin()).expect("failed to write buffer");
    let path = dir.join("scene.gltf");
    fs::write(&path, gltf_json).expect("failed to write scene");
    path
}

pub fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("grisaille-{name}-{}", std::process::id()));
    // A scratch dir may survive an earlier aborted run.
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).expect("failed to create scratch dir");
    dir
}

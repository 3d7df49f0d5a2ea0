//! Clip-space triangle fill over the grayscale frame.

use cgmath::{Matrix4, Vector2, Vector4};

use super::frame::Frame;
use crate::data_structures::{geometry::Geometry, texture::Texture};

/// Draw state bound before each draw call: a flat intensity or the active
/// texture.
pub enum Shading<'a> {
    Flat(u8),
    Textured(&'a Texture),
}

/// Per-draw counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DrawStats {
    /// Triangles rejected before fill (behind the near plane or degenerate).
    pub culled: usize,
    /// Triangles that reached the fill loop.
    pub filled: usize,
    /// Fragments shaded (after the coverage, z-range, and alpha tests).
    pub fragments: usize,
}

impl std::ops::AddAssign for DrawStats {
    fn add_assign(&mut self, rhs: Self) {
        self.culled += rhs.culled;
        self.filled += rhs.filled;
        self.fragments += rhs.fragments;
    }
}

/// Scratch clip-space geometry buffer.
///
/// Allocated once with room for the largest expected primitive and refilled
/// for every draw, so the render loop does not allocate per item.
pub struct ObjBuf {
    vertices: Vec<Vector4<f32>>,
    tex_coords: Vec<Vector2<f32>>,
    faces: Vec<[u32; 3]>,
    tex_faces: Vec<[u32; 3]>,
}

impl ObjBuf {
    pub fn new(capacity: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(capacity),
            tex_coords: Vec::with_capacity(capacity),
            faces: Vec::with_capacity(capacity),
            tex_faces: Vec::with_capacity(capacity),
        }
    }

    /// Refill the buffer with `geometry` transformed into clip space.
    pub fn load(&mut self, geometry: &Geometry, transform: &Matrix4<f32>) {
        self.vertices.clear();
        self.tex_coords.clear();
        self.faces.clear();
        self.tex_faces.clear();

        self.vertices.extend(geometry.vertices.iter().map(|v| transform * *v));
        self.tex_coords.extend_from_slice(&geometry.tex_coords);
        self.faces.extend_from_slice(&geometry.faces);
        self.tex_faces.extend_from_slice(&geometry.tex_faces);
    }
}

/// A clip-space vertex mapped to the screen: pixel x/y, NDC z, and 1/w for
/// perspective-correct attribute interpolation.
#[derive(Clone, Copy)]
struct ScreenVertex {
    x: f32,
    y: f32,
    z: f32,
    inv_w: f32,
}

/// Rasterize every triangle in `buf` with the given draw state.
pub fn draw(frame: &mut Frame, buf: &ObjBuf, shading: &Shading) -> DrawStats {
    let mut stats = DrawStats::default();
    let (w, h) = (frame.width() as f32, frame.height() as f32);

    for (face, tex_face) in buf.faces.iter().zip(&buf.tex_faces) {
        let clip = [
            buf.vertices[face[0] as usize],
            buf.vertices[face[1] as usize],
            buf.vertices[face[2] as usize],
        ];

        // Reject triangles that touch or cross the camera plane instead of
        // clipping them.
        if clip.iter().any(|v| v.w <= f32::EPSILON) {
            stats.culled += 1;
            continue;
        }

        let screen = clip.map(|v| {
            let inv_w = 1.0 / v.w;
            ScreenVertex {
                x: (v.x * inv_w + 1.0) * 0.5 * w,
                y: (1.0 - v.y * inv_w) * 0.5 * h,
                z: v.z * inv_w,
                inv_w,
            }
        });
        let [a, b, c] = screen;

        let area = edge(&a, &b, c.x, c.y);
        if area == 0.0 {
            stats.culled += 1;
            continue;
        }
        stats.filled += 1;

        let uv = match shading {
            Shading::Textured(_) if !buf.tex_coords.is_empty() => Some([
                buf.tex_coords[tex_face[0] as usize],
                buf.tex_coords[tex_face[1] as usize],
                buf.tex_coords[tex_face[2] as usize],
            ]),
            _ => None,
        };

        let min_x = a.x.min(b.x).min(c.x).floor().max(0.0) as u32;
        let max_x = (a.x.max(b.x).max(c.x).ceil()).min(w - 1.0) as u32;
        let min_y = a.y.min(b.y).min(c.y).floor().max(0.0) as u32;
        let max_y = (a.y.max(b.y).max(c.y).ceil()).min(h - 1.0) as u32;

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let (px, py) = (x as f32 + 0.5, y as f32 + 0.5);
                // Barycentric weights; dividing by the signed area keeps them
                // positive for either winding.
                let w0 = edge(&b, &c, px, py) / area;
                let w1 = edge(&c, &a, px, py) / area;
                let w2 = edge(&a, &b, px, py) / area;
                if w0 < 0.0 || w1 < 0.0 || w2 < 0.0 {
                    continue;
                }

                let z = w0 * a.z + w1 * b.z + w2 * c.z;
                if !(-1.0..=1.0).contains(&z) {
                    continue;
                }

                let color = match (shading, &uv) {
                    (Shading::Flat(g), _) => *g,
                    (Shading::Textured(tex), Some(uv)) => {
                        let inv_w = w0 * a.inv_w + w1 * b.inv_w + w2 * c.inv_w;
                        let u = (w0 * uv[0].x * a.inv_w
                            + w1 * uv[1].x * b.inv_w
                            + w2 * uv[2].x * c.inv_w)
                            / inv_w;
                        let v = (w0 * uv[0].y * a.inv_w
                            + w1 * uv[1].y * b.inv_w
                            + w2 * uv[2].y * c.inv_w)
                            / inv_w;
                        let (g, alpha) = tex.sample(u, v);
                        if alpha < u8::MAX / 2 {
                            continue;
                        }
                        g
                    }
                    // Textured material on geometry without texture
                    // coordinates draws at full intensity.
                    (Shading::Textured(_), None) => u8::MAX,
                };

                frame.plot(x, y, color, (z + 1.0) * 0.5);
                stats.fragments += 1;
            }
        }
    }

    stats
}

fn edge(a: &ScreenVertex, b: &ScreenVertex, px: f32, py: f32) -> f32 {
    (b.x - a.x) * (py - a.y) - (b.y - a.y) * (px - a.x)
}

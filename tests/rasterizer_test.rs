use grisaille::data_structures::geometry::Geometry;
use grisaille::data_structures::texture::{PixelFmt, TexReadOpts, Texture};
use grisaille::rasterizer::frame::Frame;
use grisaille::rasterizer::raster::{self, ObjBuf, Shading};
use grisaille::{Matrix4, SquareMatrix, Vector2, Vector4};

/// One clip-space triangle large enough to cover the whole frame.
fn fullscreen_triangle(z: f32) -> Geometry {
    Geometry {
        vertices: vec![
            Vector4::new(-1.0, -1.0, z, 1.0),
            Vector4::new(3.0, -1.0, z, 1.0),
            Vector4::new(-1.0, 3.0, z, 1.0),
        ],
        tex_coords: vec![
            Vector2::new(0.0, 0.0),
            Vector2::new(2.0, 0.0),
            Vector2::new(0.0, 2.0),
        ],
        faces: vec![[0, 1, 2]],
        tex_faces: vec![[0, 1, 2]],
    }
}

#[test]
fn clear_resets_color() {
    let mut frame = Frame::new(4, 4);
    frame.clear(0.5, 1.0);
    assert_eq!(frame.get(0, 0), 127);
    assert_eq!(frame.get(3, 3), 127);
}

#[test]
fn flat_triangle_fills_interior() {
    let mut frame = Frame::new(8, 8);
    let mut buf = ObjBuf::new(16);
    buf.load(&fullscreen_triangle(0.0), &Matrix4::identity());

    let stats = raster::draw(&mut frame, &buf, &Shading::Flat(200));
    assert_eq!(stats.filled, 1);
    assert_eq!(stats.culled, 0);
    assert!(stats.fragments > 0);
    assert_eq!(frame.get(4, 4), 200);
}

#[test]
fn depth_test_keeps_the_nearer_fragment() {
    let mut frame = Frame::new(8, 8);
    let mut buf = ObjBuf::new(16);

    buf.load(&fullscreen_triangle(-0.5), &Matrix4::identity());
    raster::draw(&mut frame, &buf, &Shading::Flat(200));

    buf.load(&fullscreen_triangle(0.5), &Matrix4::identity());
    raster::draw(&mut frame, &buf, &Shading::Flat(100));

    assert_eq!(frame.get(4, 4), 200);
}

#[test]
fn triangle_behind_the_camera_plane_is_culled() {
    let mut frame = Frame::new(8, 8);
    let geometry = Geometry {
        vertices: vec![
            Vector4::new(-1.0, -1.0, 0.0, 0.0),
            Vector4::new(3.0, -1.0, 0.0, 1.0),
            Vector4::new(-1.0, 3.0, 0.0, 1.0),
        ],
        tex_coords: vec![],
        faces: vec![[0, 1, 2]],
        tex_faces: vec![[0, 1, 2]],
    };
    let mut buf = ObjBuf::new(16);
    buf.load(&geometry, &Matrix4::identity());

    let stats = raster::draw(&mut frame, &buf, &Shading::Flat(200));
    assert_eq!(stats.culled, 1);
    assert_eq!(stats.fragments, 0);
    assert_eq!(frame.get(4, 4), 0);
}

#[test]
fn transparent_texels_are_discarded() {
    let img = image::DynamicImage::ImageLumaA8(
        image::GrayAlphaImage::from_raw(1, 1, vec![200, 0]).unwrap(),
    );
    let tex = Texture::from_image(&img, &TexReadOpts::default());
    assert_eq!(tex.format(), PixelFmt::GA8);

    let mut frame = Frame::new(8, 8);
    let mut buf = ObjBuf::new(16);
    buf.load(&fullscreen_triangle(0.0), &Matrix4::identity());

    let stats = raster::draw(&mut frame, &buf, &Shading::Textured(&tex));
    assert_eq!(stats.fragments, 0);
    assert_eq!(frame.get(4, 4), 0);
}

#[test]
fn textured_triangle_samples_the_texture() {
    let img = image::DynamicImage::ImageLuma8(
        image::GrayImage::from_raw(1, 1, vec![170]).unwrap(),
    );
    let tex = Texture::from_image(&img, &TexReadOpts::default());
    assert_eq!(tex.format(), PixelFmt::G8);

    let mut frame = Frame::new(8, 8);
    let mut buf = ObjBuf::new(16);
    buf.load(&fullscreen_triangle(0.0), &Matrix4::identity());

    raster::draw(&mut frame, &buf, &Shading::Textured(&tex));
    assert_eq!(frame.get(4, 4), 170);
}

#[test]
fn force_g8_drops_the_alpha_channel() {
    let img = image::DynamicImage::ImageLumaA8(
        image::GrayAlphaImage::from_raw(1, 1, vec![200, 0]).unwrap(),
    );
    let opts = TexReadOpts { force_g8: true, alpha_fill: None };
    let tex = Texture::from_image(&img, &opts);

    assert_eq!(tex.format(), PixelFmt::G8);
    assert_eq!(tex.sample(0.5, 0.5), (200, u8::MAX));
}

#[test]
fn alpha_fill_synthesizes_a_constant_alpha() {
    let img = image::DynamicImage::ImageLuma8(
        image::GrayImage::from_raw(1, 1, vec![200]).unwrap(),
    );
    let opts = TexReadOpts { force_g8: false, alpha_fill: Some(7) };
    let tex = Texture::from_image(&img, &opts);

    assert_eq!(tex.format(), PixelFmt::GA8);
    assert_eq!(tex.sample(0.5, 0.5), (200, 7));
}

use anyhow::Result;

use grisaille::camera::CameraState;
use grisaille::context::RenderContext;
use grisaille::render::render_scene;
use grisaille::resources::load_gltf;

const SCREEN_SIZE_X: u32 = 800;
const SCREEN_SIZE_Y: u32 = 600;
/// Scratch-buffer headroom for the largest primitive expected in a scene.
const OBJ_BUF_CAPACITY: usize = 100_000;
const OUTPUT_FILE: &str = "out.png";

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let (Some(path), None) = (args.next(), args.next()) else {
        eprintln!("usage: grisaille <scene.gltf>");
        std::process::exit(1);
    };

    if let Err(err) = run(&path) {
        log::error!("{err:#}");
        std::process::exit(1);
    }
}

fn run(path: &str) -> Result<()> {
    let mut ctx = RenderContext::new(SCREEN_SIZE_X, SCREEN_SIZE_Y, OBJ_BUF_CAPACITY);
    let scene = load_gltf(path, CameraState::default(), ctx.frame.aspect())?;

    ctx.transform = scene.camera.view_proj();
    ctx.frame.clear(0.0, 1.0);
    render_scene(&mut ctx, &scene);
    ctx.frame.save(OUTPUT_FILE)
}

use std::error::Error;
use std::path::Path;

use clap::Parser;
use log::{error, info, warn};

use mirrorball::output::save_image;
use mirrorball::{Animation, Camera, Scene};

mod cli;
mod logger;

use cli::Args;
use logger::init_logger;

/// Create camera from command line settings
fn create_camera(args: &Args) -> Camera {
    let mut camera = Camera::new();
    camera.image_width = args.width;
    camera.image_height = args.height;
    camera.max_depth = args.depth;
    camera.fov = args.fov;
    camera.lookfrom = args.look_from;
    camera.lookat = args.look_at;
    camera.vup = args.up;
    camera
}

/// Render a single frame and save it to the output path
fn render_still(scene: &Scene, camera: &mut Camera, output: &Path) -> Result<(), Box<dyn Error>> {
    let image = camera.render(scene)?;
    save_image(&image, output)?;
    Ok(())
}

/// Render every animation frame into frames_dir, one after the other
fn render_animation(scene: Scene, camera: &mut Camera, args: &Args) -> Result<(), Box<dyn Error>> {
    let animation = Animation::new(scene, args.frames)?;
    std::fs::create_dir_all(&args.frames_dir)?;

    for (i, frame) in animation.iter() {
        let out_path = args.frames_dir.join(format!("frame_{}.ppm", i));
        let image = camera.render(&frame)?;
        save_image(&image, &out_path)?;
        info!("[{}/{}] OK -> {}", i, animation.frames(), out_path.display());
    }

    info!("Animation frames written to {}", args.frames_dir.display());
    Ok(())
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let scene = Scene::load(&args.scene)?;
    if scene.spheres.is_empty() {
        warn!("No spheres loaded from {}, the image will be empty", args.scene.display());
    }

    info!(
        "Image resolution: {}x{}, recursion depth: {}",
        args.width, args.height, args.depth
    );
    let mut camera = create_camera(args);

    if args.animate {
        render_animation(scene, &mut camera, args)
    } else {
        render_still(&scene, &mut camera, &args.output)
    }
}

fn main() {
    let args = Args::parse();

    init_logger(args.debug_level.clone().into());

    // Log application startup with version information
    info!("Mirrorball - Git Version {} ({})", env!("GIT_HASH"), env!("GIT_DATE"));

    if let Some(threads) = args.threads {
        if let Err(e) = rayon::ThreadPoolBuilder::new().num_threads(threads).build_global() {
            warn!("Failed to configure {} render threads: {}", threads, e);
        }
    }

    if let Err(e) = run(&args) {
        error!("{}", e);
        std::process::exit(1);
    }
}

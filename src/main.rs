use std::error::Error;

use clap::Parser;
use log::{info, LevelFilter};

use penumbra::{DistanceMetric, Renderer, SceneDescription};

use crate::cli::Args;

mod cli;

fn init_logger(level: LevelFilter) {
    env_logger::Builder::from_default_env().filter_level(level).init();
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    init_logger(args.log_level.clone().into());

    let mut description = match &args.scene {
        Some(path) => {
            info!("loading scene from {}", path.display());
            SceneDescription::load(path)?
        }
        None => {
            info!("no scene given, using the reference scene");
            SceneDescription::reference()
        }
    };

    if let Some(width) = args.width {
        description.image.width = width;
    }
    if let Some(height) = args.height {
        description.image.height = height;
    }
    if let Some(shininess) = args.shininess {
        description.shininess = shininess;
    }
    if args.hit_distance {
        description.distance_metric = DistanceMetric::HitPoint;
    }

    let (scene, camera, resolution) = description.build()?;
    scene.warn_if_degenerate();

    let mut renderer = Renderer::new(resolution);
    renderer.render(&scene, &camera);

    if let Some(frame) = renderer.take() {
        frame.to_image().save(&args.output).map_err(penumbra::Error::from)?;
        info!("render saved to {}", args.output.display());
    }

    Ok(())
}

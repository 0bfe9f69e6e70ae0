use std::{fs::File, io::BufWriter, time::Instant};

use anyhow::Context;
use clap::Parser;

mod camera;
mod color;
mod config;
mod hit;
mod ppm;
mod ray;
mod render;
mod sphere;

use camera::Camera;
use color::Color;
use config::Config;
use hit::Hit;
use ppm::PpmWriter;
use ray::Ray;
use render::Scene;
use sphere::Sphere;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::parse();
    let scene = Scene::centered(config.width, config.height);
    let camera = Camera::orthographic(config.width, config.height);
    log::debug!("{:?}", scene);

    let file = File::create(&config.output)
        .with_context(|| format!("failed to create {}", config.output.display()))?;

    log::info!(
        "rendering {}x{} to {}",
        config.width,
        config.height,
        config.output.display()
    );
    let start = Instant::now();
    let (_, stats) = render::render(&scene, &camera, BufWriter::new(file))
        .with_context(|| format!("failed to write {}", config.output.display()))?;
    log::info!(
        "wrote {} pixels ({} hits) in {:?}",
        stats.pixels,
        stats.hits,
        start.elapsed()
    );
    Ok(())
}

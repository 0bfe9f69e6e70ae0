use std::io::{self, Write};

use nalgebra::Vector3;

use crate::{Camera, Color, Hit, PpmWriter, Sphere};

pub const SPHERE_DEPTH: f64 = 50.0;
pub const SPHERE_RADIUS: f64 = 150.0;

/// One lit sphere. The light is a sphere too, but only its center matters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scene {
    pub sphere: Sphere,
    pub light: Sphere,
}

impl Scene {
    /// Sphere centered on the image (integer halves), light at the origin.
    pub fn centered(width: usize, height: usize) -> Self {
        Self {
            sphere: Sphere::new(
                Vector3::new((width / 2) as f64, (height / 2) as f64, SPHERE_DEPTH),
                SPHERE_RADIUS,
            ),
            light: Sphere::new(Vector3::zeros(), 1.0),
        }
    }

    pub fn shade(&self, x: usize, y: usize, camera: &Camera) -> Option<Color> {
        let ray = camera.cast(x, y);
        let t = self.sphere.intersect(ray)?;

        let pi = ray.at(t);
        let l = self.light.center - pi;
        let n = self.sphere.normal_at(pi);

        // unclamped
        let diffuse = l.normalize().dot(&n.normalize());

        Some((Color::RED + Color::WHITE * diffuse).cap())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Stats {
    pub pixels: usize,
    pub hits: usize,
}

/// Renders the whole raster in row-major order, streaming it to `out`.
pub fn render<W: Write>(scene: &Scene, camera: &Camera, out: W) -> io::Result<(W, Stats)> {
    let (width, height) = (camera.image_width(), camera.image_height());
    let mut ppm = PpmWriter::new(out, width, height)?;
    let mut stats = Stats::default();

    for y in 0..height {
        for x in 0..width {
            let pixel = match scene.shade(x, y, camera) {
                Some(color) => {
                    stats.hits += 1;
                    color
                }
                None => Color::BLACK,
            };
            ppm.write_pixel(pixel)?;
        }
    }

    stats.pixels = ppm.pixels_written();
    Ok((ppm.finish()?, stats))
}

use nalgebra::Vector3;

use crate::Ray;

/// Casts one ray per pixel straight down +z from the image plane at z = 0.
#[derive(Clone, Debug)]
pub struct Camera {
    image_width: usize,
    image_height: usize,
    direction: Vector3<f64>,
}

impl Camera {
    pub fn orthographic(image_width: usize, image_height: usize) -> Self {
        Self {
            image_width,
            image_height,
            direction: Vector3::new(0.0, 0.0, 1.0),
        }
    }

    pub fn image_width(&self) -> usize {
        self.image_width
    }

    pub fn image_height(&self) -> usize {
        self.image_height
    }

    pub fn cast(&self, x: usize, y: usize) -> Ray {
        Ray::new(Vector3::new(x as f64, y as f64, 0.0), self.direction)
    }
}

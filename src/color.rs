use std::ops::{Add, Mul};

/// An RGB triple nominally in `[0, 255]`. Channels are only guaranteed to be
/// in range after [`Color::cap`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::new(255.0, 255.0, 255.0);
    pub const RED: Self = Self::new(255.0, 0.0, 0.0);

    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Clamps every channel into `[0, 255]`. NaN channels pass through.
    pub fn cap(self) -> Self {
        Self::new(clamp(self.r), clamp(self.g), clamp(self.b))
    }

    /// Channels truncated toward zero, the way they are written out.
    pub fn to_rgb(&self) -> (i64, i64, i64) {
        (self.r as i64, self.g as i64, self.b as i64)
    }
}

fn clamp(a: f64) -> f64 {
    if a < 0.0 {
        0.0
    } else if a > 255.0 {
        255.0
    } else {
        a
    }
}

/// Blends two colors by averaging each channel.
impl Add for Color {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(
            (self.r + rhs.r) / 2.0,
            (self.g + rhs.g) / 2.0,
            (self.b + rhs.b) / 2.0,
        )
    }
}

impl Mul<f64> for Color {
    type Output = Self;

    fn mul(self, k: f64) -> Self {
        Self::new(self.r * k, self.g * k, self.b * k)
    }
}

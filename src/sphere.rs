use crate::{Hit, Ray};
use nalgebra::Vector3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere {
    pub center: Vector3<f64>,
    pub radius: f64,
}

impl Sphere {
    pub fn new(center: Vector3<f64>, radius: f64) -> Self {
        Self { center, radius }
    }
}

impl Hit for Sphere {
    // Roots are not halved and negative t is accepted.
    fn intersect(&self, ray: Ray) -> Option<f64> {
        let oc = ray.origin - self.center;
        let b = 2.0 * oc.dot(&ray.direction);
        let c = oc.dot(&oc) - self.radius * self.radius;
        let d = b * b - 4.0 * c;

        if d < 0.0 {
            return None;
        }

        let sqrt_d = d.sqrt();
        let t0 = -b - sqrt_d;
        let t1 = -b + sqrt_d;

        // keeps t0 when either root is NaN
        Some(if t1 < t0 { t1 } else { t0 })
    }

    /// Assumes `point` lies on the surface; otherwise the result is not unit length.
    fn normal_at(&self, point: Vector3<f64>) -> Vector3<f64> {
        (point - self.center) / self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forward(x: f64, y: f64) -> Ray {
        Ray::new(Vector3::new(x, y, 0.0), Vector3::new(0.0, 0.0, 1.0))
    }

    #[test]
    fn test_miss_when_discriminant_negative() {
        let sphere = Sphere::new(Vector3::new(320.0, 240.0, 50.0), 150.0);
        assert_eq!(sphere.intersect(forward(0.0, 0.0)), None);
        assert_eq!(sphere.intersect(forward(320.0, 391.0)), None);
    }

    #[test]
    fn test_center_hit_uses_unhalved_root() {
        let sphere = Sphere::new(Vector3::new(320.0, 240.0, 50.0), 150.0);
        // b = -100, c = -20000, d = 90000
        assert_eq!(sphere.intersect(forward(320.0, 240.0)), Some(-200.0));
    }

    #[test]
    fn test_tangent_ray_hits() {
        let sphere = Sphere::new(Vector3::new(0.0, 0.0, 10.0), 2.0);
        // oc = (2, 0, -10): b = -20, c = 100, d = 0
        assert_eq!(sphere.intersect(forward(2.0, 0.0)), Some(20.0));
    }

    #[test]
    fn test_hit_matches_formula_for_arbitrary_ray() {
        let sphere = Sphere::new(Vector3::new(1.0, -2.0, 3.0), 4.0);
        let ray = Ray::new(Vector3::new(0.5, 0.0, -1.0), Vector3::new(0.1, -0.3, 0.9));
        let oc = ray.origin - sphere.center;
        let b = 2.0 * oc.dot(&ray.direction);
        let c = oc.dot(&oc) - 16.0;
        let d = b * b - 4.0 * c;
        assert!(d >= 0.0);
        assert_eq!(sphere.intersect(ray), Some(-b - d.sqrt()));
    }

    #[test]
    fn test_nan_near_root_is_kept() {
        // b overflows to -inf, so t0 = inf - inf and t1 = inf
        let sphere = Sphere::new(Vector3::new(1e10, 0.0, 0.0), 1.0);
        let ray = Ray::new(Vector3::zeros(), Vector3::new(1e300, 0.0, 0.0));
        let t = sphere.intersect(ray).unwrap();
        assert!(t.is_nan());
    }

    #[test]
    fn test_sphere_behind_origin_still_hits() {
        let sphere = Sphere::new(Vector3::new(0.0, 0.0, -50.0), 10.0);
        let t = sphere.intersect(forward(0.0, 0.0)).unwrap();
        assert!(t < 0.0);
    }

    #[test]
    fn test_normal_at_surface_is_unit() {
        let sphere = Sphere::new(Vector3::new(320.0, 240.0, 50.0), 150.0);
        let n = sphere.normal_at(Vector3::new(320.0, 240.0, -100.0));
        assert_eq!(n, Vector3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_normal_at_off_surface_scales_by_radius() {
        let sphere = Sphere::new(Vector3::zeros(), 2.0);
        assert_eq!(sphere.normal_at(Vector3::new(6.0, 0.0, 0.0)), Vector3::new(3.0, 0.0, 0.0));
    }
}

use crate::Ray;
use nalgebra::Vector3;

pub(crate) trait Hit {
    /// Distance along `ray` to the reported intersection, if any.
    fn intersect(&self, ray: Ray) -> Option<f64>;

    fn normal_at(&self, point: Vector3<f64>) -> Vector3<f64>;
}

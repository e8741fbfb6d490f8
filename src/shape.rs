use crate::{Hittable, Ray, Vec3};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sphere {
    pub center: Vec3,
    /// Spheres with a radius `<= 0` are never hit
    pub radius: f64,
}
impl Sphere {
    pub fn new(center: Vec3, radius: f64) -> Self {
        Self { center, radius }
    }

    pub fn from(c: [f64; 3], radius: f64) -> Self {
        Self::new(c.into(), radius)
    }

    fn is_degenerate(&self) -> bool {
        !(self.radius > 0.) || !self.radius.is_finite()
    }
}
impl Hittable for Sphere {
    fn intersect(&self, ray: &Ray) -> Option<f64> {
        if self.is_degenerate() {
            return None;
        }
        let dir = Vec3::normalized(ray.dir)?;

        let oc = ray.origin - self.center;
        let tca = dir.dot(oc);
        let disciminant = tca.powi(2) - oc.norm_squared() + self.radius.powi(2);
        if disciminant < 0. {
            return None;
        }

        Some(-tca - disciminant.sqrt())
    }

    fn normal_at(&self, point: Vec3) -> Option<Vec3> {
        Vec3::normalized(point - self.center)
    }
}

use crate::Vec3;

/// Constant `k` of the falloff law `1 / (1 + k * d^2)`
pub const ATTENUATION: f64 = 0.3;

/// A point light.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Light {
    pub position: Vec3,
    /// Conventionally in `[0, 1]` but never clamped
    pub intensity: f64,
}
impl Light {
    pub fn new(position: Vec3, intensity: f64) -> Self {
        Self {
            position,
            intensity,
        }
    }

    pub fn from(p: [f64; 3], intensity: f64) -> Self {
        Self::new(p.into(), intensity)
    }

    /// Inverse square falloff, offset so it stays finite (and `<= 1`) near the light.
    pub fn attenuation(distance: f64) -> f64 {
        1. / (1. + ATTENUATION * distance.powi(2))
    }

    /// Diffuse contribution of this light to a surface `point` with unit `normal`.
    /// Occlusion isn't considered here.
    pub fn contribution(&self, point: Vec3, normal: Vec3) -> f64 {
        let to_light = self.position - point;
        let light_dir = match Vec3::normalized(to_light) {
            Some(dir) => dir,
            None => return 0.,
        };
        let coefficient = normal.dot(light_dir).max(0.);
        coefficient * Self::attenuation(to_light.norm()) * self.intensity
    }
}

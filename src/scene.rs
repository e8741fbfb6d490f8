use crate::{Light, Sphere};

/// Everything a render pass traces against. Read-only while a frame is rendered.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    pub spheres: Vec<Sphere>,
    pub lights: Vec<Light>,
}
impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_sphere(&mut self, sphere: Sphere) -> &mut Self {
        self.spheres.push(sphere);
        self
    }

    pub fn push_light(&mut self, light: Light) -> &mut Self {
        self.lights.push(light);
        self
    }
}

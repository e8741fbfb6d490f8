use crate::Vec3;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    /// Not necessarily unit length
    pub dir: Vec3,
}
impl Ray {
    pub fn new(origin: Vec3, dir: Vec3) -> Self {
        Self { origin, dir }
    }

    pub fn at(&self, t: f64) -> Vec3 {
        self.origin + t * self.dir
    }

    /// The same ray with a unit-length direction, or `None` if the direction has length 0.
    pub fn normalized(&self) -> Option<Self> {
        Vec3::normalized(self.dir).map(|dir| Self::new(self.origin, dir))
    }
}

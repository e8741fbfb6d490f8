use std::fmt;
use std::ops;

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}
impl Vec3 {
    pub const ORIGIN: Self = Self::new(0., 0., 0.);
    // The standard basis
    pub const UNIT_X: Self = Self::new(1., 0., 0.);
    pub const UNIT_Y: Self = Self::new(0., 1., 0.);
    pub const UNIT_Z: Self = Self::new(0., 0., 1.);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Returns `None` when `v` has length 0 (or isn't finite).
    ///
    /// # Example
    /// ```
    /// # use ascii_raytracer::vec3::Vec3;
    /// let a = Vec3::new(3., 0., 4.);
    /// let b = Vec3::normalized(a).unwrap();
    /// assert_eq!(b, Vec3::new(0.6, 0., 0.8));
    /// assert!(Vec3::normalized(Vec3::ORIGIN).is_none());
    /// ```
    pub fn normalized(v: Vec3) -> Option<Self> {
        let norm = v.norm();
        if norm == 0. || !norm.is_finite() {
            return None;
        }
        Some(v / norm)
    }

    /// Linear interpolation from `src` (at `t = 0`) to `tgt` (at `t = 1`).
    ///
    /// # Example
    /// ```
    /// # use ascii_raytracer::vec3::Vec3;
    /// let a = Vec3::new(0., 2., 4.);
    /// let b = Vec3::new(2., 4., 8.);
    /// assert_eq!(Vec3::lerp(a, b, 0.5), Vec3::new(1., 3., 6.));
    /// ```
    pub fn lerp(src: Vec3, tgt: Vec3, t: f64) -> Self {
        src + (tgt - src) * t
    }

    pub fn norm(&self) -> f64 {
        self.norm_squared().sqrt()
    }

    pub fn norm_squared(&self) -> f64 {
        self.dot(*self)
    }

    /// # Example
    /// ```
    /// # use ascii_raytracer::vec3::Vec3;
    /// let a = Vec3::new(4., 8., 10.);
    /// let b = Vec3::new(9., 2., 7.);
    /// assert_eq!(a.dot(b), 122.);
    /// ```
    pub fn dot(&self, rhs: Vec3) -> f64 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    /// Distance between two points
    pub fn distance(&self, rhs: Vec3) -> f64 {
        (*self - rhs).norm()
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl From<[f64; 3]> for Vec3 {
    fn from(v: [f64; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

impl ops::Neg for Vec3 {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl ops::Add for Vec3 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

impl ops::Sub for Vec3 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

impl ops::Mul<f64> for Vec3 {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self {
            x: self.x * rhs,
            y: self.y * rhs,
            z: self.z * rhs,
        }
    }
}
impl ops::Mul<Vec3> for f64 {
    type Output = Vec3;

    fn mul(self, rhs: Vec3) -> Self::Output {
        rhs * self
    }
}

impl ops::Div<f64> for Vec3 {
    type Output = Self;

    fn div(self, rhs: f64) -> Self::Output {
        Self {
            x: self.x / rhs,
            y: self.y / rhs,
            z: self.z / rhs,
        }
    }
}

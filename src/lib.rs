pub mod config;
pub mod driver;
pub mod hit;
pub mod light;
pub mod ray;
pub mod scene;
pub mod screen;
pub mod shape;
pub mod tracer;
pub mod vec3;

pub use hit::{Hit, HitList, Hittable};
pub use light::Light;
pub use ray::Ray;
pub use scene::Scene;
pub use screen::{Camera, Projection, Screen};
pub use shape::Sphere;
pub use tracer::trace;
pub use vec3::Vec3;

pub type CrateRng = rand::rngs::SmallRng;

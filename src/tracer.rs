use crate::{HitList, Ray, Scene};

/// Distance a hit point is pushed along its normal before casting shadow rays
pub const SHADOW_BIAS: f64 = 1e-3;

/// Returns the intensity seen along `ray`. `0.` is the background.
///
/// The result is the sum of the diffuse contributions of every light that isn't blocked by
/// a sphere. It is not clamped.
pub fn trace(ray: &Ray, scene: &Scene) -> f64 {
    let ray = match ray.normalized() {
        Some(ray) => ray,
        None => return 0.,
    };
    let hit = match scene.spheres.nearest(&ray) {
        Some(hit) => hit,
        None => return 0.,
    };

    // Avoid shadow acne
    let point = hit.point + SHADOW_BIAS * hit.normal;

    scene
        .lights
        .iter()
        .filter(|light| {
            let shadow_ray = Ray::new(point, light.position - point);
            !scene.spheres.occludes(&shadow_ray)
        })
        .map(|light| light.contribution(point, hit.normal))
        .sum()
}

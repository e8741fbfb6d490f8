use std::fmt::Debug;

use crate::{Ray, Vec3};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Hit {
    pub point: Vec3,
    /// A unit-length normal vector
    pub normal: Vec3,
    /// Distance along the normalized ray
    pub distance: f64,
}
impl Hit {
    pub fn new(point: Vec3, normal: Vec3, distance: f64) -> Self {
        Self {
            point,
            normal,
            distance,
        }
    }
}

pub trait Hittable: Sync + Debug {
    /// Signed distance along the normalized direction of `ray` to the near intersection.
    /// Returns `None` if the ray misses. The distance is negative when the intersection lies
    /// behind the origin of the ray.
    fn intersect(&self, ray: &Ray) -> Option<f64>;

    /// Outward unit-length normal at a point on the surface.
    fn normal_at(&self, point: Vec3) -> Option<Vec3>;

    /// Returns the hit in front of the origin of `ray`, if there is one.
    fn hit(&self, ray: &Ray) -> Option<Hit> {
        let ray = ray.normalized()?;
        let t = self.intersect(&ray).filter(|&t| t > 0.)?;
        let point = ray.at(t);
        Some(Hit::new(point, self.normal_at(point)?, t))
    }
}

/// Queries over an ordered collection of `Hittable`s.
pub trait HitList {
    /// Returns the closest hit in front of the ray's origin. Ties keep the earlier object.
    fn nearest(&self, ray: &Ray) -> Option<Hit>;

    /// Whether any object is hit in front of the ray's origin.
    fn occludes(&self, ray: &Ray) -> bool;
}
impl<T: Hittable> HitList for [T] {
    fn nearest(&self, ray: &Ray) -> Option<Hit> {
        let mut closest: Option<Hit> = None;
        for hit in self.iter().filter_map(|obj| obj.hit(ray)) {
            match closest {
                Some(best) if best.distance <= hit.distance => {}
                _ => closest = Some(hit),
            }
        }
        closest
    }

    fn occludes(&self, ray: &Ray) -> bool {
        self.iter().any(|obj| obj.hit(ray).is_some())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::shape::Sphere;

    fn spheres() -> Vec<Sphere> {
        vec![
            Sphere::from([0., 0., 10.], 1.),
            Sphere::from([0., 0., 5.], 1.),
            Sphere::from([0., 3., 5.], 1.),
        ]
    }

    #[test]
    fn nearest_ignores_list_order() {
        let ray = Ray::new(Vec3::ORIGIN, Vec3::new(0., 0., 2.));
        let mut list = spheres();
        let hit = list.nearest(&ray).unwrap();
        assert!((hit.distance - 4.).abs() < 1e-9);
        assert_eq!(hit.normal, Vec3::new(0., 0., -1.));

        list.reverse();
        let hit = list.nearest(&ray).unwrap();
        assert!((hit.distance - 4.).abs() < 1e-9);
    }

    #[test]
    fn nearest_skips_hits_behind_origin() {
        let ray = Ray::new(Vec3::new(0., 0., 7.), Vec3::UNIT_Z);
        let hit = spheres().nearest(&ray).unwrap();
        assert!((hit.distance - 2.).abs() < 1e-9);
    }

    #[test]
    fn nearest_agrees_with_single_hits() {
        let list = spheres();
        for ray in &[
            Ray::new(Vec3::ORIGIN, Vec3::new(0., 0., 2.)),
            Ray::new(Vec3::new(0., 0., 7.), Vec3::UNIT_Z),
            Ray::new(Vec3::new(0., 3., 0.), Vec3::UNIT_Z),
            Ray::new(Vec3::new(0., 0., 5.), Vec3::UNIT_Z),
        ] {
            let best = list
                .iter()
                .filter_map(|s| s.hit(ray))
                .min_by(|a, b| a.distance.partial_cmp(&b.distance).unwrap());
            assert_eq!(list.nearest(ray), best, "{:?}", ray);
            assert_eq!(list.occludes(ray), best.is_some(), "{:?}", ray);
        }
    }

    #[test]
    fn empty_list_never_hits() {
        let list: Vec<Sphere> = Vec::new();
        let ray = Ray::new(Vec3::ORIGIN, Vec3::UNIT_Z);
        assert!(list.nearest(&ray).is_none());
        assert!(!list.occludes(&ray));
    }

    #[test]
    fn occlusion() {
        let list = spheres();
        assert!(list.occludes(&Ray::new(Vec3::ORIGIN, Vec3::UNIT_Z)));
        assert!(!list.occludes(&Ray::new(Vec3::ORIGIN, -Vec3::UNIT_Z)));
        assert!(!list.occludes(&Ray::new(Vec3::ORIGIN, Vec3::ORIGIN)));
    }
}

//! Nearest-hit search over the spheres of a scene.
//!
//! Shared by primary, reflected and shadow rays; the only thing that differs
//! between those uses is the parametric interval passed in.

use crate::interval::Interval;
use crate::ray::Ray;
use crate::sphere::Sphere;

/// Nearest intersection found along a ray.
#[derive(Debug, Clone, Copy)]
pub struct Hit<'a> {
    /// Sphere that was hit.
    pub sphere: &'a Sphere,
    /// Ray parameter of the hit point.
    pub t: f64,
}

/// Find the nearest sphere hit with `t` strictly inside `ray_t`.
///
/// Every sphere is tested linearly and both roots of each are considered.
/// Equal `t` values keep the sphere that comes first in the slice.
pub fn closest_intersection<'a>(r: &Ray, ray_t: Interval, spheres: &'a [Sphere]) -> Option<Hit<'a>> {
    let mut closest: Option<Hit<'a>> = None;
    let mut closest_so_far = f64::INFINITY;

    for sphere in spheres {
        let (t1, t2) = sphere.intersect(r);
        for t in [t1, t2] {
            if ray_t.surrounds(t) && t < closest_so_far {
                closest_so_far = t;
                closest = Some(Hit { sphere, t });
            }
        }
    }

    closest
}

//! Ambient, Lambertian diffuse and Phong specular lighting with hard shadows.

use crate::hittable::closest_intersection;
use crate::interval::Interval;
use crate::light::Light;
use crate::ray::Ray;
use crate::sphere::Sphere;
use crate::vector::{normalize, reflect, Vec3};
use crate::EPS;

/// Scalar light intensity arriving at `point`.
///
/// `normal` must be a unit vector; `view` points from the surface toward the
/// viewer and may have any length. `specular` is the Phong exponent, `None`
/// for a matte surface. The result is not clamped and may exceed 1.0.
///
/// Each non-ambient light is shadow tested on its own: an occluder between
/// the point and one light removes only that light's diffuse and specular
/// terms.
pub fn compute_lighting(
    point: Vec3,
    normal: Vec3,
    view: Vec3,
    specular: Option<i32>,
    spheres: &[Sphere],
    lights: &[Light],
) -> f64 {
    let mut intensity = 0.0;
    let shadow_origin = point + normal * EPS;

    for light in lights {
        // Vector toward the light and how far along it an occluder may sit
        let (to_light, t_max) = match *light {
            Light::Ambient { intensity: ambient } => {
                intensity += ambient;
                continue;
            }
            // Unnormalized, so t = 1 is the light itself
            Light::Point { position, .. } => (position - point, 1.0),
            Light::Directional { direction, .. } => (direction, f64::INFINITY),
        };

        let shadow_ray = Ray::new(shadow_origin, to_light);
        if closest_intersection(&shadow_ray, Interval::new(EPS, t_max), spheres).is_some() {
            continue;
        }

        let light_dir = normalize(to_light);
        let n_dot_l = normal.dot(light_dir);
        if n_dot_l > 0.0 {
            intensity += light.intensity() * n_dot_l;
        }

        if let Some(exponent) = specular {
            let r = reflect(light_dir, normal);
            let r_dot_v = r.dot(normalize(view));
            if r_dot_v > 0.0 {
                intensity += light.intensity() * r_dot_v.powi(exponent);
            }
        }
    }

    intensity
}

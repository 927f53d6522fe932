//! Recursive Whitted-style tracer.
//!
//! Combines nearest-hit search, local lighting and mirror reflection into the
//! final 8-bit color seen along one ray.

use image::Rgb;
use log::trace;

use crate::error::RenderError;
use crate::hittable::closest_intersection;
use crate::interval::Interval;
use crate::lighting::compute_lighting;
use crate::ray::Ray;
use crate::scene::Scene;
use crate::vector::{normalize, reflect, Vec3};
use crate::EPS;

/// 8-bit RGB color.
pub type Color = Rgb<u8>;

/// Color returned for rays that hit nothing.
pub const BACKGROUND: Color = Rgb([0, 0, 0]);

/// Trace a ray through the scene and return the color it sees.
///
/// Only hits with `t` strictly inside `ray_t` count. Reflective surfaces spawn
/// a mirror ray while `depth > 0`, so `depth = 0` never recurses.
pub fn trace_ray(r: &Ray, ray_t: Interval, scene: &Scene, depth: u32) -> Color {
    let Some(hit) = closest_intersection(r, ray_t, &scene.spheres) else {
        return BACKGROUND;
    };
    let sphere = hit.sphere;

    let point = r.at(hit.t);
    let normal = normalize(point - sphere.center);
    let view = -r.direction;

    let lighting = compute_lighting(
        point,
        normal,
        view,
        sphere.specular_exponent(),
        &scene.spheres,
        &scene.lights,
    )
    .clamp(0.0, 1.0);

    let local = channels(sphere.color) * lighting;

    let reflective = sphere.reflective;
    if depth == 0 || reflective <= 0.0 {
        return to_color(local);
    }

    let reflected_ray = Ray::new(point + normal * EPS, reflect(view, normal));
    let reflected = trace_ray(&reflected_ray, Interval::from_min(EPS), scene, depth - 1);

    to_color(local * (1.0 - reflective) + channels(reflected) * reflective)
}

/// Validate a ray, then trace it over `(EPS, ∞)`.
///
/// Entry point for primary rays. Rejects non-finite and zero-length rays
/// instead of letting NaNs silently turn into background pixels.
pub fn trace_ray_checked(r: &Ray, scene: &Scene, depth: u32) -> Result<Color, RenderError> {
    r.validate()?;
    let color = trace_ray(r, Interval::from_min(EPS), scene, depth);
    trace!("traced {:?} -> {:?}", r, color);
    Ok(color)
}

fn channels(c: Color) -> Vec3 {
    Vec3::new(c[0] as f64, c[1] as f64, c[2] as f64)
}

/// Clamp each channel to [0, 255] and truncate toward zero.
fn to_color(v: Vec3) -> Color {
    let channel = |x: f64| x.clamp(0.0, 255.0) as u8;
    Rgb([channel(v.x), channel(v.y), channel(v.z)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::light::Light;
    use crate::sphere::Sphere;

    fn ambient(intensity: f64) -> Vec<Light> {
        vec![Light::Ambient { intensity }]
    }

    /// Blue mirror ahead of the camera, red matte sphere behind it.
    fn mirror_scene(reflective: f64) -> Scene {
        Scene::new(
            vec![
                Sphere::new(Vec3::new(0.0, 0.0, 5.0), 1.0, Rgb([0, 0, 255]), -1, reflective),
                Sphere::new(Vec3::new(0.0, 0.0, -5.0), 1.0, Rgb([255, 0, 0]), -1, 0.0),
            ],
            ambient(1.0),
        )
    }

    fn forward() -> Ray {
        Ray::new(Vec3::ZERO, Vec3::Z)
    }

    #[test]
    fn test_miss_returns_background() {
        let scene = Scene::new(Vec::new(), ambient(1.0));
        assert_eq!(trace_ray(&forward(), Interval::from_min(EPS), &scene, 3), BACKGROUND);
    }

    #[test]
    fn test_local_color_scaled_by_lighting() {
        let scene = Scene::new(
            vec![Sphere::new(Vec3::new(0.0, 0.0, 5.0), 1.0, Rgb([200, 100, 50]), -1, 0.0)],
            ambient(0.5),
        );
        assert_eq!(
            trace_ray(&forward(), Interval::from_min(EPS), &scene, 3),
            Rgb([100, 50, 25])
        );
    }

    #[test]
    fn test_lighting_clamped_to_one() {
        let scene = Scene::new(
            vec![Sphere::new(Vec3::new(0.0, 0.0, 5.0), 1.0, Rgb([200, 100, 50]), -1, 0.0)],
            vec![
                Light::Ambient { intensity: 0.8 },
                Light::Point {
                    intensity: 0.8,
                    position: Vec3::ZERO,
                },
            ],
        );
        assert_eq!(
            trace_ray(&forward(), Interval::from_min(EPS), &scene, 3),
            Rgb([200, 100, 50])
        );
    }

    #[test]
    fn test_non_reflective_is_pure_local() {
        let scene = mirror_scene(0.0);
        assert_eq!(
            trace_ray(&forward(), Interval::from_min(EPS), &scene, 3),
            Rgb([0, 0, 255])
        );
    }

    #[test]
    fn test_perfect_mirror_is_pure_reflection() {
        let scene = mirror_scene(1.0);
        assert_eq!(
            trace_ray(&forward(), Interval::from_min(EPS), &scene, 3),
            Rgb([255, 0, 0])
        );
    }

    #[test]
    fn test_half_mirror_blends() {
        let scene = mirror_scene(0.5);
        assert_eq!(
            trace_ray(&forward(), Interval::from_min(EPS), &scene, 3),
            Rgb([127, 0, 127])
        );
    }

    #[test]
    fn test_depth_zero_never_recurses() {
        let scene = mirror_scene(1.0);
        assert_eq!(
            trace_ray(&forward(), Interval::from_min(EPS), &scene, 0),
            Rgb([0, 0, 255])
        );
    }

    #[test]
    fn test_facing_mirrors_terminate() {
        // Two mirrors facing each other bounce until depth runs out
        let scene = Scene::new(
            vec![
                Sphere::new(Vec3::new(0.0, 0.0, 5.0), 1.0, Rgb([0, 0, 255]), -1, 1.0),
                Sphere::new(Vec3::new(0.0, 0.0, -5.0), 1.0, Rgb([255, 0, 0]), -1, 1.0),
            ],
            ambient(1.0),
        );
        // Odd depth ends on the red sphere, even depth back on the blue one
        assert_eq!(trace_ray(&forward(), Interval::from_min(EPS), &scene, 1), Rgb([255, 0, 0]));
        assert_eq!(trace_ray(&forward(), Interval::from_min(EPS), &scene, 2), Rgb([0, 0, 255]));
        assert_eq!(trace_ray(&forward(), Interval::from_min(EPS), &scene, 7), Rgb([255, 0, 0]));
    }

    #[test]
    fn test_out_of_range_reflective_is_clamped_per_channel() {
        // reflective > 1 pushes the local weight negative; channels clamp to 0
        let scene = mirror_scene(1.5);
        assert_eq!(
            trace_ray(&forward(), Interval::from_min(EPS), &scene, 3),
            Rgb([255, 0, 0])
        );
    }

    #[test]
    fn test_checked_rejects_degenerate_ray() {
        let scene = mirror_scene(0.0);
        let r = Ray::new(Vec3::ZERO, Vec3::ZERO);
        assert!(matches!(
            trace_ray_checked(&r, &scene, 3),
            Err(RenderError::DegenerateRay)
        ));
    }

    #[test]
    fn test_checked_traces_valid_ray() {
        let scene = mirror_scene(0.0);
        assert_eq!(trace_ray_checked(&forward(), &scene, 3).unwrap(), Rgb([0, 0, 255]));
    }

    #[test]
    fn test_to_color_truncates_and_clamps() {
        assert_eq!(to_color(Vec3::new(254.99, -3.0, 1e9)), Rgb([254, 0, 255]));
        assert_eq!(to_color(Vec3::new(f64::NAN, 0.5, 255.0)), Rgb([0, 0, 255]));
    }
}

//! Sphere primitive for ray tracing.
//!
//! Solves the full ray-sphere quadratic and reports both roots, leaving the
//! choice of a valid root to the caller.

use crate::ray::Ray;
use crate::tracer::Color;
use crate::vector::Vec3;

/// Sphere primitive with its surface appearance.
#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    /// Center point of the sphere in world coordinates.
    ///
    /// The only field the animation driver changes between frames.
    pub center: Vec3,

    /// Radius of the sphere.
    ///
    /// Not validated here; the scene loader rejects non-positive values.
    pub radius: f64,

    /// Surface color, each channel in [0, 255].
    pub color: Color,

    /// Phong exponent, or `-1` for a matte surface with no highlight.
    pub specular: i32,

    /// Blend weight between the lit surface color and the mirrored color.
    ///
    /// 0.0 is no mirror, 1.0 a perfect mirror.
    pub reflective: f64,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f64, color: Color, specular: i32, reflective: f64) -> Self {
        Self {
            center,
            radius,
            color,
            specular,
            reflective,
        }
    }

    /// Phong exponent if this surface has a highlight.
    pub fn specular_exponent(&self) -> Option<i32> {
        (self.specular >= 0).then_some(self.specular)
    }

    /// Intersect a ray with this sphere.
    ///
    /// Solves `|O + tD - C|² = r²` and returns both roots
    /// `((-b + √disc) / 2a, (-b - √disc) / 2a)`, unordered and possibly
    /// negative. Returns `(∞, ∞)` when the ray misses, and also when the
    /// direction is degenerate (`D·D ≈ 0`) instead of dividing by zero.
    pub fn intersect(&self, r: &Ray) -> (f64, f64) {
        const MISS: (f64, f64) = (f64::INFINITY, f64::INFINITY);

        // Vector from sphere center to ray origin
        let co = r.origin - self.center;

        let a = r.direction.dot(r.direction);
        if a < f64::EPSILON {
            return MISS;
        }
        let b = 2.0 * co.dot(r.direction);
        let c = co.dot(co) - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return MISS;
        }

        let sqrtd = discriminant.sqrt();
        ((-b + sqrtd) / (2.0 * a), (-b - sqrtd) / (2.0 * a))
    }
}

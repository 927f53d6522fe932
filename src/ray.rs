//! Ray representation for 3D ray tracing.
//!
//! A ray is defined as r(t) = origin + t * direction, representing a semi-infinite
//! line in 3D space used for intersection testing.

use crate::error::RenderError;
use crate::vector::Vec3;

/// Ray in 3D space defined by origin and direction.
///
/// Mathematical representation: r(t) = origin + t * direction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Starting point of the ray in world coordinates.
    ///
    /// The camera position for primary rays, or a surface point nudged along
    /// its normal for shadow and reflected rays.
    pub origin: Vec3,

    /// Direction vector of the ray.
    ///
    /// Not required to be normalized: intersection divides by `D·D`, and
    /// shadow rays toward point lights rely on the unnormalized length so
    /// that `t = 1` lands exactly on the light.
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray with origin and direction.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Compute a point at parameter t along the ray.
    ///
    /// Returns r(t) = origin + t * direction.
    pub fn at(&self, t: f64) -> Vec3 {
        self.origin + t * self.direction
    }

    /// Check that the ray can be traced meaningfully.
    ///
    /// Fails on NaN/infinite components and on a zero-length direction.
    pub fn validate(&self) -> Result<(), RenderError> {
        if !self.origin.is_finite() {
            return Err(RenderError::NonFiniteRay { field: "origin" });
        }
        if !self.direction.is_finite() {
            return Err(RenderError::NonFiniteRay { field: "direction" });
        }
        if self.direction.length_squared() < f64::EPSILON {
            return Err(RenderError::DegenerateRay);
        }
        Ok(())
    }
}

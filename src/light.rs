//! Light sources.

use crate::vector::Vec3;

/// Light source, one variant per kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Light {
    /// Uniform light added to every shaded point, never shadowed.
    Ambient {
        /// Scalar intensity.
        intensity: f64,
    },

    /// Light emitted from a point in space.
    Point {
        /// Scalar intensity.
        intensity: f64,
        /// Absolute position of the light.
        position: Vec3,
    },

    /// Light arriving from infinitely far away.
    Directional {
        /// Scalar intensity.
        intensity: f64,
        /// Direction toward the light, kept as loaded (not normalized).
        direction: Vec3,
    },
}

impl Light {
    /// Scalar intensity of the light regardless of kind.
    pub fn intensity(&self) -> f64 {
        match *self {
            Light::Ambient { intensity }
            | Light::Point { intensity, .. }
            | Light::Directional { intensity, .. } => intensity,
        }
    }

    /// Lowercase kind name as written in scene files.
    pub fn kind(&self) -> &'static str {
        match self {
            Light::Ambient { .. } => "ambient",
            Light::Point { .. } => "point",
            Light::Directional { .. } => "directional",
        }
    }
}

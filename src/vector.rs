//! Vector algebra for the tracer.
//!
//! All geometry is computed in double precision with [`glam::DVec3`]; addition,
//! subtraction, scaling, dot products and lengths come straight from glam.

use glam::DVec3;

/// 3D vector in world space, also used for points and directions.
pub type Vec3 = DVec3;

/// Unit vector in the direction of `v`.
///
/// A zero-length vector is returned unchanged instead of dividing by zero.
pub fn normalize(v: Vec3) -> Vec3 {
    v.normalize_or_zero()
}

/// Mirror `v` about the axis `n`: `normalize(2·n·(n·v) - v)`.
///
/// Both vectors point away from the surface, so reflecting the direction
/// toward a light or toward the viewer gives the outgoing mirror direction.
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    normalize(2.0 * n * n.dot(v) - v)
}

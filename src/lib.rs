//! Mirrorball ray tracer
//!
//! Whitted-style recursive ray tracing of spheres lit by ambient, point and
//! directional lights, with hard shadows, Phong highlights and mirror
//! reflection. Renders single frames or orbit animations to PPM and PNG.

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod animation;
pub mod camera;
pub mod error;
pub mod hittable;
pub mod interval;
pub mod light;
pub mod lighting;
pub mod output;
pub mod ray;
pub mod scene;
pub mod sphere;
pub mod tracer;
pub mod vector;

pub use animation::Animation;
pub use camera::Camera;
pub use error::{AnimationError, OutputError, RenderError, SceneError};
pub use light::Light;
pub use ray::Ray;
pub use scene::Scene;
pub use sphere::Sphere;
pub use tracer::{trace_ray, trace_ray_checked, Color, BACKGROUND};
pub use vector::Vec3;

/// Offset that keeps secondary rays from re-hitting the surface they leave.
///
/// Used both to nudge shadow and reflection origins along the normal and as
/// the lower bound of their valid `t` range.
pub const EPS: f64 = 0.001;

//! Scene description: the spheres and lights of one frame.
//!
//! Scenes are read from a line-oriented text format:
//!
//! ```text
//! # comment
//! SPHERE x y z radius r g b specular reflective
//! LIGHT ambient intensity
//! LIGHT point intensity x y z
//! LIGHT directional intensity x y z
//! ```
//!
//! Keywords are case-insensitive. Ambient lights may carry a position, which
//! is ignored.

use std::fmt::Display;
use std::path::Path;
use std::str::FromStr;

use image::Rgb;
use log::{info, warn};

use crate::error::SceneError;
use crate::light::Light;
use crate::sphere::Sphere;
use crate::vector::Vec3;

/// Immutable snapshot of everything visible in one frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    /// Spheres in insertion order.
    pub spheres: Vec<Sphere>,
    /// Lights in insertion order.
    pub lights: Vec<Light>,
}

impl Scene {
    /// Create a scene from its spheres and lights.
    pub fn new(spheres: Vec<Sphere>, lights: Vec<Light>) -> Self {
        Self { spheres, lights }
    }

    /// Read, parse and validate a scene file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SceneError> {
        let path = path.as_ref();
        info!("Loading scene from {}", path.display());

        let text = std::fs::read_to_string(path).map_err(|source| SceneError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let scene: Scene = text.parse()?;

        info!(
            "Scene loaded: {} spheres, {} lights",
            scene.spheres.len(),
            scene.lights.len()
        );
        Ok(scene)
    }

    /// Reject data the renderer would mishandle.
    ///
    /// Spheres need a positive radius, a specular exponent of `-1` or at
    /// least `0`, a reflective coefficient in [0, 1] and finite coordinates.
    /// Lights need a finite intensity and a finite position or direction.
    pub fn validate(&self) -> Result<(), SceneError> {
        for (index, sphere) in self.spheres.iter().enumerate() {
            let invalid = |message: String| SceneError::Invalid {
                element: "sphere",
                index,
                message,
            };

            if !sphere.center.is_finite() {
                return Err(invalid(format!("center {} is not finite", sphere.center)));
            }
            if !(sphere.radius.is_finite() && sphere.radius > 0.0) {
                return Err(invalid(format!("radius {} must be positive", sphere.radius)));
            }
            if sphere.specular < -1 {
                return Err(invalid(format!(
                    "specular {} must be -1 or non-negative",
                    sphere.specular
                )));
            }
            if !(0.0..=1.0).contains(&sphere.reflective) {
                return Err(invalid(format!(
                    "reflective {} must be within [0, 1]",
                    sphere.reflective
                )));
            }
        }

        for (index, light) in self.lights.iter().enumerate() {
            let invalid = |message: String| SceneError::Invalid {
                element: "light",
                index,
                message,
            };

            if !light.intensity().is_finite() {
                return Err(invalid(format!("intensity {} is not finite", light.intensity())));
            }
            match light {
                Light::Ambient { .. } => {}
                Light::Point { position: v, .. } | Light::Directional { direction: v, .. } => {
                    if !v.is_finite() {
                        return Err(invalid(format!("{} vector {} is not finite", light.kind(), v)));
                    }
                }
            }
        }

        Ok(())
    }
}

impl FromStr for Scene {
    type Err = SceneError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut scene = Scene::default();

        for (index, raw) in text.lines().enumerate() {
            let line = index + 1;
            let parts: Vec<&str> = raw.split_whitespace().collect();

            let Some(keyword) = parts.first() else {
                continue;
            };
            if keyword.starts_with('#') {
                continue;
            }

            match keyword.to_ascii_uppercase().as_str() {
                "SPHERE" => scene.spheres.push(parse_sphere(&parts, line)?),
                "LIGHT" => scene.lights.push(parse_light(&parts, line)?),
                other => warn!("line {}: skipping unknown directive '{}'", line, other),
            }
        }

        scene.validate()?;
        Ok(scene)
    }
}

fn parse_field<T>(parts: &[&str], i: usize, name: &str, line: usize) -> Result<T, SceneError>
where
    T: FromStr,
    T::Err: Display,
{
    let raw = parts.get(i).ok_or_else(|| SceneError::Parse {
        line,
        message: format!("missing field '{}'", name),
    })?;
    raw.parse().map_err(|e| SceneError::Parse {
        line,
        message: format!("invalid {} '{}': {}", name, raw, e),
    })
}

fn parse_vec3(parts: &[&str], start: usize, line: usize) -> Result<Vec3, SceneError> {
    Ok(Vec3::new(
        parse_field(parts, start, "x", line)?,
        parse_field(parts, start + 1, "y", line)?,
        parse_field(parts, start + 2, "z", line)?,
    ))
}

fn parse_sphere(parts: &[&str], line: usize) -> Result<Sphere, SceneError> {
    let center = parse_vec3(parts, 1, line)?;
    let radius = parse_field(parts, 4, "radius", line)?;
    let color = Rgb([
        parse_field(parts, 5, "red", line)?,
        parse_field(parts, 6, "green", line)?,
        parse_field(parts, 7, "blue", line)?,
    ]);
    let specular = parse_field(parts, 8, "specular", line)?;
    let reflective = parse_field(parts, 9, "reflective", line)?;
    Ok(Sphere::new(center, radius, color, specular, reflective))
}

fn parse_light(parts: &[&str], line: usize) -> Result<Light, SceneError> {
    let kind: String = parse_field(parts, 1, "light type", line)?;
    let intensity = parse_field(parts, 2, "intensity", line)?;

    match kind.to_ascii_lowercase().as_str() {
        "ambient" => Ok(Light::Ambient { intensity }),
        "point" => Ok(Light::Point {
            intensity,
            position: parse_vec3(parts, 3, line)?,
        }),
        "directional" => Ok(Light::Directional {
            intensity,
            direction: parse_vec3(parts, 3, line)?,
        }),
        other => Err(SceneError::Parse {
            line,
            message: format!(
                "unknown light type '{}', expected ambient, point or directional",
                other
            ),
        }),
    }
}

//! Orbit animation around the red sphere.
//!
//! The red sphere bobs up and down while the yellow, green and blue spheres
//! circle it on an ellipse. Spheres are found by exact color so the scene
//! file can list them in any order. Each frame is a fresh [`Scene`]; the
//! loaded scene is never modified.

use std::f64::consts::PI;

use image::Rgb;

use crate::error::AnimationError;
use crate::scene::Scene;
use crate::tracer::Color;
use crate::vector::Vec3;

/// Vertical amplitude of the red sphere's bob.
const BOB_AMPLITUDE: f64 = 0.35;
/// Orbit semi-axis along X.
const ORBIT_A: f64 = 2.2;
/// Orbit semi-axis along Z.
const ORBIT_B: f64 = 1.3;
/// Fixed height of the orbiting spheres.
const ORBIT_Y: f64 = -0.2;
/// Angular spacing between the three orbiting spheres.
const PHASE: f64 = 2.0 * PI / 3.0;

const RED: Color = Rgb([255, 0, 0]);
const YELLOW: Color = Rgb([255, 255, 0]);
const GREEN: Color = Rgb([0, 255, 0]);
const BLUE: Color = Rgb([0, 128, 255]);

/// Point on an ellipse in the XZ plane around `center`, at height `y`.
///
/// Counter-clockwise seen from +Y as `angle` grows.
pub fn orbit_ellipse(center: Vec3, a: f64, b: f64, angle: f64, y: f64) -> Vec3 {
    Vec3::new(center.x + a * angle.cos(), y, center.z + b * angle.sin())
}

/// Index of the first sphere with exactly this color.
pub fn find_sphere_by_color(scene: &Scene, color: Color) -> Option<usize> {
    scene.spheres.iter().position(|s| s.color == color)
}

/// Animation over a base scene, producing one scene snapshot per frame.
#[derive(Debug, Clone)]
pub struct Animation {
    base: Scene,
    frames: u32,
    red: usize,
    orbiters: [usize; 3],
}

impl Animation {
    /// Locate the animated spheres in `base`.
    ///
    /// Fails if `frames` is zero or if any of the red, yellow, green or blue
    /// spheres is missing.
    pub fn new(base: Scene, frames: u32) -> Result<Self, AnimationError> {
        if frames == 0 {
            return Err(AnimationError::NoFrames);
        }

        let find = |role: &'static str, color: Color| {
            find_sphere_by_color(&base, color).ok_or(AnimationError::MissingSphere {
                role,
                color: color.0,
            })
        };

        let red = find("red", RED)?;
        let orbiters = [
            find("yellow", YELLOW)?,
            find("green", GREEN)?,
            find("blue", BLUE)?,
        ];

        Ok(Self {
            base,
            frames,
            red,
            orbiters,
        })
    }

    /// Number of frames in one full cycle.
    pub fn frames(&self) -> u32 {
        self.frames
    }

    /// Scene for frame `i`, numbered from 1; frame `frames` closes the loop.
    pub fn frame(&self, i: u32) -> Scene {
        let t = 2.0 * PI * (i as f64 / self.frames as f64);
        let mut scene = self.base.clone();

        let base = self.base.spheres[self.red].center;
        let red_center = Vec3::new(base.x, base.y + BOB_AMPLITUDE * t.sin(), base.z);
        scene.spheres[self.red].center = red_center;

        for (k, &index) in self.orbiters.iter().enumerate() {
            let angle = t + k as f64 * PHASE;
            scene.spheres[index].center = orbit_ellipse(red_center, ORBIT_A, ORBIT_B, angle, ORBIT_Y);
        }

        scene
    }

    /// All frames in order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, Scene)> + '_ {
        (1..=self.frames).map(move |i| (i, self.frame(i)))
    }
}

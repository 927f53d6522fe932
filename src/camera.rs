//! Camera for ray generation and scene rendering

use image::RgbImage;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};
use rayon::prelude::*;

use crate::error::RenderError;
use crate::ray::Ray;
use crate::scene::Scene;
use crate::tracer::{trace_ray_checked, BACKGROUND};
use crate::vector::Vec3;

/// Pinhole camera with a look-at basis.
///
/// The viewport sits one unit in front of the camera along the view
/// direction. `fov` is a linear zoom factor, not an angle: larger values
/// widen the view. With the defaults (origin, looking down +Z, +Y up) the
/// primary ray for pixel (x, y) is `normalize((sx, sy, 1))`.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Rendered image width in pixel count
    pub image_width: u32,
    /// Rendered image height in pixel count
    pub image_height: u32,
    /// Maximum number of mirror bounces per primary ray
    pub max_depth: u32,
    /// Half-height of the viewport at unit distance
    pub fov: f64,
    /// Point camera is looking from (camera position)
    pub lookfrom: Vec3,
    /// Point camera is looking at (look target)
    pub lookat: Vec3,
    /// Camera-relative "up" direction vector
    pub vup: Vec3,

    /// Image width divided by height
    aspect: f64,
    /// Camera frame basis vector pointing right
    right: Vec3,
    /// Camera frame basis vector pointing up
    up: Vec3,
    /// Camera frame basis vector pointing toward the scene
    forward: Vec3,
    /// Flag to track whether camera parameters have been calculated
    initialized: bool,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

impl Camera {
    /// Creates a new camera with default settings.
    ///
    /// Default: 600x600 image, depth 3, zoom 0.8, at the origin looking down +Z.
    pub fn new() -> Self {
        Self {
            image_width: 600,
            image_height: 600,
            max_depth: 3,
            fov: 0.8,
            lookfrom: Vec3::ZERO,
            lookat: Vec3::Z,
            vup: Vec3::Y,
            aspect: 1.0,
            right: Vec3::X,
            up: Vec3::Y,
            forward: Vec3::Z,
            initialized: false,
        }
    }

    /// Renders one frame of the scene.
    ///
    /// Pixels are traced in parallel; the scene is only read. A pixel whose
    /// primary ray fails validation is left as background. Returns a
    /// row-major image, top row first.
    pub fn render(&mut self, scene: &Scene) -> Result<RgbImage, RenderError> {
        self.initialize()?;

        let mut image = RgbImage::new(self.image_width, self.image_height);

        info!("Generating image using {} CPU cores...", rayon::current_num_threads());
        let generation_start = std::time::Instant::now();
        let pb = ProgressBar::new(self.image_width as u64 * self.image_height as u64);
        if let Ok(style) = ProgressStyle::default_bar().template("{bar:40} {pos}/{len} ETA: {eta}") {
            pb.set_style(style);
        }

        let camera = &*self;
        image.enumerate_pixels_mut().par_bridge().for_each(|(i, j, pixel)| {
            let r = camera.get_ray(i, j);
            *pixel = trace_ray_checked(&r, scene, camera.max_depth).unwrap_or_else(|e| {
                debug!("pixel ({}, {}) rendered as background: {}", i, j, e);
                BACKGROUND
            });
            pb.inc(1);
        });

        pb.finish_and_clear();
        info!("Image generated in {:.2?}", generation_start.elapsed());

        Ok(image)
    }

    /// Initialize camera parameters based on current settings.
    ///
    /// Builds the right/up/forward basis from lookfrom, lookat and vup.
    /// Called by render(). After changing public fields on an initialized
    /// camera, call [`Camera::reset`] first.
    pub fn initialize(&mut self) -> Result<(), RenderError> {
        if self.initialized {
            return Ok(());
        }

        if self.image_width == 0 || self.image_height == 0 {
            return Err(RenderError::InvalidCamera(format!(
                "image size {}x{} is empty",
                self.image_width, self.image_height
            )));
        }
        self.aspect = self.image_width as f64 / self.image_height as f64;

        if !(self.fov.is_finite() && self.fov > 0.0) {
            return Err(RenderError::InvalidCamera(format!(
                "fov {} must be finite and positive",
                self.fov
            )));
        }
        for (name, v) in [("lookfrom", self.lookfrom), ("lookat", self.lookat), ("vup", self.vup)] {
            if !v.is_finite() {
                return Err(RenderError::InvalidCamera(format!("{} {} is not finite", name, v)));
            }
        }

        let view = self.lookat - self.lookfrom;
        if !view.is_finite() {
            return Err(RenderError::InvalidCamera(format!(
                "view vector {} overflows",
                view
            )));
        }
        if view.length_squared() < f64::EPSILON {
            return Err(RenderError::InvalidCamera(
                "lookfrom and lookat are the same point".to_string(),
            ));
        }
        self.forward = view.normalize();

        let right = self.vup.cross(self.forward);
        if right.length_squared() < f64::EPSILON {
            return Err(RenderError::InvalidCamera(
                "up vector is parallel to the view direction".to_string(),
            ));
        }
        self.right = right.normalize();
        self.up = self.forward.cross(self.right);

        self.initialized = true;
        Ok(())
    }

    /// Forget the computed basis so the next render picks up field changes.
    pub fn reset(&mut self) {
        self.initialized = false;
    }

    /// Primary ray through the corner of pixel (i, j).
    ///
    /// `sx = (2i/width - 1)·aspect·fov`, `sy = (1 - 2j/height)·fov`.
    /// Only meaningful after [`Camera::initialize`].
    pub(crate) fn get_ray(&self, i: u32, j: u32) -> Ray {
        let sx = (2.0 * i as f64 / self.image_width as f64 - 1.0) * self.aspect * self.fov;
        let sy = (1.0 - 2.0 * j as f64 / self.image_height as f64) * self.fov;
        let direction = (sx * self.right + sy * self.up + self.forward).normalize_or_zero();
        Ray::new(self.lookfrom, direction)
    }
}

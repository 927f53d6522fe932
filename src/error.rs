//! Error types for rendering, scene loading, animation and image output.

use std::path::PathBuf;

use thiserror::Error;

/// Failures detected at the tracer's entry points.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Ray direction has zero length, so no parameter `t` is meaningful.
    #[error("degenerate ray: direction has zero length")]
    DegenerateRay,

    /// A ray component is NaN or infinite.
    #[error("non-finite ray {field}")]
    NonFiniteRay {
        /// Which part of the ray was rejected (`origin` or `direction`).
        field: &'static str,
    },

    /// Camera parameters do not define a usable viewing basis.
    #[error("invalid camera: {0}")]
    InvalidCamera(String),
}

/// Failures while reading or validating a scene description.
#[derive(Debug, Error)]
pub enum SceneError {
    /// The scene file could not be read.
    #[error("failed to read scene file {}: {source}", .path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A line of the scene description is malformed.
    #[error("line {line}: {message}")]
    Parse {
        /// 1-based line number.
        line: usize,
        /// What was wrong with it.
        message: String,
    },

    /// A parsed element is outside the accepted range.
    #[error("{element} #{index}: {message}")]
    Invalid {
        /// `sphere` or `light`.
        element: &'static str,
        /// 0-based position in its list.
        index: usize,
        /// What was wrong with it.
        message: String,
    },
}

/// The animation driver could not locate the spheres it moves.
#[derive(Debug, Error)]
pub enum AnimationError {
    /// No sphere carries the exact color used to identify an animated role.
    #[error("animation setup failed: no {role} sphere with color {color:?}")]
    MissingSphere {
        /// Role of the sphere in the animation (`red`, `yellow`, ...).
        role: &'static str,
        /// RGB color the sphere is looked up by.
        color: [u8; 3],
    },

    /// A cycle needs at least one frame.
    #[error("animation setup failed: frame count must be at least 1")]
    NoFrames,
}

/// Failures while writing a rendered image.
#[derive(Debug, Error)]
pub enum OutputError {
    /// File creation or write failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Encoder failure.
    #[error("image encoding failed: {0}")]
    Image(#[from] image::ImageError),

    /// File extension is neither `.ppm` nor `.png`.
    #[error("unsupported file extension '{0}', only .ppm and .png are supported")]
    UnsupportedFormat(String),
}

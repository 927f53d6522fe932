//! Interval arithmetic for ray parameter ranges.
//!
//! Rays only count hits whose parameter lies strictly inside `(min, max)`.

/// Parametric interval with `min` and `max` bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    /// Minimum value of the interval
    pub min: f64,
    /// Maximum value of the interval
    pub max: f64,
}

impl Interval {
    /// Create a new interval with given min and max values
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Interval from `min` to positive infinity.
    pub const fn from_min(min: f64) -> Self {
        Self::new(min, f64::INFINITY)
    }

    /// Check if the interval surrounds the given value (exclusive bounds)
    pub fn surrounds(&self, x: f64) -> bool {
        self.min < x && x < self.max
    }
}

//! Device pixels to and from the resolution-independent unit square.
//!
//! Normalization clamps: input outside the surface saturates at the border.
//! Denormalization does not clamp, so a point captured on one surface size
//! may land outside a different one.

use serde::{Deserialize, Serialize};

use crate::stroke::Point;

/// Surface dimensions in device pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub w: f64,
    pub h: f64,
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self {
            w: 1080.0,
            h: 1920.0,
        }
    }
}

impl CanvasSize {
    pub fn new(w: f64, h: f64) -> Self {
        Self { w, h }
    }

    /// True when both sides are positive and finite
    pub fn is_valid(&self) -> bool {
        self.w.is_finite() && self.h.is_finite() && self.w > 0.0 && self.h > 0.0
    }
}

/// A position in device pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DevicePoint {
    pub x: f64,
    pub y: f64,
}

fn normalize_axis(value: f64, extent: f64) -> f64 {
    // A collapsed axis has nowhere meaningful to land
    if extent.is_nan() || extent <= 0.0 {
        return 0.0;
    }
    clamp_unit(value / extent)
}

/// Pull a normalized coordinate back into `[0, 1]`; NaN lands on 0
pub fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 1.0)
}

/// Map device pixels into `[0, 1] x [0, 1]`, returning `(x, y)`
pub fn normalize(px: f64, py: f64, width: f64, height: f64) -> (f64, f64) {
    (normalize_axis(px, width), normalize_axis(py, height))
}

/// Map a normalized position back to device pixels
pub fn denormalize(nx: f64, ny: f64, width: f64, height: f64) -> DevicePoint {
    DevicePoint {
        x: nx * width,
        y: ny * height,
    }
}

/// Build a stored [`Point`] from a device sample
pub fn normalize_point(
    px: f64,
    py: f64,
    t: f64,
    pressure: Option<f64>,
    size: CanvasSize,
) -> Point {
    let (x, y) = normalize(px, py, size.w, size.h);
    Point {
        x,
        y,
        t,
        pressure: normalize_pressure(pressure),
    }
}

/// Non-positive pressure means the device did not really report one
pub fn normalize_pressure(pressure: Option<f64>) -> Option<f64> {
    pressure
        .filter(|p| *p > 0.0)
        .map(|p| p.clamp(0.0, 1.0))
}

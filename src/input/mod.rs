//! Input boundary.
//!
//! Pointer and touch input arrives in many shapes; it is turned into one
//! [`InputSample`] variant here, once, and everything downstream consumes
//! that.

mod handler;

pub use handler::{InputHandler, PointerFrame};

/// One raw device sample, in device pixels relative to the surface origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputSample {
    pub x: f64,
    pub y: f64,
    /// Capture time in milliseconds
    pub t: f64,
    pub pressure: Option<f64>,
}

impl InputSample {
    pub fn new(x: f64, y: f64, t: f64) -> Self {
        Self {
            x,
            y,
            t,
            pressure: None,
        }
    }

    pub fn with_pressure(mut self, pressure: f64) -> Self {
        self.pressure = Some(pressure);
        self
    }
}

/// Capture-level pointer events
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer pressed on the surface: a stroke begins
    PointerDown(InputSample),
    /// Pointer moved while pressed
    PointerMove(InputSample),
    /// Pointer released, left the surface, or the touch was cancelled
    PointerUp,
}

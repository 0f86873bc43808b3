//! Stroke cleanup: noise filter, smoothing, and simplification.
//!
//! The stage order is fixed. Filtering first keeps jitter out of the
//! smoothing window, and simplification only sees the smoothed path.

mod filter;
mod simplify;
mod smooth;

pub use filter::{DEFAULT_MIN_DISTANCE, filter_noise};
pub use simplify::{DEFAULT_TOLERANCE, simplify};
pub use smooth::smooth;

use crate::config::ProcessingConfig;
use crate::stroke::{Point, Stroke};

/// Runs the cleanup pipeline over finished strokes
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeProcessor {
    config: ProcessingConfig,
}

impl Default for StrokeProcessor {
    fn default() -> Self {
        Self::new(ProcessingConfig::default())
    }
}

impl StrokeProcessor {
    pub fn new(config: ProcessingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProcessingConfig {
        &self.config
    }

    /// Filter, smooth, then simplify when the path is long
    pub fn process_points(&self, points: &[Point]) -> Vec<Point> {
        let filtered = filter_noise(points, self.config.min_distance);
        let smoothed = smooth(&filtered);

        if smoothed.len() > self.config.simplify_min_points {
            simplify(&smoothed, self.config.simplify_tolerance)
        } else {
            smoothed
        }
    }

    /// Return a copy of `stroke` with its points cleaned up
    pub fn process(&self, stroke: &Stroke) -> Stroke {
        let points = self.process_points(stroke.points());
        log::debug!(
            "Processed stroke {}: {} -> {} points",
            stroke.id,
            stroke.len(),
            points.len()
        );
        stroke.with_points(points)
    }
}

//! Distance math shared by the cleanup stages.

mod distance;

pub use distance::{distance, distance_to_segment};

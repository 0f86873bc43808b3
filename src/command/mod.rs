mod history;

pub use history::{Snapshot, StrokeHistory};

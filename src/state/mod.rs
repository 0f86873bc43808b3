mod capture_state;
pub mod context;

pub use capture_state::CaptureState;
pub use context::CaptureContext;

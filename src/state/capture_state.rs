//! The stroke capture state machine.
//!
//! ```text
//!   ┌──────────┐   start    ┌──────────┐
//!   │          ├────────────►          │◄──┐
//!   │   Idle   │            │  Active  │   │ extend
//!   │          ◄────────────┤          ├───┘
//!   └──────────┘  end/clear └──────────┘
//! ```
//!
//! There is no persistent "ended" state: ending a stroke commits it and
//! drops straight back to `Idle`. Calls that do not fit the current state
//! are ignored by [`crate::state::CaptureContext`] rather than reported.

use crate::normalize::CanvasSize;
use crate::stroke::Stroke;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum CaptureState {
    /// No stroke in progress
    #[default]
    Idle,
    /// A stroke is being drawn
    Active {
        stroke: Stroke,
        /// Surface size when the stroke started; later samples normalize against it
        canvas_size: CanvasSize,
    },
}

impl CaptureState {
    /// Returns true if no stroke is in progress
    pub fn is_idle(&self) -> bool {
        matches!(self, CaptureState::Idle)
    }

    /// Returns true if a stroke is in progress
    pub fn is_active(&self) -> bool {
        matches!(self, CaptureState::Active { .. })
    }

    /// The in-progress stroke, if any
    pub fn open_stroke(&self) -> Option<&Stroke> {
        match self {
            CaptureState::Active { stroke, .. } => Some(stroke),
            CaptureState::Idle => None,
        }
    }

    /// The surface size captured when the open stroke started
    pub fn stroke_canvas_size(&self) -> Option<CanvasSize> {
        match self {
            CaptureState::Active { canvas_size, .. } => Some(*canvas_size),
            CaptureState::Idle => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            CaptureState::Idle => "Idle",
            CaptureState::Active { .. } => "Active",
        }
    }
}

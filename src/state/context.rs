//! The capture context: everything one drawing session owns.
//!
//! `CaptureContext` is the single mutable state object for capture. The host
//! event loop owns it and feeds it pointer events one at a time; nothing in
//! here blocks or does I/O.
//!
//! # Lifecycle
//!
//! - `start_stroke`: open a stroke (ignored while one is already open)
//! - `extend_stroke`: append a sample (ignored while idle)
//! - `end_stroke`: clean up the open stroke and commit it (ignored while idle)
//!
//! Starting a stroke records the committed collection on the undo history,
//! so one undo removes exactly one committed stroke.
//!
//! # Example
//!
//! ```rust
//! use eframe_sketch::state::CaptureContext;
//! use eframe_sketch::stroke::Point;
//!
//! let mut context = CaptureContext::default();
//! context.start_stroke(Point::new(0.5, 0.5, 0.0));
//! context.extend_stroke(Point::new(0.6, 0.5, 16.0));
//! context.end_stroke();
//! assert_eq!(context.strokes().len(), 1);
//!
//! context.undo();
//! assert!(context.strokes().is_empty());
//! ```

use std::sync::Arc;

use super::CaptureState;
use crate::command::{Snapshot, StrokeHistory};
use crate::config::CaptureConfig;
use crate::id_generator::{generate_session_id, generate_stroke_id};
use crate::input::{InputEvent, InputSample};
use crate::normalize::{CanvasSize, normalize_point};
use crate::processing::StrokeProcessor;
use crate::session::{FORMAT_VERSION, Intent, Session};
use crate::stroke::{Point, Stroke, StrokeRef, StrokeStyle, StylePatch, Tool};
use crate::util::time;

#[derive(Debug, Clone)]
pub struct CaptureContext {
    state: CaptureState,
    /// Committed strokes in z-order, later strokes draw on top
    strokes: Snapshot,
    history: StrokeHistory,
    processor: StrokeProcessor,

    session_id: String,
    user_id: String,
    canvas_size: CanvasSize,
    start_time: f64,
    intent: Intent,

    tool: Tool,
    style: StrokeStyle,
}

impl Default for CaptureContext {
    fn default() -> Self {
        Self::new(&CaptureConfig::default())
    }
}

impl CaptureContext {
    /// Creates an idle context with a fresh session id and empty history
    pub fn new(config: &CaptureConfig) -> Self {
        Self {
            state: CaptureState::Idle,
            strokes: Vec::new(),
            history: StrokeHistory::new(),
            processor: StrokeProcessor::new(config.processing.clone()),
            session_id: generate_session_id(),
            user_id: String::new(),
            canvas_size: config.canvas_size,
            start_time: time::now_millis(),
            intent: Intent::default(),
            tool: config.default_tool,
            style: config.default_style.clone(),
        }
    }

    // --- Stroke lifecycle ---

    /// Open a new stroke at `point`.
    ///
    /// Returns false and leaves everything untouched if a stroke is already
    /// open; the open stroke keeps going.
    pub fn start_stroke(&mut self, point: Point) -> bool {
        if self.state.is_active() {
            log::debug!("Ignoring start while a stroke is already active");
            return false;
        }

        let stroke = Stroke::begin(generate_stroke_id(), self.tool, self.style.clone(), point);
        log::debug!("Started stroke {} with {:?}", stroke.id, self.tool);

        self.history.record(self.strokes.clone());
        self.state = CaptureState::Active {
            stroke,
            canvas_size: self.canvas_size,
        };
        true
    }

    /// Append `point` to the open stroke. Returns false while idle.
    pub fn extend_stroke(&mut self, point: Point) -> bool {
        match &mut self.state {
            CaptureState::Active { stroke, .. } => {
                stroke.push(point);
                true
            }
            CaptureState::Idle => {
                log::debug!("Ignoring extend while idle");
                false
            }
        }
    }

    /// Clean up the open stroke, commit it and return to idle.
    ///
    /// Returns the committed stroke, or `None` while idle. A stroke that
    /// ends up with very few points is still committed.
    pub fn end_stroke(&mut self) -> Option<StrokeRef> {
        let CaptureState::Active { stroke, .. } = std::mem::take(&mut self.state) else {
            log::debug!("Ignoring end while idle");
            return None;
        };

        let processed = Arc::new(self.processor.process(&stroke));
        log::info!(
            "🖌️ Committed stroke {}: {} raw points, {} kept",
            processed.id,
            stroke.len(),
            processed.len()
        );

        self.strokes.push(Arc::clone(&processed));
        Some(processed)
    }

    /// Start a stroke from a device sample, normalized against the current canvas size
    pub fn start_stroke_at(&mut self, sample: InputSample) -> bool {
        let point = normalize_point(sample.x, sample.y, sample.t, sample.pressure, self.canvas_size);
        self.start_stroke(point)
    }

    /// Extend from a device sample, normalized against the size the stroke started with
    pub fn extend_stroke_at(&mut self, sample: InputSample) -> bool {
        let Some(size) = self.state.stroke_canvas_size() else {
            log::debug!("Ignoring extend while idle");
            return false;
        };
        let point = normalize_point(sample.x, sample.y, sample.t, sample.pressure, size);
        self.extend_stroke(point)
    }

    /// Dispatch one pointer event to the lifecycle.
    ///
    /// Returns true if the event changed anything.
    pub fn handle_event(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::PointerDown(sample) => self.start_stroke_at(sample),
            InputEvent::PointerMove(sample) => self.extend_stroke_at(sample),
            InputEvent::PointerUp => self.end_stroke().is_some(),
        }
    }

    // --- History ---

    /// Restore the collection as it was before the last mutation.
    ///
    /// Returns false when there is nothing to undo. An open stroke is left
    /// alone and will commit on top of the restored collection.
    pub fn undo(&mut self) -> bool {
        let current = std::mem::take(&mut self.strokes);
        match self.history.undo(current.clone()) {
            Some(previous) => {
                self.strokes = previous;
                log::info!("Undo: {} strokes visible", self.strokes.len());
                true
            }
            None => {
                self.strokes = current;
                false
            }
        }
    }

    /// Re-apply the last undone mutation. Returns false when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        let current = std::mem::take(&mut self.strokes);
        match self.history.redo(current.clone()) {
            Some(next) => {
                self.strokes = next;
                log::info!("Redo: {} strokes visible", self.strokes.len());
                true
            }
            None => {
                self.strokes = current;
                false
            }
        }
    }

    /// Empty the canvas as one undoable step.
    ///
    /// An open stroke is discarded along with the committed ones.
    pub fn clear(&mut self) {
        if self.state.is_active() {
            log::debug!("Clear discards the open stroke");
        }
        self.state = CaptureState::Idle;

        let cleared = std::mem::take(&mut self.strokes);
        log::info!("Cleared {} strokes", cleared.len());
        self.history.record(cleared);
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn undo_depth(&self) -> usize {
        self.history.undo_depth()
    }

    pub fn redo_depth(&self) -> usize {
        self.history.redo_depth()
    }

    pub fn history(&self) -> &StrokeHistory {
        &self.history
    }

    // --- Session ---

    /// Package the committed strokes and session metadata for export.
    ///
    /// Never mutates; an in-progress stroke is not included.
    pub fn session_data(&self) -> Session {
        Session {
            session_id: self.session_id.clone(),
            user_id: self.user_id.clone(),
            canvas_size: self.canvas_size,
            strokes: self.strokes.iter().map(|stroke| stroke.as_ref().clone()).collect(),
            intent: self.intent.clone(),
            start_time: self.start_time,
            format_version: FORMAT_VERSION.to_string(),
        }
    }

    // --- Settings ---

    pub fn set_session_id(&mut self, id: impl Into<String>) {
        self.session_id = id.into();
    }

    pub fn set_user_id(&mut self, id: impl Into<String>) {
        self.user_id = id.into();
    }

    /// Record a new surface size.
    ///
    /// Only affects strokes started afterwards; committed points and the
    /// open stroke keep the size they were captured with.
    pub fn set_canvas_size(&mut self, size: CanvasSize) {
        if !size.is_valid() {
            log::warn!("Ignoring invalid canvas size {}x{}", size.w, size.h);
            return;
        }
        self.canvas_size = size;
    }

    pub fn set_tool(&mut self, tool: Tool) {
        self.tool = tool;
    }

    /// Merge a style update; committed strokes keep their own copy
    pub fn set_style(&mut self, patch: StylePatch) {
        self.style.apply(patch);
    }

    pub fn set_intent(&mut self, intent: Intent) {
        self.intent = intent;
    }

    // --- Read-only views ---

    pub fn state(&self) -> &CaptureState {
        &self.state
    }

    pub fn is_drawing(&self) -> bool {
        self.state.is_active()
    }

    /// The in-progress stroke, for preview rendering
    pub fn current_stroke(&self) -> Option<&Stroke> {
        self.state.open_stroke()
    }

    pub fn strokes(&self) -> &[StrokeRef] {
        &self.strokes
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn canvas_size(&self) -> CanvasSize {
        self.canvas_size
    }

    pub fn start_time(&self) -> f64 {
        self.start_time
    }

    pub fn intent(&self) -> &Intent {
        &self.intent
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn style(&self) -> &StrokeStyle {
        &self.style
    }
}

use crate::stroke::StrokeRef;

/// An immutable copy of the committed stroke collection.
///
/// Strokes are shared by reference count and never mutated once committed,
/// so a snapshot cannot observe later changes to the live collection.
pub type Snapshot = Vec<StrokeRef>;

/// Snapshot-based undo/redo for the committed stroke collection
#[derive(Debug, Clone, Default)]
pub struct StrokeHistory {
    /// Collections to restore on undo, most recent last
    undo_stack: Vec<Snapshot>,
    /// Collections to restore on redo, most recent last
    redo_stack: Vec<Snapshot>,
}

impl StrokeHistory {
    /// Creates a new empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the collection as it was before a mutation.
    ///
    /// Starting a new branch of history drops everything that could have
    /// been redone.
    pub fn record(&mut self, before: Snapshot) {
        self.undo_stack.push(before);
        self.redo_stack.clear();
    }

    /// Step back one mutation.
    ///
    /// Returns the collection to make current, or `None` when there is
    /// nothing to undo. `current` is kept for redo.
    pub fn undo(&mut self, current: Snapshot) -> Option<Snapshot> {
        let previous = self.undo_stack.pop()?;
        self.redo_stack.push(current);
        Some(previous)
    }

    /// Step forward again after an undo
    pub fn redo(&mut self, current: Snapshot) -> Option<Snapshot> {
        let next = self.redo_stack.pop()?;
        self.undo_stack.push(current);
        Some(next)
    }

    /// Returns true if there are snapshots that can be undone
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Returns true if there are snapshots that can be redone
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn undo_stack(&self) -> &[Snapshot] {
        &self.undo_stack
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stroke::{Point, Stroke, StrokeStyle, Tool};
    use std::sync::Arc;

    fn stroke(id: &str) -> StrokeRef {
        Arc::new(Stroke::begin(
            id.to_string(),
            Tool::Pen,
            StrokeStyle::default(),
            Point::new(0.5, 0.5, 0.0),
        ))
    }

    #[test]
    fn test_empty_history_is_noop() {
        let mut history = StrokeHistory::new();
        assert!(history.undo(vec![stroke("a")]).is_none());
        assert!(history.redo(vec![stroke("a")]).is_none());
        assert_eq!(history.undo_depth(), 0);
        assert_eq!(history.redo_depth(), 0);
    }

    #[test]
    fn test_undo_then_redo_cross_pushes() {
        let mut history = StrokeHistory::new();
        let a = stroke("a");

        history.record(Vec::new());
        let restored = history.undo(vec![a.clone()]).unwrap();
        assert!(restored.is_empty());
        assert!(history.can_redo());
        assert!(!history.can_undo());

        let again = history.redo(restored).unwrap();
        assert_eq!(again.len(), 1);
        assert!(Arc::ptr_eq(&again[0], &a));
        assert!(history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_record_clears_redo() {
        let mut history = StrokeHistory::new();
        history.record(Vec::new());
        history.undo(vec![stroke("a")]);
        assert!(history.can_redo());

        history.record(Vec::new());
        assert!(!history.can_redo());
    }
}

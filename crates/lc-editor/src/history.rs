//! Undo/Redo history.
//!
//! Every mutation is preceded by `record()` with a snapshot of the state
//! it is about to change. Undo swaps the live state with the newest
//! recorded snapshot and parks the live state on the redo stack; redo is
//! the mirror image. Recording anything new drops the redo stack.

/// One step of history: the state to go back (or forward) to.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry<S> {
    pub snapshot: S,
    pub description: String,
}

/// Manages the undo and redo stacks of whole-state snapshots.
///
/// Both stacks keep their most recent entry at the end.
#[derive(Debug, Clone)]
pub struct History<S> {
    undo_stack: Vec<HistoryEntry<S>>,
    redo_stack: Vec<HistoryEntry<S>>,
    /// Maximum undo depth.
    max_depth: usize,
}

impl<S> Default for History<S> {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl<S> History<S> {
    pub fn new(max_depth: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_depth: max_depth.max(1),
        }
    }

    pub fn unbounded() -> Self {
        Self::new(usize::MAX)
    }

    /// Push the pre-mutation state and invalidate redo.
    /// Call immediately before applying the mutation.
    pub fn record(&mut self, current: S, description: &str) {
        self.undo_stack.push(HistoryEntry {
            snapshot: current,
            description: description.to_string(),
        });
        if self.undo_stack.len() > self.max_depth {
            self.undo_stack.remove(0);
        }
        self.redo_stack.clear();
    }

    /// Step back. On success `current` holds the restored state, the
    /// replaced state is kept for redo, and the step's description is
    /// returned. With nothing to undo, `current` is left untouched.
    pub fn undo(&mut self, current: &mut S) -> Option<String> {
        let entry = self.undo_stack.pop()?;
        let replaced = std::mem::replace(current, entry.snapshot);
        self.redo_stack.push(HistoryEntry {
            snapshot: replaced,
            description: entry.description.clone(),
        });
        Some(entry.description)
    }

    /// Step forward again after an undo.
    pub fn redo(&mut self, current: &mut S) -> Option<String> {
        let entry = self.redo_stack.pop()?;
        let replaced = std::mem::replace(current, entry.snapshot);
        self.undo_stack.push(HistoryEntry {
            snapshot: replaced,
            description: entry.description.clone(),
        });
        Some(entry.description)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    /// What the next undo would revert, e.g. for a button tooltip.
    pub fn undo_description(&self) -> Option<&str> {
        self.undo_stack.last().map(|e| e.description.as_str())
    }

    pub fn redo_description(&self) -> Option<&str> {
        self.redo_stack.last().map(|e| e.description.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undo_redo_swaps_state() {
        let mut history = History::unbounded();
        let mut state = vec!["a"];

        history.record(state.clone(), "push b");
        state.push("b");

        assert_eq!(history.undo(&mut state), Some("push b".to_string()));
        assert_eq!(state, vec!["a"]);

        assert_eq!(history.redo(&mut state), Some("push b".to_string()));
        assert_eq!(state, vec!["a", "b"]);
    }

    #[test]
    fn empty_stacks_are_no_ops() {
        let mut history: History<u32> = History::default();
        let mut state = 7;
        assert_eq!(history.undo(&mut state), None);
        assert_eq!(history.redo(&mut state), None);
        assert_eq!(state, 7);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn redo_clears_on_new_record() {
        let mut history = History::unbounded();
        let mut state = 0;

        history.record(state, "inc");
        state += 1;
        history.undo(&mut state);
        assert!(history.can_redo());

        history.record(state, "inc again");
        state += 5;
        assert!(!history.can_redo());
        assert_eq!(history.redo(&mut state), None);
        assert_eq!(state, 5);
    }

    #[test]
    fn max_depth_trims_oldest() {
        let mut history = History::new(3);
        let mut state = 0;
        for _ in 0..5 {
            history.record(state, "inc");
            state += 1;
        }
        let mut undo_count = 0;
        while history.undo(&mut state).is_some() {
            undo_count += 1;
        }
        assert_eq!(undo_count, 3);
        assert_eq!(state, 2);
    }

    #[test]
    fn lifo_ordering_across_interleaved_undo_redo() {
        let mut history = History::unbounded();
        let mut state = 0;
        for step in 1..=4 {
            history.record(state, &format!("step {step}"));
            state = step;
        }

        assert_eq!(history.undo(&mut state).as_deref(), Some("step 4"));
        assert_eq!(history.undo(&mut state).as_deref(), Some("step 3"));
        assert_eq!(state, 2);
        assert_eq!(history.redo_description(), Some("step 3"));

        assert_eq!(history.redo(&mut state).as_deref(), Some("step 3"));
        assert_eq!(state, 3);
        assert_eq!(history.undo_description(), Some("step 3"));
        assert_eq!(history.redo_len(), 1);
        assert_eq!(history.undo_len(), 3);
    }
}

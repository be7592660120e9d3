//! Linear undo/redo history over full state snapshots.
//!
//! # Invariants
//! - Every committed edit pushes the pre-edit state onto the undo stack and
//!   clears the redo stack.
//! - `undo` moves the current state to the front of the redo stack.
//! - `redo` moves the current state to the back of the undo stack.
//! - `undo`/`redo` on an empty stack leave everything unchanged.

use std::collections::VecDeque;

/// Undo/redo stacks for snapshots of type `T`.
///
/// The current state is owned by the caller and passed in by reference so
/// the history never holds a second copy of it.
#[derive(Debug, Clone)]
pub struct History<T> {
    /// Past states, oldest first.
    undo_stack: Vec<T>,
    /// Future states, nearest first.
    redo_stack: VecDeque<T>,
}

impl<T> Default for History<T> {
    fn default() -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: VecDeque::new(),
        }
    }
}

impl<T> History<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces `current` with `next`, recording the previous state.
    pub fn commit(&mut self, current: &mut T, next: T) {
        let previous = std::mem::replace(current, next);
        self.undo_stack.push(previous);
        self.redo_stack.clear();
    }

    /// Applies an infallible edit to `current`.
    pub fn apply_edit<F>(&mut self, current: &mut T, edit: F)
    where
        F: FnOnce(&T) -> T,
    {
        let next = edit(current);
        self.commit(current, next);
    }

    /// Applies a fallible edit; on error nothing is recorded or changed.
    pub fn try_apply_edit<F, E>(&mut self, current: &mut T, edit: F) -> Result<(), E>
    where
        F: FnOnce(&T) -> Result<T, E>,
    {
        let next = edit(current)?;
        self.commit(current, next);
        Ok(())
    }

    /// Restores the most recent past state. Returns `false` when there is none.
    pub fn undo(&mut self, current: &mut T) -> bool {
        let Some(previous) = self.undo_stack.pop() else {
            return false;
        };
        let replaced = std::mem::replace(current, previous);
        self.redo_stack.push_front(replaced);
        true
    }

    /// Restores the nearest future state. Returns `false` when there is none.
    pub fn redo(&mut self, current: &mut T) -> bool {
        let Some(next) = self.redo_stack.pop_front() else {
            return false;
        };
        let replaced = std::mem::replace(current, next);
        self.undo_stack.push(replaced);
        true
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }
}

#[cfg(test)]
mod tests {
    use super::History;

    #[test]
    fn undo_and_redo_walk_the_timeline() {
        let mut history = History::new();
        let mut state = 0;
        history.apply_edit(&mut state, |s| s + 1);
        history.apply_edit(&mut state, |s| s + 1);
        assert_eq!(state, 2);

        assert!(history.undo(&mut state));
        assert!(history.undo(&mut state));
        assert_eq!(state, 0);
        assert!(!history.undo(&mut state));
        assert_eq!(state, 0);

        assert!(history.redo(&mut state));
        assert_eq!(state, 1);
        assert_eq!(history.undo_depth(), 1);
        assert_eq!(history.redo_depth(), 1);
    }

    #[test]
    fn edit_after_undo_clears_redo() {
        let mut history = History::new();
        let mut state = String::from("a");
        history.apply_edit(&mut state, |s| format!("{s}b"));
        history.undo(&mut state);
        assert!(history.can_redo());

        history.apply_edit(&mut state, |s| format!("{s}c"));
        assert_eq!(state, "ac");
        assert!(!history.can_redo());
        assert!(!history.redo(&mut state));
    }

    #[test]
    fn failed_edit_records_nothing() {
        let mut history: History<i32> = History::new();
        let mut state = 7;
        let result: Result<(), &str> = history.try_apply_edit(&mut state, |_| Err("nope"));
        assert_eq!(result, Err("nope"));
        assert_eq!(state, 7);
        assert!(!history.can_undo());
    }
}

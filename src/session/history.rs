//! Linear undo/redo over full game-state snapshots.
//!
//! Every push and restore goes through `GameState::snapshot`, so the stacks
//! never share data with the live state.

use std::collections::VecDeque;

use crate::game_state::chess_types::GameState;

#[derive(Debug, Clone)]
pub struct History {
    undo: VecDeque<GameState>,
    redo: Vec<GameState>,
    capacity: usize,
}

impl History {
    pub fn new(capacity: usize) -> Self {
        Self {
            undo: VecDeque::new(),
            redo: Vec::new(),
            capacity: capacity.max(1),
        }
    }

    /// Record the state before a mutating action. Clears redo.
    pub fn record(&mut self, before: &GameState) {
        self.undo.push_back(before.snapshot());
        while self.undo.len() > self.capacity {
            self.undo.pop_front();
        }
        self.redo.clear();
    }

    /// Step back: `current` moves onto redo, the last undo entry is returned.
    pub fn undo(&mut self, current: &GameState) -> Option<GameState> {
        let previous = self.undo.pop_back()?;
        self.redo.push(current.snapshot());
        Some(previous)
    }

    pub fn redo(&mut self, current: &GameState) -> Option<GameState> {
        let next = self.redo.pop()?;
        self.undo.push_back(current.snapshot());
        Some(next)
    }

    #[inline]
    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    #[inline]
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo.len()
    }

    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::History;
    use crate::game_state::chess_types::GameState;

    fn state_with_message(message: &str) -> GameState {
        let mut state = GameState::new_game(3);
        state.set_message(message);
        state
    }

    #[test]
    fn undo_then_redo_is_the_identity() {
        let mut history = History::new(10);
        let first = state_with_message("first");
        let second = state_with_message("second");

        history.record(&first);
        let restored = history.undo(&second).expect("one entry to undo");
        assert_eq!(restored, first);

        let replayed = history.redo(&restored).expect("one entry to redo");
        assert_eq!(replayed, second);
        assert!(history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn recording_clears_redo() {
        let mut history = History::new(10);
        history.record(&state_with_message("a"));
        history.undo(&state_with_message("b")).expect("entry present");
        assert!(history.can_redo());

        history.record(&state_with_message("c"));
        assert!(!history.can_redo());
    }

    #[test]
    fn empty_stacks_are_a_no_op() {
        let mut history = History::new(10);
        let current = GameState::new_game(3);
        assert!(history.undo(&current).is_none());
        assert!(history.redo(&current).is_none());
    }

    #[test]
    fn oldest_entries_are_evicted_past_capacity() {
        let mut history = History::new(3);
        for i in 0..5 {
            history.record(&state_with_message(&format!("m{i}")));
        }
        assert_eq!(history.undo_len(), 3);

        let mut current = GameState::new_game(3);
        let mut oldest = None;
        while let Some(previous) = history.undo(&current) {
            oldest = Some(previous.current_message.clone());
            current = previous;
        }
        assert_eq!(oldest.as_deref(), Some("m2"));
    }
}

//! Full game state: the position plus selection, quantum targeting, outcome
//! and the move/message logs.
//!
//! `GameState` owns all of its data, so `snapshot` is a structural deep copy
//! and history entries never alias the live state.

use crate::game_state::chess_rules::WELCOME_MESSAGE;
use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::CandidateMove;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Checkmate { winner: Color },
    Stalemate,
}

impl GameOutcome {
    pub fn text(self) -> String {
        match self {
            GameOutcome::Checkmate { winner } => {
                format!("Checkmate! {} wins.", winner.display_name())
            }
            GameOutcome::Stalemate => "Stalemate.".to_owned(),
        }
    }
}

/// Where the click protocol currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnPhase {
    Idle,
    Selected,
    QuantumTargeting,
    GameOver,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub position: Position,
    pub selection: Option<Square>,
    pub legal_moves: Vec<CandidateMove>,
    pub quantum_mode: bool,
    /// Chosen split destinations for the current selection (at most two).
    pub pending_quantum: Vec<Square>,
    pub outcome: Option<GameOutcome>,
    pub move_log: Vec<String>,
    pub message_history: Vec<String>,
    pub current_message: String,
}

impl GameState {
    pub fn new_game(quantum_credits: u8) -> Self {
        Self::from_position(Position::new_game(quantum_credits))
    }

    pub fn from_position(position: Position) -> Self {
        Self {
            position,
            selection: None,
            legal_moves: Vec::new(),
            quantum_mode: false,
            pending_quantum: Vec::new(),
            outcome: None,
            move_log: Vec::new(),
            message_history: vec![WELCOME_MESSAGE.to_owned()],
            current_message: WELCOME_MESSAGE.to_owned(),
        }
    }

    /// Deep copy used by the undo/redo history.
    pub fn snapshot(&self) -> Self {
        Self {
            position: self.position.clone(),
            selection: self.selection,
            legal_moves: self.legal_moves.clone(),
            quantum_mode: self.quantum_mode,
            pending_quantum: self.pending_quantum.clone(),
            outcome: self.outcome,
            move_log: self.move_log.clone(),
            message_history: self.message_history.clone(),
            current_message: self.current_message.clone(),
        }
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        let message = message.into();
        self.message_history.push(message.clone());
        self.current_message = message;
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.outcome.is_some()
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.position.side_to_move
    }

    pub fn phase(&self) -> TurnPhase {
        if self.is_game_over() {
            TurnPhase::GameOver
        } else if self.selection.is_none() {
            TurnPhase::Idle
        } else if self.quantum_mode {
            TurnPhase::QuantumTargeting
        } else {
            TurnPhase::Selected
        }
    }

    pub fn is_legal_destination(&self, square: Square) -> Option<CandidateMove> {
        self.legal_moves.iter().copied().find(|mv| mv.to == square)
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
        self.legal_moves.clear();
        self.pending_quantum.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::{GameOutcome, GameState, TurnPhase};
    use crate::game_state::chess_types::Color;

    #[test]
    fn new_game_starts_idle_with_welcome_message() {
        let game = GameState::new_game(3);
        assert_eq!(game.phase(), TurnPhase::Idle);
        assert_eq!(game.current_message, "Select a piece to move.");
        assert_eq!(game.message_history.len(), 1);
        assert_eq!(game.position.credits(Color::Light), 3);
    }

    #[test]
    fn snapshot_is_detached_from_live_state() {
        let mut game = GameState::new_game(3);
        let snapshot = game.snapshot();
        game.set_message("Check.");
        game.position.board.take(12);

        assert_eq!(snapshot.message_history.len(), 1);
        assert!(snapshot.position.board.piece_at(12).is_some());
        assert_ne!(snapshot, game);
    }

    #[test]
    fn outcome_text_names_the_winner() {
        let outcome = GameOutcome::Checkmate {
            winner: Color::Dark,
        };
        assert_eq!(outcome.text(), "Checkmate! Black wins.");
        assert_eq!(GameOutcome::Stalemate.text(), "Stalemate.");
    }
}

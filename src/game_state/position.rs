//! Board model: materialized pieces, the superposition overlay and the
//! per-side auxiliary state that move generation needs.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::DEFAULT_QUANTUM_CREDITS;
use crate::game_state::chess_types::*;
use crate::quantum::superposition::{Superposition, SuperpositionId};

/// What move generation sees on a square: a materialized piece, or one half
/// of a superposed piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Occupant {
    pub color: Color,
    pub kind: PieceKind,
    pub superposition: Option<SuperpositionId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub board: Board,
    pub side_to_move: Color,
    pub en_passant_square: Option<Square>,
    pub superpositions: Vec<Superposition>,
    /// Remaining splits, indexed by [`Color::index`].
    pub quantum_credits: [u8; 2],
    pub next_superposition_id: SuperpositionId,
}

impl Default for Position {
    fn default() -> Self {
        Self {
            board: Board::empty(),
            side_to_move: Color::Light,
            en_passant_square: None,
            superpositions: Vec::new(),
            quantum_credits: [DEFAULT_QUANTUM_CREDITS; 2],
            next_superposition_id: 1,
        }
    }
}

impl Position {
    pub fn new_game(quantum_credits: u8) -> Self {
        Self {
            board: Board::starting(),
            quantum_credits: [quantum_credits; 2],
            ..Self::default()
        }
    }

    /// Materialized piece first, then any superposition covering the square.
    pub fn occupant(&self, square: Square) -> Option<Occupant> {
        if let Some(piece) = self.board.piece_at(square) {
            return Some(Occupant {
                color: piece.color,
                kind: piece.kind,
                superposition: None,
            });
        }
        self.superposition_at(square).map(|s| Occupant {
            color: s.color,
            kind: s.kind,
            superposition: Some(s.id),
        })
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.occupant(square).is_none()
    }

    pub fn superposition_at(&self, square: Square) -> Option<&Superposition> {
        self.superpositions.iter().find(|s| s.occupies(square))
    }

    #[inline]
    pub fn credits(&self, color: Color) -> u8 {
        self.quantum_credits[color.index()]
    }
}

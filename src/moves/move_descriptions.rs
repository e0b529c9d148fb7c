//! Candidate move description shared by generation, legality filtering and
//! the session layer.

use crate::game_state::chess_types::Square;
use crate::utils::algebraic::square_to_algebraic;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    Quiet,
    DoublePawnPush,
    Capture,
    EnPassant,
    CastleKingside,
    CastleQueenside,
    /// Square a pawn covers diagonally; only emitted in attack mode.
    Attack,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CandidateMove {
    pub from: Square,
    pub to: Square,
    pub kind: MoveKind,
}

impl CandidateMove {
    #[inline]
    pub const fn new(from: Square, to: Square, kind: MoveKind) -> Self {
        Self { from, to, kind }
    }

    #[inline]
    pub const fn is_capture(&self) -> bool {
        matches!(self.kind, MoveKind::Capture | MoveKind::EnPassant)
    }

    /// Coordinate pair such as `e2-e4`.
    pub fn coordinate_text(&self) -> String {
        format!(
            "{}-{}",
            square_to_algebraic(self.from),
            square_to_algebraic(self.to)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{CandidateMove, MoveKind};

    #[test]
    fn coordinate_text_uses_from_dash_to() {
        let mv = CandidateMove::new(12, 28, MoveKind::DoublePawnPush);
        assert_eq!(mv.coordinate_text(), "e2-e4");
        assert!(!mv.is_capture());
        assert!(CandidateMove::new(36, 43, MoveKind::EnPassant).is_capture());
    }
}

//! A single logical piece occupying two squares until it collapses.

use crate::errors::{EngineError, EngineResult};
use crate::game_state::chess_types::*;

pub type SuperpositionId = u32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Superposition {
    pub id: SuperpositionId,
    pub color: Color,
    pub kind: PieceKind,
    positions: [Square; 2],
    pub has_moved: bool,
}

impl Superposition {
    pub fn new(
        id: SuperpositionId,
        color: Color,
        kind: PieceKind,
        positions: [Square; 2],
    ) -> EngineResult<Self> {
        if positions[0] == positions[1] {
            return Err(EngineError::DegenerateSuperposition {
                square: positions[0],
            });
        }
        Ok(Self {
            id,
            color,
            kind,
            positions,
            has_moved: true,
        })
    }

    #[inline]
    pub fn positions(&self) -> [Square; 2] {
        self.positions
    }

    #[inline]
    pub fn occupies(&self, square: Square) -> bool {
        self.positions.contains(&square)
    }

    /// The half that was not observed, or `None` if `square` is not covered.
    pub fn other_position(&self, square: Square) -> Option<Square> {
        match self.positions {
            [a, b] if a == square => Some(b),
            [a, b] if b == square => Some(a),
            _ => None,
        }
    }

    /// The materialized piece this entry turns into on collapse.
    #[inline]
    pub fn materialize(&self) -> Piece {
        Piece::moved(self.kind, self.color)
    }
}

#[cfg(test)]
mod tests {
    use super::Superposition;
    use crate::errors::EngineError;
    use crate::game_state::chess_types::{Color, PieceKind};

    #[test]
    fn both_halves_must_differ() {
        let err = Superposition::new(1, Color::Light, PieceKind::Rook, [9, 9])
            .expect_err("same square twice is rejected");
        assert_eq!(err, EngineError::DegenerateSuperposition { square: 9 });
    }

    #[test]
    fn other_position_mirrors_the_observed_half() {
        let entry = Superposition::new(1, Color::Dark, PieceKind::Bishop, [18, 45])
            .expect("distinct squares");
        assert_eq!(entry.other_position(18), Some(45));
        assert_eq!(entry.other_position(45), Some(18));
        assert_eq!(entry.other_position(0), None);
        assert!(entry.has_moved);
        assert!(entry.materialize().has_moved);
    }
}

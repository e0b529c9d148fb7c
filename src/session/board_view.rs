//! Read model handed to whatever paints the board.

use crate::game_state::chess_types::*;
use crate::quantum::superposition::SuperpositionId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SquareView {
    Empty,
    Piece(Piece),
    Superposed {
        id: SuperpositionId,
        color: Color,
        kind: PieceKind,
    },
}

pub fn square_view(position: &Position, square: Square) -> SquareView {
    if let Some(piece) = position.board.piece_at(square) {
        return SquareView::Piece(piece);
    }
    match position.superposition_at(square) {
        Some(entry) => SquareView::Superposed {
            id: entry.id,
            color: entry.color,
            kind: entry.kind,
        },
        None => SquareView::Empty,
    }
}

/// All 64 squares, a1 first.
pub fn board_view(position: &Position) -> Vec<SquareView> {
    (0..64u8).map(|sq| square_view(position, sq)).collect()
}

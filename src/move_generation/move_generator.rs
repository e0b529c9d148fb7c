//! Pseudo-legal move dispatch.
//!
//! Routes a square's piece to its per-kind generator. The `for_attack` flag
//! switches to attack-set computation: pawns report both diagonals
//! unconditionally, pawn pushes and castling are skipped, and enemy kings
//! count as capturable so their squares show up as attacked.

use crate::game_state::chess_types::*;
use crate::moves::bishop_moves::generate_bishop_moves;
use crate::moves::king_moves::generate_king_moves;
use crate::moves::knight_moves::generate_knight_moves;
use crate::moves::move_descriptions::CandidateMove;
use crate::moves::pawn_moves::generate_pawn_moves;
use crate::moves::queen_moves::generate_queen_moves;
use crate::moves::rook_moves::generate_rook_moves;

/// Pseudo-legal moves for the materialized piece of `color` on `from`.
///
/// Empty when the square holds no piece of that color. Superposed pieces do
/// not move; they only change by collapsing.
pub fn pseudo_moves(
    position: &Position,
    from: Square,
    color: Color,
    for_attack: bool,
) -> Vec<CandidateMove> {
    let mut out = Vec::with_capacity(28);
    if let Some(piece) = position.board.piece_at(from).filter(|p| p.color == color) {
        pseudo_moves_for_piece(position, from, piece, for_attack, &mut out);
    }
    out
}

pub fn pseudo_moves_for_piece(
    position: &Position,
    from: Square,
    piece: Piece,
    for_attack: bool,
    out: &mut Vec<CandidateMove>,
) {
    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(position, from, piece, for_attack, out),
        PieceKind::Knight => generate_knight_moves(position, from, piece.color, for_attack, out),
        PieceKind::Bishop => generate_bishop_moves(position, from, piece.color, for_attack, out),
        PieceKind::Rook => generate_rook_moves(position, from, piece.color, for_attack, out),
        PieceKind::Queen => generate_queen_moves(position, from, piece.color, for_attack, out),
        PieceKind::King => generate_king_moves(position, from, piece, for_attack, out),
    }
}

//! Legal move filtering.
//!
//! Takes pseudo-legal moves, applies each to a copy of the position, and
//! drops any move that leaves the mover's own king attacked.

use crate::errors::EngineResult;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::move_generator::pseudo_moves;
use crate::moves::move_descriptions::CandidateMove;

pub fn legal_moves_for_square(
    position: &Position,
    from: Square,
    color: Color,
) -> EngineResult<Vec<CandidateMove>> {
    let pseudo = pseudo_moves(position, from, color, false);
    let mut legal = Vec::with_capacity(pseudo.len());

    for mv in pseudo {
        let next = apply_move(position, mv)?;
        if is_king_in_check(&next, color)? {
            continue;
        }
        legal.push(mv);
    }

    Ok(legal)
}

/// Every legal move for `color`, in board order.
pub fn all_legal_moves(position: &Position, color: Color) -> EngineResult<Vec<CandidateMove>> {
    let mut legal = Vec::with_capacity(64);
    for (from, _) in position.board.pieces_of(color) {
        legal.extend(legal_moves_for_square(position, from, color)?);
    }
    Ok(legal)
}

//! Bishop ray generation.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::trace_ray;
use crate::moves::move_descriptions::CandidateMove;

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (-1, 1), (1, -1), (-1, -1)];

pub fn generate_bishop_moves(
    position: &Position,
    from: Square,
    color: Color,
    for_attack: bool,
    out: &mut Vec<CandidateMove>,
) {
    for direction in BISHOP_DIRECTIONS {
        trace_ray(position, from, color, direction, for_attack, out);
    }
}

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::step_target;
use crate::moves::move_descriptions::CandidateMove;

pub const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

pub fn generate_knight_moves(
    position: &Position,
    from: Square,
    color: Color,
    for_attack: bool,
    out: &mut Vec<CandidateMove>,
) {
    for (file_step, rank_step) in KNIGHT_JUMPS {
        let Some(to) = offset_square(from, file_step, rank_step) else {
            continue;
        };
        if let Some(mv) = step_target(position, from, to, color, for_attack) {
            out.push(mv);
        }
    }
}

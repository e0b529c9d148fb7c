use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::{CandidateMove, MoveKind};

/// Classify a single-step destination for a non-pawn piece.
///
/// Own pieces (materialized or superposed) block. Enemy kings are only
/// reported in attack mode, since a king is never actually captured.
#[inline]
pub fn step_target(
    position: &Position,
    from: Square,
    to: Square,
    color: Color,
    for_attack: bool,
) -> Option<CandidateMove> {
    match position.occupant(to) {
        None => Some(CandidateMove::new(from, to, MoveKind::Quiet)),
        Some(occupant) if occupant.color == color => None,
        Some(occupant) if occupant.kind == PieceKind::King && !for_attack => None,
        Some(_) => Some(CandidateMove::new(from, to, MoveKind::Capture)),
    }
}

/// Walk one ray until the edge or the first occupied square.
pub fn trace_ray(
    position: &Position,
    from: Square,
    color: Color,
    (file_step, rank_step): (i8, i8),
    for_attack: bool,
    out: &mut Vec<CandidateMove>,
) {
    let mut current = from;
    while let Some(to) = offset_square(current, file_step, rank_step) {
        if position.is_empty(to) {
            out.push(CandidateMove::new(from, to, MoveKind::Quiet));
            current = to;
            continue;
        }
        if let Some(mv) = step_target(position, from, to, color, for_attack) {
            out.push(mv);
        }
        break;
    }
}

//! King steps and castling.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_move_shared::step_target;
use crate::moves::move_descriptions::{CandidateMove, MoveKind};

pub const KING_STEPS: [(i8, i8); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

const KING_FILE: u8 = 4;

pub fn generate_king_moves(
    position: &Position,
    from: Square,
    king: Piece,
    for_attack: bool,
    out: &mut Vec<CandidateMove>,
) {
    for (file_step, rank_step) in KING_STEPS {
        let Some(to) = offset_square(from, file_step, rank_step) else {
            continue;
        };
        if let Some(mv) = step_target(position, from, to, king.color, for_attack) {
            out.push(mv);
        }
    }

    if !for_attack && !king.has_moved {
        generate_castling_moves(position, from, king.color, out);
    }
}

fn generate_castling_moves(
    position: &Position,
    king_from: Square,
    color: Color,
    out: &mut Vec<CandidateMove>,
) {
    let rank = color.home_rank();
    if king_from != square_at(KING_FILE, rank) {
        return;
    }

    // Cannot castle out of check.
    if is_square_attacked(position, king_from, color) {
        return;
    }

    // (rook file, files that must be empty, files the king crosses, destination file, kind)
    let sides: [(u8, &[u8], [u8; 2], u8, MoveKind); 2] = [
        (7, &[5, 6], [5, 6], 6, MoveKind::CastleKingside),
        (0, &[1, 2, 3], [3, 2], 2, MoveKind::CastleQueenside),
    ];

    for (rook_file, empty_files, transit_files, to_file, kind) in sides {
        if !is_unmoved_rook(position, square_at(rook_file, rank), color) {
            continue;
        }
        if !empty_files
            .iter()
            .all(|file| position.is_empty(square_at(*file, rank)))
        {
            continue;
        }
        if transit_files
            .iter()
            .any(|file| is_square_attacked(position, square_at(*file, rank), color))
        {
            continue;
        }
        out.push(CandidateMove::new(king_from, square_at(to_file, rank), kind));
    }
}

fn is_unmoved_rook(position: &Position, square: Square, color: Color) -> bool {
    matches!(
        position.board.piece_at(square),
        Some(Piece { kind: PieceKind::Rook, color: c, has_moved: false }) if c == color
    )
}

//! Pawn pushes, captures and en-passant.
//!
//! In attack mode only the two diagonal squares are reported, occupied or
//! not, so the result describes what the pawn covers rather than where it
//! may go.

use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::{CandidateMove, MoveKind};

pub fn generate_pawn_moves(
    position: &Position,
    from: Square,
    pawn: Piece,
    for_attack: bool,
    out: &mut Vec<CandidateMove>,
) {
    let color = pawn.color;
    let dir = color.pawn_direction();

    if !for_attack {
        if let Some(one) = offset_square(from, 0, dir).filter(|sq| position.is_empty(*sq)) {
            out.push(CandidateMove::new(from, one, MoveKind::Quiet));

            if !pawn.has_moved {
                if let Some(two) = offset_square(from, 0, 2 * dir).filter(|sq| position.is_empty(*sq)) {
                    out.push(CandidateMove::new(from, two, MoveKind::DoublePawnPush));
                }
            }
        }
    }

    for file_step in [-1i8, 1i8] {
        let Some(to) = offset_square(from, file_step, dir) else {
            continue;
        };
        if for_attack {
            out.push(CandidateMove::new(from, to, MoveKind::Attack));
            continue;
        }
        match position.occupant(to) {
            Some(target) if target.color != color && target.kind != PieceKind::King => {
                out.push(CandidateMove::new(from, to, MoveKind::Capture));
            }
            None if position.en_passant_square == Some(to) => {
                out.push(CandidateMove::new(from, to, MoveKind::EnPassant));
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::generate_pawn_moves;
    use crate::game_state::chess_types::{Color, Piece, PieceKind, Position};
    use crate::moves::move_descriptions::MoveKind;
    use crate::utils::fen_parser::parse_position;

    #[test]
    fn unmoved_pawn_can_push_one_or_two() {
        let position = Position::new_game(3);
        let pawn = Piece::new(PieceKind::Pawn, Color::Light);
        let mut out = Vec::new();
        generate_pawn_moves(&position, 12, pawn, false, &mut out);

        assert_eq!(out.len(), 2);
        assert_eq!(out[0].to, 20);
        assert_eq!(out[1].kind, MoveKind::DoublePawnPush);
        assert_eq!(out[1].to, 28);
    }

    #[test]
    fn attack_mode_reports_both_diagonals_even_when_empty() {
        let position = Position::new_game(3);
        let pawn = Piece::new(PieceKind::Pawn, Color::Dark);
        let mut out = Vec::new();
        generate_pawn_moves(&position, 52, pawn, true, &mut out);

        let targets: Vec<u8> = out.iter().map(|mv| mv.to).collect();
        assert_eq!(targets, vec![43, 45]);
        assert!(out.iter().all(|mv| mv.kind == MoveKind::Attack));
    }

    #[test]
    fn en_passant_only_onto_the_recorded_target() {
        // White pawn e5, black pawn just arrived on d5.
        let position =
            parse_position("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1").expect("FEN should parse");
        let pawn = position.board.piece_at(36).expect("pawn on e5");
        let mut out = Vec::new();
        generate_pawn_moves(&position, 36, pawn, false, &mut out);

        assert!(out
            .iter()
            .any(|mv| mv.to == 43 && mv.kind == MoveKind::EnPassant));
        assert!(!out.iter().any(|mv| mv.to == 45));
    }
}

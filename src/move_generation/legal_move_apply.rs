//! Board-level move application.
//!
//! Produces the next position for a candidate move: clears the origin,
//! removes en-passant victims, relocates the castling rook, marks the mover
//! as moved, auto-promotes pawns to queens and records the new en-passant
//! target. The side to move is left untouched; turn flipping belongs to the
//! session layer.

use crate::errors::{EngineError, EngineResult};
use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::{CandidateMove, MoveKind};

pub fn apply_move(position: &Position, mv: CandidateMove) -> EngineResult<Position> {
    let mut next = position.clone();
    apply_move_in_place(&mut next, mv)?;
    Ok(next)
}

pub fn apply_move_in_place(position: &mut Position, mv: CandidateMove) -> EngineResult<()> {
    let mut piece = position
        .board
        .take(mv.from)
        .ok_or(EngineError::EmptyOrigin { square: mv.from })?;
    let color = piece.color;

    // A superposition still covering the destination counts as destroyed.
    position.superpositions.retain(|s| !s.occupies(mv.to));

    match mv.kind {
        MoveKind::EnPassant => {
            if let Some(victim) = offset_square(mv.to, 0, -color.pawn_direction()) {
                position.board.take(victim);
            }
        }
        MoveKind::CastleKingside => move_rook(position, color.home_rank(), 7, 5),
        MoveKind::CastleQueenside => move_rook(position, color.home_rank(), 0, 3),
        _ => {}
    }

    piece.has_moved = true;
    if piece.kind == PieceKind::Pawn && rank_of(mv.to) == color.promotion_rank() {
        piece.kind = PieceKind::Queen;
    }
    position.board.set(mv.to, Some(piece));

    position.en_passant_square = if mv.kind == MoveKind::DoublePawnPush {
        Some((mv.from + mv.to) / 2)
    } else {
        None
    };

    Ok(())
}

fn move_rook(position: &mut Position, rank: u8, from_file: u8, to_file: u8) {
    if let Some(mut rook) = position.board.take(square_at(from_file, rank)) {
        rook.has_moved = true;
        position.board.set(square_at(to_file, rank), Some(rook));
    }
}

#[cfg(test)]
mod tests {
    use super::apply_move;
    use crate::errors::EngineError;
    use crate::game_state::chess_types::{PieceKind, Position};
    use crate::moves::move_descriptions::{CandidateMove, MoveKind};
    use crate::utils::fen_parser::parse_position;

    #[test]
    fn double_push_records_en_passant_target() {
        let position = Position::new_game(3);
        let next = apply_move(&position, CandidateMove::new(12, 28, MoveKind::DoublePawnPush))
            .expect("e2-e4 applies");
        assert_eq!(next.en_passant_square, Some(20));
        assert!(next.board.piece_at(12).is_none());
        assert!(next.board.piece_at(28).expect("pawn on e4").has_moved);
    }

    #[test]
    fn en_passant_removes_the_passed_pawn() {
        let position =
            parse_position("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1").expect("FEN should parse");
        let next = apply_move(&position, CandidateMove::new(36, 43, MoveKind::EnPassant))
            .expect("exd6 applies");
        assert!(next.board.piece_at(35).is_none());
        assert_eq!(next.board.piece_at(43).map(|p| p.kind), Some(PieceKind::Pawn));
        assert_eq!(next.en_passant_square, None);
    }

    #[test]
    fn castling_relocates_the_rook() {
        let position = parse_position("4k3/8/8/8/8/8/8/R3K2R w KQ - 0 1").expect("FEN should parse");
        let next = apply_move(&position, CandidateMove::new(4, 2, MoveKind::CastleQueenside))
            .expect("O-O-O applies");
        assert!(next.board.piece_at(0).is_none());
        let rook = next.board.piece_at(3).expect("rook on d1");
        assert_eq!(rook.kind, PieceKind::Rook);
        assert!(rook.has_moved);
    }

    #[test]
    fn pawn_reaching_back_rank_becomes_a_queen() {
        let position = parse_position("4k3/1P6/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let next = apply_move(&position, CandidateMove::new(49, 57, MoveKind::Quiet))
            .expect("b8=Q applies");
        assert_eq!(next.board.piece_at(57).map(|p| p.kind), Some(PieceKind::Queen));
    }

    #[test]
    fn moving_from_an_empty_square_is_an_invariant_error() {
        let position = Position::new_game(3);
        let result = apply_move(&position, CandidateMove::new(28, 36, MoveKind::Quiet));
        assert_eq!(result, Err(EngineError::EmptyOrigin { square: 28 }));
    }
}

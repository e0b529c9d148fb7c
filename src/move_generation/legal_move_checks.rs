use crate::errors::{EngineError, EngineResult};
use crate::game_state::chess_types::*;
use crate::move_generation::move_generator::pseudo_moves_for_piece;

/// Whether `color`'s king is attacked. A missing king is an invariant
/// violation, since kings can neither be captured nor superposed.
pub fn is_king_in_check(position: &Position, color: Color) -> EngineResult<bool> {
    let king_sq = position.board.king_square(color).ok_or(EngineError::MissingKing { color })?;
    Ok(is_square_attacked(position, king_sq, color))
}

/// True if any enemy of `own_color` has `square` in its attack set.
///
/// Only materialized pieces attack; superposed pieces block rays but exert
/// no threat of their own.
pub fn is_square_attacked(position: &Position, square: Square, own_color: Color) -> bool {
    let mut attacks = Vec::with_capacity(28);
    for (from, piece) in position.board.pieces_of(own_color.opposite()) {
        attacks.clear();
        pseudo_moves_for_piece(position, from, piece, true, &mut attacks);
        if attacks.iter().any(|mv| mv.to == square) {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::{is_king_in_check, is_square_attacked};
    use crate::errors::EngineError;
    use crate::game_state::chess_types::{Color, Position};
    use crate::utils::fen_parser::parse_position;

    #[test]
    fn pawn_diagonals_count_as_attacked_even_when_empty() {
        let position = Position::new_game(3);
        // e3 is covered by the d2 and f2 pawns.
        assert!(is_square_attacked(&position, 20, Color::Dark));
        // e4 is not covered by anything on the starting board.
        assert!(!is_square_attacked(&position, 28, Color::Dark));
    }

    #[test]
    fn rook_gives_check_down_an_open_file() {
        let position = parse_position("4r1k1/8/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        assert!(is_king_in_check(&position, Color::Light).expect("king present"));
        assert!(!is_king_in_check(&position, Color::Dark).expect("king present"));
    }

    #[test]
    fn missing_king_is_an_invariant_error() {
        let position = parse_position("8/8/8/8/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        assert_eq!(
            is_king_in_check(&position, Color::Dark),
            Err(EngineError::MissingKing { color: Color::Dark })
        );
    }
}

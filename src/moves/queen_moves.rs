use crate::game_state::chess_types::*;
use crate::moves::bishop_moves::generate_bishop_moves;
use crate::moves::move_descriptions::CandidateMove;
use crate::moves::rook_moves::generate_rook_moves;

#[inline]
pub fn generate_queen_moves(
    position: &Position,
    from: Square,
    color: Color,
    for_attack: bool,
    out: &mut Vec<CandidateMove>,
) {
    generate_rook_moves(position, from, color, for_attack, out);
    generate_bishop_moves(position, from, color, for_attack, out);
}

#[cfg(test)]
mod tests {
    use super::generate_queen_moves;
    use crate::game_state::chess_types::{Color, Position};

    #[test]
    fn queen_is_boxed_in_on_the_starting_board() {
        let position = Position::new_game(3);
        let mut out = Vec::new();
        generate_queen_moves(&position, 3, Color::Light, false, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn queen_on_open_board_has_twenty_seven_squares() {
        let position = crate::utils::fen_parser::parse_position("k7/8/8/8/3Q4/8/8/7K w - - 0 1")
            .expect("FEN should parse");
        let mut out = Vec::new();
        generate_queen_moves(&position, 27, Color::Light, false, &mut out);
        assert_eq!(out.len(), 27);
    }
}

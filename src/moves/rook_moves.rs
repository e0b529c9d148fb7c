use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_shared::trace_ray;
use crate::moves::move_descriptions::CandidateMove;

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

pub fn generate_rook_moves(
    position: &Position,
    from: Square,
    color: Color,
    for_attack: bool,
    out: &mut Vec<CandidateMove>,
) {
    for direction in ROOK_DIRECTIONS {
        trace_ray(position, from, color, direction, for_attack, out);
    }
}

#[cfg(test)]
mod tests {
    use super::generate_rook_moves;
    use crate::game_state::chess_types::{Color, PieceKind};
    use crate::quantum::superposition::Superposition;
    use crate::utils::fen_parser::parse_position;

    #[test]
    fn rook_on_empty_board_sees_fourteen_squares() {
        let position = parse_position("k7/8/8/8/3R4/8/8/7K w - - 0 1").expect("FEN should parse");
        let mut out = Vec::new();
        generate_rook_moves(&position, 27, Color::Light, false, &mut out);
        assert_eq!(out.len(), 14);
    }

    #[test]
    fn superposed_squares_block_and_can_be_captured() {
        let mut position =
            parse_position("k7/8/8/8/R7/8/8/7K w - - 0 1").expect("FEN should parse");
        // Enemy knight superposed on a6 and h4.
        position.superpositions.push(
            Superposition::new(1, Color::Dark, PieceKind::Knight, [40, 31])
                .expect("distinct squares"),
        );

        let mut out = Vec::new();
        generate_rook_moves(&position, 24, Color::Light, false, &mut out);
        let targets: Vec<u8> = out.iter().map(|mv| mv.to).collect();

        assert!(targets.contains(&32));
        assert!(targets.contains(&40));
        assert!(!targets.contains(&48));
        assert!(targets.contains(&31));
    }
}

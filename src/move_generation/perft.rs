//! Leaf-node counting over the standard-chess part of the generator.
//!
//! Promotions are always to a queen, so counts match published perft numbers
//! only up to the depth where under-promotions first appear.

use crate::errors::EngineResult;
use crate::game_state::chess_types::Position;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_generator::all_legal_moves;

pub fn perft(position: &Position, depth: u8) -> EngineResult<u64> {
    if depth == 0 {
        return Ok(1);
    }

    let side = position.side_to_move;
    let moves = all_legal_moves(position, side)?;
    if depth == 1 {
        return Ok(moves.len() as u64);
    }

    let mut nodes = 0u64;
    for mv in moves {
        let mut next = apply_move(position, mv)?;
        next.side_to_move = side.opposite();
        nodes += perft(&next, depth - 1)?;
    }
    Ok(nodes)
}

#[cfg(test)]
mod tests {
    use super::perft;
    use crate::game_state::chess_types::Position;
    use crate::utils::fen_parser::parse_position;

    #[test]
    fn perft_startpos_matches_reference_counts() {
        let position = Position::new_game(3);
        let expected = [20u64, 400, 8902];
        for (i, nodes) in expected.iter().enumerate() {
            let depth = (i + 1) as u8;
            assert_eq!(
                perft(&position, depth).expect("perft succeeds"),
                *nodes,
                "startpos depth {depth}"
            );
        }
    }

    #[test]
    fn perft_en_passant_endgame_matches_reference_counts() {
        let position = parse_position("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1")
            .expect("FEN should parse");
        let expected = [14u64, 191, 2812];
        for (i, nodes) in expected.iter().enumerate() {
            let depth = (i + 1) as u8;
            assert_eq!(
                perft(&position, depth).expect("perft succeeds"),
                *nodes,
                "position 3 depth {depth}"
            );
        }
    }
}

//! Captures-first random engine.
//!
//! Prefers any move that lands on an occupied square (superposed halves
//! included) or takes en-passant, and picks uniformly at random within that
//! pool. Falls back to a uniformly random legal move when nothing captures.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::engines::engine_trait::Engine;
use crate::errors::EngineResult;
use crate::game_state::chess_types::{Color, Position};
use crate::move_generation::legal_move_generator::all_legal_moves;
use crate::moves::move_descriptions::CandidateMove;

pub struct GreedyEngine {
    rng: StdRng,
}

impl GreedyEngine {
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(|| rand::rng().random());
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for GreedyEngine {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Engine for GreedyEngine {
    fn name(&self) -> &str {
        "Quantum Greedy"
    }

    fn choose_move(
        &mut self,
        position: &Position,
        color: Color,
    ) -> EngineResult<Option<CandidateMove>> {
        let legal_moves = all_legal_moves(position, color)?;
        if legal_moves.is_empty() {
            return Ok(None);
        }

        let captures: Vec<CandidateMove> = legal_moves
            .iter()
            .copied()
            .filter(CandidateMove::is_capture)
            .collect();
        let pool = if captures.is_empty() {
            &legal_moves
        } else {
            &captures
        };

        debug!(
            legal = legal_moves.len(),
            captures = captures.len(),
            "greedy engine choosing"
        );
        Ok(pool.as_slice().choose(&mut self.rng).copied())
    }
}

#[cfg(test)]
mod tests {
    use super::GreedyEngine;
    use crate::engines::engine_trait::Engine;
    use crate::game_state::chess_types::{Color, PieceKind, Position};
    use crate::quantum::superposition::Superposition;
    use crate::utils::fen_parser::parse_position;

    #[test]
    fn always_takes_when_a_capture_exists() {
        // Black queen on d5 can take the undefended pawn on d2.
        let position = parse_position("4k3/8/8/3q4/8/8/3P4/K7 b - - 0 1").expect("FEN should parse");
        for seed in 0..8 {
            let mut engine = GreedyEngine::new(Some(seed));
            let mv = engine
                .choose_move(&position, Color::Dark)
                .expect("generation succeeds")
                .expect("black has moves");
            assert_eq!(mv.to, 11);
        }
    }

    #[test]
    fn superposed_halves_count_as_captures() {
        let mut position = parse_position("4k3/8/8/3q4/8/8/8/K7 b - - 0 1").expect("FEN should parse");
        position.superpositions.push(
            Superposition::new(1, Color::Light, PieceKind::Knight, [11, 39]).expect("distinct squares"),
        );
        let mut engine = GreedyEngine::new(Some(5));
        let mv = engine
            .choose_move(&position, Color::Dark)
            .expect("generation succeeds")
            .expect("black has moves");
        assert!(mv.is_capture());
        assert!([11, 39].contains(&mv.to));
    }

    #[test]
    fn picks_a_legal_move_from_the_start() {
        let position = Position::new_game(3);
        let mut engine = GreedyEngine::new(Some(1));
        let mv = engine
            .choose_move(&position, Color::Light)
            .expect("generation succeeds")
            .expect("white has moves");
        assert!(position.board.piece_at(mv.from).is_some());
    }

    #[test]
    fn no_moves_means_no_choice() {
        // Black king on a8 is stalemated.
        let position = parse_position("k7/2Q5/1K6/8/8/8/8/8 b - - 0 1").expect("FEN should parse");
        let mut engine = GreedyEngine::new(Some(3));
        let choice = engine.choose_move(&position, Color::Dark).expect("generation succeeds");
        assert_eq!(choice, None);
    }
}

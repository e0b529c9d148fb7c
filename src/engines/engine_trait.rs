//! Automated opponent abstraction.
//!
//! The session asks an `Engine` for a reply when the automated side is to
//! move; different strategies can be swapped in behind this trait.

use crate::errors::EngineResult;
use crate::game_state::chess_types::{Color, Position};
use crate::moves::move_descriptions::CandidateMove;

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    /// Pick a legal move for `color`, or `None` when it has none.
    fn choose_move(&mut self, position: &Position, color: Color)
        -> EngineResult<Option<CandidateMove>>;
}

use chrono::Duration;

use crate::game_state::chess_rules::{
    DEFAULT_HISTORY_CAPACITY, DEFAULT_OPPONENT_DELAY_MS, DEFAULT_QUANTUM_CREDITS,
    DEFAULT_SURVIVAL_PROBABILITY,
};
use crate::game_state::chess_types::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayMode {
    /// Both sides are driven by the caller.
    Pvp,
    /// One side is answered by the automated opponent.
    Ai,
}

impl std::str::FromStr for PlayMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pvp" => Ok(PlayMode::Pvp),
            "ai" => Ok(PlayMode::Ai),
            _ => Err(format!("unknown play mode: {s}")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct GameConfig {
    pub mode: PlayMode,
    pub quantum_credits: u8,
    pub history_capacity: usize,
    pub survival_probability: f64,
    pub opponent_delay: Duration,
    pub automated_side: Color,
    /// Seeds both the collapse source and the automated opponent.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: PlayMode::Pvp,
            quantum_credits: DEFAULT_QUANTUM_CREDITS,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            survival_probability: DEFAULT_SURVIVAL_PROBABILITY,
            opponent_delay: Duration::milliseconds(DEFAULT_OPPONENT_DELAY_MS),
            automated_side: Color::Dark,
            seed: None,
        }
    }
}

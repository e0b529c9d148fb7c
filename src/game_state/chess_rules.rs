//! Canonical rule constants.
//!
//! Stores the standard starting layout plus the quantum-specific limits that
//! the session layer uses as configuration defaults.

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Splits each side may create over a whole game. Credits never regenerate.
pub const DEFAULT_QUANTUM_CREDITS: u8 = 3;

/// Oldest undo snapshots are evicted past this many entries.
pub const DEFAULT_HISTORY_CAPACITY: usize = 200;

/// Chance that an observed superposed piece survives on its other square.
pub const DEFAULT_SURVIVAL_PROBABILITY: f64 = 0.5;

/// Delay before the automated opponent replies.
pub const DEFAULT_OPPONENT_DELAY_MS: i64 = 320;

pub const WELCOME_MESSAGE: &str = "Select a piece to move.";
pub const NEW_GAME_MESSAGE: &str = "New game started.";

//! Crate root module declarations for the Quantum Chess rules engine.
//!
//! Exposes the board model, classical move generation, the superposition
//! and collapse layer, the automated opponent and the game session so the
//! terminal driver, tests and benches can import stable module paths.

pub mod errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod position;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_descriptions;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod move_generator;
    pub mod perft;
}

pub mod quantum {
    pub mod collapse_source;
    pub mod quantum_moves;
    pub mod superposition;
}

pub mod engines {
    pub mod engine_greedy;
    pub mod engine_trait;
}

pub mod session {
    pub mod board_view;
    pub mod game_config;
    pub mod game_session;
    pub mod history;
    pub mod reply_scheduler;
    pub mod turn_flow;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_parser;
    pub mod render_game_state;
}

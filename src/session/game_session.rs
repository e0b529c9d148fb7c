//! The controller a UI talks to.
//!
//! `QuantumChess` exclusively owns the live [`GameState`] and threads it
//! through the turn state machine, records history before every mutating
//! action, and drives the automated opponent through a single cancelable
//! scheduled reply.

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::engines::engine_greedy::GreedyEngine;
use crate::engines::engine_trait::Engine;
use crate::errors::EngineResult;
use crate::game_state::chess_rules::NEW_GAME_MESSAGE;
use crate::game_state::chess_types::*;
use crate::quantum::collapse_source::{CollapseSource, SeededCollapse};
use crate::session::board_view::{board_view, square_view, SquareView};
use crate::session::game_config::{GameConfig, PlayMode};
use crate::session::history::History;
use crate::session::reply_scheduler::ReplyScheduler;
use crate::session::turn_flow::{
    apply_click, can_toggle_quantum, classify_click, execute_move, toggle_quantum_mode,
    ActionOutcome,
};
use crate::utils::algebraic::algebraic_to_square;

pub struct QuantumChess {
    config: GameConfig,
    state: GameState,
    history: History,
    scheduler: ReplyScheduler,
    collapse_source: Box<dyn CollapseSource>,
    opponent: Box<dyn Engine>,
}

impl QuantumChess {
    pub fn new(config: GameConfig) -> Self {
        let collapse_source = Box::new(SeededCollapse::new(config.seed));
        let opponent = Box::new(GreedyEngine::new(config.seed));
        Self::with_parts(config, collapse_source, opponent)
    }

    pub fn with_parts(
        config: GameConfig,
        collapse_source: Box<dyn CollapseSource>,
        opponent: Box<dyn Engine>,
    ) -> Self {
        Self {
            state: GameState::new_game(config.quantum_credits),
            history: History::new(config.history_capacity),
            scheduler: ReplyScheduler::new(),
            config,
            collapse_source,
            opponent,
        }
    }

    /// Replace the game with a set-up position. History is discarded.
    pub fn load_position(&mut self, position: Position) {
        self.state = GameState::from_position(position);
        self.history.clear();
        self.scheduler.invalidate();
        self.schedule_reply_if_automated(Utc::now());
    }

    // ---- Actions ---------------------------------------------------------

    pub fn select_or_act(&mut self, square: Square) -> EngineResult<ActionOutcome> {
        if self.is_automated_turn() {
            return Ok(ActionOutcome::Ignored);
        }
        let action = classify_click(&self.state, square)?;
        if action.is_mutating() {
            self.history.record(&self.state);
        }
        let outcome = apply_click(
            &mut self.state,
            action,
            self.config.survival_probability,
            self.collapse_source.as_mut(),
        )?;
        if matches!(
            outcome,
            ActionOutcome::Moved | ActionOutcome::QuantumSplit | ActionOutcome::Collapsed
        ) {
            self.schedule_reply_if_automated(Utc::now());
        }
        Ok(outcome)
    }

    /// Click by coordinate name, e.g. `"e2"`.
    pub fn select_or_act_at(&mut self, square: &str) -> EngineResult<ActionOutcome> {
        let square = algebraic_to_square(square)?;
        self.select_or_act(square)
    }

    pub fn toggle_quantum_mode(&mut self) -> ActionOutcome {
        if self.is_automated_turn() || self.state.is_game_over() {
            return ActionOutcome::Ignored;
        }
        if can_toggle_quantum(&self.state) {
            self.history.record(&self.state);
        } else {
            warn!(side = ?self.state.side_to_move(), "quantum toggle without credits");
        }
        toggle_quantum_mode(&mut self.state)
    }

    /// Step back one action. In `Ai` mode keep stepping until the human is
    /// to move again. Returns `false` when there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.history.undo(&self.state) else {
            return false;
        };
        self.state = previous;
        while self.is_automated_turn() {
            match self.history.undo(&self.state) {
                Some(previous) => self.state = previous,
                None => break,
            }
        }
        info!(undo_left = self.history.undo_len(), "undo");
        self.scheduler.invalidate();
        self.schedule_reply_if_automated(Utc::now());
        true
    }

    pub fn redo(&mut self) -> bool {
        let Some(next) = self.history.redo(&self.state) else {
            return false;
        };
        self.state = next;
        while self.is_automated_turn() {
            match self.history.redo(&self.state) {
                Some(next) => self.state = next,
                None => break,
            }
        }
        info!(undo_left = self.history.undo_len(), "redo");
        self.scheduler.invalidate();
        self.schedule_reply_if_automated(Utc::now());
        true
    }

    pub fn new_game(&mut self, mode: PlayMode) {
        self.config.mode = mode;
        self.state = GameState::new_game(self.config.quantum_credits);
        self.state.set_message(NEW_GAME_MESSAGE);
        self.history.clear();
        self.scheduler.invalidate();
        self.opponent.new_game();
        info!(?mode, "new game");
        self.schedule_reply_if_automated(Utc::now());
    }

    pub fn set_mode(&mut self, mode: PlayMode) {
        self.config.mode = mode;
        self.scheduler.invalidate();
        self.schedule_reply_if_automated(Utc::now());
    }

    /// Fire the automated reply if one is due at `now` and still current.
    /// Returns whether a move was played.
    pub fn tick(&mut self, now: DateTime<Utc>) -> EngineResult<bool> {
        if self.scheduler.take_due(now).is_none() || !self.is_automated_turn() {
            return Ok(false);
        }
        let side = self.state.side_to_move();
        let Some(mv) = self.opponent.choose_move(&self.state.position, side)? else {
            return Ok(false);
        };

        info!(engine = self.opponent.name(), mv = %mv.coordinate_text(), "automated reply");
        self.history.record(&self.state);
        execute_move(
            &mut self.state,
            mv,
            self.config.survival_probability,
            self.collapse_source.as_mut(),
        )?;
        self.schedule_reply_if_automated(now);
        Ok(true)
    }

    fn is_automated_turn(&self) -> bool {
        self.config.mode == PlayMode::Ai
            && self.state.side_to_move() == self.config.automated_side
            && !self.state.is_game_over()
    }

    fn schedule_reply_if_automated(&mut self, now: DateTime<Utc>) {
        if self.is_automated_turn() {
            self.scheduler.schedule(now, self.config.opponent_delay);
        }
    }

    // ---- Read model ------------------------------------------------------

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn mode(&self) -> PlayMode {
        self.config.mode
    }

    pub fn square_view(&self, square: Square) -> SquareView {
        square_view(&self.state.position, square)
    }

    pub fn board_view(&self) -> Vec<SquareView> {
        board_view(&self.state.position)
    }

    pub fn legal_destinations(&self) -> Vec<Square> {
        self.state.legal_moves.iter().map(|mv| mv.to).collect()
    }

    pub fn pending_quantum_targets(&self) -> &[Square] {
        &self.state.pending_quantum
    }

    pub fn quantum_credits(&self, color: Color) -> u8 {
        self.state.position.credits(color)
    }

    pub fn can_toggle_quantum(&self) -> bool {
        can_toggle_quantum(&self.state)
    }

    pub fn current_message(&self) -> &str {
        &self.state.current_message
    }

    pub fn message_history(&self) -> &[String] {
        &self.state.message_history
    }

    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }

    pub fn outcome_text(&self) -> Option<String> {
        self.state.outcome.map(GameOutcome::text)
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// When the automated reply is due, if one is pending.
    pub fn pending_reply_at(&self) -> Option<DateTime<Utc>> {
        self.scheduler.pending().map(|reply| reply.due_at)
    }
}

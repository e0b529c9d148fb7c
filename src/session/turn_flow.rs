//! Turn state machine.
//!
//! `classify_click` maps a square click onto a transition without touching
//! the state, so the caller can snapshot history before any mutating
//! transition. `apply_click` then performs it. Every committed move, split or
//! owner collapse ends in `complete_turn`.

use tracing::{debug, info};

use crate::errors::{EngineError, EngineResult};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::apply_move_in_place;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::{all_legal_moves, legal_moves_for_square};
use crate::moves::move_descriptions::CandidateMove;
use crate::quantum::collapse_source::CollapseSource;
use crate::quantum::quantum_moves::{
    can_split, collapse_by_owner, collapse_on_capture, create_split, is_valid_quantum_target,
    materialize_at,
};
use crate::utils::algebraic::square_to_algebraic;

const SELECT_DESTINATION: &str = "Select destination.";
const SELECT_TWO_DESTINATIONS: &str = "Choose two legal destination squares.";
const SELECT_SECOND_DESTINATION: &str = "Select a second legal destination to complete superposition.";
const KING_CANNOT_SPLIT: &str = "Kings cannot enter superposition.";
const TARGET_NOT_EMPTY: &str = "A superposition needs two empty destination squares.";
const QUANTUM_ON: &str = "Quantum mode on: select a piece, then two legal targets.";
const QUANTUM_OFF: &str = "Quantum mode off.";
const NO_QUANTUM_LEFT: &str = "No quantum opportunities left for this side.";
const COLLAPSE_EXPOSES_KING: &str = "Collapsing there would leave your king in check.";

/// Result of one external action, for callers that want to react (sound,
/// animation) without diffing state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    Selected,
    Deselected,
    QuantumTargetRecorded,
    Moved,
    QuantumSplit,
    Collapsed,
    QuantumModeToggled { on: bool },
    /// The action was understood but not allowed; an advisory message was set.
    Rejected,
    /// Nothing happened.
    Ignored,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickAction {
    Ignore,
    Deselect,
    Select(Square),
    RecordQuantumTarget(Square),
    Reject(&'static str),
    CommitMove(CandidateMove),
    CommitSplit { from: Square, targets: [Square; 2] },
    CollapseOwn(Square),
}

impl ClickAction {
    /// Transitions that change the position and must be undoable.
    pub fn is_mutating(&self) -> bool {
        matches!(
            self,
            ClickAction::CommitMove(_) | ClickAction::CommitSplit { .. } | ClickAction::CollapseOwn(_)
        )
    }
}

pub fn classify_click(state: &GameState, square: Square) -> EngineResult<ClickAction> {
    if state.is_game_over() {
        return Ok(ClickAction::Ignore);
    }
    let side = state.side_to_move();
    let position = &state.position;

    if let (Some(from), true) = (state.selection, state.quantum_mode) {
        if let Some(mv) = state.is_legal_destination(square) {
            let splittable = position
                .board
                .piece_at(from)
                .is_some_and(|piece| can_split(piece.kind));
            if !splittable {
                return Ok(ClickAction::Reject(KING_CANNOT_SPLIT));
            }
            if !is_valid_quantum_target(position, &mv) {
                return Ok(ClickAction::Reject(TARGET_NOT_EMPTY));
            }
            return Ok(match state.pending_quantum.as_slice() {
                [first] if *first != square => ClickAction::CommitSplit {
                    from,
                    targets: [*first, square],
                },
                _ => ClickAction::RecordQuantumTarget(square),
            });
        }
    }

    if let (Some(_), false) = (state.selection, state.quantum_mode) {
        if let Some(mv) = state.is_legal_destination(square) {
            return Ok(ClickAction::CommitMove(mv));
        }
    }

    if position
        .superposition_at(square)
        .is_some_and(|entry| entry.color == side)
    {
        let mut trial = position.clone();
        materialize_at(&mut trial, square)?;
        if is_king_in_check(&trial, side)? {
            return Ok(ClickAction::Reject(COLLAPSE_EXPOSES_KING));
        }
        return Ok(ClickAction::CollapseOwn(square));
    }

    if position
        .board
        .piece_at(square)
        .is_some_and(|piece| piece.color == side)
    {
        return Ok(ClickAction::Select(square));
    }

    Ok(ClickAction::Deselect)
}

pub fn apply_click(
    state: &mut GameState,
    action: ClickAction,
    survival_probability: f64,
    source: &mut dyn CollapseSource,
) -> EngineResult<ActionOutcome> {
    match action {
        ClickAction::Ignore => Ok(ActionOutcome::Ignored),
        ClickAction::Deselect => {
            state.clear_selection();
            Ok(ActionOutcome::Deselected)
        }
        ClickAction::Select(square) => select_square(state, square),
        ClickAction::RecordQuantumTarget(square) => {
            if !state.pending_quantum.contains(&square) {
                state.pending_quantum.push(square);
            }
            debug!(target = %square_to_algebraic(square), "quantum target recorded");
            state.set_message(SELECT_SECOND_DESTINATION);
            Ok(ActionOutcome::QuantumTargetRecorded)
        }
        ClickAction::Reject(reason) => {
            state.set_message(reason);
            Ok(ActionOutcome::Rejected)
        }
        ClickAction::CommitMove(mv) => execute_move(state, mv, survival_probability, source),
        ClickAction::CommitSplit { from, targets } => create_quantum_move(state, from, targets),
        ClickAction::CollapseOwn(square) => materialize_by_selection(state, square),
    }
}

fn select_square(state: &mut GameState, square: Square) -> EngineResult<ActionOutcome> {
    let side = state.side_to_move();
    state.selection = Some(square);
    state.legal_moves = legal_moves_for_square(&state.position, square, side)?;
    state.pending_quantum.clear();
    debug!(
        square = %square_to_algebraic(square),
        destinations = state.legal_moves.len(),
        "piece selected"
    );
    state.set_message(if state.quantum_mode {
        SELECT_TWO_DESTINATIONS
    } else {
        SELECT_DESTINATION
    });
    Ok(ActionOutcome::Selected)
}

/// Commit a standard move, collapsing any superposition on the destination
/// first.
pub fn execute_move(
    state: &mut GameState,
    mv: CandidateMove,
    survival_probability: f64,
    source: &mut dyn CollapseSource,
) -> EngineResult<ActionOutcome> {
    if state.is_game_over() {
        return Ok(ActionOutcome::Ignored);
    }
    if state.position.board.piece_at(mv.from).is_none() {
        return Err(EngineError::EmptyOrigin { square: mv.from });
    }

    let collapse = collapse_on_capture(&mut state.position, mv.to, survival_probability, source)?;
    apply_move_in_place(&mut state.position, mv)?;

    info!(mv = %mv.coordinate_text(), kind = ?mv.kind, "move committed");
    state.move_log.push(mv.coordinate_text());
    let base_message = collapse.map(|c| c.message()).unwrap_or_default();
    complete_turn(state, &base_message)?;
    Ok(ActionOutcome::Moved)
}

pub fn create_quantum_move(
    state: &mut GameState,
    from: Square,
    targets: [Square; 2],
) -> EngineResult<ActionOutcome> {
    if state.is_game_over() {
        return Ok(ActionOutcome::Ignored);
    }
    if create_split(&mut state.position, from, targets)?.is_none() {
        return Ok(ActionOutcome::Ignored);
    }

    let [a, b] = targets.map(square_to_algebraic);
    state
        .move_log
        .push(format!("{}-{a}|{b}", square_to_algebraic(from)));
    complete_turn(state, &format!("Quantum split created at {a} and {b}."))?;
    Ok(ActionOutcome::QuantumSplit)
}

pub fn materialize_by_selection(state: &mut GameState, square: Square) -> EngineResult<ActionOutcome> {
    if state.is_game_over() {
        return Ok(ActionOutcome::Ignored);
    }
    collapse_by_owner(&mut state.position, square)?;

    let name = square_to_algebraic(square);
    state.move_log.push(format!("{name}*"));
    complete_turn(state, &format!("Waveform collapsed at {name}."))?;
    Ok(ActionOutcome::Collapsed)
}

/// Hand the move to the other side and evaluate check, mate and stalemate.
pub fn complete_turn(state: &mut GameState, base_message: &str) -> EngineResult<()> {
    state.position.side_to_move = state.position.side_to_move.opposite();
    state.clear_selection();
    state.quantum_mode = false;

    let side = state.side_to_move();
    let replies = all_legal_moves(&state.position, side)?;
    let in_check = is_king_in_check(&state.position, side)?;

    if replies.is_empty() {
        let outcome = if in_check {
            GameOutcome::Checkmate {
                winner: side.opposite(),
            }
        } else {
            GameOutcome::Stalemate
        };
        info!(?outcome, "game over");
        state.outcome = Some(outcome);
        state.set_message(outcome.text());
    } else if in_check {
        state.set_message(if base_message.is_empty() {
            "Check.".to_owned()
        } else {
            format!("{base_message} Check.")
        });
    } else if !base_message.is_empty() {
        state.set_message(base_message);
    }
    Ok(())
}

/// Flip quantum mode for the side to move. Callers record history first
/// when the result is `QuantumModeToggled`; see [`can_toggle_quantum`].
pub fn toggle_quantum_mode(state: &mut GameState) -> ActionOutcome {
    if state.is_game_over() {
        return ActionOutcome::Ignored;
    }
    if state.position.credits(state.side_to_move()) == 0 {
        state.set_message(NO_QUANTUM_LEFT);
        return ActionOutcome::Rejected;
    }
    state.quantum_mode = !state.quantum_mode;
    state.pending_quantum.clear();
    state.set_message(if state.quantum_mode { QUANTUM_ON } else { QUANTUM_OFF });
    ActionOutcome::QuantumModeToggled {
        on: state.quantum_mode,
    }
}

#[inline]
pub fn can_toggle_quantum(state: &GameState) -> bool {
    !state.is_game_over() && state.position.credits(state.side_to_move()) > 0
}

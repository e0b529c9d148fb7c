//! Superposition lifecycle: split creation, owner collapse and collapse by
//! observation.
//!
//! Every function here mutates a [`Position`] in place and keeps the
//! invariant that a square holds at most one of: a materialized piece, one
//! half of a superposition.

use tracing::info;

use crate::errors::{EngineError, EngineResult};
use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::{CandidateMove, MoveKind};
use crate::quantum::collapse_source::CollapseSource;
use crate::quantum::superposition::{Superposition, SuperpositionId};
use crate::utils::algebraic::square_to_algebraic;

/// How an observed superposition resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollapseResult {
    /// The piece materialized on its other square.
    Survived { at: Square },
    /// The piece was on the observed square and is gone.
    Captured { at: Square },
}

impl CollapseResult {
    pub fn message(self) -> String {
        match self {
            CollapseResult::Survived { at } => {
                format!("Waveform collapsed: piece survived at {}.", square_to_algebraic(at))
            }
            CollapseResult::Captured { at } => format!(
                "Waveform collapsed: piece was at {} and got captured.",
                square_to_algebraic(at)
            ),
        }
    }
}

/// Whether `kind` may enter superposition. Kings stay materialized so check
/// detection always has a square to test.
#[inline]
pub const fn can_split(kind: PieceKind) -> bool {
    !matches!(kind, PieceKind::King)
}

/// A split half must be a legal destination that nothing occupies, reached
/// by an ordinary step rather than a capture or castle.
pub fn is_valid_quantum_target(position: &Position, mv: &CandidateMove) -> bool {
    matches!(mv.kind, MoveKind::Quiet | MoveKind::DoublePawnPush) && position.is_empty(mv.to)
}

/// Split the piece on `from` across `targets`, spending one credit.
///
/// Returns `Ok(None)` without touching the position when the mover has no
/// credits left.
pub fn create_split(
    position: &mut Position,
    from: Square,
    targets: [Square; 2],
) -> EngineResult<Option<SuperpositionId>> {
    let piece = position
        .board
        .piece_at(from)
        .ok_or(EngineError::EmptyOrigin { square: from })?;
    if position.credits(piece.color) == 0 {
        return Ok(None);
    }

    let id = position.next_superposition_id;
    let entry = Superposition::new(id, piece.color, piece.kind, targets)?;
    if targets.iter().any(|sq| !position.is_empty(*sq)) {
        return Err(EngineError::InvalidPosition(format!(
            "split target {} or {} is occupied",
            targets[0], targets[1]
        )));
    }

    position.board.take(from);
    position.superpositions.push(entry);
    position.quantum_credits[piece.color.index()] -= 1;
    position.next_superposition_id += 1;
    position.en_passant_square = None;

    info!(
        id,
        from = %square_to_algebraic(from),
        a = %square_to_algebraic(targets[0]),
        b = %square_to_algebraic(targets[1]),
        "superposition created"
    );
    Ok(Some(id))
}

/// The owner chose one half: the piece materializes there, deterministically.
pub fn collapse_by_owner(position: &mut Position, square: Square) -> EngineResult<Piece> {
    let (id, piece) = materialize_at(position, square)?;
    info!(id, at = %square_to_algebraic(square), "superposition collapsed by owner");
    Ok(piece)
}

/// Resolve the superposition covering `square` onto that square. Used both
/// for the real collapse and for trying one out on a cloned position.
pub fn materialize_at(
    position: &mut Position,
    square: Square,
) -> EngineResult<(SuperpositionId, Piece)> {
    let entry = remove_superposition_at(position, square)?;
    let piece = entry.materialize();
    position.board.set(square, Some(piece));
    position.en_passant_square = None;
    Ok((entry.id, piece))
}

/// A move targets `square`. Resolve the superposition there, if any.
///
/// With probability `survival_probability` the piece reappears on its other
/// square, provided no materialized piece has moved onto it since the split;
/// otherwise it is destroyed.
pub fn collapse_on_capture(
    position: &mut Position,
    square: Square,
    survival_probability: f64,
    source: &mut dyn CollapseSource,
) -> EngineResult<Option<CollapseResult>> {
    if position.superposition_at(square).is_none() {
        return Ok(None);
    }
    let entry = remove_superposition_at(position, square)?;
    let other = entry
        .other_position(square)
        .ok_or(EngineError::UnknownSuperposition { square })?;

    let survived = source.draw_probability() < survival_probability;
    let result = if survived && position.board.piece_at(other).is_none() {
        position.board.set(other, Some(entry.materialize()));
        CollapseResult::Survived { at: other }
    } else {
        CollapseResult::Captured { at: square }
    };

    info!(id = entry.id, ?result, "superposition observed");
    Ok(Some(result))
}

fn remove_superposition_at(position: &mut Position, square: Square) -> EngineResult<Superposition> {
    let index = position
        .superpositions
        .iter()
        .position(|s| s.occupies(square))
        .ok_or(EngineError::UnknownSuperposition { square })?;
    Ok(position.superpositions.remove(index))
}

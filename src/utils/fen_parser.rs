//! FEN-to-Position parser.
//!
//! Used for position setup in tests, benches and the terminal driver. The
//! board model tracks a per-piece `has_moved` flag rather than castling
//! rights, so the flags are derived: a king or rook counts as unmoved only
//! when a castling right names it, and a pawn counts as unmoved only on its
//! start rank. The halfmove and fullmove fields are accepted and ignored.
//! Kings are not required, so partial positions can be set up.

use crate::errors::{EngineError, EngineResult};
use crate::game_state::chess_types::*;
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_position(fen: &str) -> EngineResult<Position> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or_else(|| invalid("missing board layout"))?;
    let side_part = parts.next().ok_or_else(|| invalid("missing side to move"))?;
    let castling_part = parts.next().ok_or_else(|| invalid("missing castling rights"))?;
    let en_passant_part = parts.next().ok_or_else(|| invalid("missing en-passant square"))?;

    for clock in parts.by_ref().take(2) {
        clock
            .parse::<u16>()
            .map_err(|_| invalid(&format!("bad move counter {clock}")))?;
    }
    if parts.next().is_some() {
        return Err(invalid("extra trailing fields"));
    }

    let mut position = Position::default();
    parse_board(board_part, &mut position.board)?;
    position.side_to_move = parse_side_to_move(side_part)?;
    apply_castling_rights(castling_part, &mut position.board)?;
    position.en_passant_square = parse_en_passant_square(en_passant_part)?;

    Ok(position)
}

fn invalid(reason: &str) -> EngineError {
    EngineError::InvalidPosition(reason.to_owned())
}

fn parse_board(board_part: &str, board: &mut Board) -> EngineResult<()> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(invalid("board layout must contain 8 ranks"));
    }

    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let rank = 7 - fen_rank_idx as u8;
        let mut file = 0u8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(invalid(&format!("empty-square count '{ch}'")));
                }
                file += empty_count as u8;
                if file > 8 {
                    return Err(invalid("rank has too many files"));
                }
                continue;
            }

            let (color, kind) =
                piece_from_fen_char(ch).ok_or_else(|| invalid(&format!("piece character '{ch}'")))?;
            if file >= 8 {
                return Err(invalid("rank has too many files"));
            }

            // Pawns off their start rank have necessarily moved. Kings and
            // rooks stay flagged as moved until a castling right clears them.
            let has_moved = match kind {
                PieceKind::Pawn => rank != color.pawn_start_rank(),
                PieceKind::King | PieceKind::Rook => true,
                _ => false,
            };
            board.set(
                square_at(file, rank),
                Some(Piece {
                    kind,
                    color,
                    has_moved,
                }),
            );
            file += 1;
        }

        if file != 8 {
            return Err(invalid("rank does not sum to 8 files"));
        }
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> EngineResult<Color> {
    match side_part {
        "w" => Ok(Color::Light),
        "b" => Ok(Color::Dark),
        _ => Err(invalid(&format!("side to move {side_part}"))),
    }
}

fn apply_castling_rights(castling_part: &str, board: &mut Board) -> EngineResult<()> {
    if castling_part == "-" {
        return Ok(());
    }

    for ch in castling_part.chars() {
        let (color, rook_file) = match ch {
            'K' => (Color::Light, 7),
            'Q' => (Color::Light, 0),
            'k' => (Color::Dark, 7),
            'q' => (Color::Dark, 0),
            _ => return Err(invalid(&format!("castling rights character {ch}"))),
        };
        let rank = color.home_rank();
        mark_unmoved(board, square_at(4, rank), PieceKind::King, color);
        mark_unmoved(board, square_at(rook_file, rank), PieceKind::Rook, color);
    }

    Ok(())
}

fn mark_unmoved(board: &mut Board, square: Square, kind: PieceKind, color: Color) {
    if let Some(piece) = board.piece_at(square) {
        if piece.kind == kind && piece.color == color {
            board.set(square, Some(Piece::new(kind, color)));
        }
    }
}

fn parse_en_passant_square(en_passant_part: &str) -> EngineResult<Option<Square>> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    Ok(Some(algebraic_to_square(en_passant_part)?))
}

fn piece_from_fen_char(ch: char) -> Option<(Color, PieceKind)> {
    let color = if ch.is_ascii_uppercase() {
        Color::Light
    } else if ch.is_ascii_lowercase() {
        Color::Dark
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some((color, kind))
}

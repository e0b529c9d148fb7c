//! Terminal-oriented Unicode board renderer.
//!
//! Superposed halves are drawn with their piece glyph followed by `~`.

use crate::game_state::chess_types::*;
use crate::session::board_view::{square_view, SquareView};
use crate::utils::algebraic::square_to_algebraic;

/// Render the board to a Unicode string for terminal output.
///
/// Assumes square indexing where `0 == a1`, `7 == h1`, and `63 == h8`.
pub fn render_position(position: &Position) -> String {
    let mut out = String::new();

    out.push_str("   a  b  c  d  e  f  g  h\n");

    for rank in (0..8u8).rev() {
        out.push(char::from(b'1' + rank));
        out.push(' ');

        for file in 0..8u8 {
            out.push(' ');
            match square_view(position, square_at(file, rank)) {
                SquareView::Empty => out.push_str("· "),
                SquareView::Piece(piece) => {
                    out.push(piece_to_unicode(piece.color, piece.kind));
                    out.push(' ');
                }
                SquareView::Superposed { color, kind, .. } => {
                    out.push(piece_to_unicode(color, kind));
                    out.push('~');
                }
            }
        }

        out.push(' ');
        out.push(char::from(b'1' + rank));
        out.push('\n');
    }

    out.push_str("   a  b  c  d  e  f  g  h");

    out
}

/// Board plus the status lines a player needs between clicks.
pub fn render_game_state(state: &GameState) -> String {
    let position = &state.position;
    let mut out = render_position(position);

    out.push_str(&format!(
        "\n{} to move | quantum: White {} Black {}{}",
        state.side_to_move().display_name(),
        position.credits(Color::Light),
        position.credits(Color::Dark),
        if state.quantum_mode { " | quantum mode ON" } else { "" },
    ));

    if let Some(from) = state.selection {
        let targets: Vec<String> = state
            .legal_moves
            .iter()
            .map(|mv| square_to_algebraic(mv.to))
            .collect();
        out.push_str(&format!(
            "\nselected {}: {}",
            square_to_algebraic(from),
            targets.join(" ")
        ));
    }
    if !state.pending_quantum.is_empty() {
        let pending: Vec<String> = state.pending_quantum.iter().map(|&sq| square_to_algebraic(sq)).collect();
        out.push_str(&format!("\nsplit targets: {}", pending.join(" ")));
    }

    out.push('\n');
    out.push_str(&state.current_message);
    out
}

fn piece_to_unicode(color: Color, piece: PieceKind) -> char {
    match (color, piece) {
        (Color::Light, PieceKind::Pawn) => '♙',
        (Color::Light, PieceKind::Knight) => '♘',
        (Color::Light, PieceKind::Bishop) => '♗',
        (Color::Light, PieceKind::Rook) => '♖',
        (Color::Light, PieceKind::Queen) => '♕',
        (Color::Light, PieceKind::King) => '♔',
        (Color::Dark, PieceKind::Pawn) => '♟',
        (Color::Dark, PieceKind::Knight) => '♞',
        (Color::Dark, PieceKind::Bishop) => '♝',
        (Color::Dark, PieceKind::Rook) => '♜',
        (Color::Dark, PieceKind::Queen) => '♛',
        (Color::Dark, PieceKind::King) => '♚',
    }
}

#[cfg(test)]
mod tests {
    use super::{render_game_state, render_position};
    use crate::game_state::chess_types::{Color, GameState, PieceKind};
    use crate::quantum::superposition::Superposition;

    #[test]
    fn superposed_halves_carry_a_marker() {
        let mut state = GameState::new_game(3);
        state.position.board.take(6);
        state.position.superpositions.push(
            Superposition::new(1, Color::Light, PieceKind::Knight, [21, 23]).expect("distinct squares"),
        );

        let board = render_position(&state.position);
        let rank_three = board
            .lines()
            .find(|line| line.starts_with('3'))
            .expect("rank 3 is drawn");
        assert_eq!(rank_three.matches("♘~").count(), 2);

        let text = render_game_state(&state);
        assert!(text.contains("White to move"));
        assert!(text.ends_with("Select a piece to move."));
    }
}

//! Plain-text board rendering for logs and debugging.

use crate::game_state::board::Board;
use crate::utils::fen_generator::piece_char;

/// Renders the board as an 8x8 grid with rank and file labels, White at
/// the bottom. Empty squares print as dots.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();
    for row in 0..8 {
        out.push((b'0' + (8 - row) as u8) as char);
        for col in 0..8 {
            out.push(' ');
            match board.view((row, col)) {
                Some(piece) => out.push(piece_char(piece)),
                None => out.push('.'),
            }
        }
        out.push('\n');
    }
    out.push_str("  a b c d e f g h\n");
    out
}

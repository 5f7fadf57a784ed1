//! Pseudo-legal knight destinations.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Side, Square};
use crate::move_generation::pseudo_move_shared::{push_offsets, KNIGHT_OFFSETS};

pub fn generate_knight_moves(board: &Board, from: Square, side: Side, out: &mut Vec<Square>) {
    push_offsets(board, from, side, &KNIGHT_OFFSETS, out);
}

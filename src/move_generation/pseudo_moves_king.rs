//! Pseudo-legal king destinations, castling included.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Side, Square};
use crate::move_generation::pseudo_move_shared::{push_offsets, ALL_DIRECTIONS};
use crate::move_generation::special_moves::castling_destinations;

pub fn generate_king_moves(board: &Board, from: Square, side: Side, out: &mut Vec<Square>) {
    push_offsets(board, from, side, &ALL_DIRECTIONS, out);
    castling_destinations(board, from, side, out);
}

//! Pseudo-legal queen destinations.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Side, Square};
use crate::move_generation::pseudo_move_shared::{walk_rays, ALL_DIRECTIONS};

pub fn generate_queen_moves(board: &Board, from: Square, side: Side, out: &mut Vec<Square>) {
    walk_rays(board, from, side, &ALL_DIRECTIONS, out);
}

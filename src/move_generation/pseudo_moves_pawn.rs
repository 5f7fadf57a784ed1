//! Pseudo-legal pawn destinations.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{offset_square, Side, Square};
use crate::game_state::move_record::MoveRecord;
use crate::move_generation::special_moves::en_passant_destination;

/// Forward pushes, diagonal captures, and the en-passant destination when
/// the preceding move armed one. Self-check exposure is not considered
/// here.
pub fn generate_pawn_moves(
    board: &Board,
    from: Square,
    side: Side,
    last_move: Option<&MoveRecord>,
    out: &mut Vec<Square>,
) {
    let direction = side.pawn_direction();

    if let Ok(one_step) = offset_square(from, direction, 0) {
        if board.view(one_step).is_none() {
            out.push(one_step);

            if from.0 == side.pawn_start_row() {
                // Start row guarantees the two-step square is on the board.
                let two_step = (from.0 + 2 * direction, from.1);
                if board.view(two_step).is_none() {
                    out.push(two_step);
                }
            }
        }
    }

    for d_col in [-1, 1] {
        if let Ok(to) = offset_square(from, direction, d_col) {
            if matches!(board.view(to), Some(target) if target.side != side) {
                out.push(to);
            }
        }
    }

    if let Some(to) = en_passant_destination(board, from, side, last_move) {
        out.push(to);
    }
}

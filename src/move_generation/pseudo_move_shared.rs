//! Direction tables and walkers shared by the per-piece generators.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{offset_square, Side, Square};

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// All eight adjacent directions, used by queen and king generation.
pub const ALL_DIRECTIONS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Walks each direction from `from` until blocked: empty squares are
/// destinations, an enemy blocker is a final destination, a friendly
/// blocker ends the ray without being included.
pub fn walk_rays(
    board: &Board,
    from: Square,
    side: Side,
    directions: &[(i8, i8)],
    out: &mut Vec<Square>,
) {
    for &(d_row, d_col) in directions {
        let mut cursor = from;
        while let Ok(next) = offset_square(cursor, d_row, d_col) {
            match board.view(next) {
                None => out.push(next),
                Some(blocker) => {
                    if blocker.side != side {
                        out.push(next);
                    }
                    break;
                }
            }
            cursor = next;
        }
    }
}

/// Pushes each in-bounds fixed offset that does not land on a friendly
/// piece. Used by knight and king generation.
pub fn push_offsets(
    board: &Board,
    from: Square,
    side: Side,
    offsets: &[(i8, i8)],
    out: &mut Vec<Square>,
) {
    for &(d_row, d_col) in offsets {
        if let Ok(to) = offset_square(from, d_row, d_col) {
            match board.view(to) {
                Some(blocker) if blocker.side == side => {}
                _ => out.push(to),
            }
        }
    }
}

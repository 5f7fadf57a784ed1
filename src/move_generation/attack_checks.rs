//! Attack and path oracle.
//!
//! Pure predicates answering "does this piece threaten that square" and
//! "is the line between two squares unobstructed". Both move generation
//! (castling transit squares) and check detection are built on these.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Piece, PieceKind, Side, Square};

/// Whether every square strictly between `from` and `to` is empty.
/// Endpoints are excluded. Callers guarantee the two squares are aligned
/// on a rank, file, or diagonal.
pub fn is_path_clear(board: &Board, from: Square, to: Square) -> bool {
    let d_row = (to.0 - from.0).signum();
    let d_col = (to.1 - from.1).signum();

    let mut cursor = (from.0 + d_row, from.1 + d_col);
    while cursor != to {
        if board.view(cursor).is_some() {
            return false;
        }
        cursor = (cursor.0 + d_row, cursor.1 + d_col);
    }
    true
}

/// Whether `piece`, standing on `from`, attacks `to`.
///
/// Pawns attack diagonally forward only; the forward push and en passant
/// are movement concerns, not attack concerns, and never appear here.
pub fn can_attack(board: &Board, from: Square, to: Square, piece: Piece) -> bool {
    let d_row = to.0 - from.0;
    let d_col = to.1 - from.1;

    match piece.kind {
        PieceKind::Pawn => d_row == piece.side.pawn_direction() && d_col.abs() == 1,
        PieceKind::Rook => (d_row == 0 || d_col == 0) && is_path_clear(board, from, to),
        PieceKind::Bishop => d_row.abs() == d_col.abs() && is_path_clear(board, from, to),
        PieceKind::Queen => {
            (d_row == 0 || d_col == 0 || d_row.abs() == d_col.abs())
                && is_path_clear(board, from, to)
        }
        PieceKind::King => d_row.abs() <= 1 && d_col.abs() <= 1,
        PieceKind::Knight => {
            (d_row.abs() == 2 && d_col.abs() == 1) || (d_row.abs() == 1 && d_col.abs() == 2)
        }
    }
}

/// Whether any piece of `attacker_side` attacks `target`.
pub fn is_square_attacked(board: &Board, target: Square, attacker_side: Side) -> bool {
    board
        .occupied_squares()
        .filter(|(_, piece)| piece.side == attacker_side)
        .any(|(square, piece)| can_attack(board, square, target, piece))
}

/// Locates the king of `side`, if present.
pub fn king_square(board: &Board, side: Side) -> Option<Square> {
    board
        .occupied_squares()
        .find(|(_, piece)| piece.kind == PieceKind::King && piece.side == side)
        .map(|(square, _)| square)
}

/// Whether the king of `side` is currently attacked. A board with no king
/// for `side` reports false rather than erroring.
pub fn is_king_attacked(board: &Board, side: Side) -> bool {
    match king_square(board, side) {
        Some(square) => is_square_attacked(board, square, side.opposite()),
        None => false,
    }
}

//! Move application and undo.
//!
//! `apply_move` is the single gateway through which a move changes a
//! board. It re-validates the request against the legal move set, routes
//! it through the matching special-move execution, and emits the
//! [`MoveRecord`] that makes the move reversible. `undo_move` consumes that
//! record to rebuild the pre-move board exactly, `has_moved` flags
//! included.

use crate::errors::RulesError;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{PieceKind, Side, Square, PROMOTION_CHOICES};
use crate::game_state::move_record::MoveRecord;
use crate::move_generation::legal_moves::legal_destinations;
use crate::move_generation::special_moves::{
    execute_castling, execute_en_passant, is_castling_move, is_en_passant_move, is_promotion_move,
};

/// Applies `(from, to)` for `side_to_move`, returning the successor board
/// and the record of what happened. The input board is left untouched.
///
/// The request is rejected unless `to` is in the current legal move set
/// for `from`, so callers cannot smuggle in an illegal move by bypassing
/// generation. A promotion move additionally requires `promotion` to name
/// one of queen, rook, bishop, or knight; without it the move is refused
/// and the board unchanged, which is what lets an interface ask the player
/// before committing.
pub fn apply_move(
    board: &Board,
    from: Square,
    to: Square,
    side_to_move: Side,
    last_move: Option<&MoveRecord>,
    promotion: Option<PieceKind>,
) -> Result<(Board, MoveRecord), RulesError> {
    let moved_piece = match board.view(from) {
        Some(piece) => piece,
        None => return Err(RulesError::EmptySquare(from)),
    };
    if moved_piece.side != side_to_move {
        return Err(RulesError::NotYourTurn(from));
    }
    if !legal_destinations(board, from, side_to_move, last_move).contains(&to) {
        return Err(RulesError::IllegalMove { from, to });
    }

    if is_castling_move(board, from, to) {
        let next = execute_castling(board, from, to);
        let record = MoveRecord {
            from,
            to,
            moved_piece,
            captured_piece: None,
            is_en_passant: false,
            promoted_to: None,
        };
        return Ok((next, record));
    }

    if is_en_passant_move(board, from, to, last_move) {
        let victim_square = (from.0, to.1);
        let captured_piece = board.view(victim_square);
        let next = execute_en_passant(board, from, to);
        let record = MoveRecord {
            from,
            to,
            moved_piece,
            captured_piece,
            is_en_passant: true,
            promoted_to: None,
        };
        return Ok((next, record));
    }

    let promoted_to = if is_promotion_move(board, from, to) {
        match promotion {
            Some(kind) if PROMOTION_CHOICES.contains(&kind) => Some(kind),
            Some(kind) => return Err(RulesError::InvalidPromotionPiece(kind)),
            None => return Err(RulesError::PromotionChoiceRequired),
        }
    } else {
        None
    };

    let captured_piece = board.view(to);
    let mut next = board.clone();
    if let Some(mut piece) = next.remove(from) {
        piece.has_moved = true;
        if let Some(kind) = promoted_to {
            piece.kind = kind;
        }
        next.place(to, piece);
    }
    let record = MoveRecord {
        from,
        to,
        moved_piece,
        captured_piece,
        is_en_passant: false,
        promoted_to,
    };
    Ok((next, record))
}

/// Rebuilds the board as it stood before `record` was applied.
///
/// The record's pre-move snapshots are authoritative: the mover returns to
/// `from` with its original `has_moved` flag, a promotion reverts to the
/// pawn, a capture victim reappears on the square it actually occupied,
/// and castling walks the rook back to its corner as unmoved.
pub fn undo_move(board: &Board, record: &MoveRecord) -> Board {
    let mut prior = board.clone();

    prior.remove(record.to);
    prior.place(record.from, record.moved_piece);

    if record.is_castling() {
        let row = record.from.0;
        let (rook_corner, rook_landing) = if record.to.1 == 6 {
            ((row, 7), (row, 5))
        } else {
            ((row, 0), (row, 3))
        };
        if let Some(mut rook) = prior.remove(rook_landing) {
            // Castling was only possible with an unmoved rook.
            rook.has_moved = false;
            prior.place(rook_corner, rook);
        }
    } else if let Some(captured) = record.captured_piece {
        let square = if record.is_en_passant {
            record.en_passant_capture_square()
        } else {
            record.to
        };
        prior.place(square, captured);
    }

    prior
}

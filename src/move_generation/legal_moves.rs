//! Legality filtering and position classification.
//!
//! Pseudo-legal candidates are simulated one by one on a disposable board
//! copy, using the real special-move execution rather than a naive
//! single-square shift, and rejected when they leave the mover's own king
//! attacked. The caller's board is never touched.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{GameStatus, PieceKind, Side, Square};
use crate::game_state::move_record::MoveRecord;
use crate::move_generation::attack_checks::is_king_attacked;
use crate::move_generation::pseudo_moves_bishop::generate_bishop_moves;
use crate::move_generation::pseudo_moves_king::generate_king_moves;
use crate::move_generation::pseudo_moves_knight::generate_knight_moves;
use crate::move_generation::pseudo_moves_pawn::generate_pawn_moves;
use crate::move_generation::pseudo_moves_queen::generate_queen_moves;
use crate::move_generation::pseudo_moves_rook::generate_rook_moves;
use crate::move_generation::special_moves::{
    execute_castling, execute_en_passant, is_castling_move, is_en_passant_move,
};

/// Pseudo-legal destinations for the piece on `from`, dispatched on its
/// kind. Empty when the square is vacant or holds a piece of the other
/// side. Self-check exposure is ignored here by design so every piece kind
/// can be filtered uniformly through simulation.
pub fn pseudo_destinations(
    board: &Board,
    from: Square,
    side: Side,
    last_move: Option<&MoveRecord>,
) -> Vec<Square> {
    let piece = match board.view(from) {
        Some(piece) if piece.side == side => piece,
        _ => return Vec::new(),
    };

    let mut out = Vec::new();
    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(board, from, side, last_move, &mut out),
        PieceKind::Knight => generate_knight_moves(board, from, side, &mut out),
        PieceKind::Bishop => generate_bishop_moves(board, from, side, &mut out),
        PieceKind::Rook => generate_rook_moves(board, from, side, &mut out),
        PieceKind::Queen => generate_queen_moves(board, from, side, &mut out),
        PieceKind::King => generate_king_moves(board, from, side, &mut out),
    }
    out
}

/// Pseudo-legal destinations minus every move whose simulation leaves the
/// mover's own king attacked.
pub fn legal_destinations(
    board: &Board,
    from: Square,
    side: Side,
    last_move: Option<&MoveRecord>,
) -> Vec<Square> {
    pseudo_destinations(board, from, side, last_move)
        .into_iter()
        .filter(|&to| !leaves_king_attacked(board, from, to, side, last_move))
        .collect()
}

/// Simulates `(from, to)`, including castling and en-passant board
/// mutation, and reports whether the mover's king ends up attacked.
fn leaves_king_attacked(
    board: &Board,
    from: Square,
    to: Square,
    side: Side,
    last_move: Option<&MoveRecord>,
) -> bool {
    let simulated = if is_castling_move(board, from, to) {
        execute_castling(board, from, to)
    } else if is_en_passant_move(board, from, to, last_move) {
        execute_en_passant(board, from, to)
    } else {
        // Ordinary move, promotion included; the replacement kind cannot
        // change whether the mover's own king is attacked.
        let mut next = board.clone();
        if let Some(piece) = next.remove(from) {
            next.place(to, piece);
        }
        next
    };
    is_king_attacked(&simulated, side)
}

/// Whether `side` has at least one legal move anywhere. Short-circuits on
/// the first piece with a non-empty legal set.
pub fn has_any_legal_move(board: &Board, side: Side, last_move: Option<&MoveRecord>) -> bool {
    let squares: Vec<Square> = board
        .occupied_squares()
        .filter(|(_, piece)| piece.side == side)
        .map(|(square, _)| square)
        .collect();
    squares
        .into_iter()
        .any(|square| !legal_destinations(board, square, side, last_move).is_empty())
}

/// Classifies the position for the side about to move.
///
/// The check predicate is computed once and combined with a single
/// any-legal-move scan; no legal-move set is recomputed afterwards.
pub fn game_status(board: &Board, side_to_move: Side, last_move: Option<&MoveRecord>) -> GameStatus {
    let in_check = is_king_attacked(board, side_to_move);
    let any_legal_move = has_any_legal_move(board, side_to_move, last_move);

    match (in_check, any_legal_move) {
        (true, false) => GameStatus::Checkmate,
        (false, false) => GameStatus::Stalemate,
        (true, true) => GameStatus::Check,
        (false, true) => GameStatus::Playing,
    }
}

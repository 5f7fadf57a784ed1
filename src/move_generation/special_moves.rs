//! Castling, en passant, and promotion handling.
//!
//! Each special move has two halves: an eligibility check consulted during
//! generation and an execution routine producing the mutated board copy.
//! The `is_*_move` predicates are also part of the public surface so a
//! caller can decide whether to prompt for a promotion piece or route a
//! request through special execution.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{PieceKind, Side, Square};
use crate::game_state::move_record::MoveRecord;
use crate::move_generation::attack_checks::is_square_attacked;

/// Appends the castling destinations available to the king on `king_sq`.
///
/// Kingside and queenside are independent: each requires its rook unmoved
/// on its corner, the squares between king and rook empty, and every
/// square the king transits (start and landing included) unattacked. A
/// king in check or one that has moved can never castle.
pub fn castling_destinations(board: &Board, king_sq: Square, side: Side, out: &mut Vec<Square>) {
    match board.view(king_sq) {
        Some(piece) if piece.kind == PieceKind::King && !piece.has_moved => {}
        _ => return,
    }
    if is_square_attacked(board, king_sq, side.opposite()) {
        return;
    }

    let row = side.home_row();
    let enemy = side.opposite();

    // Kingside: rook on col 7, cols 5-6 empty, cols 4-6 safe.
    if unmoved_rook_on(board, (row, 7), side)
        && board.view((row, 5)).is_none()
        && board.view((row, 6)).is_none()
        && !(4..=6).any(|col| is_square_attacked(board, (row, col), enemy))
    {
        out.push((row, 6));
    }

    // Queenside: rook on col 0, cols 1-3 empty, cols 2-4 safe.
    if unmoved_rook_on(board, (row, 0), side)
        && (1..=3).all(|col| board.view((row, col)).is_none())
        && !(2..=4).any(|col| is_square_attacked(board, (row, col), enemy))
    {
        out.push((row, 2));
    }
}

fn unmoved_rook_on(board: &Board, square: Square, side: Side) -> bool {
    matches!(
        board.view(square),
        Some(piece) if piece.kind == PieceKind::Rook && piece.side == side && !piece.has_moved
    )
}

/// A king move spanning two files is castling; nothing else is.
pub fn is_castling_move(board: &Board, from: Square, to: Square) -> bool {
    matches!(board.view(from), Some(piece) if piece.kind == PieceKind::King)
        && (to.1 - from.1).abs() == 2
}

/// Produces the post-castling board: king two files toward the rook, rook
/// on the square the king crossed, both marked moved.
pub fn execute_castling(board: &Board, from: Square, to: Square) -> Board {
    let mut next = board.clone();
    let row = from.0;

    if let Some(mut king) = next.remove(from) {
        king.has_moved = true;
        next.place(to, king);
    }

    let (rook_from, rook_to) = if to.1 == 6 {
        ((row, 7), (row, 5))
    } else {
        ((row, 0), (row, 3))
    };
    if let Some(mut rook) = next.remove(rook_from) {
        rook.has_moved = true;
        next.place(rook_to, rook);
    }

    next
}

/// The en-passant destination for the pawn on `from`, when the preceding
/// move armed one.
///
/// Requires the capturer on the row adjacent to the opponent's start rank,
/// the last move to be an enemy double pawn push landing beside it, and
/// the diagonal target square empty.
pub fn en_passant_destination(
    board: &Board,
    from: Square,
    side: Side,
    last_move: Option<&MoveRecord>,
) -> Option<Square> {
    if from.0 != side.en_passant_row() {
        return None;
    }

    let last = last_move?;
    if last.moved_piece.side == side || !last.is_double_pawn_push() {
        return None;
    }
    if last.to.0 != from.0 || (last.to.1 - from.1).abs() != 1 {
        return None;
    }

    let to = (from.0 + side.pawn_direction(), last.to.1);
    if board.view(to).is_some() {
        return None;
    }
    Some(to)
}

/// Whether `(from, to)` is an en-passant capture given the last move.
pub fn is_en_passant_move(
    board: &Board,
    from: Square,
    to: Square,
    last_move: Option<&MoveRecord>,
) -> bool {
    match board.view(from) {
        Some(piece) if piece.kind == PieceKind::Pawn => {
            en_passant_destination(board, from, piece.side, last_move) == Some(to)
        }
        _ => false,
    }
}

/// Produces the post-en-passant board. The captured pawn leaves its actual
/// square (beside the capturer), not the destination square.
pub fn execute_en_passant(board: &Board, from: Square, to: Square) -> Board {
    let mut next = board.clone();
    if let Some(mut pawn) = next.remove(from) {
        pawn.has_moved = true;
        next.place(to, pawn);
    }
    next.remove((from.0, to.1));
    next
}

/// Whether `(from, to)` would land a pawn on the opponent's back rank.
/// Such a move is only finalized once a replacement piece is supplied.
pub fn is_promotion_move(board: &Board, from: Square, to: Square) -> bool {
    matches!(
        board.view(from),
        Some(piece) if piece.kind == PieceKind::Pawn && to.0 == piece.side.promotion_row()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::Piece;

    fn bare_castling_board(side: Side) -> Board {
        let row = side.home_row();
        let mut board = Board::empty();
        board.place((row, 4), Piece::new(PieceKind::King, side));
        board.place((row, 0), Piece::new(PieceKind::Rook, side));
        board.place((row, 7), Piece::new(PieceKind::Rook, side));
        // Opposing king far away so the position stays sensible.
        board.place(
            (side.opposite().home_row(), 4),
            Piece::new(PieceKind::King, side.opposite()),
        );
        board
    }

    fn castle_targets(board: &Board, side: Side) -> Vec<Square> {
        let mut out = Vec::new();
        castling_destinations(board, (side.home_row(), 4), side, &mut out);
        out
    }

    #[test]
    fn both_castles_available_on_open_home_row() {
        let board = bare_castling_board(Side::White);
        assert_eq!(castle_targets(&board, Side::White), vec![(7, 6), (7, 2)]);
        let board = bare_castling_board(Side::Black);
        assert_eq!(castle_targets(&board, Side::Black), vec![(0, 6), (0, 2)]);
    }

    #[test]
    fn moved_king_or_rook_disables_castling() {
        let mut board = bare_castling_board(Side::White);
        board.at((7, 7)).as_mut().unwrap().has_moved = true;
        assert_eq!(castle_targets(&board, Side::White), vec![(7, 2)]);

        let mut board = bare_castling_board(Side::White);
        board.at((7, 4)).as_mut().unwrap().has_moved = true;
        assert!(castle_targets(&board, Side::White).is_empty());
    }

    #[test]
    fn occupied_between_squares_disable_castling() {
        let mut board = bare_castling_board(Side::White);
        board.place((7, 5), Piece::new(PieceKind::Bishop, Side::White));
        assert_eq!(castle_targets(&board, Side::White), vec![(7, 2)]);

        // Queenside b-file blocker also counts even though the king never
        // crosses it.
        let mut board = bare_castling_board(Side::White);
        board.place((7, 1), Piece::new(PieceKind::Knight, Side::White));
        assert_eq!(castle_targets(&board, Side::White), vec![(7, 6)]);
    }

    #[test]
    fn attacked_transit_squares_disable_castling() {
        // Rook on f-file attacks f1, the square the king passes through.
        let mut board = bare_castling_board(Side::White);
        board.place((3, 5), Piece::new(PieceKind::Rook, Side::Black));
        assert_eq!(castle_targets(&board, Side::White), vec![(7, 2)]);

        // A king in check cannot castle either way.
        let mut board = bare_castling_board(Side::White);
        board.place((3, 4), Piece::new(PieceKind::Rook, Side::Black));
        assert!(castle_targets(&board, Side::White).is_empty());
    }

    #[test]
    fn attacked_b_file_does_not_block_queenside() {
        let mut board = bare_castling_board(Side::White);
        board.place((3, 1), Piece::new(PieceKind::Rook, Side::Black));
        assert!(castle_targets(&board, Side::White).contains(&(7, 2)));
    }

    #[test]
    fn execute_castling_places_king_and_rook() {
        let board = bare_castling_board(Side::White);
        let after = execute_castling(&board, (7, 4), (7, 6));
        assert_eq!(after.view((7, 6)).unwrap().kind, PieceKind::King);
        assert_eq!(after.view((7, 5)).unwrap().kind, PieceKind::Rook);
        assert!(after.view((7, 4)).is_none());
        assert!(after.view((7, 7)).is_none());
        assert!(after.view((7, 6)).unwrap().has_moved);
        assert!(after.view((7, 5)).unwrap().has_moved);

        let after = execute_castling(&board, (7, 4), (7, 2));
        assert_eq!(after.view((7, 2)).unwrap().kind, PieceKind::King);
        assert_eq!(after.view((7, 3)).unwrap().kind, PieceKind::Rook);
        assert!(after.view((7, 0)).is_none());
    }

    fn en_passant_setup() -> (Board, MoveRecord) {
        // White pawn on e-row 3, black pawn just double-pushed d7->d5.
        let mut board = Board::empty();
        let mut white_pawn = Piece::new(PieceKind::Pawn, Side::White);
        white_pawn.has_moved = true;
        board.place((3, 4), white_pawn);
        let black_pawn = Piece::new(PieceKind::Pawn, Side::Black);
        let mut landed = black_pawn;
        landed.has_moved = true;
        board.place((3, 3), landed);
        let last = MoveRecord {
            from: (1, 3),
            to: (3, 3),
            moved_piece: black_pawn,
            captured_piece: None,
            is_en_passant: false,
            promoted_to: None,
        };
        (board, last)
    }

    #[test]
    fn en_passant_destination_behind_the_passed_pawn() {
        let (board, last) = en_passant_setup();
        assert_eq!(
            en_passant_destination(&board, (3, 4), Side::White, Some(&last)),
            Some((2, 3))
        );
        assert!(is_en_passant_move(&board, (3, 4), (2, 3), Some(&last)));
        assert!(!is_en_passant_move(&board, (3, 4), (2, 5), Some(&last)));
    }

    #[test]
    fn en_passant_requires_the_immediately_preceding_double_push() {
        let (board, last) = en_passant_setup();
        assert_eq!(en_passant_destination(&board, (3, 4), Side::White, None), None);

        // A single-step advance to the same square does not arm it.
        let mut single = last.clone();
        single.from = (2, 3);
        assert_eq!(
            en_passant_destination(&board, (3, 4), Side::White, Some(&single)),
            None
        );

        // A pawn two files away is out of reach.
        let (mut board, mut far) = en_passant_setup();
        board.remove((3, 3));
        board.place((3, 1), far.moved_piece);
        far.from = (1, 1);
        far.to = (3, 1);
        assert_eq!(
            en_passant_destination(&board, (3, 4), Side::White, Some(&far)),
            None
        );
    }

    #[test]
    fn execute_en_passant_removes_the_passed_pawn_not_the_destination() {
        let (board, _last) = en_passant_setup();
        let after = execute_en_passant(&board, (3, 4), (2, 3));
        assert_eq!(after.view((2, 3)).unwrap().kind, PieceKind::Pawn);
        assert_eq!(after.view((2, 3)).unwrap().side, Side::White);
        assert!(after.view((3, 3)).is_none()); // victim gone from its own square
        assert!(after.view((3, 4)).is_none());
    }

    #[test]
    fn promotion_trigger_on_back_rank_only() {
        let mut board = Board::empty();
        let mut pawn = Piece::new(PieceKind::Pawn, Side::White);
        pawn.has_moved = true;
        board.place((1, 0), pawn);
        assert!(is_promotion_move(&board, (1, 0), (0, 0)));
        assert!(!is_promotion_move(&board, (1, 0), (2, 0)));

        let mut rook_board = Board::empty();
        rook_board.place((1, 0), Piece::new(PieceKind::Rook, Side::White));
        assert!(!is_promotion_move(&rook_board, (1, 0), (0, 0)));
    }
}

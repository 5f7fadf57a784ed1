//! Pseudo-legal rook destinations.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Side, Square};
use crate::move_generation::pseudo_move_shared::{walk_rays, ROOK_DIRECTIONS};

pub fn generate_rook_moves(board: &Board, from: Square, side: Side, out: &mut Vec<Square>) {
    walk_rays(board, from, side, &ROOK_DIRECTIONS, out);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Piece, PieceKind};

    #[test]
    fn open_board_rook_covers_rank_and_file() {
        let mut board = Board::empty();
        board.place((4, 4), Piece::new(PieceKind::Rook, Side::Black));
        let mut out = Vec::new();
        generate_rook_moves(&board, (4, 4), Side::Black, &mut out);
        assert_eq!(out.len(), 14);
    }

    #[test]
    fn starting_rook_is_completely_boxed_in() {
        let board = Board::starting_position();
        let mut out = Vec::new();
        generate_rook_moves(&board, (7, 0), Side::White, &mut out);
        assert!(out.is_empty());
    }
}

//! The 8x8 board grid.
//!
//! `Board` is pure data with no rule knowledge. The engine never mutates a
//! board another caller may still hold: every accepted or simulated move
//! clones the grid and edits the copy, so snapshots stay independent.

use crate::game_state::chess_types::{Piece, PieceKind, Side, Square};

/// Back-rank piece order at game start, from file 0 to file 7.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// 8x8 grid of optional pieces, indexed `[row][col]`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// Empty board with no pieces.
    pub fn empty() -> Self {
        Board::default()
    }

    /// Standard starting position: Black on rows 0-1, White on rows 6-7.
    pub fn starting_position() -> Self {
        let mut board = Board::empty();
        for col in 0..8 {
            board.squares[0][col] = Some(Piece::new(BACK_RANK[col], Side::Black));
            board.squares[1][col] = Some(Piece::new(PieceKind::Pawn, Side::Black));
            board.squares[6][col] = Some(Piece::new(PieceKind::Pawn, Side::White));
            board.squares[7][col] = Some(Piece::new(BACK_RANK[col], Side::White));
        }
        board
    }

    /// Piece on a square, if any. Callers pass in-bounds squares.
    #[inline]
    pub fn view(&self, x: Square) -> Option<Piece> {
        self.squares[x.0 as usize][x.1 as usize]
    }

    /// Mutable slot for a square.
    #[inline]
    pub fn at(&mut self, x: Square) -> &mut Option<Piece> {
        &mut self.squares[x.0 as usize][x.1 as usize]
    }

    /// Removes and returns the piece on a square.
    #[inline]
    pub fn remove(&mut self, x: Square) -> Option<Piece> {
        self.at(x).take()
    }

    /// Places a piece, replacing whatever occupied the square.
    #[inline]
    pub fn place(&mut self, x: Square, piece: Piece) {
        *self.at(x) = Some(piece);
    }

    /// Iterates every occupied square with its piece.
    pub fn occupied_squares(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.squares.iter().enumerate().flat_map(|(row, cols)| {
            cols.iter().enumerate().filter_map(move |(col, slot)| {
                slot.map(|piece| ((row as i8, col as i8), piece))
            })
        })
    }
}

//! Core value types shared by every rules subsystem.
//!
//! Board geometry uses (row, col) pairs with row 0 on the far rank from
//! White (Black's back rank) and row 7 on White's back rank. Mapping these
//! indices to display coordinates is a presentation concern.

use crate::errors::RulesError;

/// One side of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    White,
    Black,
}

impl Side {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// Row delta of a forward pawn step for this side.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Side::White => -1,
            Side::Black => 1,
        }
    }

    /// Row on which this side's pawns start.
    #[inline]
    pub const fn pawn_start_row(self) -> i8 {
        match self {
            Side::White => 6,
            Side::Black => 1,
        }
    }

    /// Row a pawn of this side must reach to promote.
    #[inline]
    pub const fn promotion_row(self) -> i8 {
        match self {
            Side::White => 0,
            Side::Black => 7,
        }
    }

    /// Back rank holding this side's king and rooks at game start.
    #[inline]
    pub const fn home_row(self) -> i8 {
        match self {
            Side::White => 7,
            Side::Black => 0,
        }
    }

    /// Row a pawn of this side must occupy to capture en passant.
    #[inline]
    pub const fn en_passant_row(self) -> i8 {
        match self {
            Side::White => 3,
            Side::Black => 4,
        }
    }
}

/// Piece kind; side and movement history are carried separately on [`Piece`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// The kinds a promoting pawn may become.
pub const PROMOTION_CHOICES: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

/// One piece on the board.
///
/// `has_moved` flips to true the first time the piece moves and is
/// load-bearing for castling eligibility; board snapshots must carry it
/// through copies unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub side: Side,
    pub has_moved: bool,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, side: Side) -> Self {
        Piece {
            kind,
            side,
            has_moved: false,
        }
    }
}

/// Board square as a (row, col) pair, each in `0..=7`.
pub type Square = (i8, i8);

/// Moves a square by a row and column offset, failing off-board.
#[inline]
pub fn offset_square(x: Square, d_row: i8, d_col: i8) -> Result<Square, RulesError> {
    let y: Square = (x.0 + d_row, x.1 + d_col);
    if (y.0 < 0) | (y.0 > 7) | (y.1 < 0) | (y.1 > 7) {
        Err(RulesError::OutOfBounds(y.0, y.1))
    } else {
        Ok(y)
    }
}

/// Result of classifying a position for the side about to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Check,
    Checkmate,
    Stalemate,
}

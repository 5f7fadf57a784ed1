use thiserror::Error;

use crate::game_state::chess_types::{PieceKind, Square};

/// All failure modes surfaced by the rules engine.
///
/// Illegal requests are ordinary `Err` values, never panics: a caller that
/// routes every move through `legal_destinations` first will only ever see
/// the promotion- and undo-related variants.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RulesError {
    /// A square offset left the 8x8 board.
    #[error("square ({0}, {1}) is outside the board")]
    OutOfBounds(i8, i8),
    /// A move was requested from a square holding no piece.
    #[error("no piece on square {0:?}")]
    EmptySquare(Square),
    /// A move was requested for a piece of the side not on move.
    #[error("piece on {0:?} does not belong to the side to move")]
    NotYourTurn(Square),
    /// The requested (from, to) pair is absent from the legal move set.
    #[error("move {from:?} -> {to:?} is not legal in this position")]
    IllegalMove { from: Square, to: Square },
    /// A pawn reached the back rank and no replacement piece was supplied.
    #[error("this move promotes a pawn and needs a replacement piece")]
    PromotionChoiceRequired,
    /// `promote` was called while no promotion was pending.
    #[error("no promotion is pending")]
    NoPendingPromotion,
    /// The supplied promotion piece is not queen/rook/bishop/knight.
    #[error("promotion to {0:?} is not allowed")]
    InvalidPromotionPiece(PieceKind),
    /// Undo was requested with an empty move history.
    #[error("no move to undo")]
    NothingToUndo,
    #[error("invalid FEN: {0}")]
    InvalidFen(String),
    #[error("invalid square name: {0}")]
    InvalidSquareName(String),
}

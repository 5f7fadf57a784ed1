//! Reversible move records.
//!
//! A `MoveRecord` is immutable once produced by move application and is the
//! sole unit of reversibility: undo reads nothing but the record and the
//! post-move board. `moved_piece` and `captured_piece` are pre-move
//! snapshots, so they carry the `has_moved` flags needed for exact
//! restoration.

use crate::game_state::chess_types::{Piece, PieceKind, Square};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
    /// The piece as it stood on `from` before the move.
    pub moved_piece: Piece,
    /// The captured piece as it stood before the move, if any.
    pub captured_piece: Option<Piece>,
    pub is_en_passant: bool,
    /// Replacement kind for a promotion move.
    pub promoted_to: Option<PieceKind>,
}

impl MoveRecord {
    /// Castling is the only king move spanning two files.
    #[inline]
    pub fn is_castling(&self) -> bool {
        self.moved_piece.kind == PieceKind::King && (self.to.1 - self.from.1).abs() == 2
    }

    /// Whether this was a two-square pawn advance (the move that arms
    /// en passant for the opponent's reply).
    #[inline]
    pub fn is_double_pawn_push(&self) -> bool {
        self.moved_piece.kind == PieceKind::Pawn && (self.to.0 - self.from.0).abs() == 2
    }

    /// Square the captured pawn actually occupied for an en-passant move.
    /// This differs from `to`: the victim stands beside the capturer, on
    /// the capturer's starting row.
    #[inline]
    pub fn en_passant_capture_square(&self) -> Square {
        (self.from.0, self.to.1)
    }
}

/// Ordered, append-only move sequence. The en-passant rule consults only
/// the last entry; undo pops it.
pub type MoveHistory = Vec<MoveRecord>;

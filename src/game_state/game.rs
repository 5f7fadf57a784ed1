//! A playable game session.
//!
//! `Game` owns the current board, the side to move, the move history, and
//! the cached status, and funnels every mutation through the validated
//! apply/undo path. It also holds the one piece of interactive state the
//! rules alone cannot resolve: a move that reached the promotion rank and
//! is waiting for the player to pick a replacement piece.

use crate::errors::RulesError;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{GameStatus, PieceKind, Side, Square};
use crate::game_state::move_record::{MoveHistory, MoveRecord};
use crate::move_generation::legal_moves::{game_status, legal_destinations};
use crate::move_generation::move_apply::{apply_move, undo_move};
use crate::utils::algebraic::square_name;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

/// Result of a `play` request that passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    /// The move was applied; the status is for the side now to move.
    Played(GameStatus),
    /// The move is legal but promotes a pawn; nothing was applied yet.
    /// Call [`Game::promote`] to commit it.
    AwaitingPromotion,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    turn: Side,
    history: MoveHistory,
    status: GameStatus,
    pending_promotion: Option<(Square, Square)>,
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}

impl Game {
    /// New game from the standard starting position, White to move.
    pub fn new() -> Self {
        Game {
            board: Board::starting_position(),
            turn: Side::White,
            history: MoveHistory::new(),
            status: GameStatus::Playing,
            pending_promotion: None,
        }
    }

    /// Resumes a game from a FEN position. An en-passant field becomes the
    /// sole (undoable) history entry; earlier moves are not recoverable
    /// from FEN.
    pub fn from_fen(fen: &str) -> Result<Self, RulesError> {
        let position = parse_fen(fen)?;
        let history: MoveHistory = position.last_move.into_iter().collect();
        let status = game_status(&position.board, position.side_to_move, history.last());
        Ok(Game {
            board: position.board,
            turn: position.side_to_move,
            history,
            status,
            pending_promotion: None,
        })
    }

    pub fn to_fen(&self) -> String {
        generate_fen(&self.board, self.turn, self.history.last())
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Side {
        self.turn
    }

    /// Status for the side currently to move.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// The (from, to) pair waiting on a promotion choice, if any.
    pub fn pending_promotion(&self) -> Option<(Square, Square)> {
        self.pending_promotion
    }

    pub fn is_over(&self) -> bool {
        matches!(self.status, GameStatus::Checkmate | GameStatus::Stalemate)
    }

    /// Legal destinations for the piece on `from`, for the side to move.
    /// Empty for the opponent's pieces, empty squares, or a finished game.
    pub fn legal_destinations(&self, from: Square) -> Vec<Square> {
        legal_destinations(&self.board, from, self.turn, self.history.last())
    }

    /// Attempts the move `(from, to)` for the side to move.
    ///
    /// A legal promotion move is parked instead of applied and reported as
    /// [`PlayOutcome::AwaitingPromotion`]; any other play request cancels
    /// a park still pending. Illegal requests leave the game untouched.
    pub fn play(&mut self, from: Square, to: Square) -> Result<PlayOutcome, RulesError> {
        self.pending_promotion = None;
        match apply_move(&self.board, from, to, self.turn, self.history.last(), None) {
            Ok((next, record)) => {
                self.commit(next, record);
                Ok(PlayOutcome::Played(self.status))
            }
            Err(RulesError::PromotionChoiceRequired) => {
                self.pending_promotion = Some((from, to));
                log::debug!(
                    "move {} -> {} awaits a promotion choice",
                    square_name(from),
                    square_name(to)
                );
                Ok(PlayOutcome::AwaitingPromotion)
            }
            Err(err) => Err(err),
        }
    }

    /// Commits a parked promotion move with the chosen replacement piece.
    pub fn promote(&mut self, choice: PieceKind) -> Result<GameStatus, RulesError> {
        let (from, to) = self
            .pending_promotion
            .ok_or(RulesError::NoPendingPromotion)?;
        let (next, record) =
            apply_move(&self.board, from, to, self.turn, self.history.last(), Some(choice))?;
        self.pending_promotion = None;
        self.commit(next, record);
        Ok(self.status)
    }

    /// Reverts the most recent move. Undo is strictly last-in first-out.
    pub fn undo(&mut self) -> Result<(), RulesError> {
        let record = self.history.pop().ok_or(RulesError::NothingToUndo)?;
        self.board = undo_move(&self.board, &record);
        self.turn = record.moved_piece.side;
        self.pending_promotion = None;
        self.status = game_status(&self.board, self.turn, self.history.last());
        log::debug!(
            "undid {} -> {}, {:?} to move",
            square_name(record.from),
            square_name(record.to),
            self.turn
        );
        Ok(())
    }

    fn commit(&mut self, next: Board, record: MoveRecord) {
        log::debug!(
            "played {} -> {}{}",
            square_name(record.from),
            square_name(record.to),
            match record.promoted_to {
                Some(kind) => format!(" promoting to {kind:?}"),
                None => String::new(),
            }
        );
        self.board = next;
        self.turn = self.turn.opposite();
        self.history.push(record);
        self.status = game_status(&self.board, self.turn, self.history.last());
    }
}

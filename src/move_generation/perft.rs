//! Perft: exhaustive legal move tree walks with category tallies.
//!
//! Used to validate the generator against published node counts and as the
//! workload for the movegen benchmark. Counts are tallied at leaf depth,
//! so `captures` at depth N means "capturing moves among the depth-N
//! leaves", matching the usual perft tables.

use crate::errors::RulesError;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{PieceKind, Side, Square, PROMOTION_CHOICES};
use crate::game_state::move_record::MoveRecord;
use crate::move_generation::legal_moves::legal_destinations;
use crate::move_generation::move_apply::apply_move;
use crate::move_generation::special_moves::is_promotion_move;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
    }

    fn tally(&mut self, record: &MoveRecord) {
        self.nodes += 1;
        if record.captured_piece.is_some() {
            self.captures += 1;
        }
        if record.is_en_passant {
            self.en_passant += 1;
        }
        if record.is_castling() {
            self.castles += 1;
        }
        if record.promoted_to.is_some() {
            self.promotions += 1;
        }
    }
}

/// Every legal move for `side`, with promotion moves expanded into one
/// entry per replacement piece.
fn enumerate_moves(
    board: &Board,
    side: Side,
    last_move: Option<&MoveRecord>,
) -> Vec<(Square, Square, Option<PieceKind>)> {
    let mut moves = Vec::new();
    for (from, piece) in board.occupied_squares() {
        if piece.side != side {
            continue;
        }
        for to in legal_destinations(board, from, side, last_move) {
            if is_promotion_move(board, from, to) {
                for kind in PROMOTION_CHOICES {
                    moves.push((from, to, Some(kind)));
                }
            } else {
                moves.push((from, to, None));
            }
        }
    }
    moves
}

/// Walks the legal move tree to `depth` plies and tallies the leaves.
/// Single-threaded; the tree is re-derived from scratch on every call.
pub fn perft(
    board: &Board,
    side: Side,
    last_move: Option<&MoveRecord>,
    depth: u8,
) -> Result<PerftCounts, RulesError> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut total = PerftCounts::default();
    for (from, to, promotion) in enumerate_moves(board, side, last_move) {
        let (next, record) = apply_move(board, from, to, side, last_move, promotion)?;
        if depth == 1 {
            total.tally(&record);
        } else {
            total.merge(perft(&next, side.opposite(), Some(&record), depth - 1)?);
        }
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::fen_parser::parse_fen;

    #[test]
    fn depth_zero_counts_a_single_node() {
        let board = Board::starting_position();
        let counts = perft(&board, Side::White, None, 0).unwrap();
        assert_eq!(
            counts,
            PerftCounts {
                nodes: 1,
                ..PerftCounts::default()
            }
        );
    }

    #[test]
    fn starting_position_node_counts_match_published_tables() {
        let board = Board::starting_position();
        assert_eq!(perft(&board, Side::White, None, 1).unwrap().nodes, 20);
        assert_eq!(perft(&board, Side::White, None, 2).unwrap().nodes, 400);

        let depth_three = perft(&board, Side::White, None, 3).unwrap();
        assert_eq!(depth_three.nodes, 8_902);
        assert_eq!(depth_three.captures, 34);
        assert_eq!(depth_three.en_passant, 0);
        assert_eq!(depth_three.castles, 0);
        assert_eq!(depth_three.promotions, 0);
    }

    #[test]
    fn kiwipete_counts_exercise_castling_and_en_passant() {
        let fen = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
        let position = parse_fen(fen).unwrap();

        let depth_one = perft(
            &position.board,
            position.side_to_move,
            position.last_move.as_ref(),
            1,
        )
        .unwrap();
        assert_eq!(depth_one.nodes, 48);
        assert_eq!(depth_one.captures, 8);
        assert_eq!(depth_one.castles, 2);

        let depth_two = perft(
            &position.board,
            position.side_to_move,
            position.last_move.as_ref(),
            2,
        )
        .unwrap();
        assert_eq!(depth_two.nodes, 2_039);
        assert_eq!(depth_two.captures, 351);
        assert_eq!(depth_two.en_passant, 1);
        assert_eq!(depth_two.castles, 91);
    }

    #[test]
    fn endgame_position_counts_match_published_tables() {
        let fen = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";
        let position = parse_fen(fen).unwrap();
        assert_eq!(
            perft(&position.board, position.side_to_move, None, 1)
                .unwrap()
                .nodes,
            14
        );
        assert_eq!(
            perft(&position.board, position.side_to_move, None, 2)
                .unwrap()
                .nodes,
            191
        );
        assert_eq!(
            perft(&position.board, position.side_to_move, None, 3)
                .unwrap()
                .nodes,
            2_812
        );
    }
}

//! FEN import.
//!
//! Parses the six standard fields into a board plus side to move. Two
//! wrinkles come from the engine's state model:
//!
//! - The board tracks castling through per-piece `has_moved` flags rather
//!   than a rights bitmask, so the castling field is translated into flags:
//!   a right marks its king and rook unmoved, anything else is marked
//!   moved. Pawns off their start row are marked moved as well.
//! - En passant availability is derived from the last move, not from a
//!   stored target square, so a non-empty en-passant field is converted
//!   into the synthetic double-push [`MoveRecord`] that must have produced
//!   it.
//!
//! The clock fields are validated and then discarded; move counting is a
//! session concern.

use crate::errors::RulesError;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Piece, PieceKind, Side, Square};
use crate::game_state::move_record::MoveRecord;
use crate::utils::algebraic::parse_square;

/// A parsed position: everything the rules engine needs to continue play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenPosition {
    pub board: Board,
    pub side_to_move: Side,
    /// Synthetic record of the double pawn push implied by the en-passant
    /// field, when present.
    pub last_move: Option<MoveRecord>,
}

pub fn parse_fen(fen: &str) -> Result<FenPosition, RulesError> {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    if fields.len() != 6 {
        return Err(RulesError::InvalidFen(format!(
            "expected 6 fields, found {}",
            fields.len()
        )));
    }

    let mut board = parse_placement(fields[0])?;
    let side_to_move = match fields[1] {
        "w" => Side::White,
        "b" => Side::Black,
        other => {
            return Err(RulesError::InvalidFen(format!(
                "side to move must be 'w' or 'b', found {other:?}"
            )))
        }
    };
    apply_castling_rights(&mut board, fields[2])?;
    let last_move = parse_en_passant(&board, fields[3], side_to_move)?;

    // Clocks are checked for shape only.
    fields[4]
        .parse::<u32>()
        .map_err(|_| RulesError::InvalidFen(format!("bad halfmove clock {:?}", fields[4])))?;
    let fullmove = fields[5]
        .parse::<u32>()
        .map_err(|_| RulesError::InvalidFen(format!("bad fullmove number {:?}", fields[5])))?;
    if fullmove == 0 {
        return Err(RulesError::InvalidFen("fullmove number must be >= 1".to_owned()));
    }

    Ok(FenPosition {
        board,
        side_to_move,
        last_move,
    })
}

fn parse_placement(placement: &str) -> Result<Board, RulesError> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(RulesError::InvalidFen(format!(
            "expected 8 ranks, found {}",
            ranks.len()
        )));
    }

    let mut board = Board::empty();
    // FEN lists rank 8 first, which is row 0.
    for (row, rank) in ranks.iter().enumerate() {
        let row = row as i8;
        let mut col: i8 = 0;
        for ch in rank.chars() {
            if let Some(skip) = ch.to_digit(10) {
                if skip == 0 || skip > 8 {
                    return Err(RulesError::InvalidFen(format!("bad rank segment {rank:?}")));
                }
                col += skip as i8;
            } else {
                if col > 7 {
                    return Err(RulesError::InvalidFen(format!("rank {rank:?} overflows")));
                }
                let piece = piece_from_char(ch)
                    .ok_or_else(|| RulesError::InvalidFen(format!("unknown piece {ch:?}")))?;
                if piece.kind == PieceKind::Pawn && (row == 0 || row == 7) {
                    return Err(RulesError::InvalidFen("pawn on a back rank".to_owned()));
                }
                board.place((row, col), piece);
                col += 1;
            }
        }
        if col != 8 {
            return Err(RulesError::InvalidFen(format!(
                "rank {rank:?} covers {col} files"
            )));
        }
    }
    Ok(board)
}

fn piece_from_char(ch: char) -> Option<Piece> {
    let side = if ch.is_ascii_uppercase() {
        Side::White
    } else {
        Side::Black
    };
    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };
    Some(Piece::new(kind, side))
}

/// Rewrites `has_moved` flags so castling eligibility matches the rights
/// field. Pawns off their start row are marked moved at the same time.
fn apply_castling_rights(board: &mut Board, rights: &str) -> Result<(), RulesError> {
    if rights != "-" {
        let valid = !rights.is_empty()
            && rights.len() <= 4
            && rights.chars().all(|ch| "KQkq".contains(ch));
        if !valid {
            return Err(RulesError::InvalidFen(format!("bad castling field {rights:?}")));
        }
    }

    let unmoved: Vec<Square> = "KQkq"
        .chars()
        .filter(|ch| rights.contains(*ch))
        .flat_map(|ch| {
            let side = if ch.is_ascii_uppercase() {
                Side::White
            } else {
                Side::Black
            };
            let rook_col = if ch.eq_ignore_ascii_case(&'K') { 7 } else { 0 };
            [(side.home_row(), 4), (side.home_row(), rook_col)]
        })
        .collect();

    for ch in rights.chars().filter(|ch| *ch != '-') {
        let side = if ch.is_ascii_uppercase() {
            Side::White
        } else {
            Side::Black
        };
        let rook_col = if ch.eq_ignore_ascii_case(&'K') { 7 } else { 0 };
        let king_ok = matches!(
            board.view((side.home_row(), 4)),
            Some(p) if p.kind == PieceKind::King && p.side == side
        );
        let rook_ok = matches!(
            board.view((side.home_row(), rook_col)),
            Some(p) if p.kind == PieceKind::Rook && p.side == side
        );
        if !king_ok || !rook_ok {
            return Err(RulesError::InvalidFen(format!(
                "castling right {ch:?} has no matching king and rook"
            )));
        }
    }

    let squares: Vec<(Square, Piece)> = board.occupied_squares().collect();
    for (square, piece) in squares {
        let moved = match piece.kind {
            PieceKind::Pawn => square.0 != piece.side.pawn_start_row(),
            PieceKind::King | PieceKind::Rook => !unmoved.contains(&square),
            _ => false,
        };
        if let Some(slot) = board.at(square).as_mut() {
            slot.has_moved = moved;
        }
    }
    Ok(())
}

/// Converts a non-empty en-passant field into the double push that armed
/// it. The pushing pawn must actually stand on the landing square.
fn parse_en_passant(
    board: &Board,
    field: &str,
    side_to_move: Side,
) -> Result<Option<MoveRecord>, RulesError> {
    if field == "-" {
        return Ok(None);
    }
    let target = parse_square(field)
        .map_err(|_| RulesError::InvalidFen(format!("bad en-passant field {field:?}")))?;

    let pusher = side_to_move.opposite();
    let expected_row = pusher.pawn_start_row() + pusher.pawn_direction();
    if target.0 != expected_row {
        return Err(RulesError::InvalidFen(format!(
            "en-passant square {field:?} is on the wrong rank"
        )));
    }

    let from = (pusher.pawn_start_row(), target.1);
    let to = (target.0 + pusher.pawn_direction(), target.1);
    match board.view(to) {
        Some(p) if p.kind == PieceKind::Pawn && p.side == pusher => {}
        _ => {
            return Err(RulesError::InvalidFen(format!(
                "en-passant square {field:?} has no pawn behind it"
            )))
        }
    }

    Ok(Some(MoveRecord {
        from,
        to,
        moved_piece: Piece::new(PieceKind::Pawn, pusher),
        captured_piece: None,
        is_en_passant: false,
        promoted_to: None,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    const STARTPOS: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    #[test]
    fn startpos_fen_matches_the_built_in_starting_position() {
        let position = parse_fen(STARTPOS).unwrap();
        assert_eq!(position.board, Board::starting_position());
        assert_eq!(position.side_to_move, Side::White);
        assert_eq!(position.last_move, None);
    }

    #[test]
    fn castling_rights_drive_has_moved_flags() {
        let position =
            parse_fen("r3k2r/8/8/8/8/8/8/R3K2R w Kq - 0 1").unwrap();
        let board = &position.board;
        assert!(!board.view((7, 4)).unwrap().has_moved); // white king, K right
        assert!(!board.view((7, 7)).unwrap().has_moved);
        assert!(board.view((7, 0)).unwrap().has_moved); // no Q right
        assert!(!board.view((0, 4)).unwrap().has_moved); // black king, q right
        assert!(!board.view((0, 0)).unwrap().has_moved);
        assert!(board.view((0, 7)).unwrap().has_moved);
    }

    #[test]
    fn missing_rights_mark_both_king_and_rooks_moved() {
        let position = parse_fen("r3k2r/8/8/8/8/8/8/R3K2R w - - 0 1").unwrap();
        for square in [(7, 4), (7, 0), (7, 7), (0, 4), (0, 0), (0, 7)] {
            assert!(position.board.view(square).unwrap().has_moved, "{square:?}");
        }
    }

    #[test]
    fn pawns_off_their_start_row_are_marked_moved() {
        let position =
            parse_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1").unwrap();
        assert!(position.board.view((4, 4)).unwrap().has_moved);
        assert!(!position.board.view((6, 0)).unwrap().has_moved);
        assert!(!position.board.view((1, 4)).unwrap().has_moved);
    }

    #[test]
    fn en_passant_field_synthesizes_the_double_push() {
        let position =
            parse_fen("rnbqkbnr/pppp1ppp/8/4p3/8/8/PPPPPPPP/RNBQKBNR w KQkq e6 0 2").unwrap();
        let last = position.last_move.unwrap();
        assert_eq!(last.from, (1, 4));
        assert_eq!(last.to, (3, 4));
        assert!(last.is_double_pawn_push());
        assert_eq!(last.moved_piece.side, Side::Black);
    }

    #[test]
    fn malformed_fens_are_rejected() {
        let cases = [
            "",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq -", // 5 fields
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP w KQkq - 0 1",      // 7 ranks
            "rnbqkbnr/pppppppp/9/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KX - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq e9 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq e6 0 1", // no pawn on e5
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 0",  // fullmove 0
            "Pnbqkbnr/1ppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",  // pawn on back rank
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBN1 w KQkq - 0 1",  // K right, no rook
        ];
        for fen in cases {
            assert!(parse_fen(fen).is_err(), "{fen:?} should be rejected");
        }
    }
}

//! FEN export.
//!
//! The inverse of the parser's flag translation: the castling field is
//! reconstructed from king and rook `has_moved` flags, and the en-passant
//! field from whether the last move was a double pawn push. The engine
//! keeps no clocks, so those fields are emitted as `0 1`.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Piece, PieceKind, Side};
use crate::game_state::move_record::MoveRecord;
use crate::utils::algebraic::square_name;

/// FEN letter for a piece, uppercase for White.
pub fn piece_char(piece: Piece) -> char {
    let ch = match piece.kind {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };
    match piece.side {
        Side::White => ch.to_ascii_uppercase(),
        Side::Black => ch,
    }
}

pub fn generate_fen(board: &Board, side_to_move: Side, last_move: Option<&MoveRecord>) -> String {
    let mut fen = String::new();

    for row in 0..8 {
        if row > 0 {
            fen.push('/');
        }
        let mut empty_run = 0;
        for col in 0..8 {
            match board.view((row, col)) {
                Some(piece) => {
                    if empty_run > 0 {
                        fen.push((b'0' + empty_run) as char);
                        empty_run = 0;
                    }
                    fen.push(piece_char(piece));
                }
                None => empty_run += 1,
            }
        }
        if empty_run > 0 {
            fen.push((b'0' + empty_run) as char);
        }
    }

    fen.push(' ');
    fen.push(match side_to_move {
        Side::White => 'w',
        Side::Black => 'b',
    });

    fen.push(' ');
    let rights = castling_field(board);
    fen.push_str(&rights);

    fen.push(' ');
    match last_move.filter(|mv| mv.is_double_pawn_push()) {
        Some(mv) => {
            let passed_over = ((mv.from.0 + mv.to.0) / 2, mv.to.1);
            fen.push_str(&square_name(passed_over));
        }
        None => fen.push('-'),
    }

    fen.push_str(" 0 1");
    fen
}

fn castling_field(board: &Board) -> String {
    let mut rights = String::new();
    for (side, letters) in [(Side::White, ['K', 'Q']), (Side::Black, ['k', 'q'])] {
        let row = side.home_row();
        let king_unmoved = matches!(
            board.view((row, 4)),
            Some(p) if p.kind == PieceKind::King && p.side == side && !p.has_moved
        );
        if !king_unmoved {
            continue;
        }
        for (letter, rook_col) in letters.into_iter().zip([7, 0]) {
            let rook_unmoved = matches!(
                board.view((row, rook_col)),
                Some(p) if p.kind == PieceKind::Rook && p.side == side && !p.has_moved
            );
            if rook_unmoved {
                rights.push(letter);
            }
        }
    }
    if rights.is_empty() {
        rights.push('-');
    }
    rights
}

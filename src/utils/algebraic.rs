//! Algebraic square names.
//!
//! Files a-h map to columns 0-7; rank digits count up from White's side,
//! so rank 1 is row 7 and rank 8 is row 0.

use crate::errors::RulesError;
use crate::game_state::chess_types::Square;

/// Parses a name like `"e4"` into a (row, col) square.
pub fn parse_square(name: &str) -> Result<Square, RulesError> {
    let invalid = || RulesError::InvalidSquareName(name.to_owned());
    let mut chars = name.chars();
    let file = chars.next().ok_or_else(invalid)?;
    let rank = chars.next().ok_or_else(invalid)?;
    if chars.next().is_some() {
        return Err(invalid());
    }
    if !('a'..='h').contains(&file) || !('1'..='8').contains(&rank) {
        return Err(invalid());
    }
    let col = (file as u8 - b'a') as i8;
    let row = 8 - (rank as u8 - b'0') as i8;
    Ok((row, col))
}

/// Renders an in-bounds square as its algebraic name.
pub fn square_name(square: Square) -> String {
    let file = (b'a' + square.1 as u8) as char;
    let rank = (b'0' + (8 - square.0) as u8) as char;
    format!("{file}{rank}")
}

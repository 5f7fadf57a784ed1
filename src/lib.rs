//! Crate root module declarations for the Rowan chess rules engine.
//!
//! This file exposes all top-level subsystems (game state, move generation,
//! and utility helpers) so tests, benches, and consuming applications can
//! import stable module paths.

pub mod game_state {
    pub mod board;
    pub mod chess_types;
    pub mod game;
    pub mod move_record;
}

pub mod move_generation {
    pub mod attack_checks;
    pub mod legal_moves;
    pub mod move_apply;
    pub mod perft;
    pub mod pseudo_move_shared;
    pub mod pseudo_moves_bishop;
    pub mod pseudo_moves_king;
    pub mod pseudo_moves_knight;
    pub mod pseudo_moves_pawn;
    pub mod pseudo_moves_queen;
    pub mod pseudo_moves_rook;
    pub mod special_moves;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod render_board;
}

pub mod errors;

//! Crate root module declarations for the chesspp board core.
//!
//! Exposes the board model (positions, directions, suits, pieces and the
//! occupancy grid), the per-kind trajectory computations, the JSON
//! configuration reader used during setup, the turn-taking game layer and
//! text utilities, so the CLI, benches and tests share stable module paths.

pub mod chess_errors;

pub mod board {
    pub mod board;
    pub mod direction;
    pub mod piece;
    pub mod position;
    pub mod suit;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_shared;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod config {
    pub mod assets;
    pub mod board_layout;
    pub mod config_errors;
    pub mod game_config;
    pub mod json_reader;
}

pub mod game {
    pub mod game;
}

pub mod utils {
    pub mod algebraic;
    pub mod random_layout;
    pub mod render_board;
}

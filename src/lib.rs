//! Crate root module declarations for the Quince Chess engine project.
//!
//! Quince is a deliberately shallow engine: it enumerates every pseudo-legal
//! move for one side, filters out moves that leave the mover's own king
//! capturable, scores each surviving position with a material-plus-heuristics
//! evaluation, and plays the top-scored move. There is no search tree beyond
//! the single ply of opponent replies needed for legality filtering and
//! check/checkmate flagging.
//!
//! This file exposes all top-level subsystems (board model, move generation,
//! check inspection, scoring, engines, and utility helpers) so binaries,
//! tests, and external tooling can import stable module paths.

pub mod board;
pub mod board_location;
pub mod candidate_move;
pub mod chess_move;
pub mod errors;
pub mod generate_all_moves;
pub mod inspect_check;
pub mod piece_class;
pub mod piece_record;
pub mod piece_team;
pub mod scoring;

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod leaper_moves;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rider_moves;
    pub mod rook_moves;
}

pub mod engines {
    pub mod engine_random;
    pub mod engine_single_ply;
    pub mod engine_trait;
}

pub mod utils {
    pub mod engine_match_harness;
}

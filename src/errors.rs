//! Errors used throughout the chess engine.
//!
//! This module defines the canonical error type returned by the board model,
//! move generation, and the engines. The enum `ChessErrors` is used as the
//! single error type across the crate to simplify propagation and matching.
//! Variants carry contextual payloads where it helps diagnostics.
//!
//! Usage guidelines:
//! - Functions return `Result<..., ChessErrors>` for failure modes that
//!   indicate a corrupted board or a caller contract violation.
//! - Expected outcomes are never errors: a move that fails validation is
//!   reported as `Ok(false)`, and a position with no legal move is reported
//!   through `EngineOutput::best_move == None`.

use std::fmt;

use crate::board_location::BoardLocation;

/// Unified error type for the chess engine.
///
/// Every variant corresponds to an identifiable failure mode. The board and
/// generator variants indicate internal invariant violations (a corrupted
/// position or a caller bug) and abort the current turn's computation; the
/// parsing variants are recoverable input errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChessErrors {
    /// A file/rank pair or an offset from a valid square landed outside the
    /// 8x8 board. Payload: the attempted (file, rank).
    OutOfBounds(i8, i8),
    /// Attempted to place a piece on a square that is already occupied.
    BoardLocationOccupied(BoardLocation),
    /// Attempted to move from a square that holds no piece. This means the
    /// position handed to the engine is corrupted; there is no recovery.
    EmptySourceSquare(BoardLocation),
    /// The provided FEN placement field is invalid. Payload: the offending
    /// character.
    InvalidFenChar(char),
    /// The provided FEN placement field describes more or fewer squares than
    /// an 8x8 board.
    InvalidFenShape,
}

impl fmt::Display for ChessErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessErrors::OutOfBounds(file, rank) => {
                write!(f, "square ({file},{rank}) is outside the board")
            }
            ChessErrors::BoardLocationOccupied(at) => {
                write!(f, "square {at} is already occupied")
            }
            ChessErrors::EmptySourceSquare(at) => {
                write!(f, "no piece to move at {at}")
            }
            ChessErrors::InvalidFenChar(c) => {
                write!(f, "invalid FEN placement character '{c}'")
            }
            ChessErrors::InvalidFenShape => {
                write!(f, "FEN placement field does not describe an 8x8 board")
            }
        }
    }
}

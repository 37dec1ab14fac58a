//! Bounds-checked square coordinates.
//!
//! A `BoardLocation` is only ever constructed through checked constructors,
//! so a value of this type is always on the board. Rank 0 is Light's back
//! rank (FEN rank 1); file 0 is the a-file.

use std::fmt;

use crate::errors::ChessErrors;

/// A square on the 8x8 board, identified by file and rank in [0,7].
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BoardLocation {
    file: i8,
    rank: i8,
}

impl BoardLocation {
    /// Build a location from a file and rank, rejecting off-board values.
    pub fn from_file_rank(file: i8, rank: i8) -> Result<Self, ChessErrors> {
        if (file < 0) | (file > 7) | (rank < 0) | (rank > 7) {
            Err(ChessErrors::OutOfBounds(file, rank))
        } else {
            Ok(BoardLocation { file, rank })
        }
    }

    /// The location reached by moving `d_file` files and `d_rank` ranks from
    /// here, or `OutOfBounds` when that leaves the board.
    pub fn offset(&self, d_file: i8, d_rank: i8) -> Result<Self, ChessErrors> {
        BoardLocation::from_file_rank(self.file + d_file, self.rank + d_rank)
    }

    pub fn file(&self) -> i8 {
        self.file
    }

    pub fn rank(&self) -> i8 {
        self.rank
    }

    /// Euclidean distance to another square, rounded to the nearest integer.
    pub fn rounded_distance_to(&self, other: &BoardLocation) -> i32 {
        let d_file = f64::from(self.file - other.file);
        let d_rank = f64::from(self.rank - other.rank);
        (d_file * d_file + d_rank * d_rank).sqrt().round() as i32
    }
}

impl fmt::Display for BoardLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file_char = (b'a' + self.file as u8) as char;
        write!(f, "{}{}", file_char, self.rank + 1)
    }
}

//! The 8x8 mailbox board model.
//!
//! A `Board` is a plain grid of `Option<PieceRecord>` cells. It is cheap to
//! clone, and every simulated candidate move owns its own clone, so no board
//! state is ever shared between candidates. Construction goes through
//! `starting_position` or the FEN placement parser; mutation goes through
//! `place`, `remove`, and `apply_move`.

use std::fmt;

use crate::board_location::BoardLocation;
use crate::errors::ChessErrors;
use crate::piece_class::PieceClass;
use crate::piece_record::PieceRecord;
use crate::piece_team::PieceTeam;

/// Placement field of the standard starting position.
pub const STARTING_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

/// An 8x8 grid of piece-or-empty cells, indexed `[file][rank]`.
#[derive(Default, Clone, PartialEq, Eq)]
pub struct Board {
    buffer: [[Option<PieceRecord>; 8]; 8],
}

impl Board {
    /// The piece at `x`, if any.
    pub fn view(&self, x: BoardLocation) -> Option<PieceRecord> {
        self.buffer[x.file() as usize][x.rank() as usize]
    }

    /// True when the square holds no piece.
    pub fn is_free(&self, x: BoardLocation) -> bool {
        self.view(x).is_none()
    }

    /// True when the square holds a piece of `team`.
    pub fn has_team(&self, x: BoardLocation, team: PieceTeam) -> bool {
        matches!(self.view(x), Some(record) if record.team == team)
    }

    /// Put a piece on an empty square.
    pub fn place(&mut self, record: PieceRecord, at: BoardLocation) -> Result<(), ChessErrors> {
        let cell = &mut self.buffer[at.file() as usize][at.rank() as usize];
        if cell.is_some() {
            return Err(ChessErrors::BoardLocationOccupied(at));
        }
        *cell = Some(record);
        Ok(())
    }

    /// Take the piece off a square, returning it if one was there.
    pub fn remove(&mut self, at: BoardLocation) -> Option<PieceRecord> {
        self.buffer[at.file() as usize][at.rank() as usize].take()
    }

    /// Move the piece on `from` to `to`, overwriting whatever `to` held.
    ///
    /// An empty `from` square means the caller's position is corrupted and
    /// is reported as a fatal `EmptySourceSquare`.
    pub fn apply_move(&mut self, from: BoardLocation, to: BoardLocation) -> Result<(), ChessErrors> {
        let moved = self
            .remove(from)
            .ok_or(ChessErrors::EmptySourceSquare(from))?;
        self.buffer[to.file() as usize][to.rank() as usize] = Some(moved);
        Ok(())
    }

    /// Iterate over every occupied square together with its piece.
    pub fn occupied_squares(&self) -> impl Iterator<Item = (BoardLocation, PieceRecord)> + '_ {
        (0..8).flat_map(move |file| {
            (0..8).filter_map(move |rank| {
                let at = BoardLocation::from_file_rank(file, rank).ok()?;
                self.view(at).map(|record| (at, record))
            })
        })
    }

    /// The square holding `team`'s king, if that king is still on the board.
    pub fn king_location(&self, team: PieceTeam) -> Option<BoardLocation> {
        self.occupied_squares()
            .find(|(_, record)| record.is_king_of(team))
            .map(|(at, _)| at)
    }

    /// The standard starting position.
    pub fn starting_position() -> Board {
        // The starting placement is a constant, so parsing cannot fail.
        Board::from_fen_placement(STARTING_PLACEMENT)
            .unwrap_or_else(|_| unreachable!("starting placement is valid"))
    }

    /// Parse the placement field of a FEN string (the first field only; the
    /// turn/castling/clock fields belong to the host, not this board model).
    pub fn from_fen_placement(placement: &str) -> Result<Board, ChessErrors> {
        let field = placement
            .split_ascii_whitespace()
            .next()
            .ok_or(ChessErrors::InvalidFenShape)?;

        let mut board = Board::default();
        let mut rank: i8 = 7;
        let mut file: i8 = 0;
        for c in field.chars() {
            match c {
                '/' => {
                    if file != 8 || rank == 0 {
                        return Err(ChessErrors::InvalidFenShape);
                    }
                    rank -= 1;
                    file = 0;
                }
                '1'..='8' => {
                    file += c as i8 - '0' as i8;
                }
                _ => {
                    let record =
                        piece_from_fen_char(c).ok_or(ChessErrors::InvalidFenChar(c))?;
                    let at = BoardLocation::from_file_rank(file, rank)
                        .map_err(|_| ChessErrors::InvalidFenShape)?;
                    board.place(record, at)?;
                    file += 1;
                }
            }
            if file > 8 {
                return Err(ChessErrors::InvalidFenShape);
            }
        }
        if rank != 0 || file != 8 {
            return Err(ChessErrors::InvalidFenShape);
        }
        Ok(board)
    }
}

fn piece_from_fen_char(c: char) -> Option<PieceRecord> {
    let class = match c.to_ascii_lowercase() {
        'p' => PieceClass::Pawn,
        'n' => PieceClass::Knight,
        'b' => PieceClass::Bishop,
        'r' => PieceClass::Rook,
        'q' => PieceClass::Queen,
        'k' => PieceClass::King,
        _ => return None,
    };
    let team = if c.is_ascii_uppercase() {
        PieceTeam::Light
    } else {
        PieceTeam::Dark
    };
    Some(PieceRecord::new(class, team))
}

fn piece_to_fen_char(record: PieceRecord) -> char {
    let lower = match record.class {
        PieceClass::Pawn => 'p',
        PieceClass::Knight => 'n',
        PieceClass::Bishop => 'b',
        PieceClass::Rook => 'r',
        PieceClass::Queen => 'q',
        PieceClass::King => 'k',
    };
    match record.team {
        PieceTeam::Light => lower.to_ascii_uppercase(),
        PieceTeam::Dark => lower,
    }
}

impl fmt::Display for Board {
    /// ASCII diagram with rank 8 on top, for logs and test diagnostics.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8).rev() {
            write!(f, "{} ", rank + 1)?;
            for file in 0..8 {
                let at = BoardLocation::from_file_rank(file, rank)
                    .map_err(|_| fmt::Error)?;
                let cell = match self.view(at) {
                    Some(record) => piece_to_fen_char(record),
                    None => '.',
                };
                write!(f, "{cell} ")?;
            }
            writeln!(f)?;
        }
        writeln!(f, "  a b c d e f g h")
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        fmt::Display::fmt(self, f)
    }
}

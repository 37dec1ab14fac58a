//! King move generation: eight fixed leaper offsets.
//!
//! Castling is not modeled.

use crate::board::Board;
use crate::board_location::BoardLocation;
use crate::candidate_move::CandidateMove;
use crate::errors::ChessErrors;
use crate::moves::leaper_moves::add_leaper_move;
use crate::piece_team::PieceTeam;

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

pub fn add_king_moves(
    move_list: &mut Vec<CandidateMove>,
    board: &Board,
    from: BoardLocation,
    team: PieceTeam,
) -> Result<(), ChessErrors> {
    for (d_file, d_rank) in KING_OFFSETS {
        add_leaper_move(move_list, board, from, team, d_file, d_rank)?;
    }
    Ok(())
}

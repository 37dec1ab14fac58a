//! Bishop move generation: rider walks along the four diagonals.

use crate::board::Board;
use crate::board_location::BoardLocation;
use crate::candidate_move::CandidateMove;
use crate::errors::ChessErrors;
use crate::moves::rider_moves::add_rider_moves;
use crate::piece_team::PieceTeam;

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (-1, -1), (-1, 1), (1, -1)];

pub fn add_bishop_moves(
    move_list: &mut Vec<CandidateMove>,
    board: &Board,
    from: BoardLocation,
    team: PieceTeam,
) -> Result<(), ChessErrors> {
    for (d_file, d_rank) in BISHOP_DIRECTIONS {
        add_rider_moves(move_list, board, from, team, d_file, d_rank)?;
    }
    Ok(())
}

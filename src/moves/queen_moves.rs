//! Queen move generation: the union of the rook and bishop rider walks.

use crate::board::Board;
use crate::board_location::BoardLocation;
use crate::candidate_move::CandidateMove;
use crate::errors::ChessErrors;
use crate::moves::bishop_moves::BISHOP_DIRECTIONS;
use crate::moves::rider_moves::add_rider_moves;
use crate::moves::rook_moves::ROOK_DIRECTIONS;
use crate::piece_team::PieceTeam;

pub fn add_queen_moves(
    move_list: &mut Vec<CandidateMove>,
    board: &Board,
    from: BoardLocation,
    team: PieceTeam,
) -> Result<(), ChessErrors> {
    for (d_file, d_rank) in ROOK_DIRECTIONS.into_iter().chain(BISHOP_DIRECTIONS) {
        add_rider_moves(move_list, board, from, team, d_file, d_rank)?;
    }
    Ok(())
}

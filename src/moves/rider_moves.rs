//! Sliding-move walker shared by rook, bishop, and queen generation.

use crate::board::Board;
use crate::board_location::BoardLocation;
use crate::candidate_move::CandidateMove;
use crate::errors::ChessErrors;
use crate::piece_team::PieceTeam;

/// Walk outward from `from` along one direction vector, adding each empty
/// square and stopping at the first occupied square, which is added only if
/// it holds an enemy piece (a capture).
pub fn add_rider_moves(
    move_list: &mut Vec<CandidateMove>,
    board: &Board,
    from: BoardLocation,
    team: PieceTeam,
    d_file: i8,
    d_rank: i8,
) -> Result<(), ChessErrors> {
    let mut step: i8 = 1;
    while let Ok(target) = from.offset(d_file * step, d_rank * step) {
        if board.is_free(target) {
            move_list.push(CandidateMove::new(board, from, target, team)?);
            step += 1;
            continue;
        }
        if board.has_team(target, team.enemy()) {
            move_list.push(CandidateMove::new(board, from, target, team)?);
        }
        break;
    }
    Ok(())
}

//! Pawn move generation: pushes, double-steps, and diagonal captures.
//!
//! Promotion and en passant are not modeled; a pawn reaching the last rank
//! simply stays a pawn.

use crate::board::Board;
use crate::board_location::BoardLocation;
use crate::candidate_move::CandidateMove;
use crate::errors::ChessErrors;
use crate::piece_team::PieceTeam;

pub fn add_pawn_moves(
    move_list: &mut Vec<CandidateMove>,
    board: &Board,
    from: BoardLocation,
    team: PieceTeam,
) -> Result<(), ChessErrors> {
    let forward = team.pawn_direction();

    if let Ok(push) = from.offset(0, forward) {
        if board.is_free(push) {
            move_list.push(CandidateMove::new(board, from, push, team)?);
            // The double-step needs both the intermediate and the landing
            // square to be empty.
            if from.rank() == team.pawn_start_rank() {
                if let Ok(double) = from.offset(0, forward * 2) {
                    if board.is_free(double) {
                        move_list.push(CandidateMove::new(board, from, double, team)?);
                    }
                }
            }
        }
    }

    for d_file in [1, -1] {
        if let Ok(capture) = from.offset(d_file, forward) {
            if board.has_team(capture, team.enemy()) {
                move_list.push(CandidateMove::new(board, from, capture, team)?);
            }
        }
    }

    Ok(())
}

//! A candidate move bundled with its before and after boards.

use crate::board::Board;
use crate::board_location::BoardLocation;
use crate::chess_move::ChessMove;
use crate::errors::ChessErrors;
use crate::piece_team::PieceTeam;

/// One pseudo-legal move together with the board it was found on, the board
/// it produces, and the team making it.
///
/// The constructor clones the source board and applies the move eagerly, so
/// every candidate owns its own post-move board and downstream steps
/// (legality filtering, flagging, scoring) never mutate shared state. Only
/// the move's flag and score change after construction.
#[derive(Clone)]
pub struct CandidateMove {
    pub old_board: Board,
    pub new_board: Board,
    pub chess_move: ChessMove,
    pub team: PieceTeam,
}

impl CandidateMove {
    pub fn new(
        board: &Board,
        from: BoardLocation,
        to: BoardLocation,
        team: PieceTeam,
    ) -> Result<Self, ChessErrors> {
        let mut new_board = board.clone();
        new_board.apply_move(from, to)?;
        Ok(CandidateMove {
            old_board: board.clone(),
            new_board,
            chess_move: ChessMove::new(from, to),
            team,
        })
    }
}

//! Fixed-offset helper shared by knight and king generation.

use crate::board::Board;
use crate::board_location::BoardLocation;
use crate::candidate_move::CandidateMove;
use crate::errors::ChessErrors;
use crate::piece_team::PieceTeam;

/// Add the single move reached by one fixed offset, if the target square is
/// on the board and either empty or enemy-occupied.
pub fn add_leaper_move(
    move_list: &mut Vec<CandidateMove>,
    board: &Board,
    from: BoardLocation,
    team: PieceTeam,
    d_file: i8,
    d_rank: i8,
) -> Result<(), ChessErrors> {
    if let Ok(target) = from.offset(d_file, d_rank) {
        if board.is_free(target) || board.has_team(target, team.enemy()) {
            move_list.push(CandidateMove::new(board, from, target, team)?);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(file: i8, rank: i8) -> BoardLocation {
        BoardLocation::from_file_rank(file, rank).unwrap()
    }

    #[test]
    fn off_board_offsets_are_silently_skipped() {
        let board = Board::from_fen_placement("8/8/8/8/8/8/8/N7").unwrap();
        let mut moves = Vec::new();
        add_leaper_move(&mut moves, &board, at(0, 0), PieceTeam::Light, -1, 2).unwrap();
        assert!(moves.is_empty());
    }

    #[test]
    fn friendly_targets_are_rejected() {
        let board = Board::from_fen_placement("8/8/8/8/8/1P6/8/N7").unwrap();
        let mut moves = Vec::new();
        add_leaper_move(&mut moves, &board, at(0, 0), PieceTeam::Light, 1, 2).unwrap();
        assert!(moves.is_empty());
    }

    #[test]
    fn enemy_targets_are_captures() {
        let board = Board::from_fen_placement("8/8/8/8/8/1p6/8/N7").unwrap();
        let mut moves = Vec::new();
        add_leaper_move(&mut moves, &board, at(0, 0), PieceTeam::Light, 1, 2).unwrap();
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].chess_move.to, at(1, 2));
    }
}

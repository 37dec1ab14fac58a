//! Full-board pseudo-legal move generation.
//!
//! Scans every occupied square matching a team filter and dispatches to the
//! per-class generators in `moves::*`. The dispatch is an exhaustive match
//! over `PieceClass`, so an "unknown piece" case cannot arise; empty squares
//! are skipped by the occupancy scan itself.

use crate::board::Board;
use crate::candidate_move::CandidateMove;
use crate::errors::ChessErrors;
use crate::moves::bishop_moves::add_bishop_moves;
use crate::moves::king_moves::add_king_moves;
use crate::moves::knight_moves::add_knight_moves;
use crate::moves::pawn_moves::add_pawn_moves;
use crate::moves::queen_moves::add_queen_moves;
use crate::moves::rook_moves::add_rook_moves;
use crate::piece_class::PieceClass;
use crate::piece_team::PieceTeam;

/// Which sides to generate moves for.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TeamFilter {
    AnyTeam,
    OneTeam(PieceTeam),
}

impl TeamFilter {
    fn accepts(&self, team: PieceTeam) -> bool {
        match self {
            TeamFilter::AnyTeam => true,
            TeamFilter::OneTeam(only) => *only == team,
        }
    }
}

/// Every pseudo-legal move on `board` for the sides selected by `filter`,
/// in board-scan order. Each returned candidate owns its post-move board.
pub fn generate_moves(
    board: &Board,
    filter: TeamFilter,
) -> Result<Vec<CandidateMove>, ChessErrors> {
    let mut move_list = Vec::new();
    for (from, record) in board.occupied_squares() {
        if !filter.accepts(record.team) {
            continue;
        }
        match record.class {
            PieceClass::Pawn => add_pawn_moves(&mut move_list, board, from, record.team)?,
            PieceClass::Knight => add_knight_moves(&mut move_list, board, from, record.team)?,
            PieceClass::Bishop => add_bishop_moves(&mut move_list, board, from, record.team)?,
            PieceClass::Rook => add_rook_moves(&mut move_list, board, from, record.team)?,
            PieceClass::Queen => add_queen_moves(&mut move_list, board, from, record.team)?,
            PieceClass::King => add_king_moves(&mut move_list, board, from, record.team)?,
        }
    }
    Ok(move_list)
}

/// Convenience wrapper: all pseudo-legal moves for one team.
pub fn generate_team_moves(
    board: &Board,
    team: PieceTeam,
) -> Result<Vec<CandidateMove>, ChessErrors> {
    generate_moves(board, TeamFilter::OneTeam(team))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_position_has_twenty_moves_per_side() {
        let board = Board::starting_position();
        let light = generate_team_moves(&board, PieceTeam::Light).unwrap();
        assert_eq!(light.len(), 20);

        let pawn_moves = light
            .iter()
            .filter(|c| {
                matches!(
                    c.old_board.view(c.chess_move.from),
                    Some(record) if record.class == PieceClass::Pawn
                )
            })
            .count();
        assert_eq!(pawn_moves, 16);
        assert_eq!(light.len() - pawn_moves, 4, "the rest are knight moves");

        let dark = generate_team_moves(&board, PieceTeam::Dark).unwrap();
        assert_eq!(dark.len(), 20);
    }

    #[test]
    fn any_team_filter_covers_both_sides() {
        let board = Board::starting_position();
        let all = generate_moves(&board, TeamFilter::AnyTeam).unwrap();
        assert_eq!(all.len(), 40);
    }

    #[test]
    fn every_move_starts_on_own_piece_and_lands_off_own_pieces() {
        let board =
            Board::from_fen_placement("r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R")
                .unwrap();
        for team in [PieceTeam::Light, PieceTeam::Dark] {
            for candidate in generate_team_moves(&board, team).unwrap() {
                assert!(candidate.old_board.has_team(candidate.chess_move.from, team));
                assert!(!candidate.old_board.has_team(candidate.chess_move.to, team));
            }
        }
    }
}

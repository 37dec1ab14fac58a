//! Reachability-based check inspection.
//!
//! This engine's notion of "check" is deliberately simple: a side is treated
//! as checked when any one-ply pseudo-legal reply by the other side lands on
//! the square its king currently occupies. That is not rules-accurate check
//! (it ignores pins and some discovered-check subtleties), but it is cheap,
//! self-consistent, and exactly what the legality filter, the Check flag,
//! and the Checkmate upgrade all build on.
//!
//! Costs: `filter_self_check` generates a full opponent reply set per
//! candidate, and `in_checkmate` regenerates counter-replies for every
//! opponent reply. These brute-force scans dominate the engine's runtime.

use crate::board::Board;
use crate::candidate_move::CandidateMove;
use crate::chess_move::MoveFlag;
use crate::errors::ChessErrors;
use crate::generate_all_moves::generate_team_moves;
use crate::piece_team::PieceTeam;

/// True when any pseudo-legal move by `attacker` on `board` has the
/// defender's king square as its destination.
pub fn reply_reaches_king(board: &Board, attacker: PieceTeam) -> Result<bool, ChessErrors> {
    let defender = attacker.enemy();
    for reply in generate_team_moves(board, attacker)? {
        let target = reply.old_board.view(reply.chess_move.to);
        if matches!(target, Some(record) if record.is_king_of(defender)) {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Drop every candidate whose resulting board lets the opponent reach the
/// mover's king. Filtering an already-filtered list changes nothing.
pub fn filter_self_check(
    candidates: Vec<CandidateMove>,
) -> Result<Vec<CandidateMove>, ChessErrors> {
    let mut survivors = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        if !reply_reaches_king(&candidate.new_board, candidate.team.enemy())? {
            survivors.push(candidate);
        }
    }
    Ok(survivors)
}

/// The flag a candidate earns: `Check` when the mover's own replies reach
/// the enemy king from the resulting board, upgraded to `Checkmate` when no
/// opponent reply escapes that attack.
pub fn flag_for_candidate(candidate: &CandidateMove) -> Result<MoveFlag, ChessErrors> {
    if !reply_reaches_king(&candidate.new_board, candidate.team)? {
        return Ok(MoveFlag::NoFlag);
    }
    if in_checkmate(candidate)? {
        Ok(MoveFlag::Checkmate)
    } else {
        Ok(MoveFlag::Check)
    }
}

/// The shared front half of every engine pipeline: generate `team`'s
/// pseudo-legal moves, drop the self-checking ones, and stamp each survivor
/// with its Check/Checkmate flag. Scoring is left to the caller.
pub fn flagged_legal_moves(
    board: &Board,
    team: PieceTeam,
) -> Result<Vec<CandidateMove>, ChessErrors> {
    let candidates = generate_team_moves(board, team)?;
    let mut survivors = filter_self_check(candidates)?;
    for candidate in &mut survivors {
        candidate.chess_move.flag = flag_for_candidate(candidate)?;
    }
    Ok(survivors)
}

/// Brute-force two-ply escape test: for every opposing reply generated from
/// the post-move board, do the mover's counter-replies still reach the
/// opponent's king? An opponent with no replies at all counts as mated.
fn in_checkmate(candidate: &CandidateMove) -> Result<bool, ChessErrors> {
    let enemy_replies = generate_team_moves(&candidate.new_board, candidate.team.enemy())?;
    for reply in enemy_replies {
        if !reply_reaches_king(&reply.new_board, candidate.team)? {
            return Ok(false);
        }
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board_location::BoardLocation;

    fn at(file: i8, rank: i8) -> BoardLocation {
        BoardLocation::from_file_rank(file, rank).unwrap()
    }

    #[test]
    fn rook_on_open_file_reaches_the_king() {
        // Dark rook d8, light king d1.
        let board = Board::from_fen_placement("3r4/8/8/8/8/8/8/3K4").unwrap();
        assert!(reply_reaches_king(&board, PieceTeam::Dark).unwrap());
        assert!(!reply_reaches_king(&board, PieceTeam::Light).unwrap());
    }

    #[test]
    fn filter_rejects_king_moves_staying_on_attacked_file() {
        let board = Board::from_fen_placement("3r4/8/8/8/8/8/8/3K4").unwrap();
        let candidates = generate_team_moves(&board, PieceTeam::Light).unwrap();
        let survivors = filter_self_check(candidates).unwrap();
        assert!(!survivors.is_empty());
        for candidate in &survivors {
            assert_ne!(
                candidate.chess_move.to.file(),
                3,
                "king must leave the d-file: {}",
                candidate.chess_move
            );
        }
    }

    #[test]
    fn filter_is_idempotent() {
        let board = Board::from_fen_placement("3r4/8/8/8/8/8/8/3K4").unwrap();
        let candidates = generate_team_moves(&board, PieceTeam::Light).unwrap();
        let once = filter_self_check(candidates).unwrap();
        let once_moves: Vec<_> = once.iter().map(|c| c.chess_move).collect();
        let twice = filter_self_check(once).unwrap();
        let twice_moves: Vec<_> = twice.iter().map(|c| c.chess_move).collect();
        assert_eq!(once_moves, twice_moves);
    }

    #[test]
    fn queen_check_without_escape_denial_is_not_mate() {
        // Dark queen slides to h4 with only light's f3/g4 pawns advanced;
        // light can still block or survive, so the flag stays Check... but
        // the real fool's mate position below is the mate.
        let board =
            Board::from_fen_placement("rnbqkbnr/pppp1ppp/8/4p3/8/5P2/PPPPP1PP/RNBQKBNR").unwrap();
        let candidate =
            CandidateMove::new(&board, at(3, 7), at(7, 3), PieceTeam::Dark).unwrap();
        assert_eq!(flag_for_candidate(&candidate).unwrap(), MoveFlag::Check);
    }

    #[test]
    fn fools_mate_is_flagged_checkmate() {
        // After 1.f3 e5 2.g4, dark to move: Qd8-h4 mates.
        let board =
            Board::from_fen_placement("rnbqkbnr/pppp1ppp/8/4p3/6P1/5P2/PPPPP2P/RNBQKBNR").unwrap();
        let candidate =
            CandidateMove::new(&board, at(3, 7), at(7, 3), PieceTeam::Dark).unwrap();
        assert_eq!(flag_for_candidate(&candidate).unwrap(), MoveFlag::Checkmate);
    }

    #[test]
    fn checkmate_implies_check() {
        // Any flagged candidate must have passed the check test first; probe
        // the full dark reply set of the fool's mate position.
        let board =
            Board::from_fen_placement("rnbqkbnr/pppp1ppp/8/4p3/6P1/5P2/PPPPP2P/RNBQKBNR").unwrap();
        for candidate in generate_team_moves(&board, PieceTeam::Dark).unwrap() {
            let flag = flag_for_candidate(&candidate).unwrap();
            if flag == MoveFlag::Checkmate {
                assert!(reply_reaches_king(&candidate.new_board, candidate.team).unwrap());
            }
        }
    }

    #[test]
    fn quiet_position_carries_no_flag() {
        let board = Board::starting_position();
        let candidate = CandidateMove::new(&board, at(4, 1), at(4, 3), PieceTeam::Light).unwrap();
        assert_eq!(flag_for_candidate(&candidate).unwrap(), MoveFlag::NoFlag);
    }
}

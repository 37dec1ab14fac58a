//! Static position evaluation.
//!
//! Scores are signed integers from one side's perspective: higher is better
//! for that side. The evaluation sums, over every occupied square, a fixed
//! material value, a pawn-advancement term, and a proximity-to-enemy-king
//! term for the four attacking piece classes. Kings contribute material only.
//!
//! The pawn-rank divisor is the anti-stalemate lever: at its baseline of 20
//! the advancement term is a mild nudge, and once the caller's half-move
//! counter passes `HALF_MOVE_DRAW_THRESHOLD` the divisor drops to 1, making
//! pawn progress dominate quiet shuffling.

use crate::board::Board;
use crate::candidate_move::CandidateMove;
use crate::errors::ChessErrors;
use crate::generate_all_moves::generate_team_moves;
use crate::piece_class::PieceClass;
use crate::piece_record::PieceRecord;
use crate::piece_team::PieceTeam;

pub const PAWN_VALUE: i32 = 100;
pub const KNIGHT_VALUE: i32 = 320;
pub const BISHOP_VALUE: i32 = 333;
pub const ROOK_VALUE: i32 = 510;
pub const QUEEN_VALUE: i32 = 880;
pub const KING_VALUE: i32 = 10000;

pub const CHECK_VALUE: i32 = 500;
pub const CHECKMATE_VALUE: i32 = 10000;
/// Bound of the uniform random tiebreak term added per candidate.
pub const RANDOM_VALUE: i32 = 50;

/// Lower is stronger here: the pawn-advancement term divides by this.
pub const BASELINE_PAWN_RANK_MODIFIER: i32 = 20;
pub const ANTI_DRAW_PAWN_RANK_MODIFIER: i32 = 1;
/// Divisor of the piece-value weight in the king-proximity term.
pub const KING_DISTANCE_MODIFIER: i32 = 60;

/// Half-moves without a pawn move before anti-stalemate measures kick in.
pub const HALF_MOVE_DRAW_THRESHOLD: u32 = 30;
/// Flat bonus given to every surviving pawn move past the threshold.
pub const PAWN_PUSH_BONUS: i32 = 1000;

/// Fixed material value per piece class.
pub fn piece_value(class: PieceClass) -> i32 {
    match class {
        PieceClass::Pawn => PAWN_VALUE,
        PieceClass::Knight => KNIGHT_VALUE,
        PieceClass::Bishop => BISHOP_VALUE,
        PieceClass::Rook => ROOK_VALUE,
        PieceClass::Queen => QUEEN_VALUE,
        PieceClass::King => KING_VALUE,
    }
}

/// Ranks a pawn has advanced beyond its start rank.
fn pawn_advancement(team: PieceTeam, rank: i8) -> i32 {
    match team {
        PieceTeam::Light => i32::from(rank) - 1,
        PieceTeam::Dark => 6 - i32::from(rank),
    }
}

/// Material plus pawn-advancement value of one piece standing on `rank`.
/// This is the per-piece share of the evaluation without the proximity term,
/// reused by the recapture penalty.
fn material_with_advancement(record: PieceRecord, rank: i8, pawn_rank_modifier: i32) -> i32 {
    let mut value = piece_value(record.class);
    if record.is_pawn() {
        value += (PAWN_VALUE / pawn_rank_modifier) * pawn_advancement(record.team, rank);
    }
    value
}

/// Evaluate `board` from `perspective`'s point of view.
///
/// `pawn_rank_modifier` comes from the caller's `TurnContext`; pass
/// `BASELINE_PAWN_RANK_MODIFIER` for a context-free evaluation.
pub fn board_value(board: &Board, perspective: PieceTeam, pawn_rank_modifier: i32) -> i32 {
    let light_king = board.king_location(PieceTeam::Light);
    let dark_king = board.king_location(PieceTeam::Dark);

    let mut value = 0;
    for (at, record) in board.occupied_squares() {
        let color_multi = if record.team == perspective { 1 } else { -1 };

        match record.class {
            PieceClass::Pawn | PieceClass::King => {
                value += color_multi * material_with_advancement(record, at.rank(), pawn_rank_modifier);
            }
            PieceClass::Knight | PieceClass::Bishop | PieceClass::Rook | PieceClass::Queen => {
                let class_value = piece_value(record.class);
                value += color_multi * class_value;

                let enemy_king = match record.team {
                    PieceTeam::Dark => light_king,
                    PieceTeam::Light => dark_king,
                };
                let dist_to_king = match enemy_king {
                    // No king to hunt: fixed fallback weight.
                    None => 10,
                    Some(king_at) => {
                        let mut dis = at.rounded_distance_to(&king_at);
                        // Suppress the over-reward at point-blank range.
                        if dis < 2 {
                            dis = 10;
                        }
                        10 - dis
                    }
                };
                value += color_multi * (class_value / KING_DISTANCE_MODIFIER) * dist_to_king;
            }
        }
    }
    value
}

/// Exchange adjustment for a chosen candidate: if any opponent reply lands
/// on the candidate's destination square, the moved piece is treated as lost
/// at 1.5x its evaluated worth. Only the first such reply counts, and a king
/// on the square carries no penalty (its loss is the game, not material).
pub fn recapture_penalty(
    candidate: &CandidateMove,
    pawn_rank_modifier: i32,
) -> Result<i32, ChessErrors> {
    let destination = candidate.chess_move.to;
    let enemy_replies = generate_team_moves(&candidate.new_board, candidate.team.enemy())?;
    let recaptured = enemy_replies
        .iter()
        .any(|reply| reply.chess_move.to == destination);
    if !recaptured {
        return Ok(0);
    }
    let Some(record) = candidate.new_board.view(destination) else {
        return Ok(0);
    };
    if record.class == PieceClass::King {
        return Ok(0);
    }
    let value = material_with_advancement(record, destination.rank(), pawn_rank_modifier);
    Ok((value as f32 * 1.5) as i32)
}

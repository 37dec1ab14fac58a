//! Minimal head-to-head engine match harness for local testing.
//!
//! Drives two `Engine` implementations through the same call protocol the
//! host tournament framework uses: the mover selects, the opponent validates
//! the selected move against its own independently generated list, and each
//! player owns its own `TurnContext`. No clocks, no UCI I/O.

use crate::board::Board;
use crate::chess_move::MoveFlag;
use crate::engines::engine_trait::{Engine, TurnContext};
use crate::errors::ChessErrors;
use crate::piece_team::PieceTeam;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    /// The winner's chosen move carried the Checkmate flag.
    Checkmate { winner: PieceTeam },
    /// The stuck side had no legal move (mate and stalemate are not
    /// distinguished at this level).
    NoLegalMoves { stuck: PieceTeam },
    /// The offender selected a move its opponent's validation rejected.
    RejectedMove { offender: PieceTeam },
    /// Neither side finished within the ply budget.
    PlyLimit,
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub max_plies: u16,
}

impl Default for MatchConfig {
    fn default() -> Self {
        MatchConfig { max_plies: 200 }
    }
}

#[derive(Debug, Clone)]
pub struct MatchReport {
    pub outcome: MatchOutcome,
    pub plies: u16,
    /// Long-algebraic move list, flags included, for verbose reporting.
    pub move_log: Vec<String>,
}

/// Play one game from the starting position, light engine first.
pub fn play_engine_match<'a>(
    light: &'a mut dyn Engine,
    dark: &'a mut dyn Engine,
    config: &MatchConfig,
) -> Result<MatchReport, ChessErrors> {
    let mut board = Board::starting_position();
    let mut light_ctx = TurnContext::new();
    let mut dark_ctx = TurnContext::new();
    let mut move_log = Vec::new();
    let mut mover_team = PieceTeam::Light;

    for ply in 0..config.max_plies {
        // Split the players into mover and validator for this ply.
        let (mover, mover_ctx, validator, validator_ctx) = match mover_team {
            PieceTeam::Light => (&mut *light, &mut light_ctx, &mut *dark, &mut dark_ctx),
            PieceTeam::Dark => (&mut *dark, &mut dark_ctx, &mut *light, &mut light_ctx),
        };

        let out = mover.choose_move(&board, mover_team, mover_ctx)?;
        let Some(chosen) = out.best_move else {
            return Ok(MatchReport {
                outcome: MatchOutcome::NoLegalMoves { stuck: mover_team },
                plies: ply,
                move_log,
            });
        };

        if !validator.validate_move(&board, &chosen, mover_team, validator_ctx)? {
            return Ok(MatchReport {
                outcome: MatchOutcome::RejectedMove {
                    offender: mover_team,
                },
                plies: ply,
                move_log,
            });
        }

        board.apply_move(chosen.from, chosen.to)?;
        move_log.push(chosen.to_string());

        if chosen.flag == MoveFlag::Checkmate {
            return Ok(MatchReport {
                outcome: MatchOutcome::Checkmate { winner: mover_team },
                plies: ply + 1,
                move_log,
            });
        }
        mover_team = mover_team.enemy();
    }

    Ok(MatchReport {
        outcome: MatchOutcome::PlyLimit,
        plies: config.max_plies,
        move_log,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::engine_random::RandomEngine;
    use crate::engines::engine_single_ply::SinglePlyEngine;

    #[test]
    fn single_ply_vs_random_runs_to_a_clean_outcome() {
        let mut light = SinglePlyEngine::with_seed(2024);
        let mut dark = RandomEngine::with_seed(99);
        let report = play_engine_match(
            &mut light,
            &mut dark,
            &MatchConfig { max_plies: 60 },
        )
        .unwrap();

        assert!(
            !matches!(report.outcome, MatchOutcome::RejectedMove { .. }),
            "both engines derive the same legal move lists: {:?}",
            report.outcome
        );
        assert!(report.move_log.len() as u16 <= 60);
        assert!(!report.move_log.is_empty());
    }

    #[test]
    fn mirror_match_is_reproducible_under_fixed_seeds() {
        let run = || {
            let mut light = SinglePlyEngine::with_seed(5);
            let mut dark = SinglePlyEngine::with_seed(6);
            play_engine_match(&mut light, &mut dark, &MatchConfig { max_plies: 30 })
                .unwrap()
                .move_log
        };
        assert_eq!(run(), run());
    }
}

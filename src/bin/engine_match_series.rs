//! Standalone engine-vs-engine series runner.
//!
//! Run with:
//! `cargo run --release --bin engine_match_series`
//! `cargo run --release --bin engine_match_series -- --verbose`

use quince_chess::engines::engine_random::RandomEngine;
use quince_chess::engines::engine_single_ply::SinglePlyEngine;
use quince_chess::engines::engine_trait::Engine;
use quince_chess::piece_team::PieceTeam;
use quince_chess::utils::engine_match_harness::{
    play_engine_match, MatchConfig, MatchOutcome,
};

fn main() -> Result<(), String> {
    let verbose = std::env::args().any(|a| a == "--verbose" || a == "-v");

    let games = 10u64;
    let base_seed = 1234u64;
    let config = MatchConfig { max_plies: 200 };

    let mut single_ply_wins = 0u32;
    let mut random_wins = 0u32;
    let mut other = 0u32;

    for game in 0..games {
        // Alternate colors each game so neither side always moves first.
        let single_ply_is_light = game % 2 == 0;
        let mut single_ply = SinglePlyEngine::with_seed(base_seed + game);
        let mut random = RandomEngine::with_seed(base_seed + 1000 + game);

        let report = if single_ply_is_light {
            play_engine_match(&mut single_ply, &mut random, &config)
        } else {
            play_engine_match(&mut random, &mut single_ply, &config)
        }
        .map_err(|e| e.to_string())?;

        let single_ply_team = if single_ply_is_light {
            PieceTeam::Light
        } else {
            PieceTeam::Dark
        };
        match report.outcome {
            MatchOutcome::Checkmate { winner } if winner == single_ply_team => {
                single_ply_wins += 1
            }
            MatchOutcome::Checkmate { .. } => random_wins += 1,
            _ => other += 1,
        }

        println!(
            "game {:2}: {:?} in {} plies",
            game + 1,
            report.outcome,
            report.plies
        );
        if verbose {
            println!("  moves: {}", report.move_log.join(" "));
        }
    }

    println!(
        "{} {} - {} {} ({} unfinished/other)",
        SinglePlyEngine::with_seed(0).name(),
        single_ply_wins,
        random_wins,
        RandomEngine::with_seed(0).name(),
        other
    );
    Ok(())
}

//! Uniform random legal-move engine.
//!
//! Selects uniformly from the legality-filtered candidate list and is used
//! as a baseline opponent in harness matches and for integration testing.
//! Chosen moves still carry their Check/Checkmate flags so an opposing
//! validator reaches the same flagged move.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::board::Board;
use crate::chess_move::ChessMove;
use crate::errors::ChessErrors;
use crate::inspect_check::flagged_legal_moves;
use crate::piece_team::PieceTeam;

use super::engine_trait::{Engine, EngineOutput, TurnContext};

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        RandomEngine {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        RandomEngine {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Quince Random"
    }

    fn choose_move(
        &mut self,
        board: &Board,
        team: PieceTeam,
        ctx: &mut TurnContext,
    ) -> Result<EngineOutput, ChessErrors> {
        let legal_moves = flagged_legal_moves(board, team)?;

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string random_engine legal_moves {}",
            legal_moves.len()
        ));

        let Some(picked) = legal_moves.choose(&mut self.rng) else {
            return Ok(out);
        };
        out.best_move = Some(picked.chess_move);

        let moved = board.view(picked.chess_move.from).map(|record| record.class);
        ctx.record_move(moved);
        Ok(out)
    }

    fn validate_move(
        &mut self,
        board: &Board,
        mv: &ChessMove,
        team: PieceTeam,
        ctx: &mut TurnContext,
    ) -> Result<bool, ChessErrors> {
        ctx.record_move(board.view(mv.from).map(|record| record.class));

        if !board.has_team(mv.from, team) {
            return Ok(false);
        }
        let legal_moves = flagged_legal_moves(board, team)?;
        Ok(legal_moves.iter().any(|c| c.chess_move.matches(mv)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_a_legal_move_from_the_opening() {
        let mut engine = RandomEngine::with_seed(42);
        let mut ctx = TurnContext::new();
        let board = Board::starting_position();
        let out = engine
            .choose_move(&board, PieceTeam::Dark, &mut ctx)
            .unwrap();
        let best = out.best_move.unwrap();
        assert!(board.has_team(best.from, PieceTeam::Dark));
        assert!(!board.has_team(best.to, PieceTeam::Dark));
    }

    #[test]
    fn same_seed_same_choice() {
        let board = Board::starting_position();
        let pick = |seed| {
            let mut engine = RandomEngine::with_seed(seed);
            let mut ctx = TurnContext::new();
            engine
                .choose_move(&board, PieceTeam::Light, &mut ctx)
                .unwrap()
                .best_move
                .unwrap()
        };
        assert_eq!(pick(7), pick(7));
    }
}

//! The single-ply heuristic engine.
//!
//! One call, one ply: generate every pseudo-legal move for the side to move,
//! drop the ones that leave the own king capturable, score every survivor's
//! resulting board, and play the top score. The score blends material,
//! pawn advancement, proximity to the enemy king, an exchange penalty for
//! hanging the moved piece, Check/Checkmate bonuses, and a bounded random
//! term so repeated games do not unfold identically.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::Board;
use crate::candidate_move::CandidateMove;
use crate::chess_move::{ChessMove, MoveFlag};
use crate::errors::ChessErrors;
use crate::inspect_check::flagged_legal_moves;
use crate::piece_team::PieceTeam;
use crate::scoring::{
    board_value, recapture_penalty, CHECKMATE_VALUE, CHECK_VALUE, PAWN_PUSH_BONUS, RANDOM_VALUE,
};

use super::engine_trait::{Engine, EngineOutput, TurnContext};

pub struct SinglePlyEngine {
    rng: StdRng,
}

impl SinglePlyEngine {
    pub fn new() -> Self {
        SinglePlyEngine {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic variant for tests and reproducible matches.
    pub fn with_seed(seed: u64) -> Self {
        SinglePlyEngine {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Score a flagged legal candidate list in place.
    ///
    /// Ordering of the terms matters and is part of the engine's contract:
    /// board value, minus the exchange penalty, plus the random tiebreak,
    /// then the flag bonus, and finally the anti-stalemate pawn bonus.
    fn score_candidates(
        &mut self,
        candidates: &mut [CandidateMove],
        ctx: &TurnContext,
    ) -> Result<(), ChessErrors> {
        let modifier = ctx.pawn_rank_modifier();
        for candidate in candidates.iter_mut() {
            let mut score = board_value(&candidate.new_board, candidate.team, modifier);
            score -= recapture_penalty(candidate, modifier)?;
            score += self.rng.random_range(-RANDOM_VALUE..RANDOM_VALUE);
            score += match candidate.chess_move.flag {
                MoveFlag::NoFlag => 0,
                MoveFlag::Check => CHECK_VALUE,
                MoveFlag::Checkmate => CHECKMATE_VALUE,
            };
            candidate.chess_move.score = score;
        }
        if ctx.wants_pawn_push() {
            for candidate in candidates.iter_mut() {
                let moved = candidate.old_board.view(candidate.chess_move.from);
                if matches!(moved, Some(record) if record.is_pawn()) {
                    candidate.chess_move.score += PAWN_PUSH_BONUS;
                }
            }
        }
        Ok(())
    }

    /// The full pipeline: legal flagged moves, scored, best first.
    fn ranked_moves(
        &mut self,
        board: &Board,
        team: PieceTeam,
        ctx: &TurnContext,
    ) -> Result<Vec<CandidateMove>, ChessErrors> {
        let mut candidates = flagged_legal_moves(board, team)?;
        self.score_candidates(&mut candidates, ctx)?;
        candidates.sort_by(|a, b| b.chess_move.cmp_for_selection(&a.chess_move));
        Ok(candidates)
    }
}

impl Default for SinglePlyEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for SinglePlyEngine {
    fn name(&self) -> &str {
        "Quince SinglePly"
    }

    fn choose_move(
        &mut self,
        board: &Board,
        team: PieceTeam,
        ctx: &mut TurnContext,
    ) -> Result<EngineOutput, ChessErrors> {
        let ranked = self.ranked_moves(board, team, ctx)?;

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string single_ply_engine legal_moves {}",
            ranked.len()
        ));

        let Some(best) = ranked.first() else {
            out.info_lines
                .push("info string single_ply_engine no legal move".to_string());
            return Ok(out);
        };

        out.info_lines.push(format!(
            "info string single_ply_engine value {} half_moves {}",
            best.chess_move.score, ctx.half_moves
        ));
        out.best_move = Some(best.chess_move);

        let moved = board.view(best.chess_move.from).map(|record| record.class);
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
        // The clock advances for the opponent's half-move whether or not the
        // move turns out to be valid.
        ctx.record_move(board.view(mv.from).map(|record| record.class));

        if !board.has_team(mv.from, team) {
            return Ok(false);
        }
        let ranked = self.ranked_moves(board, team, ctx)?;
        Ok(ranked.iter().any(|c| c.chess_move.matches(mv)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board_location::BoardLocation;
    use crate::piece_class::PieceClass;
    use crate::scoring::HALF_MOVE_DRAW_THRESHOLD;

    fn at(file: i8, rank: i8) -> BoardLocation {
        BoardLocation::from_file_rank(file, rank).unwrap()
    }

    #[test]
    fn chooses_some_opening_move_and_advances_the_clock() {
        let mut engine = SinglePlyEngine::with_seed(7);
        let mut ctx = TurnContext::new();
        let board = Board::starting_position();
        let out = engine
            .choose_move(&board, PieceTeam::Light, &mut ctx)
            .unwrap();
        let best = out.best_move.expect("opening position has legal moves");
        assert!(board.has_team(best.from, PieceTeam::Light));
        // The clock advanced; whether it reset depends on the chosen piece.
        let moved = board.view(best.from).unwrap();
        if moved.class == PieceClass::Pawn {
            assert_eq!(ctx.half_moves, 0);
        } else {
            assert_eq!(ctx.half_moves, 1);
        }
    }

    #[test]
    fn takes_the_mate_when_one_exists() {
        // Fool's mate position, dark to move: Qd8-h4#.
        let board =
            Board::from_fen_placement("rnbqkbnr/pppp1ppp/8/4p3/6P1/5P2/PPPPP2P/RNBQKBNR").unwrap();
        let mut engine = SinglePlyEngine::with_seed(1);
        let mut ctx = TurnContext::new();
        let out = engine.choose_move(&board, PieceTeam::Dark, &mut ctx).unwrap();
        let best = out.best_move.unwrap();
        assert_eq!(best.from, at(3, 7));
        assert_eq!(best.to, at(7, 3));
        assert_eq!(best.flag, MoveFlag::Checkmate);
    }

    #[test]
    fn reports_none_when_no_move_survives() {
        // Light king cornered on a1 by the dark queen on b3 and king on c3:
        // a2, b2, and b1 are all covered.
        let board = Board::from_fen_placement("8/8/8/8/8/1qk5/8/K7").unwrap();
        let mut engine = SinglePlyEngine::with_seed(2);
        let mut ctx = TurnContext::new();
        let out = engine
            .choose_move(&board, PieceTeam::Light, &mut ctx)
            .unwrap();
        assert!(out.best_move.is_none());
        assert_eq!(ctx.half_moves, 0, "no move played, clock untouched");
    }

    #[test]
    fn stale_clock_forces_a_pawn_push() {
        // One pawn move plus quiet knight and king moves; past the threshold
        // the pawn push must win by at least 1000 minus the random bounds.
        let board = Board::from_fen_placement("k7/8/8/8/8/4P3/8/6NK").unwrap();
        let mut engine = SinglePlyEngine::with_seed(3);
        let ctx = TurnContext {
            half_moves: HALF_MOVE_DRAW_THRESHOLD + 1,
        };

        let ranked = engine.ranked_moves(&board, PieceTeam::Light, &ctx).unwrap();
        let is_pawn_move = |c: &CandidateMove| {
            matches!(c.old_board.view(c.chess_move.from), Some(r) if r.is_pawn())
        };
        let pawn_score = ranked
            .iter()
            .find(|c| is_pawn_move(c))
            .map(|c| c.chess_move.score)
            .expect("the e3 pawn has a push");
        let best_other_score = ranked
            .iter()
            .filter(|c| !is_pawn_move(c))
            .map(|c| c.chess_move.score)
            .max()
            .expect("knight and king moves exist");
        assert!(
            pawn_score - best_other_score >= PAWN_PUSH_BONUS - 2 * RANDOM_VALUE,
            "pawn {pawn_score} vs best other {best_other_score}"
        );

        let mut ctx = TurnContext {
            half_moves: HALF_MOVE_DRAW_THRESHOLD + 1,
        };
        let out = engine
            .choose_move(&board, PieceTeam::Light, &mut ctx)
            .unwrap();
        let best = out.best_move.unwrap();
        let moved = board.view(best.from).unwrap();
        assert_eq!(moved.class, PieceClass::Pawn);
        assert_eq!(ctx.half_moves, 0, "pawn move resets the clock");
    }

    #[test]
    fn validates_own_choice_and_rejects_foreign_moves() {
        let board = Board::starting_position();
        let mut chooser = SinglePlyEngine::with_seed(11);
        let mut validator = SinglePlyEngine::with_seed(99);
        let mut choose_ctx = TurnContext::new();
        let mut validate_ctx = TurnContext::new();

        let chosen = chooser
            .choose_move(&board, PieceTeam::Light, &mut choose_ctx)
            .unwrap()
            .best_move
            .unwrap();
        assert!(validator
            .validate_move(&board, &chosen, PieceTeam::Light, &mut validate_ctx)
            .unwrap());

        // Wrong team for the same move.
        assert!(!validator
            .validate_move(&board, &chosen, PieceTeam::Dark, &mut validate_ctx)
            .unwrap());

        // Empty source square.
        let ghost = ChessMove::new(at(4, 4), at(4, 5));
        assert!(!validator
            .validate_move(&board, &ghost, PieceTeam::Light, &mut validate_ctx)
            .unwrap());

        // Geometrically impossible move.
        let hop = ChessMove::new(at(0, 0), at(0, 3));
        assert!(!validator
            .validate_move(&board, &hop, PieceTeam::Light, &mut validate_ctx)
            .unwrap());
    }

    #[test]
    fn validation_advances_the_clock_like_selection() {
        let board = Board::starting_position();
        let mut engine = SinglePlyEngine::with_seed(5);
        let mut ctx = TurnContext::new();

        // Knight move: counter goes up.
        let knight = ChessMove::new(at(1, 0), at(2, 2));
        engine
            .validate_move(&board, &knight, PieceTeam::Light, &mut ctx)
            .unwrap();
        assert_eq!(ctx.half_moves, 1);

        // Pawn move: counter resets.
        let pawn = ChessMove::new(at(4, 1), at(4, 3));
        engine
            .validate_move(&board, &pawn, PieceTeam::Light, &mut ctx)
            .unwrap();
        assert_eq!(ctx.half_moves, 0);
    }

    #[test]
    fn scores_are_attached_to_every_ranked_move() {
        let board = Board::starting_position();
        let mut engine = SinglePlyEngine::with_seed(13);
        let ctx = TurnContext::new();
        let ranked = engine.ranked_moves(&board, PieceTeam::Light, &ctx).unwrap();
        assert_eq!(ranked.len(), 20);
        for pair in ranked.windows(2) {
            assert!(pair[0].chess_move.score >= pair[1].chess_move.score);
        }
    }
}

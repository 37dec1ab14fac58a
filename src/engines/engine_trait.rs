//! Engine abstraction layer used by the host-facing subsystems.
//!
//! Defines the common selection/validation interface and the caller-owned
//! turn context so different engine strategies can be driven behind a single
//! trait interface. The context replaces what would otherwise be
//! process-wide mutable tuning state: the host (or harness) owns one context
//! per player and threads it through every call.

use crate::board::Board;
use crate::chess_move::ChessMove;
use crate::errors::ChessErrors;
use crate::piece_class::PieceClass;
use crate::piece_team::PieceTeam;
use crate::scoring::{
    ANTI_DRAW_PAWN_RANK_MODIFIER, BASELINE_PAWN_RANK_MODIFIER, HALF_MOVE_DRAW_THRESHOLD,
};

/// Caller-owned per-player state: the half-move counter driving the
/// anti-stalemate heuristics.
///
/// The counter advances on every selection or validation call and resets to
/// zero whenever the moved piece is a pawn. Capture resets are deliberately
/// not tracked; only pawn activity clears the clock.
#[derive(Debug, Clone, Default)]
pub struct TurnContext {
    pub half_moves: u32,
}

impl TurnContext {
    pub fn new() -> Self {
        TurnContext::default()
    }

    /// The pawn-advancement divisor for the current counter value.
    pub fn pawn_rank_modifier(&self) -> i32 {
        if self.half_moves > HALF_MOVE_DRAW_THRESHOLD {
            ANTI_DRAW_PAWN_RANK_MODIFIER
        } else {
            BASELINE_PAWN_RANK_MODIFIER
        }
    }

    /// Whether the position has gone stale enough to force pawn activity.
    pub fn wants_pawn_push(&self) -> bool {
        self.half_moves > HALF_MOVE_DRAW_THRESHOLD
    }

    /// Advance the counter for a completed half-move. `None` means the moved
    /// square turned out to be empty (a failed validation); that still
    /// counts as a non-pawn half-move, matching the selection path.
    pub fn record_move(&mut self, moved: Option<PieceClass>) {
        self.half_moves += 1;
        if matches!(moved, Some(PieceClass::Pawn)) {
            self.half_moves = 0;
        }
    }
}

/// What an engine reports back to its caller for one turn.
#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    /// The chosen move, or `None` when no legal move survives filtering
    /// (the mover is mated or stalemated; the host decides which).
    pub best_move: Option<ChessMove>,
    /// Human-readable diagnostics in `info string` form.
    pub info_lines: Vec<String>,
}

/// A move-selecting strategy driven by the host framework.
pub trait Engine: Send {
    fn name(&self) -> &str;

    /// Pick one move for `team` on `board`, advancing `ctx`.
    fn choose_move(
        &mut self,
        board: &Board,
        team: PieceTeam,
        ctx: &mut TurnContext,
    ) -> Result<EngineOutput, ChessErrors>;

    /// Re-derive the legal move list for `team` on `board` and report
    /// whether `mv` belongs to it, advancing `ctx`. Mismatches are ordinary
    /// `Ok(false)` outcomes, never errors.
    fn validate_move(
        &mut self,
        board: &Board,
        mv: &ChessMove,
        team: PieceTeam,
        ctx: &mut TurnContext,
    ) -> Result<bool, ChessErrors>;
}

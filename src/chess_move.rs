//! The move value object exchanged with the host framework.

use std::cmp::Ordering;
use std::fmt;

use crate::board_location::BoardLocation;

/// Outcome annotation attached to a move by the evaluator.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum MoveFlag {
    NoFlag,
    /// The move attacks the enemy king (reachability-based check).
    Check,
    /// No enemy reply escapes the attack on its king.
    Checkmate,
}

/// A from/to square pair, an outcome flag, and the evaluator's score.
///
/// Equality covers every field. The selection pipeline orders moves by score
/// first, with the remaining fields as an arbitrary but stable secondary key;
/// see `cmp_for_selection`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ChessMove {
    pub from: BoardLocation,
    pub to: BoardLocation,
    pub flag: MoveFlag,
    pub score: i32,
}

impl ChessMove {
    pub fn new(from: BoardLocation, to: BoardLocation) -> Self {
        ChessMove {
            from,
            to,
            flag: MoveFlag::NoFlag,
            score: 0,
        }
    }

    /// Whether `other` describes the same action as this move.
    ///
    /// The score is excluded: it carries the evaluator's random tiebreak
    /// term, so two independently scored copies of one move rarely agree on
    /// it. Flags are re-derived deterministically and must agree.
    pub fn matches(&self, other: &ChessMove) -> bool {
        self.from == other.from && self.to == other.to && self.flag == other.flag
    }

    /// Total order used to rank scored candidates: score first, then the
    /// move's own fields as a stable secondary key.
    pub fn cmp_for_selection(&self, other: &ChessMove) -> Ordering {
        self.score
            .cmp(&other.score)
            .then(self.from.cmp(&other.from))
            .then(self.to.cmp(&other.to))
            .then(self.flag.cmp(&other.flag))
    }
}

impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        match self.flag {
            MoveFlag::NoFlag => Ok(()),
            MoveFlag::Check => write!(f, "+"),
            MoveFlag::Checkmate => write!(f, "#"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mv(from: (i8, i8), to: (i8, i8)) -> ChessMove {
        ChessMove::new(
            BoardLocation::from_file_rank(from.0, from.1).unwrap(),
            BoardLocation::from_file_rank(to.0, to.1).unwrap(),
        )
    }

    #[test]
    fn matches_ignores_score_but_not_flag() {
        let mut a = mv((4, 1), (4, 3));
        let mut b = a;
        b.score = 999;
        assert!(a.matches(&b));
        a.flag = MoveFlag::Check;
        assert!(!a.matches(&b));
    }

    #[test]
    fn selection_order_ranks_by_score_first() {
        let mut low = mv((0, 1), (0, 2));
        let mut high = mv((7, 1), (7, 2));
        low.score = 10;
        high.score = 20;
        assert_eq!(low.cmp_for_selection(&high), Ordering::Less);
        low.score = 20;
        // Equal scores fall back to the from-square ordering.
        assert_eq!(low.cmp_for_selection(&high), Ordering::Less);
    }

    #[test]
    fn renders_long_algebraic_with_flag_suffix() {
        let mut m = mv((3, 7), (7, 3));
        assert_eq!(m.to_string(), "d8h4");
        m.flag = MoveFlag::Checkmate;
        assert_eq!(m.to_string(), "d8h4#");
    }
}

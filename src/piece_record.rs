use crate::{piece_class::PieceClass, piece_team::PieceTeam};

/// Represents a chess piece with its class and team.
///
/// An empty square is `None` at the board level; there is no "empty piece"
/// sentinel, so asking a piece for its team can never be a runtime error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PieceRecord {
    /// The class (type) of the piece (e.g., pawn, knight).
    pub class: PieceClass,
    /// The team (color) owning the piece.
    pub team: PieceTeam,
}

impl PieceRecord {
    pub fn new(class: PieceClass, team: PieceTeam) -> Self {
        PieceRecord { class, team }
    }

    pub fn is_pawn(&self) -> bool {
        matches!(self.class, PieceClass::Pawn)
    }

    pub fn is_king_of(&self, team: PieceTeam) -> bool {
        matches!(self.class, PieceClass::King) && self.team == team
    }
}

/// Represents the team (color) of a chess piece.
/// Used to distinguish between dark (black) and light (white) pieces.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PieceTeam {
    /// The dark (black) side.
    Dark,
    /// The light (white) side.
    Light,
}

impl PieceTeam {
    /// The opposing team.
    pub fn enemy(&self) -> PieceTeam {
        match self {
            PieceTeam::Dark => PieceTeam::Light,
            PieceTeam::Light => PieceTeam::Dark,
        }
    }

    /// Direction a pawn of this team advances along the rank axis.
    pub fn pawn_direction(&self) -> i8 {
        match self {
            PieceTeam::Dark => -1,
            PieceTeam::Light => 1,
        }
    }

    /// The rank this team's pawns start on (and may double-step from).
    pub fn pawn_start_rank(&self) -> i8 {
        match self {
            PieceTeam::Dark => 6,
            PieceTeam::Light => 1,
        }
    }
}

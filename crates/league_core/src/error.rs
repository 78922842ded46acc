use thiserror::Error;

/// Rejected engine operations. A returned error means nothing was mutated
/// and nothing was written.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LeagueError {
    #[error("A match needs two teams, the league has {found}")]
    NotEnoughTeams { found: usize },

    #[error("Unknown team: {team_id}")]
    UnknownTeam { team_id: String },

    #[error("Team {team_id} cannot play itself")]
    SameTeam { team_id: String },

    #[error("Scorer entry for {player_id} must have at least one goal")]
    InvalidScorer { player_id: String },

    #[error("Goal count for {id} would overflow")]
    GoalCountOverflow { id: String },

    #[error("Match cap reached: {max_matches} matches already recorded")]
    MatchCapReached { max_matches: u32 },

    #[error("Invalid settings: {0}")]
    InvalidSettings(String),
}

pub type Result<T> = std::result::Result<T, LeagueError>;

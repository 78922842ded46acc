use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{MatchRecord, Player, Team};

/// Frozen copy of a finished league. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchivedLeague {
    pub id: String,
    pub league_name: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub max_matches: u32,
    #[serde(default)]
    pub teams: Vec<Team>,
    #[serde(default)]
    pub players: Vec<Player>,
    #[serde(default)]
    pub matches: Vec<MatchRecord>,
    pub archived_at: DateTime<Utc>,
    pub champion: Option<String>,
}

impl ArchivedLeague {
    pub fn total_goals(&self) -> u32 {
        self.matches.iter().map(MatchRecord::total_goals).fold(0, u32::saturating_add)
    }

    /// Short label such as "Mar 2026".
    pub fn season_label(&self) -> String {
        self.archived_at.format("%b %Y").to_string()
    }
}

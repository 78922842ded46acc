use serde::{Deserialize, Serialize};

pub const DEFAULT_LEAGUE_NAME: &str = "COSMUS LEAGUE";
pub const DEFAULT_SUBTITLE: &str = "50 Matches • 2 Teams • 1 Champion";
pub const DEFAULT_MAX_MATCHES: u32 = 50;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueSettings {
    pub league_name: String,
    /// Cap on matches in the active season. Advisory unless the engine is
    /// configured to enforce it.
    pub max_matches: u32,
    pub subtitle: String,
}

impl Default for LeagueSettings {
    fn default() -> Self {
        Self {
            league_name: DEFAULT_LEAGUE_NAME.to_string(),
            max_matches: DEFAULT_MAX_MATCHES,
            subtitle: DEFAULT_SUBTITLE.to_string(),
        }
    }
}

impl LeagueSettings {
    pub fn validate(&self) -> Result<(), String> {
        if self.max_matches == 0 {
            return Err("maxMatches must be a positive integer".to_string());
        }
        Ok(())
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::standings::MatchOutcome;

/// Goals attributed to one player in a match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scorer {
    pub player_id: String,
    pub goals: u32,
}

impl Scorer {
    pub fn new(player_id: impl Into<String>, goals: u32) -> Self {
        Self { player_id: player_id.into(), goals }
    }
}

/// A recorded match. Team names are captured at creation so later renames
/// do not rewrite history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRecord {
    pub id: String,
    pub home_team_id: String,
    pub away_team_id: String,
    pub home_team_name: String,
    pub away_team_name: String,
    pub home_goals: u32,
    pub away_goals: u32,
    #[serde(default)]
    pub scorers: Vec<Scorer>,
    pub date: DateTime<Utc>,
}

impl MatchRecord {
    pub fn total_goals(&self) -> u32 {
        self.home_goals.saturating_add(self.away_goals)
    }

    pub fn margin(&self) -> u32 {
        self.home_goals.abs_diff(self.away_goals)
    }

    pub fn is_draw(&self) -> bool {
        self.home_goals == self.away_goals
    }

    /// Outcome for `team_id`, or `None` if the team did not play.
    pub fn outcome_for(&self, team_id: &str) -> Option<MatchOutcome> {
        if self.home_team_id == team_id {
            Some(MatchOutcome::from_score(self.home_goals, self.away_goals))
        } else if self.away_team_id == team_id {
            Some(MatchOutcome::from_score(self.away_goals, self.home_goals))
        } else {
            None
        }
    }

    /// "Home 2 - 1 Away"
    pub fn scoreline(&self) -> String {
        format!(
            "{} {} - {} {}",
            self.home_team_name, self.home_goals, self.away_goals, self.away_team_name
        )
    }
}

use serde::{Deserialize, Serialize};

use crate::standings::MatchOutcome;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: String,
    pub name: String,
    pub coach: String,
    /// Display-only asset reference (URL or data URI). Empty when unset.
    #[serde(default)]
    pub logo: String,
    #[serde(default)]
    pub played: u32,
    #[serde(default)]
    pub won: u32,
    #[serde(default)]
    pub drawn: u32,
    #[serde(default)]
    pub lost: u32,
    #[serde(default)]
    pub goals_for: u32,
    #[serde(default)]
    pub goals_against: u32,
    #[serde(default)]
    pub points: u32,
}

impl Team {
    pub fn new(id: impl Into<String>, name: impl Into<String>, coach: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            coach: coach.into(),
            logo: String::new(),
            played: 0,
            won: 0,
            drawn: 0,
            lost: 0,
            goals_for: 0,
            goals_against: 0,
            points: 0,
        }
    }

    pub fn goal_difference(&self) -> i64 {
        self.goals_for as i64 - self.goals_against as i64
    }

    /// Apply one finished match from this team's point of view.
    pub fn apply_result(&mut self, scored: u32, conceded: u32) {
        let outcome = MatchOutcome::from_score(scored, conceded);

        self.played = self.played.saturating_add(1);
        match outcome {
            MatchOutcome::Win => self.won = self.won.saturating_add(1),
            MatchOutcome::Draw => self.drawn = self.drawn.saturating_add(1),
            MatchOutcome::Loss => self.lost = self.lost.saturating_add(1),
        }
        self.goals_for = self.goals_for.saturating_add(scored);
        self.goals_against = self.goals_against.saturating_add(conceded);
        self.points = self.points.saturating_add(outcome.points());
    }

    /// Zero every record field, keeping identity and cosmetics.
    pub fn clear_record(&mut self) {
        self.played = 0;
        self.won = 0;
        self.drawn = 0;
        self.lost = 0;
        self.goals_for = 0;
        self.goals_against = 0;
        self.points = 0;
    }

    /// `played = won + drawn + lost` and `points = 3*won + drawn`.
    pub fn is_consistent(&self) -> bool {
        self.played == self.won + self.drawn + self.lost
            && self.points == crate::standings::points_for(self.won, self.drawn)
    }

    /// Re-derive `played` and `points` from the win/draw/loss counters.
    /// Returns true if anything changed.
    pub fn repair_record(&mut self) -> bool {
        let played = self.won + self.drawn + self.lost;
        let points = crate::standings::points_for(self.won, self.drawn);
        let changed = played != self.played || points != self.points;
        self.played = played;
        self.points = points;
        changed
    }
}

/// Partial cosmetic update. Record fields are deliberately absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coach: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

impl TeamUpdate {
    pub fn apply_to(self, team: &mut Team) {
        if let Some(name) = self.name {
            team.name = name;
        }
        if let Some(coach) = self.coach {
            team.coach = coach;
        }
        if let Some(logo) = self.logo {
            team.logo = logo;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_win_and_loss() {
        let mut home = Team::new("team1", "Atlantis FC", "Poseidon");
        let mut away = Team::new("team2", "Trident United", "Neptune");

        home.apply_result(3, 1);
        away.apply_result(1, 3);

        assert_eq!((home.played, home.won, home.drawn, home.lost), (1, 1, 0, 0));
        assert_eq!((home.goals_for, home.goals_against, home.points), (3, 1, 3));
        assert_eq!((away.played, away.won, away.drawn, away.lost), (1, 0, 0, 1));
        assert_eq!((away.goals_for, away.goals_against, away.points), (1, 3, 0));
        assert!(home.is_consistent());
        assert!(away.is_consistent());
    }

    #[test]
    fn test_clear_record_keeps_identity() {
        let mut team = Team::new("team1", "Atlantis FC", "Poseidon");
        team.logo = "logo.png".to_string();
        team.apply_result(2, 2);

        team.clear_record();

        assert_eq!(team.name, "Atlantis FC");
        assert_eq!(team.coach, "Poseidon");
        assert_eq!(team.logo, "logo.png");
        let fresh = Team::new("team1", "Atlantis FC", "Poseidon");
        assert_eq!(team, Team { logo: "logo.png".to_string(), ..fresh });
    }

    #[test]
    fn test_goal_totals_saturate() {
        let mut team = Team::new("team1", "A", "B");
        team.goals_for = u32::MAX - 1;

        team.apply_result(5, u32::MAX);
        team.apply_result(0, 1);

        assert_eq!(team.goals_for, u32::MAX);
        assert_eq!(team.goals_against, u32::MAX);
        assert_eq!(team.played, 2);
    }

    #[test]
    fn test_repair_record() {
        let mut team = Team::new("team1", "A", "B");
        team.won = 2;
        team.drawn = 1;
        team.lost = 4;

        assert!(team.repair_record());
        assert_eq!(team.played, 7);
        assert_eq!(team.points, 7);
        assert!(!team.repair_record());
    }

    #[test]
    fn test_team_update_is_cosmetic() {
        let mut team = Team::new("team1", "A", "B");
        team.apply_result(1, 0);

        TeamUpdate { name: Some("Renamed".into()), ..Default::default() }.apply_to(&mut team);

        assert_eq!(team.name, "Renamed");
        assert_eq!(team.coach, "B");
        assert_eq!(team.points, 3);
    }
}

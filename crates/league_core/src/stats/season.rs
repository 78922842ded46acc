use serde::Serialize;

use crate::models::{ArchivedLeague, LeagueSettings, MatchRecord, Team};
use crate::standings::MatchOutcome;

/// All-time counters, current season included.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueTotals {
    /// Archived seasons, plus the current one once it has a match.
    pub seasons_played: u32,
    pub total_matches: u32,
    pub total_goals: u32,
    pub average_goals_per_match: f64,
}

pub fn league_totals(archives: &[ArchivedLeague], current_matches: &[MatchRecord]) -> LeagueTotals {
    let archived_matches: usize = archives.iter().map(|a| a.matches.len()).sum();
    let archived_goals =
        archives.iter().map(ArchivedLeague::total_goals).fold(0, u32::saturating_add);

    let total_matches = (archived_matches + current_matches.len()) as u32;
    let goals = archived_goals.saturating_add(total_goals(current_matches));
    let current_season = u32::from(!current_matches.is_empty());

    LeagueTotals {
        seasons_played: archives.len() as u32 + current_season,
        total_matches,
        total_goals: goals,
        average_goals_per_match: if total_matches > 0 {
            goals as f64 / total_matches as f64
        } else {
            0.0
        },
    }
}

pub fn total_goals(matches: &[MatchRecord]) -> u32 {
    matches.iter().map(MatchRecord::total_goals).fold(0, u32::saturating_add)
}

/// Longest run of consecutive wins for `team_id`, scanning in recorded
/// order. Matches the team did not play are skipped.
pub fn longest_win_streak(team_id: &str, matches: &[MatchRecord]) -> u32 {
    let mut best = 0;
    let mut current = 0;

    for outcome in matches.iter().filter_map(|m| m.outcome_for(team_id)) {
        if outcome == MatchOutcome::Win {
            current += 1;
            best = best.max(current);
        } else {
            current = 0;
        }
    }

    best
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotableMatch {
    pub match_id: String,
    pub scoreline: String,
    /// Margin for a biggest win, total goals for a highest-scoring match.
    pub value: u32,
}

impl NotableMatch {
    fn new(record: &MatchRecord, value: u32) -> Self {
        Self { match_id: record.id.clone(), scoreline: record.scoreline(), value }
    }
}

/// Largest winning margin; earliest match on ties, `None` if every match
/// was drawn.
pub fn biggest_win(matches: &[MatchRecord]) -> Option<NotableMatch> {
    best_by(matches, MatchRecord::margin)
}

/// Most goals in a match; `None` if nothing has been scored.
pub fn highest_scoring_match(matches: &[MatchRecord]) -> Option<NotableMatch> {
    best_by(matches, MatchRecord::total_goals)
}

fn best_by(matches: &[MatchRecord], key: fn(&MatchRecord) -> u32) -> Option<NotableMatch> {
    let mut best: Option<(&MatchRecord, u32)> = None;
    for record in matches {
        let value = key(record);
        if value > best.map_or(0, |(_, v)| v) {
            best = Some((record, value));
        }
    }
    best.map(|(record, value)| NotableMatch::new(record, value))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamStreak {
    pub team_id: String,
    pub team_name: String,
    pub longest_win_streak: u32,
}

/// First team's wins, draws, second team's wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadToHead {
    pub first_team: String,
    pub first_wins: u32,
    pub draws: u32,
    pub second_team: String,
    pub second_wins: u32,
}

/// Current-season overview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonSummary {
    pub matches_played: u32,
    pub max_matches: u32,
    pub total_goals: u32,
    pub draws: u32,
    /// Matches in which at least one side failed to score.
    pub clean_sheets: u32,
    pub biggest_win: Option<NotableMatch>,
    pub highest_scoring: Option<NotableMatch>,
    pub win_streaks: Vec<TeamStreak>,
    pub head_to_head: Option<HeadToHead>,
}

pub fn season_summary(
    teams: &[Team],
    matches: &[MatchRecord],
    settings: &LeagueSettings,
) -> SeasonSummary {
    let draws = matches.iter().filter(|m| m.is_draw()).count() as u32;
    let clean_sheets =
        matches.iter().filter(|m| m.home_goals == 0 || m.away_goals == 0).count() as u32;

    let win_streaks = teams
        .iter()
        .map(|team| TeamStreak {
            team_id: team.id.clone(),
            team_name: team.name.clone(),
            longest_win_streak: longest_win_streak(&team.id, matches),
        })
        .collect();

    let head_to_head = match teams {
        [first, second, ..] if !matches.is_empty() => Some(HeadToHead {
            first_team: first.name.clone(),
            first_wins: first.won,
            draws,
            second_team: second.name.clone(),
            second_wins: second.won,
        }),
        _ => None,
    };

    SeasonSummary {
        matches_played: matches.len() as u32,
        max_matches: settings.max_matches,
        total_goals: total_goals(matches),
        draws,
        clean_sheets,
        biggest_win: biggest_win(matches),
        highest_scoring: highest_scoring_match(matches),
        win_streaks,
        head_to_head,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn record(id: &str, home: &str, away: &str, home_goals: u32, away_goals: u32) -> MatchRecord {
        MatchRecord {
            id: id.to_string(),
            home_team_id: home.to_string(),
            away_team_id: away.to_string(),
            home_team_name: home.to_uppercase(),
            away_team_name: away.to_uppercase(),
            home_goals,
            away_goals,
            scorers: Vec::new(),
            date: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    fn archived(matches: Vec<MatchRecord>) -> ArchivedLeague {
        ArchivedLeague {
            id: "league-1".into(),
            league_name: "Old".into(),
            subtitle: String::new(),
            max_matches: 10,
            teams: Vec::new(),
            players: Vec::new(),
            matches,
            archived_at: Utc.with_ymd_and_hms(2025, 12, 1, 0, 0, 0).unwrap(),
            champion: None,
        }
    }

    #[test]
    fn test_totals_across_archives() {
        let archives =
            vec![archived(vec![record("m1", "a", "b", 2, 1), record("m2", "a", "b", 0, 0)])];
        let current = vec![record("m3", "a", "b", 3, 0)];

        let totals = league_totals(&archives, &current);

        assert_eq!(totals.seasons_played, 2);
        assert_eq!(totals.total_matches, 3);
        assert_eq!(totals.total_goals, 6);
        assert!((totals.average_goals_per_match - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_totals_without_matches() {
        let totals = league_totals(&[], &[]);
        assert_eq!(totals.seasons_played, 0);
        assert_eq!(totals.average_goals_per_match, 0.0);
    }

    #[test]
    fn test_win_streak_resets_on_non_win() {
        let matches = vec![
            record("m1", "a", "b", 1, 0),
            record("m2", "b", "a", 0, 2),
            record("m3", "c", "b", 5, 0), // a not involved
            record("m4", "a", "b", 1, 0),
            record("m5", "a", "b", 1, 1),
            record("m6", "a", "b", 2, 0),
        ];

        assert_eq!(longest_win_streak("a", &matches), 3);
        assert_eq!(longest_win_streak("b", &matches), 0);
        assert_eq!(longest_win_streak("c", &matches), 1);
    }

    #[test]
    fn test_notable_matches() {
        let matches = vec![
            record("m1", "a", "b", 1, 1),
            record("m2", "a", "b", 4, 1),
            record("m3", "a", "b", 0, 3),
            record("m4", "a", "b", 3, 3),
        ];

        let biggest = biggest_win(&matches).unwrap();
        assert_eq!(biggest.match_id, "m2");
        assert_eq!(biggest.value, 3);
        assert_eq!(biggest.scoreline, "A 4 - 1 B");

        let highest = highest_scoring_match(&matches).unwrap();
        assert_eq!(highest.match_id, "m4");
        assert_eq!(highest.value, 6);
    }

    #[test]
    fn test_goalless_season_has_no_notables() {
        let matches = vec![record("m1", "a", "b", 0, 0)];
        assert!(biggest_win(&matches).is_none());
        assert!(highest_scoring_match(&matches).is_none());
    }

    #[test]
    fn test_season_summary() {
        let mut a = Team::new("a", "A", "");
        let mut b = Team::new("b", "B", "");
        let matches = vec![record("m1", "a", "b", 2, 0), record("m2", "a", "b", 1, 1)];
        for m in &matches {
            a.apply_result(m.home_goals, m.away_goals);
            b.apply_result(m.away_goals, m.home_goals);
        }

        let summary = season_summary(&[a, b], &matches, &LeagueSettings::default());

        assert_eq!(summary.matches_played, 2);
        assert_eq!(summary.max_matches, 50);
        assert_eq!(summary.total_goals, 4);
        assert_eq!(summary.draws, 1);
        assert_eq!(summary.clean_sheets, 1);
        assert_eq!(summary.win_streaks[0].longest_win_streak, 1);
        let h2h = summary.head_to_head.unwrap();
        assert_eq!((h2h.first_wins, h2h.draws, h2h.second_wins), (1, 1, 0));
    }

    #[test]
    fn test_no_head_to_head_before_first_match() {
        let teams = [Team::new("a", "A", ""), Team::new("b", "B", "")];
        let summary = season_summary(&teams, &[], &LeagueSettings::default());
        assert!(summary.head_to_head.is_none());
        assert!(summary.biggest_win.is_none());
    }
}

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::{ArchivedLeague, Player};

pub const ALL_TIME_SCORERS_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedPlayer {
    pub name: String,
    pub total_goals: u32,
    /// Seasons (archived or current) the name appeared in.
    pub leagues_played: u32,
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChampionRecord {
    pub team_name: String,
    pub titles: u32,
    /// League names won, oldest first.
    pub leagues: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonTopScorer {
    pub league_name: String,
    pub top_scorer: String,
    pub goals: u32,
    pub archived_at: DateTime<Utc>,
    /// e.g. "Mar 2026"
    pub season_label: String,
}

/// Top scorers across every archived season plus the current one.
///
/// Players are merged by name, not id: the same name in different seasons is
/// the same person. Ties on goals keep first-seen order.
pub fn all_time_top_scorers(
    archives: &[ArchivedLeague],
    current_players: &[Player],
) -> Vec<AggregatedPlayer> {
    let seasons = archives
        .iter()
        .map(|league| league.players.as_slice())
        .chain(std::iter::once(current_players));

    let mut order: Vec<String> = Vec::new();
    let mut totals: HashMap<String, (AggregatedPlayer, usize)> = HashMap::new();

    for (season_idx, players) in seasons.enumerate() {
        for player in players {
            let (entry, last_season) = totals.entry(player.name.clone()).or_insert_with(|| {
                order.push(player.name.clone());
                let fresh = AggregatedPlayer {
                    name: player.name.clone(),
                    total_goals: 0,
                    leagues_played: 0,
                    image: None,
                };
                (fresh, usize::MAX)
            });

            entry.total_goals = entry.total_goals.saturating_add(player.goals);
            if *last_season != season_idx {
                entry.leagues_played += 1;
                *last_season = season_idx;
            }
            if player.image.is_some() {
                entry.image = player.image.clone();
            }
        }
    }

    let mut scorers: Vec<AggregatedPlayer> =
        order.iter().filter_map(|name| totals.remove(name).map(|(p, _)| p)).collect();
    scorers.sort_by(|a, b| b.total_goals.cmp(&a.total_goals));
    scorers.truncate(ALL_TIME_SCORERS_LIMIT);
    scorers
}

/// Title counts per champion, most titles first.
pub fn champion_records(archives: &[ArchivedLeague]) -> Vec<ChampionRecord> {
    let mut records: Vec<ChampionRecord> = Vec::new();

    for league in archives {
        let Some(champion) = league.champion.as_deref() else {
            continue;
        };
        match records.iter_mut().find(|r| r.team_name == champion) {
            Some(record) => {
                record.titles += 1;
                record.leagues.push(league.league_name.clone());
            }
            None => records.push(ChampionRecord {
                team_name: champion.to_string(),
                titles: 1,
                leagues: vec![league.league_name.clone()],
            }),
        }
    }

    records.sort_by(|a, b| b.titles.cmp(&a.titles));
    records
}

/// Best scorer of each archived season. Seasons without players are skipped.
pub fn season_top_scorers(archives: &[ArchivedLeague]) -> Vec<SeasonTopScorer> {
    archives
        .iter()
        .filter_map(|league| {
            let top = top_scorer(&league.players)?;
            Some(SeasonTopScorer {
                league_name: league.league_name.clone(),
                top_scorer: top.name.clone(),
                goals: top.goals,
                archived_at: league.archived_at,
                season_label: league.season_label(),
            })
        })
        .collect()
}

/// Highest goal count, first in list order on ties.
pub fn top_scorer(players: &[Player]) -> Option<&Player> {
    players.iter().fold(None, |best: Option<&Player>, p| match best {
        Some(b) if b.goals >= p.goals => Some(b),
        _ => Some(p),
    })
}

/// Everything the hall of fame view shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HallOfFame {
    pub champions: Vec<ChampionRecord>,
    pub all_time_scorers: Vec<AggregatedPlayer>,
    pub season_records: Vec<SeasonTopScorer>,
    pub has_data: bool,
}

impl HallOfFame {
    pub fn compute(archives: &[ArchivedLeague], current_players: &[Player]) -> Self {
        Self {
            champions: champion_records(archives),
            all_time_scorers: all_time_top_scorers(archives, current_players),
            season_records: season_top_scorers(archives),
            has_data: !archives.is_empty() || !current_players.is_empty(),
        }
    }
}

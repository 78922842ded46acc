//! Points and ranking rules.
//!
//! Every place that needs points or a table order goes through here: match
//! recording, archiving (champion selection) and the stats views.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::models::Team;

pub const POINTS_FOR_WIN: u32 = 3;
pub const POINTS_FOR_DRAW: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchOutcome {
    Win,
    Draw,
    Loss,
}

impl MatchOutcome {
    pub fn from_score(scored: u32, conceded: u32) -> Self {
        match scored.cmp(&conceded) {
            Ordering::Greater => MatchOutcome::Win,
            Ordering::Equal => MatchOutcome::Draw,
            Ordering::Less => MatchOutcome::Loss,
        }
    }

    pub fn points(self) -> u32 {
        match self {
            MatchOutcome::Win => POINTS_FOR_WIN,
            MatchOutcome::Draw => POINTS_FOR_DRAW,
            MatchOutcome::Loss => 0,
        }
    }
}

pub fn points_for(won: u32, drawn: u32) -> u32 {
    won * POINTS_FOR_WIN + drawn * POINTS_FOR_DRAW
}

/// Table order: points, then goal difference, then goals scored, all
/// descending. Remaining ties keep their input order.
pub fn compare_teams(a: &Team, b: &Team) -> Ordering {
    points_for(b.won, b.drawn)
        .cmp(&points_for(a.won, a.drawn))
        .then_with(|| b.goal_difference().cmp(&a.goal_difference()))
        .then_with(|| b.goals_for.cmp(&a.goals_for))
}

/// Teams sorted into table order. `sort_by` is stable, which gives the
/// input-order fallback.
pub fn rank_teams(teams: &[Team]) -> Vec<&Team> {
    let mut ranked: Vec<&Team> = teams.iter().collect();
    ranked.sort_by(|a, b| compare_teams(a, b));
    ranked
}

pub fn leader(teams: &[Team]) -> Option<&Team> {
    rank_teams(teams).into_iter().next()
}

/// One row of a rendered table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingsRow {
    pub position: usize,
    pub team_id: String,
    pub team_name: String,
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i64,
    pub points: u32,
}

pub fn standings_table(teams: &[Team]) -> Vec<StandingsRow> {
    rank_teams(teams)
        .into_iter()
        .enumerate()
        .map(|(idx, team)| StandingsRow {
            position: idx + 1,
            team_id: team.id.clone(),
            team_name: team.name.clone(),
            played: team.played,
            won: team.won,
            drawn: team.drawn,
            lost: team.lost,
            goals_for: team.goals_for,
            goals_against: team.goals_against,
            goal_difference: team.goal_difference(),
            points: points_for(team.won, team.drawn),
        })
        .collect()
}

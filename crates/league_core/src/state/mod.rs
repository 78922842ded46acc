//! Current league aggregate
//!
//! `LeagueState` holds the active season (teams, players, matches, settings)
//! and applies every rule that changes it. It knows nothing about storage;
//! `LeagueEngine` wraps it and persists after each mutation. It converts to
//! and from `CurrentLeagueDocument` for persistence.

use chrono::{DateTime, Utc};

use crate::error::{LeagueError, Result};
use crate::models::{
    time_based_id, ArchivedLeague, LeagueSettings, MatchRecord, NewPlayer, Player, PlayerUpdate,
    Scorer, Team, TeamUpdate,
};
use crate::save::{CurrentLeagueDocument, SAVE_VERSION};
use crate::standings;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeagueState {
    pub teams: Vec<Team>,
    pub players: Vec<Player>,
    pub matches: Vec<MatchRecord>,
    pub settings: LeagueSettings,
}

impl LeagueState {
    pub fn new(teams: Vec<Team>, settings: LeagueSettings) -> Self {
        Self { teams, players: Vec::new(), matches: Vec::new(), settings }
    }

    pub fn to_document(&self) -> CurrentLeagueDocument {
        CurrentLeagueDocument {
            version: SAVE_VERSION,
            teams: self.teams.clone(),
            players: self.players.clone(),
            matches: self.matches.clone(),
            settings: self.settings.clone(),
        }
    }

    pub fn from_document(doc: CurrentLeagueDocument) -> Self {
        Self {
            teams: doc.teams,
            players: doc.players,
            matches: doc.matches,
            settings: doc.settings,
        }
    }

    // ========================
    // Lookups
    // ========================

    pub fn team(&self, team_id: &str) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == team_id)
    }

    pub fn player(&self, player_id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == player_id)
    }

    pub fn standings(&self) -> Vec<&Team> {
        standings::rank_teams(&self.teams)
    }

    pub fn remaining_matches(&self) -> u32 {
        self.settings.max_matches.saturating_sub(self.matches.len() as u32)
    }

    pub fn is_season_complete(&self) -> bool {
        self.matches.len() as u32 >= self.settings.max_matches
    }

    // ========================
    // Match Recording
    // ========================

    /// Check a match before anything is touched.
    pub fn validate_match(
        &self,
        home_id: &str,
        away_id: &str,
        home_goals: u32,
        away_goals: u32,
        scorers: &[Scorer],
    ) -> Result<()> {
        if self.teams.len() < 2 {
            return Err(LeagueError::NotEnoughTeams { found: self.teams.len() });
        }
        if home_id == away_id {
            return Err(LeagueError::SameTeam { team_id: home_id.to_string() });
        }
        for team_id in [home_id, away_id] {
            if self.team(team_id).is_none() {
                return Err(LeagueError::UnknownTeam { team_id: team_id.to_string() });
            }
        }
        if let Some(bad) = scorers.iter().find(|s| s.goals == 0) {
            return Err(LeagueError::InvalidScorer { player_id: bad.player_id.clone() });
        }

        for (team_id, scored, conceded) in
            [(home_id, home_goals, away_goals), (away_id, away_goals, home_goals)]
        {
            let fits = self.team(team_id).is_some_and(|t| {
                t.goals_for.checked_add(scored).is_some()
                    && t.goals_against.checked_add(conceded).is_some()
            });
            if !fits {
                return Err(LeagueError::GoalCountOverflow { id: team_id.to_string() });
            }
        }
        for scorer in scorers {
            let Some(player) = self.player(&scorer.player_id) else {
                continue;
            };
            let credited = scorers
                .iter()
                .filter(|s| s.player_id == scorer.player_id)
                .try_fold(player.goals, |total, s| total.checked_add(s.goals));
            if credited.is_none() {
                return Err(LeagueError::GoalCountOverflow { id: player.id.clone() });
            }
        }
        Ok(())
    }

    /// Record a finished match: both team records, scorer goals and the
    /// match itself. Scorers naming unknown players are skipped.
    pub fn record_match(
        &mut self,
        home_id: &str,
        away_id: &str,
        home_goals: u32,
        away_goals: u32,
        scorers: Vec<Scorer>,
        now: DateTime<Utc>,
    ) -> Result<MatchRecord> {
        self.validate_match(home_id, away_id, home_goals, away_goals, &scorers)?;

        let mut home_name = String::new();
        let mut away_name = String::new();
        for team in &mut self.teams {
            if team.id == home_id {
                team.apply_result(home_goals, away_goals);
                home_name = team.name.clone();
            } else if team.id == away_id {
                team.apply_result(away_goals, home_goals);
                away_name = team.name.clone();
            }
        }

        for scorer in &scorers {
            match self.players.iter_mut().find(|p| p.id == scorer.player_id) {
                Some(player) => player.goals = player.goals.saturating_add(scorer.goals),
                None => log::debug!("Ignoring goals for unknown player '{}'", scorer.player_id),
            }
        }

        let id = time_based_id("match", now, self.matches.iter().map(|m| m.id.as_str()));
        let record = MatchRecord {
            id,
            home_team_id: home_id.to_string(),
            away_team_id: away_id.to_string(),
            home_team_name: home_name,
            away_team_name: away_name,
            home_goals,
            away_goals,
            scorers,
            date: now,
        };

        self.matches.push(record.clone());
        Ok(record)
    }

    // ========================
    // Player Management
    // ========================

    pub fn add_player(&mut self, data: NewPlayer, now: DateTime<Utc>) -> Player {
        let id = time_based_id("player", now, self.players.iter().map(|p| p.id.as_str()));
        let player = data.into_player(id);
        self.players.push(player.clone());
        player
    }

    pub fn edit_player(&mut self, player_id: &str, update: PlayerUpdate) -> Option<&Player> {
        let player = self.players.iter_mut().find(|p| p.id == player_id)?;
        update.apply_to(player);
        Some(&*player)
    }

    pub fn remove_player(&mut self, player_id: &str) -> Option<Player> {
        let idx = self.players.iter().position(|p| p.id == player_id)?;
        Some(self.players.remove(idx))
    }

    // ========================
    // Team Management
    // ========================

    pub fn update_team_logo(&mut self, team_id: &str, logo: String) -> Option<&Team> {
        self.update_team_info(team_id, TeamUpdate { logo: Some(logo), ..Default::default() })
    }

    pub fn update_team_info(&mut self, team_id: &str, update: TeamUpdate) -> Option<&Team> {
        let team = self.teams.iter_mut().find(|t| t.id == team_id)?;
        update.apply_to(team);
        Some(&*team)
    }

    // ========================
    // Season Lifecycle
    // ========================

    /// Snapshot of the league as it stands. The champion is the table leader;
    /// with no matches played that is simply the first team listed.
    pub fn to_archive(&self, id: String, now: DateTime<Utc>) -> ArchivedLeague {
        let champion = standings::leader(&self.teams).map(|t| t.name.clone());

        ArchivedLeague {
            id,
            league_name: self.settings.league_name.clone(),
            subtitle: self.settings.subtitle.clone(),
            max_matches: self.settings.max_matches,
            teams: self.teams.clone(),
            players: self.players.clone(),
            matches: self.matches.clone(),
            archived_at: now,
            champion,
        }
    }

    /// Fresh season: same teams with zeroed records, no players, no
    /// matches, settings untouched.
    pub fn reset(&mut self) {
        for team in &mut self.teams {
            team.clear_record();
        }
        self.players.clear();
        self.matches.clear();
    }
}

//! League engine
//!
//! Owns the current league and the archive list and is the only writer to
//! storage. Every mutating operation validates first, mutates the in-memory
//! state, then writes the affected document(s). A rejected operation returns
//! an error and writes nothing. Storage failures are logged by
//! `LeagueStorage` and never undo the in-memory change.

use chrono::{DateTime, Utc};

use crate::config::{LeagueConfig, MatchCapPolicy};
use crate::error::{LeagueError, Result};
use crate::models::{
    time_based_id, ArchivedLeague, LeagueSettings, MatchRecord, NewPlayer, Player, PlayerUpdate,
    Scorer, Team, TeamUpdate,
};
use crate::save::{CurrentLeagueDocument, KeyValueStore, LeagueStorage};
use crate::standings::{self, StandingsRow};
use crate::state::LeagueState;
use crate::stats::{self, HallOfFame, LeagueTotals, SeasonSummary};

#[derive(Debug)]
pub struct LeagueEngine<S: KeyValueStore> {
    state: LeagueState,
    archives: Vec<ArchivedLeague>,
    storage: LeagueStorage<S>,
    config: LeagueConfig,
    selected_home: Option<String>,
    selected_away: Option<String>,
    last_write_ok: bool,
}

impl<S: KeyValueStore> LeagueEngine<S> {
    /// Load the league from `store`, bootstrapping from `config` on first run
    /// or when the stored document cannot be read.
    pub fn open(store: S, config: LeagueConfig) -> Self {
        let storage = LeagueStorage::new(store);

        let doc = storage.load_or_else(|| {
            log::info!("No saved league found, starting '{}'", config.league_name);
            CurrentLeagueDocument::new(config.bootstrap_teams(), config.default_settings())
        });
        let archives = storage.load_archives();

        log::info!(
            "League '{}' opened: {} teams, {} matches, {} archived seasons",
            doc.settings.league_name,
            doc.teams.len(),
            doc.matches.len(),
            archives.len()
        );

        Self {
            state: LeagueState::from_document(doc),
            archives,
            storage,
            config,
            selected_home: None,
            selected_away: None,
            last_write_ok: true,
        }
    }

    pub fn with_defaults(store: S) -> Self {
        Self::open(store, LeagueConfig::default())
    }

    // ========================
    // Read Model
    // ========================

    pub fn state(&self) -> &LeagueState {
        &self.state
    }

    /// Owned copy of the current league, in persisted form.
    pub fn snapshot(&self) -> CurrentLeagueDocument {
        self.state.to_document()
    }

    /// Archived seasons, oldest first.
    pub fn archives(&self) -> &[ArchivedLeague] {
        &self.archives
    }

    pub fn teams(&self) -> &[Team] {
        &self.state.teams
    }

    pub fn players(&self) -> &[Player] {
        &self.state.players
    }

    pub fn matches(&self) -> &[MatchRecord] {
        &self.state.matches
    }

    pub fn settings(&self) -> &LeagueSettings {
        &self.state.settings
    }

    pub fn config(&self) -> &LeagueConfig {
        &self.config
    }

    pub fn standings(&self) -> Vec<StandingsRow> {
        standings::standings_table(&self.state.teams)
    }

    pub fn remaining_matches(&self) -> u32 {
        self.state.remaining_matches()
    }

    pub fn is_season_complete(&self) -> bool {
        self.state.is_season_complete()
    }

    pub fn hall_of_fame(&self) -> HallOfFame {
        HallOfFame::compute(&self.archives, &self.state.players)
    }

    pub fn league_totals(&self) -> LeagueTotals {
        stats::league_totals(&self.archives, &self.state.matches)
    }

    pub fn season_summary(&self) -> SeasonSummary {
        stats::season_summary(&self.state.teams, &self.state.matches, &self.state.settings)
    }

    /// Whether the most recent write reached storage.
    pub fn last_write_ok(&self) -> bool {
        self.last_write_ok
    }

    // ========================
    // Team Selection
    // ========================

    pub fn select_home_team(&mut self, team_id: Option<&str>) {
        self.selected_home = team_id.map(str::to_string);
    }

    pub fn select_away_team(&mut self, team_id: Option<&str>) {
        self.selected_away = team_id.map(str::to_string);
    }

    /// The selected pair, falling back to the first and second team.
    pub fn selected_teams(&self) -> Result<(String, String)> {
        let teams = &self.state.teams;
        let fallback = |idx: usize| {
            teams
                .get(idx)
                .map(|t| t.id.clone())
                .ok_or(LeagueError::NotEnoughTeams { found: teams.len() })
        };

        let home = match &self.selected_home {
            Some(id) => id.clone(),
            None => fallback(0)?,
        };
        let away = match &self.selected_away {
            Some(id) => id.clone(),
            None => fallback(1)?,
        };
        Ok((home, away))
    }

    // ========================
    // Mutations
    // ========================

    /// Record a match between the selected teams.
    pub fn record_selected_match(
        &mut self,
        home_goals: u32,
        away_goals: u32,
        scorers: Vec<Scorer>,
    ) -> Result<MatchRecord> {
        let (home_id, away_id) = self.selected_teams()?;
        self.record_match(&home_id, &away_id, home_goals, away_goals, scorers)
    }

    pub fn record_match(
        &mut self,
        home_id: &str,
        away_id: &str,
        home_goals: u32,
        away_goals: u32,
        scorers: Vec<Scorer>,
    ) -> Result<MatchRecord> {
        if self.config.match_cap == MatchCapPolicy::Enforced && self.state.is_season_complete() {
            let max_matches = self.state.settings.max_matches;
            return Err(LeagueError::MatchCapReached { max_matches });
        }

        let record =
            self.state.record_match(home_id, away_id, home_goals, away_goals, scorers, now())?;

        log::debug!("Recorded {} ({})", record.scoreline(), record.id);
        self.persist();
        Ok(record)
    }

    pub fn add_player(&mut self, data: NewPlayer) -> Player {
        let player = self.state.add_player(data, now());
        self.persist();
        player
    }

    /// `None` (and no write) if the player does not exist.
    pub fn edit_player(&mut self, player_id: &str, update: PlayerUpdate) -> Option<Player> {
        let player = self.state.edit_player(player_id, update)?.clone();
        self.persist();
        Some(player)
    }

    /// `None` (and no write) if the player does not exist.
    pub fn delete_player(&mut self, player_id: &str) -> Option<Player> {
        let player = self.state.remove_player(player_id)?;
        self.persist();
        Some(player)
    }

    pub fn update_team_logo(&mut self, team_id: &str, logo: impl Into<String>) -> Option<Team> {
        let team = self.state.update_team_logo(team_id, logo.into())?.clone();
        self.persist();
        Some(team)
    }

    pub fn update_team_info(&mut self, team_id: &str, update: TeamUpdate) -> Option<Team> {
        let team = self.state.update_team_info(team_id, update)?.clone();
        self.persist();
        Some(team)
    }

    /// Replace the settings wholesale. Existing matches are unaffected.
    pub fn set_settings(&mut self, settings: LeagueSettings) -> Result<()> {
        settings.validate().map_err(LeagueError::InvalidSettings)?;
        self.state.settings = settings;
        self.persist();
        Ok(())
    }

    /// Archive the current season and start a fresh one with the same teams
    /// and settings.
    pub fn archive_league(&mut self) -> ArchivedLeague {
        let now = now();
        let id = time_based_id("league", now, self.archives.iter().map(|a| a.id.as_str()));
        let archive = self.state.to_archive(id, now);

        self.archives.push(archive.clone());
        let archives_saved = self.storage.save_archives(&self.archives);

        self.state.reset();
        self.selected_home = None;
        self.selected_away = None;
        self.persist();
        self.last_write_ok &= archives_saved;

        log::info!(
            "Archived '{}' ({} matches), champion: {}",
            archive.league_name,
            archive.matches.len(),
            archive.champion.as_deref().unwrap_or("none")
        );
        archive
    }

    /// Start a fresh season without archiving. Irreversible.
    pub fn reset_league(&mut self) {
        self.state.reset();
        self.selected_home = None;
        self.selected_away = None;
        self.persist();
        log::info!("League '{}' reset", self.state.settings.league_name);
    }

    fn persist(&mut self) {
        self.last_write_ok = self.storage.save(&self.state.to_document());
    }
}

fn now() -> DateTime<Utc> {
    Utc::now()
}

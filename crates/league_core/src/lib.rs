//! # league_core - Single-League Standings Engine
//!
//! Tracks one league between two (or more) teams: match results, goal
//! scorers, the standings table, archived past seasons and all-time records.
//!
//! ## Features
//! - Points table with goal-difference tie-breaks
//! - Season archive with champion selection and reset
//! - Hall of fame and season statistics across archives
//! - JSON persistence through a pluggable key-value store
//!
//! ```no_run
//! use league_core::{FileStore, LeagueEngine};
//!
//! let mut league = LeagueEngine::with_defaults(FileStore::in_current_dir());
//! league.record_match("team1", "team2", 3, 1, Vec::new())?;
//! println!("{:?}", league.standings());
//! # Ok::<(), league_core::LeagueError>(())
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod models;
pub mod save;
pub mod standings;
pub mod state;
pub mod stats;

pub use config::{ConfigError, LeagueConfig, MatchCapPolicy, TeamSeed};
pub use engine::LeagueEngine;
pub use error::{LeagueError, Result};
pub use models::{
    ArchivedLeague, LeagueSettings, MatchRecord, NewPlayer, Player, PlayerUpdate, Scorer, Team,
    TeamUpdate,
};
pub use save::{FileStore, KeyValueStore, LeagueStorage, MemoryStore, SaveError};
pub use standings::{MatchOutcome, StandingsRow};
pub use stats::{HallOfFame, LeagueTotals, SeasonSummary};

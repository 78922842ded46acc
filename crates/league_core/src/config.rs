//! Bootstrap configuration for a fresh league.
//!
//! Only consulted when storage holds no league yet (first run) and for the
//! match cap policy. Every field has a default so a partial JSON file works.

use std::collections::HashSet;
use std::path::Path;
use std::{env, fs};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{
    LeagueSettings, Team, DEFAULT_LEAGUE_NAME, DEFAULT_MAX_MATCHES, DEFAULT_SUBTITLE,
};

pub const CONFIG_PATH_ENV: &str = "LEAGUE_CONFIG_PATH";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Whether `maxMatches` is a hint for the caller or a hard limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchCapPolicy {
    /// Matches past the cap are still recorded; callers check
    /// `is_season_complete` themselves.
    #[default]
    Advisory,
    /// `record_match` fails once the cap is reached.
    Enforced,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamSeed {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub coach: String,
}

impl TeamSeed {
    fn new(id: &str, name: &str, coach: &str) -> Self {
        Self { id: id.to_string(), name: name.to_string(), coach: coach.to_string() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeagueConfig {
    pub league_name: String,
    pub subtitle: String,
    pub max_matches: u32,
    pub default_teams: Vec<TeamSeed>,
    pub match_cap: MatchCapPolicy,
}

impl Default for LeagueConfig {
    fn default() -> Self {
        Self {
            league_name: DEFAULT_LEAGUE_NAME.to_string(),
            subtitle: DEFAULT_SUBTITLE.to_string(),
            max_matches: DEFAULT_MAX_MATCHES,
            default_teams: vec![
                TeamSeed::new("team1", "Atlantis FC", "Poseidon"),
                TeamSeed::new("team2", "Trident United", "Neptune"),
            ],
            match_cap: MatchCapPolicy::Advisory,
        }
    }
}

impl LeagueConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: LeagueConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from the file named by `LEAGUE_CONFIG_PATH`, or fall back to the
    /// defaults when the variable is unset or blank.
    pub fn from_env() -> Result<Self, ConfigError> {
        let Ok(path) = env::var(CONFIG_PATH_ENV) else {
            return Ok(Self::default());
        };

        let path = path.trim();
        if path.is_empty() {
            return Ok(Self::default());
        }

        log::info!("Loading league config from {CONFIG_PATH_ENV}='{path}'");
        Self::load(path)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_matches == 0 {
            return Err(ConfigError::Validation("max_matches must be positive".to_string()));
        }

        let mut ids = HashSet::new();
        for seed in &self.default_teams {
            if seed.id.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "team '{}' has an empty id",
                    seed.name
                )));
            }
            if !ids.insert(seed.id.as_str()) {
                return Err(ConfigError::Validation(format!("duplicate team id '{}'", seed.id)));
            }
        }

        Ok(())
    }

    pub fn default_settings(&self) -> LeagueSettings {
        LeagueSettings {
            league_name: self.league_name.clone(),
            max_matches: self.max_matches,
            subtitle: self.subtitle.clone(),
        }
    }

    pub fn bootstrap_teams(&self) -> Vec<Team> {
        self.default_teams
            .iter()
            .map(|seed| Team::new(seed.id.clone(), seed.name.clone(), seed.coach.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = LeagueConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.bootstrap_teams().len(), 2);
        assert_eq!(config.default_settings(), LeagueSettings::default());
        assert_eq!(config.match_cap, MatchCapPolicy::Advisory);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config =
            LeagueConfig::from_json(r#"{ "league_name": "Reef Cup", "match_cap": "enforced" }"#)
                .unwrap();

        assert_eq!(config.league_name, "Reef Cup");
        assert_eq!(config.max_matches, DEFAULT_MAX_MATCHES);
        assert_eq!(config.match_cap, MatchCapPolicy::Enforced);
        assert_eq!(config.default_teams.len(), 2);
    }

    #[test]
    fn test_rejects_zero_max_matches() {
        let result = LeagueConfig::from_json(r#"{ "max_matches": 0 }"#);
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_rejects_duplicate_team_ids() {
        let json = r#"{ "default_teams": [
            { "id": "t", "name": "One" },
            { "id": "t", "name": "Two" }
        ] }"#;
        assert!(matches!(LeagueConfig::from_json(json), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(LeagueConfig::from_json("{ nope"), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "max_matches": 12, "subtitle": "Short season" }}"#).unwrap();

        let config = LeagueConfig::load(file.path()).unwrap();

        assert_eq!(config.max_matches, 12);
        assert_eq!(config.subtitle, "Short season");
    }

    // Only this test touches LEAGUE_CONFIG_PATH.
    #[test]
    fn test_from_env_unset_blank_and_path() {
        env::remove_var(CONFIG_PATH_ENV);
        assert_eq!(LeagueConfig::from_env().unwrap(), LeagueConfig::default());

        env::set_var(CONFIG_PATH_ENV, "   ");
        assert_eq!(LeagueConfig::from_env().unwrap(), LeagueConfig::default());

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "league_name": "Reef Cup", "match_cap": "enforced" }}"#).unwrap();
        env::set_var(CONFIG_PATH_ENV, format!("  {}  ", file.path().display()));
        let config = LeagueConfig::from_env().unwrap();
        assert_eq!(config.league_name, "Reef Cup");
        assert_eq!(config.match_cap, MatchCapPolicy::Enforced);

        let missing = file.path().with_extension("missing");
        env::set_var(CONFIG_PATH_ENV, &missing);
        assert!(matches!(LeagueConfig::from_env(), Err(ConfigError::Io(_))));

        env::remove_var(CONFIG_PATH_ENV);
    }
}

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::error::SaveError;
use super::SAVE_VERSION;
use crate::models::{ArchivedLeague, LeagueSettings, MatchRecord, Player, Team};

/// Persisted form of the current league.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CurrentLeagueDocument {
    /// Format version for migration. Documents without one are version 0.
    #[serde(default)]
    pub version: u32,

    #[serde(default)]
    pub teams: Vec<Team>,

    #[serde(default)]
    pub players: Vec<Player>,

    /// Chronological, oldest first.
    #[serde(default)]
    pub matches: Vec<MatchRecord>,

    #[serde(default)]
    pub settings: LeagueSettings,
}

impl CurrentLeagueDocument {
    pub fn new(teams: Vec<Team>, settings: LeagueSettings) -> Self {
        Self { version: SAVE_VERSION, teams, players: Vec::new(), matches: Vec::new(), settings }
    }

    /// Rename any id that repeats an earlier one in the same collection to
    /// `<id>-<n>`. Old documents could mint two ids in the same millisecond.
    /// Returns how many ids were renamed.
    pub fn dedupe_ids(&mut self) -> usize {
        dedupe("team", self.teams.iter_mut().map(|t| &mut t.id))
            + dedupe("player", self.players.iter_mut().map(|p| &mut p.id))
            + dedupe("match", self.matches.iter_mut().map(|m| &mut m.id))
    }
}

fn dedupe<'a>(kind: &str, ids: impl Iterator<Item = &'a mut String>) -> usize {
    let ids: Vec<&mut String> = ids.collect();
    let mut taken: HashSet<String> = ids.iter().map(|id| id.as_str().to_owned()).collect();
    let mut seen = HashSet::new();
    let mut renamed = 0;

    for id in ids {
        if seen.insert(id.as_str().to_owned()) {
            continue;
        }
        let fresh = (1..)
            .map(|n| format!("{id}-{n}"))
            .find(|candidate| !taken.contains(candidate))
            .unwrap_or_else(|| id.clone());
        log::warn!("Renamed duplicate {kind} id '{id}' to '{fresh}'");
        taken.insert(fresh.clone());
        seen.insert(fresh.clone());
        *id = fresh;
        renamed += 1;
    }

    renamed
}

pub fn encode_current(doc: &CurrentLeagueDocument) -> Result<String, SaveError> {
    Ok(serde_json::to_string(doc)?)
}

pub fn decode_current(text: &str) -> Result<CurrentLeagueDocument, SaveError> {
    let doc: CurrentLeagueDocument = serde_json::from_str(text)?;
    Ok(doc)
}

pub fn encode_archives(archives: &[ArchivedLeague]) -> Result<String, SaveError> {
    Ok(serde_json::to_string(archives)?)
}

pub fn decode_archives(text: &str) -> Result<Vec<ArchivedLeague>, SaveError> {
    Ok(serde_json::from_str(text)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Scorer;
    use chrono::{TimeZone, Utc};

    fn sample_document() -> CurrentLeagueDocument {
        let mut doc = CurrentLeagueDocument::new(
            vec![
                Team::new("team1", "Atlantis FC", "Poseidon"),
                Team::new("team2", "Trident United", "Neptune"),
            ],
            LeagueSettings::default(),
        );
        doc.teams[0].apply_result(2, 1);
        doc.teams[1].apply_result(1, 2);
        doc.players.push(Player {
            id: "player-1".into(),
            name: "Kai".into(),
            team_id: "team1".into(),
            goals: 2,
            image: None,
        });
        doc.players.push(Player {
            id: "player-2".into(),
            name: "Nami".into(),
            team_id: "team2".into(),
            goals: 1,
            image: Some("nami.png".into()),
        });
        doc.matches.push(MatchRecord {
            id: "match-1".into(),
            home_team_id: "team1".into(),
            away_team_id: "team2".into(),
            home_team_name: "Atlantis FC".into(),
            away_team_name: "Trident United".into(),
            home_goals: 2,
            away_goals: 1,
            scorers: vec![Scorer::new("player-1", 2), Scorer::new("player-2", 1)],
            date: Utc.with_ymd_and_hms(2026, 3, 14, 18, 30, 0).unwrap(),
        });
        doc
    }

    #[test]
    fn test_document_roundtrip_preserves_order() {
        let doc = sample_document();

        let text = encode_current(&doc).unwrap();
        let restored = decode_current(&text).unwrap();

        assert_eq!(restored, doc);
        assert_eq!(restored.players[0].id, "player-1");
        assert_eq!(restored.players[1].id, "player-2");
    }

    #[test]
    fn test_wire_field_names() {
        let text = encode_current(&sample_document()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(value["teams"][0]["goalsFor"], 2);
        assert_eq!(value["players"][0]["teamId"], "team1");
        assert_eq!(value["players"][0]["image"], serde_json::Value::Null);
        assert_eq!(value["matches"][0]["homeTeamName"], "Atlantis FC");
        assert_eq!(value["matches"][0]["scorers"][0]["playerId"], "player-1");
        assert_eq!(value["matches"][0]["date"], "2026-03-14T18:30:00Z");
        assert_eq!(value["settings"]["leagueName"], "COSMUS LEAGUE");
    }

    #[test]
    fn test_missing_sections_default() {
        let doc = decode_current(r#"{ "teams": [] }"#).unwrap();

        assert_eq!(doc.version, 0);
        assert!(doc.players.is_empty());
        assert!(doc.matches.is_empty());
        assert_eq!(doc.settings, LeagueSettings::default());
    }

    #[test]
    fn test_dedupe_ids_renames_repeats() {
        let mut doc = sample_document();
        doc.players[1].id = "player-1".into();
        let mut repeat = doc.matches[0].clone();
        doc.matches.push(repeat.clone());
        repeat.id = "match-1-1".into();
        doc.matches.push(repeat);

        assert_eq!(doc.dedupe_ids(), 2);

        assert_eq!(doc.players[0].id, "player-1");
        assert_eq!(doc.players[1].id, "player-1-1");
        let ids: Vec<&str> = doc.matches.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["match-1", "match-1-2", "match-1-1"]);
        assert_eq!(doc.dedupe_ids(), 0);
    }

    #[test]
    fn test_garbage_is_an_error() {
        assert!(matches!(decode_current("not json"), Err(SaveError::Serialization(_))));
        assert!(matches!(decode_archives("{}"), Err(SaveError::Serialization(_))));
    }
}

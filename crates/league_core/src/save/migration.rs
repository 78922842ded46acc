use super::format::CurrentLeagueDocument;
use super::SAVE_VERSION;

/// Bring a loaded document up to the current version. Duplicate ids are
/// repaired whatever the version, so the result can always be saved again.
pub fn migrate_document(mut doc: CurrentLeagueDocument) -> CurrentLeagueDocument {
    let renamed = doc.dedupe_ids();
    if renamed > 0 {
        log::warn!("Repaired {} duplicate ids in league document", renamed);
    }

    if doc.version > SAVE_VERSION {
        // Future version - might be compatible
        log::warn!(
            "Loading league from future version {} (current: {})",
            doc.version,
            SAVE_VERSION
        );
        return doc;
    }
    if !needs_migration(&doc) {
        return doc;
    }

    let original_version = doc.version;
    if doc.version == 0 {
        doc = migrate_v0_to_v1(doc);
    }
    doc.version = SAVE_VERSION;

    log::info!("Migrated league from version {} to {}", original_version, SAVE_VERSION);
    doc
}

/// Version 0 is whatever the unversioned app wrote. Its team records were
/// maintained by hand in several places, so `played` and `points` are
/// re-derived from the win/draw/loss counters.
fn migrate_v0_to_v1(mut doc: CurrentLeagueDocument) -> CurrentLeagueDocument {
    for team in &mut doc.teams {
        if team.repair_record() {
            log::warn!("Repaired inconsistent record for team '{}'", team.id);
        }
    }
    doc
}

pub fn needs_migration(doc: &CurrentLeagueDocument) -> bool {
    doc.version < SAVE_VERSION
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LeagueSettings, NewPlayer, Team};

    #[test]
    fn test_migrate_v0_repairs_points() {
        let mut team = Team::new("team1", "Atlantis FC", "Poseidon");
        team.won = 2;
        team.drawn = 1;
        team.played = 2;
        team.points = 4;
        let mut doc = CurrentLeagueDocument::new(vec![team], LeagueSettings::default());
        doc.version = 0;
        assert!(needs_migration(&doc));

        let migrated = migrate_document(doc);

        assert_eq!(migrated.version, SAVE_VERSION);
        assert_eq!(migrated.teams[0].played, 3);
        assert_eq!(migrated.teams[0].points, 7);
    }

    #[test]
    fn test_no_migration_needed() {
        let doc = CurrentLeagueDocument::new(Vec::new(), LeagueSettings::default());

        let result = migrate_document(doc.clone());

        assert_eq!(result, doc);
    }

    #[test]
    fn test_future_version_passes_through() {
        let mut doc = CurrentLeagueDocument::new(Vec::new(), LeagueSettings::default());
        doc.version = 999;

        let result = migrate_document(doc);
        assert_eq!(result.version, 999);
    }

    #[test]
    fn test_duplicate_ids_repaired_on_load() {
        let mut doc = CurrentLeagueDocument::new(Vec::new(), LeagueSettings::default());
        doc.version = 0;
        doc.players.push(NewPlayer::new("Kai", "team1").into_player("player-7".into()));
        doc.players.push(NewPlayer::new("Nami", "team2").into_player("player-7".into()));

        let migrated = migrate_document(doc);

        assert_eq!(migrated.version, SAVE_VERSION);
        assert_eq!(migrated.players[0].id, "player-7");
        assert_eq!(migrated.players[1].id, "player-7-1");
    }
}

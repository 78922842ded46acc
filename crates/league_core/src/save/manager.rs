use super::error::SaveError;
use super::format::{
    decode_archives, decode_current, encode_archives, encode_current, CurrentLeagueDocument,
};
use super::migration::migrate_document;
use super::store::KeyValueStore;
use super::{ARCHIVES_KEY, CURRENT_LEAGUE_KEY};
use crate::models::ArchivedLeague;

/// Persistence adapter for the two league documents.
///
/// The plain methods never fail: a missing or unreadable document yields
/// the supplied default and write failures are logged and dropped. The
/// `try_*` methods expose the underlying errors.
#[derive(Debug)]
pub struct LeagueStorage<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> LeagueStorage<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Load the current league, or `None` on first run.
    pub fn try_load(&self) -> Result<Option<CurrentLeagueDocument>, SaveError> {
        let Some(text) = self.store.read(CURRENT_LEAGUE_KEY)? else {
            return Ok(None);
        };

        let doc = migrate_document(decode_current(&text)?);
        log::debug!("Loaded league document ({} bytes)", text.len());
        Ok(Some(doc))
    }

    pub fn load_or_else<F>(&self, default: F) -> CurrentLeagueDocument
    where
        F: FnOnce() -> CurrentLeagueDocument,
    {
        match self.try_load() {
            Ok(Some(doc)) => doc,
            Ok(None) => default(),
            Err(e) => {
                log::error!("Error loading league state, using defaults: {}", e);
                default()
            }
        }
    }

    pub fn try_save(&mut self, doc: &CurrentLeagueDocument) -> Result<(), SaveError> {
        let text = encode_current(doc)?;
        self.store.write(CURRENT_LEAGUE_KEY, &text)
    }

    /// Best-effort save. Returns whether the write went through.
    pub fn save(&mut self, doc: &CurrentLeagueDocument) -> bool {
        match self.try_save(doc) {
            Ok(()) => true,
            Err(e) => {
                log::error!("Error saving league state: {}", e);
                false
            }
        }
    }

    pub fn try_load_archives(&self) -> Result<Vec<ArchivedLeague>, SaveError> {
        match self.store.read(ARCHIVES_KEY)? {
            Some(text) => decode_archives(&text),
            None => Ok(Vec::new()),
        }
    }

    pub fn load_archives(&self) -> Vec<ArchivedLeague> {
        self.try_load_archives().unwrap_or_else(|e| {
            log::error!("Error loading archives, starting with none: {}", e);
            Vec::new()
        })
    }

    pub fn try_save_archives(&mut self, archives: &[ArchivedLeague]) -> Result<(), SaveError> {
        let text = encode_archives(archives)?;
        self.store.write(ARCHIVES_KEY, &text)
    }

    /// Best-effort save. Returns whether the write went through.
    pub fn save_archives(&mut self, archives: &[ArchivedLeague]) -> bool {
        match self.try_save_archives(archives) {
            Ok(()) => true,
            Err(e) => {
                log::error!("Error saving archives: {}", e);
                false
            }
        }
    }
}

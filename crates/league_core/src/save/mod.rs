// Save/Load System for the league
// Two JSON documents in a key-value store, with versioning and best-effort writes

pub mod error;
pub mod format;
pub mod manager;
pub mod migration;
pub mod store;

pub use error::SaveError;
pub use format::{
    decode_archives, decode_current, encode_archives, encode_current, CurrentLeagueDocument,
};
pub use manager::LeagueStorage;
pub use migration::migrate_document;
pub use store::{FileStore, KeyValueStore, MemoryStore};

pub const SAVE_VERSION: u32 = 1;

pub const CURRENT_LEAGUE_KEY: &str = "league-data";
pub const ARCHIVES_KEY: &str = "archived-leagues";

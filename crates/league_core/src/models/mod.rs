pub mod archive;
pub mod match_record;
pub mod player;
pub mod settings;
pub mod team;

pub use archive::ArchivedLeague;
pub use match_record::{MatchRecord, Scorer};
pub use player::{NewPlayer, Player, PlayerUpdate};
pub use settings::{LeagueSettings, DEFAULT_LEAGUE_NAME, DEFAULT_MAX_MATCHES, DEFAULT_SUBTITLE};
pub use team::{Team, TeamUpdate};

use chrono::{DateTime, Utc};

/// Build a `<prefix>-<unix millis>` id that is not in `taken`.
///
/// Ids derive from creation time; when two records land on the same
/// millisecond the numeric part is bumped until it is free.
pub fn time_based_id<'a, I>(prefix: &str, now: DateTime<Utc>, taken: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let taken: std::collections::HashSet<&str> = taken.into_iter().collect();
    let mut millis = now.timestamp_millis();
    loop {
        let candidate = format!("{prefix}-{millis}");
        if !taken.contains(candidate.as_str()) {
            return candidate;
        }
        millis += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_time_based_id_skips_taken() {
        let now = Utc.timestamp_millis_opt(1_700_000_000_000).unwrap();

        let first = time_based_id("match", now, std::iter::empty());
        assert_eq!(first, "match-1700000000000");

        let second = time_based_id("match", now, [first.as_str()]);
        assert_eq!(second, "match-1700000000001");
    }
}

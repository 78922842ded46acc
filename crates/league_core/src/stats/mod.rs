//! Read-only views over the current season and the archive list.
//!
//! Nothing here touches storage or mutates state; callers pass slices from
//! `LeagueEngine` (or straight from decoded documents).

pub mod hall_of_fame;
pub mod season;

pub use hall_of_fame::{
    all_time_top_scorers, champion_records, season_top_scorers, top_scorer, AggregatedPlayer,
    ChampionRecord, HallOfFame, SeasonTopScorer, ALL_TIME_SCORERS_LIMIT,
};
pub use season::{
    biggest_win, highest_scoring_match, league_totals, longest_win_streak, season_summary,
    total_goals, HeadToHead, LeagueTotals, NotableMatch, SeasonSummary, TeamStreak,
};

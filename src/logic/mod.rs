//! Read-model derivations: search, filters/sorts, aggregations, bracket.

mod aggregate;
mod bracket;
mod filters;
mod search;

pub use aggregate::{
    goal_tallies, goal_timeline, next_tournament, outcome_for_player, player_of_the_week,
    player_profile_stats, rosters, GameRosters, GoalTally, PlayerOutcome, PlayerProfileStats,
};
pub use bracket::{bracket_rounds, round_label, BracketRound};
pub use filters::{
    filter_games, filter_tournaments, sort_players, time_bucket, GameFilter, PlayerSortKey,
    TimeBucket, TournamentTab,
};
pub use search::{search_games, search_locations, search_players, search_tournaments};

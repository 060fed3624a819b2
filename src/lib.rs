//! Table-football league dashboard: library with entity models, fixture
//! data, and the pure derivations the dashboard views are built from.

pub mod fixtures;
pub mod logic;
pub mod models;

pub use logic::{
    bracket_rounds, filter_games, filter_tournaments, goal_tallies, goal_timeline,
    next_tournament, outcome_for_player, player_of_the_week, player_profile_stats, round_label,
    rosters, search_games, search_locations, search_players, search_tournaments, sort_players,
    time_bucket, BracketRound, GameFilter, GameRosters, GoalTally, PlayerOutcome,
    PlayerProfileStats, PlayerSortKey, TimeBucket, TournamentTab,
};
pub use models::{
    Game, GameId, GameOutcome, Goal, GoalId, LeagueStore, Location, LocationId, Player, PlayerId,
    Schedule, ScheduleId, TeamSide, Tournament, TournamentContext, TournamentId, TournamentStatus,
    TournamentTeam, TournamentTeamId,
};

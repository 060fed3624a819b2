//! Data structures for the league: players, games, goals, locations,
//! tournaments, and the fixture store that holds them.

mod game;
mod location;
mod player;
mod store;
mod tournament;

pub use game::{Game, GameId, GameOutcome, Goal, GoalId, TeamSide, TournamentContext};
pub use location::{Location, LocationId, Schedule, ScheduleId};
pub use player::{Player, PlayerId};
pub use store::LeagueStore;
pub use tournament::{
    Tournament, TournamentId, TournamentStatus, TournamentTeam, TournamentTeamId,
};

//! The in-memory fixture store: flat collections plus id indexes.

use crate::models::game::{Game, GameId, Goal};
use crate::models::location::{Location, LocationId, Schedule};
use crate::models::player::{Player, PlayerId};
use crate::models::tournament::{Tournament, TournamentId, TournamentTeam};
use std::collections::HashMap;

/// Read-only store for the whole league. Indexes from id to position are
/// built once at construction so referential lookups are O(1) instead of a
/// scan per call. On duplicate ids the first record wins.
///
/// A miss is an ordinary outcome, not an error: optional relationships
/// (second player slots, locations, partners) resolve to `None` and callers
/// render around the gap.
#[derive(Clone, Debug)]
pub struct LeagueStore {
    players: Vec<Player>,
    locations: Vec<Location>,
    schedules: Vec<Schedule>,
    games: Vec<Game>,
    goals: Vec<Goal>,
    tournaments: Vec<Tournament>,
    teams: Vec<TournamentTeam>,
    player_index: HashMap<PlayerId, usize>,
    location_index: HashMap<LocationId, usize>,
    game_index: HashMap<GameId, usize>,
    tournament_index: HashMap<TournamentId, usize>,
}

impl LeagueStore {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        players: Vec<Player>,
        locations: Vec<Location>,
        schedules: Vec<Schedule>,
        games: Vec<Game>,
        goals: Vec<Goal>,
        tournaments: Vec<Tournament>,
        teams: Vec<TournamentTeam>,
    ) -> Self {
        let player_index = index_by(&players, |p| p.id);
        let location_index = index_by(&locations, |l| l.id);
        let game_index = index_by(&games, |g| g.id);
        let tournament_index = index_by(&tournaments, |t| t.id);
        Self {
            players,
            locations,
            schedules,
            games,
            goals,
            tournaments,
            teams,
            player_index,
            location_index,
            game_index,
            tournament_index,
        }
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn schedules(&self) -> &[Schedule] {
        &self.schedules
    }

    pub fn games(&self) -> &[Game] {
        &self.games
    }

    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    pub fn tournaments(&self) -> &[Tournament] {
        &self.tournaments
    }

    pub fn teams(&self) -> &[TournamentTeam] {
        &self.teams
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.player_index.get(&id).map(|&i| &self.players[i])
    }

    pub fn location(&self, id: LocationId) -> Option<&Location> {
        self.location_index.get(&id).map(|&i| &self.locations[i])
    }

    pub fn game(&self, id: GameId) -> Option<&Game> {
        self.game_index.get(&id).map(|&i| &self.games[i])
    }

    pub fn tournament(&self, id: TournamentId) -> Option<&Tournament> {
        self.tournament_index.get(&id).map(|&i| &self.tournaments[i])
    }

    /// Goals of one game, in fixture order.
    pub fn goals_for_game(&self, game_id: GameId) -> Vec<&Goal> {
        self.goals.iter().filter(|g| g.game_id == game_id).collect()
    }

    /// Bookings at one location, in fixture order.
    pub fn schedules_for_location(&self, location_id: LocationId) -> Vec<&Schedule> {
        self.schedules
            .iter()
            .filter(|s| s.location_id == location_id)
            .collect()
    }

    /// Teams registered for one tournament, in fixture order.
    pub fn teams_for_tournament(&self, tournament_id: TournamentId) -> Vec<&TournamentTeam> {
        self.teams
            .iter()
            .filter(|t| t.tournament_id == tournament_id)
            .collect()
    }

    /// Games carrying this tournament's context, in fixture order.
    pub fn games_for_tournament(&self, tournament_id: TournamentId) -> Vec<&Game> {
        self.games
            .iter()
            .filter(|g| {
                g.tournament
                    .as_ref()
                    .is_some_and(|t| t.tournament_id == tournament_id)
            })
            .collect()
    }

    /// Games where the player occupies any of the four slots, in fixture order.
    pub fn games_for_player(&self, player_id: PlayerId) -> Vec<&Game> {
        self.games
            .iter()
            .filter(|g| g.involves(player_id))
            .collect()
    }
}

fn index_by<T, K, F>(items: &[T], key: F) -> HashMap<K, usize>
where
    K: std::hash::Hash + Eq,
    F: Fn(&T) -> K,
{
    let mut index = HashMap::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        // First record wins on duplicate ids.
        index.entry(key(item)).or_insert(i);
    }
    index
}

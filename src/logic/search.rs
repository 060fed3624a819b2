//! Text search: case-insensitive substring match over per-entity field sets.

use crate::models::{Game, LeagueStore, Location, Player, Tournament};

/// True when any field contains the lower-cased term. An empty term matches
/// everything.
fn any_field_matches(term_lower: &str, fields: &[&str]) -> bool {
    if term_lower.is_empty() {
        return true;
    }
    fields
        .iter()
        .any(|f| f.to_lowercase().contains(term_lower))
}

/// Players matching on name, nickname, or department.
pub fn search_players<'a>(players: &'a [Player], term: &str) -> Vec<&'a Player> {
    let term = term.to_lowercase();
    players
        .iter()
        .filter(|p| any_field_matches(&term, &[&p.name, &p.nickname, &p.department]))
        .collect()
}

/// Locations matching on name or description.
pub fn search_locations<'a>(locations: &'a [Location], term: &str) -> Vec<&'a Location> {
    let term = term.to_lowercase();
    locations
        .iter()
        .filter(|l| {
            any_field_matches(
                &term,
                &[l.name.as_str(), l.description.as_deref().unwrap_or("")],
            )
        })
        .collect()
}

/// Tournaments matching on name or description.
pub fn search_tournaments<'a>(tournaments: &'a [Tournament], term: &str) -> Vec<&'a Tournament> {
    let term = term.to_lowercase();
    tournaments
        .iter()
        .filter(|t| {
            any_field_matches(
                &term,
                &[t.name.as_str(), t.description.as_deref().unwrap_or("")],
            )
        })
        .collect()
}

/// Games matching on any of the four resolved player names or the tournament
/// name. Unresolvable player slots contribute nothing to the match.
pub fn search_games<'a>(store: &'a LeagueStore, term: &str) -> Vec<&'a Game> {
    let term = term.to_lowercase();
    store
        .games()
        .iter()
        .filter(|g| game_matches(store, g, &term))
        .collect()
}

fn game_matches(store: &LeagueStore, game: &Game, term_lower: &str) -> bool {
    if term_lower.is_empty() {
        return true;
    }
    let player_name = |id| store.player(id).map(|p| p.name.as_str()).unwrap_or("");
    let fields = [
        player_name(game.team_a_player1_id),
        game.team_a_player2_id.map(player_name).unwrap_or(""),
        player_name(game.team_b_player1_id),
        game.team_b_player2_id.map(player_name).unwrap_or(""),
        game.tournament
            .as_ref()
            .map(|t| t.tournament_name.as_str())
            .unwrap_or(""),
    ];
    any_field_matches(term_lower, &fields)
}

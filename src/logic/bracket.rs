//! Bracket view: round grouping and round labels.

use crate::models::Game;
use serde::Serialize;
use std::collections::BTreeMap;

/// One stage of a tournament bracket: the literal round number, its display
/// label, and the round's games ordered by match order.
#[derive(Clone, Debug, Serialize)]
pub struct BracketRound<'a> {
    pub round: u32,
    pub label: String,
    pub games: Vec<&'a Game>,
}

/// Group games by their literal round number, ascending. Games without a
/// round are silently excluded. Within a round, games are ordered by match
/// order (missing order sorts as 0; ties keep their incoming order).
pub fn bracket_rounds<'a>(games: &[&'a Game]) -> Vec<BracketRound<'a>> {
    let mut by_round: BTreeMap<u32, Vec<&Game>> = BTreeMap::new();
    for &game in games {
        if let Some(round) = game.tournament.as_ref().and_then(|t| t.round) {
            by_round.entry(round).or_default().push(game);
        }
    }
    by_round
        .into_iter()
        .map(|(round, mut games)| {
            games.sort_by_key(|g| {
                g.tournament
                    .as_ref()
                    .and_then(|t| t.match_order)
                    .unwrap_or(0)
            });
            BracketRound {
                round,
                label: round_label(round),
                games,
            }
        })
        .collect()
}

/// Label for a literal round number. Labels are never inferred from a
/// round's position in the bracket, so a tournament with unusual round
/// numbering falls back to "Round N" rather than mislabeling its final.
pub fn round_label(round: u32) -> String {
    match round {
        1 => "First Round".to_string(),
        2 => "Semi Finals".to_string(),
        3 => "Final".to_string(),
        n => format!("Round {n}"),
    }
}

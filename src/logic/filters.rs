//! Time-bucket classification, list filters, and sort comparators.

use crate::models::{Game, Player, Tournament};
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Where a game's timestamp falls relative to "now". The three buckets are
/// mutually exclusive and exhaustive; the current calendar date is always
/// `Today`, even for timestamps later this day.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeBucket {
    Today,
    Upcoming,
    Past,
}

/// Classify a timestamp against the caller-supplied clock.
pub fn time_bucket(datetime: DateTime<Utc>, now: DateTime<Utc>) -> TimeBucket {
    if datetime.date_naive() == now.date_naive() {
        TimeBucket::Today
    } else if datetime > now {
        TimeBucket::Upcoming
    } else {
        TimeBucket::Past
    }
}

/// Games list view selector.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameFilter {
    #[default]
    All,
    Today,
    Upcoming,
    Past,
}

/// Narrow to the selected bucket, then order by date: most recent first for
/// the past view, soonest first everywhere else. Ordering is stable.
pub fn filter_games<'a>(
    games: Vec<&'a Game>,
    filter: GameFilter,
    now: DateTime<Utc>,
) -> Vec<&'a Game> {
    let mut games: Vec<&Game> = games
        .into_iter()
        .filter(|g| match filter {
            GameFilter::All => true,
            GameFilter::Today => time_bucket(g.datetime, now) == TimeBucket::Today,
            GameFilter::Upcoming => time_bucket(g.datetime, now) == TimeBucket::Upcoming,
            GameFilter::Past => time_bucket(g.datetime, now) == TimeBucket::Past,
        })
        .collect();
    match filter {
        GameFilter::Past => games.sort_by(|a, b| b.datetime.cmp(&a.datetime)),
        _ => games.sort_by(|a, b| a.datetime.cmp(&b.datetime)),
    }
    games
}

/// Sort key for the players list.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerSortKey {
    #[default]
    Name,
    Skill,
    Wins,
    Games,
    Streak,
}

/// Stable sort, so equal keys keep their relative order and re-sorting
/// already-sorted data is a no-op. Name is case-insensitive ascending; the
/// numeric keys are descending (win streaks sort above loss streaks).
pub fn sort_players(players: &mut [&Player], key: PlayerSortKey) {
    match key {
        PlayerSortKey::Name => {
            players.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        }
        PlayerSortKey::Skill => players.sort_by(|a, b| b.skill_level.cmp(&a.skill_level)),
        PlayerSortKey::Wins => players.sort_by(|a, b| b.total_wins.cmp(&a.total_wins)),
        PlayerSortKey::Games => players.sort_by(|a, b| b.total_games.cmp(&a.total_games)),
        PlayerSortKey::Streak => players.sort_by(|a, b| b.current_streak.cmp(&a.current_streak)),
    }
}

/// Tournaments list tab.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TournamentTab {
    #[default]
    All,
    Active,
    Upcoming,
    Past,
}

/// Narrow tournaments to the selected tab. Active goes by the stored flag;
/// upcoming and past additionally require the flag to be clear, mirroring
/// the status precedence in `Tournament::status`.
pub fn filter_tournaments<'a>(
    tournaments: Vec<&'a Tournament>,
    tab: TournamentTab,
    now: DateTime<Utc>,
) -> Vec<&'a Tournament> {
    tournaments
        .into_iter()
        .filter(|t| match tab {
            TournamentTab::All => true,
            TournamentTab::Active => t.is_active,
            TournamentTab::Upcoming => !t.is_active && t.start_date > now,
            TournamentTab::Past => !t.is_active && t.end_date < now,
        })
        .collect()
}

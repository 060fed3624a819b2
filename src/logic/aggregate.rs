//! Aggregations: roster resolution, goal tallies, per-player outcomes,
//! profile stats, and the dashboard picks.

use crate::models::{Game, Goal, LeagueStore, Player, PlayerId, TeamSide, Tournament};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Both teams' resolved players plus the player of the match, if any.
/// Unresolvable slots are skipped, so a roster can come out shorter than
/// the game record implies.
#[derive(Clone, Debug, Serialize)]
pub struct GameRosters<'a> {
    pub team_a: Vec<&'a Player>,
    pub team_b: Vec<&'a Player>,
    pub player_of_match: Option<&'a Player>,
}

impl GameRosters<'_> {
    /// Which resolved roster the player is on, if either.
    pub fn side_of(&self, player_id: PlayerId) -> Option<TeamSide> {
        if self.team_a.iter().any(|p| p.id == player_id) {
            Some(TeamSide::A)
        } else if self.team_b.iter().any(|p| p.id == player_id) {
            Some(TeamSide::B)
        } else {
            None
        }
    }
}

/// Resolve the four player slots and the player of the match against the
/// store.
pub fn rosters<'a>(store: &'a LeagueStore, game: &Game) -> GameRosters<'a> {
    let resolve = |id: Option<PlayerId>| id.and_then(|id| store.player(id));
    let team = |p1, p2| {
        [Some(p1), p2]
            .into_iter()
            .filter_map(resolve)
            .collect::<Vec<_>>()
    };
    GameRosters {
        team_a: team(game.team_a_player1_id, game.team_a_player2_id),
        team_b: team(game.team_b_player1_id, game.team_b_player2_id),
        player_of_match: resolve(game.player_of_match_id),
    }
}

/// Goals credited to one scorer on one side.
#[derive(Clone, Debug, Serialize)]
pub struct GoalTally<'a> {
    pub scorer: &'a Player,
    pub count: u32,
}

/// Partition a game's goals by the scorer's resolved roster and count them
/// per scorer, in first-seen order. Goals from scorers on neither roster are
/// dropped.
pub fn goal_tallies<'a>(
    store: &'a LeagueStore,
    game: &Game,
) -> (Vec<GoalTally<'a>>, Vec<GoalTally<'a>>) {
    let rosters = rosters(store, game);
    let mut team_a: Vec<GoalTally> = Vec::new();
    let mut team_b: Vec<GoalTally> = Vec::new();
    for goal in store.goals_for_game(game.id) {
        let side = match rosters.side_of(goal.scorer_id) {
            Some(TeamSide::A) => &mut team_a,
            Some(TeamSide::B) => &mut team_b,
            None => continue,
        };
        match side.iter_mut().find(|t| t.scorer.id == goal.scorer_id) {
            Some(tally) => tally.count += 1,
            None => {
                if let Some(scorer) = store.player(goal.scorer_id) {
                    side.push(GoalTally { scorer, count: 1 });
                }
            }
        }
    }
    (team_a, team_b)
}

/// A game's goals ordered by minute, ascending. Missing minutes sort as 0;
/// the sort is stable so equal minutes keep fixture order.
pub fn goal_timeline<'a>(store: &'a LeagueStore, game: &Game) -> Vec<&'a Goal> {
    let mut goals = store.goals_for_game(game.id);
    goals.sort_by_key(|g| g.minute.unwrap_or(0));
    goals
}

/// How a game went for one of its participants.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerOutcome {
    Won,
    Lost,
    Drew,
}

/// Winner determination relative to the player's side. `None` when the
/// player was not in the game.
pub fn outcome_for_player(game: &Game, player_id: PlayerId) -> Option<PlayerOutcome> {
    let side = game.side_of(player_id)?;
    let (own, other) = match side {
        TeamSide::A => (game.score_team_a, game.score_team_b),
        TeamSide::B => (game.score_team_b, game.score_team_a),
    };
    Some(if own > other {
        PlayerOutcome::Won
    } else if other > own {
        PlayerOutcome::Lost
    } else {
        PlayerOutcome::Drew
    })
}

/// Derived profile stats for one player. Rates are division-guarded; the MVP
/// count comes from the player's games rather than a stored total.
#[derive(Clone, Debug, Serialize)]
pub struct PlayerProfileStats {
    pub total_games: u32,
    pub total_wins: u32,
    pub total_goals: u32,
    pub win_rate: u32,
    pub goals_per_game: f64,
    pub mvp_count: u32,
}

pub fn player_profile_stats(player: &Player, games: &[&Game]) -> PlayerProfileStats {
    let mvp_count = games
        .iter()
        .filter(|g| g.player_of_match_id == Some(player.id))
        .count() as u32;
    PlayerProfileStats {
        total_games: player.total_games,
        total_wins: player.total_wins,
        total_goals: player.total_goals,
        win_rate: player.win_rate(),
        goals_per_game: player.goals_per_game(),
        mvp_count,
    }
}

/// Dashboard pick: best current streak, ties broken by win rate, then
/// fixture order.
pub fn player_of_the_week(players: &[Player]) -> Option<&Player> {
    players.iter().reduce(|best, p| {
        if (p.current_streak, p.win_rate()) > (best.current_streak, best.win_rate()) {
            p
        } else {
            best
        }
    })
}

/// Dashboard banner: the inactive tournament with the soonest future start,
/// falling back to the first tournament when none is ahead.
pub fn next_tournament(tournaments: &[Tournament], now: DateTime<Utc>) -> Option<&Tournament> {
    tournaments
        .iter()
        .filter(|t| !t.is_active && t.start_date > now)
        .min_by_key(|t| t.start_date)
        .or_else(|| tournaments.first())
}

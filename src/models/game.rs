//! Game, Goal, and team-side types for 2v2 / 1v1 games.

use crate::models::location::LocationId;
use crate::models::player::PlayerId;
use crate::models::tournament::TournamentId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a game.
pub type GameId = Uuid;

/// Unique identifier for a goal.
pub type GoalId = Uuid;

/// Which side of the table a team played on.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeamSide {
    A,
    B,
}

/// Three-way result of a game. A draw is not "team B won" - consumers must
/// handle it as its own case.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameOutcome {
    TeamA,
    TeamB,
    Draw,
}

/// Tournament context denormalized onto a bracket game. Present only for
/// games played as part of a tournament.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TournamentContext {
    pub tournament_id: TournamentId,
    pub tournament_name: String,
    /// Bracket stage, e.g. 1 = first round. Games without a round never
    /// appear in the bracket view.
    pub round: Option<u32>,
    pub team_a_name: Option<String>,
    pub team_b_name: Option<String>,
    pub winner: Option<TeamSide>,
    /// Position within the round; missing order sorts as 0.
    pub match_order: Option<u32>,
}

/// A single game: team A vs team B, 2v2 or 1v1 (second slots unset).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub id: GameId,
    pub location_id: Option<LocationId>,
    pub team_a_player1_id: PlayerId,
    pub team_a_player2_id: Option<PlayerId>,
    pub team_b_player1_id: PlayerId,
    pub team_b_player2_id: Option<PlayerId>,
    pub score_team_a: u32,
    pub score_team_b: u32,
    pub player_of_match_id: Option<PlayerId>,
    pub datetime: DateTime<Utc>,
    pub tournament: Option<TournamentContext>,
}

impl Game {
    /// Winner by strict score comparison; equal scores are a draw.
    pub fn outcome(&self) -> GameOutcome {
        if self.score_team_a > self.score_team_b {
            GameOutcome::TeamA
        } else if self.score_team_b > self.score_team_a {
            GameOutcome::TeamB
        } else {
            GameOutcome::Draw
        }
    }

    /// Which side the given player occupied, if any. Team A slots are checked
    /// first, matching roster resolution order.
    pub fn side_of(&self, player_id: PlayerId) -> Option<TeamSide> {
        if self.team_a_player1_id == player_id || self.team_a_player2_id == Some(player_id) {
            Some(TeamSide::A)
        } else if self.team_b_player1_id == player_id || self.team_b_player2_id == Some(player_id) {
            Some(TeamSide::B)
        } else {
            None
        }
    }

    /// True when the player occupies any of the four slots.
    pub fn involves(&self, player_id: PlayerId) -> bool {
        self.side_of(player_id).is_some()
    }
}

/// A goal scored during a game. Several goals may share a scorer and a minute.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub id: GoalId,
    pub game_id: GameId,
    pub scorer_id: PlayerId,
    pub minute: Option<u32>,
}

impl Goal {
    pub fn new(game_id: GameId, scorer_id: PlayerId, minute: Option<u32>) -> Self {
        Self {
            id: Uuid::new_v4(),
            game_id,
            scorer_id,
            minute,
        }
    }
}

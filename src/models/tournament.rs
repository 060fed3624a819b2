//! Tournament, TournamentTeam, and the derived tournament status.

use crate::models::player::PlayerId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

/// Unique identifier for a tournament team.
pub type TournamentTeamId = Uuid;

/// Derived lifecycle stage of a tournament. Never stored - recomputed from
/// the active flag and the dates on every read.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TournamentStatus {
    Upcoming,
    InProgress,
    Completed,
}

/// A tournament with a fixed team capacity and an organizer-controlled
/// active flag. The flag and the dates are independently settable.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
    pub description: Option<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub team_capacity: u32,
    pub is_active: bool,
}

impl Tournament {
    pub fn new(
        name: impl Into<String>,
        description: Option<String>,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
        team_capacity: u32,
        is_active: bool,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description,
            start_date,
            end_date,
            team_capacity,
            is_active,
        }
    }

    /// Resolve the three overlapping source conditions into one status.
    ///
    /// Precedence: an active flag always means `InProgress`; an inactive
    /// tournament whose start is still ahead is `Upcoming`; anything else
    /// (end elapsed, or inactive mid-window) is `Completed`. Dates never
    /// resurrect a tournament whose flag was cleared.
    pub fn status(&self, now: DateTime<Utc>) -> TournamentStatus {
        if self.is_active {
            TournamentStatus::InProgress
        } else if self.start_date > now {
            TournamentStatus::Upcoming
        } else {
            TournamentStatus::Completed
        }
    }
}

/// A registered team. The second player slot may stay unfilled indefinitely;
/// nothing prevents a player from appearing on several teams.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TournamentTeam {
    pub id: TournamentTeamId,
    pub tournament_id: TournamentId,
    pub name: String,
    pub player1_id: Option<PlayerId>,
    pub player2_id: Option<PlayerId>,
}

impl TournamentTeam {
    pub fn new(
        tournament_id: TournamentId,
        name: impl Into<String>,
        player1_id: Option<PlayerId>,
        player2_id: Option<PlayerId>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            tournament_id,
            name: name.into(),
            player1_id,
            player2_id,
        }
    }
}

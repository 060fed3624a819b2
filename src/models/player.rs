//! Player data structure and per-player derived stats.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a player (used in games, goals, teams, and lookups).
pub type PlayerId = Uuid;

/// A league player. Lifetime totals and streaks are stored on the record;
/// rates are derived on demand.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub nickname: String,
    pub department: String,
    /// 1 (beginner) to 5 (expert).
    pub skill_level: u8,
    pub preferred_partner_id: Option<PlayerId>,
    /// Positive = win streak, negative = loss streak, zero = no streak.
    /// The sign encodes the most recent result, the magnitude its length.
    pub current_streak: i32,
    pub best_win_streak: u32,
    pub worst_loss_streak: u32,
    pub total_games: u32,
    pub total_wins: u32,
    pub total_goals: u32,
    pub created_at: DateTime<Utc>,
}

impl Player {
    /// Create a player with zeroed stats and no preferred partner.
    pub fn new(
        name: impl Into<String>,
        nickname: impl Into<String>,
        department: impl Into<String>,
        skill_level: u8,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            nickname: nickname.into(),
            department: department.into(),
            skill_level,
            preferred_partner_id: None,
            current_streak: 0,
            best_win_streak: 0,
            worst_loss_streak: 0,
            total_games: 0,
            total_wins: 0,
            total_goals: 0,
            created_at,
        }
    }

    /// Win percentage rounded to a whole number. Zero games is 0%, never a
    /// division error.
    pub fn win_rate(&self) -> u32 {
        if self.total_games == 0 {
            return 0;
        }
        ((self.total_wins as f64 / self.total_games as f64) * 100.0).round() as u32
    }

    /// Average goals per game, 0.0 when no games have been played.
    pub fn goals_per_game(&self) -> f64 {
        if self.total_games == 0 {
            return 0.0;
        }
        self.total_goals as f64 / self.total_games as f64
    }
}

//! Location and Schedule data structures.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a location.
pub type LocationId = Uuid;

/// Unique identifier for a schedule entry.
pub type ScheduleId = Uuid;

/// A place with a table: an office floor, a break room, etc.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: LocationId,
    pub name: String,
    pub description: Option<String>,
}

impl Location {
    pub fn new(name: impl Into<String>, description: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description,
        }
    }
}

/// A table booking at a location. `start_time < end_time` is expected but
/// not validated.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    pub id: ScheduleId,
    pub location_id: LocationId,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

impl Schedule {
    pub fn new(
        location_id: LocationId,
        date: NaiveDate,
        start_time: NaiveTime,
        end_time: NaiveTime,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            location_id,
            date,
            start_time,
            end_time,
        }
    }
}

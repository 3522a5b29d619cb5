use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::time::TimeRange;

pub type UserId = i64;

/// A stored availability slot.
/// Either end may be missing, such a slot takes no part in an overlap.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    pub id: i64,
    pub user_id: UserId,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Slot {
    /// The slot as a range, if both ends are known
    pub fn time_range(&self) -> Option<TimeRange<DateTime<Utc>>> {
        Some(TimeRange(self.start_time?, self.end_time?))
    }
}

/// Body of a create slot request
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct NewSlot {
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
}

impl NewSlot {
    pub fn new(start_time: Option<DateTime<Utc>>, end_time: Option<DateTime<Utc>>) -> Self {
        NewSlot {
            start_time,
            end_time,
        }
    }

    /// A slot may leave either end open, but a complete one must not end
    /// before it starts.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let (Some(start), Some(end)) = (self.start_time, self.end_time) {
            TimeRange::checked(start, end)?;
        }

        Ok(())
    }
}

#[derive(Serialize, Error, Debug, Eq, PartialEq)]
pub enum ValidationError {
    #[error("Unsupported number of users. Expected {expected}, got {found}")]
    UserCount { expected: usize, found: usize },
    #[error("Invalid TimeRange. {start} is after {end}")]
    InvalidTimeRange { start: String, end: String },
}

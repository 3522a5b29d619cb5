use crate::data::{Slot, UserId};
use crate::overlap::{compute_overlap, OverlapMode};
use crate::time::TimeRange;
use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct Participant {
    pub user_id: UserId,
    pub slots: Vec<Slot>,
}

impl Participant {
    /// Constructs a new Participant from the slots stored for `user_id`.
    pub fn new(user_id: UserId, slots: Vec<Slot>) -> Participant {
        Participant { user_id, slots }
    }

    /// The slots of this participant which can take part in an overlap.
    /// Slots missing a start or an end are left out, everything else is
    /// kept in stored order.
    pub fn availability(&self) -> Vec<TimeRange<DateTime<Utc>>> {
        self.slots
            .iter()
            .filter_map(|slot| {
                let range = slot.time_range();
                if range.is_none() {
                    debug!(
                        "Skipping slot {} of user {}, start or end is missing",
                        slot.id, self.user_id
                    );
                }
                range
            })
            .collect()
    }

    /// Time this participant shares with `other`.
    /// `self` is the outer set, so under containment it is `other`'s slots
    /// that are reported.
    pub fn overlap_with(
        &self,
        other: &Participant,
        mode: OverlapMode,
    ) -> Vec<TimeRange<DateTime<Utc>>> {
        compute_overlap(&self.availability(), &other.availability(), mode)
    }
}

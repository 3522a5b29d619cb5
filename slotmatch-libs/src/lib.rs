pub mod data;
pub mod input;
pub mod overlap;
pub mod participant;
pub mod time;

pub use data::{NewSlot, Slot, UserId, ValidationError};
pub use input::{AvailableSlot, OverlapRequest, OverlapResponse, ResponseFormat, UserPair};
pub use overlap::{compute_overlap, Overlap, OverlapMode};
pub use participant::Participant;
pub use time::TimeRange;

#[cfg(feature = "rayon")]
pub use overlap::par_compute_overlap;

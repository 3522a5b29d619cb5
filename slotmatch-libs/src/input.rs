use chrono::{DateTime, Utc};
use core::fmt::Display;
use serde::{Deserialize, Serialize};

use crate::data::{UserId, ValidationError};
use crate::overlap::OverlapMode;
use crate::time::TimeRange;

/// Body of an overlap request.
/// `mode` falls back to the server default when left out.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlapRequest {
    pub user_ids: Vec<UserId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<OverlapMode>,
}

impl OverlapRequest {
    pub fn new(user_ids: Vec<UserId>) -> Self {
        OverlapRequest {
            user_ids,
            mode: None,
        }
    }

    pub fn with_mode(mut self, mode: OverlapMode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// The two users to compare. Any other number of ids is refused.
    ///
    /// # Examples
    /// ```
    /// use slotmatch_libs::input::OverlapRequest;
    ///
    /// let pair = OverlapRequest::new(vec![4, 2]).user_pair().unwrap();
    /// assert_eq!((pair.first, pair.second), (4, 2));
    ///
    /// assert!(OverlapRequest::new(vec![4]).user_pair().is_err());
    /// assert!(OverlapRequest::new(vec![4, 2, 7]).user_pair().is_err());
    /// ```
    pub fn user_pair(&self) -> Result<UserPair, ValidationError> {
        match self.user_ids.as_slice() {
            &[first, second] => Ok(UserPair { first, second }),
            ids => Err(ValidationError::UserCount {
                expected: 2,
                found: ids.len(),
            }),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPair {
    pub first: UserId,
    pub second: UserId,
}

/// Wire shape of the windows in an [`OverlapResponse`]
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ResponseFormat {
    /// `"<start>to<end>"` labels
    #[default]
    Legacy,
    /// `{"start": "<RFC 3339>", "end": "<RFC 3339>"}` objects
    Structured,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum AvailableSlot {
    Label(String),
    Window {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct OverlapResponse {
    pub available_slots: Vec<AvailableSlot>,
}

impl OverlapResponse {
    pub fn render(windows: &[TimeRange<DateTime<Utc>>], format: ResponseFormat) -> Self {
        match format {
            ResponseFormat::Legacy => OverlapResponse::legacy(windows),
            ResponseFormat::Structured => OverlapResponse::structured(windows),
        }
    }

    pub fn legacy<N>(windows: &[TimeRange<N>]) -> Self
    where
        N: Ord + Copy + Display,
    {
        OverlapResponse {
            available_slots: windows
                .iter()
                .map(|&window| AvailableSlot::Label(label(window)))
                .collect(),
        }
    }

    pub fn structured(windows: &[TimeRange<DateTime<Utc>>]) -> Self {
        OverlapResponse {
            available_slots: windows
                .iter()
                .map(|window| AvailableSlot::Window {
                    start: window.start(),
                    end: window.end(),
                })
                .collect(),
        }
    }
}

/// # Examples
/// ```
/// use slotmatch_libs::input::label;
/// use slotmatch_libs::time::TimeRange;
///
/// assert_eq!(label(TimeRange::new(12, 18)), "12to18");
/// ```
pub fn label<N>(window: TimeRange<N>) -> String
where
    N: Ord + Copy + Display,
{
    format!("{}to{}", window.start(), window.end())
}

use serde::{Deserialize, Serialize};

use crate::data::ValidationError;

/// Closed [start, end] time range
/// <N>: Anything with a total order, e.g. an integer or a `DateTime<Utc>`
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Deserialize, Serialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct TimeRange<N>(pub N, pub N)
where
    N: Ord + Copy;

impl<N> TimeRange<N>
where
    N: Ord + Copy,
{
    /// Construct a new Time Range
    /// Range is inclusive on [start, end]. No ordering is enforced here,
    /// use [`TimeRange::checked`] where the input is untrusted.
    /// # Examples
    /// ```
    /// use slotmatch_libs::time::TimeRange;
    ///
    /// let test = TimeRange::new(0, 100);
    ///
    /// assert_eq!(test.0, 0);
    /// assert_eq!(test.1, 100);
    /// ```
    pub fn new(start: N, end: N) -> TimeRange<N> {
        TimeRange(start, end)
    }

    /// Construct a Time Range, refusing one that ends before it starts
    ///
    /// # Examples
    /// ```
    /// use slotmatch_libs::time::TimeRange;
    ///
    /// assert!(TimeRange::checked(1, 2).is_ok());
    /// assert!(TimeRange::checked(2, 2).is_ok());
    /// assert!(TimeRange::checked(3, 2).is_err());
    /// ```
    pub fn checked(start: N, end: N) -> Result<TimeRange<N>, ValidationError>
    where
        N: std::fmt::Display,
    {
        if start > end {
            Err(ValidationError::InvalidTimeRange {
                start: start.to_string(),
                end: end.to_string(),
            })
        } else {
            Ok(TimeRange(start, end))
        }
    }

    /// Convenience function for readability
    /// Returns the start of the TimeRange
    ///
    /// # Examples
    /// ```
    /// use slotmatch_libs::time::TimeRange;
    ///
    /// let test = TimeRange::new(0, 100);
    /// assert_eq!(test.0, test.start());
    /// ```
    pub fn start(self) -> N {
        self.0
    }

    /// Convenience function for readability
    /// Returns the end of the TimeRange
    ///
    /// # Examples
    /// ```
    /// use slotmatch_libs::time::TimeRange;
    ///
    /// let test = TimeRange::new(0, 100);
    /// assert_eq!(test.1, test.end());
    /// ```
    pub fn end(self) -> N {
        self.1
    }

    /// `start <= end`
    pub fn is_well_formed(self) -> bool {
        self.0 <= self.1
    }

    /// True when `other` lies entirely within `self`.
    ///
    /// `other` must also end strictly after `self` starts, so a zero width
    /// range sitting on `self.start()` is not contained.
    ///
    /// # Examples
    /// ```
    /// use slotmatch_libs::time::TimeRange;
    ///
    /// let outer = TimeRange::new(10, 20);
    ///
    /// assert!(outer.contains(&TimeRange::new(12, 18)));
    /// assert!(outer.contains(&TimeRange::new(10, 20)));
    /// assert!(!outer.contains(&TimeRange::new(5, 25)));
    /// assert!(!outer.contains(&TimeRange::new(10, 10)));
    /// ```
    pub fn contains(&self, other: &TimeRange<N>) -> bool {
        other.start() >= self.start()
            && other.end() > self.start()
            && other.start() <= self.end()
            && other.end() <= self.end()
    }

    /// The window shared by both ranges.
    /// Ranges which only touch (`a.end == b.start`) share nothing.
    ///
    /// # Examples
    /// ```
    /// use slotmatch_libs::time::TimeRange;
    ///
    /// let a = TimeRange::new(10, 20);
    ///
    /// assert_eq!(a.intersection(&TimeRange::new(5, 25)), Some(TimeRange::new(10, 20)));
    /// assert_eq!(a.intersection(&TimeRange::new(15, 30)), Some(TimeRange::new(15, 20)));
    /// assert_eq!(a.intersection(&TimeRange::new(20, 30)), None);
    /// assert_eq!(a.intersection(&TimeRange::new(21, 30)), None);
    /// ```
    pub fn intersection(&self, other: &TimeRange<N>) -> Option<TimeRange<N>> {
        let start = self.start().max(other.start());
        let end = self.end().min(other.end());

        if start < end {
            Some(TimeRange(start, end))
        } else {
            None
        }
    }
}

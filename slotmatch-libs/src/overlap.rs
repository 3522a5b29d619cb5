use crate::time::TimeRange;
use core::fmt::Debug;
use itertools::Itertools;
use log::{debug, trace};
use serde::{Deserialize, Serialize};

/// How a pair of slots is judged to be common to both users
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OverlapMode {
    /// A `b` slot matches when it sits entirely inside an `a` slot.
    /// The `b` slot is reported unchanged.
    #[default]
    Containment,
    /// Any pair sharing a non empty window matches, and the shared window
    /// is reported.
    Intersection,
}

impl OverlapMode {
    /// Judge a single `(a, b)` pair.
    /// Malformed ranges (`start > end`) on either side never match.
    ///
    /// # Examples
    /// ```
    /// use slotmatch_libs::overlap::OverlapMode;
    /// use slotmatch_libs::time::TimeRange;
    ///
    /// let a = TimeRange::new(10, 20);
    /// let b = TimeRange::new(5, 25);
    ///
    /// assert_eq!(OverlapMode::Containment.matches(&a, &b), None);
    /// assert_eq!(OverlapMode::Intersection.matches(&a, &b), Some(a));
    /// assert_eq!(OverlapMode::Intersection.matches(&a, &TimeRange::new(20, 10)), None);
    /// ```
    pub fn matches<N>(self, a: &TimeRange<N>, b: &TimeRange<N>) -> Option<TimeRange<N>>
    where
        N: Ord + Copy,
    {
        if !a.is_well_formed() || !b.is_well_formed() {
            return None;
        }

        match self {
            OverlapMode::Containment if a.contains(b) => Some(*b),
            OverlapMode::Containment => None,
            OverlapMode::Intersection => a.intersection(b),
        }
    }
}

pub trait Overlap<N>
where
    N: Ord + Copy,
{
    fn overlap(self, other: &[TimeRange<N>], mode: OverlapMode) -> Vec<TimeRange<N>>;
}

impl<'a, T, N> Overlap<N> for T
where
    T: Iterator<Item = &'a TimeRange<N>>,
    N: 'a + Ord + Copy + Debug,
{
    /// Self is one user's slots, `other` the second user's.
    /// Every pair is checked, outer over self and inner over `other`, and
    /// matches come back in that order. Nothing is sorted or deduplicated.
    ///
    /// # Examples
    ///
    /// ```
    /// use slotmatch_libs::overlap::{Overlap, OverlapMode};
    /// use slotmatch_libs::time::TimeRange;
    ///
    /// let a = vec![TimeRange::new(0, 10), TimeRange::new(20, 30)];
    /// let b = vec![TimeRange::new(5, 8), TimeRange::new(25, 28)];
    ///
    /// assert_eq!(
    ///     a.iter().overlap(&b, OverlapMode::Containment),
    ///     vec![TimeRange::new(5, 8), TimeRange::new(25, 28)]
    /// );
    /// ```
    fn overlap(self, other: &[TimeRange<N>], mode: OverlapMode) -> Vec<TimeRange<N>> {
        self.cartesian_product(other.iter())
            .filter_map(|(a, b)| {
                let common = mode.matches(a, b);
                if let Some(window) = common {
                    trace!("{:?} and {:?} share {:?}", a, b, window);
                }
                common
            })
            .collect_vec()
    }
}

/// Find the slots common to `a` and `b`.
///
/// Total over any input: empty, unsorted, self overlapping or malformed
/// sets all produce a (possibly empty) result. At most `a.len() * b.len()`
/// windows are returned.
pub fn compute_overlap<N>(
    a: &[TimeRange<N>],
    b: &[TimeRange<N>],
    mode: OverlapMode,
) -> Vec<TimeRange<N>>
where
    N: Ord + Copy + Debug,
{
    let common = a.iter().overlap(b, mode);

    debug!(
        "{:?} overlap of {} x {} slots found {} windows",
        mode,
        a.len(),
        b.len(),
        common.len()
    );

    common
}

/// Same result, in the same order, as [`compute_overlap`] with the outer
/// set split across the rayon pool.
#[cfg(feature = "rayon")]
pub fn par_compute_overlap<N>(
    a: &[TimeRange<N>],
    b: &[TimeRange<N>],
    mode: OverlapMode,
) -> Vec<TimeRange<N>>
where
    N: Ord + Copy + Debug + Send + Sync,
{
    use rayon::prelude::*;

    let common: Vec<TimeRange<N>> = a
        .par_iter()
        .flat_map_iter(move |ia| b.iter().filter_map(move |ib| mode.matches(ia, ib)))
        .collect();

    debug!(
        "{:?} parallel overlap of {} x {} slots found {} windows",
        mode,
        a.len(),
        b.len(),
        common.len()
    );

    common
}

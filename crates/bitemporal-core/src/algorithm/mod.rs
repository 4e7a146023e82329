// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Interval Collections
//!
//! Operations over collections of [`TemporalInterval`]s: sorting, reducing a
//! collection to the minimal set of intervals spanning the same points, and
//! lookups in such a reduced set.

use crate::math::bound::{BoundPosition::End, TemporalBound, compare_bounds};
use crate::math::interval::TemporalInterval;

/// Sorts intervals in place, by start bound and then by end bound.
///
/// Only the order of the slice changes; the intervals themselves are not
/// modified.
#[inline]
pub fn sort_intervals<T>(intervals: &mut [TemporalInterval<T>])
where
    T: Ord,
{
    intervals.sort_unstable_by(TemporalInterval::compare_with_interval);
}

/// Returns the minimal list of intervals spanning exactly the points spanned
/// by `intervals`.
///
/// The result is sorted by start bound and no two of its intervals overlap or
/// are adjacent. The space it spans is not necessarily contiguous.
///
/// ```text
///  Interval A  | [--]          | (--]          | [--]
///  Interval B  |      [-]      |      [-)      |      [-)
///  Interval C  |  [--]         |  [--]         |  [---]
///  Interval D  |           [-] |           [-] |        [----]
///  Union       | [------]  [-] | (------)  [-] | [-----------]
/// ```
///
/// # Examples
///
/// ```rust
/// # use bitemporal_core::algorithm::union_of_intervals;
/// # use bitemporal_core::math::interval::TemporalInterval;
///
/// let union = union_of_intervals([
///     TemporalInterval::closed(10, 12),
///     TemporalInterval::closed(0, 3),
///     TemporalInterval::closed(2, 5),
/// ]);
/// assert_eq!(
///     union,
///     vec![TemporalInterval::closed(0, 5), TemporalInterval::closed(10, 12)]
/// );
/// ```
pub fn union_of_intervals<T, I>(intervals: I) -> Vec<TemporalInterval<T>>
where
    T: Ord + Clone,
    I: IntoIterator<Item = TemporalInterval<T>>,
{
    let mut intervals: Vec<TemporalInterval<T>> = intervals.into_iter().collect();
    sort_intervals(&mut intervals);

    let num_intervals = intervals.len();
    let mut union: Vec<TemporalInterval<T>> = Vec::with_capacity(num_intervals);
    for interval in intervals {
        // Sorted by start, so anything the current interval could merge with
        // has already been merged into the last element.
        match union.pop() {
            None => union.push(interval),
            Some(last) => union.extend(last.union_with_interval(&interval)),
        }
    }

    tracing::trace!(
        input = num_intervals,
        output = union.len(),
        "computed union of intervals"
    );
    union
}

/// Checks whether the intervals are sorted by start and pairwise neither
/// overlap nor touch, i.e. whether they are a valid result of
/// [`union_of_intervals`].
#[inline]
pub fn are_disjoint_and_sorted<T>(intervals: &[TemporalInterval<T>]) -> bool
where
    T: Ord,
{
    intervals.windows(2).all(|w| {
        w[0].is_strictly_before_interval(&w[1]) && !w[0].is_adjacent_to_interval(&w[1])
    })
}

/// Returns the index of the interval containing `timestamp`.
///
/// # Panics
///
/// In debug builds, this function will panic if `intervals` is not disjoint
/// and sorted.
///
/// # Invariants
///
/// - `intervals` must satisfy [`are_disjoint_and_sorted`].
///
/// # Examples
///
/// ```rust
/// # use bitemporal_core::algorithm::find_containing;
/// # use bitemporal_core::math::interval::TemporalInterval;
///
/// let intervals = [TemporalInterval::closed(0, 5), TemporalInterval::closed(10, 12)];
/// assert_eq!(find_containing(&intervals, &11), Some(1));
/// assert_eq!(find_containing(&intervals, &7), None);
/// ```
pub fn find_containing<T>(intervals: &[TemporalInterval<T>], timestamp: &T) -> Option<usize>
where
    T: Ord + Clone,
{
    debug_assert!(
        are_disjoint_and_sorted(intervals),
        "called `find_containing` with intervals that are not disjoint and sorted"
    );

    let bound = TemporalBound::Inclusive(timestamp.clone());
    let index = intervals.partition_point(|interval| {
        compare_bounds(interval.end(), &bound, End, End).is_lt()
    });
    intervals
        .get(index)
        .filter(|interval| interval.contains_timestamp(timestamp))
        .map(|_| index)
}

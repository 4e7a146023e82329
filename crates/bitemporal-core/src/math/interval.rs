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

use crate::math::bound::{
    BoundPosition::{End, Start},
    TemporalBound, bound_is_adjacent_to_bound, compare_bounds,
};
use crate::time::Timestamp;
use smallvec::{SmallVec, smallvec};
use std::{
    cmp::Ordering,
    fmt,
    ops::{BitAnd, BitOr, Bound, RangeBounds},
};

/// A span of time between a start and an end [`TemporalBound`].
///
/// Intervals are immutable values: every operation returns a new interval
/// (or a selection of the bounds of its operands) instead of mutating them.
///
/// # Invariants
///
/// When both bounds are limited, the start limit must not be greater than the
/// end limit, and if the limits are equal at least one bound must be
/// inclusive. The invariant is not checked by [`TemporalInterval::new`]; the
/// operations of this type assume it holds and their results are unspecified
/// otherwise. Use [`TemporalInterval::try_new`] to validate at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct TemporalInterval<T = Timestamp> {
    start: TemporalBound<T>,
    end: TemporalBound<T>,
}

/// Errors produced by [`TemporalInterval::try_new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum IntervalError {
    #[error("invalid interval: start limit is greater than end limit")]
    StartAfterEnd,
    #[error("invalid interval: both bounds exclude the shared limit")]
    Empty,
}

impl<T> TemporalInterval<T> {
    /// Creates a new interval without validating it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bitemporal_core::math::{bound::TemporalBound, interval::TemporalInterval};
    ///
    /// let iv = TemporalInterval::new(TemporalBound::Inclusive(0), TemporalBound::Exclusive(10));
    /// assert_eq!(iv.to_string(), "[0, 10)");
    /// ```
    #[inline]
    pub const fn new(start: TemporalBound<T>, end: TemporalBound<T>) -> Self {
        Self { start, end }
    }

    /// Creates the interval spanning the whole axis, `(-∞, +∞)`.
    #[inline]
    pub const fn unbounded() -> Self {
        Self::new(TemporalBound::Unbounded, TemporalBound::Unbounded)
    }

    /// Creates the closed interval `[start, end]`.
    #[inline]
    pub const fn closed(start: T, end: T) -> Self {
        Self::new(
            TemporalBound::Inclusive(start),
            TemporalBound::Inclusive(end),
        )
    }

    /// Creates the interval `[start, +∞)`.
    #[inline]
    pub const fn left_closed(start: T) -> Self {
        Self::new(TemporalBound::Inclusive(start), TemporalBound::Unbounded)
    }

    /// Returns the start bound.
    #[inline]
    pub const fn start(&self) -> &TemporalBound<T> {
        &self.start
    }

    /// Returns the end bound.
    #[inline]
    pub const fn end(&self) -> &TemporalBound<T> {
        &self.end
    }

    /// Consumes the interval and returns its `(start, end)` bounds.
    #[inline]
    pub fn into_bounds(self) -> (TemporalBound<T>, TemporalBound<T>) {
        (self.start, self.end)
    }
}

impl<T> TemporalInterval<T>
where
    T: Ord,
{
    /// Creates a new interval if its bounds satisfy the interval invariant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bitemporal_core::math::{bound::TemporalBound, interval::{IntervalError, TemporalInterval}};
    ///
    /// assert!(TemporalInterval::try_new(TemporalBound::Inclusive(0), TemporalBound::Exclusive(1)).is_ok());
    /// assert_eq!(
    ///     TemporalInterval::try_new(TemporalBound::Inclusive(2), TemporalBound::Inclusive(1)),
    ///     Err(IntervalError::StartAfterEnd)
    /// );
    /// assert_eq!(
    ///     TemporalInterval::try_new(TemporalBound::Exclusive(1), TemporalBound::Exclusive(1)),
    ///     Err(IntervalError::Empty)
    /// );
    /// ```
    pub fn try_new(start: TemporalBound<T>, end: TemporalBound<T>) -> Result<Self, IntervalError> {
        let interval = Self::new(start, end);
        interval.validate()?;
        Ok(interval)
    }

    /// Returns `true` if the interval satisfies the interval invariant.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    fn validate(&self) -> Result<(), IntervalError> {
        let (Some(start), Some(end)) = (self.start.limit(), self.end.limit()) else {
            return Ok(());
        };
        match start.cmp(end) {
            Ordering::Less => Ok(()),
            Ordering::Greater => Err(IntervalError::StartAfterEnd),
            Ordering::Equal if self.start.is_inclusive() || self.end.is_inclusive() => Ok(()),
            Ordering::Equal => Err(IntervalError::Empty),
        }
    }

    /// Orders intervals by their start bounds, then by their end bounds.
    ///
    /// This is the order used by [`sort_intervals`](crate::algorithm::sort_intervals)
    /// and by the [`Ord`] implementation.
    #[inline]
    pub fn compare_with_interval(&self, other: &Self) -> Ordering {
        compare_bounds(&self.start, &other.start, Start, Start)
            .then_with(|| compare_bounds(&self.end, &other.end, End, End))
    }

    /// Returns `true` if the intervals touch without overlapping and without a
    /// gap between them. The order of the operands is irrelevant.
    ///
    /// ```text
    ///  Interval A  | [---]     | [---)     | [---]     | [---)     | [-]
    ///  Interval B  |     (---] |     [---] |     [---] |     (---] |      [--]
    ///  Adjacent    |   true    |   true    |   false   |   false   |   false
    /// ```
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bitemporal_core::math::{bound::TemporalBound, interval::TemporalInterval};
    ///
    /// let a = TemporalInterval::new(TemporalBound::Inclusive(0), TemporalBound::Exclusive(5));
    /// let b = TemporalInterval::closed(5, 10);
    /// assert!(a.is_adjacent_to_interval(&b));
    /// assert!(b.is_adjacent_to_interval(&a));
    /// ```
    #[inline]
    pub fn is_adjacent_to_interval(&self, other: &Self) -> bool {
        bound_is_adjacent_to_bound(&self.end, &other.start)
            || bound_is_adjacent_to_bound(&other.end, &self.start)
    }

    /// Returns `true` if `other` lies completely within `self`.
    ///
    /// ```text
    ///  Interval A  |  [------] |   [----]  |   [----]  |   (----]  |   (----]  | [--]
    ///  Interval B  |    [--]   |   [---]   |   (---]   |   (---]   |   [---]   |   [---]
    ///  Contains    |   true    |   true    |   true    |   true    |   false   |   false
    /// ```
    #[inline]
    pub fn contains_interval(&self, other: &Self) -> bool {
        compare_bounds(&self.start, &other.start, Start, Start).is_le()
            && compare_bounds(&self.end, &other.end, End, End).is_ge()
    }

    /// Returns `true` if any point lies in both intervals.
    ///
    /// ```text
    ///  Interval A  |    [----] | [--]      | [--]      | [--]
    ///  Interval B  | [-----]   |    [--]   |    (--]   |       (--]
    ///  Overlaps    |   true    |   true    |   false   |   false
    /// ```
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bitemporal_core::math::interval::TemporalInterval;
    ///
    /// let a = TemporalInterval::closed(0, 5);
    /// assert!(a.overlaps_interval(&TemporalInterval::closed(5, 8)));
    /// assert!(!a.overlaps_interval(&TemporalInterval::closed(6, 8)));
    /// ```
    #[inline]
    pub fn overlaps_interval(&self, other: &Self) -> bool {
        Self::starts_within(self, other) || Self::starts_within(other, self)
    }

    /// `inner.start` lies within the span of `outer`.
    #[inline]
    fn starts_within(inner: &Self, outer: &Self) -> bool {
        compare_bounds(&inner.start, &outer.start, Start, Start).is_ge()
            && compare_bounds(&inner.start, &outer.end, Start, End).is_le()
    }

    /// Returns `true` if `self` ends before `other` starts, without touching it.
    #[inline]
    pub fn is_strictly_before_interval(&self, other: &Self) -> bool {
        compare_bounds(&self.end, &other.start, End, Start).is_lt()
    }

    /// Returns `true` if `self` starts after `other` ends, without touching it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bitemporal_core::math::interval::TemporalInterval;
    ///
    /// let open_ended = TemporalInterval::left_closed(10);
    /// assert!(open_ended.is_strictly_after_interval(&TemporalInterval::closed(0, 5)));
    /// assert!(!open_ended.is_strictly_after_interval(&TemporalInterval::closed(0, 10)));
    /// ```
    #[inline]
    pub fn is_strictly_after_interval(&self, other: &Self) -> bool {
        compare_bounds(&self.start, &other.end, Start, End).is_gt()
    }
}

impl<T> TemporalInterval<T>
where
    T: Ord + Clone,
{
    /// Creates the interval containing exactly the instant `timestamp`.
    ///
    /// Both bounds are inclusive; an exclusive bound on either side would leave
    /// the interval without any point.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bitemporal_core::math::{bound::TemporalBound, interval::TemporalInterval};
    ///
    /// let iv = TemporalInterval::from_timestamp(3);
    /// assert_eq!(iv.start(), &TemporalBound::Inclusive(3));
    /// assert_eq!(iv.end(), &TemporalBound::Inclusive(3));
    /// assert!(iv.contains_timestamp(&3));
    /// ```
    #[inline]
    pub fn from_timestamp(timestamp: T) -> Self {
        Self::closed(timestamp.clone(), timestamp)
    }

    /// Returns `true` if `timestamp` lies within the interval.
    ///
    /// ```text
    ///  Interval    |    [----] |   (--]    |  [--)     | [--]
    ///  Timestamp   |      .    |      .    |     .     |       .
    ///  Contains    |   true    |   true    |   false   |   false
    /// ```
    #[inline]
    pub fn contains_timestamp(&self, timestamp: &T) -> bool {
        let bound = TemporalBound::Inclusive(timestamp.clone());
        compare_bounds(&self.start, &bound, Start, Start).is_le()
            && compare_bounds(&self.end, &bound, End, End).is_ge()
    }

    /// Returns the span covered by both intervals, or `None` if they do not
    /// overlap.
    ///
    /// The bounds of the result are the later of the two start bounds and the
    /// earlier of the two end bounds, taken as they are from the operands.
    ///
    /// ```text
    ///  Interval A    |   [-----] | [-----]
    ///  Interval B    | [-----]   |   [-----]
    ///  Intersection  |   [---]   |   [---]
    /// ```
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bitemporal_core::math::interval::TemporalInterval;
    ///
    /// let a = TemporalInterval::closed(0, 10);
    /// let b = TemporalInterval::closed(5, 15);
    /// assert_eq!(a.intersect_with_interval(&b), Some(TemporalInterval::closed(5, 10)));
    /// assert_eq!(a.intersect_with_interval(&TemporalInterval::closed(11, 15)), None);
    /// ```
    pub fn intersect_with_interval(&self, other: &Self) -> Option<Self> {
        if !self.overlaps_interval(other) {
            return None;
        }

        let start = if compare_bounds(&self.start, &other.start, Start, Start).is_le() {
            &other.start
        } else {
            &self.start
        };
        let end = if compare_bounds(&self.end, &other.end, End, End).is_le() {
            &self.end
        } else {
            &other.end
        };
        Some(Self::new(start.clone(), end.clone()))
    }

    /// Returns the interval spanning from the earlier start to the later end.
    ///
    /// Unlike [`TemporalInterval::union_with_interval`], this does not check
    /// whether the intervals overlap or touch: a gap between them is covered
    /// by the result.
    ///
    /// ```text
    ///  Interval A  |    [-----]  |  [-----]    | [---]         |         [-----] | [---------]
    ///  Interval B  |  [-----]    |    [-----]  |         [---) | (-----]         |   [-----]
    ///  Merge       |  [-------]  |  [-------]  | [-----------) | (-------------] | [---------]
    /// ```
    pub fn merge_with_interval(&self, other: &Self) -> Self {
        let start = if compare_bounds(&self.start, &other.start, Start, Start).is_le() {
            &self.start
        } else {
            &other.start
        };
        let end = if compare_bounds(&self.end, &other.end, End, End).is_ge() {
            &self.end
        } else {
            &other.end
        };
        Self::new(start.clone(), end.clone())
    }

    /// Returns the non-overlapping, non-adjacent intervals spanning exactly the
    /// points of both operands.
    ///
    /// If the intervals overlap or are adjacent this is the single
    /// [merged](TemporalInterval::merge_with_interval) interval. Otherwise both
    /// intervals are returned, the one with the earlier start first; when the
    /// starts compare equal, `other` is returned first.
    ///
    /// ```text
    ///  Interval A  |    [-----]  |  [-----]    | [---]         |         [-----] | [---------]
    ///  Interval B  |  [-----]    |    [-----]  |         [---) | (-----]         |   [-----]
    ///  Union       |  [-------]  |  [-------]  | [---]   [---) | (-----] [-----] | [---------]
    /// ```
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bitemporal_core::math::interval::TemporalInterval;
    ///
    /// let a = TemporalInterval::closed(0, 4);
    /// let b = TemporalInterval::closed(8, 12);
    /// assert_eq!(b.union_with_interval(&a).as_slice(), &[a, b]);
    /// assert_eq!(
    ///     a.union_with_interval(&TemporalInterval::closed(3, 6)).as_slice(),
    ///     &[TemporalInterval::closed(0, 6)]
    /// );
    /// ```
    pub fn union_with_interval(&self, other: &Self) -> SmallVec<[Self; 2]> {
        if self.overlaps_interval(other) || self.is_adjacent_to_interval(other) {
            smallvec![self.merge_with_interval(other)]
        } else if compare_bounds(&self.start, &other.start, Start, Start).is_lt() {
            smallvec![self.clone(), other.clone()]
        } else {
            smallvec![other.clone(), self.clone()]
        }
    }
}

impl<T> PartialOrd for TemporalInterval<T>
where
    T: Ord,
{
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for TemporalInterval<T>
where
    T: Ord,
{
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare_with_interval(other)
    }
}

impl<T> BitAnd for TemporalInterval<T>
where
    T: Ord + Clone,
{
    type Output = Option<Self>;

    #[inline]
    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersect_with_interval(&rhs)
    }
}

impl<T> BitOr for TemporalInterval<T>
where
    T: Ord + Clone,
{
    type Output = SmallVec<[Self; 2]>;

    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        self.union_with_interval(&rhs)
    }
}

impl<T> Default for TemporalInterval<T> {
    #[inline]
    fn default() -> Self {
        Self::unbounded()
    }
}

impl<T> fmt::Display for TemporalInterval<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.start {
            TemporalBound::Unbounded => f.write_str("(-∞")?,
            TemporalBound::Inclusive(limit) => write!(f, "[{}", limit)?,
            TemporalBound::Exclusive(limit) => write!(f, "({}", limit)?,
        }
        f.write_str(", ")?;
        match &self.end {
            TemporalBound::Unbounded => f.write_str("+∞)"),
            TemporalBound::Inclusive(limit) => write!(f, "{}]", limit),
            TemporalBound::Exclusive(limit) => write!(f, "{})", limit),
        }
    }
}

impl<T> RangeBounds<T> for TemporalInterval<T> {
    fn start_bound(&self) -> Bound<&T> {
        Bound::from(&self.start)
    }

    fn end_bound(&self) -> Bound<&T> {
        Bound::from(&self.end)
    }
}

impl<T> From<(Bound<T>, Bound<T>)> for TemporalInterval<T> {
    #[inline]
    fn from((start, end): (Bound<T>, Bound<T>)) -> Self {
        Self::new(start.into(), end.into())
    }
}

impl<T> From<std::ops::RangeInclusive<T>> for TemporalInterval<T> {
    #[inline]
    fn from(range: std::ops::RangeInclusive<T>) -> Self {
        let (start, end) = range.into_inner();
        Self::closed(start, end)
    }
}

impl<T> From<std::ops::Range<T>> for TemporalInterval<T> {
    #[inline]
    fn from(range: std::ops::Range<T>) -> Self {
        Self::new(
            TemporalBound::Inclusive(range.start),
            TemporalBound::Exclusive(range.end),
        )
    }
}

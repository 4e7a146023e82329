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

//! # Temporal Bounds
//!
//! One edge of a [`TemporalInterval`](crate::math::interval::TemporalInterval).
//! A bound is either unbounded, or limited by a point that is included in or
//! excluded from the interval.
//!
//! Bounds have no order of their own: an unbounded *start* lies before every
//! limited bound while an unbounded *end* lies after every limited bound, and
//! an exclusive bound sits just after its limit when it starts an interval but
//! just before it when it ends one. [`compare_bounds`] therefore takes the
//! [`BoundPosition`] of both operands.
//!
//! ```rust
//! use bitemporal_core::math::bound::{compare_bounds, BoundPosition, TemporalBound};
//! use std::cmp::Ordering;
//!
//! let start = TemporalBound::Exclusive(5);
//! let end = TemporalBound::Inclusive(5);
//! assert_eq!(
//!     compare_bounds(&start, &end, BoundPosition::Start, BoundPosition::End),
//!     Ordering::Greater
//! );
//! ```

use crate::time::Timestamp;
use std::{cmp::Ordering, fmt, ops::Bound};

/// Which edge of an interval a bound describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub enum BoundPosition {
    Start,
    End,
}

/// A bound of a temporal interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "kind", content = "limit", rename_all = "camelCase")
)]
pub enum TemporalBound<T = Timestamp> {
    /// No limit in this direction.
    Unbounded,
    /// The limit is part of the interval.
    Inclusive(T),
    /// The limit is not part of the interval.
    Exclusive(T),
}

/// A bound that carries a limit, i.e. a [`TemporalBound`] that is not
/// [`TemporalBound::Unbounded`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "kind", content = "limit", rename_all = "camelCase")
)]
pub enum LimitedTemporalBound<T = Timestamp> {
    Inclusive(T),
    Exclusive(T),
}

/// Errors produced when narrowing a [`TemporalBound`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BoundError {
    #[error("expected a limited bound, found an unbounded one")]
    Unbounded,
}

/// Offset of a bound relative to its limit on the timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Offset {
    Before,
    At,
    After,
}

/// A bound projected onto the extended timeline. The variant order is the
/// timeline order, so the derived `Ord` is the bound order.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Point<'a, T> {
    NegativeInfinity,
    Limit(&'a T, Offset),
    PositiveInfinity,
}

impl<T> TemporalBound<T> {
    /// Returns the limit of the bound, or `None` if it is unbounded.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bitemporal_core::math::bound::TemporalBound;
    ///
    /// assert_eq!(TemporalBound::Exclusive(3).limit(), Some(&3));
    /// assert_eq!(TemporalBound::<i32>::Unbounded.limit(), None);
    /// ```
    #[inline]
    pub const fn limit(&self) -> Option<&T> {
        match self {
            Self::Unbounded => None,
            Self::Inclusive(limit) | Self::Exclusive(limit) => Some(limit),
        }
    }

    /// Returns `true` if the bound has no limit.
    #[inline]
    pub const fn is_unbounded(&self) -> bool {
        matches!(self, Self::Unbounded)
    }

    /// Returns `true` if the bound includes its limit.
    #[inline]
    pub const fn is_inclusive(&self) -> bool {
        matches!(self, Self::Inclusive(_))
    }

    /// Returns `true` if the bound excludes its limit.
    #[inline]
    pub const fn is_exclusive(&self) -> bool {
        matches!(self, Self::Exclusive(_))
    }

    #[inline]
    fn point(&self, position: BoundPosition) -> Point<'_, T> {
        match (self, position) {
            (Self::Unbounded, BoundPosition::Start) => Point::NegativeInfinity,
            (Self::Unbounded, BoundPosition::End) => Point::PositiveInfinity,
            (Self::Inclusive(limit), _) => Point::Limit(limit, Offset::At),
            (Self::Exclusive(limit), BoundPosition::Start) => Point::Limit(limit, Offset::After),
            (Self::Exclusive(limit), BoundPosition::End) => Point::Limit(limit, Offset::Before),
        }
    }
}

impl<T> LimitedTemporalBound<T> {
    /// Returns the limit of the bound.
    #[inline]
    pub const fn limit(&self) -> &T {
        match self {
            Self::Inclusive(limit) | Self::Exclusive(limit) => limit,
        }
    }

    /// Returns `true` if the bound includes its limit.
    #[inline]
    pub const fn is_inclusive(&self) -> bool {
        matches!(self, Self::Inclusive(_))
    }
}

impl<T> From<LimitedTemporalBound<T>> for TemporalBound<T> {
    #[inline]
    fn from(bound: LimitedTemporalBound<T>) -> Self {
        match bound {
            LimitedTemporalBound::Inclusive(limit) => Self::Inclusive(limit),
            LimitedTemporalBound::Exclusive(limit) => Self::Exclusive(limit),
        }
    }
}

impl<T> TryFrom<TemporalBound<T>> for LimitedTemporalBound<T> {
    type Error = BoundError;

    #[inline]
    fn try_from(bound: TemporalBound<T>) -> Result<Self, Self::Error> {
        match bound {
            TemporalBound::Unbounded => Err(BoundError::Unbounded),
            TemporalBound::Inclusive(limit) => Ok(Self::Inclusive(limit)),
            TemporalBound::Exclusive(limit) => Ok(Self::Exclusive(limit)),
        }
    }
}

impl<T> From<Bound<T>> for TemporalBound<T> {
    #[inline]
    fn from(bound: Bound<T>) -> Self {
        match bound {
            Bound::Unbounded => Self::Unbounded,
            Bound::Included(limit) => Self::Inclusive(limit),
            Bound::Excluded(limit) => Self::Exclusive(limit),
        }
    }
}

impl<T> From<TemporalBound<T>> for Bound<T> {
    #[inline]
    fn from(bound: TemporalBound<T>) -> Self {
        match bound {
            TemporalBound::Unbounded => Self::Unbounded,
            TemporalBound::Inclusive(limit) => Self::Included(limit),
            TemporalBound::Exclusive(limit) => Self::Excluded(limit),
        }
    }
}

impl<'a, T> From<&'a TemporalBound<T>> for Bound<&'a T> {
    #[inline]
    fn from(bound: &'a TemporalBound<T>) -> Self {
        match bound {
            TemporalBound::Unbounded => Self::Unbounded,
            TemporalBound::Inclusive(limit) => Self::Included(limit),
            TemporalBound::Exclusive(limit) => Self::Excluded(limit),
        }
    }
}

impl<T> fmt::Display for TemporalBound<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unbounded => f.write_str("unbounded"),
            Self::Inclusive(limit) => write!(f, "inclusive({})", limit),
            Self::Exclusive(limit) => write!(f, "exclusive({})", limit),
        }
    }
}

impl<T> fmt::Display for LimitedTemporalBound<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inclusive(limit) => write!(f, "inclusive({})", limit),
            Self::Exclusive(limit) => write!(f, "exclusive({})", limit),
        }
    }
}

/// Compares two bounds given the interval edge each of them describes.
///
/// Bounds are ordered by their position on the timeline:
///
/// - an unbounded start is less than everything except another unbounded
///   start, an unbounded end is greater than everything except another
///   unbounded end;
/// - limited bounds are ordered by limit first;
/// - at equal limits, an exclusive start lies after and an exclusive end lies
///   before the inclusive bound at that limit.
///
/// Returns [`Ordering::Equal`] only for bounds of the same kind with the same
/// limit (an inclusive start and an inclusive end at the same limit describe
/// the same point and compare equal).
///
/// # Examples
///
/// ```rust
/// # use bitemporal_core::math::bound::{compare_bounds, BoundPosition::*, TemporalBound};
/// # use std::cmp::Ordering;
///
/// let unbounded = TemporalBound::Unbounded;
/// let limited = TemporalBound::Inclusive(0);
/// assert_eq!(compare_bounds(&unbounded, &limited, Start, Start), Ordering::Less);
/// assert_eq!(compare_bounds(&unbounded, &limited, End, End), Ordering::Greater);
///
/// let exclusive = TemporalBound::Exclusive(0);
/// assert_eq!(compare_bounds(&exclusive, &limited, Start, Start), Ordering::Greater);
/// assert_eq!(compare_bounds(&exclusive, &limited, End, End), Ordering::Less);
/// ```
#[inline]
pub fn compare_bounds<T>(
    lhs: &TemporalBound<T>,
    rhs: &TemporalBound<T>,
    lhs_position: BoundPosition,
    rhs_position: BoundPosition,
) -> Ordering
where
    T: Ord,
{
    lhs.point(lhs_position).cmp(&rhs.point(rhs_position))
}

/// Returns `true` if an interval ending at `end` and an interval starting at
/// `start` touch without overlapping and without a gap between them.
///
/// That is the case when both bounds share a limit and exactly one of them is
/// exclusive. Two inclusive bounds at the same limit overlap at that point,
/// two exclusive bounds at the same limit leave that point uncovered.
///
/// ```text
///  Bound A   |  ----]    |  ----)    |  ----]    |  ----)
///  Bound B   |      (--- |      [--- |      [--- |      (---
///  Adjacent  |   true    |   true    |   false   |   false
/// ```
///
/// # Examples
///
/// ```rust
/// # use bitemporal_core::math::bound::{bound_is_adjacent_to_bound, TemporalBound};
///
/// assert!(bound_is_adjacent_to_bound(&TemporalBound::Inclusive(5), &TemporalBound::Exclusive(5)));
/// assert!(!bound_is_adjacent_to_bound(&TemporalBound::Inclusive(5), &TemporalBound::Inclusive(5)));
/// ```
#[inline]
pub fn bound_is_adjacent_to_bound<T>(end: &TemporalBound<T>, start: &TemporalBound<T>) -> bool
where
    T: Eq,
{
    match (end, start) {
        (TemporalBound::Inclusive(lhs), TemporalBound::Exclusive(rhs))
        | (TemporalBound::Exclusive(lhs), TemporalBound::Inclusive(rhs)) => lhs == rhs,
        _ => false,
    }
}

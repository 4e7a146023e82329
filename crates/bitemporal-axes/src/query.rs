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

//! # Resolved Query Axes
//!
//! A bitemporal query fixes one axis at a single instant (the *pinned* axis)
//! and asks for an interval on the other one (the *variable* axis). Editions
//! are projected onto the variable axis: an edition is visible if its
//! interval on the pinned axis contains the pinned instant, and it is visible
//! for the part of its variable-axis interval that lies within the query's.

use crate::axis::{BitemporalInterval, TemporalAxis};
use bitemporal_core::algorithm::union_of_intervals;
use bitemporal_core::math::interval::{IntervalError, TemporalInterval};
use bitemporal_core::time::Timestamp;

/// Errors produced while building or resolving query axes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AxesError {
    #[error("pinned and variable axis must differ, both are `{0}`")]
    SameAxis(TemporalAxis),
    #[error("variable axis interval is invalid: {0}")]
    InvalidInterval(#[from] IntervalError),
}

/// An axis fixed at a single instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct PinnedTemporalAxis<T = Timestamp> {
    axis: TemporalAxis,
    timestamp: T,
}

impl<T> PinnedTemporalAxis<T> {
    #[inline]
    pub const fn new(axis: TemporalAxis, timestamp: T) -> Self {
        Self { axis, timestamp }
    }

    #[inline]
    pub const fn axis(&self) -> TemporalAxis {
        self.axis
    }

    #[inline]
    pub const fn timestamp(&self) -> &T {
        &self.timestamp
    }
}

/// An axis queried over an interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct VariableTemporalAxis<T = Timestamp> {
    axis: TemporalAxis,
    interval: TemporalInterval<T>,
}

impl<T> VariableTemporalAxis<T> {
    #[inline]
    pub const fn new(axis: TemporalAxis, interval: TemporalInterval<T>) -> Self {
        Self { axis, interval }
    }

    #[inline]
    pub const fn axis(&self) -> TemporalAxis {
        self.axis
    }

    #[inline]
    pub const fn interval(&self) -> &TemporalInterval<T> {
        &self.interval
    }
}

/// The temporal axes of a resolved query: one pinned and one variable axis.
///
/// # Invariants
///
/// The pinned and the variable axis name different axes. Constructors check
/// this; deserialized values are trusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct QueryTemporalAxes<T = Timestamp> {
    pinned: PinnedTemporalAxis<T>,
    variable: VariableTemporalAxis<T>,
}

impl<T> QueryTemporalAxes<T> {
    /// Creates query axes from a pinned and a variable axis.
    ///
    /// Returns [`AxesError::SameAxis`] if both name the same axis.
    pub fn try_new(
        pinned: PinnedTemporalAxis<T>,
        variable: VariableTemporalAxis<T>,
    ) -> Result<Self, AxesError> {
        if pinned.axis == variable.axis {
            return Err(AxesError::SameAxis(pinned.axis));
        }
        Ok(Self { pinned, variable })
    }

    /// Queries decision time over `interval`, as known at `transaction_time`.
    #[inline]
    pub const fn decision_time(interval: TemporalInterval<T>, transaction_time: T) -> Self {
        Self {
            pinned: PinnedTemporalAxis::new(TemporalAxis::TransactionTime, transaction_time),
            variable: VariableTemporalAxis::new(TemporalAxis::DecisionTime, interval),
        }
    }

    /// Queries transaction time over `interval`, for the facts holding at
    /// `decision_time`.
    #[inline]
    pub const fn transaction_time(interval: TemporalInterval<T>, decision_time: T) -> Self {
        Self {
            pinned: PinnedTemporalAxis::new(TemporalAxis::DecisionTime, decision_time),
            variable: VariableTemporalAxis::new(TemporalAxis::TransactionTime, interval),
        }
    }

    #[inline]
    pub const fn pinned(&self) -> &PinnedTemporalAxis<T> {
        &self.pinned
    }

    #[inline]
    pub const fn variable(&self) -> &VariableTemporalAxis<T> {
        &self.variable
    }
}

impl<T> QueryTemporalAxes<T>
where
    T: Ord + Clone,
{
    /// Returns the part of the edition's variable-axis interval visible to
    /// this query, or `None` if the edition is not visible at all.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bitemporal_axes::axis::BitemporalInterval;
    /// # use bitemporal_axes::query::QueryTemporalAxes;
    /// # use bitemporal_core::math::interval::TemporalInterval;
    ///
    /// let query = QueryTemporalAxes::decision_time(TemporalInterval::closed(0, 10), 50);
    ///
    /// let recorded_before = BitemporalInterval::new(
    ///     TemporalInterval::closed(5, 20),
    ///     TemporalInterval::left_closed(40),
    /// );
    /// assert_eq!(query.project(&recorded_before), Some(TemporalInterval::closed(5, 10)));
    ///
    /// let recorded_after = BitemporalInterval::new(
    ///     TemporalInterval::closed(5, 20),
    ///     TemporalInterval::left_closed(60),
    /// );
    /// assert_eq!(query.project(&recorded_after), None);
    /// ```
    pub fn project(&self, edition: &BitemporalInterval<T>) -> Option<TemporalInterval<T>> {
        if !edition
            .on_axis(self.pinned.axis)
            .contains_timestamp(&self.pinned.timestamp)
        {
            tracing::trace!(
                pinned_axis = %self.pinned.axis,
                "edition is not valid at the pinned timestamp"
            );
            return None;
        }
        edition
            .on_axis(self.variable.axis)
            .intersect_with_interval(&self.variable.interval)
    }

    /// Projects every edition and returns the union of the visible parts.
    ///
    /// The result is sorted and no two of its intervals overlap or touch.
    pub fn flatten<'a, I>(&self, editions: I) -> Vec<TemporalInterval<T>>
    where
        I: IntoIterator<Item = &'a BitemporalInterval<T>>,
        T: 'a,
    {
        let projected: Vec<TemporalInterval<T>> = editions
            .into_iter()
            .filter_map(|edition| self.project(edition))
            .collect();
        tracing::trace!(
            variable_axis = %self.variable.axis,
            visible = projected.len(),
            "projected editions onto the variable axis"
        );
        union_of_intervals(projected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bitemporal_core::math::bound::TemporalBound::{Exclusive, Inclusive, Unbounded};

    type I = TemporalInterval<i32>;

    fn edition(decision_time: I, transaction_time: I) -> BitemporalInterval<i32> {
        BitemporalInterval::new(decision_time, transaction_time)
    }

    #[test]
    fn test_try_new_rejects_same_axis() {
        let pinned = PinnedTemporalAxis::new(TemporalAxis::DecisionTime, 0);
        let variable = VariableTemporalAxis::new(TemporalAxis::DecisionTime, I::unbounded());
        assert_eq!(
            QueryTemporalAxes::try_new(pinned, variable),
            Err(AxesError::SameAxis(TemporalAxis::DecisionTime))
        );

        let variable = VariableTemporalAxis::new(TemporalAxis::TransactionTime, I::unbounded());
        let axes = QueryTemporalAxes::try_new(pinned, variable).unwrap();
        assert_eq!(axes, QueryTemporalAxes::transaction_time(I::unbounded(), 0));
    }

    #[test]
    fn test_shortcuts() {
        let axes = QueryTemporalAxes::decision_time(I::closed(0, 1), 7);
        assert_eq!(axes.pinned().axis(), TemporalAxis::TransactionTime);
        assert_eq!(axes.pinned().timestamp(), &7);
        assert_eq!(axes.variable().axis(), TemporalAxis::DecisionTime);
        assert_eq!(axes.variable().interval(), &I::closed(0, 1));
    }

    #[test]
    fn test_project_on_transaction_time() {
        // Facts holding at decision time 5, as recorded over transaction time [10, 30)
        let axes = QueryTemporalAxes::transaction_time(
            TemporalInterval::new(Inclusive(10), Exclusive(30)),
            5,
        );

        let visible = edition(
            I::closed(0, 5),
            TemporalInterval::new(Inclusive(20), Unbounded),
        );
        assert_eq!(
            axes.project(&visible),
            Some(TemporalInterval::new(Inclusive(20), Exclusive(30)))
        );

        // Decision time ends just before the pinned instant
        let not_yet = edition(
            TemporalInterval::new(Inclusive(0), Exclusive(5)),
            I::unbounded(),
        );
        assert_eq!(axes.project(&not_yet), None);

        // Valid at the pinned instant but recorded outside the queried range
        let superseded = edition(
            I::unbounded(),
            TemporalInterval::new(Inclusive(0), Exclusive(10)),
        );
        assert_eq!(axes.project(&superseded), None);
    }

    #[test]
    fn test_flatten_merges_consecutive_editions() {
        let axes = QueryTemporalAxes::decision_time(I::unbounded(), 100);
        let editions = [
            // superseded by the second edition in transaction time
            edition(
                I::left_closed(0),
                TemporalInterval::new(Inclusive(0), Exclusive(50)),
            ),
            edition(
                TemporalInterval::new(Inclusive(0), Exclusive(20)),
                I::left_closed(50),
            ),
            edition(I::left_closed(20), I::left_closed(60)),
            // recorded after the pinned instant
            edition(I::closed(-10, -5), I::left_closed(200)),
            edition(I::closed(40, 45), I::left_closed(0)),
        ];

        assert_eq!(axes.flatten(&editions), vec![I::left_closed(0)]);
    }

    #[test]
    fn test_flatten_keeps_gaps() {
        let axes = QueryTemporalAxes::decision_time(I::closed(0, 100), 0);
        let editions = [
            edition(I::closed(10, 20), I::left_closed(0)),
            edition(I::closed(30, 40), I::left_closed(0)),
            edition(
                TemporalInterval::new(Exclusive(40), Inclusive(50)),
                I::left_closed(0),
            ),
            edition(I::closed(90, 120), I::left_closed(0)),
        ];

        assert_eq!(
            axes.flatten(editions.iter()),
            vec![I::closed(10, 20), I::closed(30, 50), I::closed(90, 100)]
        );
    }

    #[test]
    fn test_flatten_without_editions() {
        let axes = QueryTemporalAxes::decision_time(I::unbounded(), 0);
        assert!(axes.flatten(&[]).is_empty());
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            AxesError::SameAxis(TemporalAxis::TransactionTime).to_string(),
            "pinned and variable axis must differ, both are `transactionTime`"
        );
        assert_eq!(
            AxesError::from(IntervalError::StartAfterEnd).to_string(),
            "variable axis interval is invalid: invalid interval: start limit is greater than end limit"
        );
    }

    mod properties {
        use super::*;
        use bitemporal_core::algorithm::are_disjoint_and_sorted;
        use bitemporal_core::math::bound::TemporalBound;
        use proptest::collection::vec;
        use proptest::prelude::*;

        /// Strategy for generating well-formed intervals with limits in `0..100`.
        fn interval_strategy() -> impl Strategy<Value = I> {
            let limits = (0..100i32, 0..100i32);
            let flags = (any::<bool>(), any::<bool>(), any::<bool>());
            (limits, flags).prop_map(|((a, b), (start_inclusive, end_inclusive, open_ended))| {
                let (lo, hi) = (a.min(b), a.max(b));
                let start = if start_inclusive || lo == hi {
                    TemporalBound::Inclusive(lo)
                } else {
                    TemporalBound::Exclusive(lo)
                };
                let end = if open_ended {
                    TemporalBound::Unbounded
                } else if end_inclusive || lo == hi {
                    TemporalBound::Inclusive(hi)
                } else {
                    TemporalBound::Exclusive(hi)
                };
                TemporalInterval::new(start, end)
            })
        }

        fn edition_strategy() -> impl Strategy<Value = BitemporalInterval<i32>> {
            (interval_strategy(), interval_strategy())
                .prop_map(|(decision, transaction)| edition(decision, transaction))
        }

        proptest! {
            #[test]
            fn prop_projection_lies_within_query_and_edition(
                query_interval in interval_strategy(),
                pinned in 0..100i32,
                e in edition_strategy(),
            ) {
                let axes = QueryTemporalAxes::decision_time(query_interval, pinned);
                match axes.project(&e) {
                    Some(projected) => {
                        prop_assert!(e.transaction_time().contains_timestamp(&pinned));
                        prop_assert!(query_interval.contains_interval(&projected));
                        prop_assert!(e.decision_time().contains_interval(&projected));
                    }
                    None => prop_assert!(
                        !e.transaction_time().contains_timestamp(&pinned)
                            || !e.decision_time().overlaps_interval(&query_interval)
                    ),
                }
            }

            #[test]
            fn prop_flatten_is_disjoint_and_sorted(
                query_interval in interval_strategy(),
                pinned in 0..100i32,
                editions in vec(edition_strategy(), 0..16),
            ) {
                let axes = QueryTemporalAxes::transaction_time(query_interval, pinned);
                let flattened = axes.flatten(&editions);
                prop_assert!(are_disjoint_and_sorted(&flattened));
                for e in &editions {
                    if let Some(projected) = axes.project(e) {
                        prop_assert!(flattened.iter().any(|f| f.contains_interval(&projected)));
                    }
                }
            }
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_wire_shape() {
        use serde_json::json;

        let axes = QueryTemporalAxes::decision_time(I::left_closed(0), 9);
        let value = serde_json::to_value(axes).unwrap();
        assert_eq!(
            value,
            json!({
                "pinned": { "axis": "transactionTime", "timestamp": 9 },
                "variable": {
                    "axis": "decisionTime",
                    "interval": {
                        "start": { "kind": "inclusive", "limit": 0 },
                        "end": { "kind": "unbounded" }
                    }
                }
            })
        );
        let back: QueryTemporalAxes<i32> = serde_json::from_value(value).unwrap();
        assert_eq!(back, axes);
    }
}

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

//! Property-based tests for the interval algebra.
//!
//! Limits are drawn from even numbers only, so that checking every integer
//! in range also probes the points strictly between two limits.

use crate::algorithm::{are_disjoint_and_sorted, union_of_intervals};
use crate::math::bound::TemporalBound;
use crate::math::interval::TemporalInterval;
use proptest::collection::vec;
use proptest::prelude::*;

type I = TemporalInterval<i32>;

const MAX_STEP: i32 = 20;

/// Points probed when comparing the coverage of two interval sets.
fn probe_points() -> impl Iterator<Item = i32> {
    -2..=(2 * MAX_STEP + 2)
}

/// Strategy for generating a bound with the given limit.
fn bound_strategy(limit: i32) -> impl Strategy<Value = TemporalBound<i32>> {
    prop_oneof![
        1 => Just(TemporalBound::Unbounded),
        3 => Just(TemporalBound::Inclusive(limit)),
        3 => Just(TemporalBound::Exclusive(limit)),
    ]
}

/// Strategy for generating well-formed intervals: limits in order, and both
/// bounds inclusive when the limits coincide.
fn interval_strategy() -> impl Strategy<Value = I> {
    (0..MAX_STEP, 0..MAX_STEP)
        .prop_map(|(a, b)| (2 * a.min(b), 2 * a.max(b)))
        .prop_flat_map(|(lo, hi)| (bound_strategy(lo), bound_strategy(hi)))
        .prop_map(|bounds| match bounds {
            (
                TemporalBound::Inclusive(lo) | TemporalBound::Exclusive(lo),
                TemporalBound::Inclusive(hi) | TemporalBound::Exclusive(hi),
            ) if lo == hi => TemporalInterval::from_timestamp(lo),
            (start, end) => TemporalInterval::new(start, end),
        })
}

/// Strategy for generating any valid interval, including the degenerate
/// `[x, x)` and `(x, x]` shapes that cover no point.
fn valid_interval_strategy() -> impl Strategy<Value = I> {
    (0..MAX_STEP, 0..MAX_STEP)
        .prop_map(|(a, b)| (2 * a.min(b), 2 * a.max(b)))
        .prop_flat_map(|(lo, hi)| (bound_strategy(lo), bound_strategy(hi)))
        .prop_map(|(start, end)| TemporalInterval::new(start, end))
        .prop_filter("both bounds exclude the shared limit", I::is_valid)
}

fn covers(intervals: &[I], point: i32) -> bool {
    intervals.iter().any(|interval| interval.contains_timestamp(&point))
}

proptest! {
    #[test]
    fn prop_generated_intervals_are_valid(a in interval_strategy()) {
        prop_assert!(a.is_valid());
    }

    #[test]
    fn prop_interval_for_timestamp_contains_it(t in any::<i32>()) {
        prop_assert!(TemporalInterval::from_timestamp(t).contains_timestamp(&t));
    }

    #[test]
    fn prop_overlap_is_symmetric(a in interval_strategy(), b in interval_strategy()) {
        prop_assert_eq!(a.overlaps_interval(&b), b.overlaps_interval(&a));
    }

    #[test]
    fn prop_adjacency_is_symmetric(a in interval_strategy(), b in interval_strategy()) {
        prop_assert_eq!(a.is_adjacent_to_interval(&b), b.is_adjacent_to_interval(&a));
    }

    #[test]
    fn prop_overlap_matches_shared_point(a in interval_strategy(), b in interval_strategy()) {
        let shared = probe_points().any(|p| a.contains_timestamp(&p) && b.contains_timestamp(&p));
        prop_assert_eq!(a.overlaps_interval(&b), shared);
    }

    #[test]
    fn prop_separated_intervals_are_strictly_ordered(
        a in valid_interval_strategy(),
        b in valid_interval_strategy()
    ) {
        if !a.overlaps_interval(&b) && !a.is_adjacent_to_interval(&b) {
            prop_assert!(a.is_strictly_before_interval(&b) ^ a.is_strictly_after_interval(&b));
        }
    }

    #[test]
    fn prop_contains_is_reflexive(a in interval_strategy()) {
        prop_assert!(a.contains_interval(&a));
    }

    #[test]
    fn prop_merge_contains_both(a in interval_strategy(), b in interval_strategy()) {
        let merged = a.merge_with_interval(&b);
        prop_assert!(merged.contains_interval(&a));
        prop_assert!(merged.contains_interval(&b));
    }

    #[test]
    fn prop_intersection_is_contained_in_both(a in interval_strategy(), b in interval_strategy()) {
        match a.intersect_with_interval(&b) {
            Some(intersection) => {
                prop_assert!(a.contains_interval(&intersection));
                prop_assert!(b.contains_interval(&intersection));
                prop_assert_eq!(Some(intersection), b.intersect_with_interval(&a));
            }
            None => prop_assert!(!a.overlaps_interval(&b)),
        }
    }

    #[test]
    fn prop_union_with_interval_merges_iff_touching(
        a in valid_interval_strategy(),
        b in valid_interval_strategy()
    ) {
        let union = a.union_with_interval(&b);
        let touching = a.overlaps_interval(&b) || a.is_adjacent_to_interval(&b);
        prop_assert_eq!(union.len() == 1, touching);
        if !touching {
            prop_assert!(union[0].is_strictly_before_interval(&union[1]));
        }
    }

    #[test]
    fn prop_union_of_intervals_is_minimal_and_exact(
        intervals in vec(valid_interval_strategy(), 4..12)
    ) {
        let union = union_of_intervals(intervals.clone());

        prop_assert!(are_disjoint_and_sorted(&union));
        for interval in &intervals {
            prop_assert!(union.iter().any(|u| u.contains_interval(interval)));
        }
        for point in probe_points() {
            prop_assert_eq!(covers(&union, point), covers(&intervals, point), "point {}", point);
        }
    }

    #[test]
    fn prop_union_of_intervals_ignores_input_order(
        intervals in vec(valid_interval_strategy(), 4..12)
    ) {
        let mut reversed = intervals.clone();
        reversed.reverse();
        prop_assert_eq!(union_of_intervals(intervals), union_of_intervals(reversed));
    }

    #[test]
    fn prop_union_of_intervals_is_idempotent(
        intervals in vec(valid_interval_strategy(), 0..12)
    ) {
        let union = union_of_intervals(intervals);
        prop_assert_eq!(union_of_intervals(union.clone()), union);
    }
}

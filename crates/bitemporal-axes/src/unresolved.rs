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

//! # Unresolved Query Axes
//!
//! Query axes as a caller states them, with instants left open. Resolving
//! them against the current instant fills the gaps:
//!
//! - a missing pinned timestamp becomes `now`;
//! - a missing variable start becomes `inclusive(now)`;
//! - a missing variable end becomes `inclusive(now)`.

use crate::axis::TemporalAxis;
use crate::query::{AxesError, PinnedTemporalAxis, QueryTemporalAxes, VariableTemporalAxis};
use bitemporal_core::math::bound::{LimitedTemporalBound, TemporalBound};
use bitemporal_core::math::interval::TemporalInterval;
use bitemporal_core::time::Timestamp;

/// A pinned axis whose instant may be left to resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct PinnedTemporalAxisUnresolved<T = Timestamp> {
    axis: TemporalAxis,
    timestamp: Option<T>,
}

impl<T> PinnedTemporalAxisUnresolved<T> {
    #[inline]
    pub const fn new(axis: TemporalAxis, timestamp: Option<T>) -> Self {
        Self { axis, timestamp }
    }

    #[inline]
    pub const fn axis(&self) -> TemporalAxis {
        self.axis
    }

    #[inline]
    pub const fn timestamp(&self) -> Option<&T> {
        self.timestamp.as_ref()
    }
}

impl<T> PinnedTemporalAxisUnresolved<T>
where
    T: Clone,
{
    #[inline]
    pub fn resolve(&self, now: &T) -> PinnedTemporalAxis<T> {
        let timestamp = self.timestamp.as_ref().unwrap_or(now).clone();
        PinnedTemporalAxis::new(self.axis, timestamp)
    }
}

/// Interval bounds of a variable axis, either of which may be left to
/// resolution. The end, if given, is always limited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct UnresolvedTemporalInterval<T = Timestamp> {
    start: Option<TemporalBound<T>>,
    end: Option<LimitedTemporalBound<T>>,
}

impl<T> UnresolvedTemporalInterval<T> {
    #[inline]
    pub const fn new(
        start: Option<TemporalBound<T>>,
        end: Option<LimitedTemporalBound<T>>,
    ) -> Self {
        Self { start, end }
    }

    #[inline]
    pub const fn start(&self) -> Option<&TemporalBound<T>> {
        self.start.as_ref()
    }

    #[inline]
    pub const fn end(&self) -> Option<&LimitedTemporalBound<T>> {
        self.end.as_ref()
    }
}

impl<T> UnresolvedTemporalInterval<T>
where
    T: Ord + Clone,
{
    /// Fills missing bounds with `inclusive(now)` and validates the result.
    pub fn resolve(&self, now: &T) -> Result<TemporalInterval<T>, AxesError> {
        let start = self
            .start
            .clone()
            .unwrap_or_else(|| TemporalBound::Inclusive(now.clone()));
        let end = self
            .end
            .clone()
            .unwrap_or_else(|| LimitedTemporalBound::Inclusive(now.clone()));
        TemporalInterval::try_new(start, end.into()).map_err(AxesError::from)
    }
}

/// A variable axis whose bounds may be left to resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct VariableTemporalAxisUnresolved<T = Timestamp> {
    axis: TemporalAxis,
    interval: UnresolvedTemporalInterval<T>,
}

impl<T> VariableTemporalAxisUnresolved<T> {
    #[inline]
    pub const fn new(axis: TemporalAxis, interval: UnresolvedTemporalInterval<T>) -> Self {
        Self { axis, interval }
    }

    #[inline]
    pub const fn axis(&self) -> TemporalAxis {
        self.axis
    }

    #[inline]
    pub const fn interval(&self) -> &UnresolvedTemporalInterval<T> {
        &self.interval
    }
}

impl<T> VariableTemporalAxisUnresolved<T>
where
    T: Ord + Clone,
{
    #[inline]
    pub fn resolve(&self, now: &T) -> Result<VariableTemporalAxis<T>, AxesError> {
        let interval = self.interval.resolve(now)?;
        Ok(VariableTemporalAxis::new(self.axis, interval))
    }
}

/// Query axes as stated by a caller, before resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct QueryTemporalAxesUnresolved<T = Timestamp> {
    pinned: PinnedTemporalAxisUnresolved<T>,
    variable: VariableTemporalAxisUnresolved<T>,
}

impl<T> QueryTemporalAxesUnresolved<T> {
    /// Returns [`AxesError::SameAxis`] if both axes name the same axis.
    pub fn try_new(
        pinned: PinnedTemporalAxisUnresolved<T>,
        variable: VariableTemporalAxisUnresolved<T>,
    ) -> Result<Self, AxesError> {
        if pinned.axis == variable.axis {
            return Err(AxesError::SameAxis(pinned.axis));
        }
        Ok(Self { pinned, variable })
    }

    /// Queries decision time as currently known: the transaction time is
    /// pinned at the resolution instant.
    #[inline]
    pub const fn decision_time(interval: UnresolvedTemporalInterval<T>) -> Self {
        Self {
            pinned: PinnedTemporalAxisUnresolved::new(TemporalAxis::TransactionTime, None),
            variable: VariableTemporalAxisUnresolved::new(TemporalAxis::DecisionTime, interval),
        }
    }

    /// Queries transaction time for the facts holding at the resolution
    /// instant.
    #[inline]
    pub const fn transaction_time(interval: UnresolvedTemporalInterval<T>) -> Self {
        Self {
            pinned: PinnedTemporalAxisUnresolved::new(TemporalAxis::DecisionTime, None),
            variable: VariableTemporalAxisUnresolved::new(TemporalAxis::TransactionTime, interval),
        }
    }

    #[inline]
    pub const fn pinned(&self) -> &PinnedTemporalAxisUnresolved<T> {
        &self.pinned
    }

    #[inline]
    pub const fn variable(&self) -> &VariableTemporalAxisUnresolved<T> {
        &self.variable
    }
}

impl<T> QueryTemporalAxesUnresolved<T>
where
    T: Ord + Clone,
{
    /// Resolves the axes against `now`.
    ///
    /// Fails with [`AxesError::InvalidInterval`] if the resolved variable
    /// interval starts after it ends, e.g. when only a start in the future of
    /// `now` was given.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bitemporal_axes::unresolved::{QueryTemporalAxesUnresolved, UnresolvedTemporalInterval};
    /// # use bitemporal_core::math::{bound::TemporalBound, interval::TemporalInterval};
    ///
    /// let unresolved = QueryTemporalAxesUnresolved::decision_time(
    ///     UnresolvedTemporalInterval::new(Some(TemporalBound::Unbounded), None),
    /// );
    /// let axes = unresolved.resolve(&42).unwrap();
    /// assert_eq!(axes.pinned().timestamp(), &42);
    /// assert_eq!(
    ///     axes.variable().interval(),
    ///     &TemporalInterval::new(TemporalBound::Unbounded, TemporalBound::Inclusive(42))
    /// );
    /// ```
    pub fn resolve(&self, now: &T) -> Result<QueryTemporalAxes<T>, AxesError> {
        let pinned = self.pinned.resolve(now);
        let variable = self.variable.resolve(now)?;
        tracing::debug!(
            pinned_axis = %pinned.axis(),
            variable_axis = %variable.axis(),
            pinned_defaulted = self.pinned.timestamp.is_none(),
            start_defaulted = self.variable.interval.start.is_none(),
            end_defaulted = self.variable.interval.end.is_none(),
            "resolved query temporal axes"
        );
        QueryTemporalAxes::try_new(pinned, variable)
    }

    /// Resolves the axes and keeps the unresolved form alongside.
    pub fn resolve_subgraph_axes(self, now: &T) -> Result<SubgraphTemporalAxes<T>, AxesError> {
        let resolved = self.resolve(now)?;
        Ok(SubgraphTemporalAxes {
            initial: self,
            resolved,
        })
    }
}

/// The temporal axes a subgraph was built with: as requested, and as resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct SubgraphTemporalAxes<T = Timestamp> {
    initial: QueryTemporalAxesUnresolved<T>,
    resolved: QueryTemporalAxes<T>,
}

impl<T> SubgraphTemporalAxes<T> {
    #[inline]
    pub const fn initial(&self) -> &QueryTemporalAxesUnresolved<T> {
        &self.initial
    }

    #[inline]
    pub const fn resolved(&self) -> &QueryTemporalAxes<T> {
        &self.resolved
    }
}

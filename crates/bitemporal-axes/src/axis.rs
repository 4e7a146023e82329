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

//! # Temporal Axes
//!
//! The two time axes a bitemporal record is versioned along, and the pair of
//! validity intervals an edition carries on them.

use bitemporal_core::math::interval::TemporalInterval;
use bitemporal_core::time::Timestamp;
use std::fmt;

/// A time axis of the bitemporal model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub enum TemporalAxis {
    /// When a fact was decided to hold in the modelled world.
    DecisionTime,
    /// When a fact was recorded in the store.
    TransactionTime,
}

impl TemporalAxis {
    /// Returns the axis that is not `self`.
    #[inline]
    pub const fn other(self) -> Self {
        match self {
            Self::DecisionTime => Self::TransactionTime,
            Self::TransactionTime => Self::DecisionTime,
        }
    }
}

impl fmt::Display for TemporalAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DecisionTime => f.write_str("decisionTime"),
            Self::TransactionTime => f.write_str("transactionTime"),
        }
    }
}

/// The validity intervals of a single edition of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct BitemporalInterval<T = Timestamp> {
    decision_time: TemporalInterval<T>,
    transaction_time: TemporalInterval<T>,
}

impl<T> BitemporalInterval<T> {
    #[inline]
    pub const fn new(
        decision_time: TemporalInterval<T>,
        transaction_time: TemporalInterval<T>,
    ) -> Self {
        Self {
            decision_time,
            transaction_time,
        }
    }

    #[inline]
    pub const fn decision_time(&self) -> &TemporalInterval<T> {
        &self.decision_time
    }

    #[inline]
    pub const fn transaction_time(&self) -> &TemporalInterval<T> {
        &self.transaction_time
    }

    /// Returns the interval on the given axis.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use bitemporal_axes::axis::{BitemporalInterval, TemporalAxis};
    /// # use bitemporal_core::math::interval::TemporalInterval;
    ///
    /// let edition = BitemporalInterval::new(
    ///     TemporalInterval::closed(0, 10),
    ///     TemporalInterval::left_closed(5),
    /// );
    /// assert_eq!(edition.on_axis(TemporalAxis::TransactionTime), &TemporalInterval::left_closed(5));
    /// ```
    #[inline]
    pub const fn on_axis(&self, axis: TemporalAxis) -> &TemporalInterval<T> {
        match axis {
            TemporalAxis::DecisionTime => &self.decision_time,
            TemporalAxis::TransactionTime => &self.transaction_time,
        }
    }
}

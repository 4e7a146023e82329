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

//! # Bitemporal Core
//!
//! Interval algebra for bitemporal data. Records versioned along a decision
//! time and a transaction time axis carry one validity interval per axis;
//! this crate provides the bounds, intervals and set operations needed to
//! compare and reconcile them.
//!
//! ## Modules
//!
//! - `time`: The `Timestamp` point type (UTC instant, RFC 3339 text form).
//! - `math`: Temporal bounds and position-aware bound comparison, and the
//!   `TemporalInterval` type with containment, overlap, adjacency,
//!   intersection, merge and union.
//! - `algorithm`: Operations over collections of intervals: in-place sorting,
//!   the union of a collection, and lookups in disjoint sorted sets.
//!
//! ## Features
//!
//! - `serde` (default): serialization of all value types. Bounds use the
//!   `{"kind": "inclusive", "limit": ...}` shape.
//!
//! ## Example
//!
//! ```rust
//! use bitemporal_core::algorithm::union_of_intervals;
//! use bitemporal_core::math::{bound::TemporalBound, interval::TemporalInterval};
//! use bitemporal_core::time::Timestamp;
//!
//! let t = |s: &str| s.parse::<Timestamp>().unwrap();
//! let a = TemporalInterval::closed(t("2020-01-01T00:00:00Z"), t("2020-06-01T00:00:00Z"));
//! let b = TemporalInterval::new(
//!     TemporalBound::Exclusive(t("2020-06-01T00:00:00Z")),
//!     TemporalBound::Inclusive(t("2020-12-01T00:00:00Z")),
//! );
//!
//! assert!(a.is_adjacent_to_interval(&b));
//! assert_eq!(
//!     union_of_intervals([a, b]),
//!     vec![TemporalInterval::closed(t("2020-01-01T00:00:00Z"), t("2020-12-01T00:00:00Z"))]
//! );
//! ```

pub mod algorithm;
pub mod math;
pub mod time;

#[cfg(test)]
mod proptests;

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

//! # Bitemporal Axes
//!
//! The query side of the bitemporal model. A query pins one time axis at an
//! instant and ranges over the other; resolving a subgraph projects the
//! validity intervals of every edition onto the ranged axis and reconciles
//! them with the interval algebra of `bitemporal-core`.
//!
//! ## Modules
//!
//! - `axis`: The decision time and transaction time axes, and the pair of
//!   validity intervals an edition carries.
//! - `query`: Resolved query axes (one pinned, one variable), projection of
//!   editions and flattening of many editions into disjoint intervals.
//! - `unresolved`: Query axes with instants left open, resolved against the
//!   current instant.
//!
//! ## Example
//!
//! ```rust
//! use bitemporal_axes::axis::BitemporalInterval;
//! use bitemporal_axes::unresolved::{QueryTemporalAxesUnresolved, UnresolvedTemporalInterval};
//! use bitemporal_core::math::{bound::TemporalBound, interval::TemporalInterval};
//!
//! // Everything decided up to now, as currently recorded.
//! let query = QueryTemporalAxesUnresolved::decision_time(UnresolvedTemporalInterval::new(
//!     Some(TemporalBound::Unbounded),
//!     None,
//! ))
//! .resolve(&100)
//! .unwrap();
//!
//! let editions = [
//!     BitemporalInterval::new(TemporalInterval::closed(0, 10), TemporalInterval::left_closed(0)),
//!     BitemporalInterval::new(
//!         TemporalInterval::new(TemporalBound::Exclusive(10), TemporalBound::Unbounded),
//!         TemporalInterval::left_closed(50),
//!     ),
//! ];
//! assert_eq!(query.flatten(&editions), vec![TemporalInterval::closed(0, 100)]);
//! ```

pub mod axis;
pub mod query;
pub mod unresolved;

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

//! # Math Primitives
//!
//! Temporal bounds and the intervals they delimit.
//!
//! ## Submodules
//!
//! - `bound`: The three bound kinds (unbounded, inclusive, exclusive), the
//!   position-aware bound comparison and bound adjacency.
//! - `interval`: A `[start, end]` interval over any ordered point type with
//!   predicates (containment, overlap, adjacency, strict ordering) and set
//!   operations (intersection, merge, union).
//!
//! ## Motivation
//!
//! Versioned records carry validity intervals on two time axes. Reconciling
//! them needs exact answers at the edges: whether an exclusive end and an
//! inclusive start at the same instant leave a gap, overlap, or just touch.

pub mod bound;
pub mod interval;

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

//! # Arbor Search
//!
//! Shared vocabulary for exhaustive tree search: run configuration,
//! termination outcomes, statistics, errors, and the monitor seam. The
//! engine crate consumes these types; problem crates normally only see the
//! outcome.
//!
//! ## Modules
//!
//! - `options`: `SearchOptions` with the collection policy (all solutions
//!   vs. first) and the traversal strategy (branch-per-state vs. in-place
//!   rollback).
//! - `error`: configuration precondition errors. Everything a problem
//!   raises itself propagates untranslated.
//! - `stats`: `SearchStatistics`, lightweight counters and timing collected
//!   during a run.
//! - `result`: `SearchOutcome` with the collected solutions, the
//!   termination reason, and the statistics.
//! - `monitor`: pluggable observers and controllers for search lifecycle
//!   events (logging, composition, solution limits).

pub mod error;
pub mod monitor;
pub mod options;
pub mod result;
pub mod stats;

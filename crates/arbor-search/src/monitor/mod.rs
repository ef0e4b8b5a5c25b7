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

//! # Search Monitors
//!
//! Pluggable observers and controllers for search lifecycle events.
//! Monitors can log progress, collect metrics, and issue termination
//! commands without entangling those concerns in the traversal itself.
//!
//! ## Submodules
//!
//! - `search_monitor`: core trait (`SearchMonitor<P>`) and the
//!   `SearchCommand` enum defining lifecycle hooks and control flow.
//! - `composite`: aggregate multiple monitors into a single composite.
//! - `log`: println!-based progress table and end-of-run summary.
//! - `no_op`: the silent default monitor.
//! - `solution_limit`: stop the search after a fixed number of solutions.
//!
//! A purely observational monitor cannot change the solutions a run
//! returns; only `search_command` influences execution.

pub mod composite;
pub mod log;
pub mod no_op;
pub mod search_monitor;
pub mod solution_limit;

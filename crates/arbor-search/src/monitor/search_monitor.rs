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

//! Search monitoring interface
//!
//! Declares the `SearchMonitor` trait and `SearchCommand` for observing and
//! controlling a depth-first enumeration. Callbacks track the run lifecycle,
//! and a monitor can influence execution via `SearchCommand` (default:
//! Continue).
//!
//! Lifecycle highlights
//! - enter → {descend | dead end | solution | backtrack}* → exit
//! - `SearchStatistics` is provided to every callback for telemetry.
//!
//! Design notes
//! - Methods take `&mut self`; monitors are assumed single-threaded.
//! - Keep callbacks lightweight; they sit on the traversal's hot path.

use crate::stats::SearchStatistics;
use arbor_problem::SearchProblem;

/// A monitor's verdict on whether the search should keep running.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub enum SearchCommand {
    #[default]
    Continue,
    Terminate(String),
}

impl std::fmt::Display for SearchCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchCommand::Continue => write!(f, "Continue"),
            SearchCommand::Terminate(reason) => write!(f, "Terminate: {}", reason),
        }
    }
}

/// Trait for monitoring and controlling a search run.
pub trait SearchMonitor<P>
where
    P: SearchProblem,
{
    /// Returns the name of the monitor.
    fn name(&self) -> &str;
    /// Called once when the search starts, before the initial state exists.
    fn on_enter_search(&mut self, problem: &P, statistics: &SearchStatistics);
    /// Called once when the search ends, after timing has been recorded.
    fn on_exit_search(&mut self, statistics: &SearchStatistics);
    /// Called to determine whether the search should continue. Consulted on
    /// entry to every node.
    fn search_command(
        &mut self,
        _state: &P::State,
        _statistics: &SearchStatistics,
    ) -> SearchCommand {
        SearchCommand::Continue
    }
    /// Called when descending into a child state.
    fn on_descend(&mut self, state: &P::State, statistics: &SearchStatistics);
    /// Called when returning from a child state to its parent.
    fn on_backtrack(&mut self, statistics: &SearchStatistics);
    /// Called when a non-solution state offers no valid actions.
    fn on_dead_end(&mut self, state: &P::State, statistics: &SearchStatistics);
    /// Called when a solution is recorded.
    fn on_solution_found(&mut self, solution: &P::State, statistics: &SearchStatistics);
}

impl<P> std::fmt::Debug for dyn SearchMonitor<P>
where
    P: SearchProblem,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SearchMonitor({})", self.name())
    }
}

impl<P> std::fmt::Display for dyn SearchMonitor<P>
where
    P: SearchProblem,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SearchMonitor({})", self.name())
    }
}

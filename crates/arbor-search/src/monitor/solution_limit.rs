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

use crate::{
    monitor::search_monitor::{SearchCommand, SearchMonitor},
    stats::SearchStatistics,
};
use arbor_problem::SearchProblem;

/// A monitor that terminates the search once a specified number of solutions
/// has been recorded. The run ends with an aborted outcome carrying the
/// solutions found so far.
#[derive(Debug, Clone)]
pub struct SolutionLimitMonitor<P> {
    solution_limit: u64,
    solutions_found: u64,
    _phantom: std::marker::PhantomData<P>,
}

impl<P> SolutionLimitMonitor<P>
where
    P: SearchProblem,
{
    /// Creates a new `SolutionLimitMonitor` with the given limit.
    #[inline]
    pub fn new(solution_limit: u64) -> Self {
        Self {
            solution_limit,
            solutions_found: 0,
            _phantom: std::marker::PhantomData,
        }
    }

    /// Checks if the solution limit has been reached.
    #[inline]
    fn reached_limit(&self) -> bool {
        self.solutions_found >= self.solution_limit
    }
}

impl<P> SearchMonitor<P> for SolutionLimitMonitor<P>
where
    P: SearchProblem,
{
    fn name(&self) -> &str {
        "SolutionLimitMonitor"
    }

    fn on_enter_search(&mut self, _problem: &P, _statistics: &SearchStatistics) {
        self.solutions_found = 0;
    }

    fn on_exit_search(&mut self, _statistics: &SearchStatistics) {}

    fn search_command(
        &mut self,
        _state: &P::State,
        _statistics: &SearchStatistics,
    ) -> SearchCommand {
        if self.reached_limit() {
            SearchCommand::Terminate("solution limit reached".to_string())
        } else {
            SearchCommand::Continue
        }
    }

    fn on_descend(&mut self, _state: &P::State, _statistics: &SearchStatistics) {}

    fn on_backtrack(&mut self, _statistics: &SearchStatistics) {}

    fn on_dead_end(&mut self, _state: &P::State, _statistics: &SearchStatistics) {}

    fn on_solution_found(&mut self, _solution: &P::State, _statistics: &SearchStatistics) {
        self.solutions_found = self.solutions_found.saturating_add(1);
    }
}

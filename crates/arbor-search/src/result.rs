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

use crate::stats::SearchStatistics;

/// Why a search run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminationReason {
    /// Every reachable state was explored.
    Exhausted,
    /// The run was configured to stop at the first solution, and found one.
    FirstSolutionFound,
    /// A monitor commanded termination. The string carries its reason.
    Aborted(String),
}

impl std::fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TerminationReason::Exhausted => write!(f, "Exhausted"),
            TerminationReason::FirstSolutionFound => write!(f, "First Solution Found"),
            TerminationReason::Aborted(reason) => write!(f, "Aborted: {}", reason),
        }
    }
}

/// Result of a search run: the collected solutions in depth-first discovery
/// order, the reason the run ended, and the statistics it gathered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome<S> {
    solutions: Vec<S>,
    termination_reason: TerminationReason,
    statistics: SearchStatistics,
}

impl<S> SearchOutcome<S> {
    /// Outcome of a run that explored the whole tree.
    #[inline]
    pub fn exhausted(solutions: Vec<S>, statistics: SearchStatistics) -> Self {
        Self {
            solutions,
            termination_reason: TerminationReason::Exhausted,
            statistics,
        }
    }

    /// Outcome of a first-solution run that found one.
    ///
    /// # Panics
    ///
    /// In debug builds, panics unless exactly one solution is supplied.
    #[inline]
    pub fn first_found(solutions: Vec<S>, statistics: SearchStatistics) -> Self {
        debug_assert!(
            solutions.len() == 1,
            "called `SearchOutcome::first_found` with {} solutions, expected exactly 1",
            solutions.len()
        );
        Self {
            solutions,
            termination_reason: TerminationReason::FirstSolutionFound,
            statistics,
        }
    }

    /// Outcome of a run stopped early by a monitor, carrying whatever
    /// solutions were recorded before the stop.
    #[inline]
    pub fn aborted<R>(solutions: Vec<S>, reason: R, statistics: SearchStatistics) -> Self
    where
        R: Into<String>,
    {
        Self {
            solutions,
            termination_reason: TerminationReason::Aborted(reason.into()),
            statistics,
        }
    }

    /// Returns the solutions in depth-first discovery order.
    #[inline]
    pub fn solutions(&self) -> &[S] {
        &self.solutions
    }

    /// Consumes the outcome, returning the solutions.
    #[inline]
    pub fn into_solutions(self) -> Vec<S> {
        self.solutions
    }

    /// Returns the first solution found, if any.
    #[inline]
    pub fn first(&self) -> Option<&S> {
        self.solutions.first()
    }

    /// Returns the number of collected solutions.
    #[inline]
    pub fn num_solutions(&self) -> usize {
        self.solutions.len()
    }

    /// Returns `true` if at least one solution was collected.
    #[inline]
    pub fn has_solutions(&self) -> bool {
        !self.solutions.is_empty()
    }

    /// Returns `true` if the run explored the whole tree.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        matches!(self.termination_reason, TerminationReason::Exhausted)
    }

    /// Returns the termination reason.
    #[inline]
    pub fn termination_reason(&self) -> &TerminationReason {
        &self.termination_reason
    }

    /// Returns the statistics gathered during the run.
    #[inline]
    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }
}

impl<S> std::fmt::Display for SearchOutcome<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SearchOutcome(solutions: {}, reason: {}, nodes: {})",
            self.solutions.len(),
            self.termination_reason,
            self.statistics.nodes_explored
        )
    }
}

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

//! Monitoring combinators for tree search
//!
//! Provides `CompositeSearchMonitor`, a fan-out monitor that forwards every
//! event to its children. This lets you mix logging, metrics, and early
//! stopping without coupling them to the engine.
//!
//! Behavior
//! - Events are dispatched to child monitors in insertion order.
//! - `search_command` short-circuits on the first non-`Continue` response;
//!   put stricter stop conditions first.
//! - Other callbacks always fan out to all children.

use crate::{
    monitor::search_monitor::{SearchCommand, SearchMonitor},
    stats::SearchStatistics,
};
use arbor_problem::SearchProblem;

/// A search monitor that aggregates multiple monitors and forwards events to
/// all of them. This allows combining different monitoring behaviors into a
/// single monitor.
pub struct CompositeSearchMonitor<'a, P>
where
    P: SearchProblem,
{
    monitors: Vec<Box<dyn SearchMonitor<P> + 'a>>,
}

impl<'a, P> Default for CompositeSearchMonitor<'a, P>
where
    P: SearchProblem,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, P> CompositeSearchMonitor<'a, P>
where
    P: SearchProblem,
{
    /// Creates a new empty `CompositeSearchMonitor`.
    #[inline(always)]
    pub fn new() -> Self {
        Self {
            monitors: Vec::new(),
        }
    }

    /// Creates a new `CompositeSearchMonitor` with the specified capacity.
    #[inline(always)]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            monitors: Vec::with_capacity(capacity),
        }
    }

    /// Adds a new monitor to the composite monitor.
    #[inline(always)]
    pub fn add_monitor<M>(&mut self, monitor: M)
    where
        M: SearchMonitor<P> + 'a,
    {
        self.monitors.push(Box::new(monitor));
    }

    /// Adds a boxed monitor to the composite monitor.
    #[inline(always)]
    pub fn add_monitor_boxed(&mut self, monitor: Box<dyn SearchMonitor<P> + 'a>) {
        self.monitors.push(monitor);
    }

    /// Returns a slice of the monitors contained in the composite monitor.
    #[inline(always)]
    pub fn monitors(&self) -> &[Box<dyn SearchMonitor<P> + 'a>] {
        &self.monitors
    }

    /// Clears all monitors from the composite monitor.
    #[inline(always)]
    pub fn clear(&mut self) {
        self.monitors.clear();
    }

    /// Returns the number of monitors contained in the composite monitor.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.monitors.len()
    }

    /// Returns `true` if the composite monitor contains no monitors,
    /// `false` otherwise.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.monitors.is_empty()
    }
}

impl<'a, P> FromIterator<Box<dyn SearchMonitor<P> + 'a>> for CompositeSearchMonitor<'a, P>
where
    P: SearchProblem,
{
    #[inline(always)]
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Box<dyn SearchMonitor<P> + 'a>>,
    {
        Self {
            monitors: iter.into_iter().collect(),
        }
    }
}

impl<'a, P> SearchMonitor<P> for CompositeSearchMonitor<'a, P>
where
    P: SearchProblem,
{
    #[inline(always)]
    fn name(&self) -> &str {
        "CompositeSearchMonitor"
    }

    #[inline(always)]
    fn on_enter_search(&mut self, problem: &P, statistics: &SearchStatistics) {
        for monitor in self.monitors.iter_mut() {
            monitor.on_enter_search(problem, statistics);
        }
    }

    #[inline(always)]
    fn on_exit_search(&mut self, statistics: &SearchStatistics) {
        for monitor in self.monitors.iter_mut() {
            monitor.on_exit_search(statistics);
        }
    }

    #[inline(always)]
    fn search_command(&mut self, state: &P::State, statistics: &SearchStatistics) -> SearchCommand {
        for monitor in self.monitors.iter_mut() {
            let command = monitor.search_command(state, statistics);
            if !matches!(command, SearchCommand::Continue) {
                return command;
            }
        }
        SearchCommand::Continue
    }

    #[inline(always)]
    fn on_descend(&mut self, state: &P::State, statistics: &SearchStatistics) {
        for monitor in self.monitors.iter_mut() {
            monitor.on_descend(state, statistics);
        }
    }

    #[inline(always)]
    fn on_backtrack(&mut self, statistics: &SearchStatistics) {
        for monitor in self.monitors.iter_mut() {
            monitor.on_backtrack(statistics);
        }
    }

    #[inline(always)]
    fn on_dead_end(&mut self, state: &P::State, statistics: &SearchStatistics) {
        for monitor in self.monitors.iter_mut() {
            monitor.on_dead_end(state, statistics);
        }
    }

    #[inline(always)]
    fn on_solution_found(&mut self, solution: &P::State, statistics: &SearchStatistics) {
        for monitor in self.monitors.iter_mut() {
            monitor.on_solution_found(solution, statistics);
        }
    }
}

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

use crate::{monitor::search_monitor::SearchMonitor, stats::SearchStatistics};
use arbor_problem::SearchProblem;
use std::time::{Duration, Instant};

/// A monitor that prints a throttled progress table during the run and a
/// one-line summary (solution count and elapsed wall-clock time) when the
/// run ends. Attach it for a verbose run; use `NoOperationMonitor` for a
/// silent one.
#[derive(Debug, Clone)]
pub struct LogSearchMonitor<P> {
    start_time: Instant,
    last_log_time: Instant,
    log_interval: Duration,
    clock_check_mask: u64,
    _phantom: std::marker::PhantomData<P>,
}

impl<P> LogSearchMonitor<P>
where
    P: SearchProblem,
{
    /// Creates a new `LogSearchMonitor`.
    ///
    /// The wall clock is only consulted on nodes whose count matches
    /// `clock_check_mask`, and a progress line is printed at most once per
    /// `log_interval`.
    pub fn new(log_interval: Duration, clock_check_mask: u64) -> Self {
        Self {
            start_time: Instant::now(),
            last_log_time: Instant::now(),
            log_interval,
            clock_check_mask,
            _phantom: std::marker::PhantomData,
        }
    }

    #[inline(always)]
    fn print_header(&self) {
        println!(
            "{:<9} | {:<14} | {:<10} | {:<10} | {:<12}",
            "Elapsed", "Nodes", "Solutions", "Dead Ends", "Backtracks"
        );
        println!("{}", "-".repeat(66));
    }

    #[inline(always)]
    fn log_line(&mut self, stats: &SearchStatistics) {
        let now = Instant::now();
        let elapsed_field = format!("{:.1}s", now.duration_since(self.start_time).as_secs_f32());

        println!(
            "{:<9} | {:<14} | {:<10} | {:<10} | {:<12}",
            elapsed_field,
            stats.nodes_explored,
            stats.solutions_found,
            stats.dead_ends,
            stats.backtracks
        );

        self.last_log_time = now;
    }
}

impl<P> Default for LogSearchMonitor<P>
where
    P: SearchProblem,
{
    fn default() -> Self {
        Self::new(Duration::from_secs(1), 4095)
    }
}

impl<P> std::fmt::Display for LogSearchMonitor<P>
where
    P: SearchProblem,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LogSearchMonitor(log_interval: {}s, clock_check_mask: {})",
            self.log_interval.as_secs(),
            self.clock_check_mask
        )
    }
}

impl<P> SearchMonitor<P> for LogSearchMonitor<P>
where
    P: SearchProblem,
{
    fn name(&self) -> &str {
        "LogSearchMonitor"
    }

    fn on_enter_search(&mut self, _problem: &P, _statistics: &SearchStatistics) {
        self.start_time = Instant::now();
        self.last_log_time = self.start_time;
        self.print_header();
    }

    fn on_descend(&mut self, _state: &P::State, statistics: &SearchStatistics) {
        if (statistics.nodes_explored & self.clock_check_mask) == 0
            && self.last_log_time.elapsed() >= self.log_interval
        {
            self.log_line(statistics);
        }
    }

    fn on_backtrack(&mut self, _statistics: &SearchStatistics) {}

    fn on_dead_end(&mut self, _state: &P::State, _statistics: &SearchStatistics) {}

    fn on_solution_found(&mut self, _solution: &P::State, _statistics: &SearchStatistics) {}

    fn on_exit_search(&mut self, statistics: &SearchStatistics) {
        println!("{}", "-".repeat(66));
        println!(
            "Found {} solution(s) in {:.3} seconds",
            statistics.solutions_found,
            statistics.time_total.as_secs_f64()
        );
    }
}

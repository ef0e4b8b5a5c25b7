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

//! Depth-first enumeration engine.
//!
//! This module implements the recursive exhaustive search over the problem
//! contract. The `DfsEngine` is stateless; each call to `solve` builds a
//! search session that owns the run configuration, the monitor borrow, the
//! solution accumulator, and the statistics, so nothing can leak between
//! sequential runs on the same engine value.
//!
//! The traversal visits states depth-first in the order the problem
//! enumerates its actions. A state satisfying the solution predicate is
//! collected and never expanded further; a non-solution state with no valid
//! actions is a dead end. Two strategies share this enumeration order: the
//! default forks an independent state per child, while the in-place variant
//! threads ownership of a single state through the recursion and restores it
//! via the problem's `undo` at every backtrack point, including early
//! unwinds. The design emphasizes determinism, internal consistency at
//! backtrack points, and end-state cleanliness after each solve.

use arbor_problem::SearchProblem;
use arbor_search::{
    error::{RollbackUnsupportedError, SearchError},
    monitor::search_monitor::{SearchCommand, SearchMonitor},
    options::{CollectPolicy, SearchOptions, TraversalStrategy},
    result::SearchOutcome,
    stats::SearchStatistics,
};

/// A depth-first exhaustive-search engine over a `SearchProblem`.
///
/// The engine holds no per-run state. Runs on the same value are strictly
/// sequential; reuse across problems and option sets is safe by
/// construction.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct DfsEngine;

impl DfsEngine {
    /// Create a new engine instance.
    #[inline]
    pub fn new() -> Self {
        Self
    }

    /// Explore every state reachable from the problem's initial state and
    /// collect the solutions according to `options`.
    ///
    /// The configuration precondition is validated first: requesting
    /// `TraversalStrategy::InPlaceRollback` against a problem whose
    /// `supports_undo` is `false` returns
    /// `SearchError::RollbackUnsupported` before any problem operation is
    /// called, `initial_state` included.
    ///
    /// Solutions are returned in depth-first discovery order. Under
    /// `CollectPolicy::FirstSolution` the traversal halts at the very first
    /// solution encountered in that order.
    ///
    /// # Note
    ///
    /// The recursion maps directly onto the host call stack: the maximum
    /// searchable path length is bounded by the thread's stack size. Deep
    /// problems should run on a thread with an enlarged stack.
    ///
    /// Any panic raised by a problem operation unwinds through the engine
    /// unchanged.
    pub fn solve<P, M>(
        &self,
        problem: &P,
        options: SearchOptions,
        mut monitor: M,
    ) -> Result<SearchOutcome<P::State>, SearchError>
    where
        P: SearchProblem,
        M: SearchMonitor<P>,
    {
        if options.strategy() == TraversalStrategy::InPlaceRollback && !problem.supports_undo() {
            return Err(RollbackUnsupportedError {
                problem: problem.name().to_string(),
            }
            .into());
        }

        let session = DfsSearchSession::new(problem, options, &mut monitor);
        Ok(session.run())
    }
}

/// Control flow signal threaded through the recursion.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum SearchFlow {
    /// Keep exploring sibling branches.
    Continue,
    /// Unwind the whole traversal (first solution found or abort).
    Halt,
}

/// A search session encapsulating the state and logic of a single run.
struct DfsSearchSession<'a, P, M>
where
    P: SearchProblem,
{
    problem: &'a P,
    options: SearchOptions,
    monitor: &'a mut M,
    solutions: Vec<P::State>,
    stats: SearchStatistics,
    depth: u64,
    abort_reason: Option<String>,
    start_time: std::time::Instant,
}

impl<'a, P, M> DfsSearchSession<'a, P, M>
where
    P: SearchProblem,
    M: SearchMonitor<P>,
{
    /// Create a new search session.
    #[inline]
    fn new(problem: &'a P, options: SearchOptions, monitor: &'a mut M) -> Self {
        Self {
            problem,
            options,
            monitor,
            solutions: Vec::new(),
            stats: SearchStatistics::default(),
            depth: 0,
            abort_reason: None,
            start_time: std::time::Instant::now(),
        }
    }

    /// Run the search session.
    #[inline]
    fn run(mut self) -> SearchOutcome<P::State> {
        self.monitor.on_enter_search(self.problem, &self.stats);

        let root = self.problem.initial_state();
        match self.options.strategy() {
            TraversalStrategy::BranchPerState => {
                self.explore(root);
            }
            TraversalStrategy::InPlaceRollback => {
                self.explore_in_place(root);
            }
        }

        debug_assert!(
            self.depth == 0,
            "called `DfsSearchSession::run` finished at depth {}, expected 0",
            self.depth
        );

        self.stats.set_total_time(self.start_time.elapsed());
        self.monitor.on_exit_search(&self.stats);
        self.finalize()
    }

    /// Finalize the outcome from the accumulated solutions and the way the
    /// traversal ended.
    ///
    /// # Note
    ///
    /// This consumes self.
    #[inline]
    fn finalize(self) -> SearchOutcome<P::State> {
        if let Some(reason) = self.abort_reason {
            return SearchOutcome::aborted(self.solutions, reason, self.stats);
        }

        match self.options.collect() {
            CollectPolicy::FirstSolution if !self.solutions.is_empty() => {
                SearchOutcome::first_found(self.solutions, self.stats)
            }
            _ => SearchOutcome::exhausted(self.solutions, self.stats),
        }
    }

    /// Record a solution and decide whether the traversal keeps going.
    #[inline(always)]
    fn record_solution(&mut self, solution: P::State) -> SearchFlow {
        self.stats.on_solution_found();
        self.monitor.on_solution_found(&solution, &self.stats);
        self.solutions.push(solution);

        match self.options.collect() {
            CollectPolicy::AllSolutions => SearchFlow::Continue,
            CollectPolicy::FirstSolution => SearchFlow::Halt,
        }
    }

    /// Check the monitors on node entry. Returns `true` when the run must
    /// stop.
    #[inline(always)]
    fn commanded_to_stop(&mut self, state: &P::State) -> bool {
        if let SearchCommand::Terminate(reason) = self.monitor.search_command(state, &self.stats) {
            self.abort_reason = Some(reason);
            return true;
        }
        false
    }

    /// Branch-per-state traversal: every child gets its own state value,
    /// the parent stays untouched for sibling branches.
    fn explore(&mut self, state: P::State) -> SearchFlow {
        if self.commanded_to_stop(&state) {
            return SearchFlow::Halt;
        }
        self.stats.on_node_explored();

        // Solution check before branching: a solution leaf is collected and
        // never expanded.
        if self.problem.is_solution(&state) {
            return self.record_solution(state);
        }

        let actions = self.problem.valid_actions(&state);
        if actions.is_empty() {
            self.stats.on_dead_end();
            self.monitor.on_dead_end(&state, &self.stats);
            return SearchFlow::Continue;
        }

        for action in actions.iter() {
            let child = self.problem.apply(action, state.clone());

            self.depth += 1;
            self.stats.on_depth_update(self.depth);
            self.monitor.on_descend(&child, &self.stats);

            let flow = self.explore(child);

            self.depth -= 1;
            self.stats.on_backtrack();
            self.monitor.on_backtrack(&self.stats);

            if let SearchFlow::Halt = flow {
                return SearchFlow::Halt;
            }
        }

        SearchFlow::Continue
    }

    /// In-place rollback traversal: one live state threads through the
    /// recursion by value; `undo` restores it at every backtrack point.
    fn explore_in_place(&mut self, mut state: P::State) -> (P::State, SearchFlow) {
        if self.commanded_to_stop(&state) {
            return (state, SearchFlow::Halt);
        }
        self.stats.on_node_explored();

        if self.problem.is_solution(&state) {
            let flow = self.record_solution(state.clone());
            return (state, flow);
        }

        let actions = self.problem.valid_actions(&state);
        if actions.is_empty() {
            self.stats.on_dead_end();
            self.monitor.on_dead_end(&state, &self.stats);
            return (state, SearchFlow::Continue);
        }

        for action in actions.iter() {
            state = self.problem.apply(action, state);

            self.depth += 1;
            self.stats.on_depth_update(self.depth);
            self.monitor.on_descend(&state, &self.stats);

            let (returned, flow) = self.explore_in_place(state);

            // Undo runs before the flow is inspected: every frame hands back
            // the state it was given, even while unwinding early.
            state = self.problem.undo(action, returned);

            self.depth -= 1;
            self.stats.on_backtrack();
            self.monitor.on_backtrack(&self.stats);

            if let SearchFlow::Halt = flow {
                return (state, SearchFlow::Halt);
            }
        }

        (state, SearchFlow::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::DfsEngine;
    use arbor_problem::SearchProblem;
    use arbor_search::{
        error::SearchError,
        monitor::{
            composite::CompositeSearchMonitor, no_op::NoOperationMonitor,
            solution_limit::SolutionLimitMonitor,
        },
        options::SearchOptions,
        result::TerminationReason,
    };
    use fixedbitset::FixedBitSet;
    use rustc_hash::FxHashSet;
    use std::cell::Cell;

    /// Build sequences of a fixed length over an alphabet, never repeating
    /// the previous symbol.
    struct DistinctNeighbors {
        alphabet: Vec<char>,
        length: usize,
    }

    impl DistinctNeighbors {
        fn new(alphabet: &[char], length: usize) -> Self {
            Self {
                alphabet: alphabet.to_vec(),
                length,
            }
        }
    }

    impl SearchProblem for DistinctNeighbors {
        type State = Vec<char>;
        type Action = char;

        fn name(&self) -> &str {
            "DistinctNeighbors"
        }

        fn initial_state(&self) -> Self::State {
            Vec::new()
        }

        fn valid_actions(&self, state: &Self::State) -> Vec<Self::Action> {
            if state.len() >= self.length {
                return Vec::new();
            }
            self.alphabet
                .iter()
                .copied()
                .filter(|symbol| state.last() != Some(symbol))
                .collect()
        }

        fn apply(&self, action: &Self::Action, mut state: Self::State) -> Self::State {
            state.push(*action);
            state
        }

        fn is_solution(&self, state: &Self::State) -> bool {
            state.len() == self.length
        }

        fn undo(&self, action: &Self::Action, mut state: Self::State) -> Self::State {
            let popped = state.pop();
            assert_eq!(popped, Some(*action), "undo does not match the last apply");
            state
        }

        fn supports_undo(&self) -> bool {
            true
        }
    }

    /// Same domain as `DistinctNeighbors` but without the undo capability.
    struct ForwardOnlyNeighbors(DistinctNeighbors);

    impl SearchProblem for ForwardOnlyNeighbors {
        type State = Vec<char>;
        type Action = char;

        fn name(&self) -> &str {
            "ForwardOnlyNeighbors"
        }

        fn initial_state(&self) -> Self::State {
            self.0.initial_state()
        }

        fn valid_actions(&self, state: &Self::State) -> Vec<Self::Action> {
            self.0.valid_actions(state)
        }

        fn apply(&self, action: &Self::Action, state: Self::State) -> Self::State {
            self.0.apply(action, state)
        }

        fn is_solution(&self, state: &Self::State) -> bool {
            self.0.is_solution(state)
        }
    }

    /// Wrapper counting every contract call on the inner problem.
    struct CallCounting<'a, P>
    where
        P: SearchProblem,
    {
        inner: &'a P,
        initial_state_calls: Cell<u64>,
        valid_action_calls: Cell<u64>,
        apply_calls: Cell<u64>,
        is_solution_calls: Cell<u64>,
    }

    impl<'a, P> CallCounting<'a, P>
    where
        P: SearchProblem,
    {
        fn new(inner: &'a P) -> Self {
            Self {
                inner,
                initial_state_calls: Cell::new(0),
                valid_action_calls: Cell::new(0),
                apply_calls: Cell::new(0),
                is_solution_calls: Cell::new(0),
            }
        }

        fn total_calls(&self) -> u64 {
            self.initial_state_calls.get()
                + self.valid_action_calls.get()
                + self.apply_calls.get()
                + self.is_solution_calls.get()
        }
    }

    impl<'a, P> SearchProblem for CallCounting<'a, P>
    where
        P: SearchProblem,
    {
        type State = P::State;
        type Action = P::Action;

        fn name(&self) -> &str {
            self.inner.name()
        }

        fn initial_state(&self) -> Self::State {
            self.initial_state_calls.set(self.initial_state_calls.get() + 1);
            self.inner.initial_state()
        }

        fn valid_actions(&self, state: &Self::State) -> Vec<Self::Action> {
            self.valid_action_calls.set(self.valid_action_calls.get() + 1);
            self.inner.valid_actions(state)
        }

        fn apply(&self, action: &Self::Action, state: Self::State) -> Self::State {
            self.apply_calls.set(self.apply_calls.get() + 1);
            self.inner.apply(action, state)
        }

        fn is_solution(&self, state: &Self::State) -> bool {
            self.is_solution_calls.set(self.is_solution_calls.get() + 1);
            self.inner.is_solution(state)
        }

        fn undo(&self, action: &Self::Action, state: Self::State) -> Self::State {
            self.inner.undo(action, state)
        }

        fn supports_undo(&self) -> bool {
            self.inner.supports_undo()
        }
    }

    /// Place one queen per column, left to right. A state is always a
    /// conflict-free placement, so the solution check is just "all columns
    /// filled".
    struct Queens {
        size: usize,
    }

    #[derive(Clone)]
    struct QueensState {
        /// Chosen row per filled column, leftmost first.
        placed: Vec<usize>,
        /// Row occupancy for the O(1) part of the conflict check.
        rows: FixedBitSet,
    }

    impl Queens {
        fn new(size: usize) -> Self {
            Self { size }
        }

        fn attacks(&self, state: &QueensState, row: usize) -> bool {
            if state.rows.contains(row) {
                return true;
            }
            let column = state.placed.len();
            state.placed.iter().enumerate().any(|(c, &r)| {
                let column_distance = column - c;
                r.abs_diff(row) == column_distance
            })
        }
    }

    impl SearchProblem for Queens {
        type State = QueensState;
        type Action = usize;

        fn name(&self) -> &str {
            "Queens"
        }

        fn initial_state(&self) -> Self::State {
            QueensState {
                placed: Vec::with_capacity(self.size),
                rows: FixedBitSet::with_capacity(self.size),
            }
        }

        fn valid_actions(&self, state: &Self::State) -> Vec<Self::Action> {
            if state.placed.len() >= self.size {
                return Vec::new();
            }
            (0..self.size).filter(|&row| !self.attacks(state, row)).collect()
        }

        fn apply(&self, action: &Self::Action, mut state: Self::State) -> Self::State {
            state.placed.push(*action);
            state.rows.insert(*action);
            state
        }

        fn is_solution(&self, state: &Self::State) -> bool {
            state.placed.len() == self.size
        }

        fn undo(&self, action: &Self::Action, mut state: Self::State) -> Self::State {
            let popped = state.placed.pop();
            assert_eq!(popped, Some(*action), "undo does not match the last apply");
            state.rows.set(*action, false);
            state
        }

        fn supports_undo(&self) -> bool {
            true
        }
    }

    fn queen_rows(outcome: &arbor_search::result::SearchOutcome<QueensState>) -> Vec<Vec<usize>> {
        outcome
            .solutions()
            .iter()
            .map(|state| state.placed.clone())
            .collect()
    }

    #[test]
    fn test_two_symbol_enumeration_in_discovery_order() {
        let problem = DistinctNeighbors::new(&['A', 'B'], 2);
        let engine = DfsEngine::new();

        let outcome = engine
            .solve(&problem, SearchOptions::new(), NoOperationMonitor::new())
            .expect("branch-per-state run must not need undo");

        assert_eq!(
            outcome.solutions(),
            &[vec!['A', 'B'], vec!['B', 'A']],
            "solutions must appear in depth-first discovery order"
        );
        assert!(outcome.is_exhausted());
        assert_eq!(outcome.statistics().solutions_found, 2);
    }

    #[test]
    fn test_first_solution_returns_leftmost() {
        let problem = DistinctNeighbors::new(&['A', 'B'], 2);
        let engine = DfsEngine::new();

        let all = engine
            .solve(&problem, SearchOptions::new(), NoOperationMonitor::new())
            .unwrap();
        let first = engine
            .solve(
                &problem,
                SearchOptions::new().find_first(),
                NoOperationMonitor::new(),
            )
            .unwrap();

        assert_eq!(first.solutions(), &[vec!['A', 'B']]);
        assert_eq!(
            first.termination_reason(),
            &TerminationReason::FirstSolutionFound
        );
        assert_eq!(
            first.first(),
            all.first(),
            "first-solution mode must return the head of the full enumeration"
        );
    }

    #[test]
    fn test_single_symbol_dead_end_returns_empty() {
        let problem = DistinctNeighbors::new(&['A'], 2);
        let engine = DfsEngine::new();

        let outcome = engine
            .solve(&problem, SearchOptions::new(), NoOperationMonitor::new())
            .unwrap();

        assert!(outcome.solutions().is_empty());
        assert!(outcome.is_exhausted());
        assert!(
            outcome.statistics().dead_ends >= 1,
            "the ['A'] branch must be counted as a dead end"
        );
    }

    #[test]
    fn test_find_first_without_solutions_is_exhausted_and_empty() {
        let problem = DistinctNeighbors::new(&['A'], 2);
        let engine = DfsEngine::new();

        let outcome = engine
            .solve(
                &problem,
                SearchOptions::new().find_first(),
                NoOperationMonitor::new(),
            )
            .unwrap();

        assert!(outcome.solutions().is_empty());
        assert_eq!(outcome.termination_reason(), &TerminationReason::Exhausted);
    }

    #[test]
    fn test_in_place_rollback_matches_branch_per_state_on_toy() {
        let problem = DistinctNeighbors::new(&['A', 'B'], 2);
        let engine = DfsEngine::new();

        let branching = engine
            .solve(&problem, SearchOptions::new(), NoOperationMonitor::new())
            .unwrap();
        let in_place = engine
            .solve(
                &problem,
                SearchOptions::new().in_place_rollback(),
                NoOperationMonitor::new(),
            )
            .expect("the toy problem implements undo");

        assert_eq!(branching.solutions(), in_place.solutions());
    }

    #[test]
    fn test_rollback_unsupported_is_rejected_before_any_problem_call() {
        let inner = ForwardOnlyNeighbors(DistinctNeighbors::new(&['A', 'B'], 2));
        let counting = CallCounting::new(&inner);
        let engine = DfsEngine::new();

        let error = engine
            .solve(
                &counting,
                SearchOptions::new().in_place_rollback(),
                NoOperationMonitor::new(),
            )
            .expect_err("a problem without undo must be rejected");

        match &error {
            SearchError::RollbackUnsupported(details) => {
                assert_eq!(details.problem, "ForwardOnlyNeighbors");
            }
        }
        assert!(format!("{}", error).contains("ForwardOnlyNeighbors"));
        assert_eq!(
            counting.total_calls(),
            0,
            "the precondition must fail before any contract operation runs"
        );
        assert_eq!(counting.initial_state_calls.get(), 0);
    }

    #[test]
    fn test_solution_check_takes_priority_over_branching() {
        // With target length zero the initial state is already a solution;
        // the engine must collect it without ever asking for actions.
        let inner = DistinctNeighbors::new(&['A', 'B'], 0);
        let counting = CallCounting::new(&inner);
        let engine = DfsEngine::new();

        let outcome = engine
            .solve(&counting, SearchOptions::new(), NoOperationMonitor::new())
            .unwrap();

        assert_eq!(outcome.solutions(), &[Vec::<char>::new()]);
        assert_eq!(counting.initial_state_calls.get(), 1);
        assert_eq!(
            counting.valid_action_calls.get(),
            0,
            "a solution state must not be expanded"
        );
    }

    #[test]
    fn test_determinism_repeated_runs_identical() {
        let problem = Queens::new(5);
        let engine = DfsEngine::new();

        let first = engine
            .solve(&problem, SearchOptions::new(), NoOperationMonitor::new())
            .unwrap();
        let second = engine
            .solve(&problem, SearchOptions::new(), NoOperationMonitor::new())
            .unwrap();

        assert_eq!(
            queen_rows(&first),
            queen_rows(&second),
            "repeated runs must return identical sequences"
        );
        assert_eq!(first.statistics(), second.statistics());
    }

    #[test]
    fn test_completeness_known_queen_counts() {
        let engine = DfsEngine::new();
        for (size, expected) in [(4usize, 2usize), (5, 10), (6, 4), (8, 92)] {
            let outcome = engine
                .solve(
                    &Queens::new(size),
                    SearchOptions::new(),
                    NoOperationMonitor::new(),
                )
                .unwrap();
            assert_eq!(
                outcome.num_solutions(),
                expected,
                "{} queens must have {} solutions",
                size,
                expected
            );
            for solution in outcome.solutions() {
                assert_eq!(solution.placed.len(), size, "every solution must be complete");
            }
        }
    }

    #[test]
    fn test_mode_equivalence_on_six_queens() {
        let problem = Queens::new(6);
        let engine = DfsEngine::new();

        let branching = engine
            .solve(&problem, SearchOptions::new(), NoOperationMonitor::new())
            .unwrap();
        let in_place = engine
            .solve(
                &problem,
                SearchOptions::new().in_place_rollback(),
                NoOperationMonitor::new(),
            )
            .unwrap();

        // Same enumeration order implies the same sequence, not just set.
        assert_eq!(queen_rows(&branching), queen_rows(&in_place));

        let branching_set: FxHashSet<Vec<usize>> = queen_rows(&branching).into_iter().collect();
        let in_place_set: FxHashSet<Vec<usize>> = queen_rows(&in_place).into_iter().collect();
        assert_eq!(branching_set, in_place_set);
    }

    #[test]
    fn test_first_solution_in_place_matches_branching() {
        let problem = Queens::new(6);
        let engine = DfsEngine::new();

        let branching = engine
            .solve(
                &problem,
                SearchOptions::new().find_first(),
                NoOperationMonitor::new(),
            )
            .unwrap();
        let in_place = engine
            .solve(
                &problem,
                SearchOptions::new().find_first().in_place_rollback(),
                NoOperationMonitor::new(),
            )
            .unwrap();

        assert_eq!(branching.num_solutions(), 1);
        assert_eq!(queen_rows(&branching), queen_rows(&in_place));
    }

    #[test]
    fn test_undo_restores_observable_behavior() {
        let problem = Queens::new(4);
        let root = problem.initial_state();

        for action in problem.valid_actions(&root) {
            let applied = problem.apply(&action, root.clone());

            for inner_action in problem.valid_actions(&applied) {
                let deeper = problem.apply(&inner_action, applied.clone());
                let restored = problem.undo(&inner_action, deeper);
                assert_eq!(
                    problem.valid_actions(&restored),
                    problem.valid_actions(&applied),
                    "undo must restore the action enumeration"
                );
                assert_eq!(
                    problem.is_solution(&restored),
                    problem.is_solution(&applied),
                    "undo must restore the solution predicate"
                );
            }

            let restored_root = problem.undo(&action, applied);
            assert_eq!(
                problem.valid_actions(&restored_root),
                problem.valid_actions(&root)
            );
        }
    }

    #[test]
    fn test_solution_limit_monitor_aborts_run() {
        let problem = Queens::new(6);
        let engine = DfsEngine::new();

        let outcome = engine
            .solve(
                &problem,
                SearchOptions::new(),
                SolutionLimitMonitor::new(2),
            )
            .unwrap();

        assert_eq!(outcome.num_solutions(), 2);
        assert!(!outcome.is_exhausted());
        match outcome.termination_reason() {
            TerminationReason::Aborted(reason) => {
                assert_eq!(reason, "solution limit reached")
            }
            other => panic!("expected Aborted, got {}", other),
        }
    }

    #[test]
    fn test_composite_monitor_drives_engine_abort() {
        let problem = Queens::new(6);
        let engine = DfsEngine::new();

        let mut monitor = CompositeSearchMonitor::new();
        monitor.add_monitor(NoOperationMonitor::new());
        monitor.add_monitor(SolutionLimitMonitor::new(1));

        let outcome = engine
            .solve(&problem, SearchOptions::new(), monitor)
            .unwrap();

        assert_eq!(outcome.num_solutions(), 1);
        assert!(matches!(
            outcome.termination_reason(),
            TerminationReason::Aborted(_)
        ));
    }

    #[test]
    fn test_statistics_track_depth_nodes_and_backtracks() {
        let problem = Queens::new(6);
        let engine = DfsEngine::new();

        let outcome = engine
            .solve(&problem, SearchOptions::new(), NoOperationMonitor::new())
            .unwrap();
        let stats = outcome.statistics();

        assert_eq!(stats.max_depth, 6, "every solution path has one queen per column");
        assert_eq!(stats.solutions_found, 4);
        assert!(stats.nodes_explored > 0);
        assert!(stats.backtracks > 0);
        assert!(stats.dead_ends > 0, "6 queens has plenty of stuck placements");
    }

    #[test]
    fn test_engine_is_reusable_sequentially() {
        let engine = DfsEngine::new();

        let toy = engine
            .solve(
                &DistinctNeighbors::new(&['A', 'B'], 2),
                SearchOptions::new(),
                NoOperationMonitor::new(),
            )
            .unwrap();
        assert_eq!(toy.num_solutions(), 2);

        // A different problem and option set on the same engine value.
        let queens = engine
            .solve(
                &Queens::new(4),
                SearchOptions::new().find_first().in_place_rollback(),
                NoOperationMonitor::new(),
            )
            .unwrap();
        assert_eq!(queens.num_solutions(), 1);
        assert_eq!(
            queens.statistics().solutions_found,
            1,
            "statistics must not leak between runs"
        );
    }

    #[test]
    fn test_randomized_instances_agree_across_strategies() {
        use rand::{rngs::StdRng, Rng, SeedableRng};

        let alphabet = ['A', 'B', 'C', 'D'];
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let engine = DfsEngine::new();

        for _ in 0..16 {
            let symbols = rng.gen_range(1..=alphabet.len());
            let length = rng.gen_range(0..=4);
            let problem = DistinctNeighbors::new(&alphabet[..symbols], length);

            let branching = engine
                .solve(&problem, SearchOptions::new(), NoOperationMonitor::new())
                .unwrap();
            let in_place = engine
                .solve(
                    &problem,
                    SearchOptions::new().in_place_rollback(),
                    NoOperationMonitor::new(),
                )
                .unwrap();

            assert_eq!(
                branching.solutions(),
                in_place.solutions(),
                "strategies diverged on {} symbols, length {}",
                symbols,
                length
            );
        }
    }
}

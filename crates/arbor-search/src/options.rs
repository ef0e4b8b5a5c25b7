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

//! Run configuration for the search engine.
//!
//! `SearchOptions` is an explicit parameter object, fixed for the duration
//! of one run and handed to the engine per call. Keeping the flags out of
//! the engine itself means nothing can leak between sequential runs on the
//! same engine instance.

/// How many solutions a run collects.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum CollectPolicy {
    /// Collect every solution reachable from the initial state.
    #[default]
    AllSolutions,
    /// Stop at the first solution encountered in depth-first order.
    FirstSolution,
}

impl std::fmt::Display for CollectPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CollectPolicy::AllSolutions => write!(f, "AllSolutions"),
            CollectPolicy::FirstSolution => write!(f, "FirstSolution"),
        }
    }
}

/// How the traversal materializes states.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum TraversalStrategy {
    /// One independent state value per recursion frame. No `undo` needed;
    /// memory is O(depth x state size).
    #[default]
    BranchPerState,
    /// One shared state value, mutated on descent and restored through
    /// `undo` on backtrack. Memory is O(state size); requires the problem
    /// to implement `undo`.
    InPlaceRollback,
}

impl std::fmt::Display for TraversalStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TraversalStrategy::BranchPerState => write!(f, "BranchPerState"),
            TraversalStrategy::InPlaceRollback => write!(f, "InPlaceRollback"),
        }
    }
}

/// Configuration for a single search run.
///
/// Defaults to collecting all solutions with branch-per-state traversal,
/// matching the least demanding problem contract (no `undo` required).
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct SearchOptions {
    collect: CollectPolicy,
    strategy: TraversalStrategy,
}

impl SearchOptions {
    /// Creates options with the default policy and strategy.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the collection policy.
    #[inline]
    pub fn collect(&self) -> CollectPolicy {
        self.collect
    }

    /// Returns the traversal strategy.
    #[inline]
    pub fn strategy(&self) -> TraversalStrategy {
        self.strategy
    }

    /// Collect every reachable solution.
    #[inline]
    pub fn find_all(mut self) -> Self {
        self.collect = CollectPolicy::AllSolutions;
        self
    }

    /// Stop at the first solution found in depth-first order.
    #[inline]
    pub fn find_first(mut self) -> Self {
        self.collect = CollectPolicy::FirstSolution;
        self
    }

    /// Use one independent state per recursion frame.
    #[inline]
    pub fn branch_per_state(mut self) -> Self {
        self.strategy = TraversalStrategy::BranchPerState;
        self
    }

    /// Use one shared state with rollback via `undo`.
    #[inline]
    pub fn in_place_rollback(mut self) -> Self {
        self.strategy = TraversalStrategy::InPlaceRollback;
        self
    }
}

impl std::fmt::Display for SearchOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SearchOptions(collect: {}, strategy: {})",
            self.collect, self.strategy
        )
    }
}

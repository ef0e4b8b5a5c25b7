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

//! The problem capability contract
//!
//! Declares the `SearchProblem` trait: four mandatory operations that every
//! problem supplies, plus an optional inverse operation (`undo`) guarded by a
//! capability probe (`supports_undo`). The engine validates the probe once
//! per run, at configuration time, never per call.
//!
//! Contract highlights
//! - A state is always a *valid* partial solution. The engine trusts the
//!   problem to only ever construct valid states through `apply`.
//! - `valid_actions` defines the branching order; the engine preserves it,
//!   which makes runs deterministic for deterministic problems.
//! - `apply` takes the state by value. Branch-per-state traversal hands it a
//!   clone, so sibling branches keep the parent untouched; in-place rollback
//!   traversal hands it the single live state, and the implementation is
//!   expected to mutate that value in place and return it.

/// The capability set a problem must implement to be searchable.
///
/// The engine calls `initial_state` exactly once per run, then recursively
/// expands states by enumerating `valid_actions` and descending through
/// `apply`, collecting every state for which `is_solution` holds.
///
/// Implementations that additionally provide `undo` (and report so through
/// `supports_undo`) can be traversed with a single live state that is
/// mutated on descent and restored on backtrack, trading the per-frame state
/// clones of the default strategy for two calls per edge.
pub trait SearchProblem {
    /// A valid partial solution. Opaque to the engine.
    ///
    /// `Clone` is required twice over: branch-per-state traversal forks the
    /// state for every child, and both traversals snapshot a state when it
    /// is collected as a solution.
    type State: Clone;

    /// A single legal transition out of a specific state. Opaque to the
    /// engine; produced only by `valid_actions`.
    type Action;

    /// Returns the name of the problem, used in diagnostics and errors.
    fn name(&self) -> &str;

    /// Returns the state representing "nothing chosen yet".
    ///
    /// Called exactly once per run, after configuration validation.
    fn initial_state(&self) -> Self::State;

    /// Enumerates every action legal from `state`, in branching order.
    ///
    /// An empty vector is a legal answer and marks a dead end: the state is
    /// not expanded further and contributes no solutions. Must not mutate
    /// the state.
    fn valid_actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// Performs `action` on `state` and returns the resulting state.
    ///
    /// The state is passed by value. Under branch-per-state traversal the
    /// engine passes a clone, so the parent value survives for sibling
    /// branches. Under in-place rollback traversal the engine passes the one
    /// live state; mutating it in place and returning it is the expected
    /// implementation.
    fn apply(&self, action: &Self::Action, state: Self::State) -> Self::State;

    /// Tests whether `state` is a complete solution.
    ///
    /// Pure predicate: no side effects, and the same state must always give
    /// the same answer. A state that satisfies this predicate is collected
    /// and never expanded further.
    fn is_solution(&self, state: &Self::State) -> bool;

    /// Inverts `action` on `state` and returns the restored state.
    ///
    /// Required only for in-place rollback traversal, where it must be the
    /// exact inverse of `apply`: applying an action and then undoing it must
    /// restore a state that is indistinguishable from the original under
    /// `valid_actions`, `is_solution`, and any further apply/undo chains.
    ///
    /// Implementations overriding this must also override `supports_undo`
    /// to return `true`; the engine consults the probe before the search
    /// starts and never calls `undo` otherwise.
    ///
    /// # Panics
    ///
    /// The default implementation panics. It is unreachable through the
    /// engine, which rejects in-place traversal at configuration time when
    /// `supports_undo` is `false`.
    fn undo(&self, _action: &Self::Action, _state: Self::State) -> Self::State {
        unimplemented!(
            "problem '{}' does not implement `undo`; in-place rollback traversal requires it",
            self.name()
        )
    }

    /// Reports whether this problem implements `undo`.
    ///
    /// Checked once per run, before `initial_state` is called. The default
    /// is `false`.
    fn supports_undo(&self) -> bool {
        false
    }
}

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

//! Arbor-DFS: depth-first exhaustive search
//!
//! High-level crate that implements a deterministic, modular depth-first
//! enumeration engine over the `arbor_problem::SearchProblem` contract. The
//! engine separates the problem, the run configuration, and monitoring so
//! you can swap any of them without touching traversal logic.
//!
//! Core flow
//! - Implement `arbor_problem::SearchProblem` for your domain.
//! - Choose `arbor_search::options::SearchOptions` (collection policy and
//!   traversal strategy).
//! - Optionally attach monitors (logging, limits, composition).
//! - Run `engine::DfsEngine::solve` and consume the `SearchOutcome`.
//!
//! Design highlights
//! - Separation of concerns: problems generate valid moves; the engine only
//!   orders the exploration; monitors observe/control; outcomes carry stats.
//! - Two traversal strategies sharing one enumeration order: independent
//!   state per frame, or a single state restored through `undo`.
//! - Deterministic given a deterministic problem.
//!
//! Module map
//! - `engine`: the engine and per-run session orchestration.

pub mod engine;

pub use engine::DfsEngine;

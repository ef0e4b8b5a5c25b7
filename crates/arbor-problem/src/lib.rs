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

//! # Arbor Problem
//!
//! The capability contract between the arbor search engine and the problem
//! domains it explores. The engine is fully generic: it never inspects the
//! contents of a state or an action, it only carries them through the
//! traversal using the operations declared here.
//!
//! ## Purpose
//!
//! Keeping the contract in its own crate mirrors the separation between the
//! engine and the domains it serves. A problem crate depends only on this
//! contract; the engine crate depends on it too and on nothing
//! domain-specific, so the two sides can evolve independently.
//!
//! Refer to [`problem::SearchProblem`] for the detailed contract.

pub mod problem;

pub use problem::SearchProblem;

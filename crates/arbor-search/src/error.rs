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

//! Configuration errors raised by the search engine.
//!
//! Only configuration preconditions are surfaced as typed errors, detected
//! before the search touches the problem. Misbehavior inside a problem's own
//! operations is deliberately not caught or translated: it unwinds through
//! the engine unchanged.

/// Details about an in-place rollback request against a problem without
/// `undo`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollbackUnsupportedError {
    /// The name of the offending problem.
    pub problem: String,
}

impl std::fmt::Display for RollbackUnsupportedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Problem '{}' does not implement `undo`, which in-place rollback traversal requires",
            self.problem
        )
    }
}

impl std::error::Error for RollbackUnsupportedError {}

/// The error type for starting a search run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// In-place rollback traversal was requested but the problem reports no
    /// `undo` capability. Raised before any problem operation is called.
    RollbackUnsupported(RollbackUnsupportedError),
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RollbackUnsupported(e) => write!(f, "Configuration error: {}", e),
        }
    }
}

impl std::error::Error for SearchError {}

impl From<RollbackUnsupportedError> for SearchError {
    fn from(e: RollbackUnsupportedError) -> Self {
        Self::RollbackUnsupported(e)
    }
}

#[cfg(test)]
mod tests {
    use super::{RollbackUnsupportedError, SearchError};

    #[test]
    fn test_display_names_problem_and_missing_capability() {
        let error = RollbackUnsupportedError {
            problem: "EightQueens".to_string(),
        };
        let rendered = format!("{}", error);
        assert!(rendered.contains("EightQueens"), "missing problem name");
        assert!(rendered.contains("`undo`"), "missing capability name");
    }

    #[test]
    fn test_from_wraps_into_search_error() {
        let error = RollbackUnsupportedError {
            problem: "EightQueens".to_string(),
        };
        let wrapped: SearchError = error.clone().into();
        assert_eq!(wrapped, SearchError::RollbackUnsupported(error));
        assert!(format!("{}", wrapped).starts_with("Configuration error"));
    }
}

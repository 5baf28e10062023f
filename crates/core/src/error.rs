// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use casetrack_domain::DomainError;

/// Errors that can occur during lifecycle transitions.
///
/// All failures are detected before any write is issued: a transition
/// either succeeds completely or leaves the complaint unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated by caller-supplied data.
    DomainViolation(DomainError),
    /// A required prior state is missing for this transition.
    PreconditionFailed {
        /// The operation that was attempted.
        operation: &'static str,
        /// The missing requirement.
        requirement: &'static str,
    },
    /// The acting user lacks permission for this transition.
    Unauthorized {
        /// The action that was attempted.
        action: &'static str,
        /// Why it was rejected.
        reason: String,
    },
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::PreconditionFailed {
                operation,
                requirement,
            } => {
                write!(f, "Cannot {operation}: {requirement}")
            }
            Self::Unauthorized { action, reason } => {
                write!(f, "Unauthorized '{action}': {reason}")
            }
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for the hard outcome/final-response preconditions.

use casetrack_domain::ComplaintStatus;

use super::helpers::{NOW, admin, state_with_outcome, state_without_outcome};
use crate::{Command, CoreError, apply};

#[test]
fn test_final_response_requires_outcome() {
    let state = state_without_outcome(ComplaintStatus::InInvestigation);

    let result = apply(&state, Command::IssueFinalResponse, &admin(), NOW);

    assert!(matches!(
        result,
        Err(CoreError::PreconditionFailed {
            operation: "issue final response",
            ..
        })
    ));
}

#[test]
fn test_failed_final_response_leaves_state_unchanged() {
    let state = state_without_outcome(ComplaintStatus::InInvestigation);
    let original = state.complaint.clone();

    let result = apply(&state, Command::IssueFinalResponse, &admin(), NOW);

    assert!(result.is_err());
    // The input is untouched: the caller persists nothing on error.
    assert_eq!(state.complaint, original);
    assert_eq!(state.complaint.final_response_at, None);
    assert_eq!(state.complaint.status, ComplaintStatus::InInvestigation);
}

#[test]
fn test_close_requires_outcome() {
    let state = state_without_outcome(ComplaintStatus::FinalResponseIssued);

    let result = apply(
        &state,
        Command::Close {
            closed_at: None,
            comment: None,
        },
        &admin(),
        NOW,
    );

    assert!(matches!(
        result,
        Err(CoreError::PreconditionFailed {
            operation: "close complaint",
            requirement: "an outcome must be recorded first",
        })
    ));
}

#[test]
fn test_close_requires_final_response() {
    // Outcome recorded but no final response issued.
    let state = state_with_outcome(ComplaintStatus::InInvestigation);
    assert_eq!(state.complaint.final_response_at, None);

    let result = apply(
        &state,
        Command::Close {
            closed_at: None,
            comment: None,
        },
        &admin(),
        NOW,
    );

    assert!(matches!(
        result,
        Err(CoreError::PreconditionFailed {
            operation: "close complaint",
            requirement: "a final response must be issued first",
        })
    ));
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for the stable error-kind contract.

use casetrack_core::CoreError;
use casetrack_domain::{DomainError, RedressType};
use casetrack_persistence::PersistenceError;

use crate::{ApiError, translate_core_error, translate_domain_error, translate_persistence_error};

#[test]
fn test_every_variant_has_a_stable_kind() {
    let cases = [
        (
            ApiError::Validation {
                rule: String::from("amount_required"),
                message: String::new(),
            },
            "validation",
        ),
        (
            ApiError::Precondition {
                operation: String::from("close complaint"),
                message: String::new(),
            },
            "precondition",
        ),
        (
            ApiError::Authorization {
                action: String::from("assign handler"),
                message: String::new(),
            },
            "authorization",
        ),
        (
            ApiError::Conflict {
                message: String::new(),
            },
            "conflict",
        ),
        (
            ApiError::NotFound {
                resource: String::from("Complaint"),
                message: String::new(),
            },
            "not_found",
        ),
        (
            ApiError::Internal {
                message: String::new(),
            },
            "internal",
        ),
    ];
    for (error, kind) in cases {
        assert_eq!(error.kind(), kind);
    }
}

#[test]
fn test_domain_errors_map_to_validation() {
    let err = translate_domain_error(DomainError::AmountRequired {
        payment_type: RedressType::GoodwillPayment,
    });

    assert_eq!(err.kind(), "validation");
    assert!(matches!(
        err,
        ApiError::Validation { rule, .. } if rule == "amount_required"
    ));
}

#[test]
fn test_precondition_core_errors_keep_their_kind() {
    let err = translate_core_error(CoreError::PreconditionFailed {
        operation: "close complaint",
        requirement: "an outcome must be recorded first",
    });

    assert_eq!(err.kind(), "precondition");
}

#[test]
fn test_unauthorized_core_errors_keep_their_kind() {
    let err = translate_core_error(CoreError::Unauthorized {
        action: "assign handler",
        reason: String::from("handlers may only self-assign"),
    });

    assert_eq!(err.kind(), "authorization");
}

#[test]
fn test_missing_rows_map_to_not_found() {
    for persistence_error in [
        PersistenceError::ComplaintNotFound(1),
        PersistenceError::ReferenceNotFound(String::from("CMP-2026-000001")),
        PersistenceError::UserNotFound(1),
        PersistenceError::RedressNotFound {
            complaint_id: 1,
            redress_id: 2,
        },
    ] {
        assert_eq!(
            translate_persistence_error(persistence_error).kind(),
            "not_found"
        );
    }
}

#[test]
fn test_reference_exhaustion_is_a_conflict() {
    let err = translate_persistence_error(PersistenceError::ReferenceExhausted {
        year: 2026,
        attempts: 3,
    });

    assert_eq!(err.kind(), "conflict");
}

#[test]
fn test_storage_failures_are_internal() {
    let err = translate_persistence_error(PersistenceError::DatabaseError(String::from(
        "disk I/O error",
    )));

    assert_eq!(err.kind(), "internal");
}

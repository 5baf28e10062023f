// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API boundary.
//!
//! Every failure carries a stable kind plus a human-readable message;
//! clients branch on [`ApiError::kind`] without parsing the message.
//! Domain, core, and persistence errors are translated explicitly and
//! never leaked.

use casetrack_core::CoreError;
use casetrack_domain::DomainError;
use casetrack_persistence::PersistenceError;

/// API-level errors, one variant per stable error kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Caller-supplied data violates a business rule.
    Validation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// A required prior state is missing; the complaint is unchanged.
    Precondition {
        /// The operation that was rejected.
        operation: String,
        /// A human-readable description of the missing requirement.
        message: String,
    },
    /// The actor lacks permission for the requested transition.
    Authorization {
        /// The action that was attempted.
        action: String,
        /// A human-readable description of the refusal.
        message: String,
    },
    /// Concurrent mutation was detected (e.g. reference retries
    /// exhausted).
    Conflict {
        /// A human-readable description of the conflict.
        message: String,
    },
    /// A referenced complaint/outcome/redress/user does not exist.
    NotFound {
        /// The type of resource that was not found.
        resource: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// An unexpected internal failure; no partial mutation occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl ApiError {
    /// Returns the stable error kind for client branching.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "validation",
            Self::Precondition { .. } => "precondition",
            Self::Authorization { .. } => "authorization",
            Self::Conflict { .. } => "conflict",
            Self::NotFound { .. } => "not_found",
            Self::Internal { .. } => "internal",
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation { rule, message } => {
                write!(f, "Validation failed ({rule}): {message}")
            }
            Self::Precondition { operation, message } => {
                write!(f, "Precondition failed for {operation}: {message}")
            }
            Self::Authorization { action, message } => {
                write!(f, "Unauthorized '{action}': {message}")
            }
            Self::Conflict { message } => write!(f, "Conflict: {message}"),
            Self::NotFound { resource, message } => {
                write!(f, "{resource} not found: {message}")
            }
            Self::Internal { message } => write!(f, "Internal error: {message}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into an API error.
///
/// Domain violations are caller-data problems, so they all map to the
/// `validation` kind with a stable rule name.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    let rule: &str = match &err {
        DomainError::ReasonRequired { .. } => "reason_required",
        DomainError::AmountRequired { .. } => "amount_required",
        DomainError::RationaleRequired { .. } => "rationale_required",
        DomainError::ActionDescriptionRequired { .. } => "action_description_required",
        DomainError::InvalidEscalationTarget { .. } => "invalid_escalation_target",
        DomainError::FosAlreadyReferred { .. } => "fos_already_referred",
        DomainError::BlankField(_) => "blank_field",
        DomainError::DateArithmeticOverflow { .. } => "date_out_of_range",
        _ => "invalid_value",
    };
    ApiError::Validation {
        rule: rule.to_string(),
        message: err.to_string(),
    }
}

/// Translates a core error into an API error.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::PreconditionFailed {
            operation,
            requirement,
        } => ApiError::Precondition {
            operation: operation.to_string(),
            message: requirement.to_string(),
        },
        CoreError::Unauthorized { action, reason } => ApiError::Authorization {
            action: action.to_string(),
            message: reason,
        },
    }
}

/// Translates a persistence error into an API error.
#[must_use]
pub fn translate_persistence_error(err: PersistenceError) -> ApiError {
    match err {
        PersistenceError::ComplaintNotFound(id) => ApiError::NotFound {
            resource: String::from("Complaint"),
            message: format!("Complaint {id} does not exist"),
        },
        PersistenceError::ReferenceNotFound(reference) => ApiError::NotFound {
            resource: String::from("Complaint"),
            message: format!("No complaint with reference '{reference}'"),
        },
        PersistenceError::RedressNotFound {
            complaint_id,
            redress_id,
        } => ApiError::NotFound {
            resource: String::from("Redress payment"),
            message: format!("Redress {redress_id} not found on complaint {complaint_id}"),
        },
        PersistenceError::UserNotFound(id) => ApiError::NotFound {
            resource: String::from("User"),
            message: format!("User {id} does not exist"),
        },
        PersistenceError::NotFound(message) => ApiError::NotFound {
            resource: String::from("Resource"),
            message,
        },
        PersistenceError::UniqueViolation(message) => ApiError::Conflict { message },
        exhausted @ PersistenceError::ReferenceExhausted { .. } => ApiError::Conflict {
            message: exhausted.to_string(),
        },
        other => ApiError::Internal {
            message: other.to_string(),
        },
    }
}

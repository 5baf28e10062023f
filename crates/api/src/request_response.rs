// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request types for the exposed operations.
//!
//! Enumerated fields deserialize straight into the closed domain
//! variants, which is where legacy redress-type spellings are resolved;
//! nothing downstream ever re-interprets strings.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

use casetrack_core::{ComplaintIntake, ComplaintUpdate, RedressInput, RedressUpdate};
use casetrack_domain::{
    ActionStatus, Complainant, CommunicationChannel, CommunicationDirection, OutcomeType, Policy,
    RedressPaymentStatus, RedressType,
};

/// Complainant fields supplied at creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplainantFields {
    pub full_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<Date>,
    #[serde(default)]
    pub preferred_contact_method: Option<String>,
}

impl ComplainantFields {
    /// Converts into the domain entity (unpersisted).
    #[must_use]
    pub fn into_domain(self) -> Complainant {
        Complainant {
            complainant_id: None,
            full_name: self.full_name,
            email: self.email,
            phone: self.phone,
            address: self.address,
            date_of_birth: self.date_of_birth,
            preferred_contact_method: self.preferred_contact_method,
        }
    }
}

/// Policy fields supplied at creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PolicyFields {
    #[serde(default)]
    pub policy_number: Option<String>,
    #[serde(default)]
    pub insurer: Option<String>,
    #[serde(default)]
    pub broker: Option<String>,
    #[serde(default)]
    pub product: Option<String>,
    #[serde(default)]
    pub scheme: Option<String>,
}

impl PolicyFields {
    /// Converts into the domain entity (unpersisted).
    #[must_use]
    pub fn into_domain(self) -> Policy {
        Policy {
            policy_id: None,
            policy_number: self.policy_number,
            insurer: self.insurer,
            broker: self.broker,
            product: self.product,
            scheme: self.scheme,
        }
    }
}

/// The create operation's field sets: complaint, complainant, policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateComplaintRequest {
    pub source: String,
    pub received_at: OffsetDateTime,
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub fca_complaint: bool,
    #[serde(default)]
    pub fca_rationale: Option<String>,
    #[serde(default)]
    pub vulnerability_flag: bool,
    #[serde(default)]
    pub vulnerability_notes: Option<String>,
    pub complainant: ComplainantFields,
    #[serde(default)]
    pub policy: PolicyFields,
}

impl CreateComplaintRequest {
    /// Splits the request into the intake and the owned children.
    #[must_use]
    pub fn into_parts(self) -> (ComplaintIntake, Complainant, Policy) {
        let intake = ComplaintIntake {
            source: self.source,
            received_at: self.received_at,
            description: self.description,
            category: self.category,
            reason: self.reason,
            fca_complaint: self.fca_complaint,
            fca_rationale: self.fca_rationale,
            vulnerability_flag: self.vulnerability_flag,
            vulnerability_notes: self.vulnerability_notes,
        };
        (
            intake,
            self.complainant.into_domain(),
            self.policy.into_domain(),
        )
    }
}

/// Parameters for recording an outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeRequest {
    pub outcome: OutcomeType,
    #[serde(default)]
    pub rationale: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Parameters for closing a complaint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CloseRequest {
    #[serde(default)]
    pub closed_at: Option<OffsetDateTime>,
    #[serde(default)]
    pub comment: Option<String>,
}

/// Parameters for a FOS referral.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferToFosRequest {
    pub fos_reference: String,
    #[serde(default)]
    pub fos_referred_at: Option<OffsetDateTime>,
}

/// Parameters for adding a redress payment.
///
/// `status` and `approved` are accepted for wire compatibility but not
/// honored; the persisted record is always authorised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedressRequest {
    pub payment_type: RedressType,
    #[serde(default)]
    pub amount: Option<Decimal>,
    #[serde(default)]
    pub rationale: Option<String>,
    #[serde(default)]
    pub action_description: Option<String>,
    #[serde(default)]
    pub action_status: ActionStatus,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub outcome_id: Option<i64>,
    #[serde(default)]
    pub status: Option<RedressPaymentStatus>,
    #[serde(default)]
    pub approved: Option<bool>,
}

impl RedressRequest {
    /// Converts into the core command input.
    #[must_use]
    pub fn into_input(self) -> RedressInput {
        RedressInput {
            payment_type: self.payment_type,
            amount: self.amount,
            rationale: self.rationale,
            action_description: self.action_description,
            action_status: self.action_status,
            notes: self.notes,
            outcome_id: self.outcome_id,
            status: self.status,
            approved: self.approved,
        }
    }
}

/// Parameters for updating a redress payment. `None` leaves a field
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RedressUpdateRequest {
    #[serde(default)]
    pub amount: Option<Decimal>,
    #[serde(default)]
    pub rationale: Option<String>,
    #[serde(default)]
    pub action_description: Option<String>,
    #[serde(default)]
    pub action_status: Option<ActionStatus>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub paid_at: Option<OffsetDateTime>,
    #[serde(default)]
    pub status: Option<RedressPaymentStatus>,
    #[serde(default)]
    pub approved: Option<bool>,
}

impl RedressUpdateRequest {
    /// Converts into the core command input.
    #[must_use]
    pub fn into_update(self) -> RedressUpdate {
        RedressUpdate {
            amount: self.amount,
            rationale: self.rationale,
            action_description: self.action_description,
            action_status: self.action_status,
            notes: self.notes,
            paid_at: self.paid_at,
            status: self.status,
            approved: self.approved,
        }
    }
}

/// Parameters for updating complaint details. `None` leaves a field
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UpdateComplaintRequest {
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub fca_complaint: Option<bool>,
    #[serde(default)]
    pub fca_rationale: Option<String>,
    #[serde(default)]
    pub vulnerability_flag: Option<bool>,
    #[serde(default)]
    pub vulnerability_notes: Option<String>,
    #[serde(default)]
    pub is_escalated: Option<bool>,
}

impl UpdateComplaintRequest {
    /// Converts into the core command input.
    #[must_use]
    pub fn into_update(self) -> ComplaintUpdate {
        ComplaintUpdate {
            source: self.source,
            description: self.description,
            category: self.category,
            reason: self.reason,
            fca_complaint: self.fca_complaint,
            fca_rationale: self.fca_rationale,
            vulnerability_flag: self.vulnerability_flag,
            vulnerability_notes: self.vulnerability_notes,
            is_escalated: self.is_escalated,
        }
    }
}

/// Parameters for logging a communication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommunicationRequest {
    pub channel: CommunicationChannel,
    pub direction: CommunicationDirection,
    pub summary: String,
    pub occurred_at: OffsetDateTime,
    #[serde(default)]
    pub is_final_response: bool,
}

/// Parameters for adding a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRequest {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub due_date: Option<OffsetDateTime>,
    #[serde(default)]
    pub assigned_to_id: Option<i64>,
    #[serde(default)]
    pub is_checklist: bool,
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

use crate::types::{
    ActionStatus, CaseReference, CommunicationChannel, CommunicationDirection, ComplaintStatus,
    OutcomeType, RedressPaymentStatus, RedressType, TaskStatus, UserRole,
};

/// The central complaint entity.
///
/// A complaint is created once (which assigns its reference and due
/// dates), mutated through the lifecycle state machine, and never
/// hard-deleted in normal operation. `complaint_id` is the canonical
/// internal identifier; `None` indicates the complaint has not been
/// persisted yet. The `reference` is the external identity and is
/// immutable once assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Complaint {
    /// Canonical internal identifier assigned by the database.
    pub complaint_id: Option<i64>,
    /// The externally visible case reference.
    pub reference: CaseReference,
    /// Current lifecycle state.
    pub status: ComplaintStatus,
    /// How the complaint arrived (e.g. "Email", "Phone").
    pub source: String,
    /// When the complaint was received. Immutable; due dates derive from it.
    pub received_at: OffsetDateTime,
    /// Free-text description of the grievance.
    pub description: String,
    /// Complaint category.
    pub category: String,
    /// Reason; required when the category is "Other / Unclassified".
    pub reason: Option<String>,
    /// Whether this is an FCA-reportable complaint.
    pub fca_complaint: bool,
    /// Rationale for the FCA classification.
    pub fca_rationale: Option<String>,
    /// Whether the complainant is flagged as vulnerable.
    pub vulnerability_flag: bool,
    /// Notes supporting the vulnerability flag.
    pub vulnerability_notes: Option<String>,
    /// Set by the administrative non-reportable close override.
    pub non_reportable: bool,
    /// Acknowledgement deadline; always present, derived at creation.
    pub ack_due_at: OffsetDateTime,
    /// Final-response deadline; always present, derived at creation.
    pub final_due_at: OffsetDateTime,
    /// When acknowledgement was sent.
    pub acknowledged_at: Option<OffsetDateTime>,
    /// When the final response was issued.
    pub final_response_at: Option<OffsetDateTime>,
    /// When the complaint was closed.
    pub closed_at: Option<OffsetDateTime>,
    /// Live acknowledgement-breach flag (derived state; see `breach_flags`).
    pub ack_breached: bool,
    /// Live final-response-breach flag (derived state).
    pub final_breached: bool,
    /// Orthogonal escalation flag; not a lifecycle state.
    pub is_escalated: bool,
    /// Whether the complaint has been referred to the Financial Ombudsman Service.
    pub fos_complaint: bool,
    /// The FOS case reference, once referred.
    pub fos_reference: Option<String>,
    /// When the FOS referral was made.
    pub fos_referred_at: Option<OffsetDateTime>,
    /// The handler currently assigned, if any.
    pub assigned_handler_id: Option<i64>,
    /// Self-reference recorded when the complaint is reopened.
    pub reopened_from_id: Option<i64>,
}

impl Complaint {
    /// Returns whether the complaint is currently closed.
    #[must_use]
    pub const fn is_closed(&self) -> bool {
        matches!(self.status, ComplaintStatus::Closed)
    }
}

/// The person raising the complaint. Exactly one per complaint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Complainant {
    /// Canonical internal identifier assigned by the database.
    pub complainant_id: Option<i64>,
    pub full_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub date_of_birth: Option<Date>,
    pub preferred_contact_method: Option<String>,
}

/// The policy the complaint relates to. Exactly one per complaint,
/// created with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Policy {
    /// Canonical internal identifier assigned by the database.
    pub policy_id: Option<i64>,
    pub policy_number: Option<String>,
    pub insurer: Option<String>,
    pub broker: Option<String>,
    pub product: Option<String>,
    pub scheme: Option<String>,
}

/// The recorded decision for a complaint. At most one per complaint;
/// re-recording mutates it in place rather than versioning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    /// Canonical internal identifier assigned by the database.
    pub outcome_id: Option<i64>,
    /// The decision category.
    pub outcome: OutcomeType,
    /// The rationale supporting the decision.
    pub rationale: Option<String>,
    /// Internal notes.
    pub notes: Option<String>,
    /// Who recorded the outcome.
    pub recorded_by_id: Option<i64>,
    /// When the outcome was (last) recorded.
    pub recorded_at: OffsetDateTime,
}

/// A redress payment or remedial action awarded on a complaint.
///
/// Monetary types carry an `amount` and `rationale`; non-monetary types
/// carry an `action_description`. `status` and `approved` are record-only:
/// the lifecycle forces `Authorised`/`true` on create and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedressPayment {
    /// Canonical internal identifier assigned by the database.
    pub redress_id: Option<i64>,
    /// The outcome this redress is linked to, if any.
    pub outcome_id: Option<i64>,
    pub payment_type: RedressType,
    pub amount: Option<Decimal>,
    pub status: RedressPaymentStatus,
    pub approved: bool,
    pub rationale: Option<String>,
    pub action_description: Option<String>,
    pub action_status: ActionStatus,
    pub notes: Option<String>,
    pub paid_at: Option<OffsetDateTime>,
    pub created_at: OffsetDateTime,
}

/// A contact logged against a complaint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Communication {
    /// Canonical internal identifier assigned by the database.
    pub communication_id: Option<i64>,
    pub channel: CommunicationChannel,
    pub direction: CommunicationDirection,
    pub summary: String,
    pub occurred_at: OffsetDateTime,
    /// Whether this communication carries the final response.
    pub is_final_response: bool,
    /// The user who logged the communication.
    pub user_id: Option<i64>,
    pub created_at: OffsetDateTime,
}

/// A work item attached to a complaint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Canonical internal identifier assigned by the database.
    pub task_id: Option<i64>,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    pub due_date: Option<OffsetDateTime>,
    pub assigned_to_id: Option<i64>,
    /// Whether this task belongs to a checklist template.
    pub is_checklist: bool,
    pub created_at: OffsetDateTime,
}

/// A user known to the system, for assignment and escalation guards.
///
/// Authentication is an external collaborator; no credentials are held
/// here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Canonical internal identifier assigned by the database.
    pub user_id: Option<i64>,
    pub full_name: String,
    pub email: String,
    pub role: UserRole,
    pub is_active: bool,
}

impl User {
    /// Returns whether this user is a valid escalation target.
    ///
    /// Only active complaints managers may receive escalations.
    #[must_use]
    pub const fn is_escalation_target(&self) -> bool {
        matches!(self.role, UserRole::ComplaintsManager) && self.is_active
    }
}

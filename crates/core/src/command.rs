// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use rust_decimal::Decimal;
use time::OffsetDateTime;

use casetrack_domain::{
    ActionStatus, CommunicationChannel, CommunicationDirection, OutcomeType, RedressPayment,
    RedressPaymentStatus, RedressType, User,
};

/// The field set for opening a new complaint.
///
/// The reference and due dates are not part of the intake: the allocator
/// and the SLA calculator derive them during creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplaintIntake {
    /// How the complaint arrived.
    pub source: String,
    /// When the complaint was received.
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
}

/// Caller-supplied fields for a new redress payment.
///
/// `status` and `approved` are accepted for wire compatibility but not
/// honored: the lifecycle forces `Authorised`/`true` on the persisted
/// record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedressInput {
    /// The (already alias-resolved) payment type.
    pub payment_type: RedressType,
    /// The payment amount; required for monetary types.
    pub amount: Option<Decimal>,
    /// The rationale; required for monetary types.
    pub rationale: Option<String>,
    /// The action description; required for non-monetary types.
    pub action_description: Option<String>,
    /// Progress of a non-monetary action.
    pub action_status: ActionStatus,
    /// Free-text notes.
    pub notes: Option<String>,
    /// The outcome to link this redress to, if any.
    pub outcome_id: Option<i64>,
    /// Requested payment status. Not honored; recorded as `Authorised`.
    pub status: Option<RedressPaymentStatus>,
    /// Requested approval. Not honored; recorded as `true`.
    pub approved: Option<bool>,
}

/// Partial update of an existing redress payment.
///
/// `None` fields are left unchanged. As on create, `status` and
/// `approved` are accepted but forced on the persisted record.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RedressUpdate {
    pub amount: Option<Decimal>,
    pub rationale: Option<String>,
    pub action_description: Option<String>,
    pub action_status: Option<ActionStatus>,
    pub notes: Option<String>,
    pub paid_at: Option<OffsetDateTime>,
    /// Requested payment status. Not honored; recorded as `Authorised`.
    pub status: Option<RedressPaymentStatus>,
    /// Requested approval. Not honored; recorded as `true`.
    pub approved: Option<bool>,
}

/// Partial update of a complaint's detail fields.
///
/// `None` fields are left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ComplaintUpdate {
    pub source: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub reason: Option<String>,
    pub fca_complaint: Option<bool>,
    pub fca_rationale: Option<String>,
    pub vulnerability_flag: Option<bool>,
    pub vulnerability_notes: Option<String>,
    pub is_escalated: Option<bool>,
}

/// A command represents operator intent as data only.
///
/// Commands are the only way to request lifecycle changes. One variant
/// exists per exposed transition; entity lookups (manager, handler,
/// existing redress row) happen before the command is built so the state
/// machine stays pure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Send the acknowledgement. No-op outside `new`/`reopened`.
    Acknowledge,
    /// Begin the investigation. No-op outside `new`/`acknowledged`/`reopened`.
    StartInvestigation,
    /// Draft the response. No-op when already drafted or outside the
    /// forward path.
    DraftResponse,
    /// Record (or re-record) the complaint's outcome.
    RecordOutcome {
        /// The decision category.
        outcome: OutcomeType,
        /// The rationale supporting the decision.
        rationale: Option<String>,
        /// Internal notes.
        notes: Option<String>,
    },
    /// Issue the final response. Requires a recorded outcome.
    IssueFinalResponse,
    /// Close the complaint. Requires an outcome and an issued final
    /// response.
    Close {
        /// Override for the closure timestamp.
        closed_at: Option<OffsetDateTime>,
        /// Free-text closure comment.
        comment: Option<String>,
    },
    /// Close as non-reportable. Administrative override; bypasses the
    /// outcome/final-response preconditions.
    CloseNonReportable {
        /// Override for the closure timestamp.
        closed_at: Option<OffsetDateTime>,
        /// Free-text closure comment.
        comment: Option<String>,
    },
    /// Escalate to a complaints manager, reassigning the case to them.
    Escalate {
        /// The escalation target (must be an active complaints manager).
        manager: User,
    },
    /// Reopen the complaint.
    Reopen {
        /// Why the complaint is being reopened.
        reason: Option<String>,
    },
    /// Refer the complaint to the Financial Ombudsman Service.
    /// Auto-reopens a closed complaint first.
    ReferToFos {
        /// The FOS case reference.
        fos_reference: String,
        /// Override for the referral timestamp.
        fos_referred_at: Option<OffsetDateTime>,
    },
    /// Assign a handler to the complaint.
    AssignHandler {
        /// The user to assign.
        handler: User,
    },
    /// Add a redress payment.
    AddRedress {
        /// The payment fields.
        input: RedressInput,
    },
    /// Update an existing redress payment.
    UpdateRedress {
        /// The payment as currently persisted.
        payment: RedressPayment,
        /// The fields to change.
        changes: RedressUpdate,
    },
    /// Update the complaint's detail fields.
    UpdateDetails {
        /// The fields to change.
        changes: ComplaintUpdate,
    },
    /// Log a communication.
    AddCommunication {
        channel: CommunicationChannel,
        direction: CommunicationDirection,
        summary: String,
        occurred_at: OffsetDateTime,
        /// Whether this communication carries the final response.
        is_final_response: bool,
    },
    /// Add a task.
    AddTask {
        title: String,
        description: Option<String>,
        due_date: Option<OffsetDateTime>,
        assigned_to_id: Option<i64>,
        is_checklist: bool,
    },
    /// Record a detail-view access in the event log.
    RecordAccess,
}

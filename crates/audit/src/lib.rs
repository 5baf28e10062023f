// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::OffsetDateTime;

use casetrack_domain::{ComplaintStatus, DomainError};

/// Maximum persisted length of an event description.
///
/// Longer descriptions (e.g. close comments, communication summaries) are
/// truncated at this bound before the event is written.
pub const MAX_EVENT_DESCRIPTION: usize = 240;

/// The type of a lifecycle event.
///
/// Every mutating transition appends exactly one event of its matching
/// type; breach-history and secondary events are additional, never
/// replacements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    /// The complaint was created.
    Created,
    /// Acknowledgement was sent.
    Acknowledged,
    /// Investigation started.
    InvestigationStarted,
    /// A response was drafted.
    ResponseDrafted,
    /// An outcome was recorded (or re-recorded).
    OutcomeRecorded,
    /// The final response was issued.
    FinalResponseIssued,
    /// The complaint was closed.
    Closed,
    /// The complaint was closed as non-reportable.
    ClosedNonReportable,
    /// The complaint was escalated to a manager.
    Escalated,
    /// The escalation flag was toggled via an update.
    EscalationUpdated,
    /// The complaint was reopened.
    Reopened,
    /// A handler was assigned.
    Assigned,
    /// A redress payment was added.
    RedressAdded,
    /// A redress payment was updated.
    RedressUpdated,
    /// The acknowledgement deadline was breached; recorded before the
    /// live flag is cleared.
    AckBreachRecorded,
    /// The final-response deadline was breached; recorded before the
    /// live flag is cleared.
    FinalBreachRecorded,
    /// The complaint was referred to the Financial Ombudsman Service.
    FosReferred,
    /// The category changed after the final response was issued.
    CategoryChangedAfterFinal,
    /// Complaint details were updated.
    Updated,
    /// A communication was logged.
    CommunicationAdded,
    /// A task was added.
    TaskAdded,
    /// The complaint detail view was accessed.
    Accessed,
}

impl EventType {
    /// Converts this event type to its persisted string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Acknowledged => "acknowledged",
            Self::InvestigationStarted => "investigation_started",
            Self::ResponseDrafted => "response_drafted",
            Self::OutcomeRecorded => "outcome_recorded",
            Self::FinalResponseIssued => "final_response_issued",
            Self::Closed => "closed",
            Self::ClosedNonReportable => "closed_non_reportable",
            Self::Escalated => "escalated",
            Self::EscalationUpdated => "escalation_updated",
            Self::Reopened => "reopened",
            Self::Assigned => "assigned",
            Self::RedressAdded => "redress_added",
            Self::RedressUpdated => "redress_updated",
            Self::AckBreachRecorded => "ack_breach_recorded",
            Self::FinalBreachRecorded => "final_breach_recorded",
            Self::FosReferred => "fos_referred",
            Self::CategoryChangedAfterFinal => "category_changed_after_final",
            Self::Updated => "updated",
            Self::CommunicationAdded => "communication_added",
            Self::TaskAdded => "task_added",
            Self::Accessed => "accessed",
        }
    }
}

impl FromStr for EventType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "created" => Ok(Self::Created),
            "acknowledged" => Ok(Self::Acknowledged),
            "investigation_started" => Ok(Self::InvestigationStarted),
            "response_drafted" => Ok(Self::ResponseDrafted),
            "outcome_recorded" => Ok(Self::OutcomeRecorded),
            "final_response_issued" => Ok(Self::FinalResponseIssued),
            "closed" => Ok(Self::Closed),
            "closed_non_reportable" => Ok(Self::ClosedNonReportable),
            "escalated" => Ok(Self::Escalated),
            "escalation_updated" => Ok(Self::EscalationUpdated),
            "reopened" => Ok(Self::Reopened),
            "assigned" => Ok(Self::Assigned),
            "redress_added" => Ok(Self::RedressAdded),
            "redress_updated" => Ok(Self::RedressUpdated),
            "ack_breach_recorded" => Ok(Self::AckBreachRecorded),
            "final_breach_recorded" => Ok(Self::FinalBreachRecorded),
            "fos_referred" => Ok(Self::FosReferred),
            "category_changed_after_final" => Ok(Self::CategoryChangedAfterFinal),
            "updated" => Ok(Self::Updated),
            "communication_added" => Ok(Self::CommunicationAdded),
            "task_added" => Ok(Self::TaskAdded),
            "accessed" => Ok(Self::Accessed),
            _ => Err(DomainError::InvalidEventType(s.to_string())),
        }
    }
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An immutable, timestamped record of one lifecycle action.
///
/// Events are append-only: once written they are never updated or
/// deleted, except via cascade when the parent complaint is deleted by
/// the administrative override. Each event captures:
/// - what happened (`event_type`, `description`)
/// - who did it (`created_by_id`, `None` for system-generated events)
/// - when (`created_at`)
/// - the lifecycle state around the transition (`status_before`,
///   `status_after`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseEvent {
    /// The type of event.
    pub event_type: EventType,
    /// Human-readable description, truncated to [`MAX_EVENT_DESCRIPTION`].
    pub description: String,
    /// The acting user, if any.
    pub created_by_id: Option<i64>,
    /// When the event occurred.
    pub created_at: OffsetDateTime,
    /// Lifecycle state before the transition.
    pub status_before: ComplaintStatus,
    /// Lifecycle state after the transition.
    pub status_after: ComplaintStatus,
}

impl CaseEvent {
    /// Creates a new `CaseEvent`, truncating the description to the
    /// persisted bound.
    ///
    /// Once created, an event is immutable.
    ///
    /// # Arguments
    ///
    /// * `event_type` - The type of event
    /// * `description` - What happened, in plain language
    /// * `created_by_id` - The acting user (`None` for system events)
    /// * `created_at` - When the event occurred
    /// * `status_before` - Lifecycle state before the transition
    /// * `status_after` - Lifecycle state after the transition
    #[must_use]
    pub fn new(
        event_type: EventType,
        description: &str,
        created_by_id: Option<i64>,
        created_at: OffsetDateTime,
        status_before: ComplaintStatus,
        status_after: ComplaintStatus,
    ) -> Self {
        Self {
            event_type,
            description: description.chars().take(MAX_EVENT_DESCRIPTION).collect(),
            created_by_id,
            created_at,
            status_before,
            status_after,
        }
    }
}

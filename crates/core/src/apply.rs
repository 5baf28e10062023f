// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::OffsetDateTime;

use casetrack_audit::{CaseEvent, EventType};
use casetrack_domain::{
    CaseReference, Communication, CommunicationChannel, CommunicationDirection, Complaint,
    ComplaintStatus, DomainError, Outcome, OutcomeType, RedressPayment, RedressPaymentStatus,
    SlaConfig, Task, TaskStatus, User, UserRole, breach_flags, compute_due_dates,
    forces_vulnerability_flag, validate_category_reason, validate_non_blank, validate_redress,
};

use crate::command::{Command, ComplaintIntake, ComplaintUpdate, RedressInput, RedressUpdate};
use crate::error::CoreError;
use crate::state::{ActingUser, CaseState, OpenResult, SideEffect, TransitionResult};

/// Builds an event attributed to the acting user.
fn user_event(
    event_type: EventType,
    description: &str,
    actor: &ActingUser,
    now: OffsetDateTime,
    before: ComplaintStatus,
    after: ComplaintStatus,
) -> CaseEvent {
    CaseEvent::new(
        event_type,
        description,
        Some(actor.user_id),
        now,
        before,
        after,
    )
}

/// Builds a system-generated event (no acting user).
fn system_event(
    event_type: EventType,
    description: &str,
    now: OffsetDateTime,
    status: ComplaintStatus,
) -> CaseEvent {
    CaseEvent::new(event_type, description, None, now, status, status)
}

/// Opens a new complaint from its intake fields.
///
/// The reference must already be allocated and the SLA windows are
/// applied here, once; due dates are never recomputed after creation.
/// The "Vulnerability and Customer Treatment" category forces the
/// vulnerability flag; "Other / Unclassified" requires a non-blank
/// reason.
///
/// # Arguments
///
/// * `intake` - The caller-supplied complaint fields
/// * `reference` - The freshly allocated case reference
/// * `config` - The configured SLA windows
/// * `actor` - The acting user
/// * `now` - The creation instant
///
/// # Errors
///
/// Returns an error if the intake violates a category rule or date
/// arithmetic overflows.
pub fn open_complaint(
    intake: ComplaintIntake,
    reference: CaseReference,
    config: &SlaConfig,
    actor: &ActingUser,
    now: OffsetDateTime,
) -> Result<OpenResult, CoreError> {
    validate_category_reason(&intake.category, intake.reason.as_deref())?;

    let due = compute_due_dates(intake.received_at, config)?;
    let vulnerability_flag: bool =
        intake.vulnerability_flag || forces_vulnerability_flag(&intake.category);

    let complaint = Complaint {
        complaint_id: None,
        reference,
        status: ComplaintStatus::New,
        source: intake.source,
        received_at: intake.received_at,
        description: intake.description,
        category: intake.category,
        reason: intake.reason,
        fca_complaint: intake.fca_complaint,
        fca_rationale: intake.fca_rationale,
        vulnerability_flag,
        vulnerability_notes: intake.vulnerability_notes,
        non_reportable: false,
        ack_due_at: due.ack_due_at,
        final_due_at: due.final_due_at,
        acknowledged_at: None,
        final_response_at: None,
        closed_at: None,
        ack_breached: false,
        final_breached: false,
        is_escalated: false,
        fos_complaint: false,
        fos_reference: None,
        fos_referred_at: None,
        assigned_handler_id: None,
        reopened_from_id: None,
    };

    let event = user_event(
        EventType::Created,
        &format!("Complaint created with ref {reference}"),
        actor,
        now,
        ComplaintStatus::New,
        ComplaintStatus::New,
    );

    Ok(OpenResult { complaint, event })
}

/// Applies a lifecycle command to a complaint, producing the updated
/// complaint and the events to append.
///
/// The state machine is deliberately permissive: operations invoked from
/// an unexpected source state are silent no-ops (empty event list,
/// complaint unchanged) rather than errors. Only the outcome and
/// final-response preconditions, the FOS duplicate-referral rule, the
/// escalation-target rule, and the assignment capability rules are hard
/// guards.
///
/// Pure: no I/O. The persistence layer commits the result atomically.
///
/// # Arguments
///
/// * `state` - The complaint and its recorded outcome, as persisted
/// * `command` - The requested transition
/// * `actor` - The acting user
/// * `now` - The transition instant
///
/// # Errors
///
/// Returns a typed error and leaves the complaint untouched if a guard
/// fails; no partial mutation is possible.
pub fn apply(
    state: &CaseState,
    command: Command,
    actor: &ActingUser,
    now: OffsetDateTime,
) -> Result<TransitionResult, CoreError> {
    match command {
        Command::Acknowledge => Ok(acknowledge(state, actor, now)),
        Command::StartInvestigation => Ok(start_investigation(state, actor, now)),
        Command::DraftResponse => Ok(draft_response(state, actor, now)),
        Command::RecordOutcome {
            outcome,
            rationale,
            notes,
        } => Ok(record_outcome(state, outcome, rationale, notes, actor, now)),
        Command::IssueFinalResponse => issue_final_response(state, actor, now),
        Command::Close { closed_at, comment } => close(state, closed_at, comment, actor, now),
        Command::CloseNonReportable { closed_at, comment } => {
            Ok(close_non_reportable(state, closed_at, comment, actor, now))
        }
        Command::Escalate { manager } => escalate(state, &manager, actor, now),
        Command::Reopen { reason } => Ok(reopen(state, reason, actor, now)),
        Command::ReferToFos {
            fos_reference,
            fos_referred_at,
        } => refer_to_fos(state, fos_reference, fos_referred_at, actor, now),
        Command::AssignHandler { handler } => assign_handler(state, &handler, actor, now),
        Command::AddRedress { input } => add_redress(state, input, actor, now),
        Command::UpdateRedress { payment, changes } => {
            update_redress(state, payment, changes, actor, now)
        }
        Command::UpdateDetails { changes } => update_details(state, changes, actor, now),
        Command::AddCommunication {
            channel,
            direction,
            summary,
            occurred_at,
            is_final_response,
        } => add_communication(
            state,
            channel,
            direction,
            summary,
            occurred_at,
            is_final_response,
            actor,
            now,
        ),
        Command::AddTask {
            title,
            description,
            due_date,
            assigned_to_id,
            is_checklist,
        } => add_task(
            state,
            title,
            description,
            due_date,
            assigned_to_id,
            is_checklist,
            actor,
            now,
        ),
        Command::RecordAccess => Ok(record_access(state, actor, now)),
    }
}

fn acknowledge(state: &CaseState, actor: &ActingUser, now: OffsetDateTime) -> TransitionResult {
    let complaint = state.complaint.clone();
    if !matches!(
        complaint.status,
        ComplaintStatus::New | ComplaintStatus::Reopened
    ) {
        return TransitionResult::noop(complaint);
    }

    let before: ComplaintStatus = complaint.status;
    let mut events: Vec<CaseEvent> = Vec::new();

    // The breach is preserved in history before the live flag resets.
    if breach_flags(&complaint, now).ack_breached {
        events.push(system_event(
            EventType::AckBreachRecorded,
            "Acknowledgement SLA breached before acknowledgement was sent",
            now,
            before,
        ));
    }

    let mut updated: Complaint = complaint;
    updated.status = ComplaintStatus::Acknowledged;
    updated.acknowledged_at = Some(now);
    updated.ack_breached = false;

    events.push(user_event(
        EventType::Acknowledged,
        "Acknowledgement sent",
        actor,
        now,
        before,
        updated.status,
    ));

    TransitionResult {
        complaint: updated,
        events,
        side_effect: SideEffect::None,
    }
}

fn start_investigation(
    state: &CaseState,
    actor: &ActingUser,
    now: OffsetDateTime,
) -> TransitionResult {
    let complaint = state.complaint.clone();
    if !matches!(
        complaint.status,
        ComplaintStatus::New | ComplaintStatus::Acknowledged | ComplaintStatus::Reopened
    ) {
        return TransitionResult::noop(complaint);
    }

    let before: ComplaintStatus = complaint.status;
    let mut updated: Complaint = complaint;
    updated.status = ComplaintStatus::InInvestigation;

    TransitionResult {
        events: vec![user_event(
            EventType::InvestigationStarted,
            "Investigation started",
            actor,
            now,
            before,
            updated.status,
        )],
        complaint: updated,
        side_effect: SideEffect::None,
    }
}

fn draft_response(state: &CaseState, actor: &ActingUser, now: OffsetDateTime) -> TransitionResult {
    let complaint = state.complaint.clone();
    // No-op when already drafted or outside the forward path.
    if !matches!(
        complaint.status,
        ComplaintStatus::InInvestigation | ComplaintStatus::Acknowledged | ComplaintStatus::Reopened
    ) {
        return TransitionResult::noop(complaint);
    }

    let before: ComplaintStatus = complaint.status;
    let mut updated: Complaint = complaint;
    updated.status = ComplaintStatus::ResponseDrafted;

    TransitionResult {
        events: vec![user_event(
            EventType::ResponseDrafted,
            "Response drafted",
            actor,
            now,
            before,
            updated.status,
        )],
        complaint: updated,
        side_effect: SideEffect::None,
    }
}

fn record_outcome(
    state: &CaseState,
    outcome: OutcomeType,
    rationale: Option<String>,
    notes: Option<String>,
    actor: &ActingUser,
    now: OffsetDateTime,
) -> TransitionResult {
    let complaint = state.complaint.clone();
    let status: ComplaintStatus = complaint.status;

    // Idempotent upsert: re-recording replaces the decision in place.
    let upserted = Outcome {
        outcome_id: state.outcome.as_ref().and_then(|o| o.outcome_id),
        outcome,
        rationale,
        notes,
        recorded_by_id: Some(actor.user_id),
        recorded_at: now,
    };

    TransitionResult {
        complaint,
        events: vec![user_event(
            EventType::OutcomeRecorded,
            &format!("Outcome set to {outcome}"),
            actor,
            now,
            status,
            status,
        )],
        side_effect: SideEffect::UpsertOutcome(upserted),
    }
}

fn issue_final_response(
    state: &CaseState,
    actor: &ActingUser,
    now: OffsetDateTime,
) -> Result<TransitionResult, CoreError> {
    if state.outcome.is_none() {
        return Err(CoreError::PreconditionFailed {
            operation: "issue final response",
            requirement: "an outcome must be recorded first",
        });
    }

    let complaint = state.complaint.clone();
    let before: ComplaintStatus = complaint.status;
    let mut events: Vec<CaseEvent> = Vec::new();

    if breach_flags(&complaint, now).final_breached {
        events.push(system_event(
            EventType::FinalBreachRecorded,
            "Final response SLA breached before the final response was issued",
            now,
            before,
        ));
    }

    let mut updated: Complaint = complaint;
    updated.status = ComplaintStatus::FinalResponseIssued;
    updated.final_response_at = Some(now);
    updated.final_breached = false;

    events.push(user_event(
        EventType::FinalResponseIssued,
        "Final response issued",
        actor,
        now,
        before,
        updated.status,
    ));

    Ok(TransitionResult {
        complaint: updated,
        events,
        side_effect: SideEffect::None,
    })
}

fn close(
    state: &CaseState,
    closed_at: Option<OffsetDateTime>,
    comment: Option<String>,
    actor: &ActingUser,
    now: OffsetDateTime,
) -> Result<TransitionResult, CoreError> {
    if state.outcome.is_none() {
        return Err(CoreError::PreconditionFailed {
            operation: "close complaint",
            requirement: "an outcome must be recorded first",
        });
    }
    if state.complaint.final_response_at.is_none() {
        return Err(CoreError::PreconditionFailed {
            operation: "close complaint",
            requirement: "a final response must be issued first",
        });
    }

    let before: ComplaintStatus = state.complaint.status;
    let mut updated: Complaint = state.complaint.clone();
    updated.status = ComplaintStatus::Closed;
    updated.closed_at = Some(closed_at.unwrap_or(now));

    let description: String = comment.map_or_else(
        || String::from("Complaint closed"),
        |c| format!("Complaint closed: {c}"),
    );

    Ok(TransitionResult {
        events: vec![user_event(
            EventType::Closed,
            &description,
            actor,
            now,
            before,
            updated.status,
        )],
        complaint: updated,
        side_effect: SideEffect::None,
    })
}

fn close_non_reportable(
    state: &CaseState,
    closed_at: Option<OffsetDateTime>,
    comment: Option<String>,
    actor: &ActingUser,
    now: OffsetDateTime,
) -> TransitionResult {
    // Administrative override: intentionally bypasses the outcome and
    // final-response preconditions.
    let before: ComplaintStatus = state.complaint.status;
    let mut updated: Complaint = state.complaint.clone();
    updated.non_reportable = true;
    updated.status = ComplaintStatus::Closed;
    updated.closed_at = Some(closed_at.unwrap_or(now));

    let description: String = comment.map_or_else(
        || String::from("Closed as non-reportable"),
        |c| format!("Closed as non-reportable: {c}"),
    );

    TransitionResult {
        events: vec![user_event(
            EventType::ClosedNonReportable,
            &description,
            actor,
            now,
            before,
            updated.status,
        )],
        complaint: updated,
        side_effect: SideEffect::None,
    }
}

fn escalate(
    state: &CaseState,
    manager: &User,
    actor: &ActingUser,
    now: OffsetDateTime,
) -> Result<TransitionResult, CoreError> {
    let Some(manager_id) = manager.user_id else {
        return Err(CoreError::DomainViolation(
            DomainError::InvalidEscalationTarget {
                reason: String::from("target user has not been persisted"),
            },
        ));
    };
    if !manager.is_escalation_target() {
        return Err(CoreError::DomainViolation(
            DomainError::InvalidEscalationTarget {
                reason: format!("'{}' is not an active complaints manager", manager.full_name),
            },
        ));
    }

    let status: ComplaintStatus = state.complaint.status;
    let mut updated: Complaint = state.complaint.clone();
    updated.is_escalated = true;
    updated.assigned_handler_id = Some(manager_id);

    Ok(TransitionResult {
        events: vec![user_event(
            EventType::Escalated,
            &format!("Escalated to {}", manager.full_name),
            actor,
            now,
            status,
            status,
        )],
        complaint: updated,
        side_effect: SideEffect::None,
    })
}

/// Applies the reopen field changes shared by `Reopen` and the FOS
/// auto-reopen path. `received_at` and both due dates are preserved.
fn reopen_fields(complaint: &mut Complaint) {
    complaint.reopened_from_id = complaint.complaint_id;
    complaint.status = ComplaintStatus::Reopened;
    complaint.closed_at = None;
    complaint.ack_breached = false;
    complaint.final_breached = false;
}

fn reopen(
    state: &CaseState,
    reason: Option<String>,
    actor: &ActingUser,
    now: OffsetDateTime,
) -> TransitionResult {
    let before: ComplaintStatus = state.complaint.status;
    let mut updated: Complaint = state.complaint.clone();
    reopen_fields(&mut updated);

    let description: String = reason.unwrap_or_else(|| String::from("Complaint reopened"));

    TransitionResult {
        events: vec![user_event(
            EventType::Reopened,
            &description,
            actor,
            now,
            before,
            updated.status,
        )],
        complaint: updated,
        side_effect: SideEffect::None,
    }
}

fn refer_to_fos(
    state: &CaseState,
    fos_reference: String,
    fos_referred_at: Option<OffsetDateTime>,
    actor: &ActingUser,
    now: OffsetDateTime,
) -> Result<TransitionResult, CoreError> {
    if state.complaint.fos_complaint {
        return Err(CoreError::DomainViolation(DomainError::FosAlreadyReferred {
            fos_reference: state
                .complaint
                .fos_reference
                .clone()
                .unwrap_or_default(),
        }));
    }
    validate_non_blank("fos_reference", &fos_reference)?;

    let before: ComplaintStatus = state.complaint.status;
    let mut updated: Complaint = state.complaint.clone();
    let mut events: Vec<CaseEvent> = Vec::new();

    // A closed complaint re-enters the lifecycle before the referral.
    if updated.is_closed() {
        reopen_fields(&mut updated);
        events.push(user_event(
            EventType::Reopened,
            "Reopened for FOS referral",
            actor,
            now,
            before,
            updated.status,
        ));
    }

    updated.fos_complaint = true;
    updated.fos_reference = Some(fos_reference.clone());
    updated.fos_referred_at = Some(fos_referred_at.unwrap_or(now));

    events.push(user_event(
        EventType::FosReferred,
        &format!("Referred to FOS under reference {fos_reference}"),
        actor,
        now,
        updated.status,
        updated.status,
    ));

    Ok(TransitionResult {
        complaint: updated,
        events,
        side_effect: SideEffect::None,
    })
}

fn assign_handler(
    state: &CaseState,
    handler: &User,
    actor: &ActingUser,
    now: OffsetDateTime,
) -> Result<TransitionResult, CoreError> {
    let Some(handler_id) = handler.user_id else {
        return Err(CoreError::PreconditionFailed {
            operation: "assign handler",
            requirement: "the handler must be a persisted user",
        });
    };

    match actor.role {
        UserRole::Admin | UserRole::Reviewer | UserRole::ComplaintsManager => {}
        UserRole::ComplaintsHandler => {
            if state.complaint.assigned_handler_id.is_some() {
                return Err(CoreError::Unauthorized {
                    action: "assign handler",
                    reason: String::from("complaint is already assigned"),
                });
            }
            if handler_id != actor.user_id {
                return Err(CoreError::Unauthorized {
                    action: "assign handler",
                    reason: String::from("handlers may only self-assign"),
                });
            }
        }
        UserRole::ReadOnly => {
            return Err(CoreError::Unauthorized {
                action: "assign handler",
                reason: String::from("read-only users cannot assign"),
            });
        }
    }

    let status: ComplaintStatus = state.complaint.status;
    let mut updated: Complaint = state.complaint.clone();
    updated.assigned_handler_id = Some(handler_id);

    Ok(TransitionResult {
        events: vec![user_event(
            EventType::Assigned,
            &format!("Assigned to {}", handler.full_name),
            actor,
            now,
            status,
            status,
        )],
        complaint: updated,
        side_effect: SideEffect::None,
    })
}

fn add_redress(
    state: &CaseState,
    input: RedressInput,
    actor: &ActingUser,
    now: OffsetDateTime,
) -> Result<TransitionResult, CoreError> {
    validate_redress(
        input.payment_type,
        input.amount,
        input.rationale.as_deref(),
        input.action_description.as_deref(),
    )?;

    // Record-only status: the requested status/approved are not honored
    // because no separate authorisation workflow exists for redress.
    let payment = RedressPayment {
        redress_id: None,
        outcome_id: input.outcome_id,
        payment_type: input.payment_type,
        amount: input.amount,
        status: RedressPaymentStatus::Authorised,
        approved: true,
        rationale: input.rationale,
        action_description: input.action_description,
        action_status: input.action_status,
        notes: input.notes,
        paid_at: None,
        created_at: now,
    };

    let description: String = payment.amount.map_or_else(
        || format!("Redress added ({})", payment.payment_type),
        |amount| format!("Redress added: {amount} ({})", payment.payment_type),
    );

    let status: ComplaintStatus = state.complaint.status;
    Ok(TransitionResult {
        complaint: state.complaint.clone(),
        events: vec![user_event(
            EventType::RedressAdded,
            &description,
            actor,
            now,
            status,
            status,
        )],
        side_effect: SideEffect::AddRedress(payment),
    })
}

fn update_redress(
    state: &CaseState,
    payment: RedressPayment,
    changes: RedressUpdate,
    actor: &ActingUser,
    now: OffsetDateTime,
) -> Result<TransitionResult, CoreError> {
    let mut updated_payment: RedressPayment = payment;
    if let Some(amount) = changes.amount {
        updated_payment.amount = Some(amount);
    }
    if let Some(rationale) = changes.rationale {
        updated_payment.rationale = Some(rationale);
    }
    if let Some(action_description) = changes.action_description {
        updated_payment.action_description = Some(action_description);
    }
    if let Some(action_status) = changes.action_status {
        updated_payment.action_status = action_status;
    }
    if let Some(notes) = changes.notes {
        updated_payment.notes = Some(notes);
    }
    if let Some(paid_at) = changes.paid_at {
        updated_payment.paid_at = Some(paid_at);
    }
    // Record-only status, as on create.
    updated_payment.status = RedressPaymentStatus::Authorised;
    updated_payment.approved = true;

    if !updated_payment.payment_type.is_monetary()
        && updated_payment
            .action_description
            .as_deref()
            .is_none_or(|d| d.trim().is_empty())
    {
        return Err(CoreError::DomainViolation(
            DomainError::ActionDescriptionRequired {
                payment_type: updated_payment.payment_type,
            },
        ));
    }

    let status: ComplaintStatus = state.complaint.status;
    Ok(TransitionResult {
        complaint: state.complaint.clone(),
        events: vec![user_event(
            EventType::RedressUpdated,
            &format!(
                "Redress updated (status={}, action_status={})",
                updated_payment.status, updated_payment.action_status
            ),
            actor,
            now,
            status,
            status,
        )],
        side_effect: SideEffect::UpdateRedress(updated_payment),
    })
}

fn update_details(
    state: &CaseState,
    changes: ComplaintUpdate,
    actor: &ActingUser,
    now: OffsetDateTime,
) -> Result<TransitionResult, CoreError> {
    let before: ComplaintStatus = state.complaint.status;
    let original_category: String = state.complaint.category.clone();
    let original_escalated: bool = state.complaint.is_escalated;

    let mut updated: Complaint = state.complaint.clone();
    if let Some(source) = changes.source {
        updated.source = source;
    }
    if let Some(description) = changes.description {
        updated.description = description;
    }
    if let Some(category) = changes.category {
        updated.category = category;
    }
    if let Some(reason) = changes.reason {
        updated.reason = Some(reason);
    }
    if let Some(fca_complaint) = changes.fca_complaint {
        updated.fca_complaint = fca_complaint;
    }
    if let Some(fca_rationale) = changes.fca_rationale {
        updated.fca_rationale = Some(fca_rationale);
    }
    if let Some(vulnerability_flag) = changes.vulnerability_flag {
        updated.vulnerability_flag = vulnerability_flag;
    }
    if let Some(vulnerability_notes) = changes.vulnerability_notes {
        updated.vulnerability_notes = Some(vulnerability_notes);
    }
    if let Some(is_escalated) = changes.is_escalated {
        updated.is_escalated = is_escalated;
    }

    validate_category_reason(&updated.category, updated.reason.as_deref())?;
    if forces_vulnerability_flag(&updated.category) {
        updated.vulnerability_flag = true;
    }

    let mut events: Vec<CaseEvent> = Vec::new();
    if updated.category != original_category && before.is_post_final() {
        events.push(user_event(
            EventType::CategoryChangedAfterFinal,
            &format!(
                "Category changed from {original_category} to {} after final response",
                updated.category
            ),
            actor,
            now,
            before,
            before,
        ));
    } else {
        events.push(user_event(
            EventType::Updated,
            "Complaint updated",
            actor,
            now,
            before,
            before,
        ));
    }
    if updated.is_escalated != original_escalated {
        let description: &str = if updated.is_escalated {
            "Marked as escalated"
        } else {
            "Escalation removed"
        };
        events.push(user_event(
            EventType::EscalationUpdated,
            description,
            actor,
            now,
            before,
            before,
        ));
    }

    Ok(TransitionResult {
        complaint: updated,
        events,
        side_effect: SideEffect::None,
    })
}

#[allow(clippy::too_many_arguments)]
fn add_communication(
    state: &CaseState,
    channel: CommunicationChannel,
    direction: CommunicationDirection,
    summary: String,
    occurred_at: OffsetDateTime,
    is_final_response: bool,
    actor: &ActingUser,
    now: OffsetDateTime,
) -> Result<TransitionResult, CoreError> {
    validate_non_blank("summary", &summary)?;

    let communication = Communication {
        communication_id: None,
        channel,
        direction,
        summary: summary.clone(),
        occurred_at,
        is_final_response,
        user_id: Some(actor.user_id),
        created_at: now,
    };

    let status: ComplaintStatus = state.complaint.status;
    Ok(TransitionResult {
        complaint: state.complaint.clone(),
        events: vec![user_event(
            EventType::CommunicationAdded,
            &summary,
            actor,
            now,
            status,
            status,
        )],
        side_effect: SideEffect::AddCommunication(communication),
    })
}

#[allow(clippy::too_many_arguments)]
fn add_task(
    state: &CaseState,
    title: String,
    description: Option<String>,
    due_date: Option<OffsetDateTime>,
    assigned_to_id: Option<i64>,
    is_checklist: bool,
    actor: &ActingUser,
    now: OffsetDateTime,
) -> Result<TransitionResult, CoreError> {
    validate_non_blank("title", &title)?;

    let task = Task {
        task_id: None,
        title: title.clone(),
        description,
        status: TaskStatus::Open,
        due_date,
        assigned_to_id,
        is_checklist,
        created_at: now,
    };

    let status: ComplaintStatus = state.complaint.status;
    Ok(TransitionResult {
        complaint: state.complaint.clone(),
        events: vec![user_event(
            EventType::TaskAdded,
            &format!("Task added: {title}"),
            actor,
            now,
            status,
            status,
        )],
        side_effect: SideEffect::AddTask(task),
    })
}

fn record_access(state: &CaseState, actor: &ActingUser, now: OffsetDateTime) -> TransitionResult {
    let status: ComplaintStatus = state.complaint.status;
    TransitionResult {
        complaint: state.complaint.clone(),
        events: vec![user_event(
            EventType::Accessed,
            "Complaint viewed",
            actor,
            now,
            status,
            status,
        )],
        side_effect: SideEffect::None,
    }
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Complaint aggregate mutations.
//!
//! The complaint aggregate (complaint + owned children) is the unit of
//! transactional mutation: every transition commits its field changes,
//! its side-effect row, and its event appends in one transaction, or
//! none of them.

use diesel::SqliteConnection;
use diesel::prelude::*;
use time::OffsetDateTime;
use tracing::{debug, info};

use casetrack_audit::CaseEvent;
use casetrack_core::{OpenResult, SideEffect, TransitionResult};
use casetrack_domain::{
    Communication, Complainant, Complaint, Outcome, Policy, RedressPayment, Task, breach_flags,
};

use crate::data_models::{
    format_date, format_decimal, format_timestamp, format_timestamp_opt, to_flag,
};
use crate::diesel_schema::{
    case_events, complainants, complaints, communications, outcomes, policies, redress_payments,
    tasks,
};
use crate::error::PersistenceError;
use crate::queries;
use crate::sqlite::get_last_insert_rowid;

/// The rows written by a persisted transition, with their database
/// identities filled in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTransition {
    /// The complaint after the transition.
    pub complaint: Complaint,
    /// The outcome row, when the transition upserted one.
    pub outcome: Option<Outcome>,
    /// The redress row, when the transition wrote one.
    pub redress: Option<RedressPayment>,
    /// The communication row, when the transition added one.
    pub communication: Option<Communication>,
    /// The task row, when the transition added one.
    pub task: Option<Task>,
}

/// Persists a newly opened complaint with its complainant, policy, and
/// `created` event in one transaction.
///
/// A uniqueness violation on the reference column surfaces as
/// [`PersistenceError::UniqueViolation`], which the creating caller
/// treats as retryable (re-allocate, rebuild, retry).
///
/// # Errors
///
/// Returns an error if any insert fails; nothing is committed in that
/// case.
pub fn insert_complaint(
    conn: &mut SqliteConnection,
    opened: &OpenResult,
    complainant: &Complainant,
    policy: &Policy,
) -> Result<Complaint, PersistenceError> {
    let complaint = &opened.complaint;
    let received_at: String = format_timestamp(complaint.received_at)?;
    let ack_due_at: String = format_timestamp(complaint.ack_due_at)?;
    let final_due_at: String = format_timestamp(complaint.final_due_at)?;
    let date_of_birth: Option<String> = complainant.date_of_birth.map(format_date).transpose()?;

    conn.transaction::<Complaint, PersistenceError, _>(|conn| {
        diesel::insert_into(complaints::table)
            .values((
                complaints::reference.eq(complaint.reference.to_string()),
                complaints::status.eq(complaint.status.as_str()),
                complaints::source.eq(&complaint.source),
                complaints::received_at.eq(&received_at),
                complaints::description.eq(&complaint.description),
                complaints::category.eq(&complaint.category),
                complaints::reason.eq(complaint.reason.as_deref()),
                complaints::fca_complaint.eq(to_flag(complaint.fca_complaint)),
                complaints::fca_rationale.eq(complaint.fca_rationale.as_deref()),
                complaints::vulnerability_flag.eq(to_flag(complaint.vulnerability_flag)),
                complaints::vulnerability_notes.eq(complaint.vulnerability_notes.as_deref()),
                complaints::non_reportable.eq(to_flag(complaint.non_reportable)),
                complaints::ack_due_at.eq(&ack_due_at),
                complaints::final_due_at.eq(&final_due_at),
                complaints::ack_breached.eq(to_flag(complaint.ack_breached)),
                complaints::final_breached.eq(to_flag(complaint.final_breached)),
                complaints::is_escalated.eq(to_flag(complaint.is_escalated)),
                complaints::fos_complaint.eq(to_flag(complaint.fos_complaint)),
                complaints::fos_reference.eq(complaint.fos_reference.as_deref()),
                complaints::assigned_handler_id.eq(complaint.assigned_handler_id),
                complaints::reopened_from_id.eq(complaint.reopened_from_id),
            ))
            .execute(conn)?;

        let complaint_id: i64 = get_last_insert_rowid(conn)?;

        diesel::insert_into(complainants::table)
            .values((
                complainants::complaint_id.eq(complaint_id),
                complainants::full_name.eq(&complainant.full_name),
                complainants::email.eq(complainant.email.as_deref()),
                complainants::phone.eq(complainant.phone.as_deref()),
                complainants::address.eq(complainant.address.as_deref()),
                complainants::date_of_birth.eq(date_of_birth.as_deref()),
                complainants::preferred_contact_method
                    .eq(complainant.preferred_contact_method.as_deref()),
            ))
            .execute(conn)?;

        diesel::insert_into(policies::table)
            .values((
                policies::complaint_id.eq(complaint_id),
                policies::policy_number.eq(policy.policy_number.as_deref()),
                policies::insurer.eq(policy.insurer.as_deref()),
                policies::broker.eq(policy.broker.as_deref()),
                policies::product.eq(policy.product.as_deref()),
                policies::scheme.eq(policy.scheme.as_deref()),
            ))
            .execute(conn)?;

        append_event(conn, complaint_id, &opened.event)?;

        let mut persisted: Complaint = complaint.clone();
        persisted.complaint_id = Some(complaint_id);

        info!(
            complaint_id,
            reference = %persisted.reference,
            "Created complaint"
        );

        Ok(persisted)
    })
}

/// Persists a transition result atomically.
///
/// A no-op result commits nothing. Otherwise the complaint's mutable
/// fields, the side-effect row, and every event are written in one
/// transaction.
///
/// # Errors
///
/// Returns an error if the complaint has no database identity or any
/// write fails; partial application is not possible.
pub fn persist_transition(
    conn: &mut SqliteConnection,
    result: &TransitionResult,
) -> Result<PersistedTransition, PersistenceError> {
    let complaint_id: i64 = result
        .complaint
        .complaint_id
        .ok_or(PersistenceError::NotPersisted("complaint"))?;

    let mut persisted = PersistedTransition {
        complaint: result.complaint.clone(),
        outcome: None,
        redress: None,
        communication: None,
        task: None,
    };

    if result.is_noop() {
        return Ok(persisted);
    }

    conn.transaction::<(), PersistenceError, _>(|conn| {
        update_complaint_row(conn, complaint_id, &result.complaint)?;

        match &result.side_effect {
            SideEffect::None => {}
            SideEffect::UpsertOutcome(outcome) => {
                persisted.outcome = Some(upsert_outcome(conn, complaint_id, outcome)?);
            }
            SideEffect::AddRedress(payment) => {
                persisted.redress = Some(insert_redress(conn, complaint_id, payment)?);
            }
            SideEffect::UpdateRedress(payment) => {
                persisted.redress = Some(update_redress_row(conn, complaint_id, payment)?);
            }
            SideEffect::AddCommunication(communication) => {
                persisted.communication =
                    Some(insert_communication(conn, complaint_id, communication)?);
            }
            SideEffect::AddTask(task) => {
                persisted.task = Some(insert_task(conn, complaint_id, task)?);
            }
        }

        for event in &result.events {
            append_event(conn, complaint_id, event)?;
        }

        Ok(())
    })?;

    info!(
        complaint_id,
        events = result.events.len(),
        "Persisted transition"
    );

    Ok(persisted)
}

/// Recomputes and persists the live breach flags for a complaint.
///
/// This is the read-path refresh: it updates only the derived flag
/// columns (as a query/filter convenience) and never writes breach
/// history to the event log.
///
/// # Errors
///
/// Returns an error if the complaint does not exist.
pub fn refresh_breach_flags(
    conn: &mut SqliteConnection,
    complaint_id: i64,
    now: OffsetDateTime,
) -> Result<Complaint, PersistenceError> {
    let mut complaint: Complaint = queries::complaints::get_complaint(conn, complaint_id)?;
    let flags = breach_flags(&complaint, now);

    if flags.ack_breached != complaint.ack_breached
        || flags.final_breached != complaint.final_breached
    {
        diesel::update(complaints::table.filter(complaints::complaint_id.eq(complaint_id)))
            .set((
                complaints::ack_breached.eq(to_flag(flags.ack_breached)),
                complaints::final_breached.eq(to_flag(flags.final_breached)),
            ))
            .execute(conn)?;
        debug!(
            complaint_id,
            ack_breached = flags.ack_breached,
            final_breached = flags.final_breached,
            "Refreshed breach flags"
        );
    }

    complaint.ack_breached = flags.ack_breached;
    complaint.final_breached = flags.final_breached;
    Ok(complaint)
}

/// Deletes a complaint and, via foreign key cascade, all of its owned
/// children. Administrative override only.
///
/// # Errors
///
/// Returns an error if the complaint does not exist.
pub fn delete_complaint(
    conn: &mut SqliteConnection,
    complaint_id: i64,
) -> Result<(), PersistenceError> {
    let deleted: usize =
        diesel::delete(complaints::table.filter(complaints::complaint_id.eq(complaint_id)))
            .execute(conn)?;
    if deleted == 0 {
        return Err(PersistenceError::ComplaintNotFound(complaint_id));
    }
    info!(complaint_id, "Deleted complaint and cascaded children");
    Ok(())
}

/// Appends one event row. Events are append-only; no update or delete
/// path exists.
pub(crate) fn append_event(
    conn: &mut SqliteConnection,
    complaint_id: i64,
    event: &CaseEvent,
) -> Result<i64, PersistenceError> {
    let created_at: String = format_timestamp(event.created_at)?;
    diesel::insert_into(case_events::table)
        .values((
            case_events::complaint_id.eq(complaint_id),
            case_events::event_type.eq(event.event_type.as_str()),
            case_events::description.eq(&event.description),
            case_events::created_by_id.eq(event.created_by_id),
            case_events::created_at.eq(&created_at),
            case_events::status_before.eq(event.status_before.as_str()),
            case_events::status_after.eq(event.status_after.as_str()),
        ))
        .execute(conn)?;

    let event_id: i64 = get_last_insert_rowid(conn)?;
    debug!(
        event_id,
        complaint_id,
        event_type = event.event_type.as_str(),
        "Appended case event"
    );
    Ok(event_id)
}

/// Writes the complaint's mutable fields. The reference, receipt time,
/// and due dates are immutable and deliberately absent from this set.
fn update_complaint_row(
    conn: &mut SqliteConnection,
    complaint_id: i64,
    complaint: &Complaint,
) -> Result<(), PersistenceError> {
    let acknowledged_at: Option<String> = format_timestamp_opt(complaint.acknowledged_at)?;
    let final_response_at: Option<String> = format_timestamp_opt(complaint.final_response_at)?;
    let closed_at: Option<String> = format_timestamp_opt(complaint.closed_at)?;
    let fos_referred_at: Option<String> = format_timestamp_opt(complaint.fos_referred_at)?;

    diesel::update(complaints::table.filter(complaints::complaint_id.eq(complaint_id)))
        .set((
            complaints::status.eq(complaint.status.as_str()),
            complaints::source.eq(&complaint.source),
            complaints::description.eq(&complaint.description),
            complaints::category.eq(&complaint.category),
            complaints::reason.eq(complaint.reason.as_deref()),
            complaints::fca_complaint.eq(to_flag(complaint.fca_complaint)),
            complaints::fca_rationale.eq(complaint.fca_rationale.as_deref()),
            complaints::vulnerability_flag.eq(to_flag(complaint.vulnerability_flag)),
            complaints::vulnerability_notes.eq(complaint.vulnerability_notes.as_deref()),
            complaints::non_reportable.eq(to_flag(complaint.non_reportable)),
            complaints::acknowledged_at.eq(acknowledged_at),
            complaints::final_response_at.eq(final_response_at),
            complaints::closed_at.eq(closed_at),
            complaints::ack_breached.eq(to_flag(complaint.ack_breached)),
            complaints::final_breached.eq(to_flag(complaint.final_breached)),
            complaints::is_escalated.eq(to_flag(complaint.is_escalated)),
            complaints::fos_complaint.eq(to_flag(complaint.fos_complaint)),
            complaints::fos_reference.eq(complaint.fos_reference.as_deref()),
            complaints::fos_referred_at.eq(fos_referred_at),
            complaints::assigned_handler_id.eq(complaint.assigned_handler_id),
            complaints::reopened_from_id.eq(complaint.reopened_from_id),
        ))
        .execute(conn)?;
    Ok(())
}

/// Inserts or replaces the complaint's single outcome row in place.
fn upsert_outcome(
    conn: &mut SqliteConnection,
    complaint_id: i64,
    outcome: &Outcome,
) -> Result<Outcome, PersistenceError> {
    let recorded_at: String = format_timestamp(outcome.recorded_at)?;

    if let Some(outcome_id) = outcome.outcome_id {
        diesel::update(outcomes::table.filter(outcomes::outcome_id.eq(outcome_id)))
            .set((
                outcomes::outcome.eq(outcome.outcome.as_str()),
                outcomes::rationale.eq(outcome.rationale.as_deref()),
                outcomes::notes.eq(outcome.notes.as_deref()),
                outcomes::recorded_by_id.eq(outcome.recorded_by_id),
                outcomes::recorded_at.eq(&recorded_at),
            ))
            .execute(conn)?;
        Ok(outcome.clone())
    } else {
        diesel::insert_into(outcomes::table)
            .values((
                outcomes::complaint_id.eq(complaint_id),
                outcomes::outcome.eq(outcome.outcome.as_str()),
                outcomes::rationale.eq(outcome.rationale.as_deref()),
                outcomes::notes.eq(outcome.notes.as_deref()),
                outcomes::recorded_by_id.eq(outcome.recorded_by_id),
                outcomes::recorded_at.eq(&recorded_at),
            ))
            .execute(conn)?;
        let outcome_id: i64 = get_last_insert_rowid(conn)?;
        let mut persisted: Outcome = outcome.clone();
        persisted.outcome_id = Some(outcome_id);
        Ok(persisted)
    }
}

fn insert_redress(
    conn: &mut SqliteConnection,
    complaint_id: i64,
    payment: &RedressPayment,
) -> Result<RedressPayment, PersistenceError> {
    let amount: Option<String> = payment.amount.map(format_decimal);
    let paid_at: Option<String> = format_timestamp_opt(payment.paid_at)?;
    let created_at: String = format_timestamp(payment.created_at)?;

    diesel::insert_into(redress_payments::table)
        .values((
            redress_payments::complaint_id.eq(complaint_id),
            redress_payments::outcome_id.eq(payment.outcome_id),
            redress_payments::payment_type.eq(payment.payment_type.as_str()),
            redress_payments::amount.eq(amount.as_deref()),
            redress_payments::status.eq(payment.status.as_str()),
            redress_payments::approved.eq(to_flag(payment.approved)),
            redress_payments::rationale.eq(payment.rationale.as_deref()),
            redress_payments::action_description.eq(payment.action_description.as_deref()),
            redress_payments::action_status.eq(payment.action_status.as_str()),
            redress_payments::notes.eq(payment.notes.as_deref()),
            redress_payments::paid_at.eq(paid_at.as_deref()),
            redress_payments::created_at.eq(&created_at),
        ))
        .execute(conn)?;

    let redress_id: i64 = get_last_insert_rowid(conn)?;
    let mut persisted: RedressPayment = payment.clone();
    persisted.redress_id = Some(redress_id);
    Ok(persisted)
}

fn update_redress_row(
    conn: &mut SqliteConnection,
    complaint_id: i64,
    payment: &RedressPayment,
) -> Result<RedressPayment, PersistenceError> {
    let redress_id: i64 = payment
        .redress_id
        .ok_or(PersistenceError::NotPersisted("redress payment"))?;
    let amount: Option<String> = payment.amount.map(format_decimal);
    let paid_at: Option<String> = format_timestamp_opt(payment.paid_at)?;

    let updated: usize = diesel::update(
        redress_payments::table
            .filter(redress_payments::redress_id.eq(redress_id))
            .filter(redress_payments::complaint_id.eq(complaint_id)),
    )
    .set((
        redress_payments::outcome_id.eq(payment.outcome_id),
        redress_payments::amount.eq(amount.as_deref()),
        redress_payments::status.eq(payment.status.as_str()),
        redress_payments::approved.eq(to_flag(payment.approved)),
        redress_payments::rationale.eq(payment.rationale.as_deref()),
        redress_payments::action_description.eq(payment.action_description.as_deref()),
        redress_payments::action_status.eq(payment.action_status.as_str()),
        redress_payments::notes.eq(payment.notes.as_deref()),
        redress_payments::paid_at.eq(paid_at.as_deref()),
    ))
    .execute(conn)?;

    if updated == 0 {
        return Err(PersistenceError::RedressNotFound {
            complaint_id,
            redress_id,
        });
    }
    Ok(payment.clone())
}

fn insert_communication(
    conn: &mut SqliteConnection,
    complaint_id: i64,
    communication: &Communication,
) -> Result<Communication, PersistenceError> {
    let occurred_at: String = format_timestamp(communication.occurred_at)?;
    let created_at: String = format_timestamp(communication.created_at)?;

    diesel::insert_into(communications::table)
        .values((
            communications::complaint_id.eq(complaint_id),
            communications::channel.eq(communication.channel.as_str()),
            communications::direction.eq(communication.direction.as_str()),
            communications::summary.eq(&communication.summary),
            communications::occurred_at.eq(&occurred_at),
            communications::is_final_response.eq(to_flag(communication.is_final_response)),
            communications::user_id.eq(communication.user_id),
            communications::created_at.eq(&created_at),
        ))
        .execute(conn)?;

    let communication_id: i64 = get_last_insert_rowid(conn)?;
    let mut persisted: Communication = communication.clone();
    persisted.communication_id = Some(communication_id);
    Ok(persisted)
}

fn insert_task(
    conn: &mut SqliteConnection,
    complaint_id: i64,
    task: &Task,
) -> Result<Task, PersistenceError> {
    let due_date: Option<String> = format_timestamp_opt(task.due_date)?;
    let created_at: String = format_timestamp(task.created_at)?;

    diesel::insert_into(tasks::table)
        .values((
            tasks::complaint_id.eq(complaint_id),
            tasks::title.eq(&task.title),
            tasks::description.eq(task.description.as_deref()),
            tasks::status.eq(task.status.as_str()),
            tasks::due_date.eq(due_date.as_deref()),
            tasks::assigned_to_id.eq(task.assigned_to_id),
            tasks::is_checklist.eq(to_flag(task.is_checklist)),
            tasks::created_at.eq(&created_at),
        ))
        .execute(conn)?;

    let task_id: i64 = get_last_insert_rowid(conn)?;
    let mut persisted: Task = task.clone();
    persisted.task_id = Some(task_id);
    Ok(persisted)
}

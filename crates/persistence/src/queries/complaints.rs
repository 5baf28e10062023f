// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Complaint reads.

use diesel::SqliteConnection;
use diesel::prelude::*;

use casetrack_core::CaseState;
use casetrack_domain::{CaseReference, Complaint, ComplaintStatus};

use crate::data_models::{from_flag, parse_enum, parse_timestamp, parse_timestamp_opt};
use crate::diesel_schema::complaints;
use crate::error::PersistenceError;
use crate::queries::outcomes::outcome_for_complaint;

/// Diesel Queryable struct for complaint rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = complaints)]
struct ComplaintRow {
    complaint_id: i64,
    reference: String,
    status: String,
    source: String,
    received_at: String,
    description: String,
    category: String,
    reason: Option<String>,
    fca_complaint: i32,
    fca_rationale: Option<String>,
    vulnerability_flag: i32,
    vulnerability_notes: Option<String>,
    non_reportable: i32,
    ack_due_at: String,
    final_due_at: String,
    acknowledged_at: Option<String>,
    final_response_at: Option<String>,
    closed_at: Option<String>,
    ack_breached: i32,
    final_breached: i32,
    is_escalated: i32,
    fos_complaint: i32,
    fos_reference: Option<String>,
    fos_referred_at: Option<String>,
    assigned_handler_id: Option<i64>,
    reopened_from_id: Option<i64>,
}

impl ComplaintRow {
    fn into_domain(self) -> Result<Complaint, PersistenceError> {
        let reference: CaseReference = parse_enum(&self.reference)?;
        let status: ComplaintStatus = parse_enum(&self.status)?;
        Ok(Complaint {
            complaint_id: Some(self.complaint_id),
            reference,
            status,
            source: self.source,
            received_at: parse_timestamp(&self.received_at)?,
            description: self.description,
            category: self.category,
            reason: self.reason,
            fca_complaint: from_flag(self.fca_complaint),
            fca_rationale: self.fca_rationale,
            vulnerability_flag: from_flag(self.vulnerability_flag),
            vulnerability_notes: self.vulnerability_notes,
            non_reportable: from_flag(self.non_reportable),
            ack_due_at: parse_timestamp(&self.ack_due_at)?,
            final_due_at: parse_timestamp(&self.final_due_at)?,
            acknowledged_at: parse_timestamp_opt(self.acknowledged_at.as_deref())?,
            final_response_at: parse_timestamp_opt(self.final_response_at.as_deref())?,
            closed_at: parse_timestamp_opt(self.closed_at.as_deref())?,
            ack_breached: from_flag(self.ack_breached),
            final_breached: from_flag(self.final_breached),
            is_escalated: from_flag(self.is_escalated),
            fos_complaint: from_flag(self.fos_complaint),
            fos_reference: self.fos_reference,
            fos_referred_at: parse_timestamp_opt(self.fos_referred_at.as_deref())?,
            assigned_handler_id: self.assigned_handler_id,
            reopened_from_id: self.reopened_from_id,
        })
    }
}

/// Retrieves a complaint by its database identity.
///
/// # Errors
///
/// Returns an error if the complaint does not exist or a stored value
/// cannot be reconstructed.
pub fn get_complaint(
    conn: &mut SqliteConnection,
    complaint_id: i64,
) -> Result<Complaint, PersistenceError> {
    let result = complaints::table
        .filter(complaints::complaint_id.eq(complaint_id))
        .select(ComplaintRow::as_select())
        .first::<ComplaintRow>(conn);

    match result {
        Ok(row) => row.into_domain(),
        Err(diesel::result::Error::NotFound) => {
            Err(PersistenceError::ComplaintNotFound(complaint_id))
        }
        Err(e) => Err(PersistenceError::from(e)),
    }
}

/// Retrieves a complaint by its externally visible reference.
///
/// # Errors
///
/// Returns an error if no complaint carries the reference.
pub fn get_complaint_by_reference(
    conn: &mut SqliteConnection,
    reference: &str,
) -> Result<Complaint, PersistenceError> {
    let result = complaints::table
        .filter(complaints::reference.eq(reference))
        .select(ComplaintRow::as_select())
        .first::<ComplaintRow>(conn);

    match result {
        Ok(row) => row.into_domain(),
        Err(diesel::result::Error::NotFound) => {
            Err(PersistenceError::ReferenceNotFound(reference.to_string()))
        }
        Err(e) => Err(PersistenceError::from(e)),
    }
}

/// Loads the transition-evaluation slice of the aggregate: the
/// complaint and its outcome, if one is recorded.
///
/// # Errors
///
/// Returns an error if the complaint does not exist.
pub fn load_case_state(
    conn: &mut SqliteConnection,
    complaint_id: i64,
) -> Result<CaseState, PersistenceError> {
    let complaint: Complaint = get_complaint(conn, complaint_id)?;
    let outcome = outcome_for_complaint(conn, complaint_id)?;
    Ok(CaseState::new(complaint, outcome))
}

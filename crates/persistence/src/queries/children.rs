// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Reads for the complaint's one-to-one and one-to-many children.

use diesel::SqliteConnection;
use diesel::prelude::*;

use casetrack_domain::{Communication, Complainant, Policy, Task};

use crate::data_models::{from_flag, parse_date, parse_enum, parse_timestamp, parse_timestamp_opt};
use crate::diesel_schema::{complainants, communications, policies, tasks};
use crate::error::PersistenceError;

/// Diesel Queryable struct for complainant rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = complainants)]
struct ComplainantRow {
    complainant_id: i64,
    #[allow(dead_code)]
    complaint_id: i64,
    full_name: String,
    email: Option<String>,
    phone: Option<String>,
    address: Option<String>,
    date_of_birth: Option<String>,
    preferred_contact_method: Option<String>,
}

/// Diesel Queryable struct for policy rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = policies)]
struct PolicyRow {
    policy_id: i64,
    #[allow(dead_code)]
    complaint_id: i64,
    policy_number: Option<String>,
    insurer: Option<String>,
    broker: Option<String>,
    product: Option<String>,
    scheme: Option<String>,
}

/// Diesel Queryable struct for communication rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = communications)]
struct CommunicationRow {
    communication_id: i64,
    #[allow(dead_code)]
    complaint_id: i64,
    channel: String,
    direction: String,
    summary: String,
    occurred_at: String,
    is_final_response: i32,
    user_id: Option<i64>,
    created_at: String,
}

/// Diesel Queryable struct for task rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = tasks)]
struct TaskRow {
    task_id: i64,
    #[allow(dead_code)]
    complaint_id: i64,
    title: String,
    description: Option<String>,
    status: String,
    due_date: Option<String>,
    assigned_to_id: Option<i64>,
    is_checklist: i32,
    created_at: String,
}

/// Retrieves the complaint's complainant.
///
/// # Errors
///
/// Returns an error if the complaint has no complainant row.
pub fn complainant_for_complaint(
    conn: &mut SqliteConnection,
    complaint_id: i64,
) -> Result<Complainant, PersistenceError> {
    let row: ComplainantRow = complainants::table
        .filter(complainants::complaint_id.eq(complaint_id))
        .select(ComplainantRow::as_select())
        .first::<ComplainantRow>(conn)?;

    Ok(Complainant {
        complainant_id: Some(row.complainant_id),
        full_name: row.full_name,
        email: row.email,
        phone: row.phone,
        address: row.address,
        date_of_birth: row.date_of_birth.as_deref().map(parse_date).transpose()?,
        preferred_contact_method: row.preferred_contact_method,
    })
}

/// Retrieves the complaint's policy.
///
/// # Errors
///
/// Returns an error if the complaint has no policy row.
pub fn policy_for_complaint(
    conn: &mut SqliteConnection,
    complaint_id: i64,
) -> Result<Policy, PersistenceError> {
    let row: PolicyRow = policies::table
        .filter(policies::complaint_id.eq(complaint_id))
        .select(PolicyRow::as_select())
        .first::<PolicyRow>(conn)?;

    Ok(Policy {
        policy_id: Some(row.policy_id),
        policy_number: row.policy_number,
        insurer: row.insurer,
        broker: row.broker,
        product: row.product,
        scheme: row.scheme,
    })
}

/// Retrieves a complaint's communications in insertion order.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn communications_for_complaint(
    conn: &mut SqliteConnection,
    complaint_id: i64,
) -> Result<Vec<Communication>, PersistenceError> {
    let rows: Vec<CommunicationRow> = communications::table
        .filter(communications::complaint_id.eq(complaint_id))
        .order(communications::communication_id.asc())
        .select(CommunicationRow::as_select())
        .load::<CommunicationRow>(conn)?;

    rows.into_iter()
        .map(|row| {
            Ok(Communication {
                communication_id: Some(row.communication_id),
                channel: parse_enum(&row.channel)?,
                direction: parse_enum(&row.direction)?,
                summary: row.summary,
                occurred_at: parse_timestamp(&row.occurred_at)?,
                is_final_response: from_flag(row.is_final_response),
                user_id: row.user_id,
                created_at: parse_timestamp(&row.created_at)?,
            })
        })
        .collect()
}

/// Retrieves a complaint's tasks in insertion order.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn tasks_for_complaint(
    conn: &mut SqliteConnection,
    complaint_id: i64,
) -> Result<Vec<Task>, PersistenceError> {
    let rows: Vec<TaskRow> = tasks::table
        .filter(tasks::complaint_id.eq(complaint_id))
        .order(tasks::task_id.asc())
        .select(TaskRow::as_select())
        .load::<TaskRow>(conn)?;

    rows.into_iter()
        .map(|row| {
            Ok(Task {
                task_id: Some(row.task_id),
                title: row.title,
                description: row.description,
                status: parse_enum(&row.status)?,
                due_date: parse_timestamp_opt(row.due_date.as_deref())?,
                assigned_to_id: row.assigned_to_id,
                is_checklist: from_flag(row.is_checklist),
                created_at: parse_timestamp(&row.created_at)?,
            })
        })
        .collect()
}

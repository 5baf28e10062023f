// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Redress payment reads.

use diesel::SqliteConnection;
use diesel::prelude::*;

use casetrack_domain::RedressPayment;

use crate::data_models::{from_flag, parse_decimal, parse_enum, parse_timestamp, parse_timestamp_opt};
use crate::diesel_schema::redress_payments;
use crate::error::PersistenceError;

/// Diesel Queryable struct for redress rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = redress_payments)]
struct RedressRow {
    redress_id: i64,
    #[allow(dead_code)]
    complaint_id: i64,
    outcome_id: Option<i64>,
    payment_type: String,
    amount: Option<String>,
    status: String,
    approved: i32,
    rationale: Option<String>,
    action_description: Option<String>,
    action_status: String,
    notes: Option<String>,
    paid_at: Option<String>,
    created_at: String,
}

impl RedressRow {
    fn into_domain(self) -> Result<RedressPayment, PersistenceError> {
        Ok(RedressPayment {
            redress_id: Some(self.redress_id),
            outcome_id: self.outcome_id,
            payment_type: parse_enum(&self.payment_type)?,
            amount: self.amount.as_deref().map(parse_decimal).transpose()?,
            status: parse_enum(&self.status)?,
            approved: from_flag(self.approved),
            rationale: self.rationale,
            action_description: self.action_description,
            action_status: parse_enum(&self.action_status)?,
            notes: self.notes,
            paid_at: parse_timestamp_opt(self.paid_at.as_deref())?,
            created_at: parse_timestamp(&self.created_at)?,
        })
    }
}

/// Retrieves a redress payment, verifying it belongs to the complaint.
///
/// # Errors
///
/// Returns an error if no such payment exists on the complaint.
pub fn get_redress(
    conn: &mut SqliteConnection,
    complaint_id: i64,
    redress_id: i64,
) -> Result<RedressPayment, PersistenceError> {
    let result = redress_payments::table
        .filter(redress_payments::redress_id.eq(redress_id))
        .filter(redress_payments::complaint_id.eq(complaint_id))
        .select(RedressRow::as_select())
        .first::<RedressRow>(conn);

    match result {
        Ok(row) => row.into_domain(),
        Err(diesel::result::Error::NotFound) => Err(PersistenceError::RedressNotFound {
            complaint_id,
            redress_id,
        }),
        Err(e) => Err(PersistenceError::from(e)),
    }
}

/// Retrieves every redress payment on a complaint, in insertion order.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn redress_for_complaint(
    conn: &mut SqliteConnection,
    complaint_id: i64,
) -> Result<Vec<RedressPayment>, PersistenceError> {
    let rows: Vec<RedressRow> = redress_payments::table
        .filter(redress_payments::complaint_id.eq(complaint_id))
        .order(redress_payments::redress_id.asc())
        .select(RedressRow::as_select())
        .load::<RedressRow>(conn)?;

    rows.into_iter().map(RedressRow::into_domain).collect()
}

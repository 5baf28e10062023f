// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Outcome reads.

use diesel::SqliteConnection;
use diesel::prelude::*;

use casetrack_domain::Outcome;

use crate::data_models::{parse_enum, parse_timestamp};
use crate::diesel_schema::outcomes;
use crate::error::PersistenceError;

/// Diesel Queryable struct for outcome rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = outcomes)]
struct OutcomeRow {
    outcome_id: i64,
    #[allow(dead_code)]
    complaint_id: i64,
    outcome: String,
    rationale: Option<String>,
    notes: Option<String>,
    recorded_by_id: Option<i64>,
    recorded_at: String,
}

impl OutcomeRow {
    fn into_domain(self) -> Result<Outcome, PersistenceError> {
        Ok(Outcome {
            outcome_id: Some(self.outcome_id),
            outcome: parse_enum(&self.outcome)?,
            rationale: self.rationale,
            notes: self.notes,
            recorded_by_id: self.recorded_by_id,
            recorded_at: parse_timestamp(&self.recorded_at)?,
        })
    }
}

/// Retrieves a complaint's outcome, if one has been recorded.
///
/// # Errors
///
/// Returns an error if the query fails or a stored value cannot be
/// reconstructed.
pub fn outcome_for_complaint(
    conn: &mut SqliteConnection,
    complaint_id: i64,
) -> Result<Option<Outcome>, PersistenceError> {
    let result = outcomes::table
        .filter(outcomes::complaint_id.eq(complaint_id))
        .select(OutcomeRow::as_select())
        .first::<OutcomeRow>(conn);

    match result {
        Ok(row) => Ok(Some(row.into_domain()?)),
        Err(diesel::result::Error::NotFound) => Ok(None),
        Err(e) => Err(PersistenceError::from(e)),
    }
}

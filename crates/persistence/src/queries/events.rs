// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Event log reads.

use diesel::SqliteConnection;
use diesel::prelude::*;

use casetrack_audit::CaseEvent;

use crate::data_models::{StoredEvent, parse_enum, parse_timestamp};
use crate::diesel_schema::case_events;
use crate::error::PersistenceError;

/// Diesel Queryable struct for event rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = case_events)]
struct CaseEventRow {
    event_id: i64,
    complaint_id: i64,
    event_type: String,
    description: String,
    created_by_id: Option<i64>,
    created_at: String,
    status_before: String,
    status_after: String,
}

impl CaseEventRow {
    fn into_stored(self) -> Result<StoredEvent, PersistenceError> {
        Ok(StoredEvent {
            event_id: self.event_id,
            complaint_id: self.complaint_id,
            event: CaseEvent {
                event_type: parse_enum(&self.event_type)?,
                description: self.description,
                created_by_id: self.created_by_id,
                created_at: parse_timestamp(&self.created_at)?,
                status_before: parse_enum(&self.status_before)?,
                status_after: parse_enum(&self.status_after)?,
            },
        })
    }
}

/// Retrieves every event for a complaint, ordered by creation
/// (insertion) order.
///
/// # Errors
///
/// Returns an error if the query fails or a stored value cannot be
/// reconstructed.
pub fn events_for_complaint(
    conn: &mut SqliteConnection,
    complaint_id: i64,
) -> Result<Vec<StoredEvent>, PersistenceError> {
    let rows: Vec<CaseEventRow> = case_events::table
        .filter(case_events::complaint_id.eq(complaint_id))
        .order(case_events::event_id.asc())
        .select(CaseEventRow::as_select())
        .load::<CaseEventRow>(conn)?;

    rows.into_iter().map(CaseEventRow::into_stored).collect()
}

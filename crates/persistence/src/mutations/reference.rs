// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The concurrency-safe case reference allocator.
//!
//! One counter row exists per calendar year. Allocation is a single
//! upsert-and-increment statement with a `RETURNING` clause: one atomic
//! read-modify-write at the storage layer, never a separate read then
//! write. Sequences within a year strictly increase; a failed creation
//! attempt burns its number, so gaps are allowed.

use diesel::prelude::*;
use diesel::SqliteConnection;
use tracing::debug;

use casetrack_domain::CaseReference;

use crate::diesel_schema::reference_counters;
use crate::error::PersistenceError;

/// How many times a creating caller may retry allocation before the
/// failure surfaces as a conflict.
pub const MAX_REFERENCE_ATTEMPTS: u32 = 3;

/// Allocates the next case reference for a year.
///
/// Concurrency-safe across arbitrarily many simultaneous callers: the
/// increment is one atomic statement, serialized by the storage layer
/// independent of any complaint-row locking. Never returns the same
/// reference twice.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `year` - The calendar year to allocate within
///
/// # Errors
///
/// Returns an error if the statement fails or the stored counter cannot
/// be represented as a six-digit sequence.
pub fn allocate_reference(
    conn: &mut SqliteConnection,
    year: u16,
) -> Result<CaseReference, PersistenceError> {
    let sequence: i32 = diesel::insert_into(reference_counters::table)
        .values((
            reference_counters::year.eq(i32::from(year)),
            reference_counters::last_used.eq(1),
        ))
        .on_conflict(reference_counters::year)
        .do_update()
        .set(reference_counters::last_used.eq(reference_counters::last_used + 1))
        .returning(reference_counters::last_used)
        .get_result(conn)?;

    let sequence: u32 = u32::try_from(sequence).map_err(|_| {
        PersistenceError::ReconstructionError(format!(
            "counter for year {year} holds invalid value {sequence}"
        ))
    })?;

    let reference: CaseReference = CaseReference::new(year, sequence)
        .map_err(|e| PersistenceError::ReconstructionError(e.to_string()))?;

    debug!(%reference, "Allocated case reference");

    Ok(reference)
}

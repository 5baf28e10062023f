// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Conversions between domain types and their stored representations.
//!
//! Timestamps are persisted as RFC 3339 text. Stored values that lack an
//! offset (naive timestamps) are treated as UTC when read back. Redress
//! amounts are persisted as decimal text, never floating point.

use rust_decimal::Decimal;
use std::str::FromStr;
use time::format_description::BorrowedFormatItem;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime};

use casetrack_audit::CaseEvent;

use crate::error::PersistenceError;

/// Fallback format for naive timestamps, treated as UTC.
const NAIVE_DATETIME: &'static [BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

/// Format for date-only columns.
const DATE_ONLY: &'static [BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]");

/// A persisted case event with its database identity.
///
/// Ordering by `event_id` is insertion order, which is the event log's
/// contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredEvent {
    /// The event's database identity.
    pub event_id: i64,
    /// The complaint the event belongs to.
    pub complaint_id: i64,
    /// The event itself.
    pub event: CaseEvent,
}

pub(crate) fn format_timestamp(ts: OffsetDateTime) -> Result<String, PersistenceError> {
    ts.format(&Rfc3339)
        .map_err(|e| PersistenceError::ReconstructionError(format!("formatting timestamp: {e}")))
}

pub(crate) fn format_timestamp_opt(
    ts: Option<OffsetDateTime>,
) -> Result<Option<String>, PersistenceError> {
    ts.map(format_timestamp).transpose()
}

pub(crate) fn parse_timestamp(raw: &str) -> Result<OffsetDateTime, PersistenceError> {
    if let Ok(ts) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Ok(ts);
    }
    // Naive timestamps are treated as UTC before comparison.
    PrimitiveDateTime::parse(raw, NAIVE_DATETIME)
        .map(PrimitiveDateTime::assume_utc)
        .map_err(|e| {
            PersistenceError::ReconstructionError(format!("parsing timestamp '{raw}': {e}"))
        })
}

pub(crate) fn parse_timestamp_opt(
    raw: Option<&str>,
) -> Result<Option<OffsetDateTime>, PersistenceError> {
    raw.map(parse_timestamp).transpose()
}

pub(crate) fn format_date(date: Date) -> Result<String, PersistenceError> {
    date.format(DATE_ONLY)
        .map_err(|e| PersistenceError::ReconstructionError(format!("formatting date: {e}")))
}

pub(crate) fn parse_date(raw: &str) -> Result<Date, PersistenceError> {
    Date::parse(raw, DATE_ONLY)
        .map_err(|e| PersistenceError::ReconstructionError(format!("parsing date '{raw}': {e}")))
}

pub(crate) fn format_decimal(amount: Decimal) -> String {
    amount.to_string()
}

pub(crate) fn parse_decimal(raw: &str) -> Result<Decimal, PersistenceError> {
    Decimal::from_str(raw).map_err(|e| {
        PersistenceError::ReconstructionError(format!("parsing decimal '{raw}': {e}"))
    })
}

/// Parses a stored enum value via its `FromStr` impl.
pub(crate) fn parse_enum<T>(raw: &str) -> Result<T, PersistenceError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.parse()
        .map_err(|e: T::Err| PersistenceError::ReconstructionError(e.to_string()))
}

pub(crate) fn to_flag(value: bool) -> i32 {
    i32::from(value)
}

pub(crate) const fn from_flag(value: i32) -> bool {
    value != 0
}

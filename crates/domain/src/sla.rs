// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime, Weekday};

use crate::error::DomainError;

/// Statutory response deadlines, supplied by the configuration
/// collaborator.
///
/// Used only at complaint creation; due dates are never recomputed after.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlaConfig {
    /// Business days allowed to acknowledge receipt.
    pub ack_sla_days: u32,
    /// Calendar weeks allowed to issue a final response.
    pub final_response_sla_weeks: u32,
}

impl Default for SlaConfig {
    fn default() -> Self {
        Self {
            ack_sla_days: 2,
            final_response_sla_weeks: 8,
        }
    }
}

/// The pair of deadlines derived from a receipt time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DueDates {
    /// Acknowledgement deadline (business-day adjusted).
    pub ack_due_at: OffsetDateTime,
    /// Final-response deadline (calendar weeks, not adjusted).
    pub final_due_at: OffsetDateTime,
}

/// Computes the acknowledgement and final-response deadlines for a
/// complaint received at the given time.
///
/// Pure: identical input always produces identical output, regardless of
/// call time.
///
/// # Arguments
///
/// * `received_at` - When the complaint was received
/// * `config` - The configured SLA windows
///
/// # Errors
///
/// Returns an error if date arithmetic overflows the representable range.
pub fn compute_due_dates(
    received_at: OffsetDateTime,
    config: &SlaConfig,
) -> Result<DueDates, DomainError> {
    let ack_due_at: OffsetDateTime = add_business_days(received_at, config.ack_sla_days)?;
    let final_due_at: OffsetDateTime = add_weeks(received_at, config.final_response_sla_weeks)?;
    Ok(DueDates {
        ack_due_at,
        final_due_at,
    })
}

/// Advances a timestamp by the given number of business days.
///
/// One calendar day is added at a time; a day counts only if its weekday
/// is Monday through Friday. No holiday calendar is applied.
///
/// # Errors
///
/// Returns an error if date arithmetic overflows the representable range.
pub fn add_business_days(
    start: OffsetDateTime,
    days: u32,
) -> Result<OffsetDateTime, DomainError> {
    let mut current: OffsetDateTime = start;
    let mut added: u32 = 0;
    while added < days {
        current = current
            .checked_add(Duration::days(1))
            .ok_or_else(|| DomainError::DateArithmeticOverflow {
                operation: String::from("adding business days"),
            })?;
        if !matches!(current.weekday(), Weekday::Saturday | Weekday::Sunday) {
            added += 1;
        }
    }
    Ok(current)
}

/// Advances a timestamp by the given number of calendar weeks (7 days
/// each), with no business-day adjustment.
///
/// # Errors
///
/// Returns an error if date arithmetic overflows the representable range.
pub fn add_weeks(start: OffsetDateTime, weeks: u32) -> Result<OffsetDateTime, DomainError> {
    start
        .checked_add(Duration::weeks(i64::from(weeks)))
        .ok_or_else(|| DomainError::DateArithmeticOverflow {
            operation: String::from("adding weeks"),
        })
}

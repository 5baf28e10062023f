// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::OffsetDateTime;

use crate::entities::Complaint;

/// The currently outstanding breach state of a complaint.
///
/// Derived, not accumulated: these flags represent the live view at a
/// given instant, never history. The event log preserves breaches that
/// were later cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BreachFlags {
    /// The acknowledgement deadline has passed without acknowledgement.
    pub ack_breached: bool,
    /// The final-response deadline has passed without a final response.
    pub final_breached: bool,
}

/// Recomputes the breach flags for a complaint at the given instant.
///
/// Idempotent: two calls with the same `(complaint, now)` yield the same
/// flags. Timestamps are compared in UTC; naive values are normalized at
/// the persistence boundary before they reach here.
///
/// # Arguments
///
/// * `complaint` - The complaint to evaluate
/// * `now` - The instant to evaluate against
#[must_use]
pub fn breach_flags(complaint: &Complaint, now: OffsetDateTime) -> BreachFlags {
    BreachFlags {
        ack_breached: complaint.acknowledged_at.is_none() && now > complaint.ack_due_at,
        final_breached: complaint.final_response_at.is_none() && now > complaint.final_due_at,
    }
}

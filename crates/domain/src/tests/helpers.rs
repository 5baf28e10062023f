// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::OffsetDateTime;
use time::macros::datetime;

use crate::{CaseReference, Complaint, ComplaintStatus, SlaConfig, compute_due_dates};

/// Monday, so two business days land on Wednesday.
pub const RECEIVED: OffsetDateTime = datetime!(2024-01-01 09:00 UTC);

/// Builds a complaint received on a known Monday with default SLAs.
pub fn create_test_complaint() -> Complaint {
    let due = compute_due_dates(RECEIVED, &SlaConfig::default()).unwrap();
    Complaint {
        complaint_id: Some(1),
        reference: CaseReference::new(2024, 1).unwrap(),
        status: ComplaintStatus::New,
        source: String::from("Email"),
        received_at: RECEIVED,
        description: String::from("Test complaint"),
        category: String::from("Service"),
        reason: None,
        fca_complaint: true,
        fca_rationale: None,
        vulnerability_flag: false,
        vulnerability_notes: None,
        non_reportable: false,
        ack_due_at: due.ack_due_at,
        final_due_at: due.final_due_at,
        acknowledged_at: None,
        final_response_at: None,
        closed_at: None,
        ack_breached: false,
        final_breached: false,
        is_escalated: false,
        fos_complaint: false,
        fos_reference: None,
        fos_referred_at: None,
        assigned_handler_id: None,
        reopened_from_id: None,
    }
}

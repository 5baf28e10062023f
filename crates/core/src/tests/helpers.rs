// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::OffsetDateTime;
use time::macros::datetime;

use casetrack_domain::{
    CaseReference, Complaint, ComplaintStatus, Outcome, OutcomeType, SlaConfig, User, UserRole,
    compute_due_dates,
};

use crate::{ActingUser, CaseState};

/// Monday; the default ack SLA lands on Wednesday.
pub const RECEIVED: OffsetDateTime = datetime!(2026-01-05 09:00 UTC);

/// Well inside both SLA windows.
pub const NOW: OffsetDateTime = datetime!(2026-01-06 10:00 UTC);

pub fn admin() -> ActingUser {
    ActingUser::new(1, UserRole::Admin)
}

pub fn handler(user_id: i64) -> ActingUser {
    ActingUser::new(user_id, UserRole::ComplaintsHandler)
}

pub fn create_test_complaint() -> Complaint {
    let due = compute_due_dates(RECEIVED, &SlaConfig::default()).unwrap();
    Complaint {
        complaint_id: Some(10),
        reference: CaseReference::new(2026, 1).unwrap(),
        status: ComplaintStatus::New,
        source: String::from("Email"),
        received_at: RECEIVED,
        description: String::from("Premium charged twice"),
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

pub fn state_without_outcome(status: ComplaintStatus) -> CaseState {
    let mut complaint = create_test_complaint();
    complaint.status = status;
    CaseState::new(complaint, None)
}

pub fn test_outcome() -> Outcome {
    Outcome {
        outcome_id: Some(5),
        outcome: OutcomeType::Upheld,
        rationale: Some(String::from("Evidence supports the complaint")),
        notes: None,
        recorded_by_id: Some(1),
        recorded_at: NOW,
    }
}

pub fn state_with_outcome(status: ComplaintStatus) -> CaseState {
    let mut complaint = create_test_complaint();
    complaint.status = status;
    CaseState::new(complaint, Some(test_outcome()))
}

pub fn manager_user(user_id: i64) -> User {
    User {
        user_id: Some(user_id),
        full_name: String::from("Morgan Manager"),
        email: String::from("morgan@example.com"),
        role: UserRole::ComplaintsManager,
        is_active: true,
    }
}

pub fn handler_user(user_id: i64) -> User {
    User {
        user_id: Some(user_id),
        full_name: String::from("Harper Handler"),
        email: String::from("harper@example.com"),
        role: UserRole::ComplaintsHandler,
        is_active: true,
    }
}

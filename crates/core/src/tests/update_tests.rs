// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for detail updates, communications, tasks, and access logging.

use time::macros::datetime;

use casetrack_audit::EventType;
use casetrack_domain::{
    CommunicationChannel, CommunicationDirection, ComplaintStatus, DomainError, TaskStatus,
};

use super::helpers::{NOW, admin, state_without_outcome};
use crate::{Command, ComplaintUpdate, CoreError, SideEffect, apply};

#[test]
fn test_update_logs_generic_updated_event() {
    let state = state_without_outcome(ComplaintStatus::InInvestigation);
    let changes = ComplaintUpdate {
        description: Some(String::from("Premium charged three times")),
        ..ComplaintUpdate::default()
    };

    let result = apply(&state, Command::UpdateDetails { changes }, &admin(), NOW).unwrap();

    assert_eq!(result.events.len(), 1);
    assert_eq!(result.events[0].event_type, EventType::Updated);
}

#[test]
fn test_category_change_after_final_is_audited_distinctly() {
    let state = state_without_outcome(ComplaintStatus::FinalResponseIssued);
    let changes = ComplaintUpdate {
        category: Some(String::from("Claims Handling")),
        ..ComplaintUpdate::default()
    };

    let result = apply(&state, Command::UpdateDetails { changes }, &admin(), NOW).unwrap();

    assert_eq!(result.events.len(), 1);
    assert_eq!(
        result.events[0].event_type,
        EventType::CategoryChangedAfterFinal
    );
    assert_eq!(
        result.events[0].description,
        "Category changed from Service to Claims Handling after final response"
    );
}

#[test]
fn test_category_change_before_final_logs_generic_update() {
    let state = state_without_outcome(ComplaintStatus::InInvestigation);
    let changes = ComplaintUpdate {
        category: Some(String::from("Claims Handling")),
        ..ComplaintUpdate::default()
    };

    let result = apply(&state, Command::UpdateDetails { changes }, &admin(), NOW).unwrap();

    assert_eq!(result.events[0].event_type, EventType::Updated);
}

#[test]
fn test_category_change_to_other_requires_reason() {
    let state = state_without_outcome(ComplaintStatus::InInvestigation);
    let changes = ComplaintUpdate {
        category: Some(String::from("Other / Unclassified")),
        ..ComplaintUpdate::default()
    };

    let result = apply(&state, Command::UpdateDetails { changes }, &admin(), NOW);

    assert!(matches!(
        result,
        Err(CoreError::DomainViolation(DomainError::ReasonRequired { .. }))
    ));
}

#[test]
fn test_category_change_to_vulnerability_forces_flag() {
    let state = state_without_outcome(ComplaintStatus::InInvestigation);
    let changes = ComplaintUpdate {
        category: Some(String::from("Vulnerability and Customer Treatment")),
        ..ComplaintUpdate::default()
    };

    let result = apply(&state, Command::UpdateDetails { changes }, &admin(), NOW).unwrap();

    assert!(result.complaint.vulnerability_flag);
}

#[test]
fn test_escalation_toggle_adds_second_event() {
    let state = state_without_outcome(ComplaintStatus::InInvestigation);
    let changes = ComplaintUpdate {
        is_escalated: Some(true),
        ..ComplaintUpdate::default()
    };

    let result = apply(&state, Command::UpdateDetails { changes }, &admin(), NOW).unwrap();

    assert_eq!(result.events.len(), 2);
    assert_eq!(result.events[0].event_type, EventType::Updated);
    assert_eq!(result.events[1].event_type, EventType::EscalationUpdated);
    assert_eq!(result.events[1].description, "Marked as escalated");
}

#[test]
fn test_escalation_removal_is_audited() {
    let mut state = state_without_outcome(ComplaintStatus::InInvestigation);
    state.complaint.is_escalated = true;
    let changes = ComplaintUpdate {
        is_escalated: Some(false),
        ..ComplaintUpdate::default()
    };

    let result = apply(&state, Command::UpdateDetails { changes }, &admin(), NOW).unwrap();

    assert_eq!(result.events[1].event_type, EventType::EscalationUpdated);
    assert_eq!(result.events[1].description, "Escalation removed");
}

#[test]
fn test_add_communication() {
    let state = state_without_outcome(ComplaintStatus::Acknowledged);

    let result = apply(
        &state,
        Command::AddCommunication {
            channel: CommunicationChannel::Phone,
            direction: CommunicationDirection::Outbound,
            summary: String::from("Called the customer to confirm details"),
            occurred_at: datetime!(2026-01-06 09:30 UTC),
            is_final_response: false,
        },
        &admin(),
        NOW,
    )
    .unwrap();

    assert_eq!(result.events[0].event_type, EventType::CommunicationAdded);
    let SideEffect::AddCommunication(communication) = result.side_effect else {
        panic!("expected a communication insert");
    };
    assert_eq!(communication.channel, CommunicationChannel::Phone);
    assert_eq!(communication.user_id, Some(1));
}

#[test]
fn test_add_communication_requires_summary() {
    let state = state_without_outcome(ComplaintStatus::Acknowledged);

    let result = apply(
        &state,
        Command::AddCommunication {
            channel: CommunicationChannel::Email,
            direction: CommunicationDirection::Inbound,
            summary: String::from(" "),
            occurred_at: NOW,
            is_final_response: false,
        },
        &admin(),
        NOW,
    );

    assert!(matches!(
        result,
        Err(CoreError::DomainViolation(DomainError::BlankField("summary")))
    ));
}

#[test]
fn test_add_task() {
    let state = state_without_outcome(ComplaintStatus::InInvestigation);

    let result = apply(
        &state,
        Command::AddTask {
            title: String::from("Request underwriting file"),
            description: None,
            due_date: None,
            assigned_to_id: Some(42),
            is_checklist: false,
        },
        &admin(),
        NOW,
    )
    .unwrap();

    assert_eq!(result.events[0].event_type, EventType::TaskAdded);
    let SideEffect::AddTask(task) = result.side_effect else {
        panic!("expected a task insert");
    };
    assert_eq!(task.status, TaskStatus::Open);
    assert_eq!(task.assigned_to_id, Some(42));
}

#[test]
fn test_record_access_appends_event_without_mutation() {
    let state = state_without_outcome(ComplaintStatus::InInvestigation);

    let result = apply(&state, Command::RecordAccess, &admin(), NOW).unwrap();

    assert_eq!(result.complaint, state.complaint);
    assert_eq!(result.events.len(), 1);
    assert_eq!(result.events[0].event_type, EventType::Accessed);
}

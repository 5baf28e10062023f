// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Role guard tests at the service boundary.

use casetrack_domain::UserRole;

use super::helpers::{NOW, create_request, seed_actor, test_service};

#[test]
fn test_read_only_cannot_mutate() {
    let mut service = test_service();
    let admin = seed_actor(&mut service, "Avery Admin", UserRole::Admin);
    let read_only = seed_actor(&mut service, "Riley Reader", UserRole::ReadOnly);
    let complaint = service
        .create_complaint(create_request(), &admin, NOW)
        .unwrap();
    let complaint_id = complaint.complaint_id.unwrap();

    let create = service.create_complaint(create_request(), &read_only, NOW);
    assert_eq!(create.unwrap_err().kind(), "authorization");

    let acknowledge = service.acknowledge(complaint_id, &read_only, NOW);
    assert_eq!(acknowledge.unwrap_err().kind(), "authorization");
}

#[test]
fn test_handler_self_assignment_rules() {
    let mut service = test_service();
    let admin = seed_actor(&mut service, "Avery Admin", UserRole::Admin);
    let handler = seed_actor(&mut service, "Harper Handler", UserRole::ComplaintsHandler);
    let other = seed_actor(&mut service, "Oakley Other", UserRole::ComplaintsHandler);
    let complaint = service
        .create_complaint(create_request(), &admin, NOW)
        .unwrap();
    let complaint_id = complaint.complaint_id.unwrap();

    // A handler may not assign someone else.
    let assign_other = service.assign_handler(complaint_id, other.user_id, &handler, NOW);
    assert_eq!(assign_other.unwrap_err().kind(), "authorization");

    // Self-assign succeeds while unassigned.
    let assigned = service
        .assign_handler(complaint_id, handler.user_id, &handler, NOW)
        .unwrap();
    assert_eq!(assigned.assigned_handler_id, Some(handler.user_id));

    // Once assigned, another handler cannot self-assign.
    let steal = service.assign_handler(complaint_id, other.user_id, &other, NOW);
    assert_eq!(steal.unwrap_err().kind(), "authorization");

    // Admins reassign freely.
    let reassigned = service
        .assign_handler(complaint_id, other.user_id, &admin, NOW)
        .unwrap();
    assert_eq!(reassigned.assigned_handler_id, Some(other.user_id));
}

#[test]
fn test_escalation_requires_a_manager_target() {
    let mut service = test_service();
    let admin = seed_actor(&mut service, "Avery Admin", UserRole::Admin);
    let handler = seed_actor(&mut service, "Harper Handler", UserRole::ComplaintsHandler);
    let manager = seed_actor(&mut service, "Morgan Manager", UserRole::ComplaintsManager);
    let complaint = service
        .create_complaint(create_request(), &admin, NOW)
        .unwrap();
    let complaint_id = complaint.complaint_id.unwrap();

    let to_handler = service.escalate(complaint_id, handler.user_id, &admin, NOW);
    assert_eq!(to_handler.unwrap_err().kind(), "validation");

    let escalated = service
        .escalate(complaint_id, manager.user_id, &admin, NOW)
        .unwrap();
    assert!(escalated.is_escalated);
    assert_eq!(escalated.assigned_handler_id, Some(manager.user_id));
}

#[test]
fn test_escalation_to_unknown_user_is_not_found() {
    let mut service = test_service();
    let admin = seed_actor(&mut service, "Avery Admin", UserRole::Admin);
    let complaint = service
        .create_complaint(create_request(), &admin, NOW)
        .unwrap();

    let result = service.escalate(complaint.complaint_id.unwrap(), 9_999, &admin, NOW);

    assert_eq!(result.unwrap_err().kind(), "not_found");
}

#[test]
fn test_only_admins_may_delete() {
    let mut service = test_service();
    let admin = seed_actor(&mut service, "Avery Admin", UserRole::Admin);
    let reviewer = seed_actor(&mut service, "Remy Reviewer", UserRole::Reviewer);
    let complaint = service
        .create_complaint(create_request(), &admin, NOW)
        .unwrap();
    let complaint_id = complaint.complaint_id.unwrap();

    let denied = service.delete_complaint(complaint_id, &reviewer);
    assert_eq!(denied.unwrap_err().kind(), "authorization");

    service.delete_complaint(complaint_id, &admin).unwrap();
    let gone = service.refresh_breach_flags(complaint_id, NOW);
    assert_eq!(gone.unwrap_err().kind(), "not_found");
}

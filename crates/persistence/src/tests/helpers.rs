// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::OffsetDateTime;
use time::macros::datetime;

use casetrack_core::{ActingUser, ComplaintIntake, open_complaint};
use casetrack_domain::{Complainant, Complaint, Policy, SlaConfig, User, UserRole};

use crate::Persistence;

/// Monday; the default ack SLA lands on Wednesday.
pub const RECEIVED: OffsetDateTime = datetime!(2026-01-05 09:00 UTC);

/// Well inside both SLA windows.
pub const NOW: OffsetDateTime = datetime!(2026-01-06 10:00 UTC);

pub fn test_persistence() -> Persistence {
    Persistence::new_in_memory().expect("Failed to create in-memory database")
}

/// Seeds an admin user and returns the acting identity for it.
pub fn seed_admin(persistence: &mut Persistence) -> (User, ActingUser) {
    let user = persistence
        .create_user("Avery Admin", "avery@example.com", UserRole::Admin)
        .expect("Failed to create admin user");
    let actor = ActingUser::new(user.user_id.unwrap(), UserRole::Admin);
    (user, actor)
}

pub fn test_intake() -> ComplaintIntake {
    ComplaintIntake {
        source: String::from("Email"),
        received_at: RECEIVED,
        description: String::from("Premium charged twice"),
        category: String::from("Service"),
        reason: None,
        fca_complaint: true,
        fca_rationale: None,
        vulnerability_flag: false,
        vulnerability_notes: None,
    }
}

pub fn test_complainant() -> Complainant {
    Complainant {
        complainant_id: None,
        full_name: String::from("Jordan Doe"),
        email: Some(String::from("jordan@example.com")),
        phone: None,
        address: None,
        date_of_birth: None,
        preferred_contact_method: Some(String::from("email")),
    }
}

pub fn test_policy() -> Policy {
    Policy {
        policy_id: None,
        policy_number: Some(String::from("POL-1001")),
        insurer: Some(String::from("Acme Insurance")),
        broker: None,
        product: Some(String::from("Home")),
        scheme: None,
    }
}

/// Allocates a reference, opens, and persists a complaint.
pub fn create_complaint(persistence: &mut Persistence, actor: &ActingUser) -> Complaint {
    let reference = persistence
        .allocate_reference(2026)
        .expect("Failed to allocate reference");
    let opened = open_complaint(test_intake(), reference, &SlaConfig::default(), actor, NOW)
        .expect("Failed to open complaint");
    persistence
        .insert_complaint(&opened, &test_complainant(), &test_policy())
        .expect("Failed to insert complaint")
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use time::OffsetDateTime;
use time::macros::datetime;

use casetrack_domain::{SlaConfig, UserRole};
use casetrack_persistence::Persistence;

use crate::request_response::{ComplainantFields, CreateComplaintRequest, PolicyFields};
use crate::{ActingUser, ComplaintService};

/// Monday; the default ack SLA lands on Wednesday.
pub const RECEIVED: OffsetDateTime = datetime!(2026-01-05 09:00 UTC);

/// Well inside both SLA windows.
pub const NOW: OffsetDateTime = datetime!(2026-01-06 10:00 UTC);

pub fn test_service() -> ComplaintService {
    let persistence = Persistence::new_in_memory().expect("Failed to create in-memory database");
    ComplaintService::new(persistence, SlaConfig::default())
}

/// Seeds a user with the given role and returns its acting identity.
pub fn seed_actor(service: &mut ComplaintService, name: &str, role: UserRole) -> ActingUser {
    let email = format!("{}@example.com", name.to_lowercase().replace(' ', "."));
    let user = service
        .create_user(name, &email, role)
        .expect("Failed to create user");
    ActingUser::new(user.user_id.unwrap(), role)
}

pub fn create_request() -> CreateComplaintRequest {
    CreateComplaintRequest {
        source: String::from("Email"),
        received_at: RECEIVED,
        description: String::from("Premium charged twice"),
        category: String::from("Service"),
        reason: None,
        fca_complaint: true,
        fca_rationale: None,
        vulnerability_flag: false,
        vulnerability_notes: None,
        complainant: ComplainantFields {
            full_name: String::from("Jordan Doe"),
            email: Some(String::from("jordan@example.com")),
            phone: None,
            address: None,
            date_of_birth: None,
            preferred_contact_method: None,
        },
        policy: PolicyFields {
            policy_number: Some(String::from("POL-1001")),
            insurer: Some(String::from("Acme Insurance")),
            broker: None,
            product: Some(String::from("Home")),
            scheme: None,
        },
    }
}

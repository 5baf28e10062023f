// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod breach;
mod entities;
mod error;
mod redress;
mod sla;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use breach::{BreachFlags, breach_flags};
pub use entities::{
    Complainant, Complaint, Communication, Outcome, Policy, RedressPayment, Task, User,
};
pub use error::DomainError;
pub use redress::validate_redress;
pub use sla::{DueDates, SlaConfig, add_business_days, add_weeks, compute_due_dates};
pub use types::{
    ActionStatus, CaseReference, CommunicationChannel, CommunicationDirection, ComplaintStatus,
    OutcomeType, RedressPaymentStatus, RedressType, TaskStatus, UserRole,
};
pub use validation::{
    CATEGORY_OTHER_UNCLASSIFIED, CATEGORY_VULNERABILITY, forces_vulnerability_flag,
    validate_category_reason, validate_non_blank,
};

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use casetrack_audit::CaseEvent;
use casetrack_domain::{
    Communication, Complaint, Outcome, RedressPayment, Task, UserRole,
};

/// The authenticated identity acting on a complaint.
///
/// Supplied by the external identity collaborator with every mutating
/// call. The lifecycle never authenticates; it only applies
/// role-sensitive guards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActingUser {
    /// The acting user's canonical identifier.
    pub user_id: i64,
    /// The acting user's role.
    pub role: UserRole,
}

impl ActingUser {
    /// Creates a new `ActingUser`.
    #[must_use]
    pub const fn new(user_id: i64, role: UserRole) -> Self {
        Self { user_id, role }
    }
}

/// The slice of the complaint aggregate a transition is evaluated
/// against: the complaint row plus its outcome, whose presence gates the
/// final-response and close transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseState {
    /// The complaint.
    pub complaint: Complaint,
    /// The recorded outcome, if any.
    pub outcome: Option<Outcome>,
}

impl CaseState {
    /// Creates a new `CaseState`.
    #[must_use]
    pub const fn new(complaint: Complaint, outcome: Option<Outcome>) -> Self {
        Self { complaint, outcome }
    }
}

/// The child row a successful transition requires the persistence layer
/// to write, beyond the complaint's own fields and its events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SideEffect {
    /// Only the complaint row (and events) changed.
    None,
    /// Insert or replace the complaint's single outcome row.
    UpsertOutcome(Outcome),
    /// Insert a new redress payment row.
    AddRedress(RedressPayment),
    /// Update an existing redress payment row in place.
    UpdateRedress(RedressPayment),
    /// Insert a new communication row.
    AddCommunication(Communication),
    /// Insert a new task row.
    AddTask(Task),
}

/// The result of a successful state transition.
///
/// Transitions are atomic: the persistence layer commits the complaint's
/// field changes, the side effect, and every event in one transaction,
/// or none of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The complaint after the transition.
    pub complaint: Complaint,
    /// The events to append, in order. Empty for a permissive no-op.
    pub events: Vec<CaseEvent>,
    /// The child row to write, if any.
    pub side_effect: SideEffect,
}

impl TransitionResult {
    /// A no-op result: complaint unchanged, nothing to write.
    #[must_use]
    pub const fn noop(complaint: Complaint) -> Self {
        Self {
            complaint,
            events: Vec::new(),
            side_effect: SideEffect::None,
        }
    }

    /// Returns whether this transition had any effect.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.events.is_empty() && matches!(self.side_effect, SideEffect::None)
    }
}

/// The result of opening a new complaint: the entity to persist and its
/// `created` event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenResult {
    /// The new complaint, ready to persist.
    pub complaint: Complaint,
    /// The `created` event.
    pub event: CaseEvent,
}

// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Role capability checks for the exposed operations.
//!
//! These cover only which roles may reach an operation at all. The
//! finer assignment and escalation guards live in the lifecycle state
//! machine, where they can see the complaint's current state.

use casetrack_domain::UserRole;

/// Returns whether the role may invoke mutating complaint operations.
///
/// Read-only users may view but never mutate.
#[must_use]
pub const fn can_mutate_complaints(role: UserRole) -> bool {
    matches!(
        role,
        UserRole::Admin
            | UserRole::ComplaintsHandler
            | UserRole::ComplaintsManager
            | UserRole::Reviewer
    )
}

/// Returns whether the role may hard-delete a complaint.
///
/// Deletion is an administrative override that cascades to all owned
/// children; only admins hold it.
#[must_use]
pub const fn can_delete_complaints(role: UserRole) -> bool {
    matches!(role, UserRole::Admin)
}

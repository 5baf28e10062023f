// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! User store mutations.
//!
//! Users exist here only for assignment and escalation guards; the
//! system holds no credentials. Authentication is an external
//! collaborator.

use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::info;

use casetrack_domain::{User, UserRole};

use crate::data_models::to_flag;
use crate::diesel_schema::users;
use crate::error::PersistenceError;
use crate::sqlite::get_last_insert_rowid;

/// Creates a new user.
///
/// # Arguments
///
/// * `conn` - The database connection
/// * `full_name` - The user's display name
/// * `email` - The user's email (unique)
/// * `role` - The user's role
///
/// # Errors
///
/// Returns an error if the email is already taken or the insert fails.
pub fn create_user(
    conn: &mut SqliteConnection,
    full_name: &str,
    email: &str,
    role: UserRole,
) -> Result<User, PersistenceError> {
    diesel::insert_into(users::table)
        .values((
            users::full_name.eq(full_name),
            users::email.eq(email),
            users::role.eq(role.as_str()),
            users::is_active.eq(to_flag(true)),
        ))
        .execute(conn)?;

    let user_id: i64 = get_last_insert_rowid(conn)?;
    info!(user_id, role = role.as_str(), "Created user");

    Ok(User {
        user_id: Some(user_id),
        full_name: full_name.to_string(),
        email: email.to_string(),
        role,
        is_active: true,
    })
}

/// Activates or deactivates a user.
///
/// # Errors
///
/// Returns an error if the user does not exist.
pub fn set_user_active(
    conn: &mut SqliteConnection,
    user_id: i64,
    is_active: bool,
) -> Result<(), PersistenceError> {
    let updated: usize = diesel::update(users::table.filter(users::user_id.eq(user_id)))
        .set(users::is_active.eq(to_flag(is_active)))
        .execute(conn)?;
    if updated == 0 {
        return Err(PersistenceError::UserNotFound(user_id));
    }
    Ok(())
}

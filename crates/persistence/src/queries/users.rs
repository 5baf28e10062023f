// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! User store reads.

use diesel::SqliteConnection;
use diesel::prelude::*;

use casetrack_domain::User;

use crate::data_models::{from_flag, parse_enum};
use crate::diesel_schema::users;
use crate::error::PersistenceError;

/// Diesel Queryable struct for user rows.
#[derive(Queryable, Selectable)]
#[diesel(table_name = users)]
struct UserRow {
    user_id: i64,
    full_name: String,
    email: String,
    role: String,
    is_active: i32,
}

impl UserRow {
    fn into_domain(self) -> Result<User, PersistenceError> {
        Ok(User {
            user_id: Some(self.user_id),
            full_name: self.full_name,
            email: self.email,
            role: parse_enum(&self.role)?,
            is_active: from_flag(self.is_active),
        })
    }
}

/// Retrieves a user by id.
///
/// # Errors
///
/// Returns an error if the user does not exist.
pub fn get_user(conn: &mut SqliteConnection, user_id: i64) -> Result<User, PersistenceError> {
    let result = users::table
        .filter(users::user_id.eq(user_id))
        .select(UserRow::as_select())
        .first::<UserRow>(conn);

    match result {
        Ok(row) => row.into_domain(),
        Err(diesel::result::Error::NotFound) => Err(PersistenceError::UserNotFound(user_id)),
        Err(e) => Err(PersistenceError::from(e)),
    }
}

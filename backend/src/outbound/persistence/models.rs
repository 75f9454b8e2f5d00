//! Diesel row structs for the `users` table.
//!
//! Rows never leave the persistence module; the repository converts them to
//! domain [`User`](crate::domain::User) values.

use diesel::prelude::*;

use crate::domain::UserProfile;

use super::schema::users;

/// Row read back from `users`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub age: i32,
}

/// Column values written on insert and on full-overwrite update.
///
/// The identifier is absent so inserts let the sequence assign it and updates
/// never touch it.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = users)]
pub(crate) struct UserProfileRow<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub age: i32,
}

impl<'a> From<&'a UserProfile> for UserProfileRow<'a> {
    fn from(profile: &'a UserProfile) -> Self {
        Self {
            name: profile.name().as_ref(),
            email: profile.email().as_ref(),
            age: profile.age().get(),
        }
    }
}

//! Driving port for user create/read/update/delete use-cases.
//!
//! HTTP handlers depend on this trait rather than on the service type so they
//! can be exercised with a mock.

use async_trait::async_trait;

use crate::domain::{Error, User, UserId, UserProfile};

/// Use-case port for managing users.
///
/// Failures are already translated into domain [`Error`]s; the inbound
/// adapter only maps them to status codes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersCommand: Send + Sync {
    /// Create a user from a validated profile.
    async fn create(&self, profile: &UserProfile) -> Result<User, Error>;

    /// List every user.
    async fn list(&self) -> Result<Vec<User>, Error>;

    /// Fetch one user.
    async fn get(&self, id: UserId) -> Result<User, Error>;

    /// Replace all fields of an existing user.
    async fn update(&self, id: UserId, profile: &UserProfile) -> Result<User, Error>;

    /// Delete a user; deleting a missing user succeeds.
    async fn delete(&self, id: UserId) -> Result<(), Error>;
}

//! Port abstraction for user persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::{User, UserId, UserProfile};

/// Persistence errors raised by user repository adapters.
///
/// `Connection` and `Query` are both storage failures; callers do not
/// distinguish transient from permanent ones. `NotFound` is raised only by
/// operations addressing a single record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserPersistenceError {
    /// Repository connection could not be established.
    #[error("user repository connection failed: {message}")]
    Connection { message: String },
    /// Query or mutation failed during execution.
    #[error("user repository query failed: {message}")]
    Query { message: String },
    /// No record exists for the requested identifier.
    #[error("user {id} not found")]
    NotFound { id: UserId },
}

impl UserPersistenceError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }

    /// Create a not-found error for `id`.
    pub fn not_found(id: UserId) -> Self {
        Self::NotFound { id }
    }
}

/// Storage gateway for user records.
///
/// Every method maps onto exactly one store call. There are no retries and
/// no cross-call transactions; concurrent writers to one record resolve as
/// last-writer-wins.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new record; the store assigns the identifier.
    async fn create(&self, profile: &UserProfile) -> Result<User, UserPersistenceError>;

    /// Return every stored user. An empty store yields an empty vector.
    async fn list_all(&self) -> Result<Vec<User>, UserPersistenceError>;

    /// Fetch a user, failing with [`UserPersistenceError::NotFound`] when absent.
    async fn find_by_id(&self, id: UserId) -> Result<User, UserPersistenceError>;

    /// Overwrite every field of the record identified by `id`.
    ///
    /// Fails with [`UserPersistenceError::NotFound`] when no row was affected.
    async fn update(&self, id: UserId, profile: &UserProfile) -> Result<User, UserPersistenceError>;

    /// Remove the record identified by `id`. Missing records are not an error.
    async fn delete(&self, id: UserId) -> Result<(), UserPersistenceError>;
}

//! Translation of pool and Diesel failures into [`UserPersistenceError`].

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use crate::domain::ports::UserPersistenceError;

use super::pool::PoolError;

/// Pool failures always mean the store could not be reached.
pub(super) fn map_pool_error(error: PoolError) -> UserPersistenceError {
    let message = match error {
        PoolError::Checkout { message } | PoolError::Build { message } => message,
    };
    UserPersistenceError::connection(message)
}

/// Classify a Diesel error.
///
/// Driver messages are logged at debug level only; the returned error carries
/// a fixed description so SQL details never travel further up.
pub(super) fn map_diesel_error(error: DieselError) -> UserPersistenceError {
    if let DieselError::DatabaseError(kind, info) = &error {
        debug!(?kind, message = info.message(), "diesel operation failed");
    } else {
        debug!(%error, "diesel operation failed");
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            UserPersistenceError::connection("database connection closed")
        }
        DieselError::DatabaseError(DatabaseErrorKind::CheckViolation, _) => {
            UserPersistenceError::query("row violates a table constraint")
        }
        DieselError::QueryBuilderError(_) => UserPersistenceError::query("invalid query"),
        DieselError::DeserializationError(_) => {
            UserPersistenceError::query("failed to decode stored row")
        }
        _ => UserPersistenceError::query("database error"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(PoolError::checkout("timed out"), "timed out")]
    #[case(PoolError::build("bad url"), "bad url")]
    fn pool_errors_are_connection_failures(#[case] error: PoolError, #[case] message: &str) {
        assert_eq!(
            map_pool_error(error),
            UserPersistenceError::connection(message)
        );
    }

    #[rstest]
    fn rollback_is_a_query_failure() {
        assert_eq!(
            map_diesel_error(DieselError::RollbackTransaction),
            UserPersistenceError::query("database error")
        );
    }

    #[rstest]
    fn closed_connection_is_a_connection_failure() {
        let error = DieselError::DatabaseError(
            DatabaseErrorKind::ClosedConnection,
            Box::new(String::from("server closed the connection")),
        );
        assert_eq!(
            map_diesel_error(error),
            UserPersistenceError::connection("database connection closed")
        );
    }
}

//! Shared helpers for backend integration tests.

#![allow(dead_code, reason = "each test crate uses a different subset")]

use std::sync::OnceLock;

use backend::outbound::persistence::run_migrations;

/// Environment variable naming the PostgreSQL database used by Diesel tests.
pub const TEST_DATABASE_URL_VAR: &str = "USERS_TEST_DATABASE_URL";

static MIGRATED: OnceLock<Result<(), String>> = OnceLock::new();

/// Return a migrated test database URL, or `None` after printing a skip
/// marker when no database is configured.
///
/// # Panics
///
/// Panics when a database is configured but migrations fail, so a broken
/// environment is not mistaken for a skipped one.
pub fn migrated_database_url() -> Option<String> {
    let Ok(url) = std::env::var(TEST_DATABASE_URL_VAR) else {
        eprintln!("SKIP-TEST-DATABASE: {TEST_DATABASE_URL_VAR} is not set");
        return None;
    };
    let outcome = MIGRATED.get_or_init(|| run_migrations(&url).map_err(|err| err.to_string()));
    if let Err(message) = outcome {
        panic!("migrating {TEST_DATABASE_URL_VAR} failed: {message}");
    }
    Some(url)
}

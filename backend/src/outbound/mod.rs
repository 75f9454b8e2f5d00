//! Outbound adapters implementing the user storage gateway.
//!
//! - **persistence**: PostgreSQL through Diesel, used by the server binary.
//! - **memory**: a process-local store used by tests.
//!
//! Adapters translate between domain types and storage representations and
//! hold no business rules.

pub mod memory;
pub mod persistence;

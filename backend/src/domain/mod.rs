//! Domain primitives, ports, and services.
//!
//! Purpose: define the user entity and its validation rules, the ports that
//! adapters implement, and the service that sits between the HTTP adapter and
//! persistence. Nothing in here depends on Actix or Diesel.
//!
//! Public surface:
//! - Error (alias to `error::Error`): transport-agnostic failure payload.
//! - ErrorCode (alias to `error::ErrorCode`): stable error identifier.
//! - User (alias to `user::User`): persisted user record.
//! - UserProfile (alias to `user::UserProfile`): id-less user fields.
//! - UserService (alias to `user_service::UserService`): passthrough service.

pub mod error;
pub mod ports;
pub mod trace_id;
pub mod user;
pub mod user_service;

pub use self::error::{Error, ErrorCode};
pub use self::trace_id::TraceId;
pub use self::user::{Age, EmailAddress, User, UserId, UserName, UserProfile, UserValidationError};
pub use self::user_service::UserService;

/// HTTP header name carrying the request trace identifier.
pub const TRACE_ID_HEADER: &str = "trace-id";

//! Users CRUD service library.
//!
//! Layout follows a ports-and-adapters split: [`domain`] holds the entity,
//! ports and service; [`inbound`] the Actix handlers; [`outbound`] the
//! Diesel and in-memory repositories.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;

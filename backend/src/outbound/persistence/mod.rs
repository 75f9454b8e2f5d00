//! PostgreSQL persistence through Diesel, `diesel-async` and a `bb8` pool.
//!
//! Row structs and the table schema stay private to this module; only the
//! repository, the pool and the migration entry point are exported.
//!
//! ```no_run
//! use backend::outbound::persistence::{
//!     DbPool, DieselUserRepository, PoolConfig, run_migrations,
//! };
//!
//! # async fn wire() -> Result<(), Box<dyn std::error::Error>> {
//! let url = "postgres://localhost/users";
//! run_migrations(url)?;
//! let pool = DbPool::new(PoolConfig::new(url)).await?;
//! let _repo = DieselUserRepository::new(pool);
//! # Ok(())
//! # }
//! ```

mod diesel_basic_error_mapping;
mod diesel_user_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_user_repository::DieselUserRepository;
pub use migrations::{MIGRATIONS, MigrationError, run_migrations};
pub use pool::{DEFAULT_CONNECTION_TIMEOUT, DEFAULT_MAX_SIZE, DbPool, PoolConfig, PoolError};

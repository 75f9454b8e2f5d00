//! Users service entry point: loads settings, migrates the schema, builds the
//! pool and serves the REST API.

mod server;

use std::io;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{error, warn};
use tracing_subscriber::{EnvFilter, fmt};

use backend::inbound::http::health::HealthState;
use backend::outbound::persistence::{DbPool, run_migrations};
use backend::settings::AppSettings;
use server::{ServerConfig, create_server};

/// Log a fatal startup failure and turn it into the process exit error.
fn fatal(context: &str, err: impl std::fmt::Display) -> io::Error {
    error!(error = %err, "{context}");
    io::Error::other(format!("{context}: {err}"))
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load().map_err(|err| fatal("failed to load configuration", err))?;
    let bind_addr = settings
        .bind_addr()
        .map_err(|err| fatal("invalid configuration", err))?;
    let pool_config = settings
        .pool_config()
        .map_err(|err| fatal("invalid configuration", err))?;

    let database_url = pool_config.database_url().to_owned();
    web::block(move || run_migrations(&database_url))
        .await
        .map_err(|err| fatal("migration task failed", err))?
        .map_err(|err| fatal("failed to apply database migrations", err))?;

    let pool = DbPool::new(pool_config)
        .await
        .map_err(|err| fatal("failed to build database pool", err))?;

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, ServerConfig::new(bind_addr, pool))?;
    server.await
}

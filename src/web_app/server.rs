// web_app/server.rs - Startup helpers for the server binary
//
// Logging setup and an eager load of the bundled catalog, so a broken
// dataset shows up in the server log before the first request.

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use crate::web_app::model::Catalog;

/// Log filter variable; takes precedence over RUST_LOG
pub const LOG_ENV: &str = "HOLOHUT_LOG";

/// HOLOHUT_LOG, then RUST_LOG, then `info`
pub fn log_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_thread_ids(false)
        .with_env_filter(log_filter())
        .init();
}

/// Parses the bundled dataset and returns the number of products
pub fn warm_catalog() -> anyhow::Result<usize> {
    let catalog = Catalog::bundled().context("bundled catalog failed to load")?;
    Ok(catalog.len())
}

//! Page rendering, static builds and the HTTP server for the word pages.

pub mod build;
pub mod config;
pub mod render;
pub mod routes;

use tracing_subscriber::EnvFilter;

/// Installs the fmt subscriber on stderr. Falls back to `info` when `filter`
/// does not parse.
pub fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

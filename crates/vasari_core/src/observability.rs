//! Tracing initialization.

use tracing::info;
use tracing_subscriber::EnvFilter;

/// Initialize tracing with an env-filtered fmt subscriber.
///
/// Respects `RUST_LOG`; falls back to `info` when unset. Safe to call from
/// binaries and long-lived hosts; returns an error string if a global
/// subscriber is already installed.
pub fn init_observability(service_name: &'static str) -> Result<(), String> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init()
        .map_err(|e| format!("Failed to initialize tracing: {}", e))?;

    info!(service_name = service_name, "Tracing initialized");
    Ok(())
}

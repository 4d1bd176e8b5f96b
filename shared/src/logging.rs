//! Shared logging utilities for consistent tracing across all services

use tracing_subscriber::EnvFilter;

/// Initialize the stdout tracing subscriber for a service binary.
///
/// `service` is the crate name used as the filter target; `log_level` is the
/// base level for the service and shared crates. `RUST_LOG` overrides both.
pub fn init_tracing(service: &str, log_level: Option<&str>) {
    let base_level = log_level.unwrap_or("info");
    let default_filter =
        format!("{service}={base_level},shared={base_level},tower_http=warn,hyper=warn");

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .init();
}

//! Tracing bootstrap for hosts embedding the tools.

use tracing_subscriber::EnvFilter;

/// Initializes a stderr fmt subscriber. `CALM_CONTENT_LOG` takes an
/// env-filter directive (e.g. `calm_content_tools=debug`); without it,
/// this crate logs at info. Call once per process.
pub fn init() {
    let env_filter = if std::env::var("CALM_CONTENT_LOG").is_ok() {
        EnvFilter::from_env("CALM_CONTENT_LOG")
    } else {
        EnvFilter::new("calm_content_tools=info")
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter)
        .init();
}

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::DEFAULT_LOG_LEVEL;

/// Installs the global stdout subscriber. `RUST_LOG` wins over the configured
/// level when it is set.
pub fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stdout)
        .with_target(false)
        .init();
}

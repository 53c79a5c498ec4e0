//! Diagnostic logging setup.
//!
//! Progress output for the user goes through [`crate::ui`]; this layer only
//! carries `tracing` events to stderr for troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;
use crate::error::{BumpError, Result};

/// Environment variable holding an `EnvFilter` directive
pub const LOG_ENV: &str = "BUMP_LOG";

/// Build the filter: `BUMP_LOG` if set, else `bump=<level>` from config
pub fn build_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(format!("bump={}", config.level)))
        .map_err(|e| BumpError::config(format!("Failed to create log filter: {}", e)))
}

/// Initialize stderr logging
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let env_filter = build_filter(config)?;

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| BumpError::config(format!("Failed to initialize logging: {}", e)))
}

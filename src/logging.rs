//! Logging setup and configuration.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::error::AppError;

const DEFAULT_FILTER: &str = "github_activity=warn";
const VERBOSE_FILTER: &str = "github_activity=debug";

/// Sets up logging to stderr, leaving stdout to the activity output.
pub fn setup_logging(verbose: bool) -> Result<(), AppError> {
    let env_filter = if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_ansi(false))
        .try_init()
        .map_err(|e| AppError::ConfigurationError {
            msg: format!("Failed to initialize logging: {}", e),
        })
}

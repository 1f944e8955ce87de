//! Logging setup
//!
//! The crates log through the `log` facade. [`init_logging`] installs a
//! `tracing-subscriber` formatter that also receives those records.

use crate::settings::LoggingConfig;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber
///
/// `RUST_LOG` takes precedence over the configured directive. Output goes
/// to stderr. Returns `false` if a subscriber was already installed.
pub fn init_logging(config: &LoggingConfig) -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::try_new(config.directive()).unwrap_or_else(|err| {
            eprintln!("Invalid log filter '{}': {}, using info", config.directive(), err);
            EnvFilter::new("info")
        })
    });

    match tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
    {
        Ok(()) => {
            log::debug!("Logging initialised with '{}'", config.directive());
            true
        }
        Err(err) => {
            log::warn!("Logging already initialised: {}", err);
            false
        }
    }
}

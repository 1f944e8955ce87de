//! Settings, logging and network helpers
//!
//! - [`settings`]: XML settings file shared by servers and clients
//! - [`logging`]: subscriber setup for the `log` records the crates emit
//! - [`network`]: local address discovery and reachability checks

pub mod logging;
pub mod network;
pub mod settings;

pub use logging::init_logging;
pub use settings::{ClientConfig, HostingConfig, LoggingConfig, ProxyConfig, ServerConfig, Settings};

//! Client builder
//!
//! # Usage Example
//!
//! ```rust,no_run
//! use aas_client::ClientBuilder;
//! use std::time::Duration;
//!
//! let client = ClientBuilder::new()
//!     .endpoint("http://localhost:5080")
//!     .timeout(Duration::from_secs(5))
//!     .build()?;
//! # Ok::<(), aas_core::AasError>(())
//! ```

use crate::http::SimpleHttpClient;
use crate::shell_client::AssetAdministrationShellHttpClient;
use aas_core::{AasError, AasResult};
use aas_utils::settings::{ProxyConfig, Settings};
use std::time::Duration;

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(20_000);

/// Builder for [`AssetAdministrationShellHttpClient`]
///
/// The endpoint is required; timeout and proxy are optional.
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    /// Base URL of the shell server
    endpoint: Option<String>,
    /// Per-request timeout
    timeout: Duration,
    /// Proxy settings, used only when enabled
    proxy: Option<ProxyConfig>,
}

impl ClientBuilder {
    /// Create a new builder
    ///
    /// # Default Settings
    /// - Timeout: 20 s
    /// - No proxy
    pub fn new() -> Self {
        Self {
            endpoint: None,
            timeout: DEFAULT_TIMEOUT,
            proxy: None,
        }
    }

    /// Take endpoint, timeout and proxy from a settings file
    ///
    /// # Arguments
    /// * `settings` - Loaded settings; `Client/Endpoint` may be absent
    ///
    /// # Note
    /// Values set afterwards on the builder take precedence.
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            endpoint: settings.client.endpoint.clone(),
            timeout: settings.client.timeout(),
            proxy: Some(settings.proxy.clone()),
        }
    }

    /// Set the endpoint
    ///
    /// # Arguments
    /// * `endpoint` - Base URL, e.g. "http://localhost:5080"
    ///
    /// # Returns
    /// Self for method chaining
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Set the request timeout
    ///
    /// # Returns
    /// Self for method chaining
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Route requests through a proxy
    ///
    /// # Note
    /// The proxy is ignored unless `use_proxy` is set and an address is given.
    pub fn proxy(mut self, proxy: ProxyConfig) -> Self {
        self.proxy = Some(proxy);
        self
    }

    /// Build only the transport
    ///
    /// # Errors
    /// Returns [`AasError::Settings`] if no endpoint is configured, or
    /// [`AasError::Http`] if the HTTP client cannot be created.
    pub fn build_transport(&self) -> AasResult<SimpleHttpClient> {
        let endpoint = self
            .endpoint
            .as_deref()
            .filter(|e| !e.trim().is_empty())
            .ok_or_else(|| AasError::Settings("No client endpoint configured".to_string()))?;
        SimpleHttpClient::new(endpoint, self.timeout, self.proxy.as_ref())
    }

    /// Build the shell client
    pub fn build(&self) -> AasResult<AssetAdministrationShellHttpClient<SimpleHttpClient>> {
        let transport = self.build_transport()?;
        log::debug!(
            "Shell client for {} (timeout {:?})",
            transport.endpoint(),
            transport.timeout()
        );
        Ok(AssetAdministrationShellHttpClient::new(transport))
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let builder = ClientBuilder::new();
        assert_eq!(builder.timeout, DEFAULT_TIMEOUT);
        assert!(matches!(builder.build(), Err(AasError::Settings(_))));
        assert!(matches!(
            ClientBuilder::new().endpoint("  ").build_transport(),
            Err(AasError::Settings(_))
        ));
    }

    #[test]
    fn test_builder_from_settings() {
        let mut settings = Settings::default();
        settings.client.endpoint = Some("http://localhost:5080/".to_string());
        settings.client.request_timeout = 1500;

        let transport = ClientBuilder::from_settings(&settings).build_transport().unwrap();
        assert_eq!(transport.endpoint(), "http://localhost:5080");
        assert_eq!(transport.timeout(), Duration::from_millis(1500));

        let transport = ClientBuilder::from_settings(&settings)
            .timeout(Duration::from_secs(2))
            .build_transport()
            .unwrap();
        assert_eq!(transport.timeout(), Duration::from_secs(2));
    }
}

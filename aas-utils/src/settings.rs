//! XML settings
//!
//! Servers and clients share one settings file:
//!
//! ```xml
//! <Settings>
//!   <Server>
//!     <ServerId>PumpServer</ServerId>
//!     <Hosting>
//!       <Environment>Development</Environment>
//!       <Urls><Url>http://+:5080</Url></Urls>
//!       <ContentPath>Content</ContentPath>
//!     </Hosting>
//!   </Server>
//!   <Client>
//!     <ClientId>PumpClient</ClientId>
//!     <Endpoint>http://localhost:5080/aas</Endpoint>
//!     <RequestTimeout>20000</RequestTimeout>
//!   </Client>
//!   <Proxy><UseProxy>false</UseProxy></Proxy>
//!   <Logging><Level>info</Level></Logging>
//!   <Miscellaneous><Station>7</Station></Miscellaneous>
//! </Settings>
//! ```

use crate::network;
use aas_core::{AasError, AasResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

/// Default settings file name next to the executable
pub const DEFAULT_FILE_NAME: &str = "Settings.xml";

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="utf-8"?>"#;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename = "Settings")]
pub struct Settings {
    #[serde(rename = "Server", default)]
    pub server: ServerConfig,
    #[serde(rename = "Client", default)]
    pub client: ClientConfig,
    #[serde(rename = "Proxy", default)]
    pub proxy: ProxyConfig,
    #[serde(rename = "Logging", default)]
    pub logging: LoggingConfig,
    /// Free-form key/value entries
    #[serde(rename = "Miscellaneous", default)]
    pub miscellaneous: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(rename = "ServerId", default)]
    pub server_id: String,
    #[serde(rename = "Hosting", default)]
    pub hosting: HostingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostingConfig {
    #[serde(rename = "Environment", default = "default_environment")]
    pub environment: String,
    #[serde(rename = "Urls", default)]
    pub urls: UrlList,
    #[serde(rename = "ContentPath", default, skip_serializing_if = "Option::is_none")]
    pub content_path: Option<String>,
}

impl Default for HostingConfig {
    fn default() -> Self {
        Self {
            environment: default_environment(),
            urls: UrlList::default(),
            content_path: None,
        }
    }
}

fn default_environment() -> String {
    "Production".to_string()
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UrlList {
    #[serde(rename = "Url", default)]
    pub url: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(rename = "ClientId", default)]
    pub client_id: String,
    #[serde(rename = "Endpoint", default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    /// Request timeout in milliseconds
    #[serde(rename = "RequestTimeout", default = "default_request_timeout")]
    pub request_timeout: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            client_id: String::new(),
            endpoint: None,
            request_timeout: default_request_timeout(),
        }
    }
}

fn default_request_timeout() -> u64 {
    20_000
}

impl ClientConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProxyConfig {
    #[serde(rename = "UseProxy", default)]
    pub use_proxy: bool,
    #[serde(rename = "ProxyAddress", default, skip_serializing_if = "Option::is_none")]
    pub proxy_address: Option<String>,
    #[serde(rename = "UserName", default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(rename = "Password", default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl ProxyConfig {
    /// Proxy address if the proxy is enabled and configured
    pub fn active_address(&self) -> Option<&str> {
        self.proxy_address
            .as_deref()
            .filter(|address| self.use_proxy && !address.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default level (`error`, `warn`, `info`, `debug`, `trace`)
    #[serde(rename = "Level", default = "default_level")]
    pub level: String,
    /// Filter directives such as `aas_client=debug,info`, overriding `level`
    #[serde(rename = "Filter", default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            filter: None,
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

impl LoggingConfig {
    pub fn with_level(level: impl Into<String>) -> Self {
        Self {
            level: level.into(),
            filter: None,
        }
    }

    /// Filter directive string for the subscriber
    pub fn directive(&self) -> String {
        match self.filter.as_deref().map(str::trim) {
            Some(filter) if !filter.is_empty() => filter.to_string(),
            _ => self.level.trim().to_ascii_lowercase(),
        }
    }
}

impl Settings {
    pub fn from_xml_str(xml: &str) -> AasResult<Self> {
        quick_xml::de::from_str(xml).map_err(|e| AasError::Settings(e.to_string()))
    }

    pub fn to_xml_string(&self) -> AasResult<String> {
        let body = quick_xml::se::to_string_with_root("Settings", self)
            .map_err(|e| AasError::Settings(e.to_string()))?;
        Ok(format!("{}\n{}", XML_DECLARATION, body))
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> AasResult<Self> {
        let path = path.as_ref();
        log::info!("Loading settings from {}", path.display());
        let xml = std::fs::read_to_string(path)?;
        Self::from_xml_str(&xml)
    }

    /// Load `file_name` from the directory of the running executable
    pub fn load_from_executing_directory(file_name: &str) -> AasResult<Self> {
        let exe = std::env::current_exe()?;
        let dir = exe
            .parent()
            .ok_or_else(|| {
                AasError::Settings(format!("No parent directory for {}", exe.display()))
            })?;
        Self::load_from_file(dir.join(file_name))
    }

    pub fn save_to_file(&self, path: impl AsRef<Path>) -> AasResult<()> {
        let path = path.as_ref();
        log::info!("Saving settings to {}", path.display());
        std::fs::write(path, self.to_xml_string()?)?;
        Ok(())
    }

    /// Miscellaneous entry by key
    pub fn misc(&self, key: &str) -> Option<&str> {
        self.miscellaneous.get(key).map(String::as_str)
    }

    /// Hosting URLs with wildcard hosts replaced by the local address
    pub fn advertised_urls(&self) -> Vec<String> {
        let urls = &self.server.hosting.urls.url;
        if urls.is_empty() {
            return Vec::new();
        }
        let ip = network::local_ip_or_loopback();
        urls.iter()
            .map(|url| network::replace_wildcard_host(url, ip))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<Settings>
  <Server>
    <ServerId>PumpServer</ServerId>
    <Hosting>
      <Environment>Development</Environment>
      <Urls>
        <Url>http://+:5080</Url>
        <Url>http://localhost:5081</Url>
      </Urls>
      <ContentPath>Content</ContentPath>
    </Hosting>
  </Server>
  <Client>
    <ClientId>PumpClient</ClientId>
    <Endpoint>http://localhost:5080/aas</Endpoint>
    <RequestTimeout>5000</RequestTimeout>
  </Client>
  <Proxy>
    <UseProxy>true</UseProxy>
    <ProxyAddress>http://proxy:3128</ProxyAddress>
  </Proxy>
  <Logging>
    <Level>Debug</Level>
  </Logging>
  <Miscellaneous>
    <Station>7</Station>
    <Line>A</Line>
  </Miscellaneous>
</Settings>"#;

    #[test]
    fn test_parse_settings() {
        let settings = Settings::from_xml_str(SAMPLE).unwrap();
        assert_eq!(settings.server.server_id, "PumpServer");
        assert_eq!(settings.server.hosting.environment, "Development");
        assert_eq!(settings.server.hosting.urls.url.len(), 2);
        assert_eq!(settings.client.timeout(), Duration::from_secs(5));
        assert_eq!(settings.proxy.active_address(), Some("http://proxy:3128"));
        assert_eq!(settings.logging.directive(), "debug");
        assert_eq!(settings.misc("Station"), Some("7"));
        assert_eq!(settings.misc("Missing"), None);
    }

    #[test]
    fn test_defaults_for_missing_sections() {
        let xml = "<Settings><Client><ClientId>c</ClientId></Client></Settings>";
        let settings = Settings::from_xml_str(xml).unwrap();
        assert_eq!(settings.client.request_timeout, 20_000);
        assert_eq!(settings.logging.level, "info");
        assert_eq!(settings.server.hosting.environment, "Production");
        assert!(settings.proxy.active_address().is_none());
        assert!(settings.advertised_urls().is_empty());
    }

    #[test]
    fn test_advertised_urls() {
        let settings = Settings::from_xml_str(SAMPLE).unwrap();
        let urls = settings.advertised_urls();
        assert!(!urls[0].contains('+'));
        assert!(urls[0].ends_with(":5080"));
        assert_eq!(urls[1], "http://localhost:5081");
    }

    #[test]
    fn test_file_round_trip() {
        let settings = Settings::from_xml_str(SAMPLE).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_FILE_NAME);
        settings.save_to_file(&path).unwrap();
        assert_eq!(Settings::load_from_file(&path).unwrap(), settings);
    }

    #[test]
    fn test_load_from_executing_directory() {
        let exe_dir = std::env::current_exe().unwrap().parent().unwrap().to_path_buf();
        let file = tempfile::Builder::new()
            .prefix("Settings-")
            .suffix(".xml")
            .tempfile_in(&exe_dir)
            .unwrap();
        std::fs::write(file.path(), SAMPLE).unwrap();
        let file_name = file.path().file_name().unwrap().to_str().unwrap();

        let settings = Settings::load_from_executing_directory(file_name).unwrap();
        assert_eq!(settings.client.client_id, "PumpClient");

        let missing = Settings::load_from_executing_directory("NoSuchSettings.xml").unwrap_err();
        assert!(matches!(missing, AasError::Io(_)));
    }

    #[test]
    fn test_invalid_xml() {
        let xml = "<Settings><Client><RequestTimeout>soon</RequestTimeout></Client></Settings>";
        let err = Settings::from_xml_str(xml).unwrap_err();
        assert!(matches!(err, AasError::Settings(_)));
    }
}

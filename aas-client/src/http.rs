//! HTTP transport
//!
//! [`HttpTransport`] is the seam between the shell client and the wire.
//! [`SimpleHttpClient`] implements it with `reqwest`; responses come back
//! raw and are turned into [`ApiResult`]s by [`evaluate_response`].

use aas_core::{AasError, AasResult, ApiResult, Message, MessageCollection, MessageType, strings};
use aas_utils::settings::ProxyConfig;
use async_trait::async_trait;
use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use std::time::Duration;

/// HTTP methods used by the AAS REST interface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Put,
    Post,
    Delete,
}

impl HttpMethod {
    fn to_reqwest(self) -> reqwest::Method {
        match self {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_reqwest().as_str())
    }
}

/// Raw response: status code and body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Bytes,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Response with a JSON body
    pub fn json(status: u16, body: &Value) -> Self {
        Self::new(status, body.to_string())
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Sends requests relative to a base endpoint
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Send a request to `path` below the endpoint
    ///
    /// # Errors
    /// Returns [`AasError::Http`] if no response was received. Error status
    /// codes are not errors at this level.
    async fn send(
        &self,
        method: HttpMethod,
        path: String,
        body: Option<Value>,
    ) -> AasResult<HttpResponse>;
}

/// `reqwest`-based transport
#[derive(Debug, Clone)]
pub struct SimpleHttpClient {
    client: reqwest::Client,
    endpoint: String,
    timeout: Duration,
}

impl SimpleHttpClient {
    /// Create a client for `endpoint`
    ///
    /// # Arguments
    /// * `endpoint` - Server base URL (e.g. "http://localhost:5080")
    /// * `timeout` - Per-request timeout
    /// * `proxy` - Proxy settings; ignored unless enabled
    ///
    /// # Errors
    /// Returns [`AasError::Http`] if the proxy address is invalid or the
    /// underlying client cannot be created.
    pub fn new(endpoint: &str, timeout: Duration, proxy: Option<&ProxyConfig>) -> AasResult<Self> {
        let mut builder = reqwest::Client::builder().timeout(timeout);

        if let Some(config) = proxy {
            if let Some(address) = config.active_address() {
                let mut proxy = reqwest::Proxy::all(address).map_err(|e| {
                    AasError::Http(format!("Invalid proxy address {}: {}", address, e))
                })?;
                if let Some(user) = config.user_name.as_deref() {
                    proxy = proxy.basic_auth(user, config.password.as_deref().unwrap_or(""));
                }
                log::info!("Using proxy {}", address);
                builder = builder.proxy(proxy);
            }
        }

        let client = builder
            .build()
            .map_err(|e| AasError::Http(format!("Cannot create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            timeout,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Absolute URL for `path`
    pub fn url(&self, path: &str) -> String {
        let path = strings::trim_slashes(path);
        if path.is_empty() {
            self.endpoint.clone()
        } else {
            format!("{}/{}", self.endpoint, path)
        }
    }

    /// Whether the endpoint's host accepts TCP connections
    pub async fn is_reachable(&self) -> bool {
        let Ok(url) = reqwest::Url::parse(&self.endpoint) else {
            return false;
        };
        let (Some(host), Some(port)) = (url.host_str(), url.port_or_known_default()) else {
            return false;
        };
        aas_utils::network::is_reachable(&format!("{}:{}", host, port), self.timeout).await
    }
}

#[async_trait]
impl HttpTransport for SimpleHttpClient {
    async fn send(
        &self,
        method: HttpMethod,
        path: String,
        body: Option<Value>,
    ) -> AasResult<HttpResponse> {
        let url = self.url(&path);
        log::debug!("{} {}", method, url);

        let mut request = self
            .client
            .request(method.to_reqwest(), &url)
            .header(reqwest::header::ACCEPT, "application/json");
        if let Some(body) = &body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AasError::Http(format!("{} {} failed: {}", method, url, e)))?;
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| {
                AasError::Http(format!("Reading response of {} {} failed: {}", method, url, e))
            })?;

        log::debug!("{} {} -> {} ({} bytes)", method, url, status, body.len());
        Ok(HttpResponse { status, body })
    }
}

/// Turn a raw response into a typed result
///
/// Success bodies are decoded as `T`; an empty body decodes from `null`.
/// Error bodies shaped like an [`ApiResult`] contribute their messages,
/// otherwise a message carrying the status code is produced.
pub fn evaluate_response<T: DeserializeOwned>(response: &HttpResponse) -> ApiResult<T> {
    if !response.is_success() {
        return failure_from(response);
    }

    let decoded = if response.body.iter().all(u8::is_ascii_whitespace) {
        serde_json::from_value(Value::Null)
    } else {
        serde_json::from_slice(&response.body)
    };
    match decoded {
        Ok(entity) => ApiResult::ok(entity),
        Err(err) => {
            ApiResult::failure(Message::exception(format!("Invalid response body: {}", err)))
        }
    }
}

/// Like [`evaluate_response`] but ignores the body of a successful response
pub fn evaluate_empty_response(response: &HttpResponse) -> ApiResult<()> {
    if response.is_success() {
        ApiResult::ok(())
    } else {
        failure_from(response)
    }
}

fn failure_from<T>(response: &HttpResponse) -> ApiResult<T> {
    let code = response.status.to_string();
    let messages = serde_json::from_slice::<ApiResult<Value>>(&response.body)
        .ok()
        .map(|result| result.messages)
        .filter(|messages| !messages.is_empty())
        .map(|messages| with_status_code(messages, &code));

    match messages {
        Some(messages) => ApiResult {
            success: false,
            is_exception: response.status >= 500,
            entity: None,
            messages,
        },
        None => {
            let text = match response.text().trim() {
                "" => format!("HTTP status {}", response.status),
                body => format!("HTTP status {}: {}", response.status, body),
            };
            let message_type = if response.status >= 500 {
                MessageType::Exception
            } else {
                MessageType::Error
            };
            ApiResult::failure(Message::new(message_type, text, Some(code)))
        }
    }
}

/// Fill in the HTTP status as code for server messages without one
fn with_status_code(messages: MessageCollection, code: &str) -> MessageCollection {
    let mut filled = MessageCollection::new();
    for mut message in messages.iter().cloned() {
        if message.code.is_none() && message.is_error() {
            message.code = Some(code.to_string());
        }
        filled.push(message);
    }
    filled
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_evaluate_success() {
        let result: ApiResult<Vec<u32>> =
            evaluate_response(&HttpResponse::json(200, &json!([1, 2])));
        assert_eq!(result.into_result().unwrap(), vec![1, 2]);

        let empty: ApiResult<()> = evaluate_response(&HttpResponse::new(204, ""));
        assert!(empty.is_success());

        let broken: ApiResult<Vec<u32>> = evaluate_response(&HttpResponse::new(200, "{"));
        assert!(!broken.is_success());
        assert!(broken.is_exception);
    }

    #[test]
    fn test_evaluate_server_messages() {
        let body = json!({
            "success": false,
            "messages": [{"messageType": "Error", "text": "Submodel Nameplate not found"}]
        });
        let result: ApiResult<Value> = evaluate_response(&HttpResponse::json(404, &body));
        assert!(!result.is_success());
        let err = result.into_result().unwrap_err();
        assert!(matches!(err, AasError::NotFound(ref text) if text.contains("Nameplate")));
    }

    #[test]
    fn test_evaluate_plain_error() {
        let result: ApiResult<Value> = evaluate_response(&HttpResponse::new(409, "exists"));
        let message = result.messages.first_error().unwrap();
        assert_eq!(message.code.as_deref(), Some("409"));
        assert_eq!(message.text, "HTTP status 409: exists");

        let result = evaluate_empty_response(&HttpResponse::new(503, ""));
        assert!(result.is_exception);
        assert!(matches!(result.ensure_success(), Err(AasError::Http(_))));
    }

    #[test]
    fn test_url_joining() {
        let client =
            SimpleHttpClient::new("http://localhost:5080/", Duration::from_secs(1), None).unwrap();
        assert_eq!(client.url("/aas/submodels/"), "http://localhost:5080/aas/submodels");
        assert_eq!(client.url(""), "http://localhost:5080");
    }

    #[test]
    fn test_invalid_proxy() {
        let proxy = ProxyConfig {
            use_proxy: true,
            proxy_address: Some("::not a url::".into()),
            user_name: None,
            password: None,
        };
        let err = SimpleHttpClient::new("http://localhost", Duration::from_secs(1), Some(&proxy))
            .unwrap_err();
        assert!(matches!(err, AasError::Http(_)));
    }

    #[tokio::test]
    async fn test_send_round_trip() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/aas/submodels/Nameplate/submodel/submodelElements/Serial/value"))
            .and(header("accept", "application/json"))
            .and(body_json(json!("SN-42")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
            .expect(1)
            .mount(&server)
            .await;

        let client = SimpleHttpClient::new(&server.uri(), Duration::from_secs(5), None).unwrap();
        let response = client
            .send(
                HttpMethod::Put,
                "aas/submodels/Nameplate/submodel/submodelElements/Serial/value".into(),
                Some(json!("SN-42")),
            )
            .await
            .unwrap();
        assert_eq!(response.status, 200);
        assert_eq!(serde_json::from_slice::<Value>(&response.body).unwrap(), json!({"ok": true}));
        assert!(client.is_reachable().await);
    }

    #[tokio::test]
    async fn test_send_without_server() {
        let client =
            SimpleHttpClient::new("http://127.0.0.1:1", Duration::from_millis(500), None).unwrap();
        let err = client.send(HttpMethod::Get, "aas".into(), None).await.unwrap_err();
        assert!(matches!(err, AasError::Http(_)));
        assert!(!client.is_reachable().await);
    }
}

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! # `hkid-http` — HTTP Transport Backend
//!
//! This crate provides a concrete HTTP-based implementation of the
//! [`transport::Transport`] trait, used to talk JSON-RPC 2.0 to the ledger
//! node that hosts the registry contracts.
//!
//! ## Overview
//!
//! - Implements [`HttpTransport`], a thin wrapper over [`reqwest::Client`]
//! - Supports unauthenticated, basic-auth and bearer-token endpoints
//! - Built directly from a [`transport::TransportConfig`] via [`HttpTransport::from_config`]
//!
//! ## Example
//! ```no_run
//! use hkid_http::HttpTransport;
//! use transport::Transport;
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let transport = HttpTransport::new("https://rpc.debugchain.net");
//! let block = transport.send("eth_blockNumber", &[]).await.unwrap();
//! println!("{}", block);
//! # });
//! ```

use async_trait::async_trait;
use serde_json::Value;
use transport::{Transport, TransportConfig, TransportError};

/// Credentials attached to every request.
#[derive(Clone, Debug, PartialEq)]
enum Auth {
    Basic(String, String),
    Bearer(String),
}

/// A concrete implementation of the [`Transport`] trait using HTTP.
///
/// `HttpTransport` performs no result typing. It sends raw JSON-RPC
/// requests and returns the `result` member as a [`serde_json::Value`].
/// Errors at any stage (HTTP, JSON parsing, or RPC) are normalized into
/// [`TransportError`] variants.
#[derive(Clone)]
pub struct HttpTransport {
    /// The underlying HTTP client used to perform requests.
    client: reqwest::Client,
    /// The full URL of the JSON-RPC endpoint.
    url: String,
    /// Optional credentials.
    auth: Option<Auth>,
}

impl HttpTransport {
    /// Constructs a new `HttpTransport` targeting the provided URL, without authentication.
    ///
    /// # Example
    /// ```
    /// use hkid_http::HttpTransport;
    /// use transport::Transport;
    ///
    /// let transport = HttpTransport::new("http://127.0.0.1:8545");
    /// assert_eq!(transport.endpoint(), "http://127.0.0.1:8545");
    /// ```
    pub fn new(url: impl Into<String>) -> Self {
        let url = url.into();
        logging::trace("HTTP", &format!("→ initializing HTTP transport for {}", url));
        Self { client: reqwest::Client::new(), url, auth: None }
    }

    /// Constructs a new `HttpTransport` with basic authentication.
    pub fn with_auth(
        url: impl Into<String>,
        user: impl Into<String>,
        pass: impl Into<String>,
    ) -> Self {
        Self { auth: Some(Auth::Basic(user.into(), pass.into())), ..Self::new(url) }
    }

    /// Constructs a new `HttpTransport` that sends a bearer token.
    pub fn with_bearer(url: impl Into<String>, token: impl Into<String>) -> Self {
        Self { auth: Some(Auth::Bearer(token.into())), ..Self::new(url) }
    }

    /// Builds a transport from configuration.
    ///
    /// # Errors
    /// Returns [`TransportError::Config`] if the transport type is not
    /// `"http"`, or if the auth section is missing the fields its type needs.
    pub fn from_config(config: &TransportConfig) -> Result<Self, TransportError> {
        if config.transport_type != "http" {
            return Err(TransportError::Config(format!(
                "unsupported transport type: {}",
                config.transport_type
            )));
        }

        let Some(auth) = &config.auth else {
            return Ok(Self::new(&config.endpoint));
        };

        match auth.auth_type.as_str() {
            "none" => Ok(Self::new(&config.endpoint)),
            "basic" => {
                let user = auth.username.as_deref().ok_or_else(|| {
                    TransportError::Config("basic auth requires a username".to_string())
                })?;
                Ok(Self::with_auth(&config.endpoint, user, auth.password.as_deref().unwrap_or("")))
            }
            "bearer" => {
                let token = auth.token.as_deref().ok_or_else(|| {
                    TransportError::Config("bearer auth requires a token".to_string())
                })?;
                Ok(Self::with_bearer(&config.endpoint, token))
            }
            other => Err(TransportError::Config(format!("unsupported auth type: {}", other))),
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    /// Sends a single JSON-RPC request and returns its `result` field as JSON.
    ///
    /// # Errors
    /// - [`TransportError::Http`] if the HTTP request fails
    /// - [`TransportError::Serialization`] if body parsing fails
    /// - [`TransportError::Rpc`] if the node returns a non-null error object
    /// - [`TransportError::InvalidFormat`] if the response is not a valid JSON-RPC envelope
    async fn send(&self, method: &str, params: &[Value]) -> Result<Value, TransportError> {
        logging::trace("HTTP", &format!("→ POST {} (method: {})", self.url, method));
        let body = serde_json::json!({
            "jsonrpc": "2.0",
            "id": "hkid",
            "method": method,
            "params": params
        });

        let mut req = self.client.post(&self.url).json(&body);
        match &self.auth {
            Some(Auth::Basic(u, p)) => req = req.basic_auth(u, Some(p)),
            Some(Auth::Bearer(t)) => req = req.bearer_auth(t),
            None => {}
        }
        let resp = req.send().await.map_err(|e| {
            tracing::error!("HTTP Transport - Request failed: {}", e);
            TransportError::Http(e.to_string())
        })?;

        let text = resp.text().await.map_err(|e| {
            tracing::error!("HTTP Transport - Failed to read body: {}", e);
            TransportError::Serialization(e.to_string())
        })?;

        let val: serde_json::Value = serde_json::from_str(&text)
            .map_err(|e| TransportError::Serialization(format!("{} (body: {})", e, text)))?;

        if let Some(error) = val.get("error") {
            if !error.is_null() {
                return Err(TransportError::Rpc(error.to_string()));
            }
        }

        if let Some(result) = val.get("result") {
            Ok(result.clone())
        } else {
            Err(TransportError::InvalidFormat(text))
        }
    }

    /// Returns the configured JSON-RPC endpoint URL.
    fn endpoint(&self) -> &str { &self.url }
}

#[cfg(test)]
mod tests {
    use transport::AuthConfig;

    use super::*;

    #[test]
    fn test_new() {
        let url = "http://127.0.0.1:8545";
        let transport = HttpTransport::new(url);

        assert_eq!(transport.url, url);
        assert!(transport.auth.is_none());
        assert_eq!(transport.endpoint(), url);
    }

    #[test]
    fn test_with_auth() {
        let url = "http://127.0.0.1:8545";
        let transport = HttpTransport::with_auth(url, "rpcuser", "rpcpassword");

        assert_eq!(transport.url, url);
        assert_eq!(
            transport.auth,
            Some(Auth::Basic("rpcuser".to_string(), "rpcpassword".to_string()))
        );

        let bearer = HttpTransport::with_bearer(url, "token");
        assert_eq!(bearer.auth, Some(Auth::Bearer("token".to_string())));
    }

    #[test]
    fn test_from_config() {
        let mut config = TransportConfig {
            transport_type: "http".to_string(),
            endpoint: "http://127.0.0.1:8545".to_string(),
            auth: None,
        };
        let plain = HttpTransport::from_config(&config).expect("plain config");
        assert!(plain.auth.is_none());

        config.auth = Some(AuthConfig::basic("u", "p"));
        let basic = HttpTransport::from_config(&config).expect("basic config");
        assert_eq!(basic.auth, Some(Auth::Basic("u".to_string(), "p".to_string())));

        config.auth = Some(AuthConfig::bearer("t"));
        let bearer = HttpTransport::from_config(&config).expect("bearer config");
        assert_eq!(bearer.auth, Some(Auth::Bearer("t".to_string())));

        config.auth = Some(AuthConfig {
            auth_type: "bearer".to_string(),
            username: None,
            password: None,
            token: None,
        });
        assert!(matches!(HttpTransport::from_config(&config), Err(TransportError::Config(_))));

        config.auth = None;
        config.transport_type = "ipc".to_string();
        assert!(matches!(HttpTransport::from_config(&config), Err(TransportError::Config(_))));
    }

    #[tokio::test]
    async fn test_send() {
        // Nothing listens on port 1.
        let transport = HttpTransport::new("http://127.0.0.1:1");
        let result = transport.send("eth_chainId", &[]).await;

        assert!(matches!(result, Err(TransportError::Http(_))));
    }
}

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! # `hkid-transport` — Ledger Communication Layer
//!
//! This crate defines the **transport abstraction** through which hkid
//! talks to the ledger node.
//!
//! Every contract read (`eth_call`) and every state-changing submission
//! (`eth_sendTransaction`) is a JSON-RPC request sent through an
//! implementation of [`Transport`]. The contract bindings in
//! `hkid-adapters` never see HTTP; they only see this trait, which lets
//! tests substitute an in-memory transport.
//!
//! ## Core Concepts
//!
//! ### `Transport` Trait
//! Defines how a single request is sent (`send`), returning the
//! deserialized `result` member as a [`serde_json::Value`].
//!
//! ### `TransportError`
//! Enumerates the classes of failure encountered during communication.
//! Higher layers forward these verbatim; nothing here retries.
//!
//! ### `DynTransport`
//! A type-erased (`Arc<dyn Transport>`) handle that is created once at
//! startup and shared by every contract binding.
//!
//! ## Example
//! ```no_run
//! use transport::{DynTransport, TransportError};
//!
//! async fn demo(transport: DynTransport) -> Result<(), TransportError> {
//!     let chain = transport.send("eth_chainId", &[]).await?;
//!     println!("chain = {}", chain);
//!     Ok(())
//! }
//! ```

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Type alias for structured error handling in transport operations.
pub type Result<T> = std::result::Result<T, TransportError>;

/// Canonical error type for all transport implementations.
#[derive(thiserror::Error, Debug)]
pub enum TransportError {
    /// An HTTP-level failure (connection refused, timeout, or bad status code).
    #[error("HTTP transport error: {0}")]
    Http(String),

    /// Failure to serialize or deserialize a JSON payload.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The node returned an explicit JSON-RPC error object (including reverts).
    #[error("RPC error: {0}")]
    Rpc(String),

    /// The response did not conform to the expected JSON-RPC envelope format.
    #[error("Invalid response format: {0}")]
    InvalidFormat(String),

    /// The transport configuration could not be used.
    #[error("Invalid transport configuration: {0}")]
    Config(String),
}

impl From<serde_json::Error> for TransportError {
    fn from(err: serde_json::Error) -> Self { TransportError::Serialization(err.to_string()) }
}

/// A single-request JSON-RPC transport to the ledger node.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends one JSON-RPC request.
    ///
    /// Implementations return the value of the `"result"` member, or a
    /// [`TransportError::Rpc`] when the node answered with an error object.
    async fn send(&self, method: &str, params: &[Value]) -> Result<Value>;

    /// Returns the configured endpoint, usually the node URL.
    fn endpoint(&self) -> &str;
}

/// Type alias for a shared, dynamically dispatched transport instance.
///
/// ```
/// use transport::DynTransport;
///
/// fn describe(t: &DynTransport) -> String { format!("ledger at {}", t.endpoint()) }
/// ```
pub type DynTransport = Arc<dyn Transport>;

/// Transport configuration for the ledger connection.
///
/// # Examples
///
/// ```
/// use transport::{AuthConfig, TransportConfig};
///
/// let config = TransportConfig {
///     transport_type: "http".to_string(),
///     endpoint: "https://rpc.debugchain.net".to_string(),
///     auth: Some(AuthConfig::bearer("secret-token")),
/// };
/// assert!(config.auth.is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransportConfig {
    /// Transport mechanism; only `"http"` is currently provided
    pub transport_type: String,
    /// Node URL
    pub endpoint: String,
    /// Authentication settings (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth: Option<AuthConfig>,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            transport_type: "http".to_string(),
            endpoint: "https://rpc.debugchain.net".to_string(),
            auth: None,
        }
    }
}

/// Authentication for the node endpoint.
///
/// Hosted RPC gateways use either HTTP basic credentials or a bearer token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Auth type: `"basic"`, `"bearer"` or `"none"`
    pub auth_type: String,
    /// Username (for basic auth)
    #[serde(default)]
    pub username: Option<String>,
    /// Password (for basic auth)
    #[serde(default)]
    pub password: Option<String>,
    /// Token (for bearer auth)
    #[serde(default)]
    pub token: Option<String>,
}

impl AuthConfig {
    /// Basic-auth credentials.
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            auth_type: "basic".to_string(),
            username: Some(username.into()),
            password: Some(password.into()),
            token: None,
        }
    }

    /// Bearer token.
    pub fn bearer(token: impl Into<String>) -> Self {
        Self { auth_type: "bearer".to_string(), username: None, password: None, token: Some(token.into()) }
    }
}

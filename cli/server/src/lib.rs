#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! hkid HTTP server
//!
//! A small warp server in front of the naming layer. The original entry
//! point `POST /did/register` forwards a registration to the controller and
//! returns its result; a few read-only routes expose hashing, ownership,
//! availability and pricing.
//!
//! Handlers are plain async functions over [`AppState`] returning
//! `Result<Value, ServerError>`, so they can be exercised without a socket.
//! Name path segments are percent-decoded before they reach a handler.
//! Failures are answered as `{"error": message}` with the status from
//! [`ServerError::status`].

use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;

use adapters::DynController;
use dispatcher::{DispatchError, NameService};
use normalization::suffix_tld;
use percent_encoding::percent_decode_str;
use serde::Deserialize;
use serde_json::{json, Value};
use thiserror::Error;
use types::Address;
use warp::http::StatusCode;
use warp::{Filter, Rejection, Reply};

/// Request bodies larger than this are rejected.
const MAX_BODY_BYTES: u64 = 16 * 1024;

/// Errors that can occur while handling a request
#[derive(Debug, Error)]
pub enum ServerError {
    /// The request body or parameters were malformed
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The naming layer or the ledger behind it failed
    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}

impl ServerError {
    /// HTTP status the error is answered with.
    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::Dispatch(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

/// Builds a controller handle for an address named in a request.
pub type ControllerFactory = Arc<dyn Fn(Address) -> DynController + Send + Sync>;

/// Shared state behind every route.
pub struct AppState {
    service: NameService,
    controller_at: Option<ControllerFactory>,
}

impl AppState {
    /// Serves `service`. Requests naming another controller are sent to the
    /// configured one unless a factory is installed.
    pub fn new(service: NameService) -> Self { Self { service, controller_at: None } }

    /// Lets `POST /did/register` target the controller named in its body.
    pub fn with_controller_factory(mut self, factory: ControllerFactory) -> Self {
        self.controller_at = Some(factory);
        self
    }

    fn service_for(&self, controller: Option<Address>) -> NameService {
        match (controller, &self.controller_at) {
            (Some(address), Some(factory)) => self.service.with_controller(factory(address)),
            _ => self.service.clone(),
        }
    }
}

/// Body of `POST /did/register`.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    /// Controller to register through instead of the configured one.
    #[serde(default)]
    pub controller: Option<Address>,
    /// Name to register, with or without the `.hk` suffix.
    pub name: String,
    /// Owner of the new name.
    pub addr: Address,
    /// Registration period in seconds.
    pub duration: u64,
}

/// `GET /health`
pub fn health() -> Value { json!({ "status": "ok" }) }

/// `GET /did/namehash/{name}`: the name is hashed exactly as given.
pub fn namehash(name: &str) -> Value {
    json!({ "name": name, "namehash": namehash::namehash(name) })
}

/// `GET /did/owner/{name}`
pub async fn owner(state: &AppState, name: &str) -> Result<Value, ServerError> {
    let name = suffix_tld(name);
    let owner = state.service.owner(&name).await?;
    Ok(json!({ "name": name, "owner": owner }))
}

/// `GET /did/available/{name}`
pub async fn available(state: &AppState, name: &str) -> Result<Value, ServerError> {
    let available = state.service.available(name).await?;
    Ok(json!({ "name": suffix_tld(name), "available": available }))
}

/// `GET /did/price/{name}/{duration}`
pub async fn price(state: &AppState, name: &str, duration: u64) -> Result<Value, ServerError> {
    let price = state.service.fee(name, duration).await?;
    Ok(json!({ "name": suffix_tld(name), "duration": duration, "price": price.to_string() }))
}

/// `POST /did/register`
pub async fn register(state: &AppState, body: Value) -> Result<Value, ServerError> {
    let request: RegisterRequest =
        serde_json::from_value(body).map_err(|e| ServerError::BadRequest(e.to_string()))?;
    tracing::info!(
        name = %request.name,
        owner = %request.addr,
        duration = request.duration,
        "register request"
    );

    let registration = state
        .service_for(request.controller)
        .name_register(&request.name, request.addr, request.duration)
        .await?;
    Ok(json!(registration))
}

/// Create the HTTP server routes
pub fn routes(
    state: Arc<AppState>,
) -> impl Filter<Extract = impl warp::Reply, Error = Infallible> + Clone {
    let with_state = warp::any().map(move || state.clone());

    let health_route = warp::path("health")
        .and(warp::path::end())
        .and(warp::get())
        .map(|| warp::reply::json(&health()));

    let namehash_route = warp::path!("did" / "namehash" / String)
        .and(warp::get())
        .map(|segment: String| reply(decode_name(&segment).map(|name| namehash(&name))));

    let owner_route = warp::path!("did" / "owner" / String)
        .and(warp::get())
        .and(with_state.clone())
        .then(|segment: String, state: Arc<AppState>| async move {
            let result = match decode_name(&segment) {
                Ok(name) => owner(&state, &name).await,
                Err(e) => Err(e),
            };
            reply(result)
        });

    let available_route = warp::path!("did" / "available" / String)
        .and(warp::get())
        .and(with_state.clone())
        .then(|segment: String, state: Arc<AppState>| async move {
            let result = match decode_name(&segment) {
                Ok(name) => available(&state, &name).await,
                Err(e) => Err(e),
            };
            reply(result)
        });

    let price_route = warp::path!("did" / "price" / String / u64)
        .and(warp::get())
        .and(with_state.clone())
        .then(|segment: String, duration: u64, state: Arc<AppState>| async move {
            let result = match decode_name(&segment) {
                Ok(name) => price(&state, &name, duration).await,
                Err(e) => Err(e),
            };
            reply(result)
        });

    let register_route = warp::path!("did" / "register")
        .and(warp::post())
        .and(warp::body::content_length_limit(MAX_BODY_BYTES))
        .and(warp::body::json())
        .and(with_state)
        .then(|body: Value, state: Arc<AppState>| async move {
            reply(register(&state, body).await)
        });

    health_route
        .or(namehash_route)
        .or(owner_route)
        .or(available_route)
        .or(price_route)
        .or(register_route)
        .recover(recover)
}

/// Serves the routes on `addr` until the process exits.
pub async fn serve(state: Arc<AppState>, addr: SocketAddr) {
    tracing::info!("hkid server listening on {}", addr);
    warp::serve(routes(state)).run(addr).await;
}

/// Percent-decodes a name taken from a URL path segment.
fn decode_name(segment: &str) -> Result<String, ServerError> {
    percent_decode_str(segment)
        .decode_utf8()
        .map(|name| name.into_owned())
        .map_err(|_| ServerError::BadRequest(format!("name is not valid UTF-8: {}", segment)))
}

fn reply(result: Result<Value, ServerError>) -> warp::reply::WithStatus<warp::reply::Json> {
    match result {
        Ok(body) => warp::reply::with_status(warp::reply::json(&body), StatusCode::OK),
        Err(e) => {
            tracing::error!("request failed: {}", e);
            error_reply(e.status(), &e.to_string())
        }
    }
}

fn error_reply(status: StatusCode, message: &str) -> warp::reply::WithStatus<warp::reply::Json> {
    warp::reply::with_status(warp::reply::json(&json!({ "error": message })), status)
}

/// Turns warp rejections into JSON error bodies.
async fn recover(err: Rejection) -> Result<impl Reply, Infallible> {
    let reply = if err.is_not_found() {
        error_reply(StatusCode::NOT_FOUND, "Not found")
    } else if let Some(e) = err.find::<warp::filters::body::BodyDeserializeError>() {
        error_reply(StatusCode::BAD_REQUEST, &e.to_string())
    } else if err.find::<warp::reject::PayloadTooLarge>().is_some() {
        error_reply(StatusCode::PAYLOAD_TOO_LARGE, "Payload too large")
    } else if err.find::<warp::reject::LengthRequired>().is_some() {
        error_reply(StatusCode::LENGTH_REQUIRED, "Content-Length required")
    } else if err.find::<warp::reject::UnsupportedMediaType>().is_some() {
        error_reply(StatusCode::UNSUPPORTED_MEDIA_TYPE, "Unsupported media type")
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        error_reply(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
    } else {
        tracing::warn!("unhandled rejection: {:?}", err);
        error_reply(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    };
    Ok(reply)
}

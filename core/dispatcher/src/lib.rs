#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Resolution dispatcher for the `.hk` namespace.
//!
//! [`NameService`] holds the registry, controller and resolver handles and
//! exposes one operation per contract capability. Each operation follows
//! the same path: normalize the name where the operation addresses a full
//! domain, compute its namehash, query a price when the call is paid, then
//! forward to the contract and hand back its result unmodified.
//!
//! Nothing here retries or validates. Collaborator failures surface as
//! [`DispatchError::Contract`] exactly as the adapter reported them.

use adapters::{ContractError, DynController, DynRegistry, DynResolver};
use serde::{Serialize, Serializer};
use thiserror::Error;
use types::{Amount, Identifier, TxHash};

mod lifecycle;
mod metadata;
mod ownership;
mod registration;

pub use types::is_unset;

/// Errors raised while dispatching an operation.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The contract call failed; the adapter error is forwarded unchanged.
    #[error(transparent)]
    Contract(#[from] ContractError),
    /// A resolver operation was requested but no resolver is bound.
    #[error("No resolver configured")]
    NoResolver,
}

/// Result alias for dispatcher operations.
pub type DispatchResult<T> = std::result::Result<T, DispatchError>;

/// Outcome of a paid registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Registration {
    /// The registered name with its top-level domain.
    pub name: String,
    /// Namehash of `name`; the registry token id.
    pub id: Identifier,
    /// Price paid, in wei.
    #[serde(serialize_with = "amount_as_decimal")]
    pub fee: Amount,
    /// Transaction reference reported by the ledger.
    pub tx: TxHash,
}

/// Outcome of minting a subdomain under an existing name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Subdomain {
    /// Full dotted name of the new subdomain.
    pub name: String,
    /// Namehash of `name`.
    pub id: Identifier,
    /// Namehash of the parent name.
    pub parent: Identifier,
    /// Transaction reference reported by the ledger.
    pub tx: TxHash,
}

/// Renders wei as a decimal string; JSON numbers lose precision above 2^53.
fn amount_as_decimal<S: Serializer>(amount: &Amount, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(amount)
}

/// Entry point for every naming operation.
///
/// Handles are created once at startup and shared; the service never
/// mutates them.
#[derive(Clone)]
pub struct NameService {
    registry: DynRegistry,
    controller: DynController,
    resolver: Option<DynResolver>,
}

impl NameService {
    /// Creates a service over a registry and a controller.
    pub fn new(registry: DynRegistry, controller: DynController) -> Self {
        Self { registry, controller, resolver: None }
    }

    /// Binds a resolver for record and reverse-name operations.
    pub fn with_resolver(mut self, resolver: DynResolver) -> Self {
        self.resolver = Some(resolver);
        self
    }

    /// Returns a copy of this service that targets another controller.
    pub fn with_controller(&self, controller: DynController) -> Self {
        Self { controller, ..self.clone() }
    }

    /// The bound registry.
    pub fn registry(&self) -> &DynRegistry { &self.registry }

    /// The bound controller.
    pub fn controller(&self) -> &DynController { &self.controller }

    fn resolver(&self) -> DispatchResult<&DynResolver> {
        self.resolver.as_ref().ok_or(DispatchError::NoResolver)
    }
}

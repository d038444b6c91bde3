//! Contract capability traits
//!
//! The naming layer talks to three deployed contracts: the registry (token
//! ownership and lifecycle), the controller (pricing and registration) and
//! the resolver (records and reverse names). Each is modeled as an async
//! trait so the dispatcher can hold `Arc<dyn ...>` handles and tests can
//! inject recording mocks.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use transport::TransportError;
use types::{Address, Amount, Identifier, TxHash, B256};

use crate::abi::AbiError;

#[derive(Debug, Error)]
/// Errors raised by contract calls
pub enum ContractError {
    /// The node could not be reached or rejected the call
    #[error(transparent)]
    Transport(#[from] TransportError),
    /// Return data did not decode
    #[error(transparent)]
    Abi(#[from] AbiError),
    /// The node answered with something other than the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
    /// A state-changing call was attempted without a sending account
    #[error("No sender account configured for state-changing calls")]
    NoSender,
}

/// Result alias for contract operations
pub type ContractResult<T> = std::result::Result<T, ContractError>;

/// Name registry: one token per registered name, keyed by its identifier.
#[async_trait]
pub trait Registry: Send + Sync {
    /// `ownerOf(id)`
    async fn owner_of(&self, id: Identifier) -> ContractResult<Address>;

    /// `exists(id)`
    async fn exists(&self, id: Identifier) -> ContractResult<bool>;

    /// `expire(id)`: expiry as a unix timestamp.
    async fn expire(&self, id: Identifier) -> ContractResult<u64>;

    /// `available(id)`
    async fn available(&self, id: Identifier) -> ContractResult<bool>;

    /// `parent(id)`
    async fn parent(&self, id: Identifier) -> ContractResult<Identifier>;

    /// `origin(id)`: top-level ancestor of a subdomain.
    async fn origin(&self, id: Identifier) -> ContractResult<Identifier>;

    /// `approve(addr, id)`
    async fn approve(&self, approved: Address, id: Identifier) -> ContractResult<TxHash>;

    /// `getApproved(id)`
    async fn get_approved(&self, id: Identifier) -> ContractResult<Address>;

    /// `transferFrom(from, to, id)`
    async fn transfer_from(
        &self,
        from: Address,
        to: Address,
        id: Identifier,
    ) -> ContractResult<TxHash>;

    /// `burn(id)`
    async fn burn(&self, id: Identifier) -> ContractResult<TxHash>;

    /// `mintSubdomain(owner, parent, label)`
    async fn mint_subdomain(
        &self,
        owner: Address,
        parent: Identifier,
        label: &str,
    ) -> ContractResult<TxHash>;
}

/// Registration controller: prices, registration and renewal.
///
/// Prices are quoted for a bare label (no top-level domain).
#[async_trait]
pub trait Controller: Send + Sync {
    /// `registerPrice(name, duration)`
    async fn register_price(&self, name: &str, duration: u64) -> ContractResult<Amount>;

    /// `renewPrice(name, duration)`
    async fn renew_price(&self, name: &str, duration: u64) -> ContractResult<Amount>;

    /// `basePrice(name)`
    async fn base_price(&self, name: &str) -> ContractResult<Amount>;

    /// `rentPrice(name, duration)`
    async fn rent_price(&self, name: &str, duration: u64) -> ContractResult<Amount>;

    /// `getPrices()`: the per-length price table.
    async fn get_prices(&self) -> ContractResult<Vec<Amount>>;

    /// `getTokenPrice()`
    async fn get_token_price(&self) -> ContractResult<Amount>;

    /// `nameRegister(name, addr, duration)` paying `payment`.
    async fn name_register(
        &self,
        name: &str,
        owner: Address,
        duration: u64,
        payment: Amount,
    ) -> ContractResult<TxHash>;

    /// `nameRegisterExtended(...)` paying `payment`; also writes records
    /// and optionally the reverse name.
    #[allow(clippy::too_many_arguments)]
    async fn name_register_extended(
        &self,
        name: &str,
        owner: Address,
        duration: u64,
        set_reverse: bool,
        key_hashes: &[B256],
        values: &[String],
        payment: Amount,
    ) -> ContractResult<TxHash>;

    /// `nameRegisterByManager(...)`: manager-only, no payment.
    async fn name_register_by_manager(
        &self,
        name: &str,
        owner: Address,
        duration: u64,
        set_reverse: bool,
        key_hashes: &[B256],
        values: &[String],
    ) -> ContractResult<TxHash>;

    /// `renew(label, duration)` paying `payment`.
    async fn renew(&self, label: &str, duration: u64, payment: Amount) -> ContractResult<TxHash>;

    /// `renewByManager(label, duration)`
    async fn renew_by_manager(&self, label: &str, duration: u64) -> ContractResult<TxHash>;
}

/// Resolver: key/value records per name plus reverse lookups.
#[async_trait]
pub trait Resolver: Send + Sync {
    /// `setName(addr, id)`
    async fn set_name(&self, addr: Address, id: Identifier) -> ContractResult<TxHash>;

    /// `getName(addr)`
    async fn get_name(&self, addr: Address) -> ContractResult<Identifier>;

    /// `setNftName(nftAddr, nftId, nameId)`
    async fn set_nft_name(
        &self,
        nft_addr: Address,
        nft_id: B256,
        name_id: Identifier,
    ) -> ContractResult<TxHash>;

    /// `getNftName(nftAddr, nftId)`
    async fn get_nft_name(&self, nft_addr: Address, nft_id: B256) -> ContractResult<Identifier>;

    /// `get(key, id)`
    async fn get(&self, key: &str, id: Identifier) -> ContractResult<String>;

    /// `getMany(keys, id)`
    async fn get_many(&self, keys: &[String], id: Identifier) -> ContractResult<Vec<String>>;

    /// `getManyByHash(keyHashes, id)`
    async fn get_many_by_hash(
        &self,
        key_hashes: &[B256],
        id: Identifier,
    ) -> ContractResult<Vec<String>>;

    /// `setManyByHash(keyHashes, values, id)`
    async fn set_many_by_hash(
        &self,
        key_hashes: &[B256],
        values: &[String],
        id: Identifier,
    ) -> ContractResult<TxHash>;
}

/// Shared registry handle
pub type DynRegistry = Arc<dyn Registry>;
/// Shared controller handle
pub type DynController = Arc<dyn Controller>;
/// Shared resolver handle
pub type DynResolver = Arc<dyn Resolver>;

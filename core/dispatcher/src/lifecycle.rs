//! Lifecycle queries, approvals and price pass-throughs.
//!
//! Lifecycle operations always address a full domain, so the name is
//! suffixed with the top-level domain before hashing.

use normalization::suffix_tld;
use types::{Address, Amount, Identifier, TxHash};

use crate::{DispatchResult, NameService};

fn domain_id(name: &str) -> Identifier { namehash::namehash(&suffix_tld(name)) }

impl NameService {
    /// Expiry of `name` as a unix timestamp.
    pub async fn expire(&self, name: &str) -> DispatchResult<u64> {
        tracing::debug!(name, "expire");
        Ok(self.registry.expire(domain_id(name)).await?)
    }

    /// Whether `name` can be registered.
    pub async fn available(&self, name: &str) -> DispatchResult<bool> {
        tracing::debug!(name, "available");
        Ok(self.registry.available(domain_id(name)).await?)
    }

    /// Identifier of the parent of `name`.
    pub async fn parent(&self, name: &str) -> DispatchResult<Identifier> {
        tracing::debug!(name, "parent");
        Ok(self.registry.parent(domain_id(name)).await?)
    }

    /// Identifier of the top-level ancestor of `name`.
    pub async fn origin(&self, name: &str) -> DispatchResult<Identifier> {
        tracing::debug!(name, "origin");
        Ok(self.registry.origin(domain_id(name)).await?)
    }

    /// Approves `approved` to transfer `name`.
    pub async fn approve(&self, name: &str, approved: Address) -> DispatchResult<TxHash> {
        tracing::debug!(name, approved = %approved, "approve");
        Ok(self.registry.approve(approved, domain_id(name)).await?)
    }

    /// Account approved to transfer `name`.
    pub async fn get_approved(&self, name: &str) -> DispatchResult<Address> {
        tracing::debug!(name, "get_approved");
        Ok(self.registry.get_approved(domain_id(name)).await?)
    }

    /// Price to register `label` for `duration` seconds.
    pub async fn register_price(&self, label: &str, duration: u64) -> DispatchResult<Amount> {
        Ok(self.controller.register_price(label, duration).await?)
    }

    /// Price to renew `label` for `duration` seconds.
    pub async fn renew_price(&self, label: &str, duration: u64) -> DispatchResult<Amount> {
        Ok(self.controller.renew_price(label, duration).await?)
    }

    /// Base component of the price of `label`.
    pub async fn base_price(&self, label: &str) -> DispatchResult<Amount> {
        Ok(self.controller.base_price(label).await?)
    }

    /// Rent component of the price of `label` over `duration` seconds.
    pub async fn rent_price(&self, label: &str, duration: u64) -> DispatchResult<Amount> {
        Ok(self.controller.rent_price(label, duration).await?)
    }

    /// The controller's price table.
    pub async fn get_prices(&self) -> DispatchResult<Vec<Amount>> {
        Ok(self.controller.get_prices().await?)
    }

    /// Token price used by the controller.
    pub async fn get_token_price(&self) -> DispatchResult<Amount> {
        Ok(self.controller.get_token_price().await?)
    }
}

//! Registration and renewal.
//!
//! The controller quotes and registers bare labels, so names are stripped
//! of their top-level domain before they reach it.

use normalization::{remove_tld, suffix_tld};
use types::{Address, Amount, RecordKey, TxHash};

use crate::{DispatchResult, NameService, Registration};

impl NameService {
    /// Registration fee for `name` over `duration` seconds.
    pub async fn fee(&self, name: &str, duration: u64) -> DispatchResult<Amount> {
        let label = remove_tld(name);
        Ok(self.controller.register_price(&label, duration).await?)
    }

    /// Registers `name` to `owner` for `duration` seconds, paying the
    /// quoted registration price.
    pub async fn name_register(
        &self,
        name: &str,
        owner: Address,
        duration: u64,
    ) -> DispatchResult<Registration> {
        let label = remove_tld(name);
        let full = suffix_tld(name);
        let id = namehash::namehash(&full);
        tracing::debug!(name = %full, id = %id, owner = %owner, duration, "name_register");

        let fee = self.controller.register_price(&label, duration).await?;
        let tx = self.controller.name_register(&label, owner, duration, fee).await?;
        Ok(Registration { name: full, id, fee, tx })
    }

    /// Registers `name` and writes its initial records in one paid call.
    ///
    /// `keys` and `values` are paired by position; keys are sent as their
    /// Keccak-256 hashes.
    pub async fn name_register_extended(
        &self,
        name: &str,
        owner: Address,
        duration: u64,
        set_reverse: bool,
        keys: &[RecordKey],
        values: &[String],
    ) -> DispatchResult<Registration> {
        let label = remove_tld(name);
        let full = suffix_tld(name);
        let id = namehash::namehash(&full);
        let key_hashes: Vec<_> = keys.iter().copied().map(namehash::key_hash).collect();
        tracing::debug!(name = %full, records = keys.len(), set_reverse, "name_register_extended");

        let fee = self.controller.register_price(&label, duration).await?;
        let tx = self
            .controller
            .name_register_extended(&label, owner, duration, set_reverse, &key_hashes, values, fee)
            .await?;
        Ok(Registration { name: full, id, fee, tx })
    }

    /// Manager-only variant of [`NameService::name_register_extended`]; no
    /// price is quoted and nothing is paid.
    pub async fn name_register_by_manager(
        &self,
        name: &str,
        owner: Address,
        duration: u64,
        set_reverse: bool,
        keys: &[RecordKey],
        values: &[String],
    ) -> DispatchResult<Registration> {
        let label = remove_tld(name);
        let full = suffix_tld(name);
        let id = namehash::namehash(&full);
        let key_hashes: Vec<_> = keys.iter().copied().map(namehash::key_hash).collect();
        tracing::debug!(name = %full, records = keys.len(), "name_register_by_manager");

        let tx = self
            .controller
            .name_register_by_manager(&label, owner, duration, set_reverse, &key_hashes, values)
            .await?;
        Ok(Registration { name: full, id, fee: 0, tx })
    }

    /// Extends `label` by `duration` seconds, paying the quoted renewal price.
    pub async fn renew(&self, label: &str, duration: u64) -> DispatchResult<TxHash> {
        tracing::debug!(label, duration, "renew");
        let price = self.controller.renew_price(label, duration).await?;
        Ok(self.controller.renew(label, duration, price).await?)
    }

    /// Manager-only renewal; nothing is paid.
    pub async fn renew_by_manager(&self, label: &str, duration: u64) -> DispatchResult<TxHash> {
        tracing::debug!(label, duration, "renew_by_manager");
        Ok(self.controller.renew_by_manager(label, duration).await?)
    }
}

//! Resolver records and reverse names.

use types::{Address, Identifier, RecordKey, TxHash, B256};

use crate::{DispatchResult, NameService};

impl NameService {
    /// Points the reverse record of `addr` at `name`.
    pub async fn set_name(&self, addr: Address, name: &str) -> DispatchResult<TxHash> {
        let id = namehash::namehash(name);
        tracing::debug!(addr = %addr, name, "set_name");
        Ok(self.resolver()?.set_name(addr, id).await?)
    }

    /// Reverse record of `addr`: the identifier of its primary name.
    pub async fn get_name(&self, addr: Address) -> DispatchResult<Identifier> {
        tracing::debug!(addr = %addr, "get_name");
        Ok(self.resolver()?.get_name(addr).await?)
    }

    /// Associates an NFT with a name token.
    pub async fn set_nft_name(
        &self,
        nft_addr: Address,
        nft_id: B256,
        name_id: Identifier,
    ) -> DispatchResult<TxHash> {
        tracing::debug!(nft = %nft_addr, nft_id = %nft_id, "set_nft_name");
        Ok(self.resolver()?.set_nft_name(nft_addr, nft_id, name_id).await?)
    }

    /// Name token associated with an NFT.
    pub async fn get_nft_name(&self, nft_addr: Address, nft_id: B256) -> DispatchResult<Identifier> {
        tracing::debug!(nft = %nft_addr, nft_id = %nft_id, "get_nft_name");
        Ok(self.resolver()?.get_nft_name(nft_addr, nft_id).await?)
    }

    /// Record `key` of `name`.
    pub async fn get_key(&self, name: &str, key: RecordKey) -> DispatchResult<String> {
        let id = namehash::namehash(name);
        tracing::debug!(name, key = %key, "get_key");
        Ok(self.resolver()?.get(key.as_str(), id).await?)
    }

    /// Records `keys` of `name`, in the order requested.
    pub async fn get_keys(&self, name: &str, keys: &[RecordKey]) -> DispatchResult<Vec<String>> {
        let id = namehash::namehash(name);
        let keys: Vec<String> = keys.iter().map(|k| k.as_str().to_string()).collect();
        tracing::debug!(name, count = keys.len(), "get_keys");
        Ok(self.resolver()?.get_many(&keys, id).await?)
    }

    /// Records of `name` addressed by key hash.
    pub async fn get_keys_by_hash(
        &self,
        name: &str,
        key_hashes: &[B256],
    ) -> DispatchResult<Vec<String>> {
        let id = namehash::namehash(name);
        tracing::debug!(name, count = key_hashes.len(), "get_keys_by_hash");
        Ok(self.resolver()?.get_many_by_hash(key_hashes, id).await?)
    }

    /// Writes records of `name` addressed by key hash, paired by position.
    pub async fn set_keys_by_hash(
        &self,
        name: &str,
        key_hashes: &[B256],
        values: &[String],
    ) -> DispatchResult<TxHash> {
        let id = namehash::namehash(name);
        tracing::debug!(name, count = key_hashes.len(), "set_keys_by_hash");
        Ok(self.resolver()?.set_many_by_hash(key_hashes, values, id).await?)
    }
}

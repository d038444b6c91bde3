//! Ownership queries and transfers.
//!
//! Names here are hashed as given, without appending the top-level domain.

use normalization::join_labels;
use types::{Address, Identifier, TxHash, EMPTY_ADDRESS};

use crate::{DispatchResult, NameService, Subdomain};

impl NameService {
    /// Owner of the token `id`.
    pub async fn owner_of_id(&self, id: Identifier) -> DispatchResult<Address> {
        tracing::debug!(id = %id, "owner_of_id");
        Ok(self.registry.owner_of(id).await?)
    }

    /// Owner of `name`. Fails the way the registry does for unknown names.
    pub async fn owner_of_name(&self, name: &str) -> DispatchResult<Address> {
        let id = namehash::namehash(name);
        tracing::debug!(name, id = %id, "owner_of_name");
        Ok(self.registry.owner_of(id).await?)
    }

    /// Whether `name` is registered.
    pub async fn exists(&self, name: &str) -> DispatchResult<bool> {
        let id = namehash::namehash(name);
        tracing::debug!(name, id = %id, "exists");
        Ok(self.registry.exists(id).await?)
    }

    /// Owner of `name`, or `None` when it is not registered.
    pub async fn owner(&self, name: &str) -> DispatchResult<Option<Address>> {
        let id = namehash::namehash(name);
        tracing::debug!(name, id = %id, "owner");
        if !self.registry.exists(id).await? {
            return Ok(None);
        }
        Ok(Some(self.registry.owner_of(id).await?))
    }

    /// Owner of `name`, or [`EMPTY_ADDRESS`] when it is not registered.
    pub async fn get_owner(&self, name: &str) -> DispatchResult<Address> {
        Ok(self.owner(name).await?.unwrap_or(EMPTY_ADDRESS))
    }

    /// Moves `name` from its current owner to `new_owner`.
    pub async fn transfer_name(&self, name: &str, new_owner: Address) -> DispatchResult<TxHash> {
        let id = namehash::namehash(name);
        let old_owner = self.get_owner(name).await?;
        tracing::debug!(name, from = %old_owner, to = %new_owner, "transfer_name");
        Ok(self.registry.transfer_from(old_owner, new_owner, id).await?)
    }

    /// Burns the token for `name`.
    pub async fn burn(&self, name: &str) -> DispatchResult<TxHash> {
        let id = namehash::namehash(name);
        tracing::debug!(name, id = %id, "burn");
        Ok(self.registry.burn(id).await?)
    }

    /// Mints `label` as a subdomain of `parent_name`, owned by `new_owner`.
    pub async fn mint_subdomain(
        &self,
        new_owner: Address,
        parent_name: &str,
        label: &str,
    ) -> DispatchResult<Subdomain> {
        let parent = namehash::namehash(parent_name);
        let name = join_labels(&[label, parent_name]);
        let id = namehash::namehash(&name);
        tracing::debug!(name = %name, owner = %new_owner, "mint_subdomain");

        let tx = self.registry.mint_subdomain(new_owner, parent, label).await?;
        Ok(Subdomain { name, id, parent, tx })
    }
}

//! JSON-RPC binding for the name registry contract.

use std::sync::Arc;

use async_trait::async_trait;
use types::{Address, Identifier, TxHash};

use crate::abi::{Decoder, Token};
use crate::contract::{ContractResult, Registry};
use crate::ledger::{Contract, LedgerClient};

/// [`Registry`] backed by a deployed contract.
#[derive(Clone)]
pub struct RpcRegistry {
    contract: Contract,
}

impl RpcRegistry {
    /// Binds the registry at `address`.
    pub fn new(client: Arc<LedgerClient>, address: Address) -> Self {
        Self { contract: Contract::new(client, address) }
    }

    /// The contract address.
    pub fn address(&self) -> Address { self.contract.address() }
}

#[async_trait]
impl Registry for RpcRegistry {
    async fn owner_of(&self, id: Identifier) -> ContractResult<Address> {
        let out = self.contract.view("ownerOf(uint256)", &[Token::Word(id)]).await?;
        Ok(Decoder::new(&out).address(0)?)
    }

    async fn exists(&self, id: Identifier) -> ContractResult<bool> {
        let out = self.contract.view("exists(uint256)", &[Token::Word(id)]).await?;
        Ok(Decoder::new(&out).bool(0)?)
    }

    async fn expire(&self, id: Identifier) -> ContractResult<u64> {
        let out = self.contract.view("expire(uint256)", &[Token::Word(id)]).await?;
        Ok(Decoder::new(&out).u64(0)?)
    }

    async fn available(&self, id: Identifier) -> ContractResult<bool> {
        let out = self.contract.view("available(uint256)", &[Token::Word(id)]).await?;
        Ok(Decoder::new(&out).bool(0)?)
    }

    async fn parent(&self, id: Identifier) -> ContractResult<Identifier> {
        let out = self.contract.view("parent(uint256)", &[Token::Word(id)]).await?;
        Ok(Decoder::new(&out).word(0)?)
    }

    async fn origin(&self, id: Identifier) -> ContractResult<Identifier> {
        let out = self.contract.view("origin(uint256)", &[Token::Word(id)]).await?;
        Ok(Decoder::new(&out).word(0)?)
    }

    async fn approve(&self, approved: Address, id: Identifier) -> ContractResult<TxHash> {
        self.contract
            .submit("approve(address,uint256)", &[Token::Address(approved), Token::Word(id)], 0)
            .await
    }

    async fn get_approved(&self, id: Identifier) -> ContractResult<Address> {
        let out = self.contract.view("getApproved(uint256)", &[Token::Word(id)]).await?;
        Ok(Decoder::new(&out).address(0)?)
    }

    async fn transfer_from(
        &self,
        from: Address,
        to: Address,
        id: Identifier,
    ) -> ContractResult<TxHash> {
        let args = [Token::Address(from), Token::Address(to), Token::Word(id)];
        self.contract.submit("transferFrom(address,address,uint256)", &args, 0).await
    }

    async fn burn(&self, id: Identifier) -> ContractResult<TxHash> {
        self.contract.submit("burn(uint256)", &[Token::Word(id)], 0).await
    }

    async fn mint_subdomain(
        &self,
        owner: Address,
        parent: Identifier,
        label: &str,
    ) -> ContractResult<TxHash> {
        let args = [Token::Address(owner), Token::Word(parent), Token::String(label.to_string())];
        self.contract.submit("mintSubdomain(address,uint256,string)", &args, 0).await
    }
}

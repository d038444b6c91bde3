//! JSON-RPC binding for the resolver contract.

use std::sync::Arc;

use async_trait::async_trait;
use types::{Address, Identifier, TxHash, B256};

use crate::abi::{Decoder, Token};
use crate::contract::{ContractResult, Resolver};
use crate::ledger::{Contract, LedgerClient};

/// [`Resolver`] backed by a deployed contract.
#[derive(Clone)]
pub struct RpcResolver {
    contract: Contract,
}

impl RpcResolver {
    /// Binds the resolver at `address`.
    pub fn new(client: Arc<LedgerClient>, address: Address) -> Self {
        Self { contract: Contract::new(client, address) }
    }

    /// The contract address.
    pub fn address(&self) -> Address { self.contract.address() }
}

#[async_trait]
impl Resolver for RpcResolver {
    async fn set_name(&self, addr: Address, id: Identifier) -> ContractResult<TxHash> {
        self.contract
            .submit("setName(address,uint256)", &[Token::Address(addr), Token::Word(id)], 0)
            .await
    }

    async fn get_name(&self, addr: Address) -> ContractResult<Identifier> {
        let out = self.contract.view("getName(address)", &[Token::Address(addr)]).await?;
        Ok(Decoder::new(&out).word(0)?)
    }

    async fn set_nft_name(
        &self,
        nft_addr: Address,
        nft_id: B256,
        name_id: Identifier,
    ) -> ContractResult<TxHash> {
        let args = [Token::Address(nft_addr), Token::Word(nft_id), Token::Word(name_id)];
        self.contract.submit("setNftName(address,uint256,uint256)", &args, 0).await
    }

    async fn get_nft_name(&self, nft_addr: Address, nft_id: B256) -> ContractResult<Identifier> {
        let args = [Token::Address(nft_addr), Token::Word(nft_id)];
        let out = self.contract.view("getNftName(address,uint256)", &args).await?;
        Ok(Decoder::new(&out).word(0)?)
    }

    async fn get(&self, key: &str, id: Identifier) -> ContractResult<String> {
        let args = [Token::String(key.to_string()), Token::Word(id)];
        let out = self.contract.view("get(string,uint256)", &args).await?;
        Ok(Decoder::new(&out).string(0)?)
    }

    async fn get_many(&self, keys: &[String], id: Identifier) -> ContractResult<Vec<String>> {
        let out = self
            .contract
            .view("getMany(string[],uint256)", &[Token::strings(keys), Token::Word(id)])
            .await?;
        Ok(Decoder::new(&out).string_array(0)?)
    }

    async fn get_many_by_hash(
        &self,
        key_hashes: &[B256],
        id: Identifier,
    ) -> ContractResult<Vec<String>> {
        let out = self
            .contract
            .view("getManyByHash(uint256[],uint256)", &[Token::words(key_hashes), Token::Word(id)])
            .await?;
        Ok(Decoder::new(&out).string_array(0)?)
    }

    async fn set_many_by_hash(
        &self,
        key_hashes: &[B256],
        values: &[String],
        id: Identifier,
    ) -> ContractResult<TxHash> {
        let args = [Token::words(key_hashes), Token::strings(values), Token::Word(id)];
        self.contract.submit("setManyByHash(uint256[],string[],uint256)", &args, 0).await
    }
}

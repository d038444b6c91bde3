//! JSON-RPC binding for the registration controller contract.

use std::sync::Arc;

use async_trait::async_trait;
use types::{Address, Amount, TxHash, B256};

use crate::abi::{Decoder, Token};
use crate::contract::{ContractResult, Controller};
use crate::ledger::{Contract, LedgerClient};

const NAME_REGISTER_EXTENDED: &str =
    "nameRegisterExtended(string,address,uint256,uint256,uint256[],string[])";
const NAME_REGISTER_BY_MANAGER: &str =
    "nameRegisterByManager(string,address,uint256,uint256,uint256[],string[])";

/// [`Controller`] backed by a deployed contract.
#[derive(Clone)]
pub struct RpcController {
    contract: Contract,
}

impl RpcController {
    /// Binds the controller at `address`.
    pub fn new(client: Arc<LedgerClient>, address: Address) -> Self {
        Self { contract: Contract::new(client, address) }
    }

    /// The contract address.
    pub fn address(&self) -> Address { self.contract.address() }

    async fn price(&self, signature: &str, args: &[Token]) -> ContractResult<Amount> {
        let out = self.contract.view(signature, args).await?;
        Ok(Decoder::new(&out).uint(0)?)
    }
}

fn name_and_duration(name: &str, duration: u64) -> [Token; 2] {
    [Token::String(name.to_string()), Token::uint(u128::from(duration))]
}

/// Argument tuple shared by the extended and manager registrations.
fn extended_args(
    name: &str,
    owner: Address,
    duration: u64,
    set_reverse: bool,
    key_hashes: &[B256],
    values: &[String],
) -> Vec<Token> {
    vec![
        Token::String(name.to_string()),
        Token::Address(owner),
        Token::uint(u128::from(duration)),
        Token::uint(u128::from(set_reverse)),
        Token::words(key_hashes),
        Token::strings(values),
    ]
}

#[async_trait]
impl Controller for RpcController {
    async fn register_price(&self, name: &str, duration: u64) -> ContractResult<Amount> {
        self.price("registerPrice(string,uint256)", &name_and_duration(name, duration)).await
    }

    async fn renew_price(&self, name: &str, duration: u64) -> ContractResult<Amount> {
        self.price("renewPrice(string,uint256)", &name_and_duration(name, duration)).await
    }

    async fn base_price(&self, name: &str) -> ContractResult<Amount> {
        self.price("basePrice(string)", &[Token::String(name.to_string())]).await
    }

    async fn rent_price(&self, name: &str, duration: u64) -> ContractResult<Amount> {
        self.price("rentPrice(string,uint256)", &name_and_duration(name, duration)).await
    }

    async fn get_prices(&self) -> ContractResult<Vec<Amount>> {
        let out = self.contract.view("getPrices()", &[]).await?;
        Ok(Decoder::new(&out).uint_array(0)?)
    }

    async fn get_token_price(&self) -> ContractResult<Amount> { self.price("getTokenPrice()", &[]).await }

    async fn name_register(
        &self,
        name: &str,
        owner: Address,
        duration: u64,
        payment: Amount,
    ) -> ContractResult<TxHash> {
        let args = [
            Token::String(name.to_string()),
            Token::Address(owner),
            Token::uint(u128::from(duration)),
        ];
        self.contract.submit("nameRegister(string,address,uint256)", &args, payment).await
    }

    async fn name_register_extended(
        &self,
        name: &str,
        owner: Address,
        duration: u64,
        set_reverse: bool,
        key_hashes: &[B256],
        values: &[String],
        payment: Amount,
    ) -> ContractResult<TxHash> {
        let args = extended_args(name, owner, duration, set_reverse, key_hashes, values);
        self.contract.submit(NAME_REGISTER_EXTENDED, &args, payment).await
    }

    async fn name_register_by_manager(
        &self,
        name: &str,
        owner: Address,
        duration: u64,
        set_reverse: bool,
        key_hashes: &[B256],
        values: &[String],
    ) -> ContractResult<TxHash> {
        let args = extended_args(name, owner, duration, set_reverse, key_hashes, values);
        self.contract.submit(NAME_REGISTER_BY_MANAGER, &args, 0).await
    }

    async fn renew(&self, label: &str, duration: u64, payment: Amount) -> ContractResult<TxHash> {
        self.contract
            .submit("renew(string,uint256)", &name_and_duration(label, duration), payment)
            .await
    }

    async fn renew_by_manager(&self, label: &str, duration: u64) -> ContractResult<TxHash> {
        self.contract
            .submit("renewByManager(string,uint256)", &name_and_duration(label, duration), 0)
            .await
    }
}

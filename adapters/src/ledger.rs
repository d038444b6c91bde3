//! Ledger client shared by every contract binding.
//!
//! Reads go through `eth_call` against the latest block. State changes go
//! through `eth_sendTransaction` from a node-managed account; signing and
//! nonce handling stay with the node.

use std::sync::Arc;

use serde_json::{json, Value};
use transport::DynTransport;
use types::{Address, Amount, TxHash};

use crate::abi::{self, Token};
use crate::{ContractError, ContractResult};

/// A connection to the ledger node plus the account that sends transactions.
///
/// Built once at startup and shared by reference (`Arc`) among the
/// registry, controller and resolver bindings.
pub struct LedgerClient {
    transport: DynTransport,
    sender: Option<Address>,
}

impl LedgerClient {
    /// Creates a client. Without a `sender`, only read-only calls succeed.
    pub fn new(transport: DynTransport, sender: Option<Address>) -> Self { Self { transport, sender } }

    /// The account state-changing calls are sent from.
    pub fn sender(&self) -> Option<Address> { self.sender }

    /// The node endpoint.
    pub fn endpoint(&self) -> &str { self.transport.endpoint() }

    /// Executes a read-only call and returns the raw return data.
    pub async fn call(&self, to: Address, data: Vec<u8>) -> ContractResult<Vec<u8>> {
        let mut tx = json!({ "to": to.to_hex(), "data": to_hex_data(&data) });
        if let Some(from) = self.sender {
            tx["from"] = json!(from.to_hex());
        }

        tracing::debug!(to = %to, bytes = data.len(), "eth_call");
        let result = self.transport.send("eth_call", &[tx, json!("latest")]).await?;
        from_hex_data(&result)
    }

    /// Submits a transaction and returns the reference the node reports.
    ///
    /// `value` is attached as payment when non-zero.
    pub async fn send_transaction(
        &self,
        to: Address,
        data: Vec<u8>,
        value: Amount,
    ) -> ContractResult<TxHash> {
        let from = self.sender.ok_or(ContractError::NoSender)?;
        let mut tx = json!({
            "from": from.to_hex(),
            "to": to.to_hex(),
            "data": to_hex_data(&data),
        });
        if value > 0 {
            tx["value"] = json!(format!("0x{:x}", value));
        }

        tracing::debug!(to = %to, value = %value, "eth_sendTransaction");
        let result = self.transport.send("eth_sendTransaction", &[tx]).await?;
        match result {
            Value::String(hash) => Ok(TxHash(hash)),
            other => Err(ContractError::InvalidResponse(format!(
                "expected transaction hash, got {}",
                other
            ))),
        }
    }
}

/// A deployed contract reached through a shared [`LedgerClient`].
#[derive(Clone)]
pub struct Contract {
    client: Arc<LedgerClient>,
    address: Address,
}

impl Contract {
    /// Binds `address` on `client`.
    pub fn new(client: Arc<LedgerClient>, address: Address) -> Self { Self { client, address } }

    /// The contract address.
    pub fn address(&self) -> Address { self.address }

    /// Calls a view function and returns its raw return data.
    pub async fn view(&self, signature: &str, args: &[Token]) -> ContractResult<Vec<u8>> {
        self.client.call(self.address, abi::encode_call(signature, args)).await
    }

    /// Sends a state-changing call with `value` attached.
    pub async fn submit(
        &self,
        signature: &str,
        args: &[Token],
        value: Amount,
    ) -> ContractResult<TxHash> {
        self.client.send_transaction(self.address, abi::encode_call(signature, args), value).await
    }
}

fn to_hex_data(data: &[u8]) -> String { format!("0x{}", hex::encode(data)) }

fn from_hex_data(value: &Value) -> ContractResult<Vec<u8>> {
    let text = value.as_str().ok_or_else(|| {
        ContractError::InvalidResponse(format!("expected hex string, got {}", value))
    })?;
    let digits = text.strip_prefix("0x").unwrap_or(text);
    hex::decode(digits).map_err(|e| ContractError::InvalidResponse(format!("{}: {}", text, e)))
}

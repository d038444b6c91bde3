#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Contract Adapter Library
//!
//! This crate defines the capability traits the naming layer depends on
//! ([`Registry`], [`Controller`], [`Resolver`]) and their JSON-RPC bindings.
//! Each binding ABI-encodes its call and sends it through a shared
//! [`LedgerClient`]: views use `eth_call`, state changes use
//! `eth_sendTransaction` from the configured sender.

pub mod abi;
pub mod contract;
pub mod controller;
pub mod ledger;
pub mod registry;
pub mod resolver;

// Re-export the main adapter types for convenience
pub use abi::{AbiError, Decoder, Token};
pub use contract::*;
pub use controller::RpcController;
pub use ledger::{Contract, LedgerClient};
pub use registry::RpcRegistry;
pub use resolver::RpcResolver;

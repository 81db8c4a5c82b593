//! Sui Transport Layer
//!
//! Network transport for reading Sui ledger state over the fullnode JSON-RPC API.
//!
//! This crate provides:
//! - [`jsonrpc`]: blocking JSON-RPC client for bulk object reads and dev-inspect calls
//! - [`ptb`]: BCS encoding of the single-call programmable transaction used for dev-inspect
//! - [`network`]: default endpoints per network
//!
//! # Example
//!
//! ```ignore
//! use sui_transport::JsonRpcClient;
//! use sui_profile_types::FetchOptions;
//!
//! let client = JsonRpcClient::for_network(NetworkName::Testnet);
//! let objects = client.multi_get_objects(&ids, FetchOptions::content_and_owner())?;
//! ```

pub mod jsonrpc;
pub mod network;
pub mod ptb;

// Re-export main types for convenience
pub use jsonrpc::JsonRpcClient;
pub use network::{default_rpc_url, resolve_rpc_url};

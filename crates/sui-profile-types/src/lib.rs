//! Shared types for the sui-profile workspace.
//!
//! This crate holds the vocabulary shared by the transport and the profile client,
//! so neither has to depend on the other for plain data:
//!
//! - [`profile`] - the typed [`ProfileRecord`] produced from a ledger object
//! - [`object`] - the tagged [`ObjectResponse`] union returned by bulk object fetches
//! - [`simulation`] - read-only Move call requests and their dev-inspect results
//! - [`address`] - parsing and formatting of 32-byte Sui addresses / object IDs
//! - [`network`] - the [`NetworkName`] selector
//! - [`env_utils`] - environment variable helpers used by configuration

pub mod address;
pub mod env_utils;
pub mod network;
pub mod object;
pub mod profile;
pub mod simulation;

pub use move_core_types::account_address::AccountAddress;

pub use network::NetworkName;
pub use object::{FetchOptions, ObjectContent, ObjectData, ObjectOwner, ObjectResponse};
pub use profile::{ProfileRecord, SocialPlatform};
pub use simulation::{CallInput, DevInspectResults, ExecutionResult, MoveCall};

/// Object ID type (32-byte address).
///
/// Object IDs and wallet addresses share the same representation; the alias
/// only documents which namespace a value belongs to.
pub type ObjectID = AccountAddress;

/// Wallet address type (32-byte address).
pub type SuiAddress = AccountAddress;

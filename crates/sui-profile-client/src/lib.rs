//! Sui Profile Client
//!
//! Resolves on-chain profile objects by owner address or object ID, in bulk,
//! with an in-memory cache and results in caller order.
//!
//! Building blocks, bottom-up:
//! - [`chunk`]: fixed-size batching of lookup keys
//! - [`invoker`]: the `get_profiles` simulated call and bulk object fetches
//! - [`decoder`]: BCS decoding of `vector<LookupResult>`
//! - [`mapper`]: fetched object to [`ProfileRecord`](sui_profile_types::ProfileRecord)
//! - [`client`]: the caching, order-preserving [`ProfileClient`]
//!
//! # Example
//!
//! ```ignore
//! use sui_profile_client::{ProfileClient, ProfileConfig};
//! use sui_profile_types::NetworkName;
//!
//! let client = ProfileClient::connect(ProfileConfig::for_network(NetworkName::Testnet)?);
//! let lookup = client.resolve_many_by_owner(&addresses, true).await?;
//! for (address, profile) in lookup.iter() {
//!     println!("{} -> {:?}", address, profile.map(|p| &p.name));
//! }
//! ```

pub mod cache;
pub mod chunk;
pub mod client;
pub mod config;
pub mod decoder;
pub mod error;
pub mod invoker;
pub mod ledger;
pub mod lookup;
pub mod mapper;

pub use cache::{CacheEntry, ProfileCache, ProfileMap};
pub use client::ProfileClient;
pub use config::{ProfileConfig, ADDRESS_BATCH_SIZE, OBJECT_BATCH_SIZE};
pub use decoder::LookupResult;
pub use error::{ProfileError, Result};
pub use ledger::LedgerReader;
pub use lookup::{LookupEntry, ProfileLookup};

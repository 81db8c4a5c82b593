//! Decoder for the `get_profiles` return value.
//!
//! The Move function returns `vector<LookupResult>` where
//! `LookupResult { lookup_addr: address, profile_addr: address }`. In BCS that is
//! a ULEB128 element count followed by 64 bytes per element. Decoding is strict:
//! truncated input and trailing bytes are both errors.

use serde::{Deserialize, Serialize};
use sui_profile_types::{ObjectID, SuiAddress};

use crate::error::Result;

/// One `(owner address, profile object id)` pair from the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LookupResult {
    pub lookup_addr: SuiAddress,
    pub profile_addr: ObjectID,
}

/// Decode a BCS `vector<LookupResult>`.
pub fn decode_lookup_results(bytes: &[u8]) -> Result<Vec<LookupResult>> {
    Ok(bcs::from_bytes(bytes)?)
}

/// Decode a BCS `bool` return value.
pub fn decode_bool(bytes: &[u8]) -> Result<bool> {
    Ok(bcs::from_bytes(bytes)?)
}

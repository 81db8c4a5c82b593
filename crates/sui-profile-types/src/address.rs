//! Address normalization utilities.
//!
//! Sui addresses and object IDs are 32-byte values, but they're often written in
//! different formats:
//! - Short form: "0x2"
//! - Full form: "0x0000000000000000000000000000000000000000000000000000000000000002"
//! - Without prefix: "2"
//!
//! Everything entering the workspace from a user or an RPC response goes through
//! [`parse_address`]; everything leaving it goes through [`address_to_string`].

use anyhow::{anyhow, Result};
use move_core_types::account_address::AccountAddress;

/// Normalize an address to lowercase with 0x prefix and full 64 hex characters.
///
/// # Examples
///
/// ```
/// use sui_profile_types::address::normalize_address;
///
/// assert_eq!(
///     normalize_address("0x2"),
///     "0x0000000000000000000000000000000000000000000000000000000000000002"
/// );
/// assert_eq!(
///     normalize_address("ABC"),
///     "0x0000000000000000000000000000000000000000000000000000000000000abc"
/// );
/// ```
pub fn normalize_address(addr: &str) -> String {
    let addr = addr.trim();
    let hex = addr
        .strip_prefix("0x")
        .or_else(|| addr.strip_prefix("0X"))
        .unwrap_or(addr)
        .to_lowercase();
    format!("0x{:0>64}", hex)
}

/// Parse a string address into an AccountAddress.
///
/// Handles short ("0x2"), full, and unprefixed forms. Inputs longer than
/// 32 bytes or containing non-hex characters are rejected.
///
/// # Examples
///
/// ```
/// use sui_profile_types::address::parse_address;
///
/// let addr = parse_address("0x2").unwrap();
/// assert_eq!(addr.to_hex_literal(), "0x2");
/// assert!(parse_address("not-hex").is_err());
/// ```
pub fn parse_address(addr: &str) -> Result<AccountAddress> {
    let normalized = normalize_address(addr);
    if normalized.len() != 66 {
        return Err(anyhow!("Invalid address '{}': longer than 32 bytes", addr));
    }
    AccountAddress::from_hex_literal(&normalized)
        .map_err(|e| anyhow!("Invalid address '{}': {}", addr, e))
}

/// Convert an AccountAddress to its normalized full-form string.
///
/// # Examples
///
/// ```
/// use sui_profile_types::AccountAddress;
/// use sui_profile_types::address::address_to_string;
///
/// let addr = AccountAddress::from_hex_literal("0x2").unwrap();
/// assert_eq!(
///     address_to_string(&addr),
///     "0x0000000000000000000000000000000000000000000000000000000000000002"
/// );
/// ```
pub fn address_to_string(addr: &AccountAddress) -> String {
    format!("0x{}", hex::encode(addr.as_ref()))
}

/// Serde adapter writing addresses as full-form `0x` hex strings.
///
/// The upstream `AccountAddress` serializer omits the `0x` prefix in
/// human-readable formats; JSON emitted by this workspace always carries it.
pub mod hex_address {
    use move_core_types::account_address::AccountAddress;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(addr: &AccountAddress, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::address_to_string(addr))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<AccountAddress, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        super::parse_address(&s).map_err(serde::de::Error::custom)
    }
}

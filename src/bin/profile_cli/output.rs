//! Output formatting for sui-profile CLI
//!
//! Human-readable lines go to stdout one per key; `--json` prints pretty JSON.

use anyhow::Result;

use sui_profile_client::ProfileLookup;
use sui_profile_types::address::address_to_string;
use sui_profile_types::{AccountAddress, ProfileRecord};

/// `key -> name (object id)` or `key -> <none>`.
pub fn format_entry(key: &AccountAddress, profile: Option<&ProfileRecord>) -> String {
    match profile {
        Some(profile) => format!(
            "{} -> {} ({})",
            address_to_string(key),
            profile.name,
            address_to_string(&profile.id)
        ),
        None => format!("{} -> <none>", address_to_string(key)),
    }
}

pub fn print_lookup(lookup: &ProfileLookup, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(lookup)?);
        return Ok(());
    }
    for (key, profile) in lookup.iter() {
        println!("{}", format_entry(key, profile));
    }
    Ok(())
}

pub fn print_flag(field: &str, value: bool, json: bool) -> Result<()> {
    if json {
        let mut object = serde_json::Map::new();
        object.insert(field.to_string(), serde_json::Value::Bool(value));
        println!("{}", serde_json::to_string_pretty(&object)?);
    } else {
        println!("{}", value);
    }
    Ok(())
}

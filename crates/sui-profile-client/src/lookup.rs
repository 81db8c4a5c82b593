use serde::Serialize;
use std::collections::HashMap;

use sui_profile_types::address::hex_address;
use sui_profile_types::{AccountAddress, ProfileRecord};

/// One key of a batch lookup and its outcome.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LookupEntry {
    #[serde(with = "hex_address")]
    pub key: AccountAddress,
    pub profile: Option<ProfileRecord>,
}

/// Result of a batch lookup, iterating in the caller's key order.
///
/// Repeated input keys appear at each of their positions with the same value,
/// so `len()` always equals the number of keys passed in.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ProfileLookup {
    entries: Vec<LookupEntry>,
}

impl ProfileLookup {
    /// Lay `resolved` out in `keys` order. Keys missing from `resolved` map to `None`.
    pub(crate) fn from_keys(
        keys: &[AccountAddress],
        resolved: &HashMap<AccountAddress, Option<ProfileRecord>>,
    ) -> Self {
        let entries = keys
            .iter()
            .map(|key| LookupEntry {
                key: *key,
                profile: resolved.get(key).cloned().flatten(),
            })
            .collect();
        Self { entries }
    }

    /// Outcome for `key`: outer `None` if the key was not part of the lookup.
    pub fn get(&self, key: &AccountAddress) -> Option<Option<&ProfileRecord>> {
        self.entries
            .iter()
            .find(|entry| entry.key == *key)
            .map(|entry| entry.profile.as_ref())
    }

    /// Profile for `key`, `None` if absent or not looked up.
    pub fn profile(&self, key: &AccountAddress) -> Option<&ProfileRecord> {
        self.get(key).flatten()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&AccountAddress, Option<&ProfileRecord>)> {
        self.entries
            .iter()
            .map(|entry| (&entry.key, entry.profile.as_ref()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &AccountAddress> {
        self.entries.iter().map(|entry| &entry.key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl IntoIterator for ProfileLookup {
    type Item = LookupEntry;
    type IntoIter = std::vec::IntoIter<LookupEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

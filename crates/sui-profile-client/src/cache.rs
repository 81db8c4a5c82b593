//! In-memory profile cache.
//!
//! Two independent maps, one keyed by owner address and one by object ID. An
//! entry is either a profile or a confirmed-absent marker (`None`), so a
//! repeated lookup for a key with no profile does not hit the network again.
//! Entries never expire and are never evicted.
//!
//! Thread-safe via internal RwLocks. Locks are held only for the duration of a
//! single map operation, never across an `.await`.

use parking_lot::RwLock;
use std::collections::HashMap;

use sui_profile_types::{AccountAddress, ProfileRecord};

/// A cached lookup outcome: `Some(profile)` or confirmed-absent (`None`).
pub type CacheEntry = Option<ProfileRecord>;

/// One key space of the cache.
#[derive(Debug, Default)]
pub struct ProfileMap {
    entries: RwLock<HashMap<AccountAddress, CacheEntry>>,
}

impl ProfileMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Outer `None`: never looked up. Inner `None`: confirmed absent.
    pub fn get(&self, key: &AccountAddress) -> Option<CacheEntry> {
        self.entries.read().get(key).cloned()
    }

    /// Store a batch of outcomes under one lock acquisition. Last writer wins.
    pub fn insert_many(&self, entries: impl IntoIterator<Item = (AccountAddress, CacheEntry)>) {
        let mut map = self.entries.write();
        for (key, entry) in entries {
            map.insert(key, entry);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Owner-address and object-ID caches owned by one client.
#[derive(Debug, Default)]
pub struct ProfileCache {
    pub by_owner: ProfileMap,
    pub by_id: ProfileMap,
}

impl ProfileCache {
    pub fn new() -> Self {
        Self::default()
    }
}

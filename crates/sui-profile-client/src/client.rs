//! Cached, order-preserving profile resolution.
//!
//! [`ProfileClient`] answers "which profile belongs to this address / object
//! ID" for any number of keys at once. Each call:
//!
//! 1. splits the keys into cached and uncached (uncached deduplicated, first-seen order)
//! 2. resolves the uncached keys through the chunked remote lookups
//! 3. writes every outcome, including confirmed absence, to the cache
//! 4. returns a [`ProfileLookup`] in the caller's key order
//!
//! A failing batch fails the whole call and leaves the cache untouched for
//! that call's uncached keys.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tracing::{debug, warn};

use sui_profile_types::address::address_to_string;
use sui_profile_types::{AccountAddress, ObjectID, ProfileRecord, SuiAddress};
use sui_transport::JsonRpcClient;

use crate::cache::{CacheEntry, ProfileCache, ProfileMap};
use crate::config::ProfileConfig;
use crate::error::Result;
use crate::invoker::{fetch_all_objects, is_name_available, resolve_all_addresses};
use crate::ledger::LedgerReader;
use crate::lookup::ProfileLookup;

/// Keys split by cache state.
struct Partition {
    resolved: HashMap<AccountAddress, CacheEntry>,
    uncached: Vec<AccountAddress>,
}

fn partition(keys: &[AccountAddress], use_cache: bool, map: &ProfileMap) -> Partition {
    let mut resolved = HashMap::new();
    let mut uncached = Vec::new();
    let mut seen = HashSet::new();

    for key in keys {
        if !seen.insert(*key) {
            continue;
        }
        match map.get(key) {
            Some(entry) if use_cache => {
                resolved.insert(*key, entry);
            }
            _ => uncached.push(*key),
        }
    }
    Partition { resolved, uncached }
}

/// Profile resolver with a per-instance cache.
pub struct ProfileClient {
    config: ProfileConfig,
    ledger: Arc<dyn LedgerReader>,
    cache: ProfileCache,
}

impl std::fmt::Debug for ProfileClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProfileClient")
            .field("config", &self.config)
            .field("cached_owners", &self.cache.by_owner.len())
            .field("cached_ids", &self.cache.by_id.len())
            .finish()
    }
}

impl ProfileClient {
    /// Create a client over any ledger reader.
    pub fn new(config: ProfileConfig, ledger: Arc<dyn LedgerReader>) -> Self {
        Self {
            config,
            ledger,
            cache: ProfileCache::new(),
        }
    }

    /// Create a client talking JSON-RPC to `config.rpc_url`.
    pub fn connect(config: ProfileConfig) -> Self {
        let ledger = Arc::new(JsonRpcClient::new(&config.rpc_url));
        Self::new(config, ledger)
    }

    pub fn config(&self) -> &ProfileConfig {
        &self.config
    }

    pub fn cache(&self) -> &ProfileCache {
        &self.cache
    }

    /// Resolve profiles by owner address.
    pub async fn resolve_many_by_owner(
        &self,
        addresses: &[SuiAddress],
        use_cache: bool,
    ) -> Result<ProfileLookup> {
        let Partition {
            mut resolved,
            uncached,
        } = partition(addresses, use_cache, &self.cache.by_owner);
        debug!(
            keys = addresses.len(),
            hits = resolved.len(),
            misses = uncached.len(),
            "resolving profiles by owner"
        );

        if !uncached.is_empty() {
            let pairs = resolve_all_addresses(self.ledger.as_ref(), &self.config, &uncached).await?;
            let ids: Vec<ObjectID> = pairs.iter().map(|pair| pair.profile_addr).collect();
            let profiles: HashMap<ObjectID, ProfileRecord> = self
                .resolve_many_by_id(&ids, use_cache)
                .await?
                .into_iter()
                .filter_map(|entry| entry.profile.map(|profile| (entry.key, profile)))
                .collect();

            let mut fresh: HashMap<SuiAddress, CacheEntry> =
                uncached.iter().map(|address| (*address, None)).collect();
            for pair in &pairs {
                let Some(slot) = fresh.get_mut(&pair.lookup_addr) else {
                    continue;
                };
                let profile = profiles.get(&pair.profile_addr).cloned();
                if let Some(profile) = &profile {
                    if profile.owner != pair.lookup_addr {
                        warn!(
                            address = %address_to_string(&pair.lookup_addr),
                            owner = %address_to_string(&profile.owner),
                            profile = %address_to_string(&profile.id),
                            "Profile owner differs from lookup address"
                        );
                    }
                }
                *slot = profile;
            }

            self.cache
                .by_owner
                .insert_many(fresh.iter().map(|(key, entry)| (*key, entry.clone())));
            resolved.extend(fresh);
        }

        Ok(ProfileLookup::from_keys(addresses, &resolved))
    }

    /// Resolve profiles by profile object ID.
    pub async fn resolve_many_by_id(
        &self,
        ids: &[ObjectID],
        use_cache: bool,
    ) -> Result<ProfileLookup> {
        let Partition {
            mut resolved,
            uncached,
        } = partition(ids, use_cache, &self.cache.by_id);
        debug!(
            keys = ids.len(),
            hits = resolved.len(),
            misses = uncached.len(),
            "resolving profiles by id"
        );

        if !uncached.is_empty() {
            let profiles = fetch_all_objects(self.ledger.as_ref(), &uncached).await?;

            let mut fresh: HashMap<ObjectID, CacheEntry> =
                uncached.iter().map(|id| (*id, None)).collect();
            for profile in profiles {
                if let Some(slot) = fresh.get_mut(&profile.id) {
                    *slot = Some(profile);
                }
            }

            self.cache
                .by_id
                .insert_many(fresh.iter().map(|(key, entry)| (*key, entry.clone())));
            resolved.extend(fresh);
        }

        Ok(ProfileLookup::from_keys(ids, &resolved))
    }

    /// Profile owned by `address`, if any. Uses the cache.
    pub async fn resolve_by_owner(&self, address: SuiAddress) -> Result<Option<ProfileRecord>> {
        let lookup = self.resolve_many_by_owner(&[address], true).await?;
        Ok(lookup.into_iter().next().and_then(|entry| entry.profile))
    }

    /// Profile stored at `id`, if any. Uses the cache.
    pub async fn resolve_by_id(&self, id: ObjectID) -> Result<Option<ProfileRecord>> {
        let lookup = self.resolve_many_by_id(&[id], true).await?;
        Ok(lookup.into_iter().next().and_then(|entry| entry.profile))
    }

    /// Whether `address` owns a profile.
    pub async fn has_profile(&self, address: SuiAddress, use_cache: bool) -> Result<bool> {
        let lookup = self.resolve_many_by_owner(&[address], use_cache).await?;
        Ok(lookup.profile(&address).is_some())
    }

    /// Whether `name` is still unclaimed in the registry. Never cached.
    pub async fn is_name_available(&self, name: &str) -> Result<bool> {
        is_name_available(self.ledger.as_ref(), &self.config, name).await
    }
}

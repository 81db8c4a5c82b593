//! Remote lookups against the profile registry.
//!
//! Per-batch operations ([`resolve_addresses_to_ids`], [`fetch_objects_by_ids`])
//! issue exactly one remote request each. The `*_all` variants chunk their
//! input, launch every batch at once, and join them; the first failing batch
//! fails the whole call.

use futures::future::try_join_all;
use serde::Serialize;
use tracing::debug;

use sui_profile_types::{FetchOptions, MoveCall, ObjectID, ProfileRecord, SuiAddress};

use crate::chunk::chunk;
use crate::config::{ProfileConfig, ADDRESS_BATCH_SIZE, OBJECT_BATCH_SIZE, PROFILE_MODULE};
use crate::decoder::{decode_bool, decode_lookup_results, LookupResult};
use crate::error::{ProfileError, Result};
use crate::ledger::LedgerReader;
use crate::mapper::map_to_profile;

fn pure_arg<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>> {
    bcs::to_bytes(value).map_err(|e| ProfileError::Encode(e.to_string()))
}

/// Run a read-only registry call and return its single return value.
async fn simulate_single_return(
    ledger: &dyn LedgerReader,
    config: &ProfileConfig,
    call: MoveCall,
) -> Result<Vec<u8>> {
    let target = call.target();
    let inspected = ledger
        .simulate_call(config.sender, call)
        .await
        .map_err(|e| ProfileError::remote(&target, e))?;

    if let Some(error) = inspected.error {
        return Err(ProfileError::RemoteCall(format!("{}: {}", target, error)));
    }
    let first = inspected
        .results
        .into_iter()
        .next()
        .ok_or_else(|| ProfileError::RemoteCall(format!("{}: response has no results", target)))?;
    first
        .return_values
        .into_iter()
        .next()
        .map(|(bytes, _type)| bytes)
        .ok_or_else(|| ProfileError::RemoteCall(format!("{}: call returned no value", target)))
}

/// Resolve one batch of owner addresses to their profile object IDs.
///
/// Addresses without a profile are absent from the result.
pub async fn resolve_addresses_to_ids(
    ledger: &dyn LedgerReader,
    config: &ProfileConfig,
    batch: &[SuiAddress],
) -> Result<Vec<LookupResult>> {
    let call = MoveCall::new(config.package_id, PROFILE_MODULE, "get_profiles")
        .with_object(config.registry_id)
        .with_pure(pure_arg(batch)?);
    let bytes = simulate_single_return(ledger, config, call).await?;
    decode_lookup_results(&bytes)
}

/// Fetch one batch of object IDs and map them to profiles.
///
/// IDs that do not exist or whose fetch errored are absent from the result.
/// Objects that exist but are not valid profiles fail the batch.
pub async fn fetch_objects_by_ids(
    ledger: &dyn LedgerReader,
    batch: &[ObjectID],
) -> Result<Vec<ProfileRecord>> {
    let responses = ledger
        .fetch_objects_bulk(batch.to_vec(), FetchOptions::content_and_owner())
        .await
        .map_err(|e| ProfileError::remote("multi-get objects", e))?;

    let mut profiles = Vec::with_capacity(responses.len());
    for response in &responses {
        if let Some(profile) = map_to_profile(response)? {
            profiles.push(profile);
        }
    }
    Ok(profiles)
}

/// Resolve any number of addresses, in batches of [`ADDRESS_BATCH_SIZE`].
pub async fn resolve_all_addresses(
    ledger: &dyn LedgerReader,
    config: &ProfileConfig,
    addresses: &[SuiAddress],
) -> Result<Vec<LookupResult>> {
    let batches = chunk(addresses, ADDRESS_BATCH_SIZE);
    debug!(
        addresses = addresses.len(),
        batches = batches.len(),
        "resolving profile object ids"
    );
    let results = try_join_all(
        batches
            .iter()
            .map(|batch| resolve_addresses_to_ids(ledger, config, batch)),
    )
    .await?;
    Ok(results.into_iter().flatten().collect())
}

/// Fetch any number of object IDs, in batches of [`OBJECT_BATCH_SIZE`].
pub async fn fetch_all_objects(
    ledger: &dyn LedgerReader,
    ids: &[ObjectID],
) -> Result<Vec<ProfileRecord>> {
    let batches = chunk(ids, OBJECT_BATCH_SIZE);
    debug!(ids = ids.len(), batches = batches.len(), "fetching profile objects");
    let results = try_join_all(batches.iter().map(|batch| fetch_objects_by_ids(ledger, batch))).await?;
    Ok(results.into_iter().flatten().collect())
}

/// Ask the registry whether `name` can still be claimed.
pub async fn is_name_available(
    ledger: &dyn LedgerReader,
    config: &ProfileConfig,
    name: &str,
) -> Result<bool> {
    let call = MoveCall::new(config.package_id, PROFILE_MODULE, "is_name_available")
        .with_object(config.registry_id)
        .with_pure(pure_arg(name)?);
    let bytes = simulate_single_return(ledger, config, call).await?;
    decode_bool(&bytes)
}

//! End-to-end resolution tests against an in-memory ledger.

use anyhow::{anyhow, bail, Result};
use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::json;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use sui_profile_client::{LedgerReader, LookupResult, ProfileClient, ProfileConfig, ProfileError};
use sui_profile_types::address::{address_to_string, parse_address};
use sui_profile_types::{
    AccountAddress, CallInput, DevInspectResults, ExecutionResult, FetchOptions, MoveCall,
    NetworkName, ObjectContent, ObjectData, ObjectID, ObjectOwner, ObjectResponse, SuiAddress,
};

fn addr(s: &str) -> AccountAddress {
    parse_address(s).unwrap()
}

/// How the stub answers a simulated call.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
enum SimulationMode {
    #[default]
    Normal,
    /// Transport failure.
    Unavailable,
    /// The call executed and aborted.
    Aborted,
    /// No execution results.
    NoResults,
    /// One execution result without return values.
    NoReturnValue,
    /// A return value that is not a BCS `vector<LookupResult>`.
    GarbledPayload,
}

/// Ledger stub: a registry of owner -> profile id, a set of objects, and call recording.
#[derive(Default)]
struct StubLedger {
    registry: Mutex<HashMap<SuiAddress, ObjectID>>,
    objects: Mutex<HashMap<ObjectID, ObjectResponse>>,
    taken_names: Vec<String>,
    /// Batches containing this address finish last.
    slow_address: Option<SuiAddress>,
    mode: Mutex<SimulationMode>,
    simulate_calls: AtomicUsize,
    fetch_calls: AtomicUsize,
    simulate_batch_sizes: Mutex<Vec<usize>>,
    fetch_batch_sizes: Mutex<Vec<usize>>,
}

impl StubLedger {
    fn with_profile(self, owner: &str, id: &str, name: &str) -> Self {
        self.add_profile(addr(owner), addr(id), name);
        self
    }

    /// Register a profile on the ledger; the stub may already be shared.
    fn add_profile(&self, owner: SuiAddress, id: ObjectID, name: &str) {
        self.registry.lock().insert(owner, id);
        self.objects.lock().insert(id, profile_object(id, owner, name));
    }

    fn set_mode(&self, mode: SimulationMode) {
        *self.mode.lock() = mode;
    }

    fn remote_calls(&self) -> usize {
        self.simulate_calls.load(Ordering::SeqCst) + self.fetch_calls.load(Ordering::SeqCst)
    }
}

fn profile_object(id: ObjectID, owner: SuiAddress, name: &str) -> ObjectResponse {
    owned_profile_object(id, ObjectOwner::Address(owner), name)
}

fn owned_profile_object(id: ObjectID, owner: ObjectOwner, name: &str) -> ObjectResponse {
    ObjectResponse::Found(ObjectData {
        object_id: id,
        version: 7,
        digest: None,
        content: Some(ObjectContent::MoveObject {
            type_string: "0xcafe::profile::Profile".to_string(),
            fields: json!({
                "id": { "id": address_to_string(&id) },
                "name": name,
                "image_url": "",
                "description": format!("{} on sui", name),
                "x_account": "",
                "telegram": format!("{}_tg", name),
                "data": "{}",
            }),
        }),
        owner: Some(owner),
    })
}

#[async_trait]
impl LedgerReader for StubLedger {
    async fn simulate_call(&self, _sender: SuiAddress, call: MoveCall) -> Result<DevInspectResults> {
        self.simulate_calls.fetch_add(1, Ordering::SeqCst);
        let mode = *self.mode.lock();
        match mode {
            SimulationMode::Unavailable => bail!("fullnode unavailable"),
            SimulationMode::Aborted => {
                return Ok(DevInspectResults {
                    error: Some("MoveAbort(profile, 3)".to_string()),
                    results: vec![],
                })
            }
            SimulationMode::NoResults => return Ok(DevInspectResults::default()),
            SimulationMode::NoReturnValue => {
                return Ok(DevInspectResults {
                    error: None,
                    results: vec![ExecutionResult::default()],
                })
            }
            SimulationMode::GarbledPayload => {
                return Ok(DevInspectResults {
                    error: None,
                    results: vec![ExecutionResult {
                        // Claims one element, then ends.
                        return_values: vec![(vec![1, 0xaa], "vector<LookupResult>".to_string())],
                    }],
                })
            }
            SimulationMode::Normal => {}
        }
        let pure = match call.arguments.get(1) {
            Some(CallInput::Pure(bytes)) => bytes.clone(),
            other => bail!("unexpected argument {:?}", other),
        };

        let (return_value, return_type) = match call.function.as_str() {
            "get_profiles" => {
                let addresses: Vec<SuiAddress> = bcs::from_bytes(&pure)?;
                self.simulate_batch_sizes.lock().push(addresses.len());
                if self
                    .slow_address
                    .map_or(false, |slow| addresses.contains(&slow))
                {
                    tokio::time::sleep(Duration::from_millis(30)).await;
                }
                let found: Vec<LookupResult> = {
                    let registry = self.registry.lock();
                    addresses
                        .iter()
                        .filter_map(|address| {
                            registry.get(address).map(|id| LookupResult {
                                lookup_addr: *address,
                                profile_addr: *id,
                            })
                        })
                        .collect()
                };
                (bcs::to_bytes(&found)?, "vector<LookupResult>")
            }
            "is_name_available" => {
                let name: String = bcs::from_bytes(&pure)?;
                (bcs::to_bytes(&!self.taken_names.contains(&name))?, "bool")
            }
            other => return Err(anyhow!("unknown function {}", other)),
        };

        Ok(DevInspectResults {
            error: None,
            results: vec![ExecutionResult {
                return_values: vec![(return_value, return_type.to_string())],
            }],
        })
    }

    async fn fetch_objects_bulk(
        &self,
        ids: Vec<ObjectID>,
        options: FetchOptions,
    ) -> Result<Vec<ObjectResponse>> {
        assert!(options.include_content && options.include_owner);
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        self.fetch_batch_sizes.lock().push(ids.len());
        let objects = self.objects.lock();
        Ok(ids
            .iter()
            .map(|id| {
                objects
                    .get(id)
                    .cloned()
                    .unwrap_or(ObjectResponse::NotFound {
                        object_id: Some(*id),
                    })
            })
            .collect())
    }
}

fn client(ledger: Arc<StubLedger>) -> ProfileClient {
    let config = ProfileConfig::new(NetworkName::Localnet, addr("0xcafe"), addr("0xbeef"));
    ProfileClient::new(config, ledger)
}

#[tokio::test]
async fn test_resolves_owner_batch_in_input_order() {
    let ledger = Arc::new(StubLedger::default().with_profile("0xa", "0x1a", "alice"));
    let client = client(ledger.clone());

    let lookup = client
        .resolve_many_by_owner(&[addr("0xa"), addr("0xb")], true)
        .await
        .unwrap();

    let entries: Vec<_> = lookup.iter().collect();
    assert_eq!(entries.len(), 2);
    assert_eq!(*entries[0].0, addr("0xa"));
    let alice = entries[0].1.unwrap();
    assert_eq!(alice.name, "alice");
    assert_eq!(alice.owner, addr("0xa"));
    assert_eq!(alice.id, addr("0x1a"));
    assert_eq!(*entries[1].0, addr("0xb"));
    assert!(entries[1].1.is_none());

    assert_eq!(ledger.simulate_calls.load(Ordering::SeqCst), 1);
    assert_eq!(*ledger.fetch_batch_sizes.lock(), vec![1]);
}

#[tokio::test]
async fn test_duplicates_keep_their_positions() {
    let ledger = Arc::new(
        StubLedger::default()
            .with_profile("0xa", "0x1a", "alice")
            .with_profile("0xc", "0x1c", "carol"),
    );
    let client = client(ledger.clone());
    let keys = [addr("0xc"), addr("0xb"), addr("0xa"), addr("0xc"), addr("0xb")];

    let lookup = client.resolve_many_by_owner(&keys, true).await.unwrap();

    assert_eq!(lookup.len(), keys.len());
    assert_eq!(lookup.keys().copied().collect::<Vec<_>>(), keys.to_vec());
    let names: Vec<Option<&str>> = lookup
        .iter()
        .map(|(_, profile)| profile.map(|p| p.name.as_str()))
        .collect();
    assert_eq!(
        names,
        vec![Some("carol"), None, Some("alice"), Some("carol"), None]
    );
    // Duplicates are resolved once.
    assert_eq!(*ledger.simulate_batch_sizes.lock(), vec![3]);
}

#[tokio::test]
async fn test_second_lookup_is_served_from_cache() {
    let ledger = Arc::new(StubLedger::default().with_profile("0xa", "0x1a", "alice"));
    let client = client(ledger.clone());

    let first = client.resolve_by_owner(addr("0xa")).await.unwrap();
    let calls_after_first = ledger.remote_calls();
    let second = client.resolve_by_owner(addr("0xa")).await.unwrap();

    assert!(calls_after_first > 0);
    assert_eq!(ledger.remote_calls(), calls_after_first);
    assert_eq!(first, second);
    assert!(client.has_profile(addr("0xa"), true).await.unwrap());
    assert_eq!(ledger.remote_calls(), calls_after_first);
}

#[tokio::test]
async fn test_absent_owner_is_cached() {
    let ledger = Arc::new(StubLedger::default());
    let client = client(ledger.clone());

    assert!(client.resolve_by_owner(addr("0xb")).await.unwrap().is_none());
    assert_eq!(ledger.simulate_calls.load(Ordering::SeqCst), 1);
    // No profile ids came back, so nothing to fetch.
    assert_eq!(ledger.fetch_calls.load(Ordering::SeqCst), 0);
    assert_eq!(client.cache().by_owner.get(&addr("0xb")), Some(None));

    assert!(!client.has_profile(addr("0xb"), true).await.unwrap());
    assert_eq!(ledger.remote_calls(), 1);
}

#[tokio::test]
async fn test_bypass_refetches_and_refreshes_cache() {
    let ledger = Arc::new(StubLedger::default());
    let client = client(ledger.clone());
    let bob = addr("0xb");

    assert!(client.resolve_by_owner(bob).await.unwrap().is_none());
    ledger.add_profile(bob, addr("0x2b"), "bob");

    // Cached absence hides the new profile.
    let calls = ledger.remote_calls();
    let cached = client.resolve_many_by_owner(&[bob], true).await.unwrap();
    assert!(cached.profile(&bob).is_none());
    assert_eq!(ledger.remote_calls(), calls);

    let refreshed = client.resolve_many_by_owner(&[bob], false).await.unwrap();
    assert_eq!(refreshed.profile(&bob).unwrap().name, "bob");
    assert!(ledger.remote_calls() > calls);

    let calls = ledger.remote_calls();
    let profile = client.resolve_by_owner(bob).await.unwrap().unwrap();
    assert_eq!(profile.name, "bob");
    assert_eq!(profile.id, addr("0x2b"));
    assert_eq!(ledger.remote_calls(), calls);
}

#[tokio::test]
async fn test_large_batches_are_chunked() {
    let mut ledger = StubLedger::default();
    let owners: Vec<SuiAddress> = (1..=95u64)
        .map(|i| addr(&format!("{:#x}", i)))
        .collect();
    for (i, owner) in owners.iter().enumerate() {
        let id = addr(&format!("{:#x}", 0x1000 + i));
        ledger.add_profile(*owner, id, &format!("user{}", i));
    }
    // First batch completes last.
    ledger.slow_address = Some(owners[0]);
    let ledger = Arc::new(ledger);
    let client = client(ledger.clone());

    let lookup = client.resolve_many_by_owner(&owners, true).await.unwrap();

    let mut simulate_sizes = ledger.simulate_batch_sizes.lock().clone();
    simulate_sizes.sort_unstable();
    assert_eq!(simulate_sizes, vec![5, 30, 30, 30]);
    let mut fetch_sizes = ledger.fetch_batch_sizes.lock().clone();
    fetch_sizes.sort_unstable();
    assert_eq!(fetch_sizes, vec![45, 50]);

    assert_eq!(lookup.keys().copied().collect::<Vec<_>>(), owners);
    for (i, (owner, profile)) in lookup.iter().enumerate() {
        let profile = profile.unwrap();
        assert_eq!(profile.owner, *owner);
        assert_eq!(profile.name, format!("user{}", i));
    }
}

#[tokio::test]
async fn test_failed_batch_leaves_cache_untouched() {
    let ledger = Arc::new(StubLedger::default().with_profile("0xa", "0x1a", "alice"));
    ledger.set_mode(SimulationMode::Unavailable);
    let client = client(ledger.clone());

    let err = client
        .resolve_many_by_owner(&[addr("0xa"), addr("0xb")], true)
        .await
        .unwrap_err();

    assert!(matches!(err, ProfileError::RemoteCall(ref msg) if msg.contains("fullnode unavailable")));
    assert!(client.cache().by_owner.is_empty());
    assert!(client.cache().by_id.is_empty());

    ledger.set_mode(SimulationMode::Normal);
    assert!(client.has_profile(addr("0xa"), true).await.unwrap());
}

#[tokio::test]
async fn test_unusable_simulation_results_fail_without_caching() {
    let cases = [
        (SimulationMode::Aborted, "MoveAbort"),
        (SimulationMode::NoResults, "no results"),
        (SimulationMode::NoReturnValue, "returned no value"),
    ];
    for (mode, expected) in cases {
        let ledger = Arc::new(StubLedger::default().with_profile("0xa", "0x1a", "alice"));
        ledger.set_mode(mode);
        let client = client(ledger.clone());

        let err = client
            .resolve_many_by_owner(&[addr("0xa"), addr("0xb")], true)
            .await
            .unwrap_err();

        assert!(
            matches!(err, ProfileError::RemoteCall(ref msg) if msg.contains(expected)),
            "{:?}: unexpected error {:?}",
            mode,
            err
        );
        assert!(client.cache().by_owner.is_empty());
        assert_eq!(ledger.fetch_calls.load(Ordering::SeqCst), 0);
    }
}

#[tokio::test]
async fn test_garbled_lookup_payload_is_a_decode_error() {
    let ledger = Arc::new(StubLedger::default().with_profile("0xa", "0x1a", "alice"));
    ledger.set_mode(SimulationMode::GarbledPayload);
    let client = client(ledger.clone());

    let err = client
        .resolve_many_by_owner(&[addr("0xa")], true)
        .await
        .unwrap_err();

    assert!(matches!(err, ProfileError::Decode(_)));
    assert!(client.cache().by_owner.is_empty());
    assert!(client.cache().by_id.is_empty());
}

#[tokio::test]
async fn test_profile_owned_by_object_is_keyed_by_lookup_address() {
    let ledger = Arc::new(StubLedger::default());
    let (alice, profile_id, kiosk) = (addr("0xa"), addr("0x1a"), addr("0xf00"));
    ledger.registry.lock().insert(alice, profile_id);
    ledger.objects.lock().insert(
        profile_id,
        owned_profile_object(profile_id, ObjectOwner::Object(kiosk), "alice"),
    );
    let client = client(ledger.clone());

    let lookup = client
        .resolve_many_by_owner(&[alice, kiosk], true)
        .await
        .unwrap();

    let profile = lookup.profile(&alice).unwrap();
    assert_eq!(profile.name, "alice");
    assert_eq!(profile.owner, kiosk);
    assert_eq!(lookup.get(&kiosk), Some(None));
    assert_eq!(
        client.cache().by_owner.get(&alice).flatten().map(|p| p.id),
        Some(profile_id)
    );
    assert_eq!(client.cache().by_owner.get(&kiosk), Some(None));
}

#[tokio::test]
async fn test_resolve_by_id_populates_id_cache() {
    let ledger = Arc::new(StubLedger::default().with_profile("0xa", "0x1a", "alice"));
    let client = client(ledger.clone());

    let lookup = client
        .resolve_many_by_id(&[addr("0x2b"), addr("0x1a")], true)
        .await
        .unwrap();
    assert!(lookup.profile(&addr("0x2b")).is_none());
    assert_eq!(lookup.profile(&addr("0x1a")).unwrap().name, "alice");
    assert_eq!(ledger.simulate_calls.load(Ordering::SeqCst), 0);
    assert_eq!(client.cache().by_id.len(), 2);

    assert!(client.resolve_by_id(addr("0x2b")).await.unwrap().is_none());
    assert_eq!(ledger.fetch_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_owner_lookup_reuses_cached_objects() {
    let ledger = Arc::new(StubLedger::default().with_profile("0xa", "0x1a", "alice"));
    let client = client(ledger.clone());

    client.resolve_by_id(addr("0x1a")).await.unwrap();
    let profile = client.resolve_by_owner(addr("0xa")).await.unwrap().unwrap();

    assert_eq!(profile.name, "alice");
    assert_eq!(ledger.fetch_calls.load(Ordering::SeqCst), 1);
    assert_eq!(ledger.simulate_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_wrong_object_type_fails_the_call() {
    let ledger = StubLedger::default();
    ledger.objects.lock().insert(
        addr("0x5"),
        ObjectResponse::Found(ObjectData {
            object_id: addr("0x5"),
            version: 1,
            digest: None,
            content: Some(ObjectContent::MoveObject {
                type_string: "0x2::coin::Coin<0x2::sui::SUI>".to_string(),
                fields: json!({}),
            }),
            owner: Some(ObjectOwner::Address(addr("0xa"))),
        }),
    );
    let client = client(Arc::new(ledger));

    let err = client.resolve_by_id(addr("0x5")).await.unwrap_err();
    assert!(matches!(err, ProfileError::WrongType { .. }));
    assert!(client.cache().by_id.is_empty());
}

#[tokio::test]
async fn test_name_availability() {
    let ledger = StubLedger {
        taken_names: vec!["alice".to_string()],
        ..Default::default()
    };
    let client = client(Arc::new(ledger));

    assert!(!client.is_name_available("alice").await.unwrap());
    assert!(client.is_name_available("bob").await.unwrap());
}

#[tokio::test]
async fn test_empty_input_makes_no_calls() {
    let ledger = Arc::new(StubLedger::default());
    let client = client(ledger.clone());

    assert!(client.resolve_many_by_owner(&[], true).await.unwrap().is_empty());
    assert!(client.resolve_many_by_id(&[], false).await.unwrap().is_empty());
    assert_eq!(ledger.remote_calls(), 0);
}

/// Requires a reachable fullnode and a deployed registry
/// (`SUI_PROFILE_PACKAGE_ID`, `SUI_PROFILE_REGISTRY_ID`).
#[tokio::test]
#[ignore]
async fn test_live_lookup_of_unknown_address() {
    let config = ProfileConfig::for_network(NetworkName::Testnet).unwrap();
    let client = ProfileClient::connect(config);
    let nobody = addr("0x0000000000000000000000000000000000000000000000000000000000000abc");
    assert!(!client.has_profile(nobody, true).await.unwrap());
}

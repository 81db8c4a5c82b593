//! JSON-RPC client for a Sui fullnode.
//!
//! Covers the read-only calls the profile client needs:
//! - `sui_multiGetObjects` for bulk object reads with content/owner projections
//! - `sui_getObject` for resolving a shared object's initial version
//! - `sui_devInspectTransactionBlock` for read-only Move calls
//!
//! The client is blocking (`ureq`); async callers drive it from
//! `tokio::task::spawn_blocking`. It is cheap to clone and clones share the
//! shared-object version cache.

use anyhow::{anyhow, Context, Result};
use base64::Engine;
use parking_lot::RwLock;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::trace;

use sui_profile_types::address::{address_to_string, parse_address};
use sui_profile_types::env_utils::env_var_or;
use sui_profile_types::{
    DevInspectResults, ExecutionResult, FetchOptions, MoveCall, NetworkName, ObjectContent,
    ObjectData, ObjectID, ObjectOwner, ObjectResponse, SuiAddress,
};

use crate::ptb::{self, ObjectArg};

/// JSON-RPC client for Sui fullnode queries.
#[derive(Clone)]
pub struct JsonRpcClient {
    endpoint: String,
    agent: ureq::Agent,
    next_id: Arc<AtomicU64>,
    /// object_id -> initial shared version
    shared_versions: Arc<RwLock<HashMap<ObjectID, u64>>>,
}

impl std::fmt::Debug for JsonRpcClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonRpcClient")
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

impl JsonRpcClient {
    /// Default request timeout in seconds (can be overridden by env).
    const DEFAULT_TIMEOUT_SECS: u64 = 30;
    /// Default connect timeout in seconds (can be overridden by env).
    const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

    fn default_timeouts() -> (Duration, Duration) {
        let timeout_secs = env_var_or("SUI_RPC_TIMEOUT_SECS", Self::DEFAULT_TIMEOUT_SECS);
        let connect_secs = env_var_or(
            "SUI_RPC_CONNECT_TIMEOUT_SECS",
            Self::DEFAULT_CONNECT_TIMEOUT_SECS,
        );
        (
            Duration::from_secs(timeout_secs),
            Duration::from_secs(connect_secs),
        )
    }

    /// Create a client for the default endpoint of `network`.
    pub fn for_network(network: NetworkName) -> Self {
        Self::new(&crate::network::default_rpc_url(network))
    }

    /// Create a client with a custom endpoint.
    pub fn new(endpoint: &str) -> Self {
        let (timeout, connect_timeout) = Self::default_timeouts();
        Self::with_timeouts(endpoint, timeout, connect_timeout)
    }

    /// Create a client with explicit timeouts.
    pub fn with_timeouts(endpoint: &str, timeout: Duration, connect_timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(timeout)
            .timeout_connect(connect_timeout)
            .build();
        Self {
            endpoint: endpoint.to_string(),
            agent,
            next_id: Arc::new(AtomicU64::new(1)),
            shared_versions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Execute a JSON-RPC request and return its `result` member.
    fn request(&self, method: &str, params: Value) -> Result<Value> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let body = serde_json::json!({
            "jsonrpc": "2.0",
            "id": id,
            "method": method,
            "params": params,
        });
        trace!(method, id, endpoint = %self.endpoint, "JSON-RPC request");

        let response: Value = self
            .agent
            .post(&self.endpoint)
            .set("Content-Type", "application/json")
            .send_json(&body)
            .map_err(|e| anyhow!("JSON-RPC request {} failed: {}", method, e))?
            .into_json()
            .map_err(|e| anyhow!("Failed to parse JSON-RPC response for {}: {}", method, e))?;

        if let Some(error) = response.get("error").filter(|e| !e.is_null()) {
            let msg = error
                .get("message")
                .and_then(|m| m.as_str())
                .unwrap_or("unknown error");
            return Err(anyhow!("JSON-RPC error from {}: {}", method, msg));
        }

        response
            .get("result")
            .cloned()
            .ok_or_else(|| anyhow!("No result in JSON-RPC response for {}", method))
    }

    // =========================================================================
    // Object Fetching
    // =========================================================================

    /// Fetch many objects in one request. Responses are in request order.
    pub fn multi_get_objects(
        &self,
        ids: &[ObjectID],
        options: FetchOptions,
    ) -> Result<Vec<ObjectResponse>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let ids_json: Vec<String> = ids.iter().map(address_to_string).collect();
        let result = self.request(
            "sui_multiGetObjects",
            serde_json::json!([ids_json, object_options_json(options)]),
        )?;
        let entries = result
            .as_array()
            .ok_or_else(|| anyhow!("sui_multiGetObjects returned a non-array result"))?;
        entries.iter().map(parse_object_response).collect()
    }

    /// Fetch a single object.
    pub fn get_object(&self, id: ObjectID, options: FetchOptions) -> Result<ObjectResponse> {
        let result = self.request(
            "sui_getObject",
            serde_json::json!([address_to_string(&id), object_options_json(options)]),
        )?;
        parse_object_response(&result)
    }

    /// Look up the initial shared version of a shared object (cached per client).
    pub fn initial_shared_version(&self, id: ObjectID) -> Result<u64> {
        if let Some(version) = self.shared_versions.read().get(&id).copied() {
            return Ok(version);
        }

        let options = FetchOptions {
            include_content: false,
            include_owner: true,
        };
        let version = match self.get_object(id, options)? {
            ObjectResponse::Found(ObjectData {
                owner: Some(ObjectOwner::Shared {
                    initial_shared_version,
                }),
                ..
            }) => initial_shared_version,
            ObjectResponse::Found(data) => {
                let kind = data.owner.as_ref().map(|o| o.kind()).unwrap_or("unknown");
                return Err(anyhow!(
                    "Object {} is not shared (owner: {})",
                    address_to_string(&id),
                    kind
                ));
            }
            ObjectResponse::NotFound { .. } => {
                return Err(anyhow!("Object {} not found", address_to_string(&id)));
            }
            ObjectResponse::Error { reason, .. } => {
                return Err(anyhow!(
                    "Failed to fetch object {}: {}",
                    address_to_string(&id),
                    reason
                ));
            }
        };

        self.shared_versions.write().insert(id, version);
        Ok(version)
    }

    // =========================================================================
    // Dev Inspect
    // =========================================================================

    /// Run a single Move call through `sui_devInspectTransactionBlock`.
    ///
    /// Object inputs must be shared objects; they are passed immutably.
    pub fn dev_inspect_move_call(
        &self,
        sender: SuiAddress,
        call: &MoveCall,
    ) -> Result<DevInspectResults> {
        let tx_bytes = ptb::encode_move_call(call, |id| {
            let version = self.initial_shared_version(id)?;
            Ok::<ObjectArg, anyhow::Error>(ptb::shared_readonly(id, version))
        })?;
        let tx_b64 = base64::engine::general_purpose::STANDARD.encode(tx_bytes);

        let result = self
            .request(
                "sui_devInspectTransactionBlock",
                serde_json::json!([address_to_string(&sender), tx_b64, Value::Null, Value::Null]),
            )
            .with_context(|| format!("dev-inspect {}", call.target()))?;
        parse_dev_inspect(&result)
    }
}

fn object_options_json(options: FetchOptions) -> Value {
    serde_json::json!({
        "showType": options.include_content,
        "showContent": options.include_content,
        "showOwner": options.include_owner,
    })
}

fn parse_u64(value: &Value) -> Option<u64> {
    value
        .as_u64()
        .or_else(|| value.as_str().and_then(|s| s.parse().ok()))
}

fn parse_id(value: Option<&Value>) -> Option<ObjectID> {
    value
        .and_then(|v| v.as_str())
        .and_then(|s| parse_address(s).ok())
}

/// Parse one `SuiObjectResponse`.
pub fn parse_object_response(value: &Value) -> Result<ObjectResponse> {
    if let Some(error) = value.get("error").filter(|e| !e.is_null()) {
        let object_id = parse_id(error.get("object_id"));
        let code = error.get("code").and_then(|c| c.as_str()).unwrap_or("");
        if matches!(code, "notExists" | "deleted") {
            return Ok(ObjectResponse::NotFound { object_id });
        }
        return Ok(ObjectResponse::Error {
            object_id,
            reason: error.to_string(),
        });
    }

    let data = match value.get("data").filter(|d| !d.is_null()) {
        Some(data) => data,
        None => return Ok(ObjectResponse::NotFound { object_id: None }),
    };

    let object_id = parse_id(data.get("objectId"))
        .ok_or_else(|| anyhow!("Object response is missing a valid objectId"))?;
    let version = data.get("version").and_then(parse_u64).unwrap_or(0);
    let digest = data
        .get("digest")
        .and_then(|d| d.as_str())
        .map(|s| s.to_string());

    Ok(ObjectResponse::Found(ObjectData {
        object_id,
        version,
        digest,
        content: data
            .get("content")
            .filter(|c| !c.is_null())
            .map(parse_content),
        owner: data.get("owner").filter(|o| !o.is_null()).map(parse_owner),
    }))
}

fn parse_content(content: &Value) -> ObjectContent {
    match content.get("dataType").and_then(|d| d.as_str()) {
        Some("package") => ObjectContent::Package,
        _ => ObjectContent::MoveObject {
            type_string: content
                .get("type")
                .and_then(|t| t.as_str())
                .unwrap_or_default()
                .to_string(),
            fields: content.get("fields").cloned().unwrap_or(Value::Null),
        },
    }
}

/// Parse an `Owner` value as rendered by JSON-RPC.
pub fn parse_owner(owner: &Value) -> ObjectOwner {
    if owner.as_str() == Some("Immutable") {
        return ObjectOwner::Immutable;
    }
    if let Some(addr) = parse_id(owner.get("AddressOwner")) {
        return ObjectOwner::Address(addr);
    }
    if let Some(addr) = parse_id(owner.get("ObjectOwner")) {
        return ObjectOwner::Object(addr);
    }
    if let Some(shared) = owner.get("Shared") {
        if let Some(version) = shared.get("initial_shared_version").and_then(parse_u64) {
            return ObjectOwner::Shared {
                initial_shared_version: version,
            };
        }
    }
    if let Some(consensus) = owner.get("ConsensusAddressOwner") {
        let start_version = consensus.get("start_version").and_then(parse_u64);
        let addr = parse_id(consensus.get("owner"));
        if let (Some(start_version), Some(owner)) = (start_version, addr) {
            return ObjectOwner::ConsensusAddress {
                start_version,
                owner,
            };
        }
    }
    ObjectOwner::Unknown(owner.to_string())
}

/// Parse a `DevInspectResults` value.
pub fn parse_dev_inspect(value: &Value) -> Result<DevInspectResults> {
    let error = value
        .get("error")
        .and_then(|e| e.as_str())
        .map(|s| s.to_string());

    let mut results = Vec::new();
    if let Some(entries) = value.get("results").and_then(|r| r.as_array()) {
        for entry in entries {
            let mut return_values = Vec::new();
            if let Some(values) = entry.get("returnValues").and_then(|r| r.as_array()) {
                for rv in values {
                    return_values.push(parse_return_value(rv)?);
                }
            }
            results.push(ExecutionResult { return_values });
        }
    }

    Ok(DevInspectResults { error, results })
}

/// A return value is rendered as `[[byte, ...], "type"]`.
fn parse_return_value(value: &Value) -> Result<(Vec<u8>, String)> {
    let pair = value
        .as_array()
        .filter(|p| p.len() == 2)
        .ok_or_else(|| anyhow!("Malformed return value: {}", value))?;
    let bytes = pair[0]
        .as_array()
        .ok_or_else(|| anyhow!("Return value bytes are not an array"))?
        .iter()
        .map(|b| {
            b.as_u64()
                .and_then(|b| u8::try_from(b).ok())
                .ok_or_else(|| anyhow!("Return value byte out of range: {}", b))
        })
        .collect::<Result<Vec<u8>>>()?;
    let type_string = pair[1].as_str().unwrap_or_default().to_string();
    Ok((bytes, type_string))
}

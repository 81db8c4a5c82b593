//! The seam between profile resolution and the ledger.
//!
//! [`LedgerReader`] is the narrow read-only surface the resolver needs. The
//! production implementation is [`JsonRpcClient`]; tests substitute stubs.

use anyhow::{anyhow, Result};
use async_trait::async_trait;

use sui_profile_types::{DevInspectResults, FetchOptions, MoveCall, ObjectID, ObjectResponse, SuiAddress};
use sui_transport::JsonRpcClient;

/// Read-only access to ledger state.
#[async_trait]
pub trait LedgerReader: Send + Sync {
    /// Execute `call` as a non-committing, gas-free simulated transaction from `sender`.
    async fn simulate_call(&self, sender: SuiAddress, call: MoveCall) -> Result<DevInspectResults>;

    /// Fetch `ids` in one request. Returns one response per id, in request order.
    async fn fetch_objects_bulk(
        &self,
        ids: Vec<ObjectID>,
        options: FetchOptions,
    ) -> Result<Vec<ObjectResponse>>;
}

#[async_trait]
impl LedgerReader for JsonRpcClient {
    async fn simulate_call(&self, sender: SuiAddress, call: MoveCall) -> Result<DevInspectResults> {
        let client = self.clone();
        tokio::task::spawn_blocking(move || client.dev_inspect_move_call(sender, &call))
            .await
            .map_err(|e| anyhow!("dev-inspect task failed: {}", e))?
    }

    async fn fetch_objects_bulk(
        &self,
        ids: Vec<ObjectID>,
        options: FetchOptions,
    ) -> Result<Vec<ObjectResponse>> {
        let client = self.clone();
        tokio::task::spawn_blocking(move || client.multi_get_objects(&ids, options))
            .await
            .map_err(|e| anyhow!("object fetch task failed: {}", e))?
    }
}

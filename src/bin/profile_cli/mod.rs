//! CLI command implementations for sui-profile

pub mod lookup;
pub mod output;

use anyhow::{Context, Result};
use clap::Args;
use tracing::debug;

use sui_profile_client::{ProfileClient, ProfileConfig};
use sui_profile_types::address::parse_address;
use sui_profile_types::{NetworkName, ObjectID};

/// Connection and cache flags shared by every subcommand.
#[derive(Args, Debug, Clone)]
pub struct ClientArgs {
    /// Network whose deployment and default endpoint to use
    #[arg(long, global = true, default_value = "mainnet")]
    pub network: NetworkName,

    /// Fullnode JSON-RPC endpoint (default: the network's public fullnode, or SUI_RPC_URL)
    #[arg(long, global = true)]
    pub rpc_url: Option<String>,

    /// Profile package id (overrides SUI_PROFILE_PACKAGE_ID)
    #[arg(long, global = true, value_parser = parse_address)]
    pub package_id: Option<ObjectID>,

    /// Profile registry object id (overrides SUI_PROFILE_REGISTRY_ID)
    #[arg(long, global = true, value_parser = parse_address)]
    pub registry_id: Option<ObjectID>,

    /// Always query the network, even for keys already resolved in this run
    #[arg(long, global = true)]
    pub no_cache: bool,
}

impl ClientArgs {
    pub fn use_cache(&self) -> bool {
        !self.no_cache
    }

    pub fn build(&self) -> Result<CliClient> {
        let mut config = ProfileConfig::resolve(self.network, self.package_id, self.registry_id)
            .context("Failed to configure profile client")?;
        if let Some(url) = &self.rpc_url {
            config = config.with_rpc_url(url);
        }
        debug!(
            network = %config.network,
            rpc_url = %config.rpc_url,
            "profile client configured"
        );
        Ok(CliClient {
            profiles: ProfileClient::connect(config),
            use_cache: self.use_cache(),
        })
    }
}

/// A connected client plus the per-invocation cache policy.
pub struct CliClient {
    pub profiles: ProfileClient,
    pub use_cache: bool,
}

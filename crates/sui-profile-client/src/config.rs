//! Client configuration.
//!
//! Values are layered, highest priority first:
//! 1. explicit overrides (builder methods / CLI flags)
//! 2. environment: `SUI_PROFILE_PACKAGE_ID`, `SUI_PROFILE_REGISTRY_ID`, `SUI_RPC_URL`
//! 3. built-in per-network deployment IDs and default fullnode endpoints

use sui_profile_types::address::parse_address;
use sui_profile_types::env_utils::env_nonempty;
use sui_profile_types::{NetworkName, ObjectID, SuiAddress};
use sui_transport::network::resolve_rpc_url;

use crate::error::{ProfileError, Result};

/// Addresses per `get_profiles` simulated call; keeps the call under argument/gas limits.
pub const ADDRESS_BATCH_SIZE: usize = 30;

/// Object IDs per bulk object fetch.
pub const OBJECT_BATCH_SIZE: usize = 50;

/// Sender used for read-only simulated calls. Any address works.
pub const DEV_INSPECT_SENDER: &str =
    "0xdeb24a3a025e4be1cb4371435f1db978b4f4f8b2526621035470d45c80060231";

/// Move module holding the profile registry entry points.
pub const PROFILE_MODULE: &str = "profile";

/// Published package and registry object for one network.
#[derive(Debug, Clone, Copy)]
pub struct Deployment {
    pub package_id: &'static str,
    pub registry_id: &'static str,
}

/// Built-in deployments. Empty until the contracts are published on a network.
pub fn deployment(network: NetworkName) -> Deployment {
    match network {
        NetworkName::Mainnet => Deployment {
            package_id: "",
            registry_id: "",
        },
        NetworkName::Testnet => Deployment {
            package_id: "",
            registry_id: "",
        },
        NetworkName::Devnet => Deployment {
            package_id: "",
            registry_id: "",
        },
        NetworkName::Localnet => Deployment {
            package_id: "",
            registry_id: "",
        },
    }
}

/// Everything a [`ProfileClient`](crate::ProfileClient) needs to talk to a deployment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileConfig {
    pub network: NetworkName,
    pub rpc_url: String,
    pub package_id: ObjectID,
    pub registry_id: ObjectID,
    pub sender: SuiAddress,
}

impl ProfileConfig {
    /// Config for an explicit deployment, with the network's default endpoint.
    pub fn new(network: NetworkName, package_id: ObjectID, registry_id: ObjectID) -> Self {
        Self {
            network,
            rpc_url: sui_transport::default_rpc_url(network),
            package_id,
            registry_id,
            sender: default_sender(),
        }
    }

    /// Config from environment and built-in deployment IDs.
    pub fn for_network(network: NetworkName) -> Result<Self> {
        Self::resolve(network, None, None)
    }

    /// Layer explicit overrides over environment and built-in deployment IDs.
    pub fn resolve(
        network: NetworkName,
        package_override: Option<ObjectID>,
        registry_override: Option<ObjectID>,
    ) -> Result<Self> {
        let builtin = deployment(network);
        let package_id = pick_id(
            "package",
            package_override,
            env_nonempty("SUI_PROFILE_PACKAGE_ID"),
            builtin.package_id,
            network,
        )?;
        let registry_id = pick_id(
            "registry",
            registry_override,
            env_nonempty("SUI_PROFILE_REGISTRY_ID"),
            builtin.registry_id,
            network,
        )?;

        Ok(Self {
            network,
            rpc_url: resolve_rpc_url(network),
            package_id,
            registry_id,
            sender: default_sender(),
        })
    }

    /// Builder: use a custom RPC endpoint.
    pub fn with_rpc_url(mut self, rpc_url: impl Into<String>) -> Self {
        self.rpc_url = rpc_url.into();
        self
    }

    /// Builder: use a custom sender for simulated calls.
    pub fn with_sender(mut self, sender: SuiAddress) -> Self {
        self.sender = sender;
        self
    }
}

fn default_sender() -> SuiAddress {
    SuiAddress::from_hex_literal(DEV_INSPECT_SENDER).unwrap_or(SuiAddress::ZERO)
}

fn pick_id(
    what: &str,
    explicit: Option<ObjectID>,
    from_env: Option<String>,
    builtin: &str,
    network: NetworkName,
) -> Result<ObjectID> {
    if let Some(id) = explicit {
        return Ok(id);
    }
    let raw = match from_env {
        Some(value) => value,
        None if !builtin.is_empty() => builtin.to_string(),
        None => {
            return Err(ProfileError::Config(format!(
                "no {} id configured for {}",
                what, network
            )))
        }
    };
    parse_address(&raw).map_err(|e| ProfileError::Config(format!("{} id: {:#}", what, e)))
}

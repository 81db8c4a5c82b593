use sui_profile_types::env_utils::env_nonempty;
use sui_profile_types::NetworkName;

const MAINNET_RPC: &str = "https://fullnode.mainnet.sui.io:443";
const TESTNET_RPC: &str = "https://fullnode.testnet.sui.io:443";
const DEVNET_RPC: &str = "https://fullnode.devnet.sui.io:443";
const LOCALNET_RPC: &str = "http://127.0.0.1:9000";

pub fn default_rpc_url(network: NetworkName) -> String {
    match network {
        NetworkName::Mainnet => MAINNET_RPC.to_string(),
        NetworkName::Testnet => TESTNET_RPC.to_string(),
        NetworkName::Devnet => DEVNET_RPC.to_string(),
        NetworkName::Localnet => LOCALNET_RPC.to_string(),
    }
}

/// RPC endpoint for `network`, honouring `SUI_RPC_URL` when set.
pub fn resolve_rpc_url(network: NetworkName) -> String {
    env_nonempty("SUI_RPC_URL").unwrap_or_else(|| default_rpc_url(network))
}

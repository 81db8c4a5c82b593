use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sui network a client talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NetworkName {
    #[default]
    Mainnet,
    Testnet,
    Devnet,
    Localnet,
}

impl NetworkName {
    pub const ALL: [NetworkName; 4] = [
        NetworkName::Mainnet,
        NetworkName::Testnet,
        NetworkName::Devnet,
        NetworkName::Localnet,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NetworkName::Mainnet => "mainnet",
            NetworkName::Testnet => "testnet",
            NetworkName::Devnet => "devnet",
            NetworkName::Localnet => "localnet",
        }
    }
}

impl fmt::Display for NetworkName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NetworkName {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mainnet" => Ok(NetworkName::Mainnet),
            "testnet" => Ok(NetworkName::Testnet),
            "devnet" => Ok(NetworkName::Devnet),
            "localnet" | "local" => Ok(NetworkName::Localnet),
            other => Err(anyhow::anyhow!(
                "Unknown network '{}' (expected mainnet, testnet, devnet or localnet)",
                other
            )),
        }
    }
}

//! Public fullnode endpoints.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A Sui network with a public fullnode endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SuiNetwork {
    #[default]
    Mainnet,
    Testnet,
    Devnet,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown network '{0}', available networks: devnet, mainnet, testnet")]
pub struct UnknownNetwork(String);

impl SuiNetwork {
    /// The public fullnode URL for this network.
    pub fn endpoint(&self) -> &'static str {
        match self {
            SuiNetwork::Mainnet => "https://fullnode.mainnet.sui.io:443",
            SuiNetwork::Testnet => "https://fullnode.testnet.sui.io:443",
            SuiNetwork::Devnet => "https://fullnode.devnet.sui.io:443",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SuiNetwork::Mainnet => "mainnet",
            SuiNetwork::Testnet => "testnet",
            SuiNetwork::Devnet => "devnet",
        }
    }
}

impl fmt::Display for SuiNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SuiNetwork {
    type Err = UnknownNetwork;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mainnet" => Ok(SuiNetwork::Mainnet),
            "testnet" => Ok(SuiNetwork::Testnet),
            "devnet" => Ok(SuiNetwork::Devnet),
            other => Err(UnknownNetwork(other.to_string())),
        }
    }
}

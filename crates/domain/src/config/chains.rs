use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

/// Chain 1: where the CCIP-Read resolver lives.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OriginConfig {
    #[serde(default = "default_origin_rpc_url")]
    pub rpc_url: String,

    #[serde(default = "default_origin_chain_id")]
    pub chain_id: u64,

    #[serde(default)]
    pub resolver_address: Option<Address>,
}

impl Default for OriginConfig {
    fn default() -> Self {
        Self {
            rpc_url: default_origin_rpc_url(),
            chain_id: default_origin_chain_id(),
            resolver_address: None,
        }
    }
}

/// Chain 2: registry, forwarder and payment contracts.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct L2Config {
    #[serde(default = "default_l2_rpc_url")]
    pub rpc_url: String,

    #[serde(default = "default_l2_chain_id")]
    pub chain_id: u64,

    #[serde(default)]
    pub registry_address: Option<Address>,
}

impl Default for L2Config {
    fn default() -> Self {
        Self {
            rpc_url: default_l2_rpc_url(),
            chain_id: default_l2_chain_id(),
            registry_address: None,
        }
    }
}

fn default_origin_rpc_url() -> String {
    "https://ethereum-sepolia-rpc.publicnode.com".to_string()
}

fn default_origin_chain_id() -> u64 {
    11_155_111
}

fn default_l2_rpc_url() -> String {
    "https://rpc.sepolia-api.lisk.com".to_string()
}

fn default_l2_chain_id() -> u64 {
    4202
}

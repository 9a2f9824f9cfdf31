use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GatewayConfig {
    /// Hex private key used only for signing gateway answers. Prefer the
    /// `NAMEGATE_GATEWAY_KEY` environment variable.
    #[serde(default, skip_serializing)]
    pub signing_key: Option<String>,

    /// Lifetime of a signed answer. The origin contract rejects answers
    /// whose expiry has passed, so this must cover client round-trip latency.
    #[serde(default = "default_signature_ttl_secs")]
    pub signature_ttl_secs: u64,

    /// EIP-3668 URL template tried when none of the contract's URLs answer.
    #[serde(default)]
    pub default_url: Option<String>,

    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,
}

impl GatewayConfig {
    pub fn signature_ttl(&self) -> Duration {
        Duration::from_secs(self.signature_ttl_secs)
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            signing_key: None,
            signature_ttl_secs: default_signature_ttl_secs(),
            default_url: None,
            fetch_timeout_secs: default_fetch_timeout_secs(),
        }
    }
}

fn default_signature_ttl_secs() -> u64 {
    300
}

fn default_fetch_timeout_secs() -> u64 {
    10
}

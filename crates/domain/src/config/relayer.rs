use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RelayerConfig {
    /// Hex private key of the single account that pays for relayed
    /// transactions. Prefer the `NAMEGATE_RELAYER_KEY` environment variable.
    #[serde(default, skip_serializing)]
    pub private_key: Option<String>,

    #[serde(default)]
    pub forwarder_address: Option<Address>,

    /// Payment contract: default meta-transaction target and the spender
    /// whose allowance is checked.
    #[serde(default)]
    pub payment_address: Option<Address>,

    #[serde(default)]
    pub token_address: Option<Address>,

    /// Extra gas on top of the estimate, in percent.
    #[serde(default = "default_gas_limit_margin_percent")]
    pub gas_limit_margin_percent: u64,

    #[serde(default = "default_confirmation_timeout_secs")]
    pub confirmation_timeout_secs: u64,

    #[serde(default = "default_receipt_poll_interval_ms")]
    pub receipt_poll_interval_ms: u64,

    /// Balance below which the gas monitor starts warning.
    #[serde(default = "default_min_gas_balance_gwei")]
    pub min_gas_balance_gwei: u64,

    /// Seconds between gas balance checks. 0 disables the job.
    #[serde(default = "default_balance_check_interval_secs")]
    pub balance_check_interval_secs: u64,
}

impl RelayerConfig {
    pub fn confirmation_timeout(&self) -> Duration {
        Duration::from_secs(self.confirmation_timeout_secs)
    }

    pub fn receipt_poll_interval(&self) -> Duration {
        Duration::from_millis(self.receipt_poll_interval_ms)
    }

    pub fn min_gas_balance_wei(&self) -> U256 {
        U256::from(self.min_gas_balance_gwei) * U256::from(1_000_000_000u64)
    }
}

impl Default for RelayerConfig {
    fn default() -> Self {
        Self {
            private_key: None,
            forwarder_address: None,
            payment_address: None,
            token_address: None,
            gas_limit_margin_percent: default_gas_limit_margin_percent(),
            confirmation_timeout_secs: default_confirmation_timeout_secs(),
            receipt_poll_interval_ms: default_receipt_poll_interval_ms(),
            min_gas_balance_gwei: default_min_gas_balance_gwei(),
            balance_check_interval_secs: default_balance_check_interval_secs(),
        }
    }
}

fn default_gas_limit_margin_percent() -> u64 {
    20
}

fn default_confirmation_timeout_secs() -> u64 {
    60
}

fn default_receipt_poll_interval_ms() -> u64 {
    1_000
}

fn default_min_gas_balance_gwei() -> u64 {
    10_000_000
}

fn default_balance_check_interval_secs() -> u64 {
    300
}

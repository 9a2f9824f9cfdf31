use namegate_domain::{Address, DomainError, U256};
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::ports::RelayChain;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelayerBalance {
    pub relayer: Address,
    pub balance: U256,
    pub below_minimum: bool,
}

pub struct CheckRelayerBalanceUseCase {
    chain: Arc<dyn RelayChain>,
    min_balance: U256,
}

impl CheckRelayerBalanceUseCase {
    pub fn new(chain: Arc<dyn RelayChain>, min_balance: U256) -> Self {
        Self { chain, min_balance }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self) -> Result<RelayerBalance, DomainError> {
        let relayer = self.chain.relayer_address();
        let balance = self.chain.native_balance(relayer).await?;
        let below_minimum = balance < self.min_balance;

        if below_minimum {
            warn!(
                relayer = %relayer,
                balance = %balance,
                minimum = %self.min_balance,
                "Relayer gas funds below minimum"
            );
        } else {
            info!(relayer = %relayer, balance = %balance, "Relayer gas funds");
        }

        Ok(RelayerBalance {
            relayer,
            balance,
            below_minimum,
        })
    }
}

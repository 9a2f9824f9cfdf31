use namegate_domain::{
    ConfirmationStatus, ContractCall, DomainError, PreparedTransaction, RelayReceipt, RetryPolicy,
    B256, U256,
};
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, instrument, warn};

use crate::ports::RelayChain;
use crate::services::{with_retry, RelayerNonce};

#[derive(Debug, Clone)]
pub struct SubmitterSettings {
    pub retry: RetryPolicy,
    /// Extra gas on top of the node's estimate, in percent.
    pub gas_limit_margin_percent: u64,
    pub confirmation_timeout: Duration,
    pub poll_interval: Duration,
}

impl Default for SubmitterSettings {
    fn default() -> Self {
        Self {
            retry: RetryPolicy::default(),
            gas_limit_margin_percent: 20,
            confirmation_timeout: Duration::from_secs(60),
            poll_interval: Duration::from_secs(1),
        }
    }
}

/// Sends transactions from the relayer account. Shared by every caller that
/// spends relayer gas so they all serialize on the same nonce tracker.
pub struct TransactionSubmitter {
    chain: Arc<dyn RelayChain>,
    nonce: RelayerNonce,
    settings: SubmitterSettings,
}

impl TransactionSubmitter {
    pub fn new(chain: Arc<dyn RelayChain>, nonce: RelayerNonce, settings: SubmitterSettings) -> Self {
        Self {
            chain,
            nonce,
            settings,
        }
    }

    pub fn nonce_tracker(&self) -> &RelayerNonce {
        &self.nonce
    }

    pub fn retry_policy(&self) -> &RetryPolicy {
        &self.settings.retry
    }

    /// Simulates `call` and returns the gas limit to submit with.
    #[instrument(skip(self, call), fields(to = %call.to))]
    pub async fn estimate_gas_limit(&self, call: &ContractCall) -> Result<u64, DomainError> {
        let estimate = with_retry(&self.settings.retry, "estimate_gas", || {
            self.chain.estimate_gas(call)
        })
        .await?;

        let margin = self.settings.gas_limit_margin_percent;
        let limit = estimate.saturating_mul(100 + margin) / 100;
        Ok(limit.max(estimate))
    }

    /// Assigns a nonce and broadcasts. The nonce tracker is locked only for
    /// the duration of this call.
    #[instrument(skip(self, call), fields(to = %call.to))]
    pub async fn submit(&self, call: ContractCall, gas_limit: u64) -> Result<B256, DomainError> {
        let retry = &self.settings.retry;
        let relayer = self.chain.relayer_address();

        let fees = with_retry(retry, "fee_estimate", || self.chain.fee_estimate()).await?;
        let balance = with_retry(retry, "relayer_balance", || {
            self.chain.native_balance(relayer)
        })
        .await?;

        let max_cost = U256::from(gas_limit) * U256::from(fees.max_fee_per_gas);
        if max_cost > balance {
            error!(
                relayer = %relayer,
                balance = %balance,
                required = %max_cost,
                "Relayer cannot cover worst-case gas cost"
            );
            return Err(DomainError::InsufficientRelayerGas(format!(
                "relayer {} holds {} wei, transaction may cost up to {} wei",
                relayer, balance, max_cost
            )));
        }

        let lease = self.nonce.acquire(self.chain.as_ref(), retry).await?;
        let tx = PreparedTransaction {
            call,
            nonce: lease.nonce(),
            gas_limit,
            fees,
        };

        match self.chain.send_transaction(&tx).await {
            Ok(tx_hash) => {
                lease.commit();
                info!(tx_hash = %tx_hash, nonce = tx.nonce, "Transaction broadcast");
                Ok(tx_hash)
            }
            Err(e @ DomainError::NonceConflict(_)) => {
                lease.resync();
                warn!(nonce = tx.nonce, error = %e, "Nonce conflict, tracker will resync");
                Err(e)
            }
            Err(e) => {
                lease.resync();
                error!(nonce = tx.nonce, error = %e, "Transaction submission failed");
                Err(e)
            }
        }
    }

    /// Polls for a receipt until the confirmation timeout. Poll errors are
    /// logged and polling continues. A timeout reports `confirmed: false`;
    /// the transaction may still be mined.
    #[instrument(skip(self))]
    pub async fn await_confirmation(&self, tx_hash: B256) -> Result<RelayReceipt, DomainError> {
        let poll = async {
            loop {
                match self.chain.confirmation_status(tx_hash).await {
                    Ok(ConfirmationStatus::Pending) => {}
                    Ok(status) => return status,
                    Err(e) => {
                        warn!(tx_hash = %tx_hash, error = %e, "Receipt poll failed");
                    }
                }
                tokio::time::sleep(self.settings.poll_interval).await;
            }
        };

        match tokio::time::timeout(self.settings.confirmation_timeout, poll).await {
            Ok(ConfirmationStatus::Reverted) => {
                error!(tx_hash = %tx_hash, "Transaction reverted");
                Err(DomainError::TransactionReverted(tx_hash.to_string()))
            }
            Ok(_) => {
                info!(tx_hash = %tx_hash, "Transaction confirmed");
                Ok(RelayReceipt {
                    tx_hash,
                    confirmed: true,
                })
            }
            Err(_) => {
                warn!(
                    tx_hash = %tx_hash,
                    timeout_secs = self.settings.confirmation_timeout.as_secs(),
                    "Confirmation wait timed out"
                );
                Ok(RelayReceipt {
                    tx_hash,
                    confirmed: false,
                })
            }
        }
    }

    pub async fn submit_and_confirm(
        &self,
        call: ContractCall,
        gas_limit: u64,
    ) -> Result<RelayReceipt, DomainError> {
        let tx_hash = self.submit(call, gas_limit).await?;
        self.await_confirmation(tx_hash).await
    }
}

use alloy_sol_types::SolCall;
use namegate_domain::abi::IForwarder;
use namegate_domain::authorization::verify_authorizer;
use namegate_domain::{Address, ContractCall, DomainError, MetaTxAuthorization, RelayReceipt};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use crate::ports::RelayChain;
use crate::services::{with_retry, TransactionSubmitter};

/// Contract addresses the relayer works against.
#[derive(Debug, Clone, Copy)]
pub struct RelaySettings {
    pub forwarder: Address,
    /// Default meta-transaction target and spender for allowance checks.
    pub payment: Option<Address>,
    pub token: Option<Address>,
}

pub struct RelayMetaTransactionUseCase {
    chain: Arc<dyn RelayChain>,
    submitter: Arc<TransactionSubmitter>,
    settings: RelaySettings,
}

impl RelayMetaTransactionUseCase {
    pub fn new(
        chain: Arc<dyn RelayChain>,
        submitter: Arc<TransactionSubmitter>,
        settings: RelaySettings,
    ) -> Self {
        Self {
            chain,
            submitter,
            settings,
        }
    }

    #[instrument(skip(self, authorization), fields(
        sender = %authorization.sender,
        receiver = %authorization.receiver,
        amount = %authorization.amount
    ))]
    pub async fn execute(
        &self,
        authorization: MetaTxAuthorization,
    ) -> Result<RelayReceipt, DomainError> {
        if authorization.sender == Address::ZERO || authorization.receiver == Address::ZERO {
            return Err(DomainError::InvalidRequest(
                "sender and receiver must be non-zero addresses".to_string(),
            ));
        }
        let target = authorization
            .target_contract
            .or(self.settings.payment)
            .ok_or_else(|| {
                DomainError::InvalidRequest(
                    "no targetContract given and no payment contract configured".to_string(),
                )
            })?;

        self.preflight(&authorization, target).await;

        let forwarder = self.settings.forwarder;
        let retry = self.submitter.retry_policy();
        let sender = authorization.sender;

        let nonce = with_retry(retry, "forwarder_nonce", || {
            self.chain.forwarder_nonce(forwarder, sender)
        })
        .await?;
        if let Some(signed_nonce) = authorization.nonce {
            if signed_nonce != nonce {
                return Err(DomainError::InvalidRequest(format!(
                    "authorization was signed for forwarder nonce {}, current nonce is {}",
                    signed_nonce, nonce
                )));
            }
        }

        let hash = with_retry(retry, "forwarder_message_hash", || {
            self.chain
                .forwarder_message_hash(forwarder, &authorization, target, nonce)
        })
        .await?;
        verify_authorizer(hash, &authorization.signature, sender)?;
        debug!(sender = %sender, forwarder_nonce = %nonce, "Authorization verified");

        let call = ContractCall::new(
            forwarder,
            IForwarder::executeMetaTransactionCall {
                sender,
                receiver: authorization.receiver,
                amount: authorization.amount,
                targetContract: target,
                signature: authorization.signature.clone(),
            }
            .abi_encode(),
        );

        let gas_limit = self.submitter.estimate_gas_limit(&call).await?;
        let receipt = self.submitter.submit_and_confirm(call, gas_limit).await?;

        info!(
            sender = %sender,
            tx_hash = %receipt.tx_hash,
            confirmed = receipt.confirmed,
            "Meta-transaction relayed"
        );
        Ok(receipt)
    }

    /// Diagnostics only. The simulated call is the authoritative check.
    async fn preflight(&self, authorization: &MetaTxAuthorization, target: Address) {
        let relayer = self.chain.relayer_address();
        match self.chain.native_balance(relayer).await {
            Ok(balance) => debug!(relayer = %relayer, balance = %balance, "Relayer gas funds"),
            Err(e) => warn!(error = %e, "Could not read relayer balance"),
        }

        let Some(token) = self.settings.token else {
            return;
        };
        let sender = authorization.sender;

        match self.chain.token_balance(token, sender).await {
            Ok(balance) if balance < authorization.amount => warn!(
                sender = %sender,
                balance = %balance,
                amount = %authorization.amount,
                "Sender token balance looks insufficient"
            ),
            Ok(balance) => debug!(sender = %sender, balance = %balance, "Sender token balance"),
            Err(e) => warn!(error = %e, "Could not read sender token balance"),
        }

        let spender = self.settings.payment.unwrap_or(target);
        match self.chain.token_allowance(token, sender, spender).await {
            Ok(allowance) if allowance < authorization.amount => warn!(
                sender = %sender,
                spender = %spender,
                allowance = %allowance,
                amount = %authorization.amount,
                "Sender allowance looks insufficient"
            ),
            Ok(allowance) => debug!(sender = %sender, allowance = %allowance, "Sender allowance"),
            Err(e) => warn!(error = %e, "Could not read sender allowance"),
        }
    }
}

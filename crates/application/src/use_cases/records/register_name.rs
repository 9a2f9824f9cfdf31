use alloy_sol_types::SolCall;
use namegate_domain::abi::IL2Registry;
use namegate_domain::authorization::verify_authorizer;
use namegate_domain::{ContractCall, DomainError, RegistrationRequest, RelayReceipt};
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::ports::{RecordRepository, Registrar};
use crate::services::{with_retry, TransactionSubmitter};

/// Registers a name on chain 2 on behalf of its owner, paying gas from the
/// relayer account, then records the mapping locally.
pub struct RegisterNameUseCase {
    registrar: Arc<dyn Registrar>,
    submitter: Arc<TransactionSubmitter>,
    records: Arc<dyn RecordRepository>,
}

impl RegisterNameUseCase {
    pub fn new(
        registrar: Arc<dyn Registrar>,
        submitter: Arc<TransactionSubmitter>,
        records: Arc<dyn RecordRepository>,
    ) -> Self {
        Self {
            registrar,
            submitter,
            records,
        }
    }

    #[instrument(skip(self, request), fields(name = %request.name, owner = %request.address))]
    pub async fn execute(&self, request: RegistrationRequest) -> Result<RelayReceipt, DomainError> {
        let signature = request.signature.clone().ok_or_else(|| {
            DomainError::InvalidRequest("registration requires the owner's signature".to_string())
        })?;
        let label = request.effective_label()?;
        let owner = request.address;
        let retry = self.submitter.retry_policy();

        let nonce = with_retry(retry, "registration_nonce", || {
            self.registrar.registration_nonce(owner)
        })
        .await?;
        let hash = with_retry(retry, "registration_hash", || {
            self.registrar.registration_hash(&label, owner, nonce)
        })
        .await?;
        verify_authorizer(hash, &signature, owner)?;

        let available = with_retry(retry, "available", || self.registrar.available(&label)).await?;
        if !available {
            return Err(DomainError::NameUnavailable(label));
        }

        let call = ContractCall::new(
            self.registrar.registry_address(),
            IL2Registry::registerCall {
                label: label.clone(),
                owner,
                signature,
            }
            .abi_encode(),
        );
        let gas_limit = self.submitter.estimate_gas_limit(&call).await?;
        let receipt = self.submitter.submit_and_confirm(call, gas_limit).await?;

        if receipt.confirmed {
            self.records.upsert(&request.name, owner).await?;
            info!(
                name = %request.name,
                owner = %owner,
                tx_hash = %receipt.tx_hash,
                "Name registered"
            );
        } else {
            warn!(
                name = %request.name,
                tx_hash = %receipt.tx_hash,
                "Registration not yet confirmed, record deferred to sync"
            );
        }

        Ok(receipt)
    }
}

use namegate_domain::authorization::verify_authorizer;
use namegate_domain::{
    namehash, AddrQuery, Address, DomainError, RegistrationRequest, RetryPolicy,
};
use std::sync::Arc;
use tracing::{info, instrument, warn};

use crate::ports::{CrossChainResolver, RecordRepository};
use crate::services::with_retry;

/// Copies an existing chain-2 registration into the local record store.
pub struct SyncRecordUseCase {
    resolver: Arc<dyn CrossChainResolver>,
    records: Arc<dyn RecordRepository>,
    retry: RetryPolicy,
}

impl SyncRecordUseCase {
    pub fn new(
        resolver: Arc<dyn CrossChainResolver>,
        records: Arc<dyn RecordRepository>,
        retry: RetryPolicy,
    ) -> Self {
        Self {
            resolver,
            records,
            retry,
        }
    }

    /// The record is written only when chain 2 resolves the name to the
    /// claimed address. A supplied signature must be the owner's personal
    /// signature over the name's namehash.
    #[instrument(skip(self, request), fields(name = %request.name, address = %request.address))]
    pub async fn execute(&self, request: RegistrationRequest) -> Result<(), DomainError> {
        if request.name.is_root() {
            return Err(DomainError::InvalidRequest(
                "cannot sync the root name".to_string(),
            ));
        }

        let dotted = request.name.to_dotted();
        if let Some(signature) = &request.signature {
            verify_authorizer(namehash(&dotted), signature, request.address)?;
        }

        let query = AddrQuery::for_name(&dotted);
        let inner = query.abi_encode();
        let result = with_retry(&self.retry, "registry_resolve", || {
            self.resolver.resolve(&request.name, &inner)
        })
        .await
        .map_err(|e| match e {
            DomainError::ChainUnavailable(reason) => DomainError::ResolutionFailed(reason),
            other => other,
        })?;
        let on_chain = query.decode_answer(&result)?;

        if on_chain == Address::ZERO {
            return Err(DomainError::NotFound(format!(
                "{} is not registered on chain 2",
                dotted
            )));
        }
        if on_chain != request.address {
            warn!(
                name = %dotted,
                claimed = %request.address,
                on_chain = %on_chain,
                "Sync rejected, address mismatch"
            );
            return Err(DomainError::InvalidRequest(format!(
                "{} resolves to {} on chain 2, not {}",
                dotted, on_chain, request.address
            )));
        }

        self.records.upsert(&request.name, request.address).await?;
        info!(name = %dotted, address = %request.address, "Record synced from chain 2");
        Ok(())
    }
}

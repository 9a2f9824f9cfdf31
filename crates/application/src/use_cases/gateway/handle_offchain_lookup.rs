//! CCIP-Read gateway request handling.
//!
//! A request moves through `Received → Validated → Resolved → Persisted →
//! Signed` and every stage is its own type, so a stage can only be reached
//! through the one before it. Nothing is persisted or signed unless chain 2
//! answered.

use alloy_sol_types::SolCall;
use namegate_domain::abi::IExtendedResolver;
use namegate_domain::{
    AddrQuery, Address, Bytes, DomainError, EncodedName, RetryPolicy, SignedAnswer,
};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};

use crate::ports::{AnswerSigner, CrossChainResolver, RecordRepository};
use crate::services::with_retry;

/// Final gateway output: the answer for the origin callback plus what it
/// resolved to.
#[derive(Debug, Clone)]
pub struct GatewayAnswer {
    pub name: String,
    pub address: Address,
    pub signed: SignedAnswer,
    /// False when a non-zero answer could not be written to the record
    /// store; reverse lookup will not find this name until it is rewritten.
    pub record_persisted: bool,
}

impl GatewayAnswer {
    /// `abi.encode(bytes result, uint64 expires, bytes sig)`
    pub fn encoded(&self) -> Bytes {
        self.signed.abi_encode()
    }
}

pub struct HandleOffchainLookupUseCase {
    resolver: Arc<dyn CrossChainResolver>,
    records: Arc<dyn RecordRepository>,
    signer: Arc<dyn AnswerSigner>,
    retry: RetryPolicy,
    signature_ttl: Duration,
    persist_failures: AtomicU64,
}

impl HandleOffchainLookupUseCase {
    pub fn new(
        resolver: Arc<dyn CrossChainResolver>,
        records: Arc<dyn RecordRepository>,
        signer: Arc<dyn AnswerSigner>,
        retry: RetryPolicy,
        signature_ttl: Duration,
    ) -> Self {
        Self {
            resolver,
            records,
            signer,
            retry,
            signature_ttl,
            persist_failures: AtomicU64::new(0),
        }
    }

    /// Answers served without their record being stored, since startup.
    pub fn persist_failures(&self) -> u64 {
        self.persist_failures.load(Ordering::Relaxed)
    }

    #[instrument(skip(self, data), fields(sender = %sender))]
    pub async fn execute(&self, sender: Address, data: Bytes) -> Result<GatewayAnswer, DomainError> {
        let received = Received { sender, data };
        let validated = received.validate()?;
        let resolved = validated.resolve(self.resolver.as_ref(), &self.retry).await?;
        let persisted = resolved.persist(self.records.as_ref()).await;
        if !persisted.stored {
            let total = self.persist_failures.fetch_add(1, Ordering::Relaxed) + 1;
            warn!(persist_failures = total, "Answer served without a stored record");
        }
        let signed = persisted.sign(self.signer.as_ref(), self.signature_ttl)?;

        info!(
            sender = %signed.sender,
            name = %signed.name,
            address = %signed.address,
            expires_at = signed.answer.expires_at,
            "Gateway answer signed"
        );

        Ok(GatewayAnswer {
            name: signed.name.to_dotted(),
            address: signed.address,
            signed: signed.answer,
            record_persisted: signed.record_persisted,
        })
    }
}

struct Received {
    sender: Address,
    data: Bytes,
}

struct Validated {
    sender: Address,
    request: Bytes,
    name: EncodedName,
    query: AddrQuery,
    inner: Bytes,
}

struct Resolved {
    sender: Address,
    request: Bytes,
    name: EncodedName,
    result: Bytes,
    address: Address,
}

struct Persisted {
    resolved: Resolved,
    /// Zero-address answers count as stored: there is nothing to write.
    stored: bool,
}

struct Signed {
    sender: Address,
    name: EncodedName,
    address: Address,
    answer: SignedAnswer,
    record_persisted: bool,
}

impl Received {
    fn validate(self) -> Result<Validated, DomainError> {
        let selector = self.data.get(..4).ok_or_else(|| {
            DomainError::InvalidRequest(format!(
                "call data is {} bytes, too short for a selector",
                self.data.len()
            ))
        })?;
        if selector != IExtendedResolver::resolveCall::SELECTOR {
            return Err(DomainError::InvalidRequest(format!(
                "expected resolve(bytes,bytes), got selector 0x{}",
                alloy_primitives::hex::encode(selector)
            )));
        }

        let call = IExtendedResolver::resolveCall::abi_decode(&self.data).map_err(|e| {
            DomainError::InvalidRequest(format!("malformed resolve(bytes,bytes) call: {}", e))
        })?;
        let name = EncodedName::from_wire(&call.name)?;
        let query = AddrQuery::parse(&call.data)?;

        debug!(sender = %self.sender, name = %name, node = %query.node(), "Request validated");

        Ok(Validated {
            sender: self.sender,
            request: self.data,
            name,
            query,
            inner: call.data,
        })
    }
}

impl Validated {
    async fn resolve(
        self,
        resolver: &dyn CrossChainResolver,
        retry: &RetryPolicy,
    ) -> Result<Resolved, DomainError> {
        let result = with_retry(retry, "registry_resolve", || {
            resolver.resolve(&self.name, &self.inner)
        })
        .await
        .map_err(|e| {
            error!(sender = %self.sender, name = %self.name, error = %e, "Chain-2 resolution failed");
            match e {
                DomainError::ChainUnavailable(reason) => DomainError::ResolutionFailed(reason),
                other => other,
            }
        })?;

        let address = self.query.decode_answer(&result)?;
        debug!(sender = %self.sender, name = %self.name, address = %address, "Name resolved");

        Ok(Resolved {
            sender: self.sender,
            request: self.request,
            name: self.name,
            result,
            address,
        })
    }
}

impl Resolved {
    /// Remembers the mapping for reverse lookup. A store failure does not
    /// invalidate the answer, so it is logged and the request continues.
    async fn persist(self, records: &dyn RecordRepository) -> Persisted {
        if self.address == Address::ZERO {
            debug!(sender = %self.sender, name = %self.name, "Unset record, nothing persisted");
            return Persisted {
                resolved: self,
                stored: true,
            };
        }

        let stored = match records.upsert(&self.name, self.address).await {
            Ok(()) => {
                debug!(sender = %self.sender, name = %self.name, address = %self.address, "Record persisted");
                true
            }
            Err(e) => {
                error!(name = %self.name, error = %e, "Failed to persist resolution record");
                false
            }
        };
        Persisted {
            resolved: self,
            stored,
        }
    }
}

impl Persisted {
    fn sign(self, signer: &dyn AnswerSigner, ttl: Duration) -> Result<Signed, DomainError> {
        let record_persisted = self.stored;
        let resolved = self.resolved;
        let now = chrono::Utc::now().timestamp().max(0) as u64;
        let expires_at = now.saturating_add(ttl.as_secs());

        let digest =
            SignedAnswer::digest(resolved.sender, expires_at, &resolved.request, &resolved.result);
        let signature = signer.sign_digest(digest).map_err(|e| {
            error!(sender = %resolved.sender, name = %resolved.name, error = %e, "Signing failed");
            match e {
                DomainError::SigningFailed(_) => e,
                other => DomainError::SigningFailed(other.to_string()),
            }
        })?;

        debug!(sender = %resolved.sender, name = %resolved.name, expires_at, "Answer signed");

        Ok(Signed {
            sender: resolved.sender,
            name: resolved.name,
            address: resolved.address,
            answer: SignedAnswer {
                result: resolved.result,
                expires_at,
                signature,
            },
            record_persisted,
        })
    }
}

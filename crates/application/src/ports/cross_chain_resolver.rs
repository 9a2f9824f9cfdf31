use async_trait::async_trait;
use namegate_domain::{Bytes, DomainError, EncodedName};

/// Read-only `resolve(bytes name, bytes data)` against the chain-2 registry.
#[async_trait]
pub trait CrossChainResolver: Send + Sync {
    /// Returns the registry's answer bytes unmodified.
    ///
    /// Transport failures are `ChainUnavailable`; reverts and undecodable
    /// output are `ResolutionFailed`.
    async fn resolve(&self, name: &EncodedName, data: &Bytes) -> Result<Bytes, DomainError>;
}

use async_trait::async_trait;
use namegate_domain::{Address, Bytes, DomainError, EncodedName, OffchainLookup};

#[derive(Debug, Clone)]
pub enum OriginResponse {
    /// The origin contract answered on-chain.
    Answer(Bytes),
    /// The origin contract reverted with `OffchainLookup`.
    Offchain(OffchainLookup),
}

/// The ENSIP-10 resolver on chain 1, called the way a wallet would.
#[async_trait]
pub trait OriginResolver: Send + Sync {
    fn resolver_address(&self) -> Address;

    async fn resolve(&self, name: &EncodedName, data: &Bytes)
        -> Result<OriginResponse, DomainError>;

    /// Calls `callbackFunction(response, extraData)` and returns its `bytes`
    /// result.
    async fn callback(
        &self,
        lookup: &OffchainLookup,
        response: &Bytes,
    ) -> Result<Bytes, DomainError>;
}

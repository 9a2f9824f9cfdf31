use async_trait::async_trait;
use namegate_domain::{Address, DomainError, B256, U256};

/// Registrar reads on chain 2. Writes go through the relayer submitter.
#[async_trait]
pub trait Registrar: Send + Sync {
    fn registry_address(&self) -> Address;

    async fn available(&self, label: &str) -> Result<bool, DomainError>;

    async fn registration_nonce(&self, owner: Address) -> Result<U256, DomainError>;

    async fn registration_hash(
        &self,
        label: &str,
        owner: Address,
        nonce: U256,
    ) -> Result<B256, DomainError>;
}

use async_trait::async_trait;
use namegate_domain::{Address, DomainError, EncodedName, ResolutionRecord};

#[async_trait]
pub trait RecordRepository: Send + Sync {
    /// Insert-or-replace keyed by `name`. Atomic per key; the latest write
    /// for a name wins.
    async fn upsert(&self, name: &EncodedName, address: Address) -> Result<(), DomainError>;

    async fn get_by_name(&self, name: &EncodedName)
        -> Result<Option<ResolutionRecord>, DomainError>;

    /// Most recently written record pointing at `address`. `None` is a normal
    /// outcome, not a failure.
    async fn lookup_by_address(
        &self,
        address: Address,
    ) -> Result<Option<ResolutionRecord>, DomainError>;
}

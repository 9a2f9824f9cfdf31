use namegate_domain::{Address, DomainError};
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::ports::RecordRepository;

pub struct ReverseLookupUseCase {
    records: Arc<dyn RecordRepository>,
}

impl ReverseLookupUseCase {
    pub fn new(records: Arc<dyn RecordRepository>) -> Self {
        Self { records }
    }

    /// Dotted name most recently resolved to `address`, if any.
    #[instrument(skip(self))]
    pub async fn execute(&self, address: Address) -> Result<Option<String>, DomainError> {
        let record = self.records.lookup_by_address(address).await?;
        let name = record.map(|r| r.dotted_name());
        debug!(address = %address, found = name.is_some(), "Reverse lookup");
        Ok(name)
    }
}

use namegate_application::use_cases::{
    HandleOffchainLookupUseCase, RegisterNameUseCase, RelayMetaTransactionUseCase,
    ReverseLookupUseCase, SyncRecordUseCase,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub handle_lookup: Arc<HandleOffchainLookupUseCase>,
    pub reverse_lookup: Arc<ReverseLookupUseCase>,
    pub register_name: Arc<RegisterNameUseCase>,
    pub sync_record: Arc<SyncRecordUseCase>,
    pub relay: Arc<RelayMetaTransactionUseCase>,
}

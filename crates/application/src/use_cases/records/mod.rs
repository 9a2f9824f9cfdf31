mod register_name;
mod reverse_lookup;
mod sync_record;

pub use register_name::RegisterNameUseCase;
pub use reverse_lookup::ReverseLookupUseCase;
pub use sync_record::SyncRecordUseCase;

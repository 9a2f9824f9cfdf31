pub mod client;
pub mod gateway;
pub mod records;
pub mod relay;

pub use client::FallbackResolverUseCase;
pub use gateway::{GatewayAnswer, HandleOffchainLookupUseCase};
pub use records::{RegisterNameUseCase, ReverseLookupUseCase, SyncRecordUseCase};
pub use relay::{
    CheckRelayerBalanceUseCase, RelayMetaTransactionUseCase, RelaySettings, RelayerBalance,
};

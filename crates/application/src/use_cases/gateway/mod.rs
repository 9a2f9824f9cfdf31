mod handle_offchain_lookup;

pub use handle_offchain_lookup::{GatewayAnswer, HandleOffchainLookupUseCase};

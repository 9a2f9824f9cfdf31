mod check_relayer_balance;
mod relay_meta_transaction;

pub use check_relayer_balance::{CheckRelayerBalanceUseCase, RelayerBalance};
pub use relay_meta_transaction::{RelayMetaTransactionUseCase, RelaySettings};

pub mod relayer_balance;
pub mod runner;
pub mod wal_checkpoint;

pub use relayer_balance::RelayerBalanceJob;
pub use runner::JobRunner;
pub use wal_checkpoint::WalCheckpointJob;

mod relayer_nonce;
mod retry;
mod transaction_submitter;

pub use relayer_nonce::{NonceLease, RelayerNonce};
pub use retry::with_retry;
pub use transaction_submitter::{SubmitterSettings, TransactionSubmitter};

//! namegate domain layer
pub mod abi;
pub mod addr_query;
pub mod authorization;
pub mod config;
pub mod dns_name;
pub mod errors;
pub mod meta_tx;
pub mod offchain;
pub mod record;
pub mod retry;
pub mod signed_answer;
pub mod transaction;

pub use addr_query::AddrQuery;
pub use config::{CliOverrides, Config};
pub use dns_name::{namehash, EncodedName};
pub use errors::DomainError;
pub use meta_tx::{MetaTxAuthorization, RelayReceipt};
pub use offchain::OffchainLookup;
pub use record::{RegistrationRequest, ResolutionRecord};
pub use retry::RetryPolicy;
pub use signed_answer::SignedAnswer;
pub use transaction::{ConfirmationStatus, ContractCall, FeeEstimate, PreparedTransaction};

pub use alloy_primitives::{Address, Bytes, B256, U256};

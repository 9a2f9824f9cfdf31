use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Malformed name encoding: {0}")]
    MalformedEncoding(String),

    #[error("Resolution failed: {0}")]
    ResolutionFailed(String),

    /// Transport-level RPC failure (connection refused, timeout, 5xx).
    /// The only variant the retry policy retries.
    #[error("Chain RPC unavailable: {0}")]
    ChainUnavailable(String),

    #[error("Invalid signature: {0}")]
    SignatureInvalid(String),

    #[error("Signing failed: {0}")]
    SigningFailed(String),

    #[error("Gateway unreachable: {0}")]
    GatewayUnreachable(String),

    #[error("Relayer nonce conflict, retry the request: {0}")]
    NonceConflict(String),

    #[error("Sender token balance is too low for this transfer: {0}")]
    InsufficientSenderBalance(String),

    #[error("Sender has not approved enough tokens for the payment contract: {0}")]
    InsufficientAllowance(String),

    #[error("Relayer does not hold enough gas funds: {0}")]
    InsufficientRelayerGas(String),

    #[error("Name is not available: {0}")]
    NameUnavailable(String),

    #[error("Transaction {0} reverted on-chain")]
    TransactionReverted(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Unexpected failure: {0}")]
    Unknown(String),
}

impl DomainError {
    /// Transient failures are worth another attempt with backoff.
    pub fn is_transient(&self) -> bool {
        matches!(self, DomainError::ChainUnavailable(_))
    }

    /// Whether a client may resubmit the same request unchanged.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            DomainError::NonceConflict(_) | DomainError::ChainUnavailable(_)
        )
    }

    /// Maps a revert reason or node error message from a simulated relayer
    /// call to the failure the caller can act on.
    pub fn from_revert_reason(reason: &str) -> DomainError {
        let lower = reason.to_ascii_lowercase();
        if lower.contains("insufficient funds") {
            DomainError::InsufficientRelayerGas(reason.to_string())
        } else if lower.contains("allowance") {
            DomainError::InsufficientAllowance(reason.to_string())
        } else if lower.contains("exceeds balance") || lower.contains("insufficient balance") {
            DomainError::InsufficientSenderBalance(reason.to_string())
        } else if lower.contains("signature") || lower.contains("signer") {
            DomainError::SignatureInvalid(reason.to_string())
        } else {
            DomainError::Unknown(reason.to_string())
        }
    }
}

use async_trait::async_trait;
use namegate_domain::{
    Address, ConfirmationStatus, ContractCall, DomainError, FeeEstimate, MetaTxAuthorization,
    PreparedTransaction, B256, U256,
};

/// Chain-2 access for the single relayer account.
#[async_trait]
pub trait RelayChain: Send + Sync {
    fn relayer_address(&self) -> Address;

    async fn native_balance(&self, account: Address) -> Result<U256, DomainError>;

    async fn token_balance(&self, token: Address, owner: Address) -> Result<U256, DomainError>;

    async fn token_allowance(
        &self,
        token: Address,
        owner: Address,
        spender: Address,
    ) -> Result<U256, DomainError>;

    async fn forwarder_nonce(&self, forwarder: Address, sender: Address)
        -> Result<U256, DomainError>;

    async fn forwarder_message_hash(
        &self,
        forwarder: Address,
        authorization: &MetaTxAuthorization,
        target: Address,
        nonce: U256,
    ) -> Result<B256, DomainError>;

    /// Simulates `call` from the relayer account. Reverts are translated with
    /// [`DomainError::from_revert_reason`].
    async fn estimate_gas(&self, call: &ContractCall) -> Result<u64, DomainError>;

    /// Pending transaction count of the relayer account.
    async fn pending_nonce(&self) -> Result<u64, DomainError>;

    async fn fee_estimate(&self) -> Result<FeeEstimate, DomainError>;

    /// Signs and broadcasts. Nonce races surface as `NonceConflict`.
    async fn send_transaction(&self, tx: &PreparedTransaction) -> Result<B256, DomainError>;

    /// One receipt poll. `Pending` when no receipt exists yet.
    async fn confirmation_status(&self, tx_hash: B256) -> Result<ConfirmationStatus, DomainError>;
}

use alloy_primitives::{Address, Bytes, B256, U256};

/// A sender's off-chain authorization for a token transfer that the relayer
/// executes through the forwarder contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaTxAuthorization {
    pub sender: Address,
    pub receiver: Address,
    /// Smallest token unit.
    pub amount: U256,
    pub target_contract: Option<Address>,
    /// Forwarder counter the client signed against, when it pre-fetched it.
    pub nonce: Option<U256>,
    pub signature: Bytes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelayReceipt {
    pub tx_hash: B256,
    /// `false` when the confirmation wait timed out. The transaction was
    /// broadcast and may still be mined.
    pub confirmed: bool,
}

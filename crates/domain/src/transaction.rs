use alloy_primitives::{Address, Bytes};

/// Target and calldata of a contract call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractCall {
    pub to: Address,
    pub input: Bytes,
}

impl ContractCall {
    pub fn new(to: Address, input: impl Into<Bytes>) -> Self {
        Self {
            to,
            input: input.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeeEstimate {
    pub max_fee_per_gas: u128,
    pub max_priority_fee_per_gas: u128,
}

/// A fully parameterized transaction from the relayer account. Nothing is
/// left for the node to fill in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedTransaction {
    pub call: ContractCall,
    pub nonce: u64,
    pub gas_limit: u64,
    pub fees: FeeEstimate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmationStatus {
    Confirmed,
    Reverted,
    /// No receipt before the wait timed out.
    Pending,
}

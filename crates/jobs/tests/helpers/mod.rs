#![allow(dead_code)]

use async_trait::async_trait;
use namegate_application::ports::RelayChain;
use namegate_domain::{
    Address, ConfirmationStatus, ContractCall, DomainError, FeeEstimate, MetaTxAuthorization,
    PreparedTransaction, B256, U256,
};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

/// Relay chain that only answers balance reads.
pub struct MockBalanceChain {
    relayer: Address,
    balance: U256,
    balance_reads: AtomicU64,
    should_fail: AtomicBool,
}

impl MockBalanceChain {
    pub fn new(balance: U256) -> Self {
        Self {
            relayer: Address::repeat_byte(0xEE),
            balance,
            balance_reads: AtomicU64::new(0),
            should_fail: AtomicBool::new(false),
        }
    }

    pub fn set_should_fail(&self, fail: bool) {
        self.should_fail.store(fail, Ordering::SeqCst);
    }

    pub fn balance_reads(&self) -> u64 {
        self.balance_reads.load(Ordering::SeqCst)
    }
}

fn unsupported<T>() -> Result<T, DomainError> {
    Err(DomainError::Unknown("not supported by mock".to_string()))
}

#[async_trait]
impl RelayChain for MockBalanceChain {
    fn relayer_address(&self) -> Address {
        self.relayer
    }

    async fn native_balance(&self, _account: Address) -> Result<U256, DomainError> {
        self.balance_reads.fetch_add(1, Ordering::SeqCst);
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(DomainError::ChainUnavailable("connection refused".to_string()));
        }
        Ok(self.balance)
    }

    async fn token_balance(&self, _token: Address, _owner: Address) -> Result<U256, DomainError> {
        unsupported()
    }

    async fn token_allowance(
        &self,
        _token: Address,
        _owner: Address,
        _spender: Address,
    ) -> Result<U256, DomainError> {
        unsupported()
    }

    async fn forwarder_nonce(
        &self,
        _forwarder: Address,
        _sender: Address,
    ) -> Result<U256, DomainError> {
        unsupported()
    }

    async fn forwarder_message_hash(
        &self,
        _forwarder: Address,
        _authorization: &MetaTxAuthorization,
        _target: Address,
        _nonce: U256,
    ) -> Result<B256, DomainError> {
        unsupported()
    }

    async fn estimate_gas(&self, _call: &ContractCall) -> Result<u64, DomainError> {
        unsupported()
    }

    async fn pending_nonce(&self) -> Result<u64, DomainError> {
        unsupported()
    }

    async fn fee_estimate(&self) -> Result<FeeEstimate, DomainError> {
        unsupported()
    }

    async fn send_transaction(&self, _tx: &PreparedTransaction) -> Result<B256, DomainError> {
        unsupported()
    }

    async fn confirmation_status(
        &self,
        _tx_hash: B256,
    ) -> Result<ConfirmationStatus, DomainError> {
        unsupported()
    }
}

#![allow(dead_code)]

use alloy_primitives::keccak256;
use alloy_sol_types::SolValue;
use async_trait::async_trait;
use namegate_application::ports::{
    CrossChainResolver, GatewayClient, OriginResolver, OriginResponse, Registrar, RelayChain,
};
use namegate_domain::{
    AddrQuery, Address, Bytes, ConfirmationStatus, ContractCall, DomainError,
    EncodedName, FeeEstimate, MetaTxAuthorization, OffchainLookup, PreparedTransaction, B256,
    U256,
};
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Encodes `address` the way `query` returns it.
pub fn encode_answer(query: &AddrQuery, address: Address) -> Bytes {
    match query {
        AddrQuery::Addr { .. } => address.abi_encode().into(),
        AddrQuery::MultichainAddr { .. } => Bytes::from(address.to_vec()).abi_encode().into(),
    }
}

// ── Chain-2 registry ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct MockCrossChainResolver {
    answers: Arc<Mutex<HashMap<Vec<u8>, Address>>>,
    transient_failures: Arc<AtomicU32>,
    error: Arc<Mutex<Option<DomainError>>>,
    calls: Arc<AtomicU32>,
}

impl MockCrossChainResolver {
    pub fn new() -> Self {
        Self {
            answers: Arc::new(Mutex::new(HashMap::new())),
            transient_failures: Arc::new(AtomicU32::new(0)),
            error: Arc::new(Mutex::new(None)),
            calls: Arc::new(AtomicU32::new(0)),
        }
    }

    pub fn set_answer(&self, name: &EncodedName, address: Address) {
        self.answers
            .lock()
            .unwrap()
            .insert(name.as_bytes().to_vec(), address);
    }

    pub fn fail_transiently(&self, times: u32) {
        self.transient_failures.store(times, Ordering::SeqCst);
    }

    pub fn set_error(&self, error: DomainError) {
        *self.error.lock().unwrap() = Some(error);
    }

    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for MockCrossChainResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CrossChainResolver for MockCrossChainResolver {
    async fn resolve(&self, name: &EncodedName, data: &Bytes) -> Result<Bytes, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self
            .transient_failures
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok()
        {
            return Err(DomainError::ChainUnavailable("connection reset".to_string()));
        }
        if let Some(error) = self.error.lock().unwrap().clone() {
            return Err(error);
        }

        let query = AddrQuery::parse(data)?;
        let address = self
            .answers
            .lock()
            .unwrap()
            .get(name.as_bytes())
            .copied()
            .unwrap_or(Address::ZERO);
        Ok(encode_answer(&query, address))
    }
}

#[derive(Clone)]
pub struct MockRegistrar {
    registry: Address,
    unavailable: Arc<Mutex<Vec<String>>>,
    nonces: Arc<Mutex<HashMap<Address, U256>>>,
}

impl MockRegistrar {
    pub fn new(registry: Address) -> Self {
        Self {
            registry,
            unavailable: Arc::new(Mutex::new(Vec::new())),
            nonces: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn mark_taken(&self, label: &str) {
        self.unavailable.lock().unwrap().push(label.to_string());
    }

    pub fn set_nonce(&self, owner: Address, nonce: u64) {
        self.nonces.lock().unwrap().insert(owner, U256::from(nonce));
    }

    pub fn expected_hash(label: &str, owner: Address, nonce: U256) -> B256 {
        keccak256((label.to_string(), owner, nonce).abi_encode())
    }
}

#[async_trait]
impl Registrar for MockRegistrar {
    fn registry_address(&self) -> Address {
        self.registry
    }

    async fn available(&self, label: &str) -> Result<bool, DomainError> {
        Ok(!self.unavailable.lock().unwrap().iter().any(|l| l == label))
    }

    async fn registration_nonce(&self, owner: Address) -> Result<U256, DomainError> {
        Ok(self
            .nonces
            .lock()
            .unwrap()
            .get(&owner)
            .copied()
            .unwrap_or(U256::ZERO))
    }

    async fn registration_hash(
        &self,
        label: &str,
        owner: Address,
        nonce: U256,
    ) -> Result<B256, DomainError> {
        Ok(Self::expected_hash(label, owner, nonce))
    }
}

// ── Relayer account ──────────────────────────────────────────────────────────

/// Simulates one chain-2 account. `send_transaction` only accepts the exact
/// next nonce, like a node with an empty mempool for this account.
#[derive(Clone)]
pub struct MockRelayChain {
    relayer: Address,
    chain_nonce: Arc<AtomicU64>,
    pending_nonce_reads: Arc<AtomicU32>,
    native_balance: Arc<Mutex<U256>>,
    token_balance: Arc<Mutex<U256>>,
    allowance: Arc<Mutex<U256>>,
    forwarder_nonces: Arc<Mutex<HashMap<Address, U256>>>,
    estimate: Arc<Mutex<Result<u64, DomainError>>>,
    estimate_calls: Arc<AtomicU32>,
    send_errors: Arc<Mutex<VecDeque<DomainError>>>,
    send_delay: Arc<Mutex<Duration>>,
    sent: Arc<Mutex<Vec<PreparedTransaction>>>,
    status: Arc<Mutex<ConfirmationStatus>>,
}

impl MockRelayChain {
    pub fn new(relayer: Address) -> Self {
        Self {
            relayer,
            chain_nonce: Arc::new(AtomicU64::new(0)),
            pending_nonce_reads: Arc::new(AtomicU32::new(0)),
            native_balance: Arc::new(Mutex::new(U256::from(10u64).pow(U256::from(18)))),
            token_balance: Arc::new(Mutex::new(U256::MAX)),
            allowance: Arc::new(Mutex::new(U256::MAX)),
            forwarder_nonces: Arc::new(Mutex::new(HashMap::new())),
            estimate: Arc::new(Mutex::new(Ok(100_000))),
            estimate_calls: Arc::new(AtomicU32::new(0)),
            send_errors: Arc::new(Mutex::new(VecDeque::new())),
            send_delay: Arc::new(Mutex::new(Duration::ZERO)),
            sent: Arc::new(Mutex::new(Vec::new())),
            status: Arc::new(Mutex::new(ConfirmationStatus::Confirmed)),
        }
    }

    pub fn message_hash(
        sender: Address,
        receiver: Address,
        amount: U256,
        target: Address,
        nonce: U256,
    ) -> B256 {
        keccak256((sender, receiver, amount, target, nonce).abi_encode())
    }

    pub fn set_chain_nonce(&self, nonce: u64) {
        self.chain_nonce.store(nonce, Ordering::SeqCst);
    }

    /// A transaction from the relayer account sent by someone else.
    pub fn bump_external_nonce(&self) {
        self.chain_nonce.fetch_add(1, Ordering::SeqCst);
    }

    pub fn chain_nonce(&self) -> u64 {
        self.chain_nonce.load(Ordering::SeqCst)
    }

    pub fn pending_nonce_reads(&self) -> u32 {
        self.pending_nonce_reads.load(Ordering::SeqCst)
    }

    pub fn set_native_balance(&self, balance: U256) {
        *self.native_balance.lock().unwrap() = balance;
    }

    pub fn set_allowance(&self, allowance: U256) {
        *self.allowance.lock().unwrap() = allowance;
    }

    pub fn set_forwarder_nonce(&self, sender: Address, nonce: u64) {
        self.forwarder_nonces
            .lock()
            .unwrap()
            .insert(sender, U256::from(nonce));
    }

    pub fn set_estimate(&self, estimate: Result<u64, DomainError>) {
        *self.estimate.lock().unwrap() = estimate;
    }

    pub fn estimate_calls(&self) -> u32 {
        self.estimate_calls.load(Ordering::SeqCst)
    }

    pub fn push_send_error(&self, error: DomainError) {
        self.send_errors.lock().unwrap().push_back(error);
    }

    pub fn set_send_delay(&self, delay: Duration) {
        *self.send_delay.lock().unwrap() = delay;
    }

    pub fn set_status(&self, status: ConfirmationStatus) {
        *self.status.lock().unwrap() = status;
    }

    pub fn sent(&self) -> Vec<PreparedTransaction> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl RelayChain for MockRelayChain {
    fn relayer_address(&self) -> Address {
        self.relayer
    }

    async fn native_balance(&self, _account: Address) -> Result<U256, DomainError> {
        Ok(*self.native_balance.lock().unwrap())
    }

    async fn token_balance(&self, _token: Address, _owner: Address) -> Result<U256, DomainError> {
        Ok(*self.token_balance.lock().unwrap())
    }

    async fn token_allowance(
        &self,
        _token: Address,
        _owner: Address,
        _spender: Address,
    ) -> Result<U256, DomainError> {
        Ok(*self.allowance.lock().unwrap())
    }

    async fn forwarder_nonce(
        &self,
        _forwarder: Address,
        sender: Address,
    ) -> Result<U256, DomainError> {
        Ok(self
            .forwarder_nonces
            .lock()
            .unwrap()
            .get(&sender)
            .copied()
            .unwrap_or(U256::ZERO))
    }

    async fn forwarder_message_hash(
        &self,
        _forwarder: Address,
        authorization: &MetaTxAuthorization,
        target: Address,
        nonce: U256,
    ) -> Result<B256, DomainError> {
        Ok(Self::message_hash(
            authorization.sender,
            authorization.receiver,
            authorization.amount,
            target,
            nonce,
        ))
    }

    async fn estimate_gas(&self, _call: &ContractCall) -> Result<u64, DomainError> {
        self.estimate_calls.fetch_add(1, Ordering::SeqCst);
        self.estimate.lock().unwrap().clone()
    }

    async fn pending_nonce(&self) -> Result<u64, DomainError> {
        self.pending_nonce_reads.fetch_add(1, Ordering::SeqCst);
        Ok(self.chain_nonce.load(Ordering::SeqCst))
    }

    async fn fee_estimate(&self) -> Result<FeeEstimate, DomainError> {
        Ok(FeeEstimate {
            max_fee_per_gas: 2_000_000_000,
            max_priority_fee_per_gas: 1_000_000_000,
        })
    }

    async fn send_transaction(&self, tx: &PreparedTransaction) -> Result<B256, DomainError> {
        let delay = *self.send_delay.lock().unwrap();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        if let Some(error) = self.send_errors.lock().unwrap().pop_front() {
            return Err(error);
        }

        let expected = self.chain_nonce.load(Ordering::SeqCst);
        if tx.nonce != expected {
            return Err(DomainError::NonceConflict(format!(
                "nonce too low: next nonce {}, tx nonce {}",
                expected, tx.nonce
            )));
        }
        self.chain_nonce.fetch_add(1, Ordering::SeqCst);
        self.sent.lock().unwrap().push(tx.clone());

        Ok(keccak256(tx.nonce.to_be_bytes()))
    }

    async fn confirmation_status(&self, _tx_hash: B256) -> Result<ConfirmationStatus, DomainError> {
        Ok(*self.status.lock().unwrap())
    }
}

// ── Origin chain and gateway ─────────────────────────────────────────────────

#[derive(Clone)]
pub struct MockOriginResolver {
    address: Address,
    response: Arc<Mutex<Result<OriginResponse, DomainError>>>,
    callback_result: Arc<Mutex<Result<Bytes, DomainError>>>,
    callback_responses: Arc<Mutex<Vec<Bytes>>>,
}

impl MockOriginResolver {
    pub fn new(address: Address) -> Self {
        Self {
            address,
            response: Arc::new(Mutex::new(Err(DomainError::ChainUnavailable(
                "not configured".to_string(),
            )))),
            callback_result: Arc::new(Mutex::new(Err(DomainError::ResolutionFailed(
                "not configured".to_string(),
            )))),
            callback_responses: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn set_response(&self, response: Result<OriginResponse, DomainError>) {
        *self.response.lock().unwrap() = response;
    }

    pub fn set_callback_result(&self, result: Result<Bytes, DomainError>) {
        *self.callback_result.lock().unwrap() = result;
    }

    pub fn callback_responses(&self) -> Vec<Bytes> {
        self.callback_responses.lock().unwrap().clone()
    }
}

#[async_trait]
impl OriginResolver for MockOriginResolver {
    fn resolver_address(&self) -> Address {
        self.address
    }

    async fn resolve(
        &self,
        _name: &EncodedName,
        _data: &Bytes,
    ) -> Result<OriginResponse, DomainError> {
        self.response.lock().unwrap().clone()
    }

    async fn callback(
        &self,
        _lookup: &OffchainLookup,
        response: &Bytes,
    ) -> Result<Bytes, DomainError> {
        self.callback_responses
            .lock()
            .unwrap()
            .push(response.clone());
        self.callback_result.lock().unwrap().clone()
    }
}

#[derive(Clone, Default)]
pub struct MockGatewayClient {
    responses: Arc<Mutex<HashMap<String, Bytes>>>,
    fetched: Arc<Mutex<Vec<String>>>,
}

impl MockGatewayClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_response(&self, url_template: &str, data: Bytes) {
        self.responses
            .lock()
            .unwrap()
            .insert(url_template.to_string(), data);
    }

    pub fn fetched(&self) -> Vec<String> {
        self.fetched.lock().unwrap().clone()
    }
}

#[async_trait]
impl GatewayClient for MockGatewayClient {
    async fn fetch(
        &self,
        url_template: &str,
        _sender: Address,
        _call_data: &Bytes,
    ) -> Result<Bytes, DomainError> {
        self.fetched.lock().unwrap().push(url_template.to_string());
        self.responses
            .lock()
            .unwrap()
            .get(url_template)
            .cloned()
            .ok_or_else(|| {
                DomainError::GatewayUnreachable(format!("{}: connection refused", url_template))
            })
    }
}

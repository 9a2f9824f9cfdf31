#![allow(dead_code)]

use alloy::signers::local::PrivateKeySigner;
use alloy_primitives::keccak256;
use alloy_sol_types::SolValue;
use async_trait::async_trait;
use namegate_api::{create_api_routes, AppState};
use namegate_application::ports::{CrossChainResolver, Registrar, RelayChain};
use namegate_application::services::{RelayerNonce, SubmitterSettings, TransactionSubmitter};
use namegate_application::use_cases::{
    HandleOffchainLookupUseCase, RegisterNameUseCase, RelayMetaTransactionUseCase, RelaySettings,
    ReverseLookupUseCase, SyncRecordUseCase,
};
use namegate_domain::{
    AddrQuery, Address, Bytes, ConfirmationStatus, ContractCall, DomainError, EncodedName,
    FeeEstimate, MetaTxAuthorization, PreparedTransaction, RetryPolicy, B256, U256,
};
use namegate_infrastructure::database::run_migrations;
use namegate_infrastructure::repositories::SqliteRecordRepository;
use namegate_infrastructure::signing::LocalAnswerSigner;
use sqlx::sqlite::SqlitePoolOptions;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub fn forwarder() -> Address {
    Address::repeat_byte(0xF0)
}

pub fn payment() -> Address {
    Address::repeat_byte(0xBA)
}

pub fn registry() -> Address {
    Address::repeat_byte(0x5E)
}

#[derive(Default)]
pub struct StubResolver {
    answers: Mutex<HashMap<Vec<u8>, Address>>,
    error: Mutex<Option<DomainError>>,
}

impl StubResolver {
    pub fn set_answer(&self, name: &EncodedName, address: Address) {
        self.answers
            .lock()
            .unwrap()
            .insert(name.as_bytes().to_vec(), address);
    }

    pub fn set_error(&self, error: DomainError) {
        *self.error.lock().unwrap() = Some(error);
    }
}

#[async_trait]
impl CrossChainResolver for StubResolver {
    async fn resolve(&self, name: &EncodedName, data: &Bytes) -> Result<Bytes, DomainError> {
        if let Some(error) = self.error.lock().unwrap().clone() {
            return Err(error);
        }
        let address = self
            .answers
            .lock()
            .unwrap()
            .get(name.as_bytes())
            .copied()
            .unwrap_or(Address::ZERO);
        Ok(match AddrQuery::parse(data)? {
            AddrQuery::Addr { .. } => address.abi_encode().into(),
            AddrQuery::MultichainAddr { .. } => Bytes::from(address.to_vec()).abi_encode().into(),
        })
    }
}

#[derive(Default)]
pub struct StubRegistrar;

impl StubRegistrar {
    pub fn expected_hash(label: &str, owner: Address, nonce: U256) -> B256 {
        keccak256((label.to_string(), owner, nonce).abi_encode())
    }
}

#[async_trait]
impl Registrar for StubRegistrar {
    fn registry_address(&self) -> Address {
        registry()
    }

    async fn available(&self, label: &str) -> Result<bool, DomainError> {
        Ok(label != "taken")
    }

    async fn registration_nonce(&self, _owner: Address) -> Result<U256, DomainError> {
        Ok(U256::ZERO)
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

/// Relayer account that mines every transaction sent with the right nonce.
pub struct StubRelayChain {
    nonce: AtomicU64,
    estimate: Mutex<Result<u64, DomainError>>,
    send_error: Mutex<Option<DomainError>>,
}

impl Default for StubRelayChain {
    fn default() -> Self {
        Self {
            nonce: AtomicU64::new(0),
            estimate: Mutex::new(Ok(100_000)),
            send_error: Mutex::new(None),
        }
    }
}

impl StubRelayChain {
    pub fn message_hash(auth: &MetaTxAuthorization, target: Address, nonce: U256) -> B256 {
        keccak256((auth.sender, auth.receiver, auth.amount, target, nonce).abi_encode())
    }

    pub fn set_estimate(&self, estimate: Result<u64, DomainError>) {
        *self.estimate.lock().unwrap() = estimate;
    }

    pub fn fail_next_send(&self, error: DomainError) {
        *self.send_error.lock().unwrap() = Some(error);
    }

    pub fn sent_count(&self) -> u64 {
        self.nonce.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RelayChain for StubRelayChain {
    fn relayer_address(&self) -> Address {
        Address::repeat_byte(0xEE)
    }

    async fn native_balance(&self, _account: Address) -> Result<U256, DomainError> {
        Ok(U256::from(10u64).pow(U256::from(18)))
    }

    async fn token_balance(&self, _token: Address, _owner: Address) -> Result<U256, DomainError> {
        Ok(U256::MAX)
    }

    async fn token_allowance(
        &self,
        _token: Address,
        _owner: Address,
        _spender: Address,
    ) -> Result<U256, DomainError> {
        Ok(U256::MAX)
    }

    async fn forwarder_nonce(
        &self,
        _forwarder: Address,
        _sender: Address,
    ) -> Result<U256, DomainError> {
        Ok(U256::ZERO)
    }

    async fn forwarder_message_hash(
        &self,
        _forwarder: Address,
        authorization: &MetaTxAuthorization,
        target: Address,
        nonce: U256,
    ) -> Result<B256, DomainError> {
        Ok(Self::message_hash(authorization, target, nonce))
    }

    async fn estimate_gas(&self, _call: &ContractCall) -> Result<u64, DomainError> {
        self.estimate.lock().unwrap().clone()
    }

    async fn pending_nonce(&self) -> Result<u64, DomainError> {
        Ok(self.nonce.load(Ordering::SeqCst))
    }

    async fn fee_estimate(&self) -> Result<FeeEstimate, DomainError> {
        Ok(FeeEstimate {
            max_fee_per_gas: 2_000_000_000,
            max_priority_fee_per_gas: 1_000_000_000,
        })
    }

    async fn send_transaction(&self, tx: &PreparedTransaction) -> Result<B256, DomainError> {
        if let Some(error) = self.send_error.lock().unwrap().take() {
            return Err(error);
        }
        let expected = self.nonce.fetch_add(1, Ordering::SeqCst);
        assert_eq!(tx.nonce, expected);
        Ok(keccak256(tx.nonce.to_be_bytes()))
    }

    async fn confirmation_status(&self, _tx_hash: B256) -> Result<ConfirmationStatus, DomainError> {
        Ok(ConfirmationStatus::Confirmed)
    }
}

pub struct TestApp {
    pub router: axum::Router,
    pub resolver: Arc<StubResolver>,
    pub chain: Arc<StubRelayChain>,
    pub gateway_signer: Address,
}

pub async fn create_test_app() -> TestApp {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    run_migrations(&pool).await.unwrap();

    let records = Arc::new(SqliteRecordRepository::new(pool));
    let resolver = Arc::new(StubResolver::default());
    let chain = Arc::new(StubRelayChain::default());
    let key = PrivateKeySigner::random();
    let gateway_signer = key.address();
    let retry = RetryPolicy::new(2, Duration::from_millis(1), 1.0);

    let submitter = Arc::new(TransactionSubmitter::new(
        chain.clone(),
        RelayerNonce::new(),
        SubmitterSettings {
            retry: retry.clone(),
            gas_limit_margin_percent: 20,
            confirmation_timeout: Duration::from_millis(200),
            poll_interval: Duration::from_millis(5),
        },
    ));

    let state = AppState {
        handle_lookup: Arc::new(HandleOffchainLookupUseCase::new(
            resolver.clone(),
            records.clone(),
            Arc::new(LocalAnswerSigner::new(key)),
            retry.clone(),
            Duration::from_secs(300),
        )),
        reverse_lookup: Arc::new(ReverseLookupUseCase::new(records.clone())),
        register_name: Arc::new(RegisterNameUseCase::new(
            Arc::new(StubRegistrar),
            submitter.clone(),
            records.clone(),
        )),
        sync_record: Arc::new(SyncRecordUseCase::new(
            resolver.clone(),
            records,
            retry,
        )),
        relay: Arc::new(RelayMetaTransactionUseCase::new(
            chain.clone(),
            submitter,
            RelaySettings {
                forwarder: forwarder(),
                payment: Some(payment()),
                token: Some(Address::repeat_byte(0x70)),
            },
        )),
    };

    TestApp {
        router: create_api_routes(state),
        resolver,
        chain,
        gateway_signer,
    }
}

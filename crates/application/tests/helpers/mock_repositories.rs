#![allow(dead_code)]

use async_trait::async_trait;
use namegate_application::ports::{AnswerSigner, RecordRepository};
use namegate_domain::{Address, Bytes, DomainError, EncodedName, ResolutionRecord, B256};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use alloy::signers::local::PrivateKeySigner;
use alloy::signers::SignerSync;

#[derive(Clone)]
pub struct MockRecordRepository {
    records: Arc<RwLock<HashMap<Vec<u8>, (Address, u64)>>>,
    write_seq: Arc<AtomicU64>,
    should_fail: Arc<AtomicBool>,
}

impl MockRecordRepository {
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(HashMap::new())),
            write_seq: Arc::new(AtomicU64::new(0)),
            should_fail: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }

    pub async fn count(&self) -> usize {
        self.records.read().await.len()
    }
}

impl Default for MockRecordRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecordRepository for MockRecordRepository {
    async fn upsert(&self, name: &EncodedName, address: Address) -> Result<(), DomainError> {
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(DomainError::DatabaseError("mock failure".to_string()));
        }
        let seq = self.write_seq.fetch_add(1, Ordering::SeqCst) + 1;
        self.records
            .write()
            .await
            .insert(name.as_bytes().to_vec(), (address, seq));
        Ok(())
    }

    async fn get_by_name(
        &self,
        name: &EncodedName,
    ) -> Result<Option<ResolutionRecord>, DomainError> {
        let records = self.records.read().await;
        Ok(records
            .get(name.as_bytes())
            .map(|(address, _)| ResolutionRecord::new(name.clone(), *address)))
    }

    async fn lookup_by_address(
        &self,
        address: Address,
    ) -> Result<Option<ResolutionRecord>, DomainError> {
        let records = self.records.read().await;
        let best = records
            .iter()
            .filter(|(_, (a, _))| *a == address)
            .max_by_key(|(_, (_, seq))| *seq);

        match best {
            Some((wire, (address, _))) => Ok(Some(ResolutionRecord::new(
                EncodedName::from_wire(wire)?,
                *address,
            ))),
            None => Ok(None),
        }
    }
}

pub struct TestAnswerSigner {
    signer: PrivateKeySigner,
}

impl TestAnswerSigner {
    pub fn new() -> Self {
        Self {
            signer: PrivateKeySigner::random(),
        }
    }
}

impl AnswerSigner for TestAnswerSigner {
    fn address(&self) -> Address {
        self.signer.address()
    }

    fn sign_digest(&self, digest: B256) -> Result<Bytes, DomainError> {
        self.signer
            .sign_hash_sync(&digest)
            .map(|sig| Bytes::from(sig.as_bytes().to_vec()))
            .map_err(|e| DomainError::SigningFailed(e.to_string()))
    }
}

pub struct FailingAnswerSigner;

impl AnswerSigner for FailingAnswerSigner {
    fn address(&self) -> Address {
        Address::ZERO
    }

    fn sign_digest(&self, _digest: B256) -> Result<Bytes, DomainError> {
        Err(DomainError::SigningFailed("key unavailable".to_string()))
    }
}

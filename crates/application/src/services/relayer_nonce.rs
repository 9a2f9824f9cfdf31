//! Account-nonce sequencing for the single relayer account.
//!
//! The counter is lazily initialized from the chain's pending transaction
//! count and advanced locally by one per accepted submission. Callers hold a
//! [`NonceLease`] (an owned mutex guard) from nonce assignment until the
//! transaction is broadcast, so two submissions can never share a nonce.

use namegate_domain::{DomainError, RetryPolicy};
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};
use tracing::{debug, info, warn};

use crate::ports::RelayChain;
use crate::services::with_retry;

#[derive(Clone, Default)]
pub struct RelayerNonce {
    next: Arc<Mutex<Option<u64>>>,
}

impl RelayerNonce {
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits for exclusive access and returns the nonce to use, syncing from
    /// the chain first when the tracker is uninitialized.
    pub async fn acquire(
        &self,
        chain: &dyn RelayChain,
        retry: &RetryPolicy,
    ) -> Result<NonceLease, DomainError> {
        let mut guard = self.next.clone().lock_owned().await;

        let nonce = match *guard {
            Some(nonce) => nonce,
            None => {
                let synced = with_retry(retry, "pending_nonce", || chain.pending_nonce()).await?;
                info!(nonce = synced, "Relayer nonce synchronized from chain");
                *guard = Some(synced);
                synced
            }
        };

        debug!(nonce, "Relayer nonce acquired");
        Ok(NonceLease {
            guard,
            nonce,
            settled: false,
        })
    }

    /// Forgets the local counter; the next acquisition re-reads the chain.
    pub async fn resync(&self) {
        *self.next.lock().await = None;
    }

    pub async fn current(&self) -> Option<u64> {
        *self.next.lock().await
    }
}

/// Exclusive hold on the relayer nonce. Dropping a lease without
/// [`commit`](NonceLease::commit) resets the tracker, since the broadcast
/// state of an abandoned submission is unknown.
pub struct NonceLease {
    guard: OwnedMutexGuard<Option<u64>>,
    nonce: u64,
    settled: bool,
}

impl NonceLease {
    pub fn nonce(&self) -> u64 {
        self.nonce
    }

    /// The transaction was accepted: advance by exactly one.
    pub fn commit(mut self) {
        *self.guard = Some(self.nonce + 1);
        self.settled = true;
    }

    /// The submission failed in a way that may have desynchronized the
    /// counter.
    pub fn resync(mut self) {
        *self.guard = None;
        self.settled = true;
    }
}

impl Drop for NonceLease {
    fn drop(&mut self) {
        if !self.settled {
            warn!(nonce = self.nonce, "Nonce lease abandoned, forcing resync");
            *self.guard = None;
        }
    }
}

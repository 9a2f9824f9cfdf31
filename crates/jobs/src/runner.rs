use crate::{RelayerBalanceJob, WalCheckpointJob};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::info;

pub trait SpawnableJob: Send + Sync + 'static {
    fn with_cancellation(self, token: CancellationToken) -> Self;
    fn start_job(self: Arc<Self>) -> JoinHandle<()>;
}

macro_rules! impl_spawnable_job {
    ($t:ty) => {
        impl SpawnableJob for $t {
            fn with_cancellation(self, token: CancellationToken) -> Self {
                self.with_cancellation(token)
            }

            fn start_job(self: Arc<Self>) -> JoinHandle<()> {
                tokio::spawn(async move { self.start().await })
            }
        }
    };
}

impl_spawnable_job!(RelayerBalanceJob);
impl_spawnable_job!(WalCheckpointJob);

fn spawn_job<J: SpawnableJob>(
    job: Option<J>,
    shutdown: &CancellationToken,
    handles: &mut Vec<JoinHandle<()>>,
) {
    if let Some(job) = job {
        handles.push(Arc::new(job.with_cancellation(shutdown.clone())).start_job());
    }
}

/// Starts the background jobs that were configured and hands back their
/// handles. Every job stops when the shutdown token is cancelled.
pub struct JobRunner {
    relayer_balance: Option<RelayerBalanceJob>,
    wal_checkpoint: Option<WalCheckpointJob>,
    shutdown: CancellationToken,
}

impl JobRunner {
    pub fn new() -> Self {
        Self {
            relayer_balance: None,
            wal_checkpoint: None,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_relayer_balance(mut self, job: RelayerBalanceJob) -> Self {
        self.relayer_balance = Some(job);
        self
    }

    pub fn with_wal_checkpoint(mut self, job: WalCheckpointJob) -> Self {
        self.wal_checkpoint = Some(job);
        self
    }

    pub fn with_shutdown_token(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub fn start(self) -> Vec<JoinHandle<()>> {
        info!("Starting background job runner");

        let mut handles = Vec::new();
        spawn_job(self.relayer_balance, &self.shutdown, &mut handles);
        spawn_job(self.wal_checkpoint, &self.shutdown, &mut handles);

        info!(jobs = handles.len(), "Background jobs started");
        handles
    }
}

impl Default for JobRunner {
    fn default() -> Self {
        Self::new()
    }
}

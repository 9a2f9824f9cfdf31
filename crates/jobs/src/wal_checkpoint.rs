use sqlx::SqlitePool;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

/// `(busy, wal frames, frames checkpointed)` as reported by SQLite.
type CheckpointRow = (i64, i64, i64);

pub struct WalCheckpointJob {
    pool: SqlitePool,
    interval_secs: u64,
    shutdown: CancellationToken,
}

impl WalCheckpointJob {
    pub fn new(pool: SqlitePool, interval_secs: u64) -> Self {
        Self {
            pool,
            interval_secs,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    /// Runs one passive checkpoint and returns the number of frames moved
    /// into the database file.
    pub async fn checkpoint(&self) -> Result<i64, sqlx::Error> {
        let (busy, wal_frames, checkpointed) =
            sqlx::query_as::<_, CheckpointRow>("PRAGMA wal_checkpoint(PASSIVE)")
                .fetch_one(&self.pool)
                .await?;

        if busy != 0 {
            warn!(wal_frames, checkpointed, "WAL checkpoint could not complete, readers busy");
        } else {
            debug!(wal_frames, checkpointed, "WAL passive checkpoint completed");
        }
        Ok(checkpointed)
    }

    pub async fn start(self: Arc<Self>) {
        info!(
            interval_secs = self.interval_secs,
            "Starting WAL checkpoint job (PASSIVE mode)"
        );

        let mut interval = tokio::time::interval(Duration::from_secs(self.interval_secs.max(1)));
        // First tick fires immediately.
        interval.tick().await;
        loop {
            tokio::select! {
                _ = self.shutdown.cancelled() => {
                    info!("WalCheckpointJob: shutting down");
                    break;
                }
                _ = interval.tick() => {
                    if let Err(e) = self.checkpoint().await {
                        error!(error = %e, "WAL checkpoint failed");
                    }
                }
            }
        }
    }
}

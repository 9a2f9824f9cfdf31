use namegate_application::use_cases::CheckRelayerBalanceUseCase;
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

/// Periodically reports the relayer's gas funds.
pub struct RelayerBalanceJob {
    check: Arc<CheckRelayerBalanceUseCase>,
    interval_secs: u64,
    shutdown: CancellationToken,
}

impl RelayerBalanceJob {
    pub fn new(check: Arc<CheckRelayerBalanceUseCase>) -> Self {
        Self {
            check,
            interval_secs: 300,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_interval(mut self, interval_secs: u64) -> Self {
        self.interval_secs = interval_secs;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub async fn start(self: Arc<Self>) {
        info!(
            interval_secs = self.interval_secs,
            "Starting relayer balance job"
        );

        let mut interval = tokio::time::interval(Duration::from_secs(self.interval_secs.max(1)));
        loop {
            tokio::select! {
                _ = self.shutdown.cancelled() => {
                    info!("RelayerBalanceJob: shutting down");
                    break;
                }
                _ = interval.tick() => {
                    if let Err(e) = self.check.execute().await {
                        error!(error = %e, "Relayer balance check failed");
                    }
                }
            }
        }
    }
}

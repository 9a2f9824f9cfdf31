use super::UseCases;
use namegate_domain::Config;
use namegate_jobs::{JobRunner, RelayerBalanceJob, WalCheckpointJob};
use sqlx::SqlitePool;
use tokio_util::sync::CancellationToken;

pub fn build_jobs(
    config: &Config,
    use_cases: &UseCases,
    pool: SqlitePool,
    shutdown: CancellationToken,
) -> JobRunner {
    let mut runner = JobRunner::new()
        .with_shutdown_token(shutdown)
        .with_relayer_balance(
            RelayerBalanceJob::new(use_cases.check_relayer_balance.clone())
                .with_interval(config.relayer.balance_check_interval_secs),
        );

    if config.database.wal_checkpoint_interval_secs > 0 {
        runner = runner.with_wal_checkpoint(WalCheckpointJob::new(
            pool,
            config.database.wal_checkpoint_interval_secs,
        ));
    }

    runner
}

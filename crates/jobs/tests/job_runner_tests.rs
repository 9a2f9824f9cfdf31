use namegate_application::use_cases::CheckRelayerBalanceUseCase;
use namegate_domain::config::DatabaseConfig;
use namegate_domain::U256;
use namegate_jobs::{JobRunner, RelayerBalanceJob, WalCheckpointJob};
use std::sync::Arc;
use tokio::time::{sleep, timeout, Duration};
use tokio_util::sync::CancellationToken;

mod helpers;
use helpers::MockBalanceChain;

fn balance_job(chain: Arc<MockBalanceChain>) -> RelayerBalanceJob {
    let check = Arc::new(CheckRelayerBalanceUseCase::new(chain, U256::from(10u64)));
    RelayerBalanceJob::new(check).with_interval(3600)
}

#[tokio::test]
async fn test_job_runner_empty_starts_cleanly() {
    assert!(JobRunner::new().start().is_empty());
}

#[tokio::test]
async fn test_relayer_balance_checked_on_start() {
    let chain = Arc::new(MockBalanceChain::new(U256::from(5u64)));
    let shutdown = CancellationToken::new();

    let handles = JobRunner::new()
        .with_relayer_balance(balance_job(chain.clone()))
        .with_shutdown_token(shutdown.clone())
        .start();
    assert_eq!(handles.len(), 1);

    sleep(Duration::from_millis(50)).await;
    assert_eq!(chain.balance_reads(), 1);

    shutdown.cancel();
    for handle in handles {
        timeout(Duration::from_secs(1), handle).await.unwrap().unwrap();
    }
}

#[tokio::test]
async fn test_failed_balance_check_keeps_job_alive() {
    let chain = Arc::new(MockBalanceChain::new(U256::ZERO));
    chain.set_should_fail(true);
    let shutdown = CancellationToken::new();

    let check = Arc::new(CheckRelayerBalanceUseCase::new(chain.clone(), U256::from(1u64)));
    let job = Arc::new(
        RelayerBalanceJob::new(check)
            .with_interval(1)
            .with_cancellation(shutdown.clone()),
    );
    let handle = tokio::spawn(job.start());

    sleep(Duration::from_millis(1_200)).await;
    assert!(chain.balance_reads() >= 2);
    assert!(!handle.is_finished());

    shutdown.cancel();
    timeout(Duration::from_secs(1), handle).await.unwrap().unwrap();
}

#[tokio::test]
async fn test_wal_checkpoint_on_file_database() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = DatabaseConfig {
        path: dir.path().join("records.db").to_string_lossy().into_owned(),
        ..DatabaseConfig::default()
    };
    let pool = namegate_infrastructure::database::create_pool(&cfg)
        .await
        .unwrap();

    sqlx::query(
        "INSERT INTO resolution_records (name, address, address_lower, write_seq, updated_at)
         VALUES (x'03626f620365746800', '0x01', '0x01', 1, '2024-01-01 00:00:00')",
    )
    .execute(&pool)
    .await
    .unwrap();

    let job = WalCheckpointJob::new(pool, 300);
    assert!(job.checkpoint().await.unwrap() >= 0);
}

#[tokio::test]
async fn test_all_jobs_stop_on_shutdown() {
    let chain = Arc::new(MockBalanceChain::new(U256::from(50u64)));
    let pool = sqlx::sqlite::SqlitePoolOptions::new()
        .connect("sqlite::memory:")
        .await
        .unwrap();
    let shutdown = CancellationToken::new();

    let handles = JobRunner::new()
        .with_relayer_balance(balance_job(chain))
        .with_wal_checkpoint(WalCheckpointJob::new(pool, 3600))
        .with_shutdown_token(shutdown.clone())
        .start();
    assert_eq!(handles.len(), 2);

    shutdown.cancel();
    for handle in handles {
        timeout(Duration::from_secs(1), handle).await.unwrap().unwrap();
    }
}

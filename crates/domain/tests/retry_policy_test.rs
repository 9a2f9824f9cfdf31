use namegate_domain::RetryPolicy;
use std::time::Duration;

#[test]
fn test_delay_grows_exponentially() {
    let policy = RetryPolicy::new(4, Duration::from_millis(100), 2.0);

    assert_eq!(policy.delay_after(1), Duration::from_millis(100));
    assert_eq!(policy.delay_after(2), Duration::from_millis(200));
    assert_eq!(policy.delay_after(3), Duration::from_millis(400));
}

#[test]
fn test_delay_is_capped() {
    let policy = RetryPolicy {
        max_delay_ms: 300,
        ..RetryPolicy::new(10, Duration::from_millis(100), 3.0)
    };

    assert_eq!(policy.delay_after(5), Duration::from_millis(300));
}

#[test]
fn test_none_policy_is_single_attempt() {
    let policy = RetryPolicy::none();
    assert_eq!(policy.max_attempts, 1);
    assert_eq!(policy.delay_after(1), Duration::ZERO);
}

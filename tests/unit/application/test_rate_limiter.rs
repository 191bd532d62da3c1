use veem_client::application::config::RateLimiterConfig;
use veem_client::application::rate_limiter::RateLimiter;

#[tokio::test]
async fn test_wait_within_burst_is_immediate() {
    let limiter = RateLimiter::new(&RateLimiterConfig {
        max_requests: 60,
        period_seconds: 60,
        burst_size: 3,
    });

    let start = std::time::Instant::now();
    for _ in 0..3 {
        limiter.wait().await;
    }
    assert!(start.elapsed() < std::time::Duration::from_millis(500));
    assert!(!limiter.check());
}

#[test]
fn test_clones_share_the_same_bucket() {
    let limiter = RateLimiter::new(&RateLimiterConfig {
        max_requests: 1,
        period_seconds: 60,
        burst_size: 1,
    });
    let clone = limiter.clone();

    assert!(limiter.check());
    assert!(!clone.check());
}

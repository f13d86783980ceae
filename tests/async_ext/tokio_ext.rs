use std::time::Duration;

use app_error::async_ext::with_timeout;
use app_error::{AppError, AppResult, StatusCode};

#[tokio::test]
async fn completes_within_the_deadline() {
    let result = with_timeout(Duration::from_secs(5), async { Ok(42) }).await;
    assert_eq!(result.unwrap(), 42);
}

#[tokio::test]
async fn inner_errors_pass_through_unchanged() {
    let result: AppResult<()> = with_timeout(Duration::from_secs(5), async {
        Err(AppError::new("upstream said no", StatusCode::Forbidden))
    })
    .await;

    let err = result.unwrap_err();
    assert_eq!(err.status(), StatusCode::Forbidden);
    assert_eq!(err.message(), "upstream said no");
}

#[tokio::test]
async fn elapsed_deadline_becomes_a_503() {
    let result: AppResult<()> = with_timeout(Duration::from_millis(10), async {
        tokio::time::sleep(Duration::from_secs(60)).await;
        Ok(())
    })
    .await;

    let err = result.unwrap_err();
    assert_eq!(err.status(), StatusCode::ServiceUnavailable);
    assert!(err.message().contains("timed out"));
}

//! Tokio-specific async helpers.

use core::future::Future;
use core::time::Duration;

use crate::types::{AppError, AppResult, StatusCode};

/// Bounds an operation with a deadline.
///
/// When the future completes in time its result is returned untouched; when
/// the deadline passes the operation is dropped and a 503 error is returned
/// in its place.
///
/// # Examples
///
/// ```rust,ignore
/// use core::time::Duration;
/// use app_error::async_ext::with_timeout;
///
/// let report = with_timeout(Duration::from_secs(5), generate_report()).await?;
/// ```
pub async fn with_timeout<T, F>(duration: Duration, future: F) -> AppResult<T>
where
    F: Future<Output = AppResult<T>>,
{
    match tokio::time::timeout(duration, future).await {
        Ok(result) => result,
        Err(_elapsed) => Err(AppError::new(
            format!("operation timed out after {duration:?}"),
            StatusCode::ServiceUnavailable,
        )),
    }
}

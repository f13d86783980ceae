//! Future adapter that classifies failures at completion.

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use pin_project_lite::pin_project;

use crate::types::{AppError, AppResult, BoxError, Caller, StatusCode};

/// Extension trait for futures whose output is a `Result`.
///
/// [`wrap_err`](FutureAppExt::wrap_err) captures the call site when the
/// adapter is created, so attribution points at the `.wrap_err(..)`
/// expression rather than at the executor that eventually polls it.
///
/// # Examples
///
/// ```rust,ignore
/// use app_error::prelude_async::*;
///
/// async fn fetch_user(id: u64) -> AppResult<User> {
///     database
///         .get_user(id)
///         .wrap_err("fetching user", StatusCode::BadGateway)
///         .await
/// }
/// ```
pub trait FutureAppExt<T, E>: Future<Output = Result<T, E>> + Sized {
    /// Converts this future's `Err` into an [`AppError`] with the given
    /// message and status.
    #[track_caller]
    fn wrap_err(self, message: impl Into<String>, status: StatusCode) -> WrapErrFuture<Self> {
        WrapErrFuture {
            inner: self,
            message: Some(message.into()),
            status,
            caller: Caller::capture(),
        }
    }
}

impl<F, T, E> FutureAppExt<T, E> for F where F: Future<Output = Result<T, E>> {}

pin_project! {
    /// Future wrapper created by [`FutureAppExt::wrap_err`].
    #[must_use = "futures do nothing unless polled"]
    pub struct WrapErrFuture<F> {
        #[pin]
        inner: F,
        message: Option<String>,
        status: StatusCode,
        caller: Caller,
    }
}

impl<F, T, E> Future for WrapErrFuture<F>
where
    F: Future<Output = Result<T, E>>,
    E: Into<BoxError>,
{
    type Output = AppResult<T>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        match this.inner.poll(cx) {
            Poll::Ready(Ok(value)) => Poll::Ready(Ok(value)),
            Poll::Ready(Err(cause)) => {
                let message = this.message.take().unwrap_or_default();
                Poll::Ready(Err(AppError::wrap_at(*this.caller, message, *this.status, cause)))
            }
            Poll::Pending => Poll::Pending,
        }
    }
}

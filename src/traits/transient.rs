//! Transient error classification for retry strategies.
//!
//! This module provides the [`TransientError`] trait for classifying errors
//! as transient (temporary, potentially recoverable by retry) or permanent.
//! The crate does not implement retry logic itself; the trait exists so
//! external resilience libraries and hand-rolled retry loops can agree on
//! what is worth retrying.
//!
//! # Examples
//!
//! ```
//! use app_error::{AppError, StatusCode};
//! use app_error::traits::TransientError;
//!
//! let throttled = AppError::new("rate limited", StatusCode::TooManyRequests);
//! let rejected = AppError::new("bad payload", StatusCode::BadRequest);
//!
//! assert!(throttled.is_transient());
//! assert!(rejected.is_permanent());
//! ```

use core::time::Duration;

use crate::types::AppError;

/// Classification of errors as transient or permanent.
///
/// Transient errors are temporary failures that may succeed if retried, such
/// as timeouts, rate limiting, or an upstream briefly unavailable.
pub trait TransientError {
    /// Returns `true` if this error is transient and may succeed on retry.
    fn is_transient(&self) -> bool;

    /// Returns `true` if this error is permanent and should not be retried.
    #[inline]
    fn is_permanent(&self) -> bool {
        !self.is_transient()
    }

    /// Optional hint for how long to wait before retrying.
    ///
    /// Returns `None` by default, indicating no specific wait time is
    /// suggested.
    #[inline]
    fn retry_after_hint(&self) -> Option<Duration> {
        None
    }
}

/// An [`AppError`] is transient exactly when its status is (408, 429, 502,
/// 503, 504). The cause chain is not consulted.
impl TransientError for AppError {
    fn is_transient(&self) -> bool {
        self.status().is_transient()
    }
}

/// Blanket implementation for standard I/O errors.
impl TransientError for std::io::Error {
    fn is_transient(&self) -> bool {
        use std::io::ErrorKind;
        matches!(
            self.kind(),
            ErrorKind::ConnectionRefused
                | ErrorKind::ConnectionReset
                | ErrorKind::ConnectionAborted
                | ErrorKind::TimedOut
                | ErrorKind::Interrupted
                | ErrorKind::WouldBlock
        )
    }
}

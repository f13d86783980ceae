//! Structured logging integration.
//!
//! Emits errors through the `tracing` ecosystem with the fields a log
//! pipeline expects: classified errors carry their message, rendered stack,
//! and status; foreign errors carry the message alone.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! app-error = { version = "0.3", features = ["tracing"] }
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use app_error::tracing_ext::ResultLogExt;
//!
//! fn handle(req: Request) -> AppResult<Response> {
//!     process(req).log_err()
//! }
//! ```

use std::error::Error as StdError;

use crate::types::as_app_error;

/// Records an error event for any error value.
///
/// Classified errors are logged with `error`, `error.stack`, and `status`
/// fields; anything else with `error` only. The chain stays in the logs and
/// is never part of a response body.
pub fn record_error(err: &(dyn StdError + 'static)) {
    match as_app_error(err) {
        Some(app) => {
            tracing::error!(
                error = %app,
                error.stack = %app.error_stack(),
                status = app.status().as_u16(),
                "operation failed"
            );
        }
        None => {
            tracing::error!(error = %err, "operation failed");
        }
    }
}

/// Extension trait that records failures without consuming them.
pub trait ResultLogExt<T> {
    /// Records an error event when `self` is `Err`, then returns `self`
    /// unchanged.
    #[must_use]
    fn log_err(self) -> Self;
}

impl<T, E> ResultLogExt<T> for Result<T, E>
where
    E: StdError + 'static,
{
    fn log_err(self) -> Self {
        if let Err(err) = &self {
            record_error(err);
        }
        self
    }
}

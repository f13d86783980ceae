//! Extension trait for classifying `Result` errors ergonomically.
//!
//! This module provides [`ResultExt`], which wraps the error side of any
//! `Result` into an [`AppError`] without verbose `.map_err()` chains.
//!
//! # Examples
//!
//! ```
//! use app_error::{AppResult, StatusCode};
//! use app_error::traits::ResultExt;
//!
//! fn load_config() -> AppResult<String> {
//!     std::fs::read_to_string("config.toml")
//!         .wrap_err("loading configuration file", StatusCode::InternalServerError)
//! }
//!
//! assert!(load_config().is_err());
//! ```

use crate::types::{AppError, AppResult, BoxError, Caller, StatusCode};

/// Adds status classification to `Result` errors.
///
/// Both methods capture the call site for attribution, so the resulting
/// error points at the line that did the wrapping, not at this crate.
///
/// # Performance
///
/// [`wrap_err_with`](ResultExt::wrap_err_with) defers message formatting to
/// the failure path; prefer it whenever the message interpolates values.
///
/// # Examples
///
/// ## Eager message
///
/// ```
/// use app_error::{AppResult, StatusCode};
/// use app_error::traits::ResultExt;
///
/// fn read_file(path: &str) -> AppResult<String> {
///     std::fs::read_to_string(path)
///         .wrap_err("reading data file", StatusCode::InternalServerError)
/// }
/// ```
///
/// ## Lazy message
///
/// ```
/// use app_error::{AppResult, StatusCode};
/// use app_error::traits::ResultExt;
///
/// fn find_user(id: u64) -> AppResult<()> {
///     let result: Result<(), &str> = Err("no row");
///     result.wrap_err_with(StatusCode::NotFound, || format!("user {id} not found"))
/// }
/// ```
pub trait ResultExt<T> {
    /// Wraps the error in an [`AppError`] with the given message and status.
    #[track_caller]
    fn wrap_err(self, message: impl Into<String>, status: StatusCode) -> AppResult<T>;

    /// Wraps the error in an [`AppError`], formatting the message only on the
    /// failure path.
    #[track_caller]
    fn wrap_err_with<F, S>(self, status: StatusCode, message: F) -> AppResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<BoxError>,
{
    #[track_caller]
    fn wrap_err(self, message: impl Into<String>, status: StatusCode) -> AppResult<T> {
        // Capture before entering the closure so attribution lands on the
        // caller's line.
        let caller = Caller::capture();
        self.map_err(|cause| AppError::wrap_at(caller, message, status, cause))
    }

    #[track_caller]
    fn wrap_err_with<F, S>(self, status: StatusCode, message: F) -> AppResult<T>
    where
        F: FnOnce() -> S,
        S: Into<String>,
    {
        let caller = Caller::capture();
        self.map_err(|cause| AppError::wrap_at(caller, message(), status, cause))
    }
}

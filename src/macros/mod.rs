//! Shorthand macros for raising classified errors.
//!
//! - [`macro@crate::app_err`] - builds an [`AppError`](crate::AppError) with a
//!   `format!`-style message.
//! - [`macro@crate::raise`] - early-returns an `Err(AppError)` from the
//!   current function.
//! - [`macro@crate::ensure`] - raises unless a condition holds.
//!
//! # Examples
//!
//! ```
//! use app_error::{app_err, ensure, raise, AppResult, StatusCode};
//!
//! fn withdraw(balance: i64, amount: i64) -> AppResult<i64> {
//!     ensure!(amount > 0, StatusCode::BadRequest, "amount must be positive, got {amount}");
//!     if amount > balance {
//!         raise!(StatusCode::Conflict, "insufficient funds: {balance} < {amount}");
//!     }
//!     Ok(balance - amount)
//! }
//!
//! assert!(withdraw(100, 20).is_ok());
//! assert_eq!(withdraw(100, -5).unwrap_err().status(), StatusCode::BadRequest);
//! ```

/// Builds an [`AppError`](crate::AppError) from a status and a `format!`
/// message.
///
/// # Examples
///
/// ```
/// use app_error::{app_err, StatusCode};
///
/// let id = 7;
/// let err = app_err!(StatusCode::NotFound, "user {id} not found");
/// assert_eq!(err.to_string(), "user 7 not found");
/// ```
#[macro_export]
macro_rules! app_err {
    ($status:expr, $($arg:tt)*) => {
        $crate::AppError::new(format!($($arg)*), $status)
    };
}

/// Early-returns an `Err` with a freshly built
/// [`AppError`](crate::AppError).
///
/// # Examples
///
/// ```
/// use app_error::{raise, AppResult, StatusCode};
///
/// fn forbidden() -> AppResult<()> {
///     raise!(StatusCode::Forbidden, "admin role required");
/// }
///
/// assert_eq!(forbidden().unwrap_err().status(), StatusCode::Forbidden);
/// ```
#[macro_export]
macro_rules! raise {
    ($status:expr, $($arg:tt)*) => {
        return Err($crate::app_err!($status, $($arg)*))
    };
}

/// Raises unless the condition holds.
///
/// # Examples
///
/// ```
/// use app_error::{ensure, AppResult, StatusCode};
///
/// fn check_len(name: &str) -> AppResult<()> {
///     ensure!(name.len() <= 64, StatusCode::UnprocessableEntity, "name too long");
///     Ok(())
/// }
///
/// assert!(check_len("ada").is_ok());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $status:expr, $($arg:tt)*) => {
        if !$cond {
            $crate::raise!($status, $($arg)*);
        }
    };
}

//! Error types and collaborator-facing values.
//!
//! # Examples
//!
//! ```
//! use app_error::{AppError, StatusCode};
//!
//! let io = std::io::Error::other("connection refused");
//! let err = AppError::wrap("query failed", StatusCode::InternalServerError, io);
//!
//! println!("{}", err.error_stack());
//! // error stack:
//! //     src/repository.rs:42 - query failed
//! //     error: connection refused
//! ```

pub mod app_error;
pub mod caller;
pub mod response;
pub mod status;

pub use app_error::{as_app_error, AppError, Chain};
pub use caller::Caller;
pub use response::ErrorResponse;
pub use status::StatusCode;

/// Owned, type-erased error used as the cause slot of an [`AppError`].
///
/// Anything implementing `std::error::Error + Send + Sync` converts into it,
/// including `AppError` itself.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result alias used throughout services that speak [`AppError`].
///
/// # Type Parameters
///
/// * `T` - The success value type
pub type AppResult<T> = Result<T, AppError>;

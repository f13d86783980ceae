//! Traits for error classification and ergonomic wrapping.
//!
//! - [`ResultExt`]: attach a message and status to any `Result` error
//! - [`TransientError`]: classify errors for retry decisions
//!
//! # Examples
//!
//! ```
//! use app_error::{AppResult, StatusCode};
//! use app_error::traits::{ResultExt, TransientError};
//!
//! fn ping() -> AppResult<()> {
//!     let result: Result<(), &str> = Err("no route");
//!     result.wrap_err("upstream unreachable", StatusCode::BadGateway)
//! }
//!
//! let err = ping().unwrap_err();
//! assert!(err.is_transient());
//! ```

pub mod result_ext;
pub mod transient;

pub use result_ext::ResultExt;
pub use transient::TransientError;

//! Classified application errors for backend services.
//!
//! Every failure crossing a layer boundary is either *classified* - an
//! [`AppError`] carrying a message, an HTTP-like [`StatusCode`], call-site
//! attribution, and an optional cause - or *opaque*, any other error with
//! only a message. Wrapping at each layer builds a causal chain; only the
//! outermost message and status ever reach an external caller, while the
//! full chain is rendered for logs via [`AppError::error_stack`].
//!
//! # Examples
//!
//! ## Wrapping a lower-level failure
//!
//! ```
//! use app_error::{AppError, StatusCode};
//!
//! let io = std::io::Error::other("connection refused");
//! let db = AppError::wrap("query failed", StatusCode::InternalServerError, io);
//! let api = AppError::wrap("request failed", StatusCode::BadRequest, db);
//!
//! assert_eq!(api.to_string(), "request failed");
//! assert_eq!(api.status().as_u16(), 400);
//! assert_eq!(api.chain().count(), 3);
//! ```
//!
//! ## Classifying arbitrary errors at a boundary
//!
//! ```
//! use app_error::{as_app_error, AppError, ErrorResponse, StatusCode};
//! use std::error::Error;
//!
//! fn respond(err: &(dyn Error + 'static)) -> ErrorResponse {
//!     ErrorResponse::from_error(err)
//! }
//!
//! let ours = AppError::new("user not found", StatusCode::NotFound);
//! assert_eq!(respond(&ours).status(), 404);
//!
//! let theirs = std::io::Error::other("disk full");
//! assert_eq!(respond(&theirs).status(), 500);
//! ```
//!
//! ## Ergonomic wrapping in service code
//!
//! ```
//! use app_error::prelude::*;
//!
//! fn parse_port(raw: &str) -> AppResult<u16> {
//!     raw.parse()
//!         .wrap_err_with(StatusCode::BadRequest, || format!("invalid port {raw:?}"))
//! }
//!
//! assert_eq!(parse_port("8080").unwrap(), 8080);
//! assert_eq!(parse_port("nope").unwrap_err().status(), StatusCode::BadRequest);
//! ```

/// Shorthand macros for raising classified errors
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Traits for classification and ergonomic wrapping
pub mod traits;
/// AppError, StatusCode, and collaborator-facing values
pub mod types;

/// Async extensions (requires the `async` feature)
#[cfg(feature = "async")]
pub mod async_ext;

/// Async prelude - sync and async utilities in one import (requires the
/// `async` feature)
#[cfg(feature = "async")]
pub mod prelude_async;

/// Structured logging integration (requires the `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use traits::*;
pub use types::{
    as_app_error, AppError, AppResult, BoxError, Caller, Chain, ErrorResponse, StatusCode,
};

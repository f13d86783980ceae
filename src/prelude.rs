//! Convenience re-exports for common usage patterns.
//!
//! Import everything with:
//!
//! ```
//! use app_error::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`app_err!`], [`raise!`], [`ensure!`]
//! - **Types**: [`AppError`], [`StatusCode`], [`Caller`], [`ErrorResponse`]
//! - **Traits**: [`ResultExt`], [`TransientError`]
//!
//! # Examples
//!
//! ```
//! use app_error::prelude::*;
//!
//! fn load_config() -> AppResult<String> {
//!     std::fs::read_to_string("config.toml")
//!         .wrap_err("loading configuration", StatusCode::InternalServerError)
//! }
//!
//! assert!(load_config().is_err());
//! ```

// Macros
pub use crate::{app_err, ensure, raise};

// Core types
pub use crate::types::{
    as_app_error, AppError, AppResult, BoxError, Caller, Chain, ErrorResponse, StatusCode,
};

// Traits
pub use crate::traits::{ResultExt, TransientError};

//! Async extensions for classified errors.
//!
//! # Feature Flags
//!
//! The future adapters require the `async` feature; the task group and
//! timeout helpers additionally need a tokio runtime via `async-tokio`:
//!
//! ```toml
//! [dependencies]
//! app-error = { version = "0.3", features = ["async-tokio"] }
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use app_error::prelude_async::*;
//!
//! async fn fetch_profile(id: u64) -> AppResult<Profile> {
//!     http_get(format!("/profiles/{id}"))
//!         .wrap_err("fetching profile", StatusCode::BadGateway)
//!         .await
//! }
//! ```

mod future_ext;
#[cfg(feature = "async-tokio")]
mod task_group;
#[cfg(feature = "async-tokio")]
mod tokio_ext;

pub use future_ext::{FutureAppExt, WrapErrFuture};
#[cfg(feature = "async-tokio")]
pub use task_group::TaskGroup;
#[cfg(feature = "async-tokio")]
pub use tokio_ext::with_timeout;

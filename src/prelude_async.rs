//! Async prelude - everything from [`prelude`](crate::prelude) plus the
//! async extensions.
//!
//! ```rust,ignore
//! use app_error::prelude_async::*;
//!
//! async fn run() -> AppResult<()> {
//!     let mut group = TaskGroup::new();
//!     group.spawn(async { Ok(()) });
//!     group.wait().await
//! }
//! ```

pub use crate::prelude::*;

pub use crate::async_ext::{FutureAppExt, WrapErrFuture};

#[cfg(feature = "async-tokio")]
pub use crate::async_ext::{with_timeout, TaskGroup};

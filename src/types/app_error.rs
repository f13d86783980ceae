//! The classified application error and its causal chain.
//!
//! [`AppError`] is the error currency between service layers: a human-readable
//! message, a [`StatusCode`] for response classification, call-site
//! attribution, and an optional owned cause. Wrapping a failure at each layer
//! builds a singly-linked chain that [`AppError::error_stack`] renders for
//! diagnostics while [`Display`](core::fmt::Display) stays a single line for
//! external callers.

use std::error::Error as StdError;
use std::fmt::{self, Write as _};

use crate::types::{BoxError, Caller, StatusCode};

/// An immutable, classified application error.
///
/// Every field is fixed at construction. The cause, when present, is
/// exclusively owned: either another `AppError` (the chain continues) or any
/// other error type (the chain terminates at that node).
///
/// # Examples
///
/// ```
/// use app_error::{AppError, StatusCode};
///
/// let io = std::io::Error::other("connection refused");
/// let db = AppError::wrap("query failed", StatusCode::InternalServerError, io);
/// let api = AppError::wrap("request failed", StatusCode::BadRequest, db);
///
/// // Display and status come from the outermost wrap only.
/// assert_eq!(api.to_string(), "request failed");
/// assert_eq!(api.status(), StatusCode::BadRequest);
///
/// // The full chain is reserved for diagnostics.
/// assert_eq!(api.chain().count(), 3);
/// assert_eq!(api.root_cause().to_string(), "connection refused");
/// ```
#[derive(Debug)]
pub struct AppError {
    message: String,
    status: StatusCode,
    caller: Caller,
    cause: Option<BoxError>,
}

impl AppError {
    /// Creates an error with no cause, attributing it to the calling line.
    #[track_caller]
    #[must_use]
    pub fn new(message: impl Into<String>, status: StatusCode) -> Self {
        Self::at(Caller::capture(), message, status)
    }

    /// Wraps a lower-level failure, attributing the wrap to the calling line.
    ///
    /// The cause may be another `AppError` or any other error type; it is
    /// owned by the new node and never mutated afterwards.
    #[track_caller]
    #[must_use]
    pub fn wrap(
        message: impl Into<String>,
        status: StatusCode,
        cause: impl Into<BoxError>,
    ) -> Self {
        Self::wrap_at(Caller::capture(), message, status, cause)
    }

    /// Creates an error with explicitly supplied attribution.
    ///
    /// Used by adapters that capture the [`Caller`] before the error exists,
    /// such as the future combinators in `async_ext`.
    #[must_use]
    pub fn at(caller: Caller, message: impl Into<String>, status: StatusCode) -> Self {
        Self { message: message.into(), status, caller, cause: None }
    }

    /// Wraps a failure with explicitly supplied attribution.
    #[must_use]
    pub fn wrap_at(
        caller: Caller,
        message: impl Into<String>,
        status: StatusCode,
        cause: impl Into<BoxError>,
    ) -> Self {
        Self { message: message.into(), status, caller, cause: Some(cause.into()) }
    }

    /// This node's own message. Never includes the cause's message.
    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The status set at this wrap point. Inner causes are never consulted.
    #[inline]
    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Where this error was constructed.
    #[inline]
    #[must_use]
    pub fn caller(&self) -> Caller {
        self.caller
    }

    /// The wrapped error, if any.
    #[inline]
    #[must_use]
    pub fn cause(&self) -> Option<&(dyn StdError + 'static)> {
        self.cause.as_deref().map(|cause| cause as &(dyn StdError + 'static))
    }

    /// Iterates the chain from this node down to the root cause.
    ///
    /// Each node is visited exactly once. Traversal stops at the first node
    /// that is not an `AppError`; that error's own `source()` chain is not
    /// descended into.
    #[must_use]
    pub fn chain(&self) -> Chain<'_> {
        Chain { next: Some(self) }
    }

    /// The innermost error in the chain.
    #[must_use]
    pub fn root_cause(&self) -> &(dyn StdError + 'static) {
        let mut root: &(dyn StdError + 'static) = self;
        for node in self.chain() {
            root = node;
        }
        root
    }

    /// Renders the whole chain for diagnostics, outermost first.
    ///
    /// Classified nodes show their attribution and message; a terminal
    /// foreign cause shows its plain message. The output is deterministic:
    /// repeated calls return identical strings.
    ///
    /// ```
    /// use app_error::{AppError, StatusCode};
    ///
    /// let io = std::io::Error::other("connection refused");
    /// let err = AppError::wrap("query failed", StatusCode::InternalServerError, io);
    ///
    /// let stack = err.error_stack();
    /// assert!(stack.starts_with("error stack:"));
    /// assert!(stack.contains("query failed"));
    /// assert!(stack.ends_with("error: connection refused"));
    /// ```
    #[must_use]
    pub fn error_stack(&self) -> String {
        let mut out = String::from("error stack:");
        for node in self.chain() {
            match node.downcast_ref::<AppError>() {
                Some(app) => {
                    let _ = write!(out, "\n    {} - {}", app.caller, app.message);
                }
                None => {
                    let _ = write!(out, "\n    error: {node}");
                }
            }
        }
        out
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl StdError for AppError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.cause()
    }
}

/// Classification query: is this one of our errors?
///
/// Returns a handle to the [`AppError`] when the value was produced by this
/// crate's constructors, `None` for any foreign error. Collaborators use the
/// handle to reach the status code and stack; on `None` they fall back to the
/// plain message.
///
/// # Examples
///
/// ```
/// use app_error::{as_app_error, AppError, StatusCode};
///
/// let ours = AppError::new("nope", StatusCode::Forbidden);
/// let theirs = std::io::Error::other("disk on fire");
///
/// assert!(as_app_error(&ours).is_some());
/// assert!(as_app_error(&theirs).is_none());
/// ```
#[must_use]
pub fn as_app_error<'a>(err: &'a (dyn StdError + 'static)) -> Option<&'a AppError> {
    err.downcast_ref::<AppError>()
}

/// Iterator over a causal chain, created by [`AppError::chain`].
#[derive(Clone)]
pub struct Chain<'a> {
    next: Option<&'a (dyn StdError + 'static)>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn StdError + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        self.next = current.downcast_ref::<AppError>().and_then(AppError::cause);
        Some(current)
    }
}

impl core::iter::FusedIterator for Chain<'_> {}

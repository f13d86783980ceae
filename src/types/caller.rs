//! Call-site attribution captured at error construction.

use core::fmt;
use core::panic::Location;

/// Source location recorded when an [`AppError`](crate::AppError) is built.
///
/// Captured through `#[track_caller]`, so the location is resolved at compile
/// time and points at the constructor's caller rather than at this crate.
/// Attribution is diagnostic only; it never participates in comparisons or
/// classification.
///
/// # Examples
///
/// ```
/// use app_error::Caller;
///
/// let caller = Caller::capture();
/// assert!(caller.file().ends_with(".rs"));
/// assert!(caller.line() > 0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Caller(&'static Location<'static>);

impl Caller {
    /// Captures the location of the calling expression.
    #[track_caller]
    #[inline]
    #[must_use]
    pub fn capture() -> Self {
        Self(Location::caller())
    }

    /// Source file of the call site.
    #[inline]
    #[must_use]
    pub fn file(self) -> &'static str {
        self.0.file()
    }

    /// Line number of the call site.
    #[inline]
    #[must_use]
    pub fn line(self) -> u32 {
        self.0.line()
    }
}

impl fmt::Display for Caller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.0.file(), self.0.line())
    }
}

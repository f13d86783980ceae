//! Mapping arbitrary errors to external responses.

use std::error::Error as StdError;

use crate::types::{as_app_error, AppError, StatusCode};

/// Status and message pair shown to an external caller.
///
/// Only the outermost message and status of a classified error are exposed;
/// the causal chain stays inside the process. Foreign errors default to a
/// 500-class response.
///
/// # Examples
///
/// ```
/// use app_error::{AppError, ErrorResponse, StatusCode};
///
/// let err = AppError::new("user not found", StatusCode::NotFound);
/// let response = ErrorResponse::from_error(&err);
///
/// assert_eq!(response.status(), 404);
/// assert_eq!(response.message(), "user not found");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ErrorResponse {
    status: u16,
    message: String,
}

impl ErrorResponse {
    /// Builds the response for any error value.
    ///
    /// Classified errors contribute their own status and message; anything
    /// else is reported as an internal server error with its display text.
    #[must_use]
    pub fn from_error(err: &(dyn StdError + 'static)) -> Self {
        match as_app_error(err) {
            Some(app) => Self {
                status: app.status().as_u16(),
                message: app.message().to_owned(),
            },
            None => Self {
                status: StatusCode::InternalServerError.as_u16(),
                message: err.to_string(),
            },
        }
    }

    /// Numeric status for the response line.
    #[inline]
    #[must_use]
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Body message for the caller.
    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<&AppError> for ErrorResponse {
    fn from(err: &AppError) -> Self {
        Self { status: err.status().as_u16(), message: err.message().to_owned() }
    }
}

use std::io;

use app_error::traits::TransientError;
use app_error::{AppError, StatusCode};

#[test]
fn transient_statuses_classify_as_transient() {
    for status in [
        StatusCode::RequestTimeout,
        StatusCode::TooManyRequests,
        StatusCode::BadGateway,
        StatusCode::ServiceUnavailable,
        StatusCode::GatewayTimeout,
    ] {
        let err = AppError::new("temporary", status);
        assert!(err.is_transient(), "{status} should be transient");
        assert!(!err.is_permanent());
    }
}

#[test]
fn other_statuses_classify_as_permanent() {
    for status in [
        StatusCode::BadRequest,
        StatusCode::Unauthorized,
        StatusCode::NotFound,
        StatusCode::Conflict,
        StatusCode::InternalServerError,
        StatusCode::NotImplemented,
    ] {
        let err = AppError::new("permanent", status);
        assert!(err.is_permanent(), "{status} should be permanent");
    }
}

#[test]
fn classification_ignores_the_cause_chain() {
    // A transient inner failure does not make the outer wrap transient.
    let inner = AppError::new("upstream busy", StatusCode::ServiceUnavailable);
    let outer = AppError::wrap("request rejected", StatusCode::BadRequest, inner);

    assert!(outer.is_permanent());
}

#[test]
fn no_retry_hint_by_default() {
    let err = AppError::new("throttled", StatusCode::TooManyRequests);
    assert!(err.retry_after_hint().is_none());
}

#[test]
fn io_errors_classify_by_kind() {
    let refused = io::Error::new(io::ErrorKind::ConnectionRefused, "refused");
    assert!(refused.is_transient());

    let timed_out = io::Error::new(io::ErrorKind::TimedOut, "slow");
    assert!(timed_out.is_transient());

    let missing = io::Error::new(io::ErrorKind::NotFound, "gone");
    assert!(missing.is_permanent());
}

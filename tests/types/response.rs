use std::io;

use app_error::{AppError, ErrorResponse, StatusCode};

#[test]
fn classified_errors_map_to_their_own_status() {
    let err = AppError::new("user not found", StatusCode::NotFound);
    let response = ErrorResponse::from_error(&err);

    assert_eq!(response.status(), 404);
    assert_eq!(response.message(), "user not found");
}

#[test]
fn opaque_errors_default_to_internal_server_error() {
    let err = io::Error::other("disk full");
    let response = ErrorResponse::from_error(&err);

    assert_eq!(response.status(), 500);
    assert_eq!(response.message(), "disk full");
}

#[test]
fn only_the_outermost_layer_is_exposed() {
    let root = io::Error::other("password check failed");
    let wrapped = AppError::wrap("login failed", StatusCode::Unauthorized, root);
    let response = ErrorResponse::from_error(&wrapped);

    assert_eq!(response.status(), 401);
    assert_eq!(response.message(), "login failed");
    assert!(!response.message().contains("password"));
}

#[test]
fn from_ref_matches_from_error() {
    let err = AppError::new("conflict", StatusCode::Conflict);

    assert_eq!(ErrorResponse::from(&err), ErrorResponse::from_error(&err));
}

#[cfg(feature = "serde")]
#[test]
fn serializes_status_and_message() {
    let err = AppError::new("missing", StatusCode::NotFound);
    let json = serde_json::to_value(ErrorResponse::from_error(&err)).unwrap();

    assert_eq!(json, serde_json::json!({ "status": 404, "message": "missing" }));
}

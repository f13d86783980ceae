use app_error::{app_err, ensure, raise, AppResult, StatusCode};

#[test]
fn app_err_formats_the_message() {
    let id = 7;
    let err = app_err!(StatusCode::NotFound, "user {id} not found");

    assert_eq!(err.message(), "user 7 not found");
    assert_eq!(err.status(), StatusCode::NotFound);
    assert!(err.cause().is_none());
}

#[test]
fn raise_returns_early() {
    fn reject() -> AppResult<i32> {
        raise!(StatusCode::Forbidden, "admin role required");
    }

    let err = reject().unwrap_err();
    assert_eq!(err.status(), StatusCode::Forbidden);
    assert_eq!(err.message(), "admin role required");
}

#[test]
fn ensure_passes_when_the_condition_holds() {
    fn guard(amount: i64) -> AppResult<i64> {
        ensure!(amount > 0, StatusCode::BadRequest, "amount must be positive, got {amount}");
        Ok(amount)
    }

    assert_eq!(guard(10).unwrap(), 10);

    let err = guard(-3).unwrap_err();
    assert_eq!(err.status(), StatusCode::BadRequest);
    assert_eq!(err.message(), "amount must be positive, got -3");
}

#[test]
fn macro_errors_are_attributed_to_the_invocation() {
    let err = app_err!(StatusCode::Conflict, "already exists");
    assert!(err.caller().file().contains("tests"));
}

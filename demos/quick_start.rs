//! Build a classified error at each layer, then see what the logs and the
//! wire response each get to see.
//!
//! Run with: `cargo run --example quick_start`

use std::io;

use app_error::prelude::*;

fn connect() -> Result<(), io::Error> {
    Err(io::Error::other("connection refused"))
}

fn load_account(id: u64) -> AppResult<()> {
    connect().wrap_err_with(StatusCode::InternalServerError, || {
        format!("loading account {id}")
    })
}

fn handle_request() -> AppResult<()> {
    load_account(42).wrap_err("account lookup failed", StatusCode::NotFound)
}

fn main() {
    let err = match handle_request() {
        Ok(()) => return,
        Err(err) => err,
    };

    // What the logs see: the full chain with attribution.
    println!("{}", err.error_stack());
    println!();

    // What the caller sees: outermost message and status only.
    let response = ErrorResponse::from_error(&err);
    println!("HTTP {} -> {:?}", response.status(), response.message());
}

//! Preflight answer for the message routes.
//!
//! Allows any origin. Fine for a demo, NOT for production.

use lambda_http::{http, Body, Response};

pub const ALLOW_HEADERS: &str =
    "Content-Type,X-Amz-Date,Authorization,X-Api-Key,X-Amz-Security-Token,X-Amz-User-Agent";
pub const ALLOW_METHODS: &str = "OPTIONS,GET,PUT,POST,DELETE";

pub fn preflight() -> Result<Response<Body>, http::Error> {
    Response::builder()
        .status(200)
        .header("Access-Control-Allow-Headers", ALLOW_HEADERS)
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Credentials", "false")
        .header("Access-Control-Allow-Methods", ALLOW_METHODS)
        .body(Body::Empty)
}

use lambda_http::{tracing, Body, Error, Request, Response};

/// Liveness probe. Answers every invocation.
pub(crate) async fn function_handler(event: Request) -> Result<Response<Body>, Error> {
    tracing::info!(method = %event.method(), path = event.uri().path(), "received request");

    Ok(Response::builder()
        .status(200)
        .body(Body::Text("OK!".to_string()))?)
}

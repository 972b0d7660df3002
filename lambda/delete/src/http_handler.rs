use lambda_http::{tracing, Body, Error, Request, RequestExt, Response};
use shared::{cors, AccessGate, ErrorResponse, MessageStore};

pub(crate) async fn function_handler<S, G>(
    store: &S,
    gate: &G,
    event: Request,
) -> Result<Response<Body>, Error>
where
    S: MessageStore + ?Sized,
    G: AccessGate + ?Sized,
{
    let path = event.uri().path();
    let method = event.method().as_str();
    let params = event.path_parameters();
    tracing::info!(method, path, "received request");

    match (method, path) {
        ("OPTIONS", _) => Ok(cors::preflight()?),
        ("DELETE", p) if p.starts_with("/messages/") => {
            if !gate.should_process_event(&event) {
                return Ok(Response::builder()
                    .status(400)
                    .body(Body::Text("Not so fast!".to_string()))?);
            }

            let message_id = match params.first("messageId") {
                Some(id) if !id.is_empty() => id,
                _ => {
                    return Ok(Response::builder().status(400).body(Body::Text(
                        "Error: You are missing the path parameter messageId".to_string(),
                    ))?)
                }
            };

            match store.delete(message_id).await {
                Ok(()) => {
                    tracing::info!(message_id, "item deleted");
                    Ok(Response::builder().status(200).body(Body::Empty)?)
                }
                Err(e) => {
                    tracing::error!(error = &e as &(dyn std::error::Error + 'static), "delete failed");
                    let body = serde_json::to_string(&ErrorResponse {
                        error: e.to_string(),
                    })?;
                    Ok(Response::builder()
                        .status(500)
                        .header("content-type", "application/json")
                        .body(Body::Text(body))?)
                }
            }
        }
        _ => Ok(Response::builder()
            .status(404)
            .body(Body::Text("Not found".to_string()))?),
    }
}

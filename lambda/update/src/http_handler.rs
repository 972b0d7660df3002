use lambda_http::{tracing, Body, Error, Request, Response};
use shared::{cors, AccessGate, MessageStore, UpdateMessageInput};

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
    tracing::info!(method, path, "received request");

    match (method, path) {
        ("OPTIONS", _) => Ok(cors::preflight()?),
        ("PUT", "/messages") => {
            if !gate.should_process_event(&event) {
                return Ok(Response::builder()
                    .status(400)
                    .body(Body::Text("Not so fast!".to_string()))?);
            }

            let body = event.body();
            if body.is_empty() {
                return Ok(Response::builder()
                    .status(400)
                    .body(Body::Text("invalid request, missing body".to_string()))?);
            }

            let input: UpdateMessageInput = match serde_json::from_slice(body.as_ref()) {
                Ok(input) => input,
                Err(e) => {
                    return Ok(Response::builder()
                        .status(400)
                        .body(Body::Text(format!("Invalid JSON: {}", e)))?)
                }
            };

            let record = match input.into_record() {
                Some(record) => record,
                None => {
                    return Ok(Response::builder()
                        .status(400)
                        .body(Body::Text("invalid request body".to_string()))?)
                }
            };

            // Upsert: an unknown id is created, not reported as missing.
            match store
                .update_message(&record.message_id, &record.message)
                .await
            {
                Ok(()) => {
                    tracing::info!(message_id = %record.message_id, "item updated");
                    Ok(Response::builder().status(204).body(Body::Empty)?)
                }
                Err(e) => {
                    tracing::error!(error = &e as &(dyn std::error::Error + 'static), "update failed");
                    Ok(Response::builder()
                        .status(500)
                        .body(Body::Text(e.to_string()))?)
                }
            }
        }
        _ => Ok(Response::builder()
            .status(404)
            .body(Body::Text("Not found".to_string()))?),
    }
}

use lambda_http::{tracing, Body, Error, Request, Response};
use shared::{cors, CreateMessageInput, MessageStore};

pub(crate) async fn function_handler<S: MessageStore + ?Sized>(
    store: &S,
    event: Request,
) -> Result<Response<Body>, Error> {
    let path = event.uri().path();
    let method = event.method().as_str();
    tracing::info!(method, path, "received request");

    match (method, path) {
        ("OPTIONS", _) => Ok(cors::preflight()?),
        ("POST", "/messages") => {
            let body = event.body();
            if body.is_empty() {
                return Ok(Response::builder().status(400).body(Body::Text(
                    "invalid request, you are missing the parameter body".to_string(),
                ))?);
            }

            let input: CreateMessageInput = match serde_json::from_slice(body.as_ref()) {
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
                        .body(Body::Text("Missing message from body".to_string()))?)
                }
            };

            match store.put(&record).await {
                Ok(()) => {
                    tracing::info!(message_id = %record.message_id, "item put");
                    Ok(Response::builder()
                        .status(200)
                        .body(Body::Text("Successfully added entry to the table".to_string()))?)
                }
                Err(e) => {
                    tracing::error!(error = &e as &(dyn std::error::Error + 'static), "put failed");
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

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use shared::{InMemoryMessageStore, MessageRecord};

    fn post(body: Body) -> Request {
        lambda_http::http::Request::builder()
            .method("POST")
            .uri("/messages")
            .body(body)
            .unwrap()
    }

    fn text(response: &Response<Body>) -> &str {
        match response.body() {
            Body::Text(t) => t.as_str(),
            Body::Empty => "",
            Body::Binary(_) => panic!("unexpected binary body"),
        }
    }

    #[tokio::test]
    async fn generates_id_when_absent() {
        let store = InMemoryMessageStore::new();
        let response = function_handler(&store, post(Body::from(r#"{"Message":"hello"}"#)))
            .await
            .unwrap();

        assert_eq!(response.status(), 200);
        assert_eq!(text(&response), "Successfully added entry to the table");
        let records = store.records();
        assert_eq!(records.len(), 1);
        assert!(!records[0].message_id.is_empty());
        assert_eq!(records[0].message, "hello");
    }

    #[tokio::test]
    async fn same_id_twice_overwrites() {
        let store = InMemoryMessageStore::new();
        for message in ["hello", "hi"] {
            let body = format!(r#"{{"MessageId":"m1","Message":"{}"}}"#, message);
            let response = function_handler(&store, post(Body::from(body))).await.unwrap();
            assert_eq!(response.status(), 200);
        }

        assert_eq!(store.records(), vec![MessageRecord::new("m1", "hi")]);
    }

    #[tokio::test]
    async fn missing_body_is_rejected_without_store_call() {
        let store = InMemoryMessageStore::new();
        let response = function_handler(&store, post(Body::Empty)).await.unwrap();

        assert_eq!(response.status(), 400);
        assert_eq!(
            text(&response),
            "invalid request, you are missing the parameter body"
        );
        assert_eq!(store.calls(), 0);
    }

    #[tokio::test]
    async fn malformed_body_is_rejected() {
        let store = InMemoryMessageStore::new();
        for body in ["not json", "[1,2]", "\"hello\""] {
            let response = function_handler(&store, post(Body::from(body))).await.unwrap();
            assert_eq!(response.status(), 400, "body {body}");
            assert!(text(&response).starts_with("Invalid JSON"));
        }
        assert_eq!(store.calls(), 0);
    }

    #[tokio::test]
    async fn missing_message_is_rejected() {
        let store = InMemoryMessageStore::new();
        for body in [r#"{"MessageId":"m1"}"#, r#"{"Message":""}"#] {
            let response = function_handler(&store, post(Body::from(body))).await.unwrap();
            assert_eq!(response.status(), 400);
            assert_eq!(text(&response), "Missing message from body");
        }
        assert_eq!(store.calls(), 0);
    }

    #[tokio::test]
    async fn store_failure_is_500_with_detail() {
        let store = InMemoryMessageStore::failing();
        let response = function_handler(&store, post(Body::from(r#"{"Message":"hello"}"#)))
            .await
            .unwrap();

        assert_eq!(response.status(), 500);
        assert!(text(&response).contains("ProvisionedThroughputExceededException"));
    }

    #[tokio::test]
    async fn options_returns_preflight() {
        let store = InMemoryMessageStore::new();
        let request = lambda_http::http::Request::builder()
            .method("OPTIONS")
            .uri("/messages")
            .body(Body::Empty)
            .unwrap();
        let response = function_handler(&store, request).await.unwrap();

        assert_eq!(response.status(), 200);
        assert_eq!(response.headers()["Access-Control-Allow-Origin"], "*");
    }

    #[tokio::test]
    async fn unknown_route_is_404() {
        let store = InMemoryMessageStore::new();
        let request = lambda_http::http::Request::builder()
            .method("GET")
            .uri("/messages")
            .body(Body::Empty)
            .unwrap();
        let response = function_handler(&store, request).await.unwrap();
        assert_eq!(response.status(), 404);
    }

    fn block_on<F: std::future::Future>(future: F) -> F::Output {
        tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap()
            .block_on(future)
    }

    proptest! {
        #[test]
        fn prop_created_message_reads_back(
            id in "\\PC{1,36}",
            message in "\\PC{1,64}",
        ) {
            let store = InMemoryMessageStore::new();
            let body = serde_json::json!({ "MessageId": id, "Message": message }).to_string();
            let (status, stored) = block_on(async {
                let response = function_handler(&store, post(Body::from(body))).await.unwrap();
                (response.status(), store.get(&id).await.unwrap())
            });

            prop_assert_eq!(status, 200);
            prop_assert_eq!(stored, Some(MessageRecord::new(&id, &message)));
        }
    }
}

use lambda_http::{run, service_fn, tracing, Error};
use shared::{Config, DynamoMessageStore, SharedSecretGate};
mod http_handler;
use http_handler::function_handler;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::init_default_subscriber();

    std::env::set_var("AWS_LAMBDA_HTTP_IGNORE_STAGE_IN_PATH", "true");

    let config = Config::from_env()?;
    if config.validation_key.is_none() {
        tracing::warn!("POOR_MANS_API_KEY not set, every request will be rejected");
    }
    let gate = SharedSecretGate::new(config.validation_key.clone());

    let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let client = aws_sdk_dynamodb::Client::new(&aws_config);
    let store = DynamoMessageStore::from_config(client, &config);

    run(service_fn(|event| function_handler(&store, &gate, event))).await
}

use hermes::{lambda_service, telemetry};
use lambda_runtime::Error;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Error> {
    telemetry::init_tracing();
    info!("Starting datasets handler");

    lambda_service::run_datasets().await
}

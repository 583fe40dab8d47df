use hermes::{domain::models::Campaign, lambda_service, telemetry};
use lambda_runtime::Error;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Error> {
    telemetry::init_tracing();
    info!("Starting campaigns handler");

    lambda_service::run_crud::<Campaign>().await
}

use hermes::{domain::models::Notification, lambda_service, telemetry};
use lambda_runtime::Error;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Error> {
    telemetry::init_tracing();
    info!("Starting notifications handler");

    lambda_service::run_crud::<Notification>().await
}

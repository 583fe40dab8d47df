use tracing::{debug, info};
use crate::application::{ConnectionService, ResourceService};
use super::api::{
    api_response, empty_response, error_response, unhandled_method, ApiGatewayProxyRequest,
    ApiGatewayResponse, STATUS_CREATED, STATUS_OK,
};

/// Reserved dataset path id that runs the connection test instead of a create.
pub const TEST_CONNECTION: &str = "test-connection";

/// Maps the proxy event's method onto the resource operations.
pub async fn route<S: ResourceService>(
    service: &S,
    request: &ApiGatewayProxyRequest,
) -> ApiGatewayResponse {
    info!("{} {}", request.http_method, request.path.as_deref().unwrap_or("-"));

    match request.http_method.as_str() {
        "GET" => get(service, request).await,
        "POST" => match service.create(request.body()).await {
            Ok(record) => api_response(STATUS_CREATED, &record),
            Err(e) => error_response(&e),
        },
        "PUT" => match service.update(request.body()).await {
            Ok(record) => api_response(STATUS_OK, &record),
            Err(e) => error_response(&e),
        },
        "DELETE" => match service.delete(request.path_parameter("id")).await {
            Ok(()) => empty_response(),
            Err(e) => error_response(&e),
        },
        other => {
            debug!("Unsupported method {}", other);
            unhandled_method()
        }
    }
}

async fn get<S: ResourceService>(
    service: &S,
    request: &ApiGatewayProxyRequest,
) -> ApiGatewayResponse {
    let id = request.query_parameter("id");
    if !id.is_empty() {
        return match service.fetch(id).await {
            Ok(record) => api_response(STATUS_OK, &record),
            Err(e) => error_response(&e),
        };
    }

    match service.fetch_all().await {
        Ok(records) => api_response(STATUS_OK, &records),
        Err(e) => error_response(&e),
    }
}

/// Dataset routing: `POST .../test-connection` probes the credentials in the body, every
/// other request follows the regular resource mapping.
pub async fn route_datasets<S: ResourceService>(
    datasets: &S,
    connections: &ConnectionService,
    request: &ApiGatewayProxyRequest,
) -> ApiGatewayResponse {
    if request.http_method == "POST" && request.path_parameter("id") == TEST_CONNECTION {
        info!("Running dataset connection test");
        return match connections.ensure_connection(request.body()).await {
            Ok(()) => empty_response(),
            Err(e) => error_response(&e),
        };
    }

    route(datasets, request).await
}

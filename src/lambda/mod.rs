pub mod api;
pub mod router;

pub use api::{ApiGatewayProxyRequest, ApiGatewayResponse};
pub use router::{route, route_datasets};

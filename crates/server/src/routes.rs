use axum::{routing::get, Json, Router};
use sea_orm::DatabaseConnection;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::Level;

use common::types::Health;

use crate::openapi;

pub mod clients;
pub mod networks;

/// Shared handler state; the connection pool is cheap to clone.
#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
}

#[utoipa::path(
    get, path = "/health", tag = "health",
    responses((status = 200, description = "Service is up", body = crate::openapi::HealthResponse))
)]
pub async fn health() -> Json<Health> {
    Json(Health::healthy())
}

/// Build the full application router
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let client_routes = Router::new()
        .route("/clients", get(clients::list_clients).post(clients::create_client))
        .route(
            "/clients/:id",
            get(clients::get_client).put(clients::update_client).delete(clients::delete_client),
        );

    let network_routes = Router::new()
        .route("/networks", get(networks::list_networks).post(networks::create_network))
        .route(
            "/networks/:id",
            get(networks::get_network).put(networks::update_network).delete(networks::delete_network),
        );

    Router::new()
        .route("/health", get(health))
        .route("/openapi.json", get(openapi::openapi_json))
        .merge(client_routes)
        .merge(network_routes)
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        // 每次请求创建 span，包含方法和路径等，日志级别为 INFO
                        .make_span_with(
                            DefaultMakeSpan::new()
                                .level(Level::INFO)
                                .include_headers(false),
                        )
                        // 请求到达时打点
                        .on_request(
                            DefaultOnRequest::new()
                                .level(Level::INFO),
                        )
                        // 响应返回时打点，包含状态码与耗时
                        .on_response(
                            DefaultOnResponse::new()
                                .level(Level::INFO)
                                .include_headers(false),
                        )
                        // 失败（5xx 等）时以 ERROR 记录
                        .on_failure(
                            DefaultOnFailure::new()
                                .level(Level::ERROR),
                        ),
                )
                .layer(cors),
        )
}

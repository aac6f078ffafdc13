use axum::{extract::State, Json};
use models::network::{self, Model as Network};
use serde::Deserialize;
use service::{network_service, pagination::Pagination};
use utoipa::ToSchema;

use common::types::Message;

use crate::errors::ApiError;
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::routes::ServerState;

/// Body of `POST /networks` and `PUT /networks/{id}`. Omitting `ipv4` (or sending null) stores NULL.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct NetworkInput {
    #[serde(default)]
    pub ipv4: Option<String>,
}

#[utoipa::path(
    post, path = "/networks", tag = "networks",
    request_body = NetworkInput,
    responses(
        (status = 200, description = "Created", body = crate::openapi::NetworkDoc),
        (status = 400, description = "Network IPv4 already exists", body = crate::openapi::ErrorDetail),
        (status = 422, description = "Validation Error", body = crate::openapi::ErrorDetail)
    )
)]
pub async fn create_network(
    State(state): State<ServerState>,
    AppJson(input): AppJson<NetworkInput>,
) -> Result<Json<Network>, ApiError> {
    let created = network_service::create_network(&state.db, input.ipv4.as_deref()).await?;
    Ok(Json(created))
}

#[utoipa::path(
    get, path = "/networks", tag = "networks",
    params(
        ("skip" = Option<u64>, Query, description = "Rows to skip (default 0)"),
        ("limit" = Option<u64>, Query, description = "Maximum rows to return (default 100)")
    ),
    responses(
        (status = 200, description = "List OK", body = [crate::openapi::NetworkDoc]),
        (status = 422, description = "Validation Error", body = crate::openapi::ErrorDetail)
    )
)]
pub async fn list_networks(
    State(state): State<ServerState>,
    AppQuery(page): AppQuery<Pagination>,
) -> Result<Json<Vec<Network>>, ApiError> {
    Ok(Json(network_service::list_networks(&state.db, page).await?))
}

#[utoipa::path(
    get, path = "/networks/{id}", tag = "networks",
    params(("id" = i64, Path, description = "Network ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::NetworkDoc),
        (status = 404, description = "Network not found", body = crate::openapi::ErrorDetail),
        (status = 422, description = "Validation Error", body = crate::openapi::ErrorDetail)
    )
)]
pub async fn get_network(
    State(state): State<ServerState>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<Network>, ApiError> {
    network_service::get_network(&state.db, id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found(network::NOT_FOUND))
}

#[utoipa::path(
    put, path = "/networks/{id}", tag = "networks",
    params(("id" = i64, Path, description = "Network ID")),
    request_body = NetworkInput,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::NetworkDoc),
        (status = 400, description = "Network IPv4 already exists", body = crate::openapi::ErrorDetail),
        (status = 404, description = "Network not found", body = crate::openapi::ErrorDetail),
        (status = 422, description = "Validation Error", body = crate::openapi::ErrorDetail)
    )
)]
pub async fn update_network(
    State(state): State<ServerState>,
    AppPath(id): AppPath<i64>,
    AppJson(input): AppJson<NetworkInput>,
) -> Result<Json<Network>, ApiError> {
    network_service::update_network(&state.db, id, input.ipv4.as_deref())
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found(network::NOT_FOUND))
}

#[utoipa::path(
    delete, path = "/networks/{id}", tag = "networks",
    params(("id" = i64, Path, description = "Network ID")),
    responses(
        (status = 200, description = "Deleted", body = crate::openapi::MessageResponse),
        (status = 404, description = "Network not found", body = crate::openapi::ErrorDetail)
    )
)]
pub async fn delete_network(
    State(state): State<ServerState>,
    AppPath(id): AppPath<i64>,
) -> Result<Json<Message>, ApiError> {
    if network_service::delete_network(&state.db, id).await? {
        Ok(Json(Message::new("Network deleted successfully")))
    } else {
        Err(ApiError::not_found(network::NOT_FOUND))
    }
}

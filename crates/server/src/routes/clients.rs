use axum::{extract::State, Json};
use models::client::{self, Model as Client};
use serde::Deserialize;
use service::{client_service, pagination::Pagination};
use utoipa::ToSchema;

use common::types::Message;

use crate::errors::ApiError;
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::routes::ServerState;

/// Body of `POST /clients` and `PUT /clients/{id}`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ClientInput {
    pub name: String,
}

#[utoipa::path(
    post, path = "/clients", tag = "clients",
    request_body = ClientInput,
    responses(
        (status = 200, description = "Created", body = crate::openapi::ClientDoc),
        (status = 400, description = "Client name already exists", body = crate::openapi::ErrorDetail),
        (status = 422, description = "Validation Error", body = crate::openapi::ErrorDetail)
    )
)]
pub async fn create_client(
    State(state): State<ServerState>,
    AppJson(input): AppJson<ClientInput>,
) -> Result<Json<Client>, ApiError> {
    let created = client_service::create_client(&state.db, &input.name).await?;
    Ok(Json(created))
}

#[utoipa::path(
    get, path = "/clients", tag = "clients",
    params(
        ("skip" = Option<u64>, Query, description = "Rows to skip (default 0)"),
        ("limit" = Option<u64>, Query, description = "Maximum rows to return (default 100)")
    ),
    responses(
        (status = 200, description = "List OK", body = [crate::openapi::ClientDoc]),
        (status = 422, description = "Validation Error", body = crate::openapi::ErrorDetail)
    )
)]
pub async fn list_clients(
    State(state): State<ServerState>,
    AppQuery(page): AppQuery<Pagination>,
) -> Result<Json<Vec<Client>>, ApiError> {
    Ok(Json(client_service::list_clients(&state.db, page).await?))
}

#[utoipa::path(
    get, path = "/clients/{id}", tag = "clients",
    params(("id" = String, Path, description = "Client ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::ClientDoc),
        (status = 404, description = "Client not found", body = crate::openapi::ErrorDetail)
    )
)]
pub async fn get_client(
    State(state): State<ServerState>,
    AppPath(id): AppPath<String>,
) -> Result<Json<Client>, ApiError> {
    client_service::get_client(&state.db, &id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found(client::NOT_FOUND))
}

#[utoipa::path(
    put, path = "/clients/{id}", tag = "clients",
    params(("id" = String, Path, description = "Client ID")),
    request_body = ClientInput,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::ClientDoc),
        (status = 400, description = "Client name already exists", body = crate::openapi::ErrorDetail),
        (status = 404, description = "Client not found", body = crate::openapi::ErrorDetail),
        (status = 422, description = "Validation Error", body = crate::openapi::ErrorDetail)
    )
)]
pub async fn update_client(
    State(state): State<ServerState>,
    AppPath(id): AppPath<String>,
    AppJson(input): AppJson<ClientInput>,
) -> Result<Json<Client>, ApiError> {
    client_service::update_client(&state.db, &id, &input.name)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found(client::NOT_FOUND))
}

#[utoipa::path(
    delete, path = "/clients/{id}", tag = "clients",
    params(("id" = String, Path, description = "Client ID")),
    responses(
        (status = 200, description = "Deleted", body = crate::openapi::MessageResponse),
        (status = 404, description = "Client not found", body = crate::openapi::ErrorDetail)
    )
)]
pub async fn delete_client(
    State(state): State<ServerState>,
    AppPath(id): AppPath<String>,
) -> Result<Json<Message>, ApiError> {
    if client_service::delete_client(&state.db, &id).await? {
        Ok(Json(Message::new("Client deleted successfully")))
    } else {
        Err(ApiError::not_found(client::NOT_FOUND))
    }
}

use axum::Json;
use once_cell::sync::Lazy;
use utoipa::OpenApi;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::routes::{clients::ClientInput, networks::NetworkInput};

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct ClientDoc { pub id: Uuid, pub name: String }

#[derive(ToSchema)]
pub struct NetworkDoc { pub id: i32, pub ipv4: Option<String> }

#[derive(ToSchema)]
pub struct MessageResponse { pub message: String }

#[derive(ToSchema)]
pub struct ErrorDetail { pub detail: String }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::clients::create_client,
        crate::routes::clients::list_clients,
        crate::routes::clients::get_client,
        crate::routes::clients::update_client,
        crate::routes::clients::delete_client,
        crate::routes::networks::create_network,
        crate::routes::networks::list_networks,
        crate::routes::networks::get_network,
        crate::routes::networks::update_network,
        crate::routes::networks::delete_network,
    ),
    components(
        schemas(
            HealthResponse,
            ClientDoc,
            NetworkDoc,
            MessageResponse,
            ErrorDetail,
            ClientInput,
            NetworkInput,
        )
    ),
    tags(
        (name = "health"),
        (name = "clients"),
        (name = "networks")
    )
)]
pub struct ApiDoc;

static OPENAPI: Lazy<utoipa::openapi::OpenApi> = Lazy::new(ApiDoc::openapi);

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(OPENAPI.clone())
}

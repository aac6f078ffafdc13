use std::net::SocketAddr;

use axum::http::HeaderValue;
use axum::Router;
use configs::{AppConfig, CorsConfig, ServerConfig};
use dotenvy::dotenv;
use migration::MigratorTrait;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::{error, info, warn};

use crate::routes::{self, ServerState};

/// Permissive unless specific origins are configured.
pub fn build_cors(cfg: &CorsConfig) -> anyhow::Result<CorsLayer> {
    if cfg.is_permissive() {
        return Ok(CorsLayer::very_permissive());
    }
    let origins = cfg
        .allowed_origins
        .iter()
        .map(|o| HeaderValue::from_str(o.trim()))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any))
}

fn bind_addr(cfg: &ServerConfig) -> anyhow::Result<SocketAddr> {
    Ok(format!("{}:{}", cfg.host, cfg.port).parse()?)
}

/// Connect to the database, migrate if enabled, and assemble the router.
pub async fn build_app(cfg: &AppConfig) -> anyhow::Result<Router> {
    let db = models::db::connect_with_config(&cfg.database).await?;
    if cfg.database.auto_migrate {
        migration::Migrator::up(&db, None).await?;
        info!("database migrations applied");
    }
    let cors = build_cors(&cfg.cors)?;
    Ok(routes::build_router(ServerState { db }, cors))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    info!("received Ctrl+C, shutting down");
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    let cfg = match AppConfig::load_and_validate() {
        Ok(cfg) => cfg,
        Err(e) => {
            // 配置文件存在但无效时拒绝启动
            common::utils::logging::init_logging_default();
            error!(error = %e, "invalid configuration");
            return Err(e);
        }
    };
    common::utils::logging::init_logging(cfg.logging.json);

    let app = build_app(&cfg).await?;

    // Bind and serve
    let addr = bind_addr(&cfg.server)?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "http server listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

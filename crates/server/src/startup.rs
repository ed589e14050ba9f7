use axum::http::HeaderValue;
use axum::Router;
use configs::{AppConfig, CorsConfig, LoadedConfig};
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tracing::{info, warn};

use crate::errors::StartupError;
use crate::routes;
use crate::state::AppState;

/// Load `config.toml` (or `CONFIG_PATH`), overlay env vars and validate.
///
/// The file load error, if any, is handed back so the caller can log it once logging is up.
pub fn load_config() -> anyhow::Result<LoadedConfig> {
    AppConfig::load_and_validate()
}

/// CORS restricted to the configured origins; methods and headers mirror the preflight,
/// which is the credential-compatible way to allow all of them.
pub fn build_cors(cfg: &CorsConfig) -> Result<CorsLayer, StartupError> {
    let origins = cfg
        .allowed_origins
        .iter()
        .map(|o| {
            HeaderValue::from_str(o)
                .map_err(|_| StartupError::InvalidConfig(format!("cors origin {o:?} is not a valid header value")))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(cfg.allow_credentials))
}

pub fn build_app(cfg: &AppConfig, state: AppState) -> Result<Router, StartupError> {
    let cors = build_cors(&cfg.cors)?;
    Ok(routes::build_router(state, cors))
}

/// Bind and serve until Ctrl+C.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let app = build_app(&cfg, AppState::in_memory())?;

    let listener = TcpListener::bind(cfg.server.bind_addr()).await?;
    let addr = listener.local_addr()?;
    info!(%addr, origins = ?cfg.cors.allowed_origins, "starting blog server");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!(event = "shutdown_signal", "received Ctrl+C, draining connections"),
        Err(e) => {
            warn!(error = %e, "cannot listen for Ctrl+C; serving until the process is killed");
            std::future::pending::<()>().await
        }
    }
}

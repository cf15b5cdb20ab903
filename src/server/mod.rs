//! Info server
//!
//! Serves `GET /info` with the server's version as `{"version": "..."}`.
//! Other methods on `/info` get 405 Method Not Allowed.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::config::ServerConfig;
use crate::version::types::ServerInfo;

struct InfoState {
    version: String,
}

/// Build the router serving the `/info` endpoint
pub fn router(version: &str) -> Router {
    let state = Arc::new(InfoState {
        version: version.to_string(),
    });

    Router::new()
        .route("/info", get(info_handler))
        .with_state(state)
}

async fn info_handler(State(state): State<Arc<InfoState>>) -> Json<ServerInfo> {
    debug!("Serving version {}", state.version);
    Json(ServerInfo::new(state.version.as_str()))
}

/// Bind to the configured port and serve until `shutdown` fires
pub async fn run_server(config: ServerConfig, shutdown: CancellationToken) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr).await?;
    serve(listener, &config.version, shutdown).await
}

/// Serve on an already bound listener until `shutdown` fires
pub async fn serve(
    listener: TcpListener,
    version: &str,
    shutdown: CancellationToken,
) -> std::io::Result<()> {
    info!(
        "Server starting on {} reporting version {}",
        listener.local_addr()?,
        version
    );

    axum::serve(listener, router(version))
        .with_graceful_shutdown(async move { shutdown.cancelled().await })
        .await?;

    info!("Server stopped");
    Ok(())
}

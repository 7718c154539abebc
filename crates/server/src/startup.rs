use std::{future::Future, net::SocketAddr};

use axum::Router;
use configs::AppConfig;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::routes;
use crate::state::AppState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Resolve the listen address from the loaded config.
fn bind_addr(cfg: &AppConfig) -> anyhow::Result<SocketAddr> {
    Ok(cfg.server.bind_addr().parse()?)
}

/// Resolves when Ctrl+C is received.
pub async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!(service = "server", event = "shutdown_signal", "received Ctrl+C, draining connections");
    }
}

/// Build the app from `cfg` and serve it until `shutdown` resolves.
pub async fn serve<F>(cfg: AppConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    // 两个集合在此创建，随进程退出释放
    let state = AppState::in_memory(cfg.store.rename_policy);
    let app: Router = routes::build_router(state, build_cors());

    let addr = bind_addr(&cfg)?;
    info!(%addr, rename_policy = ?cfg.store.rename_policy, "starting todo store server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).with_graceful_shutdown(shutdown).await?;
    Ok(())
}

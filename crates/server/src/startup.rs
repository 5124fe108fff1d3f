use std::{future::Future, net::SocketAddr, sync::Arc};

use axum::Router;
use configs::{AppConfig, ServerConfig};
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::routes::{self, ServerState};
use service::{
    runtime,
    vehicle::{repo::seaorm::SeaOrmVehicleStore, VehicleService, VehicleStore},
};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

fn bind_addr(server: &ServerConfig) -> anyhow::Result<SocketAddr> {
    Ok(format!("{}:{}", server.host, server.port).parse()?)
}

/// Connect the configured database and wire the vehicle service over it.
pub async fn build_state(cfg: &AppConfig) -> anyhow::Result<ServerState> {
    let db = runtime::prepare_database(&cfg.database).await?;
    let store: Arc<dyn VehicleStore> = Arc::new(SeaOrmVehicleStore::new(db));
    Ok(ServerState::new(VehicleService::with_mode(store, cfg.service.update_mode)))
}

/// Router for an already-built state, with the default CORS policy.
pub fn build_app(state: ServerState) -> Router {
    routes::build_router(state, build_cors())
}

/// Serve the catalog described by `cfg` until `shutdown` resolves.
/// Logging and `.env` loading are the caller's job.
pub async fn run<F>(cfg: AppConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let state = build_state(&cfg).await?;
    let app = build_app(state);

    let addr = bind_addr(&cfg.server)?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(
        %addr,
        sqlite = cfg.database.is_sqlite(),
        in_memory = cfg.database.is_in_memory(),
        update_mode = ?cfg.service.update_mode,
        "vehicle catalog listening"
    );
    axum::serve(listener, app).with_graceful_shutdown(shutdown).await?;
    info!("http server drained");
    Ok(())
}

use std::{future::Future, sync::Arc};

use axum::Router;
use configs::{AppConfig, StoreBackend, StoreConfig};
use service::{KvStore, MemoryKvStore, RedisKvStore};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::routes;
use crate::state::AppState;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Construct the store selected by configuration. Called once per process.
pub async fn connect_store(cfg: &StoreConfig) -> anyhow::Result<Arc<dyn KvStore>> {
    let store: Arc<dyn KvStore> = match cfg.backend {
        StoreBackend::Redis => Arc::new(RedisKvStore::connect(&cfg.url).await?),
        StoreBackend::Memory => {
            warn!(backend = "memory", "using in-process store; data is lost on exit");
            Arc::new(MemoryKvStore::new())
        }
    };
    Ok(store)
}

pub fn build_app(store: Arc<dyn KvStore>) -> Router {
    routes::build_router(AppState::new(store), build_cors())
}

/// Serve on `listener` until `shutdown` resolves, then release the store.
pub async fn serve<F>(listener: TcpListener, store: Arc<dyn KvStore>, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = build_app(Arc::clone(&store));
    // `serve` consumes the router, so once it returns `store` is the last handle.
    let served = axum::serve(listener, app).with_graceful_shutdown(shutdown).await;
    store.close().await;
    release_store(store);
    served?;
    Ok(())
}

/// Drop the store handle; returns whether it was the last one, i.e. whether
/// the underlying connections were actually freed.
fn release_store(store: Arc<dyn KvStore>) -> bool {
    let holders = Arc::strong_count(&store);
    drop(store);
    if holders == 1 {
        info!(event = "store_released", "key-value store released");
    } else {
        warn!(
            event = "store_release_deferred",
            handles = holders - 1,
            "key-value store still referenced; release deferred to its last holder"
        );
    }
    holders == 1
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "cannot listen for Ctrl+C; shutdown only on process exit");
        std::future::pending::<()>().await;
    }
    info!(event = "shutdown_signal", "received Ctrl+C, draining requests");
}

/// Public entry: connect the store, bind, and run until Ctrl+C.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let store = connect_store(&cfg.store).await?;

    let addr = cfg.bind_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!(%addr, backend = ?cfg.store.backend, "phone directory listening");

    serve(listener, store, shutdown_signal()).await
}

// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use nutri_node::config::NodeConfig;
use nutri_node::engine::Engine;
use nutri_node::server::{build_router, SharedEngine};
use nutri_node::telemetry::init_telemetry;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::Mutex;

#[tokio::main]
async fn main() {
    init_telemetry();

    let cfg = NodeConfig::from_env();
    tracing::info!("Initializing nutri node with config: {:?}", cfg);

    let engine = match Engine::open(&cfg) {
        Ok(engine) => engine,
        Err(e) => {
            tracing::error!("Failed to load data from {:?}: {}", cfg.data_dir, e);
            panic!("Failed to load data");
        }
    };
    tracing::info!("Data directory: {:?}", engine.data_dir());

    let shared_state: SharedEngine = Arc::new(Mutex::new(engine));
    let app = build_router(shared_state, &cfg);

    let addr = cfg.bind_addr;
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind {}: {}", addr, e);
            panic!("Failed to bind {}", addr);
        }
    };
    tracing::info!("Listening on {}", addr);

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!("Server error: {}", e);
    }
    tracing::info!("Shut down");
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}

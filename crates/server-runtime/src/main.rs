//! # FoodBridge Server Runtime
//!
//! Process entry point: loads configuration, initializes telemetry, wires
//! the subsystems together, and serves the HTTP gateway.
//!
//! ## Startup Sequence
//!
//! 1. Initialize telemetry (structured logging)
//! 2. Load and validate configuration; refuse the placeholder HMAC secret
//! 3. Open the shared store handles (one per process, injected everywhere)
//! 4. Start the orphan-reconciliation sweep, if enabled
//! 5. Serve the gateway until shutdown is signalled

mod config;

use anyhow::{Context, Result};
use config::RuntimeConfig;
use fb_api_gateway::{build_router, AppState};
use fb_food_store::MemoryFoodStore;
use fb_identity::HmacTokenGate;
use fb_request_store::MemoryRequestStore;
use fb_telemetry::{init_telemetry, TelemetryConfig};
use fb_workflow::{WorkflowApi, WorkflowService};
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    init_telemetry(&TelemetryConfig::from_env()).context("telemetry init failed")?;

    let config = RuntimeConfig::from_env().context("configuration load failed")?;
    config
        .gateway
        .validate()
        .context("gateway configuration invalid")?;

    // One shared handle per store for the process lifetime; every subsystem
    // receives it at construction.
    let foods = Arc::new(MemoryFoodStore::new());
    let requests = Arc::new(MemoryRequestStore::new());
    let workflow = Arc::new(WorkflowService::new(Arc::clone(&foods), requests));
    let identity = Arc::new(HmacTokenGate::new(config.hmac_secret.clone().into_bytes()));

    if config.reconcile_interval_secs > 0 {
        spawn_reconcile_sweep(
            Arc::clone(&workflow) as Arc<dyn WorkflowApi>,
            Duration::from_secs(config.reconcile_interval_secs),
        );
    } else {
        warn!("orphan-reconciliation sweep disabled");
    }

    let state = AppState {
        foods,
        workflow,
        identity,
    };
    let app = build_router(state, &config.gateway);

    let listener = tokio::net::TcpListener::bind(config.gateway.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.gateway.bind_addr))?;
    info!(addr = %config.gateway.bind_addr, "gateway listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("shutdown complete");
    Ok(())
}

/// Periodically detect items stuck `Requested` with no matching request
/// record (the inconsistency window between the two workflow writes).
fn spawn_reconcile_sweep(workflow: Arc<dyn WorkflowApi>, period: Duration) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        interval.tick().await; // first tick fires immediately
        loop {
            interval.tick().await;
            match workflow.reconcile_orphans().await {
                Ok(orphans) if orphans.is_empty() => {}
                Ok(orphans) => {
                    for id in orphans {
                        warn!(food_id = %id, "orphaned requested item detected");
                    }
                }
                Err(err) => error!(%err, "reconciliation sweep failed"),
            }
        }
    });
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!(%err, "failed to listen for shutdown signal");
        return;
    }
    info!("shutdown signal received");
}

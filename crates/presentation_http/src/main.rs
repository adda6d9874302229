//! AgriAI HTTP Server
//!
//! Main entry point for the HTTP API server.

use std::time::Duration;

use infrastructure::{
    AppConfig, LogFormat, image_model_or_unavailable, init_telemetry,
    tabular_model_or_unavailable,
};
use presentation_http::{
    AppState, cors_layer, routes, set_expose_internal_errors,
    shutdown::{self, Drain},
};
use tokio::{net::TcpListener, signal, sync::watch};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (config, load_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    let log_format = config
        .server
        .log_format
        .parse::<LogFormat>()
        .unwrap_or_default();
    init_telemetry(&config.telemetry.log_filter, log_format)?;

    if let Some(e) = load_error {
        warn!("Failed to load config, using defaults: {}", e);
    }

    info!("🌱 AgriAI v{} starting...", env!("CARGO_PKG_VERSION"));
    info!(
        environment = ?config.environment,
        crop_model = %config.models.crop.path.display(),
        fertilizer_model = %config.models.fertilizer.path.display(),
        plant_model = %config.models.plant.path.display(),
        "Configuration loaded"
    );

    set_expose_internal_errors(!config.is_production());

    let crop_model = tabular_model_or_unavailable("crop", &config.models.crop);
    let fertilizer_model = tabular_model_or_unavailable("fertilizer", &config.models.fertilizer);
    let plant_model = image_model_or_unavailable("plant", &config.models.plant);

    let addr = config.server.bind_address();
    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_secs.unwrap_or(30));
    let cors = config.server.cors_enabled.then(|| cors_layer(&config.server));

    let state = AppState::new(crop_model, fertilizer_model, plant_model, config);

    let mut app = routes::create_router(state).layer(TraceLayer::new_for_http());
    if let Some(cors) = cors {
        app = app.layer(cors);
    }

    info!("🚀 Server listening on http://{}", addr);
    info!("📚 API docs at http://{}/swagger-ui", addr);

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        shutdown_signal().await;
        let _ = shutdown_tx.send(true);
    });

    let listener = TcpListener::bind(&addr).await?;
    let server = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown::triggered(shutdown_rx.clone()));

    match shutdown::drain_with_timeout(server, shutdown_rx, shutdown_timeout).await? {
        Drain::Completed => info!("👋 Server shutdown complete"),
        Drain::TimedOut => warn!("👋 Server shutdown forced after {:?}", shutdown_timeout),
    }

    Ok(())
}

/// Wait for shutdown signals (SIGINT, SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("📥 Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("📥 Received SIGTERM, initiating graceful shutdown...");
        }
    }
}

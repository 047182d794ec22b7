//! Yatri HTTP Server
//!
//! Main entry point for the trip-planning API server.

use std::{sync::Arc, time::Duration};

use application::{PlanComposer, RouteCatalog, TripPlannerService};
use infrastructure::{AppConfig, DirectionsRouteAdapter, GeminiInferenceAdapter};
use presentation_http::{routes, state::AppState};
use tokio::{net::TcpListener, signal};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "yatri_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Yatri v{} starting...", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = AppConfig::load().unwrap_or_else(|e| {
        warn!("Failed to load config, using defaults: {}", e);
        AppConfig::default()
    });

    info!(
        host = %config.server.host,
        port = %config.server.port,
        "Configuration loaded"
    );

    // Route lookup: live directions provider when a credential is
    // configured, fallback catalog otherwise
    let route_catalog = match config.directions.to_client_config() {
        Some(directions_config) => {
            let adapter = DirectionsRouteAdapter::from_config(&directions_config)
                .map_err(|e| anyhow::anyhow!("Failed to initialize directions client: {e}"))?;
            info!("Directions provider configured, live route lookup enabled");
            RouteCatalog::new(Arc::new(adapter))
        },
        None => {
            info!("No directions credential, serving fallback routes only");
            RouteCatalog::without_live_provider()
        },
    };

    // Plan composition: Gemini when a credential is configured,
    // deterministic rendering otherwise
    let plan_composer = match config.inference.to_client_config() {
        Some(inference_config) => {
            let model = inference_config.model.clone();
            let adapter = GeminiInferenceAdapter::from_config(inference_config)
                .map_err(|e| anyhow::anyhow!("Failed to initialize inference client: {e}"))?;
            info!(model = %model, "Inference provider configured, AI plans enabled");
            PlanComposer::new(Arc::new(adapter))
        },
        None => {
            info!("No inference credential, serving deterministic plans only");
            PlanComposer::without_inference()
        },
    };

    let state = AppState {
        trip_planner: Arc::new(TripPlannerService::new(route_catalog, plan_composer)),
    };

    // Build router
    let app = routes::create_router(state);

    // Configure CORS layer
    let cors_layer = if config.server.allowed_origins.is_empty() {
        // Development mode: allow all origins
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        // Production mode: restrict to configured origins
        use axum::http::{HeaderValue, Method};
        let origins: Vec<HeaderValue> = config
            .server
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers(Any)
    };

    let app = app.layer(TraceLayer::new_for_http()).layer(cors_layer);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;

    info!("Server listening on http://{}", addr);

    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_secs.unwrap_or(30));

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown_timeout))
        .await?;

    info!("Server shutdown complete");

    Ok(())
}

/// Wait for shutdown signals (SIGINT, SIGTERM) and handle graceful shutdown
async fn shutdown_signal(timeout: Duration) {
    let ctrl_c = async {
        // Log error but continue waiting - this is a best-effort signal handler
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
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }

    info!("Waiting up to {:?} for connections to close...", timeout);
    // The actual connection draining is handled by axum's graceful_shutdown
}

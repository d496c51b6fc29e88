use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_governor::{
    governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor, GovernorLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wealthwise_api::config::Config;
use wealthwise_api::handlers::AppState;
use wealthwise_api::routes;

/// Main entry point for the application.
///
/// Initializes logging, loads configuration, builds the assessment engine and
/// its session cache, wires routes and middleware (CORS, rate limiting, body
/// limit) and starts the Axum server.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wealthwise_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;

    let app_state = Arc::new(AppState::new(config.clone()));
    tracing::info!(
        "Assessment engine ready: {} questions, session cache {}s TTL / {} entries",
        app_state.engine.questions().len(),
        config.assessment_cache_ttl_secs,
        config.assessment_cache_capacity
    );

    // Rate limiter: per IP, one token every 1/rate seconds
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_nanosecond(config.rate_limit_refill_nanos())
            .burst_size(config.rate_limit_burst)
            .key_extractor(SmartIpKeyExtractor)
            .finish()
            .ok_or_else(|| anyhow::anyhow!("Invalid rate limiter configuration"))?,
    );

    // Health check stays outside the rate limiter
    let protected_routes = routes::api_routes(config.max_body_bytes).layer(
        ServiceBuilder::new().layer(GovernorLayer {
            config: governor_conf,
        }),
    );
    let app = routes::with_common_layers(protected_routes, app_state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

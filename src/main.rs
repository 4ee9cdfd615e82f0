use axum::http::HeaderValue;
use taskboard_server::{app_state::AppState, data_context::DataContext, map_routes, settings::Settings};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let settings = Settings::load()?;
    init_tracing(&settings);

    // ── Open the store ─────────────────────────────────────────
    let data_context = DataContext::new(&settings.database_path)?;
    if settings.seed_demo_data && data_context.ensure_demo_data()? {
        tracing::info!("seeded demo workspace");
    }
    tracing::info!(
        projects = data_context.list_projects()?.len(),
        users = data_context.list_users()?.len(),
        path = %settings.database_path,
        "store opened"
    );

    // ── Router ─────────────────────────────────────────────────
    let app = map_routes(AppState::new(data_context))
        .layer(cors_layer(&settings))
        .layer(TraceLayer::new_for_http());

    // ── Start ──────────────────────────────────────────────────
    let address = settings.socket_address()?;
    let listener = TcpListener::bind(address).await?;
    tracing::info!(%address, "taskboard server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

#[cfg(not(feature = "console"))]
fn init_tracing(settings: &Settings) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.log_filter));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[cfg(feature = "console")]
fn init_tracing(_settings: &Settings) {
    console_subscriber::init();
}

fn cors_layer(settings: &Settings) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if settings.cors_allowed_origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = settings
        .cors_allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    layer.allow_origin(AllowOrigin::list(origins))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    extract::Extension,
    http::{Method, header::CONTENT_TYPE},
    routing::get,
};
use menu_catalog::catalog::loader;
use menu_catalog::config::Config;
use menu_catalog::query::handlers::{
    handle_featured_products, handle_get_product, handle_index, handle_list_categories,
    handle_list_products, handle_products_by_category, handle_restaurant_info, handle_stats,
};
use tokio::signal;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::load();
    tracing::info!("Starting menu catalog service");

    // 1. Catalog (read once at startup, immutable afterwards):
    let catalog = Arc::new(loader::load(&config.data_path));

    // 2. CORS (browser clients fetch the menu directly):
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    // 3. HTTP Router:
    let app = Router::new()
        .route("/", get(handle_index))
        .route("/api/products", get(handle_list_products))
        .route("/api/products/featured", get(handle_featured_products))
        .route(
            "/api/products/category/:category",
            get(handle_products_by_category),
        )
        .route("/api/products/:id", get(handle_get_product))
        .route("/api/categories", get(handle_list_categories))
        .route("/api/restaurant", get(handle_restaurant_info))
        .route("/api/stats", get(handle_stats))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(catalog));

    // 4. Start HTTP server:
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("HTTP server listening on {}", addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c().await.expect("Failed to install Ctrl+C handler");

        tracing::info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        tracing::info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

use std::net::SocketAddr;
use std::sync::Arc;

use folio_api::config::{AssetBackend, ServerConfig};
use folio_api::router::build_app_router;
use folio_api::state::AppState;
use folio_cloud::cloudinary::CloudinaryClient;
use folio_cloud::memory::MemoryAssetHost;
use folio_cloud::AssetHost;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "folio_api=debug,folio_cloud=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");
    if config.admin.is_none() {
        tracing::warn!("ADMIN_EMAIL / ADMIN_PASSWORD not set; admin endpoints will fail");
    }

    // --- Asset host ---
    let asset_host = build_asset_host(&config);

    // --- Links store ---
    let pool = match config.database_url.as_deref() {
        Some(url) => {
            let pool = folio_db::create_pool(url).expect("Invalid DATABASE_URL");
            match folio_db::run_migrations(&pool).await {
                Ok(()) => tracing::info!("Database migrations applied"),
                Err(e) => tracing::warn!(error = %e, "Could not apply migrations; links store may be unavailable"),
            }
            Some(pool)
        }
        None => {
            tracing::warn!("DATABASE_URL not set; external links endpoints will fail");
            None
        }
    };

    // --- App state ---
    let state = AppState {
        config: Arc::new(config.clone()),
        asset_host,
        pool,
    };

    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Build the asset host selected by `ASSET_BACKEND`.
///
/// Returns `None` for the Cloudinary backend when its credentials are not
/// configured.
fn build_asset_host(config: &ServerConfig) -> Option<Arc<dyn AssetHost>> {
    match config.asset_backend {
        AssetBackend::Memory => {
            tracing::warn!("Using the in-memory asset host; nothing is persisted");
            Some(Arc::new(MemoryAssetHost::new()))
        }
        AssetBackend::Cloudinary => match config.cloudinary.clone() {
            Some(cloudinary) => {
                let cloud_name = cloudinary.cloud_name.clone();
                let client =
                    CloudinaryClient::new(cloudinary).expect("Failed to build HTTP client");
                tracing::info!(%cloud_name, "Cloudinary client created");
                Some(Arc::new(client))
            }
            None => {
                tracing::warn!("Cloudinary config missing; asset endpoints will fail");
                None
            }
        },
    }
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}

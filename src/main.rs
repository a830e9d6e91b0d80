use dotenvy::dotenv;
use tracing_subscriber::EnvFilter;

use school_activities::config::ServerConfig;
use school_activities::database::ActivityStore;
use school_activities::web;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();

    // 1. Logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env();

    // 2. In-memory data, reset on every start
    let store = ActivityStore::seeded();
    tracing::info!(activities = store.len(), "activity store seeded");

    // 3. App
    let app = web::build_router(store, &config.static_dir);

    // 4. Bind, with one fallback port
    let listener = match tokio::net::TcpListener::bind(config.bind_addr()).await {
        Ok(l) => l,
        Err(e) => {
            tracing::warn!(
                addr = %config.bind_addr(),
                error = %e,
                fallback = %config.fallback_bind_addr(),
                "bind failed, trying fallback port"
            );
            tokio::net::TcpListener::bind(config.fallback_bind_addr()).await?
        }
    };

    let bound_addr = listener.local_addr()?;
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        static_dir = %config.static_dir.display(),
        "listening on http://{}",
        bound_addr
    );

    axum::serve(listener, app).await
}

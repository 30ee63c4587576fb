//! Server entry point: config from env, database bootstrap, router, serve.

use axum::Router;
use marketplace_api::{
    api_routes, common_routes, connect, ensure_database_exists, run_migrations, AppConfig,
    AppState,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("marketplace_api=info".parse()?),
        )
        .init();

    let config = AppConfig::from_env()?;
    ensure_database_exists(&config.database_url).await?;
    let pool = connect(&config).await?;
    run_migrations(&pool).await?;

    let state = AppState { pool };
    let app = Router::new()
        .merge(common_routes(state.clone()))
        .merge(api_routes(state))
        .layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}

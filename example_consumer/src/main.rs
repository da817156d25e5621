//! Example consumer: a runnable server that uses roster-api as a dependency.
//!
//! Run from repo root: `cargo run -p example-consumer`
//! Or from this directory: `cargo run`

use axum::Router;
use roster_api::{
    api_routes, common_routes_with_ready, ensure_collections, open_pool, page_routes, AppState,
};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("roster_api=info")),
        )
        .init();

    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://school.db".into());
    let pool = open_pool(&database_url).await?;
    ensure_collections(&pool).await?;
    let state = AppState::new(pool);

    let app = Router::new()
        .merge(common_routes_with_ready(state.clone()))
        .merge(page_routes(state.clone()))
        .merge(api_routes(state));

    let bind = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:5000".into());
    let listener = TcpListener::bind(&bind).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}

//! API server: loads settings, connects to PostgreSQL, optionally applies the catalog schema,
//! and serves the router until Ctrl-C.

use led_configurator::config::DEFAULT_LOG_FILTER;
use led_configurator::store::{connect, ensure_database_exists};
use led_configurator::{app, apply_migrations, AppConfig, AppState, PgStore, ReqwestRateSource};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let db = &config.database;
    if db.run_migrations {
        ensure_database_exists(&db.url).await?;
    }
    let pool = connect(&db.url, db.max_connections).await?;
    if db.run_migrations {
        apply_migrations(&pool, &db.schema).await?;
    }

    let store = Arc::new(PgStore::new(pool, db.schema.clone()));
    let rates = Arc::new(ReqwestRateSource::new(&config.currency)?);
    let state = AppState::new(store, rates);
    let router = app(state, &config.http)?;

    let listener = TcpListener::bind(config.http.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "failed to listen for shutdown signal");
            }
            tracing::info!("shutting down");
        })
        .await?;
    Ok(())
}

//! Application setup and server configuration.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    extract::Extension,
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method,
    },
    routing::{get, put},
    Router,
};
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::domains::contacts::{InMemoryContactStore, PostgresContactStore};
use crate::kernel::ContactStore;
use crate::server::routes::{
    create_contact, delete_contact, health_handler, read_all_contacts, update_contact,
};

/// Shared application state
#[derive(Clone)]
pub struct AxumAppState {
    pub store: Arc<dyn ContactStore>,
}

/// Pick the contact store for this configuration.
///
/// With a `DATABASE_URL` this connects, runs migrations and returns the
/// Postgres store; without one it falls back to the in-memory store.
pub async fn build_store(config: &Config) -> Result<Arc<dyn ContactStore>> {
    let Some(database_url) = config.database_url.as_deref() else {
        tracing::warn!("DATABASE_URL not set, contacts will be kept in memory");
        return Ok(Arc::new(InMemoryContactStore::new()));
    };

    tracing::info!("Connecting to database...");
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .connect(database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connected");

    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Migrations complete");

    Ok(Arc::new(PostgresContactStore::new(pool)))
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let allow_origin = if origins.is_empty() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE])
}

/// Build the Axum application router
pub fn build_app(store: Arc<dyn ContactStore>, allowed_origins: &[String]) -> Router {
    let app_state = AxumAppState { store };

    Router::new()
        .route("/contacts", get(read_all_contacts).post(create_contact))
        .route(
            "/contacts/:id",
            put(update_contact)
                .patch(update_contact)
                .delete(delete_contact),
        )
        // Health check
        .route("/health", get(health_handler))
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(Extension(app_state))
        .layer(cors_layer(allowed_origins))
        .layer(TraceLayer::new_for_http())
}

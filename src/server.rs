//! HTTP server initialization and runtime setup.
//!
//! Handles database connection, migrations, picture client setup, and the
//! Axum server lifecycle.

use crate::application::services::LinkService;
use crate::config::Config;
use crate::infrastructure::persistence::PgLinkRepository;
use crate::infrastructure::pictures::{CatApiClient, NullPictures, PictureService};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Schema migrations
/// - Picture client (NullPictures fallback when it cannot be built)
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if the database connection, migrations, server bind, or
/// server runtime fail.
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .connect(&config.database_url)
        .await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations").run(&pool).await?;

    let pictures: Arc<dyn PictureService> = match CatApiClient::new() {
        Ok(client) => Arc::new(client),
        Err(e) => {
            tracing::warn!("Failed to build picture client: {}. Using NullPictures.", e);
            Arc::new(NullPictures::new())
        }
    };

    let link_repository = Arc::new(PgLinkRepository::new(Arc::new(pool)));
    let links = Arc::new(LinkService::new(
        link_repository,
        config.code_length,
        config.base_url.clone(),
    ));

    let state = AppState::new(links, pictures);

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}

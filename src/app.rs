//! Application state and HTTP router construction.

use std::sync::Arc;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::api;
use crate::config::Config;
use crate::graphql::{self, CatalogSchema};
use crate::services::CatalogService;

/// Shared state for HTTP handlers (GraphQL, health routes).
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub catalog: CatalogService,
    pub schema: CatalogSchema,
}

impl AppState {
    /// Build the schema over `catalog` and bundle it with the config
    pub fn new(config: Arc<Config>, catalog: CatalogService) -> Self {
        let schema = graphql::build_schema(catalog.clone(), &config);
        Self {
            config,
            catalog,
            schema,
        }
    }
}

/// Build the full Axum router: probes, /graphql, /graphql/ws and layers.
/// Returns Router<()> (state fully applied) for use with axum::serve.
pub fn build_app(state: AppState) -> Router<()> {
    Router::new()
        .merge(api::health::router())
        .merge(graphql::http::router())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

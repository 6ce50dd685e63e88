pub mod configuration;
pub mod dashboard;
pub mod indexes;
pub mod nodes;
pub mod query;
pub mod security;
pub mod shell;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::avs::{ApiError, AvsClient, SnapshotCache};
use crate::config::ConsoleConfig;
use crate::models::{IndexInfo, Node};

/// Sdílený stav konzole
pub struct AppState {
    pub client: AvsClient,
    pub config: ConsoleConfig,
    pub nodes: SnapshotCache<Node>,
    pub indexes: SnapshotCache<IndexInfo>,
}

impl AppState {
    pub fn new(config: ConsoleConfig) -> Result<Self, ApiError> {
        let client = AvsClient::new(&config.api_url, config.request_timeout)?;

        Ok(Self {
            client,
            nodes: SnapshotCache::new(config.cache_ttl),
            indexes: SnapshotCache::new(config.cache_ttl),
            config,
        })
    }
}

/// Sestaví axum router konzole
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/dashboard", get(dashboard::dashboard))
        .route("/dashboard/panel", get(dashboard::dashboard_panel))
        .route("/nodes", get(nodes::list_nodes))
        .route("/nodes/table", get(nodes::nodes_table))
        .route("/indexes", get(indexes::list_indexes))
        .route("/indexes/table", get(indexes::indexes_table))
        .route("/users", get(security::list_users))
        .route("/users/table", get(security::users_table))
        .route("/roles", get(security::list_roles))
        .route("/roles/table", get(security::roles_table))
        .route("/config", get(configuration::config_page))
        .route("/config/panel", get(configuration::config_panel))
        .route("/config/update", post(configuration::update_config))
        .route("/config/upload", post(configuration::upload_tls_file))
        .route("/query", get(query::query_page))
        .route("/query/execute", post(query::execute_query))
        .nest_service("/static", ServeDir::new("static"))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Root handler - redirect na dashboard
pub async fn index() -> impl IntoResponse {
    Redirect::to("/dashboard")
}

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}


#[cfg(test)]
mod tests {
    use super::test_support::get_body;
    use super::*;
    use crate::testing::{test_state, unreachable_url};

    #[tokio::test]
    async fn test_health_and_root_redirect() {
        let app = router(test_state(&unreachable_url().await, 0));

        let (status, body) = get_body(app.clone(), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "OK");

        let (status, _) = get_body(app, "/").await;
        assert_eq!(status, StatusCode::SEE_OTHER);
    }
}

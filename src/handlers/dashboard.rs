use askama::Template;
use axum::{extract::State, http::StatusCode, response::Html};
use std::sync::Arc;

use crate::avs::api::nodes_or_placeholder;
use crate::handlers::{shell::render_view, AppState};
use crate::models::{DashboardData, DashboardSummary};
use crate::templates::DashboardPanelTemplate;

/// GET /dashboard - Zobrazí dashboard
pub async fn dashboard(
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, (StatusCode, String)> {
    render_view(&state, "dashboard", "Dashboard", "Cluster overview", "/dashboard/panel").await
}

/// GET /dashboard/panel - Souhrnné karty (partial pro HTMX)
pub async fn dashboard_panel(
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, (StatusCode, String)> {
    let data = load_dashboard_data(&state).await;
    let template = DashboardPanelTemplate { data };

    template.render()
        .map(Html)
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
}

async fn load_dashboard_data(state: &AppState) -> DashboardData {
    let (config, nodes, indexes, cluster) = tokio::join!(
        state.client.fetch_config(),
        state.nodes.get_or_fetch(|| state.client.fetch_nodes()),
        state.indexes.get_or_fetch(|| state.client.fetch_indexes()),
        state.client.fetch_cluster_info(),
    );

    let mut connection_error: Option<String> = None;

    let config = match config {
        Ok(c) => Some(c),
        Err(e) => {
            if e.is_unreachable() {
                tracing::warn!("AVS backend unreachable: {}", e);
            } else {
                tracing::error!("Failed to load config for dashboard: {}", e);
            }
            connection_error = Some(e.to_string());
            None
        }
    };

    let indexes = match indexes {
        Ok(snapshot) => snapshot.items,
        Err(e) => {
            tracing::error!("Failed to load indexes for dashboard: {}", e);
            connection_error.get_or_insert_with(|| e.to_string());
            Vec::new()
        }
    };

    // Nody nikdy nezpůsobí chybu, místo nich se ukáže zástupný node
    let nodes = nodes_or_placeholder(nodes.map(|snapshot| snapshot.items));

    let mut summary = DashboardSummary::compute(&indexes, &nodes, Some(&cluster));

    // Při chybě spojení se konfigurace ani role nodů nezobrazují
    let config = if connection_error.is_some() {
        summary.node_roles.clear();
        None
    } else {
        config
    };

    DashboardData::new(config.as_ref(), connection_error, summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::{router, test_support::get_body};
    use crate::testing::{spawn_backend, test_state, unreachable_url};
    use axum::{routing::get, Json, Router};
    use serde_json::json;

    fn backend() -> Router {
        Router::new()
            .route("/api/config", get(|| async {
                Json(json!({"configFile": "/etc/asvec.yml", "host": "10.0.0.5:5000"}))
            }))
            .route("/api/nodes", get(|| async {
                Json(json!([
                    {"nodeId": "n1", "role": "INDEX_UPDATE", "endpoint": "10.0.0.1:5000", "version": "1.1.0"},
                    {"nodeId": "n2", "role": "QUERY", "endpoint": "10.0.0.2:5000", "version": "1.0.0"}
                ]))
            }))
            .route("/api/indexes", get(|| async {
                Json(json!([
                    {"name": "a", "vectorRecords": 100, "unmerged": 10, "mode": "A", "status": "READY"},
                    {"name": "b", "vectorRecords": 50, "unmerged": 0, "mode": "B", "status": "READY"}
                ]))
            }))
    }

    #[tokio::test]
    async fn test_dashboard_data_from_backend() {
        let state = test_state(&spawn_backend(backend()).await, 5);
        let data = load_dashboard_data(&state).await;

        assert!(data.connected);
        assert_eq!(data.connection, "Host: 10.0.0.5:5000 (single node or load-balancer)");
        assert_eq!(data.summary.total_vector_count, 150);
        assert_eq!(data.summary.total_unmerged, 10);
        assert_eq!(data.summary.mode("A"), 1);
        assert_eq!(data.summary.mode("B"), 1);
        assert_eq!(data.summary.status("READY"), 2);
        assert_eq!(data.summary.node_roles, vec!["INDEX_UPDATE", "QUERY"]);
        // Backend nemá /health, cluster info je fallback a verze se bere z prvního nodu
        assert_eq!(data.summary.server_version, "1.1.0");
    }

    #[tokio::test]
    async fn test_dashboard_data_when_unreachable() {
        let state = test_state(&unreachable_url().await, 5);
        let data = load_dashboard_data(&state).await;

        assert!(!data.connected);
        assert!(data.connection_error.is_some());
        assert_eq!(data.connection, "Not configured");
        assert_eq!(data.summary.total_indexes, 0);
        assert_eq!(data.summary.total_node_count, 1);
        assert!(data.summary.node_roles.is_empty());
        assert_eq!(data.summary.server_version, "1.1.0-RC");
    }

    #[tokio::test]
    async fn test_dashboard_roles_cleared_when_indexes_fail() {
        let backend = Router::new()
            .route("/api/config", get(|| async { Json(json!({"host": "10.0.0.5:5000"})) }))
            .route("/api/nodes", get(|| async {
                Json(json!([{"nodeId": "n1", "role": "QUERY", "endpoint": "10.0.0.1:5000", "version": "1.1.0"}]))
            }))
            .route("/api/indexes", get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }));
        let state = test_state(&spawn_backend(backend).await, 5);
        let data = load_dashboard_data(&state).await;

        assert!(!data.connected);
        assert!(data.summary.node_roles.is_empty());
        assert_eq!(data.summary.total_indexes, 0);
    }

    #[tokio::test]
    async fn test_dashboard_with_empty_cluster() {
        let backend = Router::new()
            .route("/api/config", get(|| async { Json(json!({"host": "10.0.0.5:5000"})) }))
            .route("/api/nodes", get(|| async { "null" }))
            .route("/api/indexes", get(|| async { "null" }));
        let state = test_state(&spawn_backend(backend).await, 5);
        let data = load_dashboard_data(&state).await;

        assert!(data.connected);
        assert!(data.connection_error.is_none());
        assert_eq!(data.summary.total_indexes, 0);
        assert_eq!(data.summary.total_node_count, 0);
        assert_eq!(data.summary.total_unmerged_percent_formatted(), "0.00%");
    }

    #[tokio::test]
    async fn test_dashboard_panel_renders_totals() {
        let app = router(test_state(&spawn_backend(backend()).await, 5));
        let (status, body) = get_body(app, "/dashboard/panel").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Connected"));
        assert!(body.contains("Total Vector Count"));
        assert!(body.contains("id=\"total-vector-count\">150<"));
        assert!(body.contains("6.67%"));
        assert!(body.contains("READY: 2"));
    }
}

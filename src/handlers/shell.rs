use askama::Template;
use axum::{http::StatusCode, response::Html};

use crate::handlers::AppState;
use crate::templates::{Features, PageContext, Sidebar, ViewTemplate};

/// Načte data pro sidebar a navigaci.
/// Cluster info a dostupnost users/roles se načítají souběžně.
pub async fn page_context(state: &AppState, active_tab: &'static str) -> PageContext {
    let (cluster, users, roles) = tokio::join!(
        state.client.fetch_cluster_info(),
        state.client.fetch_users(),
        state.client.fetch_roles(),
    );

    let features = Features {
        users: users.available,
        roles: roles.available,
    };

    PageContext::new(active_tab, Sidebar::new(state.config.api_host(), &cluster), features)
}

/// Vyrenderuje stránku s panelem, který se dotáhne přes HTMX
pub async fn render_view(
    state: &AppState,
    active_tab: &'static str,
    title: &'static str,
    description: &'static str,
    panel_url: &str,
) -> Result<Html<String>, (StatusCode, String)> {
    let ctx = page_context(state, active_tab).await;
    let template = ViewTemplate {
        ctx,
        title,
        description,
        panel_url: panel_url.to_string(),
    };

    template.render()
        .map(Html)
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{spawn_backend, test_state, unreachable_url};
    use axum::{routing::get, Json, Router};
    use serde_json::json;

    #[tokio::test]
    async fn test_page_context_live_backend() {
        let backend = Router::new()
            .route("/api/health", get(|| async { "ok" }))
            .route("/api/cluster/info", get(|| async {
                Json(json!({"clusterId": "c-1", "version": "1.2.0", "clusterSize": 3, "activeCluster": "prod"}))
            }))
            .route("/api/users", get(|| async { Json(json!({"available": true, "data": []})) }))
            .route("/api/roles", get(|| async { Json(json!({"available": false})) }));
        let state = test_state(&spawn_backend(backend).await, 0);

        let ctx = page_context(&state, "nodes").await;
        assert_eq!(ctx.active_tab, "nodes");
        assert_eq!(ctx.sidebar.status(), "Connected");
        assert_eq!(ctx.sidebar.cluster, "prod");
        assert_eq!(ctx.sidebar.size, 3);
        assert_eq!(ctx.features, Features { users: true, roles: false });
    }

    #[tokio::test]
    async fn test_page_context_unreachable_backend() {
        let state = test_state(&unreachable_url().await, 0);

        let ctx = page_context(&state, "dashboard").await;
        assert_eq!(ctx.sidebar.status(), "Disconnected");
        assert_eq!(ctx.sidebar.cluster, "default");
        assert_eq!(ctx.sidebar.version, "AVS 1.1.0-RC1");
        assert_eq!(ctx.features, Features { users: false, roles: false });
    }

    #[tokio::test]
    async fn test_render_view_contains_panel_url() {
        let state = test_state(&unreachable_url().await, 0);
        let html = render_view(&state, "nodes", "Nodes", "Cluster nodes", "/nodes/table")
            .await
            .unwrap()
            .0;

        assert!(html.contains("hx-get=\"/nodes/table\""));
        assert!(html.contains("(Unavailable)"));
    }
}

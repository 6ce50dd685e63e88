use askama::Template;
use axum::{extract::State, http::StatusCode, response::Html};
use std::sync::Arc;

use crate::handlers::{shell::render_view, AppState};
use crate::templates::NodesTableTemplate;

/// GET /nodes - Zobrazí seznam nodů
pub async fn list_nodes(
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, (StatusCode, String)> {
    render_view(&state, "nodes", "Nodes", "AVS nodes in the cluster", "/nodes/table").await
}

/// GET /nodes/table - Vrátí jen tabulku (partial pro HTMX)
pub async fn nodes_table(
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, (StatusCode, String)> {
    let nodes = state.nodes
        .get_or_fetch(|| state.client.fetch_nodes())
        .await
        .map_err(|e| {
            tracing::error!("Failed to load nodes: {}", e);
            e.to_string()
        });

    let template = NodesTableTemplate { state: nodes };

    template.render()
        .map(Html)
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
}

use askama::Template;
use axum::{extract::State, http::StatusCode, response::Html, Form};
use std::sync::Arc;

use crate::handlers::{shell::page_context, AppState};
use crate::models::QueryForm;
use crate::templates::{QueryResultsTemplate, QueryTemplate};

/// GET /query - Formulář pro vector / key search
pub async fn query_page(
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, (StatusCode, String)> {
    let ctx = page_context(&state, "query").await;
    let template = QueryTemplate {
        ctx,
        form: QueryForm::default(),
    };

    template.render()
        .map(Html)
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
}

/// POST /query/execute - Vykoná query a vrátí výsledky (partial pro HTMX)
pub async fn execute_query(
    State(state): State<Arc<AppState>>,
    Form(form): Form<QueryForm>,
) -> Result<Html<String>, (StatusCode, String)> {
    // Nevalidní formulář se na backend vůbec neposílá
    let result = match form.to_request() {
        Ok(request) => {
            tracing::debug!("Executing query: {:?}", request);
            state.client.execute_query(&request).await.map_err(|e| {
                tracing::error!("Query failed: {}", e);
                format!("Query failed: {}", e)
            })
        }
        Err(e) => Err(e.to_string()),
    };

    let template = QueryResultsTemplate { state: result };

    template.render()
        .map(Html)
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
}

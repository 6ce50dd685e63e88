use askama::Template;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Html,
};
use axum_extra::extract::{cookie::Cookie, CookieJar};
use serde::Deserialize;
use std::sync::Arc;

use crate::handlers::{shell::render_view, AppState};
use crate::models::IndexesListData;
use crate::templates::IndexesTableTemplate;

const NAMESPACE_COOKIE: &str = "indexes_namespace";

#[derive(Debug, Deserialize)]
pub struct IndexesQuery {
    /// `None` = použij cookie, prázdný string = všechny namespace
    pub namespace: Option<String>,
}

/// GET /indexes - Zobrazí seznam indexů
pub async fn list_indexes(
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, (StatusCode, String)> {
    render_view(&state, "indexes", "Indexes", "Vector indexes", "/indexes/table").await
}

/// GET /indexes/table - Vrátí jen tabulku (partial pro HTMX)
pub async fn indexes_table(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Query(query): Query<IndexesQuery>,
) -> Result<(CookieJar, Html<String>), (StatusCode, String)> {
    let (jar, namespace) = resolve_namespace(jar, query.namespace);

    let data = state.indexes
        .get_or_fetch(|| state.client.fetch_indexes())
        .await
        .map(|snapshot| IndexesListData::new(&snapshot.items, namespace, snapshot.fetched_at))
        .map_err(|e| {
            tracing::error!("Failed to load indexes: {}", e);
            e.to_string()
        });

    let template = IndexesTableTemplate { state: data };

    template.render()
        .map(|html| (jar, Html(html)))
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
}

/// Vybraný namespace z query, jinak z cookie
fn resolve_namespace(jar: CookieJar, requested: Option<String>) -> (CookieJar, Option<String>) {
    match requested {
        // Záložka "All"
        Some(ns) if ns.is_empty() => {
            let jar = jar.remove(Cookie::build(NAMESPACE_COOKIE).path("/"));
            (jar, None)
        }
        Some(ns) => {
            let cookie = Cookie::build((NAMESPACE_COOKIE, ns.clone()))
                .path("/")
                .max_age(time::Duration::days(30))
                .build();
            (jar.add(cookie), Some(ns))
        }
        None => {
            let ns = jar.get(NAMESPACE_COOKIE)
                .map(|c| c.value().to_string())
                .filter(|v| !v.is_empty());
            (jar, ns)
        }
    }
}

use askama::Template;
use axum::{extract::State, http::StatusCode, response::Html};
use std::sync::Arc;

use crate::handlers::{shell::render_view, AppState};
use crate::templates::{RolesTableTemplate, UsersTableTemplate};

/// GET /users - Zobrazí seznam uživatelů
pub async fn list_users(
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, (StatusCode, String)> {
    render_view(&state, "users", "Users", "Cluster users and their roles", "/users/table").await
}

/// GET /users/table - partial pro HTMX
pub async fn users_table(
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, (StatusCode, String)> {
    let template = UsersTableTemplate {
        feature: state.client.fetch_users().await,
    };

    template.render()
        .map(Html)
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
}

/// GET /roles - Zobrazí seznam rolí
pub async fn list_roles(
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, (StatusCode, String)> {
    render_view(&state, "roles", "Roles", "Roles defined on the cluster", "/roles/table").await
}

/// GET /roles/table - partial pro HTMX
pub async fn roles_table(
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, (StatusCode, String)> {
    let template = RolesTableTemplate {
        feature: state.client.fetch_roles().await,
    };

    template.render()
        .map(Html)
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
}

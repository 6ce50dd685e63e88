use askama::Template;
use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::Html,
    Form,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::handlers::{shell::render_view, AppState};
use crate::models::ConfigUpdate;
use crate::templates::{ActionResultTemplate, ConfigPanelTemplate};

/// Typy TLS souborů, které backend přijímá
pub const TLS_FILE_TYPES: [&str; 3] = ["cert", "key", "ca"];

/// Formulář pro update konfigurace, prázdná pole se ignorují
#[derive(Debug, Default, Deserialize)]
pub struct ConfigForm {
    #[serde(default)]
    pub active_cluster: String,
    #[serde(default)]
    pub host: String,
    #[serde(default)]
    pub seeds: String,
    #[serde(default)]
    pub credentials: String,
    #[serde(default)]
    pub tls_enabled: String, // "", "true", "false"
    #[serde(default)]
    pub config_text: String,
}

impl ConfigForm {
    pub fn to_update(&self) -> ConfigUpdate {
        ConfigUpdate {
            active_cluster: non_empty(&self.active_cluster),
            host: non_empty(&self.host),
            seeds: non_empty(&self.seeds),
            credentials: non_empty(&self.credentials),
            tls_enabled: match self.tls_enabled.as_str() {
                "true" => Some(true),
                "false" => Some(false),
                _ => None,
            },
            // Text konfigurace se posílá tak, jak je
            config_text: if self.config_text.trim().is_empty() {
                None
            } else {
                Some(self.config_text.clone())
            },
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// GET /config - Zobrazí konfiguraci CLI
pub async fn config_page(
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, (StatusCode, String)> {
    render_view(&state, "config", "Configuration", "asvec CLI configuration", "/config/panel").await
}

/// GET /config/panel - partial pro HTMX
pub async fn config_panel(
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, (StatusCode, String)> {
    let config = state.client.fetch_config().await.map_err(|e| {
        tracing::error!("Failed to load config: {}", e);
        e.to_string()
    });

    let template = ConfigPanelTemplate { state: config };

    template.render()
        .map(Html)
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
}

/// POST /config/update - Uloží změny konfigurace
pub async fn update_config(
    State(state): State<Arc<AppState>>,
    Form(form): Form<ConfigForm>,
) -> Result<Html<String>, (StatusCode, String)> {
    let update = form.to_update();

    let template = if update.is_empty() {
        ActionResultTemplate::failure("Nothing to update")
    } else {
        match state.client.update_config(&update).await {
            Ok(response) => {
                if response.success {
                    tracing::info!("Configuration updated");
                    // Po změně připojení už snapshoty neplatí
                    state.nodes.invalidate().await;
                    state.indexes.invalidate().await;
                } else {
                    tracing::warn!("Backend rejected config update: {}", response.message);
                }
                ActionResultTemplate::from_backend(response.success, response.message, "Configuration updated")
            }
            Err(e) => {
                tracing::error!("Failed to update config: {}", e);
                ActionResultTemplate::failure(format!("Failed to update config: {}", e))
            }
        }
    };

    template.render()
        .map(Html)
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
}

/// POST /config/upload - Přepošle TLS soubor na backend
pub async fn upload_tls_file(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Html<String>, (StatusCode, String)> {
    let mut kind: Option<String> = None;
    let mut file: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart.next_field().await
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "type" => {
                let value = field.text().await
                    .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;
                kind = Some(value.trim().to_string());
            }
            "file" => {
                let file_name = field.file_name().unwrap_or("upload").to_string();
                let bytes = field.bytes().await
                    .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;
                file = Some((file_name, bytes.to_vec()));
            }
            _ => {}
        }
    }

    let template = match (kind, file) {
        (Some(kind), _) if !TLS_FILE_TYPES.contains(&kind.as_str()) => {
            ActionResultTemplate::failure(format!("Unknown file type: {}", kind))
        }
        (None, _) => ActionResultTemplate::failure("File type is required"),
        (_, None) => ActionResultTemplate::failure("No file selected"),
        (Some(_), Some((_, contents))) if contents.is_empty() => {
            ActionResultTemplate::failure("No file selected")
        }
        (Some(kind), Some((file_name, contents))) => {
            tracing::info!("Uploading {} file {} ({} bytes)", kind, file_name, contents.len());
            match state.client.upload_tls_file(&kind, &file_name, contents).await {
                Ok(response) => ActionResultTemplate::from_backend(
                    response.success,
                    response.message,
                    "File uploaded",
                ),
                Err(e) => {
                    tracing::error!("Failed to upload {} file: {}", kind, e);
                    ActionResultTemplate::failure(format!("Failed to upload file: {}", e))
                }
            }
        }
    };

    template.render()
        .map(Html)
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
}

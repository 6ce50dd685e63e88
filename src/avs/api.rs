use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;

use super::client::AvsClient;
use super::error::{ApiError, Result};
use crate::models::{
    ClusterInfo, ClusterSnapshot, ConfigInfo, ConfigUpdate, Feature, IndexInfo, Node,
    QueryRequest, QueryResponse, Role, UpdateResponse, UploadResponse, User,
};

/// Nahradí chybu načtení nodů jedním zástupným nodem
pub fn nodes_or_placeholder(result: Result<Vec<Node>>) -> Vec<Node> {
    match result {
        Ok(nodes) => nodes,
        Err(e) => {
            tracing::warn!("Failed to fetch nodes, using placeholder node: {}", e);
            vec![Node::placeholder()]
        }
    }
}

impl AvsClient {
    /// Získá seznam nodů
    pub async fn fetch_nodes(&self) -> Result<Vec<Node>> {
        self.get_list("/nodes").await
    }

    /// Získá seznam vektorových indexů
    pub async fn fetch_indexes(&self) -> Result<Vec<IndexInfo>> {
        self.get_list("/indexes").await
    }

    /// Prázdný seznam posílá backend jako `null`
    async fn get_list<T>(&self, path: &str) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
    {
        let items: Option<Vec<T>> = self.get(path).await?;
        Ok(items.unwrap_or_default())
    }

    pub async fn fetch_users(&self) -> Feature<Vec<User>> {
        self.fetch_feature("/users").await
    }

    pub async fn fetch_roles(&self) -> Feature<Vec<Role>> {
        self.fetch_feature("/roles").await
    }

    /// Volitelná funkce backendu, chyby se promítnou do `available = false`
    async fn fetch_feature<T>(&self, path: &str) -> Feature<T>
    where
        T: DeserializeOwned,
    {
        let (_status, text) = match self.get_text(path).await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("Feature check {} failed: {}", path, e);
                return Feature::unavailable(e.to_string());
            }
        };

        if text.trim().is_empty() {
            tracing::warn!("Empty response from {}", path);
            return Feature::unavailable(ApiError::EmptyBody.to_string());
        }

        match serde_json::from_str::<Feature<T>>(&text) {
            Ok(feature) => feature,
            Err(e) => {
                tracing::warn!("Invalid feature response from {}: {}", path, e);
                Feature::unavailable(ApiError::Malformed(e).to_string())
            }
        }
    }

    /// Cluster info; pokud backend neodpovídá na health probe nebo request
    /// selže, vrací výchozí hodnoty označené jako fallback
    pub async fn fetch_cluster_info(&self) -> ClusterSnapshot {
        if !self.is_healthy().await {
            tracing::warn!("Backend is not responding, using default cluster info");
            return ClusterSnapshot::fallback();
        }

        match self.get::<ClusterInfo>("/cluster/info").await {
            Ok(info) => ClusterSnapshot::live(info),
            Err(e) => {
                tracing::warn!("Failed to fetch cluster info, using defaults: {}", e);
                ClusterSnapshot::fallback()
            }
        }
    }

    pub async fn fetch_config(&self) -> Result<ConfigInfo> {
        self.get("/config").await
    }

    /// Vykoná vector / key query
    pub async fn execute_query(&self, request: &QueryRequest) -> Result<QueryResponse> {
        self.post("/query", request).await
    }

    pub async fn update_config(&self, update: &ConfigUpdate) -> Result<UpdateResponse> {
        self.post("/config/update", update).await
    }

    /// Nahraje TLS soubor (certifikát, klíč, CA) jako multipart
    pub async fn upload_tls_file(
        &self,
        kind: &str,
        file_name: &str,
        contents: Vec<u8>,
    ) -> Result<UploadResponse> {
        let form = Form::new()
            .text("type", kind.to_string())
            .part("file", Part::bytes(contents).file_name(file_name.to_string()));

        self.post_multipart("/config/upload", form).await
    }
}

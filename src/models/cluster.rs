use serde::{Deserialize, Serialize};

use super::null_as_default;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClusterInfo {
    pub cluster_id: String,
    pub version: String,
    pub cluster_size: u32,
    pub total_vectors: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub node_roles: Vec<String>,
    pub active_cluster: String,
}

impl ClusterInfo {
    /// Hodnoty, které se zobrazí, když backend neodpovídá
    pub fn fallback() -> Self {
        Self {
            cluster_id: "default-cluster".to_string(),
            version: "AVS 1.1.0-RC1".to_string(),
            cluster_size: 1,
            total_vectors: 0,
            node_roles: vec!["STANDALONE".to_string()],
            active_cluster: "default".to_string(),
        }
    }
}

/// Cluster info spolu s informací, zda pochází z backendu
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterSnapshot {
    pub info: ClusterInfo,
    pub live: bool,
}

impl ClusterSnapshot {
    pub fn live(info: ClusterInfo) -> Self {
        Self { info, live: true }
    }

    pub fn fallback() -> Self {
        Self { info: ClusterInfo::fallback(), live: false }
    }

    /// Verze hlášená clusterem, pouze pokud jde o živá data.
    /// Backend bez informace o verzi posílá "Unknown".
    pub fn reported_version(&self) -> Option<&str> {
        let version = self.info.version.trim();
        if !self.live || version.is_empty() || version.eq_ignore_ascii_case("unknown") {
            return None;
        }
        Some(version)
    }
}

/// Konfigurace asvec CLI na straně backendu
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfigInfo {
    pub config_file: String,
    pub active_cluster: String,
    pub host: String,
    pub seeds: String,
    pub credentials: String,
    pub tls_enabled: bool,
    pub config_text: String,
    pub cli_installed: bool,
    pub cli_version: String,
    pub cli_download_url: String,
}

impl ConfigInfo {
    /// Popis připojení: seeds mají přednost před host
    pub fn connection_label(&self) -> String {
        if !self.seeds.trim().is_empty() {
            format!("Seeds: {}", self.seeds)
        } else if !self.host.trim().is_empty() {
            format!("Host: {}", self.host)
        } else {
            "Not configured".to_string()
        }
    }

    /// Varianta pro dashboard s poznámkou o load-balanceru
    pub fn topology_label(&self) -> String {
        if !self.seeds.trim().is_empty() {
            format!("Seeds: {} (no load-balancer)", self.seeds)
        } else if !self.host.trim().is_empty() {
            format!("Host: {} (single node or load-balancer)", self.host)
        } else {
            "Not configured".to_string()
        }
    }
}

/// Částečná aktualizace konfigurace, prázdná pole se neposílají
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_cluster: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seeds: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credentials: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_text: Option<String>,
}

impl ConfigUpdate {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    #[serde(default, rename = "type")]
    pub kind: String,
}

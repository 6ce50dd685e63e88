use serde::{Deserialize, Serialize};

use crate::utils::connection_badge_class;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeStatus {
    pub connected: bool,
    #[serde(default)]
    pub message: String,
}

/// AVS node tak, jak ho vrací `GET /nodes`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    pub node_id: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub endpoint: String,
    #[serde(default)]
    pub version: String,
    // Backend status posílat nemusí
    #[serde(default)]
    pub status: Option<NodeStatus>,
}

impl Node {
    /// Zástupný node, který se zobrazí místo seznamu, když backend nejde načíst
    pub fn placeholder() -> Self {
        Self {
            node_id: "LB".to_string(),
            role: "N/A".to_string(),
            endpoint: "127.0.0.1:5555".to_string(),
            version: "1.1.0-RC".to_string(),
            status: Some(NodeStatus {
                connected: true,
                message: "Error fetching nodes".to_string(),
            }),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.status.as_ref().map(|s| s.connected).unwrap_or(false)
    }

    pub fn connection_badge(&self) -> &'static str {
        connection_badge_class(self.is_connected())
    }

    pub fn status_message(&self) -> &str {
        self.status.as_ref().map(|s| s.message.as_str()).unwrap_or("")
    }
}

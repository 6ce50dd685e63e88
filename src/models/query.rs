use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use super::null_as_default;

pub const DEFAULT_VECTOR: &str = "[0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7, 0.8, 0.9, 1.0]";
pub const DEFAULT_KEY: &str = "doc123";
pub const DEFAULT_INDEX: &str = "products";
pub const DEFAULT_LIMIT: &str = "5";
pub const DEFAULT_THRESHOLD: &str = "0.7";

/// Tělo `POST /query`, rozlišené polem `type`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum QueryRequest {
    Vector {
        vector: Vec<f32>,
        index: String,
        limit: u32,
        threshold: f32,
    },
    Key {
        key: String,
        index: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    pub id: String,
    pub similarity: f64,
    #[serde(default)]
    pub metadata: Value,
}

impl QueryResult {
    pub fn similarity_formatted(&self) -> String {
        format!("{:.2}", self.similarity)
    }

    pub fn metadata_formatted(&self) -> String {
        match &self.metadata {
            Value::String(s) => s.clone(),
            Value::Null => String::new(),
            other => other.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub results: Vec<QueryResult>,
    #[serde(default)]
    pub execution_time: f64,
}

impl QueryResponse {
    pub fn execution_time_formatted(&self) -> String {
        format!("{}s", self.execution_time)
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum QueryFormError {
    #[error("Invalid vector: expected a JSON array of numbers")]
    InvalidVector,

    #[error("Invalid limit: {0}")]
    InvalidLimit(String),

    #[error("Invalid threshold: {0}")]
    InvalidThreshold(String),

    #[error("Index name is required")]
    MissingIndex,
}

/// Formulář query view (hodnoty tak, jak je poslal prohlížeč)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryForm {
    #[serde(default = "default_query_type")]
    pub query_type: String,
    #[serde(default = "default_vector")]
    pub vector: String,
    #[serde(default = "default_key")]
    pub key: String,
    #[serde(default = "default_index")]
    pub index: String,
    #[serde(default = "default_limit")]
    pub limit: String,
    #[serde(default = "default_threshold")]
    pub threshold: String,
}

fn default_query_type() -> String {
    "vector".to_string()
}

fn default_vector() -> String {
    DEFAULT_VECTOR.to_string()
}

fn default_key() -> String {
    DEFAULT_KEY.to_string()
}

fn default_index() -> String {
    DEFAULT_INDEX.to_string()
}

fn default_limit() -> String {
    DEFAULT_LIMIT.to_string()
}

fn default_threshold() -> String {
    DEFAULT_THRESHOLD.to_string()
}

impl Default for QueryForm {
    fn default() -> Self {
        Self {
            query_type: default_query_type(),
            vector: default_vector(),
            key: default_key(),
            index: default_index(),
            limit: default_limit(),
            threshold: default_threshold(),
        }
    }
}

impl QueryForm {
    pub fn is_key_search(&self) -> bool {
        self.query_type == "key"
    }

    /// Sestaví request podle zvoleného typu, při chybě se nic neodesílá
    pub fn to_request(&self) -> Result<QueryRequest, QueryFormError> {
        let index = self.index.trim();
        if index.is_empty() {
            return Err(QueryFormError::MissingIndex);
        }

        if self.is_key_search() {
            return Ok(QueryRequest::Key {
                key: self.key.clone(),
                index: index.to_string(),
            });
        }

        let vector: Vec<f32> = serde_json::from_str(self.vector.trim())
            .map_err(|_| QueryFormError::InvalidVector)?;

        let limit = self.limit.trim().parse::<u32>()
            .map_err(|_| QueryFormError::InvalidLimit(self.limit.clone()))?;

        let threshold = self.threshold.trim().parse::<f32>()
            .ok()
            .filter(|t| t.is_finite())
            .ok_or_else(|| QueryFormError::InvalidThreshold(self.threshold.clone()))?;

        Ok(QueryRequest::Vector {
            vector,
            index: index.to_string(),
            limit,
            threshold,
        })
    }
}

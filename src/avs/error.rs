use reqwest::StatusCode;
use thiserror::Error;

/// Chyby při komunikaci s AVS backendem
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Failed to create HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Backend unreachable: {0}")]
    Unreachable(#[source] reqwest::Error),

    #[error("Backend error ({status}): {body}")]
    Status { status: StatusCode, body: String },

    #[error("Empty response")]
    EmptyBody,

    #[error("Invalid JSON response: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl ApiError {
    /// Backend vůbec neodpověděl (síť, timeout, odmítnuté spojení)
    pub fn is_unreachable(&self) -> bool {
        matches!(self, ApiError::Unreachable(_))
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;

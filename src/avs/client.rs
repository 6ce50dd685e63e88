use reqwest::{multipart::Form, Client, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use std::time::Duration;

use super::error::{ApiError, Result};

/// HTTP klient pro AVS backend REST API
#[derive(Debug, Clone)]
pub struct AvsClient {
    base_url: String,
    client: Client,
}

impl AvsClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        // Ořízni trailing slash
        let base_url = base_url.trim_end_matches('/').to_string();

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ApiError::Client)?;

        Ok(Self { base_url, client })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// GET request s JSON odpovědí
    pub async fn get<T>(&self, path: &str) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = self.url(path);
        tracing::debug!("GET {}", url);

        let response = self.client.get(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(ApiError::Unreachable)?;

        self.handle_response(response).await
    }

    /// POST request s JSON tělem
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        if tracing::enabled!(tracing::Level::DEBUG) {
            let payload = serde_json::to_string(body).unwrap_or_default();
            tracing::debug!("POST {} body={}", url, payload);
        }

        let response = self.client.post(&url)
            .json(body)
            .send()
            .await
            .map_err(ApiError::Unreachable)?;

        self.handle_response(response).await
    }

    /// POST request s multipart formulářem (upload souborů)
    pub async fn post_multipart<T>(&self, path: &str, form: Form) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let url = self.url(path);
        tracing::debug!("POST {} (multipart)", url);

        let response = self.client.post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(ApiError::Unreachable)?;

        self.handle_response(response).await
    }

    /// Raw GET request - vrací status a text bez ohledu na status kód
    pub async fn get_text(&self, path: &str) -> Result<(StatusCode, String)> {
        let url = self.url(path);
        tracing::debug!("GET {} (raw)", url);

        let response = self.client.get(&url)
            .send()
            .await
            .map_err(ApiError::Unreachable)?;

        let status = response.status();
        let body = response.text().await
            .map_err(ApiError::Unreachable)?;

        tracing::debug!("{} -> {} body={}", url, status, body);
        Ok((status, body))
    }

    /// Health probe - true pokud backend odpoví 2xx
    pub async fn is_healthy(&self) -> bool {
        let url = self.url("/health");

        match self.client.get(&url).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                tracing::warn!("Backend health check failed: {}", e);
                false
            }
        }
    }

    async fn handle_response<T>(&self, response: reqwest::Response) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let status = response.status();
        let url = response.url().to_string();

        if !status.is_success() {
            let body = response.text().await
                .unwrap_or_else(|_| "Failed to read error response".to_string());
            return Err(ApiError::Status { status, body });
        }

        let text = response.text().await
            .map_err(ApiError::Unreachable)?;

        tracing::debug!("{} -> {} body={}", url, status, text);

        if text.trim().is_empty() {
            return Err(ApiError::EmptyBody);
        }

        Ok(serde_json::from_str(&text)?)
    }
}

use anyhow::{anyhow, Context, Result};
use reqwest::Url;
use std::time::Duration;

/// Výchozí adresa AVS backendu
pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";

/// Konfigurace konzole (sestavená z CLI argumentů / env proměnných)
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    pub api_url: String,
    pub request_timeout: Duration,
    pub cache_ttl: Duration,
    pub listen_addr: String,
}

impl ConsoleConfig {
    pub fn new(
        api_url: &str,
        timeout_secs: u64,
        cache_ttl_secs: u64,
        host: &str,
        port: u16,
    ) -> Result<Self> {
        let api_url = normalize_api_url(api_url)?;

        if timeout_secs == 0 {
            return Err(anyhow!("Request timeout must be at least 1 second"));
        }

        Ok(Self {
            api_url,
            request_timeout: Duration::from_secs(timeout_secs),
            cache_ttl: Duration::from_secs(cache_ttl_secs),
            listen_addr: format!("{}:{}", host, port),
        })
    }

    /// Vrací "host:port" backendu pro zobrazení v sidebaru
    pub fn api_host(&self) -> String {
        match Url::parse(&self.api_url) {
            Ok(url) => {
                let host = url.host_str().unwrap_or("unknown");
                match url.port_or_known_default() {
                    Some(port) => format!("{}:{}", host, port),
                    None => host.to_string(),
                }
            }
            Err(_) => self.api_url.clone(),
        }
    }
}

/// Ověří URL backendu a ořízne trailing slash
fn normalize_api_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim().trim_end_matches('/');

    let url = Url::parse(trimmed)
        .with_context(|| format!("Invalid API URL: {}", raw))?;

    match url.scheme() {
        "http" | "https" => Ok(trimmed.to_string()),
        other => Err(anyhow!("Unsupported API URL scheme: {}", other)),
    }
}

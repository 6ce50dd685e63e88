//! Pomocné funkce pro testy - stub AVS backend běžící v procesu

use axum::Router;
use std::sync::Arc;

use crate::config::ConsoleConfig;
use crate::handlers::AppState;

/// Spustí stub backend na náhodném portu, vrací base URL včetně `/api`
pub async fn spawn_backend(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub backend");
    let addr = listener.local_addr().expect("No local address");

    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("Stub backend failed");
    });

    format!("http://{}/api", addr)
}

/// Vrací URL, na které nic neposlouchá
pub async fn unreachable_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("No local address");
    drop(listener);

    format!("http://{}/api", addr)
}

/// Stav konzole napojený na zadaný backend
pub fn test_state(api_url: &str, cache_ttl_secs: u64) -> Arc<AppState> {
    let config = ConsoleConfig::new(api_url, 5, cache_ttl_secs, "127.0.0.1", 0)
        .expect("Invalid test config");
    Arc::new(AppState::new(config).expect("Failed to create state"))
}

//! Sdílený snapshot seznamů z backendu.
//!
//! Dashboard i list views čtou nody a indexy přes stejný snapshot, takže
//! v rámci TTL zobrazují stejná data. Souběžné požadavky čekají na jeden
//! běžící fetch. Chyby se nekešují.

use chrono::{DateTime, Utc};
use std::future::Future;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

use super::error::Result;

#[derive(Debug, Clone)]
pub struct Snapshot<T> {
    pub items: Vec<T>,
    pub fetched_at: DateTime<Utc>,
    taken: Instant,
}

impl<T> Snapshot<T> {
    fn new(items: Vec<T>) -> Self {
        Self {
            items,
            fetched_at: Utc::now(),
            taken: Instant::now(),
        }
    }
}

pub struct SnapshotCache<T> {
    ttl: Duration,
    slot: Mutex<Option<Snapshot<T>>>,
}

impl<T: Clone> SnapshotCache<T> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            slot: Mutex::new(None),
        }
    }

    /// Vrátí platný snapshot, nebo zavolá `fetch` a výsledek uloží
    pub async fn get_or_fetch<F, Fut>(&self, fetch: F) -> Result<Snapshot<T>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<T>>>,
    {
        // Zámek se drží i během fetch, tím se deduplikují souběžné požadavky
        let mut slot = self.slot.lock().await;

        if let Some(snapshot) = slot.as_ref() {
            if snapshot.taken.elapsed() < self.ttl {
                return Ok(snapshot.clone());
            }
        }

        let snapshot = Snapshot::new(fetch().await?);
        *slot = Some(snapshot.clone());
        Ok(snapshot)
    }

    pub async fn invalidate(&self) {
        *self.slot.lock().await = None;
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::null_as_default;
use crate::utils::{format_gb, format_number, parse_size_gb, status_badge_class};

/// Vektorový index tak, jak ho vrací `GET /indexes`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IndexInfo {
    pub name: String,
    pub namespace: String,
    pub set: String,
    pub field: String,
    pub dimensions: u32,
    pub distance_metric: String,
    pub mode: String,
    pub status: String,
    pub vector_records: u64,
    pub unmerged: u64,
    pub unmerged_percent: String, // backend posílá již naformátované
    pub size: String,             // např. "3.2 GB"
    pub storage: String,
    pub vertices: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub labels: BTreeMap<String, String>,
    #[serde(deserialize_with = "null_as_default")]
    pub parameters: BTreeMap<String, String>,
}

impl IndexInfo {
    pub fn size_gb(&self) -> f64 {
        parse_size_gb(&self.size)
    }

    pub fn vector_records_formatted(&self) -> String {
        format_number(self.vector_records)
    }

    pub fn status_badge(&self) -> &'static str {
        status_badge_class(&self.status)
    }

    /// Parametry indexu jako "klíč=hodnota" pro tooltip
    pub fn parameters_summary(&self) -> String {
        self.parameters.iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Součty pro patičku tabulky
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct IndexTotals {
    pub indexes: usize,
    pub vector_records: u64,
    pub size_gb: f64,
}

impl IndexTotals {
    pub fn from_rows(rows: &[IndexInfo]) -> Self {
        Self {
            indexes: rows.len(),
            vector_records: rows.iter().map(|i| i.vector_records).sum(),
            size_gb: rows.iter().map(IndexInfo::size_gb).sum(),
        }
    }

    pub fn vector_records_formatted(&self) -> String {
        format_number(self.vector_records)
    }

    pub fn size_formatted(&self) -> String {
        format_gb(self.size_gb)
    }
}

/// Unikátní namespace v pořadí prvního výskytu
pub fn namespaces(indexes: &[IndexInfo]) -> Vec<String> {
    let mut result: Vec<String> = Vec::new();
    for index in indexes {
        if !result.contains(&index.namespace) {
            result.push(index.namespace.clone());
        }
    }
    result
}

/// Vyfiltruje indexy podle namespace, `None` znamená všechny
pub fn filter_by_namespace(indexes: &[IndexInfo], namespace: Option<&str>) -> Vec<IndexInfo> {
    match namespace {
        Some(ns) => indexes.iter()
            .filter(|i| i.namespace == ns)
            .cloned()
            .collect(),
        None => indexes.to_vec(),
    }
}

#[derive(Debug, Serialize)]
pub struct IndexesListData {
    pub rows: Vec<IndexInfo>,
    pub namespaces: Vec<String>,
    pub active_namespace: Option<String>,
    pub totals: IndexTotals,     // přes zobrazené řádky
    pub all_totals: IndexTotals, // přes celý seznam
    pub fetched_at: DateTime<Utc>,
}

impl IndexesListData {
    pub fn new(indexes: &[IndexInfo], active_namespace: Option<String>, fetched_at: DateTime<Utc>) -> Self {
        let namespaces = namespaces(indexes);

        // Namespace, který už v seznamu není, se ignoruje
        let active_namespace = active_namespace.filter(|ns| namespaces.contains(ns));
        let rows = filter_by_namespace(indexes, active_namespace.as_deref());

        Self {
            totals: IndexTotals::from_rows(&rows),
            all_totals: IndexTotals::from_rows(indexes),
            rows,
            namespaces,
            active_namespace,
            fetched_at,
        }
    }

    pub fn is_filtered(&self) -> bool {
        self.active_namespace.is_some()
    }

    pub fn is_active(&self, namespace: &str) -> bool {
        self.active_namespace.as_deref() == Some(namespace)
    }

    pub fn fetched_at_formatted(&self) -> String {
        self.fetched_at.format("%H:%M:%S").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index(name: &str, namespace: &str, records: u64, size: &str) -> IndexInfo {
        IndexInfo {
            name: name.to_string(),
            namespace: namespace.to_string(),
            vector_records: records,
            size: size.to_string(),
            status: "READY".to_string(),
            ..Default::default()
        }
    }

    fn sample() -> Vec<IndexInfo> {
        vec![
            index("products", "test", 100, "1.5 GB"),
            index("images", "prod", 50, "512 MB"),
            index("docs", "test", 25, "N/A"),
        ]
    }

    #[test]
    fn test_deserialize_backend_payload() {
        let json = r#"{
            "name": "products",
            "namespace": "test",
            "set": "items",
            "field": "embedding",
            "dimensions": 128,
            "distanceMetric": "COSINE",
            "unmerged": 10,
            "vectorRecords": 100,
            "size": "3.2 GB",
            "unmergedPercent": "10.00%",
            "mode": "DISTRIBUTED",
            "status": "READY",
            "vertices": 4,
            "labels": {"team": "search"},
            "storage": "test/products-idx",
            "parameters": {"m": "16", "efConstruction": "100"}
        }"#;
        let index: IndexInfo = serde_json::from_str(json).unwrap();
        assert_eq!(index.dimensions, 128);
        assert_eq!(index.vector_records, 100);
        assert_eq!(index.unmerged_percent, "10.00%");
        assert_eq!(index.status_badge(), "bg-green-lt");
        assert_eq!(index.parameters_summary(), "efConstruction=100, m=16");
        assert!((index.size_gb() - 3.2).abs() < 1e-9);
    }

    #[test]
    fn test_partial_payload_uses_defaults() {
        let index: IndexInfo = serde_json::from_str(r#"{"name":"x"}"#).unwrap();
        assert_eq!(index.name, "x");
        assert_eq!(index.vector_records, 0);
        assert!(index.labels.is_empty());

        let index: IndexInfo = serde_json::from_str(r#"{"name":"x","labels":null,"parameters":null}"#).unwrap();
        assert!(index.labels.is_empty());
        assert_eq!(index.parameters_summary(), "");
    }

    #[test]
    fn test_namespaces_first_occurrence_order() {
        assert_eq!(namespaces(&sample()), vec!["test", "prod"]);
        assert!(namespaces(&[]).is_empty());
    }

    #[test]
    fn test_namespace_filter() {
        let all = sample();

        let test_rows = filter_by_namespace(&all, Some("test"));
        assert_eq!(test_rows.len(), 2);
        assert!(test_rows.iter().all(|i| i.namespace == "test"));

        assert_eq!(filter_by_namespace(&all, None), all);
        assert!(filter_by_namespace(&all, Some("missing")).is_empty());
    }

    #[test]
    fn test_list_totals_follow_filter() {
        let data = IndexesListData::new(&sample(), Some("test".to_string()), Utc::now());
        assert!(data.is_filtered());
        assert!(data.is_active("test"));
        assert_eq!(data.rows.len(), 2);
        assert_eq!(data.totals.vector_records, 125);
        assert!((data.totals.size_gb - 1.5).abs() < 1e-9);
        assert_eq!(data.all_totals.vector_records, 175);
        assert!((data.all_totals.size_gb - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_namespace_shows_all() {
        let data = IndexesListData::new(&sample(), Some("gone".to_string()), Utc::now());
        assert!(!data.is_filtered());
        assert_eq!(data.rows.len(), 3);
        assert_eq!(data.totals, data.all_totals);
    }
}

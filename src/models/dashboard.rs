use serde::Serialize;
use std::collections::HashMap;

use crate::models::{ClusterSnapshot, ConfigInfo, IndexInfo, Node};
use crate::utils::format_number;

/// Souhrnné statistiky indexů a nodů pro dashboard
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub total_vector_count: u64,
    pub total_unmerged: u64,
    pub total_unmerged_percent: f64,
    pub total_indexes: usize,
    pub mode_count: Vec<(String, usize)>,
    pub status_count: Vec<(String, usize)>,
    pub total_node_count: usize,
    pub node_roles: Vec<String>,
    pub server_version: String,
}

impl DashboardSummary {
    pub fn compute(indexes: &[IndexInfo], nodes: &[Node], cluster: Option<&ClusterSnapshot>) -> Self {
        let total_vector_count: u64 = indexes.iter().map(|i| i.vector_records).sum();
        let total_unmerged: u64 = indexes.iter().map(|i| i.unmerged).sum();

        Self {
            total_vector_count,
            total_unmerged,
            total_unmerged_percent: unmerged_percent(total_unmerged, total_vector_count),
            total_indexes: indexes.len(),
            mode_count: count_by(indexes, |i| i.mode.as_str()),
            status_count: count_by(indexes, |i| i.status.as_str()),
            total_node_count: nodes.len(),
            node_roles: distinct_roles(nodes),
            server_version: server_version(cluster, nodes),
        }
    }

    pub fn total_vector_count_formatted(&self) -> String {
        format_number(self.total_vector_count)
    }

    pub fn total_unmerged_formatted(&self) -> String {
        format_number(self.total_unmerged)
    }

    pub fn total_unmerged_percent_formatted(&self) -> String {
        format!("{:.2}%", self.total_unmerged_percent)
    }

    /// Počet indexů v daném módu, 0 pokud se mód nevyskytuje
    pub fn mode(&self, mode: &str) -> usize {
        lookup(&self.mode_count, mode)
    }

    pub fn status(&self, status: &str) -> usize {
        lookup(&self.status_count, status)
    }
}

/// Podíl nesloučených vektorů v procentech, 0 pro prázdný cluster
pub fn unmerged_percent(unmerged: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    unmerged as f64 / total as f64 * 100.0
}

/// Četnosti hodnot v pořadí prvního výskytu
pub fn count_by<T, F>(items: &[T], key: F) -> Vec<(String, usize)>
where
    F: Fn(&T) -> &str,
{
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();

    for item in items {
        let value = key(item);
        match positions.get(value) {
            Some(&pos) => counts[pos].1 += 1,
            None => {
                positions.insert(value, counts.len());
                counts.push((value.to_string(), 1));
            }
        }
    }

    counts
}

/// Unikátní role nodů v pořadí prvního výskytu
pub fn distinct_roles(nodes: &[Node]) -> Vec<String> {
    count_by(nodes, |n| n.role.as_str())
        .into_iter()
        .map(|(role, _)| role)
        .collect()
}

/// Verze serveru: verze hlášená clusterem, jinak verze prvního nodu, jinak "N/A"
pub fn server_version(cluster: Option<&ClusterSnapshot>, nodes: &[Node]) -> String {
    if let Some(version) = cluster.and_then(|c| c.reported_version()) {
        return version.to_string();
    }

    nodes.first()
        .map(|n| n.version.clone())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| "N/A".to_string())
}

fn lookup(counts: &[(String, usize)], key: &str) -> usize {
    counts.iter()
        .find(|(k, _)| k == key)
        .map(|(_, c)| *c)
        .unwrap_or(0)
}

/// Data pro dashboard panel
#[derive(Debug, Clone, Serialize)]
pub struct DashboardData {
    pub connected: bool,
    pub connection_error: Option<String>,
    pub connection: String,
    pub summary: DashboardSummary,
}

impl DashboardData {
    pub fn new(
        config: Option<&ConfigInfo>,
        connection_error: Option<String>,
        summary: DashboardSummary,
    ) -> Self {
        let connection = config
            .map(ConfigInfo::topology_label)
            .unwrap_or_else(|| "Not configured".to_string());

        Self {
            connected: connection_error.is_none(),
            connection_error,
            connection,
            summary,
        }
    }

    pub fn server_status(&self) -> &'static str {
        if self.connected { "Connected" } else { "Disconnected" }
    }
}

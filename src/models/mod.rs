pub mod cluster;
pub mod dashboard;
pub mod index;
pub mod node;
pub mod query;
pub mod security;

pub use cluster::{ClusterInfo, ClusterSnapshot, ConfigInfo, ConfigUpdate, UpdateResponse, UploadResponse};
pub use dashboard::{DashboardData, DashboardSummary};
pub use index::{IndexInfo, IndexesListData};
pub use node::Node;
pub use query::{QueryForm, QueryRequest, QueryResponse};
pub use security::{Feature, Role, User};

use serde::{Deserialize, Deserializer};

/// Backend posílá prázdné seznamy jako `null`, bere se jako výchozí hodnota
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

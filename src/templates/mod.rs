use askama::Template;

use crate::avs::Snapshot;
use crate::models::{
    ClusterSnapshot, ConfigInfo, DashboardData, Feature, IndexesListData, Node, QueryForm,
    QueryResponse, Role, User,
};

/// Údaje o clusteru v sidebaru
#[derive(Debug, Clone)]
pub struct Sidebar {
    pub api_host: String,
    pub live: bool,
    pub cluster: String,
    pub version: String,
    pub size: u32,
}

impl Sidebar {
    pub fn new(api_host: String, cluster: &ClusterSnapshot) -> Self {
        Self {
            api_host,
            live: cluster.live,
            cluster: cluster.info.active_cluster.clone(),
            version: cluster.info.version.clone(),
            size: cluster.info.cluster_size,
        }
    }

    pub fn status(&self) -> &'static str {
        if self.live { "Connected" } else { "Disconnected" }
    }
}

/// Dostupnost volitelných funkcí backendu
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Features {
    pub users: bool,
    pub roles: bool,
}

// Shared context pro všechny stránky
#[derive(Debug, Clone)]
pub struct PageContext {
    pub active_tab: &'static str,
    pub sidebar: Sidebar,
    pub features: Features,
}

impl PageContext {
    pub fn new(active_tab: &'static str, sidebar: Sidebar, features: Features) -> Self {
        Self { active_tab, sidebar, features }
    }
}

/// Stránka s panelem, který se načte přes HTMX po zobrazení
#[derive(Template)]
#[template(path = "view.html")]
pub struct ViewTemplate {
    pub ctx: PageContext,
    pub title: &'static str,
    pub description: &'static str,
    pub panel_url: String,
}

#[derive(Template)]
#[template(path = "dashboard_panel.html")]
pub struct DashboardPanelTemplate {
    pub data: DashboardData,
}

#[derive(Template)]
#[template(path = "nodes_table.html")]
pub struct NodesTableTemplate {
    pub state: Result<Snapshot<Node>, String>,
}

#[derive(Template)]
#[template(path = "indexes_table.html")]
pub struct IndexesTableTemplate {
    pub state: Result<IndexesListData, String>,
}

#[derive(Template)]
#[template(path = "users_table.html")]
pub struct UsersTableTemplate {
    pub feature: Feature<Vec<User>>,
}

#[derive(Template)]
#[template(path = "roles_table.html")]
pub struct RolesTableTemplate {
    pub feature: Feature<Vec<Role>>,
}

#[derive(Template)]
#[template(path = "config_panel.html")]
pub struct ConfigPanelTemplate {
    pub state: Result<ConfigInfo, String>,
}

/// Výsledek akce (update konfigurace, upload souboru)
#[derive(Template)]
#[template(path = "action_result.html")]
pub struct ActionResultTemplate {
    pub success: bool,
    pub message: String,
}

impl ActionResultTemplate {
    pub fn failure(message: impl Into<String>) -> Self {
        Self { success: false, message: message.into() }
    }

    /// Výsledek podle odpovědi backendu, prázdná zpráva se nahradí výchozí
    pub fn from_backend(success: bool, message: String, default_ok: &str) -> Self {
        let message = match (message.trim().is_empty(), success) {
            (false, _) => message,
            (true, true) => default_ok.to_string(),
            (true, false) => "Request failed".to_string(),
        };
        Self { success, message }
    }
}

#[derive(Template)]
#[template(path = "query.html")]
pub struct QueryTemplate {
    pub ctx: PageContext,
    pub form: QueryForm,
}

#[derive(Template)]
#[template(path = "query_results.html")]
pub struct QueryResultsTemplate {
    pub state: Result<QueryResponse, String>,
}

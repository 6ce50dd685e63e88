use serde::{Deserialize, Serialize};

use super::null_as_default;
use crate::utils::role_badge_class;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub roles: Vec<String>,
}

impl User {
    /// Role spolu s CSS třídou badge
    pub fn role_badges(&self) -> Vec<(&str, &'static str)> {
        self.roles.iter()
            .map(|role| (role.as_str(), role_badge_class(role)))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl Role {
    pub fn badge_class(&self) -> &'static str {
        role_badge_class(&self.name)
    }
}

/// Odpověď volitelné funkce backendu (users / roles).
/// `available = false` znamená, že funkce je na clusteru vypnutá,
/// prázdné `data` při `available = true` je prázdný seznam.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feature<T> {
    #[serde(default)]
    pub available: bool,
    pub data: Option<T>,
    #[serde(default)]
    pub error: Option<String>,
}

impl<T> Feature<T> {
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            available: false,
            data: None,
            error: Some(reason.into()),
        }
    }

    pub fn error_message(&self) -> &str {
        self.error.as_deref().unwrap_or("Feature not enabled on this cluster")
    }
}

impl<T> Feature<Vec<T>> {
    /// Řádky k zobrazení, prázdné pokud funkce není dostupná
    pub fn rows(&self) -> &[T] {
        match &self.data {
            Some(rows) if self.available => rows,
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_available_feature() {
        let json = r#"{"available":true,"data":[{"username":"admin","roles":["admin","read-write"]}]}"#;
        let feature: Feature<Vec<User>> = serde_json::from_str(json).unwrap();
        assert!(feature.available);
        assert_eq!(feature.rows().len(), 1);
        assert_eq!(feature.rows()[0].roles, vec!["admin", "read-write"]);
        assert_eq!(
            feature.rows()[0].role_badges(),
            vec![("admin", "bg-primary text-white"), ("read-write", "badge-outline text-secondary")]
        );
    }

    #[test]
    fn test_missing_available_defaults_to_false() {
        let json = r#"{"data":[{"name":"admin","description":"All access"}]}"#;
        let feature: Feature<Vec<Role>> = serde_json::from_str(json).unwrap();
        assert!(!feature.available);
        assert!(feature.rows().is_empty());
        assert_eq!(feature.error_message(), "Feature not enabled on this cluster");
    }

    #[test]
    fn test_available_but_empty() {
        let feature: Feature<Vec<Role>> = serde_json::from_str(r#"{"available":true}"#).unwrap();
        assert!(feature.available);
        assert!(feature.rows().is_empty());
        assert!(feature.error.is_none());
    }

    fn parse_feature<T: serde::de::DeserializeOwned>(json: &str) -> Feature<T> {
        serde_json::from_str(json).unwrap()
    }

    #[derive(Debug, Deserialize)]
    struct Session {
        id: String,
    }

    #[test]
    fn test_feature_payload_without_default() {
        let feature: Feature<Session> = parse_feature(r#"{"available":true,"data":{"id":"s1"}}"#);
        assert_eq!(feature.data.map(|s| s.id).as_deref(), Some("s1"));

        let feature: Feature<Session> = parse_feature(r#"{"available":true,"data":null}"#);
        assert!(feature.data.is_none());
    }

    #[test]
    fn test_null_roles() {
        let feature: Feature<Vec<User>> = parse_feature(r#"{"available":true,"data":[{"username":"guest","roles":null}]}"#);
        assert!(feature.rows()[0].roles.is_empty());
    }

    #[test]
    fn test_unavailable_constructor() {
        let feature: Feature<Vec<User>> = Feature::unavailable("Empty response");
        assert!(!feature.available);
        assert_eq!(feature.error.as_deref(), Some("Empty response"));
    }
}

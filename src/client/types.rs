use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::features::apps::models::{is_stale, AppStore, BusinessModel, DrugRating};

/// A catalog entry as the front end sees it: camelCase fields, parsed
/// timestamp, factor descriptions resolved
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogApp {
    pub id: Uuid,
    pub name: String,
    pub icon: String,
    pub store: AppStore,
    pub rating: DrugRating,
    pub description: String,
    pub category: String,
    pub developer: String,
    pub business_model: Option<BusinessModel>,
    pub factors: Vec<CatalogFactor>,
    pub last_updated: Option<DateTime<Utc>>,
}

impl CatalogApp {
    /// Stale means never updated, or last updated more than one calendar
    /// month before `now`
    pub fn is_stale(&self, now: DateTime<Utc>) -> bool {
        is_stale(self.last_updated, now)
    }

    /// Case-insensitive substring match over name, description, category and
    /// developer; mirrors the backend's search semantics for offline use
    pub fn matches_term(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.name.to_lowercase().contains(&term)
            || self.description.to_lowercase().contains(&term)
            || self.category.to_lowercase().contains(&term)
            || self.developer.to_lowercase().contains(&term)
    }
}

/// One factor flag on a catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogFactor {
    pub name: String,
    pub description: String,
    pub present: bool,
}

/// Factor presence as edited in a form: name plus flag, no description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactorPresence {
    pub name: String,
    pub present: bool,
}

/// A UI-shaped draft for create/update. The factor list is the complete
/// presence set; on update, anything omitted is treated as absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppDraft {
    pub name: String,
    pub developer: String,
    pub category: String,
    pub description: String,
    pub icon: String,
    pub store: AppStore,
    pub rating: DrugRating,
    pub business_model: Option<BusinessModel>,
    pub factors: Vec<FactorPresence>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notion() -> CatalogApp {
        CatalogApp {
            id: Uuid::new_v4(),
            name: "Notion".to_string(),
            icon: String::new(),
            store: AppStore::Both,
            rating: DrugRating::Tool,
            description: "All-in-one workspace".to_string(),
            category: "Productivity".to_string(),
            developer: "Notion Labs".to_string(),
            business_model: Some(BusinessModel::Freemium),
            factors: vec![],
            last_updated: None,
        }
    }

    #[test]
    fn search_matches_name_substring_case_insensitively() {
        assert!(notion().matches_term("note"));
        assert!(notion().matches_term("NOTION"));
        assert!(!notion().matches_term("doom"));
    }

    #[test]
    fn search_matches_other_descriptive_fields() {
        let app = notion();
        assert!(app.matches_term("workspace"));
        assert!(app.matches_term("productivity"));
        assert!(app.matches_term("labs"));
    }

    #[test]
    fn display_fields_are_camel_case() {
        let json = serde_json::to_value(notion()).unwrap();
        assert!(json.get("businessModel").is_some());
        assert!(json.get("lastUpdated").is_some());
        assert!(json.get("business_model").is_none());
    }
}

//! Client-side filtering of a fetched catalog collection.
//!
//! Filters apply in a fixed order: store first, then the rating threshold.
//! The rating filter is cumulative ("maximum addictiveness"): an app passes
//! when its rating sits at or below the threshold on the Tool..Drug scale.
//! Input order is preserved; there is no ranking.

use super::types::CatalogApp;
use crate::features::apps::models::{AppStore, DrugRating};

/// Store selection; `All` is the sentinel that keeps every channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoreFilter {
    #[default]
    All,
    Only(AppStore),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogFilter {
    pub store: StoreFilter,
    pub max_rating: DrugRating,
}

impl Default for CatalogFilter {
    fn default() -> Self {
        Self {
            store: StoreFilter::All,
            max_rating: DrugRating::Drug,
        }
    }
}

impl CatalogFilter {
    pub fn matches(&self, app: &CatalogApp) -> bool {
        if let StoreFilter::Only(store) = self.store {
            if app.store != store {
                return false;
            }
        }
        app.rating <= self.max_rating
    }

    /// Filter a collection, preserving input order
    pub fn apply<'a>(&self, apps: &'a [CatalogApp]) -> Vec<&'a CatalogApp> {
        apps.iter().filter(|app| self.matches(app)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::apps::models::BusinessModel;
    use uuid::Uuid;

    fn app(name: &str, store: AppStore, rating: DrugRating) -> CatalogApp {
        CatalogApp {
            id: Uuid::new_v4(),
            name: name.to_string(),
            icon: String::new(),
            store,
            rating,
            description: String::new(),
            category: "Test".to_string(),
            developer: "Test".to_string(),
            business_model: Some(BusinessModel::Unknown),
            factors: vec![],
            last_updated: None,
        }
    }

    #[test]
    fn rating_threshold_is_cumulative() {
        let apps = vec![
            app("a", AppStore::Both, DrugRating::Tool),
            app("b", AppStore::Both, DrugRating::Sugar),
            app("c", AppStore::Both, DrugRating::Drug),
        ];

        let filter = CatalogFilter {
            store: StoreFilter::All,
            max_rating: DrugRating::Coffee,
        };
        let kept = filter.apply(&apps);

        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].name, "a");
        assert_eq!(kept[1].name, "b");
    }

    #[test]
    fn default_filter_keeps_everything() {
        let apps = vec![
            app("a", AppStore::AppleAppStore, DrugRating::Tool),
            app("b", AppStore::GooglePlay, DrugRating::Drug),
        ];
        assert_eq!(CatalogFilter::default().apply(&apps).len(), 2);
    }

    #[test]
    fn store_filter_applies_before_rating() {
        let apps = vec![
            app("a", AppStore::AppleAppStore, DrugRating::Tool),
            app("b", AppStore::GooglePlay, DrugRating::Tool),
            app("c", AppStore::Both, DrugRating::Tool),
        ];

        let filter = CatalogFilter {
            store: StoreFilter::Only(AppStore::GooglePlay),
            max_rating: DrugRating::Drug,
        };
        let kept = filter.apply(&apps);

        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].name, "b");
    }

    #[test]
    fn input_order_is_preserved() {
        let apps = vec![
            app("z", AppStore::Both, DrugRating::Tool),
            app("a", AppStore::Both, DrugRating::Tool),
            app("m", AppStore::Both, DrugRating::Tool),
        ];
        let kept = CatalogFilter::default().apply(&apps);
        let names: Vec<&str> = kept.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["z", "a", "m"]);
    }
}

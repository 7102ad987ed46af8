//! Wire representations of the backend's snake_case store format, and the
//! exact bidirectional mapping to the camelCase display types.
//!
//! `business_model` ↔ `businessModel`; `last_updated` (RFC 3339 string on
//! the wire) ↔ `lastUpdated` (parsed timestamp), stamped with "now" on every
//! write.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::types::{AppDraft, CatalogApp, CatalogFactor, FactorPresence};
use crate::features::apps::models::{AppStore, BusinessModel, DrugRating};

/// The backend's response envelope. `message` and `errors` carry the failure
/// detail surfaced through `ClientError::Remote`.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub data: Option<T>,
    pub message: Option<String>,
    #[serde(default)]
    pub errors: Option<Vec<String>>,
}

/// App as read off the wire
#[derive(Debug, Clone, Deserialize)]
pub struct WireApp {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub icon: String,
    pub store: AppStore,
    pub rating: DrugRating,
    #[serde(default)]
    pub description: String,
    pub category: String,
    pub developer: String,
    #[serde(default)]
    pub business_model: Option<BusinessModel>,
    #[serde(default)]
    pub last_updated: Option<String>,
    #[serde(default)]
    pub factors: Vec<WireFactor>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WireFactor {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub present: bool,
}

impl WireApp {
    pub fn into_catalog(self) -> CatalogApp {
        CatalogApp {
            id: self.id,
            name: self.name,
            icon: self.icon,
            store: self.store,
            rating: self.rating,
            description: self.description,
            category: self.category,
            developer: self.developer,
            business_model: self.business_model,
            factors: self
                .factors
                .into_iter()
                .map(|f| CatalogFactor {
                    name: f.name,
                    description: f.description,
                    present: f.present,
                })
                .collect(),
            last_updated: self.last_updated.as_deref().and_then(parse_timestamp),
        }
    }
}

/// App as written to the wire on create/update. `id` is present only for
/// update; `last_updated` is stamped with "now" on every write (the server
/// stamps its own regardless).
#[derive(Debug, Clone, Serialize)]
pub struct WireAppWrite {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    pub name: String,
    pub icon: String,
    pub store: AppStore,
    pub rating: DrugRating,
    pub description: String,
    pub category: String,
    pub developer: String,
    pub business_model: BusinessModel,
    pub last_updated: String,
    pub factors: Vec<WireFactorWrite>,
}

#[derive(Debug, Clone, Serialize)]
pub struct WireFactorWrite {
    pub name: String,
    pub present: bool,
}

impl WireAppWrite {
    pub fn from_draft(id: Option<Uuid>, draft: &AppDraft, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: draft.name.clone(),
            icon: draft.icon.clone(),
            store: draft.store,
            rating: draft.rating,
            description: draft.description.clone(),
            category: draft.category.clone(),
            developer: draft.developer.clone(),
            business_model: draft.business_model.unwrap_or_default(),
            last_updated: now.to_rfc3339(),
            factors: draft
                .factors
                .iter()
                .map(|f| WireFactorWrite {
                    name: f.name.clone(),
                    present: f.present,
                })
                .collect(),
        }
    }
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

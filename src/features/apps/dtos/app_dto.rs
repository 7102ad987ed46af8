use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::{Validate, ValidateUrl, ValidationError};

use crate::features::apps::models::{
    is_stale, AppFactorRow, AppStore, AppWithFactors, BusinessModel, DrugRating,
};

/// Query params for listing apps
#[derive(Debug, Deserialize, IntoParams)]
pub struct ListAppsQuery {
    /// Case-insensitive substring matched against name, description,
    /// category and developer
    pub search: Option<String>,
}

/// One factor flag on an app, with its description resolved from the
/// reference catalog
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FactorDto {
    pub name: String,
    pub description: String,
    pub present: bool,
}

impl From<AppFactorRow> for FactorDto {
    fn from(row: AppFactorRow) -> Self {
        Self {
            name: row.name,
            description: row.description,
            present: row.present,
        }
    }
}

/// Factor presence as submitted on create/update. Descriptions are never
/// written per-app; they live in the reference catalog only.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FactorPresenceDto {
    pub name: String,
    #[serde(default)]
    pub present: bool,
}

/// Response DTO for a catalog entry
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AppResponseDto {
    pub id: Uuid,
    pub name: String,
    pub icon: String,
    pub store: AppStore,
    pub rating: DrugRating,
    pub description: String,
    pub category: String,
    pub developer: String,
    pub business_model: BusinessModel,
    pub store_app_id: Option<String>,
    pub last_updated: Option<DateTime<Utc>>,
    /// Derived: true when `last_updated` is absent or more than one calendar
    /// month before read time
    pub is_stale: bool,
    pub factors: Vec<FactorDto>,
}

impl AppResponseDto {
    pub fn from_model(model: AppWithFactors, now: DateTime<Utc>) -> Self {
        let AppWithFactors { app, factors } = model;
        Self {
            id: app.id,
            name: app.name,
            icon: app.icon.unwrap_or_default(),
            store: app.store,
            rating: app.rating,
            description: app.description.unwrap_or_default(),
            category: app.category,
            developer: app.developer,
            business_model: BusinessModel::from_column(app.business_model.as_deref()),
            store_app_id: app.store_app_id,
            is_stale: is_stale(app.last_updated, now),
            last_updated: app.last_updated,
            factors: factors.into_iter().map(Into::into).collect(),
        }
    }
}

/// Request DTO for creating an app. The server assigns the id and stamps
/// `last_updated`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateAppDto {
    #[validate(length(min = 2, message = "App name must be at least 2 characters"))]
    pub name: String,

    #[validate(length(min = 2, message = "Developer name is required"))]
    pub developer: String,

    #[validate(length(min = 2, message = "Category is required"))]
    pub category: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    #[validate(custom(function = "validate_icon_url"))]
    pub icon: String,

    pub store: AppStore,

    pub rating: DrugRating,

    #[serde(default)]
    pub business_model: BusinessModel,

    #[serde(default)]
    pub store_app_id: Option<String>,

    /// Full factor presence list; a factor omitted here is stored as absent
    #[serde(default)]
    pub factors: Vec<FactorPresenceDto>,
}

impl CreateAppDto {
    /// Factor names must be unique within one app
    pub fn ensure_unique_factor_names(&self) -> Result<(), String> {
        ensure_unique_factor_names(&self.factors)
    }
}

/// Request DTO for the full-replace update. The body id must match the path
/// id; the entire factor set is replaced, not merged.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateAppDto {
    pub id: Uuid,

    #[validate(length(min = 2, message = "App name must be at least 2 characters"))]
    pub name: String,

    #[validate(length(min = 2, message = "Developer name is required"))]
    pub developer: String,

    #[validate(length(min = 2, message = "Category is required"))]
    pub category: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    #[validate(custom(function = "validate_icon_url"))]
    pub icon: String,

    pub store: AppStore,

    pub rating: DrugRating,

    #[serde(default)]
    pub business_model: BusinessModel,

    #[serde(default)]
    pub store_app_id: Option<String>,

    #[serde(default)]
    pub factors: Vec<FactorPresenceDto>,
}

impl UpdateAppDto {
    pub fn ensure_unique_factor_names(&self) -> Result<(), String> {
        ensure_unique_factor_names(&self.factors)
    }
}

/// Icons are either empty (no icon) or a well-formed URL
fn validate_icon_url(icon: &str) -> Result<(), ValidationError> {
    if icon.is_empty() || icon.validate_url() {
        return Ok(());
    }
    let mut err = ValidationError::new("url");
    err.message = Some("Icon must be empty or a valid URL".into());
    Err(err)
}

fn ensure_unique_factor_names(factors: &[FactorPresenceDto]) -> Result<(), String> {
    let mut seen = HashSet::new();
    for factor in factors {
        if !seen.insert(factor.name.as_str()) {
            return Err(format!("Duplicate factor name: '{}'", factor.name));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::apps::models::AppRow;

    fn sample_dto(factors: Vec<FactorPresenceDto>) -> CreateAppDto {
        CreateAppDto {
            name: "Notion".to_string(),
            developer: "Notion Labs".to_string(),
            category: "Productivity".to_string(),
            description: String::new(),
            icon: String::new(),
            store: AppStore::Both,
            rating: DrugRating::Tool,
            business_model: BusinessModel::Subscription,
            store_app_id: None,
            factors,
        }
    }

    #[test]
    fn short_name_fails_validation() {
        let mut dto = sample_dto(vec![]);
        dto.name = "N".to_string();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn icon_must_be_empty_or_a_url() {
        let mut dto = sample_dto(vec![]);
        assert!(dto.validate().is_ok());

        dto.icon = "not a url at all".to_string();
        assert!(dto.validate().is_err());

        dto.icon = "https://example.com/notion.png".to_string();
        assert!(dto.validate().is_ok());

        let update = UpdateAppDto {
            id: Uuid::new_v4(),
            name: dto.name,
            developer: dto.developer,
            category: dto.category,
            description: dto.description,
            icon: "nope".to_string(),
            store: dto.store,
            rating: dto.rating,
            business_model: dto.business_model,
            store_app_id: None,
            factors: vec![],
        };
        assert!(update.validate().is_err());
    }

    #[test]
    fn duplicate_factor_names_are_rejected() {
        let dto = sample_dto(vec![
            FactorPresenceDto {
                name: "Infinite Scroll".to_string(),
                present: true,
            },
            FactorPresenceDto {
                name: "Infinite Scroll".to_string(),
                present: false,
            },
        ]);
        assert!(dto.validate().is_ok());
        assert!(dto.ensure_unique_factor_names().is_err());
    }

    #[test]
    fn null_business_model_reads_as_unknown() {
        let model = AppWithFactors {
            app: AppRow {
                id: Uuid::new_v4(),
                name: "Notion".to_string(),
                icon: None,
                store: AppStore::Both,
                rating: DrugRating::Tool,
                description: None,
                category: "Productivity".to_string(),
                developer: "Notion Labs".to_string(),
                business_model: None,
                last_updated: None,
                store_app_id: None,
            },
            factors: vec![],
        };
        let dto = AppResponseDto::from_model(model, Utc::now());
        assert_eq!(dto.business_model, BusinessModel::Unknown);
        assert!(dto.is_stale);
        assert_eq!(dto.icon, "");
    }

    #[test]
    fn response_wire_fields_are_snake_case() {
        let model = AppWithFactors {
            app: AppRow {
                id: Uuid::new_v4(),
                name: "Notion".to_string(),
                icon: None,
                store: AppStore::Both,
                rating: DrugRating::Tool,
                description: None,
                category: "Productivity".to_string(),
                developer: "Notion Labs".to_string(),
                business_model: Some("Subscription".to_string()),
                last_updated: Some(Utc::now()),
                store_app_id: None,
            },
            factors: vec![],
        };
        let json = serde_json::to_value(AppResponseDto::from_model(model, Utc::now())).unwrap();
        assert!(json.get("business_model").is_some());
        assert!(json.get("last_updated").is_some());
        assert!(json.get("businessModel").is_none());
    }
}

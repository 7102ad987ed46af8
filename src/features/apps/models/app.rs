use chrono::{DateTime, Months, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use super::{AppStore, DrugRating};

/// Database model for a catalog entry
#[derive(Debug, Clone, FromRow)]
pub struct AppRow {
    pub id: Uuid,
    pub name: String,
    pub icon: Option<String>,
    pub store: AppStore,
    pub rating: DrugRating,
    pub description: Option<String>,
    pub category: String,
    pub developer: String,
    pub business_model: Option<String>,
    pub last_updated: Option<DateTime<Utc>>,
    pub store_app_id: Option<String>,
}

/// Database model for one per-app factor flag.
///
/// `description` is joined in from `factor_definitions` on read; it is never
/// stored on the row itself.
#[derive(Debug, Clone, FromRow)]
pub struct AppFactorRow {
    pub app_id: Uuid,
    pub name: String,
    pub description: String,
    pub present: bool,
}

/// An app together with its factor flags, as returned by the repository
#[derive(Debug, Clone)]
pub struct AppWithFactors {
    pub app: AppRow,
    pub factors: Vec<AppFactorRow>,
}

/// An app is stale when it has never been updated or its last update is more
/// than one calendar month before `now`.
pub fn is_stale(last_updated: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
    match last_updated {
        None => true,
        Some(ts) => match now.checked_sub_months(Months::new(1)) {
            Some(cutoff) => ts < cutoff,
            None => false,
        },
    }
}

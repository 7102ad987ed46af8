use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Distribution channel of an app
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "app_store")]
pub enum AppStore {
    #[serde(rename = "Apple App Store")]
    #[sqlx(rename = "Apple App Store")]
    AppleAppStore,
    #[serde(rename = "Google Play")]
    #[sqlx(rename = "Google Play")]
    GooglePlay,
    Both,
}

impl AppStore {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppStore::AppleAppStore => "Apple App Store",
            AppStore::GooglePlay => "Google Play",
            AppStore::Both => "Both",
        }
    }
}

impl fmt::Display for AppStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppStore {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Apple App Store" => Ok(AppStore::AppleAppStore),
            "Google Play" => Ok(AppStore::GooglePlay),
            "Both" => Ok(AppStore::Both),
            other => Err(format!("Unknown app store: '{}'", other)),
        }
    }
}

/// Addictiveness rating on the five-point drug scale.
///
/// Variant order is the scale order, so the derived `Ord` gives
/// `Tool < Sugar < Coffee < Alcohol < Drug`. The rating-threshold filter
/// relies on this.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
#[sqlx(type_name = "drug_rating")]
pub enum DrugRating {
    Tool,
    Sugar,
    Coffee,
    Alcohol,
    Drug,
}

impl DrugRating {
    /// All ratings in scale order, least to most addictive
    pub const ALL: [DrugRating; 5] = [
        DrugRating::Tool,
        DrugRating::Sugar,
        DrugRating::Coffee,
        DrugRating::Alcohol,
        DrugRating::Drug,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DrugRating::Tool => "Tool",
            DrugRating::Sugar => "Sugar",
            DrugRating::Coffee => "Coffee",
            DrugRating::Alcohol => "Alcohol",
            DrugRating::Drug => "Drug",
        }
    }
}

impl fmt::Display for DrugRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DrugRating {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Tool" => Ok(DrugRating::Tool),
            "Sugar" => Ok(DrugRating::Sugar),
            "Coffee" => Ok(DrugRating::Coffee),
            "Alcohol" => Ok(DrugRating::Alcohol),
            "Drug" => Ok(DrugRating::Drug),
            other => Err(format!("Unknown rating: '{}'", other)),
        }
    }
}

/// Monetization model of an app.
///
/// Stored as plain text in the `apps.business_model` column (nullable);
/// a missing value reads back as [`BusinessModel::Unknown`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum BusinessModel {
    #[serde(rename = "Pay Once")]
    PayOnce,
    Subscription,
    Freemium,
    Advertising,
    #[serde(rename = "In-App Purchases")]
    InAppPurchases,
    #[default]
    Unknown,
}

impl BusinessModel {
    pub fn as_str(&self) -> &'static str {
        match self {
            BusinessModel::PayOnce => "Pay Once",
            BusinessModel::Subscription => "Subscription",
            BusinessModel::Freemium => "Freemium",
            BusinessModel::Advertising => "Advertising",
            BusinessModel::InAppPurchases => "In-App Purchases",
            BusinessModel::Unknown => "Unknown",
        }
    }

    /// Lenient parse for values read back from the text column; anything
    /// unrecognized maps to `Unknown` rather than failing the read.
    pub fn from_column(value: Option<&str>) -> Self {
        value
            .and_then(|s| s.parse().ok())
            .unwrap_or(BusinessModel::Unknown)
    }
}

impl fmt::Display for BusinessModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BusinessModel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pay Once" => Ok(BusinessModel::PayOnce),
            "Subscription" => Ok(BusinessModel::Subscription),
            "Freemium" => Ok(BusinessModel::Freemium),
            "Advertising" => Ok(BusinessModel::Advertising),
            "In-App Purchases" => Ok(BusinessModel::InAppPurchases),
            "Unknown" => Ok(BusinessModel::Unknown),
            other => Err(format!("Unknown business model: '{}'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_scale_is_ordered() {
        assert!(DrugRating::Tool < DrugRating::Sugar);
        assert!(DrugRating::Sugar < DrugRating::Coffee);
        assert!(DrugRating::Coffee < DrugRating::Alcohol);
        assert!(DrugRating::Alcohol < DrugRating::Drug);
    }

    #[test]
    fn rating_serializes_to_scale_labels() {
        for rating in DrugRating::ALL {
            let json = serde_json::to_string(&rating).unwrap();
            assert_eq!(json, format!("\"{}\"", rating.as_str()));
            let back: DrugRating = serde_json::from_str(&json).unwrap();
            assert_eq!(back, rating);
        }
    }

    #[test]
    fn store_labels_round_trip() {
        for store in [AppStore::AppleAppStore, AppStore::GooglePlay, AppStore::Both] {
            let json = serde_json::to_string(&store).unwrap();
            assert_eq!(json, format!("\"{}\"", store.as_str()));
            assert_eq!(store.as_str().parse::<AppStore>().unwrap(), store);
        }
    }

    #[test]
    fn business_model_column_reads_are_lenient() {
        assert_eq!(
            BusinessModel::from_column(Some("Pay Once")),
            BusinessModel::PayOnce
        );
        assert_eq!(BusinessModel::from_column(None), BusinessModel::Unknown);
        assert_eq!(
            BusinessModel::from_column(Some("garbage")),
            BusinessModel::Unknown
        );
    }
}

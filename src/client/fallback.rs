//! Built-in demo dataset served when no backend is configured or a read
//! fails in transit. Ids are fixed so repeated reads stay stable within a
//! session.

use uuid::Uuid;

use super::types::{CatalogApp, CatalogFactor};
use crate::features::apps::models::{AppStore, BusinessModel, DrugRating};

fn factor(name: &str, description: &str, present: bool) -> CatalogFactor {
    CatalogFactor {
        name: name.to_string(),
        description: description.to_string(),
        present,
    }
}

/// The demo catalog: a small spread across the rating scale and both stores
pub fn fallback_apps() -> Vec<CatalogApp> {
    vec![
        CatalogApp {
            id: Uuid::from_u128(0xA001),
            name: "Notion".to_string(),
            icon: "https://img.icons8.com/color/96/notion.png".to_string(),
            store: AppStore::Both,
            rating: DrugRating::Tool,
            description: "All-in-one workspace for notes, docs and project management."
                .to_string(),
            category: "Productivity".to_string(),
            developer: "Notion Labs".to_string(),
            business_model: Some(BusinessModel::Freemium),
            factors: vec![
                factor(
                    "Push Notifications",
                    "Unprompted interruptions engineered to pull the user back into the app.",
                    false,
                ),
                factor(
                    "Infinite Scroll",
                    "Content feed has no natural stopping point.",
                    false,
                ),
            ],
            last_updated: None,
        },
        CatalogApp {
            id: Uuid::from_u128(0xA002),
            name: "Duolingo".to_string(),
            icon: "https://img.icons8.com/color/96/duolingo-logo.png".to_string(),
            store: AppStore::Both,
            rating: DrugRating::Coffee,
            description: "Gamified language learning with streaks and leagues.".to_string(),
            category: "Education".to_string(),
            developer: "Duolingo Inc.".to_string(),
            business_model: Some(BusinessModel::Freemium),
            factors: vec![
                factor(
                    "Streaks",
                    "Loss-framed daily counters that punish missing a day.",
                    true,
                ),
                factor(
                    "Push Notifications",
                    "Unprompted interruptions engineered to pull the user back into the app.",
                    true,
                ),
                factor(
                    "Variable Rewards",
                    "Unpredictable payoffs on a slot-machine schedule.",
                    true,
                ),
            ],
            last_updated: None,
        },
        CatalogApp {
            id: Uuid::from_u128(0xA003),
            name: "Headspace".to_string(),
            icon: "https://img.icons8.com/color/96/headspace.png".to_string(),
            store: AppStore::Both,
            rating: DrugRating::Sugar,
            description: "Guided meditation and sleep sounds.".to_string(),
            category: "Health & Fitness".to_string(),
            developer: "Headspace Inc.".to_string(),
            business_model: Some(BusinessModel::Subscription),
            factors: vec![factor(
                "Streaks",
                "Loss-framed daily counters that punish missing a day.",
                true,
            )],
            last_updated: None,
        },
        CatalogApp {
            id: Uuid::from_u128(0xA004),
            name: "YouTube".to_string(),
            icon: "https://img.icons8.com/color/96/youtube-play.png".to_string(),
            store: AppStore::Both,
            rating: DrugRating::Alcohol,
            description: "Video platform with an autoplaying recommendation feed.".to_string(),
            category: "Entertainment".to_string(),
            developer: "Google".to_string(),
            business_model: Some(BusinessModel::Advertising),
            factors: vec![
                factor(
                    "Autoplay",
                    "The next piece of content starts without being asked for.",
                    true,
                ),
                factor(
                    "Infinite Scroll",
                    "Content feed has no natural stopping point.",
                    true,
                ),
                factor(
                    "Business Model: Advertising",
                    "Revenue scales with attention captured.",
                    true,
                ),
            ],
            last_updated: None,
        },
        CatalogApp {
            id: Uuid::from_u128(0xA005),
            name: "TikTok".to_string(),
            icon: "https://img.icons8.com/color/96/tiktok.png".to_string(),
            store: AppStore::Both,
            rating: DrugRating::Drug,
            description: "Short-form video feed tuned for session length.".to_string(),
            category: "Social".to_string(),
            developer: "ByteDance".to_string(),
            business_model: Some(BusinessModel::Advertising),
            factors: vec![
                factor(
                    "Infinite Scroll",
                    "Content feed has no natural stopping point.",
                    true,
                ),
                factor(
                    "Variable Rewards",
                    "Unpredictable payoffs on a slot-machine schedule.",
                    true,
                ),
                factor(
                    "Autoplay",
                    "The next piece of content starts without being asked for.",
                    true,
                ),
                factor(
                    "Business Model: Advertising",
                    "Revenue scales with attention captured.",
                    true,
                ),
            ],
            last_updated: None,
        },
        CatalogApp {
            id: Uuid::from_u128(0xA006),
            name: "Signal".to_string(),
            icon: "https://img.icons8.com/color/96/signal-app.png".to_string(),
            store: AppStore::GooglePlay,
            rating: DrugRating::Tool,
            description: "Private messenger with no engagement machinery.".to_string(),
            category: "Communication".to_string(),
            developer: "Signal Foundation".to_string(),
            business_model: Some(BusinessModel::Unknown),
            factors: vec![factor(
                "Push Notifications",
                "Unprompted interruptions engineered to pull the user back into the app.",
                true,
            )],
            last_updated: None,
        },
    ]
}

//! Terminal catalog browser: fetches the catalog through the data-access
//! client, applies the store/rating filters client-side, and prints cards.
//!
//! Configure the backend with SAP_STORE_URL and SAP_STORE_KEY; without them
//! the browser runs against the built-in demo dataset.
//!
//! Usage:
//!   sap-browse [--search TERM] [--store STORE] [--max-rating RATING]

use chrono::Utc;
use swiss_army_phone::client::{
    CatalogClient, CatalogClientConfig, CatalogFilter, StoreFilter,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

struct Args {
    search: Option<String>,
    filter: CatalogFilter,
}

fn parse_args() -> anyhow::Result<Args> {
    let mut search = None;
    let mut filter = CatalogFilter::default();

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--search" => {
                search = Some(
                    args.next()
                        .ok_or_else(|| anyhow::anyhow!("--search requires a term"))?,
                );
            }
            "--store" => {
                let value = args
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--store requires a value"))?;
                filter.store = if value == "All" {
                    StoreFilter::All
                } else {
                    StoreFilter::Only(value.parse().map_err(|e: String| anyhow::anyhow!(e))?)
                };
            }
            "--max-rating" => {
                let value = args
                    .next()
                    .ok_or_else(|| anyhow::anyhow!("--max-rating requires a value"))?;
                filter.max_rating = value.parse().map_err(|e: String| anyhow::anyhow!(e))?;
            }
            "--help" | "-h" => {
                println!("Usage: sap-browse [--search TERM] [--store STORE] [--max-rating RATING]");
                std::process::exit(0);
            }
            other => anyhow::bail!("Unknown argument: '{}'", other),
        }
    }

    Ok(Args { search, filter })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = parse_args()?;

    let client = CatalogClient::new(CatalogClientConfig::from_env());
    if client.is_demo() {
        eprintln!("(demo mode: no backend configured, showing built-in dataset)\n");
    }

    let apps = match &args.search {
        Some(term) => client.search_apps(term).await,
        None => client.list_apps().await,
    };

    let now = Utc::now();
    let visible = args.filter.apply(&apps);

    for app in &visible {
        let present: Vec<&str> = app
            .factors
            .iter()
            .filter(|f| f.present)
            .map(|f| f.name.as_str())
            .collect();
        let stale = if app.is_stale(now) { "  [stale]" } else { "" };

        println!("{} — {} [{}]{}", app.name, app.developer, app.rating, stale);
        println!("  {} | {}", app.category, app.store);
        if !app.description.is_empty() {
            println!("  {}", app.description);
        }
        if !present.is_empty() {
            println!("  factors: {}", present.join(", "));
        }
        println!();
    }

    println!(
        "Showing {} {}",
        visible.len(),
        if visible.len() == 1 { "app" } else { "apps" }
    );

    Ok(())
}

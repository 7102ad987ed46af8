//! Catalog client: the data-access layer a front end uses against a hosted
//! catalog backend.
//!
//! The client speaks the backend's snake_case wire format and exposes
//! camelCase display types ([`types::CatalogApp`]). When no backend is
//! configured, or a read fails in transit, reads degrade to a built-in demo
//! dataset ([`fallback`]) instead of surfacing the failure; writes never
//! degrade. Filtering of the fetched collection is client-side
//! ([`filter`]).

pub mod catalog_client;
pub mod fallback;
pub mod filter;
pub mod types;
pub mod wire;

pub use catalog_client::{CatalogClient, CatalogClientConfig, ClientError};
pub use filter::{CatalogFilter, StoreFilter};
pub use types::{AppDraft, CatalogApp, CatalogFactor, FactorPresence};

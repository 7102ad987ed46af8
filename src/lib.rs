//! Swiss Army Phone: a catalog of mobile apps and their digital-wellbeing
//! characteristics (addictiveness rating, monetization model, behavioral
//! factors).
//!
//! The crate ships two binaries built on the same library:
//!
//! - `swiss-army-phone`: the catalog backend, an axum HTTP server over a
//!   Postgres store.
//! - `sap-browse`: a terminal catalog browser built on [`client`], which can
//!   also run against a built-in demo dataset when no backend is configured.

pub mod client;
pub mod core;
pub mod features;
pub mod shared;

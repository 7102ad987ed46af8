//! Factor reference catalog: the canonical set of behavioral/business
//! characteristics an app can be flagged with. Seeded by migration and
//! read-only at runtime; per-app presence flags reference these by name.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::FactorsService;

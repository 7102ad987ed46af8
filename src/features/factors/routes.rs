use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::factors::handlers;
use crate::features::factors::services::FactorsService;

/// Create routes for the factor reference catalog
pub fn routes(service: Arc<FactorsService>) -> Router {
    Router::new()
        .route("/api/factors", get(handlers::list_factors))
        .with_state(service)
}

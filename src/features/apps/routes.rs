use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::apps::handlers;
use crate::features::apps::services::AppsService;

/// Create routes for the app catalog feature
pub fn routes(service: Arc<AppsService>) -> Router {
    Router::new()
        .route(
            "/api/apps",
            post(handlers::create_app).get(handlers::list_apps),
        )
        .route(
            "/api/apps/{id}",
            get(handlers::get_app)
                .put(handlers::update_app)
                .delete(handlers::delete_app),
        )
        .with_state(service)
}

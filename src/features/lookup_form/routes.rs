use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::lookup_form::handlers;
use crate::features::ruc::services::RucService;

/// Create routes for the lookup page
pub fn routes(service: Arc<RucService>) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .with_state(service)
}

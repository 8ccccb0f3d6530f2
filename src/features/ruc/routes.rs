use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::ruc::handlers;
use crate::features::ruc::services::RucService;

/// Create routes for the RUC lookup proxy
pub fn routes(service: Arc<RucService>) -> Router {
    Router::new()
        .route("/api/ruc", get(handlers::get_ruc))
        .with_state(service)
}

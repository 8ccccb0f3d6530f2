use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

use crate::features::ruc::{dtos as ruc_dtos, handlers as ruc_handlers};
use crate::shared::types::ErrorResponse;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Consulta RUC",
        description = "Lookup of Peruvian taxpayer registry (SUNAT) data by RUC"
    ),
    paths(ruc_handlers::get_ruc),
    components(schemas(ruc_dtos::RucResponseDto, ErrorResponse)),
    tags(
        (name = "ruc", description = "RUC lookup proxy")
    )
)]
pub struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Route serving the OpenAPI document
pub fn routes() -> Router {
    Router::new().route("/api-docs/openapi.json", get(openapi_json))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum_test::TestServer;
    use serde_json::Value;

    #[test]
    fn test_document_lists_ruc_path() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/api/ruc"));
    }

    #[tokio::test]
    async fn test_document_is_served() {
        let server = TestServer::new(routes()).unwrap();

        let response = server.get("/api-docs/openapi.json").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert!(body["paths"]["/api/ruc"]["get"].is_object());
        assert!(body["components"]["schemas"]["RucResponseDto"].is_object());
    }
}

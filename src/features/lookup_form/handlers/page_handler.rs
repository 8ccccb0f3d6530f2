use std::sync::Arc;

use axum::{extract::State, response::Html};

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppQuery;
use crate::features::lookup_form::dtos::{PageQuery, PageView};
use crate::features::lookup_form::models::{LookupForm, LookupOutcome};
use crate::features::ruc::services::RucService;
use crate::shared::templates::render_template;

const PAGE_TEMPLATE: &str = "pages/index.html.jinja";

/// Lookup page.
///
/// Without `numero` the empty form is rendered. With `numero` (a plain form
/// submission) the form state machine runs here: the input is sanitized,
/// validated, looked up and the page comes back in its error or result state.
pub async fn index(
    State(service): State<Arc<RucService>>,
    AppQuery(pairs): AppQuery<Vec<(String, String)>>,
) -> Result<Html<String>> {
    let query = PageQuery::from_pairs(pairs);
    let mut form = LookupForm::new();

    if let Some(raw) = query.numero {
        form.input(&raw);
        if let Some(submission) = form.submit() {
            let outcome = match service.lookup(&submission.ruc).await {
                Ok(record) => LookupOutcome::Found(record),
                Err(e) => LookupOutcome::Rejected(e.client_message()),
            };
            form.resolve(submission.token, outcome);
        }
    }

    render_page(&form)
}

pub fn render_page(form: &LookupForm) -> Result<Html<String>> {
    let view = PageView::from(form);
    render_template(PAGE_TEMPLATE, &view)
        .map(Html)
        .map_err(|e| AppError::Internal(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::RegistryConfig;
    use crate::features::lookup_form::routes;
    use crate::shared::constants::{MSG_FORM_INVALID_RUC, MSG_LOOKUP_FAILED, MSG_NOT_FOUND};
    use axum_test::TestServer;
    use httpmock::prelude::*;
    use serde_json::json;

    fn test_server(base_url: &str) -> TestServer {
        let config = RegistryConfig::new(base_url).unwrap();
        let service = Arc::new(RucService::new(&config).unwrap());
        TestServer::new(routes::routes(service)).unwrap()
    }

    #[tokio::test]
    async fn test_idle_page() {
        let server = test_server("http://127.0.0.1:1");

        let response = server.get("/").await;

        response.assert_status_ok();
        let html = response.text();
        assert!(html.contains("<title>Consulta RUC SUNAT - Perú</title>"));
        assert!(html.contains(r#"data-state="idle""#));
        assert!(html.contains("Buscar"));
        assert!(html.contains(r#"id="result" class="result" hidden"#));
    }

    #[tokio::test]
    async fn test_submission_is_sanitized_and_looked_up() {
        let upstream = MockServer::start_async().await;
        let mock = upstream
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/v2/sunat/ruc/full")
                    .query_param("numero", "12345678901");
                then.status(200).json_body(json!({
                    "numeroDocumento": "12345678901",
                    "nombre": "ACME <S.A.C.>",
                    "estado": "ACTIVO",
                    "condicion": "HABIDO"
                }));
            })
            .await;
        let server = test_server(&upstream.base_url());

        let response = server
            .get("/")
            .add_query_param("numero", "12a3!456789012")
            .await;

        response.assert_status_ok();
        let html = response.text();
        assert!(html.contains(r#"data-state="result""#));
        assert!(html.contains(r#"value="12345678901""#));
        assert!(html.contains("ACME &lt;S.A.C.&gt;"));
        assert!(html.contains(r#"class="value tone-positive" data-field="estado""#));
        assert!(html.contains("No disponible"));
        mock.assert_hits_async(1).await;
    }

    #[tokio::test]
    async fn test_repeated_numero_renders_page_for_first_value() {
        let upstream = MockServer::start_async().await;
        let mock = upstream
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/v2/sunat/ruc/full")
                    .query_param("numero", "20100070970");
                then.status(200).json_body(json!({ "nombre": "ACME S.A.C." }));
            })
            .await;
        let server = test_server(&upstream.base_url());

        let response = server.get("/?numero=20100070970&numero=x").await;

        response.assert_status_ok();
        let html = response.text();
        assert!(html.contains(r#"data-state="result""#));
        assert!(html.contains("ACME S.A.C."));
        mock.assert_hits_async(1).await;
    }

    #[tokio::test]
    async fn test_short_submission_shows_validation_error() {
        let upstream = MockServer::start_async().await;
        let mock = upstream
            .mock_async(|when, then| {
                when.method(GET).path("/v2/sunat/ruc/full");
                then.status(200).json_body(json!({}));
            })
            .await;
        let server = test_server(&upstream.base_url());

        let response = server.get("/").add_query_param("numero", "2010").await;

        let html = response.text();
        assert!(html.contains(r#"data-state="error""#));
        assert!(html.contains(&format!("<p>{}</p>", MSG_FORM_INVALID_RUC)));
        mock.assert_hits_async(0).await;
    }

    #[tokio::test]
    async fn test_upstream_not_found_is_shown() {
        let upstream = MockServer::start_async().await;
        upstream
            .mock_async(|when, then| {
                when.method(GET).path("/v2/sunat/ruc/full");
                then.status(404);
            })
            .await;
        let server = test_server(&upstream.base_url());

        let response = server
            .get("/")
            .add_query_param("numero", "20100070970")
            .await;

        response.assert_status_ok();
        let html = response.text();
        assert!(html.contains(r#"data-state="error""#));
        assert!(html.contains(&format!("<p>{}</p>", MSG_NOT_FOUND)));
    }

    #[tokio::test]
    async fn test_transport_failure_renders_error_state() {
        let server = test_server("http://127.0.0.1:1");

        let response = server
            .get("/")
            .add_query_param("numero", "20100070970")
            .await;

        response.assert_status_ok();
        let html = response.text();
        assert!(html.contains(r#"data-state="error""#));
        assert!(html.contains(&format!("<p>{}</p>", MSG_LOOKUP_FAILED)));
    }
}

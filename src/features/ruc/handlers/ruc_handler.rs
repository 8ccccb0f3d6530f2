use std::sync::Arc;

use axum::{extract::State, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppQuery;
use crate::features::ruc::dtos::{RucQuery, RucResponseDto};
use crate::features::ruc::services::RucService;
use crate::shared::constants::MSG_INVALID_RUC;
use crate::shared::types::ErrorResponse;

/// Look up a taxpayer by RUC
///
/// Proxies the external SUNAT registry and reshapes its answer into the
/// canonical field set. Fields the registry leaves empty read "No disponible".
#[utoipa::path(
    get,
    path = "/api/ruc",
    params(RucQuery),
    responses(
        (status = 200, description = "Taxpayer registry data", body = RucResponseDto),
        (status = 400, description = "RUC missing or not 11 characters", body = ErrorResponse),
        (status = 404, description = "Registry has no data for this RUC", body = ErrorResponse),
        (status = 500, description = "Registry could not be queried", body = ErrorResponse)
    ),
    tag = "ruc"
)]
pub async fn get_ruc(
    State(service): State<Arc<RucService>>,
    AppQuery(pairs): AppQuery<Vec<(String, String)>>,
) -> Result<Json<RucResponseDto>> {
    let query = RucQuery::from_pairs(pairs);
    query
        .validate()
        .map_err(|_| AppError::Validation(MSG_INVALID_RUC.to_string()))?;
    let ruc = query
        .numero
        .ok_or_else(|| AppError::Validation(MSG_INVALID_RUC.to_string()))?;

    let record = service.lookup(&ruc).await?;
    Ok(Json(record.into()))
}

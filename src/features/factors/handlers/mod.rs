use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::features::factors::dtos::FactorDefinitionDto;
use crate::features::factors::services::FactorsService;
use crate::shared::types::ApiResponse;

/// List the canonical factor definitions
#[utoipa::path(
    get,
    path = "/api/factors",
    responses(
        (status = 200, description = "List of factor definitions", body = ApiResponse<Vec<FactorDefinitionDto>>),
    ),
    tag = "factors"
)]
pub async fn list_factors(
    State(service): State<Arc<FactorsService>>,
) -> Result<Json<ApiResponse<Vec<FactorDefinitionDto>>>> {
    let factors = service.list().await?;
    Ok(Json(ApiResponse::success(Some(factors), None, None)))
}

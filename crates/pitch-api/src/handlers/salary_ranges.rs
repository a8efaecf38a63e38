//! Salary range handlers (admin only)

use axum::{extract::State, Json};
use pitch_service::dto::{SalaryRangeRequest, SalaryRangeResponse};
use pitch_service::SalaryRangeService;

use crate::extractors::{AdminUser, IdPath, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// GET /api/salary-ranges
pub async fn list(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> ApiResult<Json<Vec<SalaryRangeResponse>>> {
    let service = SalaryRangeService::new(state.service_context());
    Ok(Json(service.list().await?))
}

/// GET /api/salary-ranges/:id
pub async fn get(
    State(state): State<AppState>,
    _admin: AdminUser,
    IdPath(id): IdPath,
) -> ApiResult<Json<SalaryRangeResponse>> {
    let service = SalaryRangeService::new(state.service_context());
    Ok(Json(service.get(id).await?))
}

/// POST /api/salary-ranges
pub async fn create(
    State(state): State<AppState>,
    _admin: AdminUser,
    ValidatedJson(request): ValidatedJson<SalaryRangeRequest>,
) -> ApiResult<Created<Json<SalaryRangeResponse>>> {
    let service = SalaryRangeService::new(state.service_context());
    Ok(Created(Json(service.create(request).await?)))
}

/// PUT /api/salary-ranges/:id
pub async fn update(
    State(state): State<AppState>,
    _admin: AdminUser,
    IdPath(id): IdPath,
    ValidatedJson(request): ValidatedJson<SalaryRangeRequest>,
) -> ApiResult<Json<SalaryRangeResponse>> {
    let service = SalaryRangeService::new(state.service_context());
    Ok(Json(service.update(id, request).await?))
}

/// DELETE /api/salary-ranges/:id
pub async fn delete(
    State(state): State<AppState>,
    _admin: AdminUser,
    IdPath(id): IdPath,
) -> ApiResult<NoContent> {
    let service = SalaryRangeService::new(state.service_context());
    service.delete(id).await?;
    Ok(NoContent)
}

//! Problem report handlers

use axum::{extract::State, Json};
use pitch_service::dto::{CreateProblemRequest, ProblemResponse};
use pitch_service::{ExportService, ProblemService};

use crate::extractors::{AdminUser, AuthUser, IdPath, ValidatedJson};
use crate::response::{ApiResult, Created, CsvFile, NoContent};
use crate::state::AppState;

/// GET /api/problems
pub async fn list_all(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> ApiResult<Json<Vec<ProblemResponse>>> {
    let service = ProblemService::new(state.service_context());
    Ok(Json(service.list_all().await?))
}

/// GET /api/problems/solved
pub async fn list_solved(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> ApiResult<Json<Vec<ProblemResponse>>> {
    let service = ProblemService::new(state.service_context());
    Ok(Json(service.list_by_solved(true).await?))
}

/// GET /api/problems/unsolved
pub async fn list_unsolved(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> ApiResult<Json<Vec<ProblemResponse>>> {
    let service = ProblemService::new(state.service_context());
    Ok(Json(service.list_by_solved(false).await?))
}

/// GET /api/problems/:id
pub async fn get(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath,
) -> ApiResult<Json<ProblemResponse>> {
    let service = ProblemService::new(state.service_context());
    Ok(Json(service.get(auth.actor(), id).await?))
}

/// POST /api/problems
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateProblemRequest>,
) -> ApiResult<Created<Json<ProblemResponse>>> {
    let service = ProblemService::new(state.service_context());
    let response = service.create(auth.actor(), request).await?;
    Ok(Created(Json(response)))
}

/// PUT /api/problems/:id/solve
pub async fn solve(
    State(state): State<AppState>,
    _admin: AdminUser,
    IdPath(id): IdPath,
) -> ApiResult<Json<ProblemResponse>> {
    let service = ProblemService::new(state.service_context());
    Ok(Json(service.solve(id).await?))
}

/// DELETE /api/problems/:id
pub async fn delete(
    State(state): State<AppState>,
    _admin: AdminUser,
    IdPath(id): IdPath,
) -> ApiResult<NoContent> {
    let service = ProblemService::new(state.service_context());
    service.delete(id).await?;
    Ok(NoContent)
}

/// GET /api/problems/export
pub async fn export(State(state): State<AppState>, _admin: AdminUser) -> ApiResult<CsvFile> {
    let service = ExportService::new(state.service_context());
    Ok(CsvFile(service.problems().await?))
}

//! Club history handlers
//!
//! Career records of players, each with its achievements.

use axum::{extract::State, Json};
use pitch_service::dto::{ClubHistoryRequest, ClubHistoryResponse};
use pitch_service::{ClubHistoryService, ExportService};

use crate::extractors::{AdminUser, AuthUser, IdPath, RegularUser, ValidatedJson};
use crate::response::{ApiResult, Created, CsvFile, NoContent};
use crate::state::AppState;

/// GET /api/club-history
pub async fn list_all(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> ApiResult<Json<Vec<ClubHistoryResponse>>> {
    let service = ClubHistoryService::new(state.service_context());
    Ok(Json(service.list_all().await?))
}

/// GET /api/club-history/:id
pub async fn get(
    State(state): State<AppState>,
    _auth: AuthUser,
    IdPath(id): IdPath,
) -> ApiResult<Json<ClubHistoryResponse>> {
    let service = ClubHistoryService::new(state.service_context());
    Ok(Json(service.get(id).await?))
}

/// POST /api/club-history
pub async fn create(
    State(state): State<AppState>,
    user: RegularUser,
    ValidatedJson(request): ValidatedJson<ClubHistoryRequest>,
) -> ApiResult<Created<Json<ClubHistoryResponse>>> {
    let service = ClubHistoryService::new(state.service_context());
    let response = service.create(user.actor(), request).await?;
    Ok(Created(Json(response)))
}

/// PUT /api/club-history/:id
pub async fn update(
    State(state): State<AppState>,
    user: RegularUser,
    IdPath(id): IdPath,
    ValidatedJson(request): ValidatedJson<ClubHistoryRequest>,
) -> ApiResult<Json<ClubHistoryResponse>> {
    let service = ClubHistoryService::new(state.service_context());
    Ok(Json(service.update(user.actor(), id, request).await?))
}

/// Removes the record together with its achievements
///
/// DELETE /api/club-history/:id
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath,
) -> ApiResult<NoContent> {
    let service = ClubHistoryService::new(state.service_context());
    service.delete(auth.actor(), id).await?;
    Ok(NoContent)
}

/// GET /api/club-history/export
pub async fn export(State(state): State<AppState>, _admin: AdminUser) -> ApiResult<CsvFile> {
    let service = ExportService::new(state.service_context());
    Ok(CsvFile(service.club_history().await?))
}

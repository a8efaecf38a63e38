//! Club advertisement handlers

use axum::{extract::State, Json};
use pitch_service::dto::{ClubAdvertisementRequest, ClubAdvertisementResponse};
use pitch_service::{ClubAdvertisementService, ExportService};

use crate::extractors::{AdminUser, AuthUser, IdPath, RegularUser, ValidatedJson};
use crate::response::{ApiResult, Created, CsvFile, NoContent};
use crate::state::AppState;

/// GET /api/club-advertisements
pub async fn list_all(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> ApiResult<Json<Vec<ClubAdvertisementResponse>>> {
    let service = ClubAdvertisementService::new(state.service_context());
    Ok(Json(service.list_all().await?))
}

/// GET /api/club-advertisements/active
pub async fn list_active(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> ApiResult<Json<Vec<ClubAdvertisementResponse>>> {
    let service = ClubAdvertisementService::new(state.service_context());
    Ok(Json(service.list_active().await?))
}

/// GET /api/club-advertisements/:id
pub async fn get(
    State(state): State<AppState>,
    _auth: AuthUser,
    IdPath(id): IdPath,
) -> ApiResult<Json<ClubAdvertisementResponse>> {
    let service = ClubAdvertisementService::new(state.service_context());
    Ok(Json(service.get(id).await?))
}

/// Publish a club's search for a player, open for 30 days
///
/// POST /api/club-advertisements
pub async fn create(
    State(state): State<AppState>,
    user: RegularUser,
    ValidatedJson(request): ValidatedJson<ClubAdvertisementRequest>,
) -> ApiResult<Created<Json<ClubAdvertisementResponse>>> {
    let service = ClubAdvertisementService::new(state.service_context());
    let response = service.create(user.actor(), request).await?;
    Ok(Created(Json(response)))
}

/// PUT /api/club-advertisements/:id
pub async fn update(
    State(state): State<AppState>,
    user: RegularUser,
    IdPath(id): IdPath,
    ValidatedJson(request): ValidatedJson<ClubAdvertisementRequest>,
) -> ApiResult<Json<ClubAdvertisementResponse>> {
    let service = ClubAdvertisementService::new(state.service_context());
    Ok(Json(service.update(user.actor(), id, request).await?))
}

/// PUT /api/club-advertisements/:id/renew
pub async fn renew(
    State(state): State<AppState>,
    user: RegularUser,
    IdPath(id): IdPath,
) -> ApiResult<Json<ClubAdvertisementResponse>> {
    let service = ClubAdvertisementService::new(state.service_context());
    Ok(Json(service.renew(user.actor(), id).await?))
}

/// Remove the advertisement with its offers, favorites and salary range
///
/// DELETE /api/club-advertisements/:id
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath,
) -> ApiResult<NoContent> {
    let service = ClubAdvertisementService::new(state.service_context());
    service.delete(auth.actor(), id).await?;
    Ok(NoContent)
}

/// GET /api/club-advertisements/export
pub async fn export(State(state): State<AppState>, _admin: AdminUser) -> ApiResult<CsvFile> {
    let service = ExportService::new(state.service_context());
    Ok(CsvFile(service.club_advertisements().await?))
}

//! Player advertisement handlers

use axum::{extract::State, Json};
use pitch_service::dto::{PlayerAdvertisementRequest, PlayerAdvertisementResponse};
use pitch_service::{ExportService, PlayerAdvertisementService};

use crate::extractors::{AdminUser, AuthUser, IdPath, RegularUser, ValidatedJson};
use crate::response::{ApiResult, Created, CsvFile, NoContent};
use crate::state::AppState;

/// GET /api/player-advertisements
pub async fn list_all(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> ApiResult<Json<Vec<PlayerAdvertisementResponse>>> {
    let service = PlayerAdvertisementService::new(state.service_context());
    Ok(Json(service.list_all().await?))
}

/// GET /api/player-advertisements/active
pub async fn list_active(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> ApiResult<Json<Vec<PlayerAdvertisementResponse>>> {
    let service = PlayerAdvertisementService::new(state.service_context());
    Ok(Json(service.list_active().await?))
}

/// GET /api/player-advertisements/:id
pub async fn get(
    State(state): State<AppState>,
    _auth: AuthUser,
    IdPath(id): IdPath,
) -> ApiResult<Json<PlayerAdvertisementResponse>> {
    let service = PlayerAdvertisementService::new(state.service_context());
    Ok(Json(service.get(id).await?))
}

/// Publish an advertisement for 30 days
///
/// POST /api/player-advertisements
pub async fn create(
    State(state): State<AppState>,
    user: RegularUser,
    ValidatedJson(request): ValidatedJson<PlayerAdvertisementRequest>,
) -> ApiResult<Created<Json<PlayerAdvertisementResponse>>> {
    let service = PlayerAdvertisementService::new(state.service_context());
    let response = service.create(user.actor(), request).await?;
    Ok(Created(Json(response)))
}

/// PUT /api/player-advertisements/:id
pub async fn update(
    State(state): State<AppState>,
    user: RegularUser,
    IdPath(id): IdPath,
    ValidatedJson(request): ValidatedJson<PlayerAdvertisementRequest>,
) -> ApiResult<Json<PlayerAdvertisementResponse>> {
    let service = PlayerAdvertisementService::new(state.service_context());
    Ok(Json(service.update(user.actor(), id, request).await?))
}

/// Extend the end date to 30 days from now
///
/// PUT /api/player-advertisements/:id/renew
pub async fn renew(
    State(state): State<AppState>,
    user: RegularUser,
    IdPath(id): IdPath,
) -> ApiResult<Json<PlayerAdvertisementResponse>> {
    let service = PlayerAdvertisementService::new(state.service_context());
    Ok(Json(service.renew(user.actor(), id).await?))
}

/// DELETE /api/player-advertisements/:id
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath,
) -> ApiResult<NoContent> {
    let service = PlayerAdvertisementService::new(state.service_context());
    service.delete(auth.actor(), id).await?;
    Ok(NoContent)
}

/// GET /api/player-advertisements/export
pub async fn export(State(state): State<AppState>, _admin: AdminUser) -> ApiResult<CsvFile> {
    let service = ExportService::new(state.service_context());
    Ok(CsvFile(service.player_advertisements().await?))
}

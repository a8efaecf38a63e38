//! Lookup table handlers
//!
//! Player positions and feet are readable by anyone and managed by admins.
//! Offer statuses are fixed and read-only.

use axum::{extract::State, Json};
use pitch_service::dto::{
    OfferStatusResponse, PlayerFootRequest, PlayerFootResponse, PlayerPositionRequest,
    PlayerPositionResponse,
};
use pitch_service::LookupService;

use crate::extractors::{AdminUser, IdPath, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

// ============================================================================
// Player positions
// ============================================================================

/// GET /api/player-positions
pub async fn list_positions(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<PlayerPositionResponse>>> {
    let service = LookupService::new(state.service_context());
    Ok(Json(service.list_positions().await?))
}

/// GET /api/player-positions/:id
pub async fn get_position(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> ApiResult<Json<PlayerPositionResponse>> {
    let service = LookupService::new(state.service_context());
    Ok(Json(service.get_position(id).await?))
}

/// POST /api/player-positions
pub async fn create_position(
    State(state): State<AppState>,
    _admin: AdminUser,
    ValidatedJson(request): ValidatedJson<PlayerPositionRequest>,
) -> ApiResult<Created<Json<PlayerPositionResponse>>> {
    let service = LookupService::new(state.service_context());
    Ok(Created(Json(service.create_position(request).await?)))
}

/// PUT /api/player-positions/:id
pub async fn update_position(
    State(state): State<AppState>,
    _admin: AdminUser,
    IdPath(id): IdPath,
    ValidatedJson(request): ValidatedJson<PlayerPositionRequest>,
) -> ApiResult<Json<PlayerPositionResponse>> {
    let service = LookupService::new(state.service_context());
    Ok(Json(service.update_position(id, request).await?))
}

/// Refused with 409 while any advertisement, offer or career record uses it
///
/// DELETE /api/player-positions/:id
pub async fn delete_position(
    State(state): State<AppState>,
    _admin: AdminUser,
    IdPath(id): IdPath,
) -> ApiResult<NoContent> {
    let service = LookupService::new(state.service_context());
    service.delete_position(id).await?;
    Ok(NoContent)
}

// ============================================================================
// Player feet
// ============================================================================

/// GET /api/player-feet
pub async fn list_feet(State(state): State<AppState>) -> ApiResult<Json<Vec<PlayerFootResponse>>> {
    let service = LookupService::new(state.service_context());
    Ok(Json(service.list_feet().await?))
}

/// GET /api/player-feet/:id
pub async fn get_foot(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> ApiResult<Json<PlayerFootResponse>> {
    let service = LookupService::new(state.service_context());
    Ok(Json(service.get_foot(id).await?))
}

/// POST /api/player-feet
pub async fn create_foot(
    State(state): State<AppState>,
    _admin: AdminUser,
    ValidatedJson(request): ValidatedJson<PlayerFootRequest>,
) -> ApiResult<Created<Json<PlayerFootResponse>>> {
    let service = LookupService::new(state.service_context());
    Ok(Created(Json(service.create_foot(request).await?)))
}

/// PUT /api/player-feet/:id
pub async fn update_foot(
    State(state): State<AppState>,
    _admin: AdminUser,
    IdPath(id): IdPath,
    ValidatedJson(request): ValidatedJson<PlayerFootRequest>,
) -> ApiResult<Json<PlayerFootResponse>> {
    let service = LookupService::new(state.service_context());
    Ok(Json(service.update_foot(id, request).await?))
}

/// DELETE /api/player-feet/:id
pub async fn delete_foot(
    State(state): State<AppState>,
    _admin: AdminUser,
    IdPath(id): IdPath,
) -> ApiResult<NoContent> {
    let service = LookupService::new(state.service_context());
    service.delete_foot(id).await?;
    Ok(NoContent)
}

// ============================================================================
// Offer statuses
// ============================================================================

/// GET /api/offer-statuses
pub async fn list_offer_statuses(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<OfferStatusResponse>>> {
    let service = LookupService::new(state.service_context());
    Ok(Json(service.list_offer_statuses().await?))
}

/// GET /api/offer-statuses/:id
pub async fn get_offer_status(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> ApiResult<Json<OfferStatusResponse>> {
    let service = LookupService::new(state.service_context());
    Ok(Json(service.get_offer_status(id).await?))
}

//! Player offer handlers
//!
//! A player's offer on a club advertisement.

use axum::{extract::State, Json};
use pitch_service::dto::{CreatePlayerOfferRequest, PlayerOfferResponse};
use pitch_service::{ExportService, PlayerOfferService};

use crate::extractors::{AdminUser, AuthUser, IdPath, RegularUser, ValidatedJson};
use crate::response::{ApiResult, Created, CsvFile, NoContent};
use crate::state::AppState;

/// GET /api/player-offers
pub async fn list_all(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> ApiResult<Json<Vec<PlayerOfferResponse>>> {
    let service = PlayerOfferService::new(state.service_context());
    Ok(Json(service.list_all().await?))
}

/// Visible to the sender, the advertisement owner and admins
///
/// GET /api/player-offers/:id
pub async fn get(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath,
) -> ApiResult<Json<PlayerOfferResponse>> {
    let service = PlayerOfferService::new(state.service_context());
    Ok(Json(service.get(auth.actor(), id).await?))
}

/// POST /api/player-offers
pub async fn create(
    State(state): State<AppState>,
    user: RegularUser,
    ValidatedJson(request): ValidatedJson<CreatePlayerOfferRequest>,
) -> ApiResult<Created<Json<PlayerOfferResponse>>> {
    let service = PlayerOfferService::new(state.service_context());
    let response = service.create(user.actor(), request).await?;
    Ok(Created(Json(response)))
}

/// PUT /api/player-offers/:id/accept
pub async fn accept(
    State(state): State<AppState>,
    user: RegularUser,
    IdPath(id): IdPath,
) -> ApiResult<Json<PlayerOfferResponse>> {
    let service = PlayerOfferService::new(state.service_context());
    Ok(Json(service.accept(user.actor(), id).await?))
}

/// PUT /api/player-offers/:id/reject
pub async fn reject(
    State(state): State<AppState>,
    user: RegularUser,
    IdPath(id): IdPath,
) -> ApiResult<Json<PlayerOfferResponse>> {
    let service = PlayerOfferService::new(state.service_context());
    Ok(Json(service.reject(user.actor(), id).await?))
}

/// DELETE /api/player-offers/:id
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath,
) -> ApiResult<NoContent> {
    let service = PlayerOfferService::new(state.service_context());
    service.delete(auth.actor(), id).await?;
    Ok(NoContent)
}

/// GET /api/player-offers/export
pub async fn export(State(state): State<AppState>, _admin: AdminUser) -> ApiResult<CsvFile> {
    let service = ExportService::new(state.service_context());
    Ok(CsvFile(service.player_offers().await?))
}

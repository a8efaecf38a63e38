//! Club offer handlers
//!
//! A club member's offer on a player advertisement.

use axum::{extract::State, Json};
use pitch_service::dto::{ClubOfferResponse, CreateClubOfferRequest};
use pitch_service::{ClubOfferService, ExportService};

use crate::extractors::{AdminUser, AuthUser, IdPath, RegularUser, ValidatedJson};
use crate::response::{ApiResult, Created, CsvFile, NoContent};
use crate::state::AppState;

/// GET /api/club-offers
pub async fn list_all(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> ApiResult<Json<Vec<ClubOfferResponse>>> {
    let service = ClubOfferService::new(state.service_context());
    Ok(Json(service.list_all().await?))
}

/// Visible to the sender, the advertisement owner and admins
///
/// GET /api/club-offers/:id
pub async fn get(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath,
) -> ApiResult<Json<ClubOfferResponse>> {
    let service = ClubOfferService::new(state.service_context());
    Ok(Json(service.get(auth.actor(), id).await?))
}

/// POST /api/club-offers
pub async fn create(
    State(state): State<AppState>,
    user: RegularUser,
    ValidatedJson(request): ValidatedJson<CreateClubOfferRequest>,
) -> ApiResult<Created<Json<ClubOfferResponse>>> {
    let service = ClubOfferService::new(state.service_context());
    let response = service.create(user.actor(), request).await?;
    Ok(Created(Json(response)))
}

/// PUT /api/club-offers/:id/accept
pub async fn accept(
    State(state): State<AppState>,
    user: RegularUser,
    IdPath(id): IdPath,
) -> ApiResult<Json<ClubOfferResponse>> {
    let service = ClubOfferService::new(state.service_context());
    Ok(Json(service.accept(user.actor(), id).await?))
}

/// PUT /api/club-offers/:id/reject
pub async fn reject(
    State(state): State<AppState>,
    user: RegularUser,
    IdPath(id): IdPath,
) -> ApiResult<Json<ClubOfferResponse>> {
    let service = ClubOfferService::new(state.service_context());
    Ok(Json(service.reject(user.actor(), id).await?))
}

/// DELETE /api/club-offers/:id
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(id): IdPath,
) -> ApiResult<NoContent> {
    let service = ClubOfferService::new(state.service_context());
    service.delete(auth.actor(), id).await?;
    Ok(NoContent)
}

/// GET /api/club-offers/export
pub async fn export(State(state): State<AppState>, _admin: AdminUser) -> ApiResult<CsvFile> {
    let service = ExportService::new(state.service_context());
    Ok(CsvFile(service.club_offers().await?))
}

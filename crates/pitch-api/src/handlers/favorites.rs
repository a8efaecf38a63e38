//! Favorite advertisement handlers
//!
//! `/api/favorite-player-advertisements` and `/api/favorite-club-advertisements`
//! share one implementation keyed by [`AdvertisementKind`].

use axum::{extract::State, Json};
use pitch_core::{AdvertisementKind, Snowflake};
use pitch_service::dto::{CreateFavoriteRequest, FavoriteCheckResponse, FavoriteResponse};
use pitch_service::FavoriteService;

use crate::extractors::{IdPath, RegularUser, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

async fn add(
    state: &AppState,
    user: &RegularUser,
    kind: AdvertisementKind,
    request: CreateFavoriteRequest,
) -> ApiResult<Created<Json<FavoriteResponse>>> {
    let service = FavoriteService::new(state.service_context());
    let response = service
        .add(user.actor(), kind, request.advertisement_id)
        .await?;
    Ok(Created(Json(response)))
}

async fn remove(
    state: &AppState,
    user: &RegularUser,
    kind: AdvertisementKind,
    id: Snowflake,
) -> ApiResult<NoContent> {
    let service = FavoriteService::new(state.service_context());
    service.remove(user.actor(), kind, id).await?;
    Ok(NoContent)
}

async fn check(
    state: &AppState,
    user: &RegularUser,
    kind: AdvertisementKind,
    advertisement_id: Snowflake,
) -> ApiResult<Json<FavoriteCheckResponse>> {
    let service = FavoriteService::new(state.service_context());
    Ok(Json(service.check(user.actor(), kind, advertisement_id).await?))
}

// ============================================================================
// Player advertisements
// ============================================================================

/// POST /api/favorite-player-advertisements
pub async fn add_player_favorite(
    State(state): State<AppState>,
    user: RegularUser,
    ValidatedJson(request): ValidatedJson<CreateFavoriteRequest>,
) -> ApiResult<Created<Json<FavoriteResponse>>> {
    add(&state, &user, AdvertisementKind::Player, request).await
}

/// DELETE /api/favorite-player-advertisements/:id
pub async fn remove_player_favorite(
    State(state): State<AppState>,
    user: RegularUser,
    IdPath(id): IdPath,
) -> ApiResult<NoContent> {
    remove(&state, &user, AdvertisementKind::Player, id).await
}

/// GET /api/favorite-player-advertisements/check/:advertisement_id
pub async fn check_player_favorite(
    State(state): State<AppState>,
    user: RegularUser,
    IdPath(advertisement_id): IdPath,
) -> ApiResult<Json<FavoriteCheckResponse>> {
    check(&state, &user, AdvertisementKind::Player, advertisement_id).await
}

// ============================================================================
// Club advertisements
// ============================================================================

/// POST /api/favorite-club-advertisements
pub async fn add_club_favorite(
    State(state): State<AppState>,
    user: RegularUser,
    ValidatedJson(request): ValidatedJson<CreateFavoriteRequest>,
) -> ApiResult<Created<Json<FavoriteResponse>>> {
    add(&state, &user, AdvertisementKind::Club, request).await
}

/// DELETE /api/favorite-club-advertisements/:id
pub async fn remove_club_favorite(
    State(state): State<AppState>,
    user: RegularUser,
    IdPath(id): IdPath,
) -> ApiResult<NoContent> {
    remove(&state, &user, AdvertisementKind::Club, id).await
}

/// GET /api/favorite-club-advertisements/check/:advertisement_id
pub async fn check_club_favorite(
    State(state): State<AppState>,
    user: RegularUser,
    IdPath(advertisement_id): IdPath,
) -> ApiResult<Json<FavoriteCheckResponse>> {
    check(&state, &user, AdvertisementKind::Club, advertisement_id).await
}

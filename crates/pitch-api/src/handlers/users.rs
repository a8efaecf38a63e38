//! User handlers
//!
//! Profiles, admin promotion, and the per-user listings under `/api/users/:id`.

use axum::{extract::State, Json};
use pitch_core::{ActivityFilter, Snowflake};
use pitch_service::dto::{
    ChatResponse, ClubAdvertisementResponse, ClubHistoryResponse, ClubOfferResponse,
    FavoriteClubAdvertisementResponse, FavoritePlayerAdvertisementResponse,
    PlayerAdvertisementResponse, PlayerOfferResponse, UpdateUserRequest, UserResponse,
};
use pitch_service::{
    ChatService, ClubAdvertisementService, ClubHistoryService, ClubOfferService, ExportService,
    FavoriteService, PlayerAdvertisementService, PlayerOfferService, UserService,
};

use crate::extractors::{AdminUser, AuthUser, IdPath, ValidatedJson};
use crate::response::{ApiResult, CsvFile, NoContent};
use crate::state::AppState;

// ============================================================================
// Accounts
// ============================================================================

/// All users except the unknown user
///
/// GET /api/users
pub async fn list_users(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> ApiResult<Json<Vec<UserResponse>>> {
    let service = UserService::new(state.service_context());
    Ok(Json(service.list_users().await?))
}

/// GET /api/users/:id
pub async fn get_user(
    State(state): State<AppState>,
    _auth: AuthUser,
    IdPath(user_id): IdPath,
) -> ApiResult<Json<UserResponse>> {
    let service = UserService::new(state.service_context());
    Ok(Json(service.get_user(user_id).await?))
}

/// PUT /api/users/:id
pub async fn update_user(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(user_id): IdPath,
    ValidatedJson(request): ValidatedJson<UpdateUserRequest>,
) -> ApiResult<Json<UserResponse>> {
    let service = UserService::new(state.service_context());
    Ok(Json(service.update_user(auth.actor(), user_id, request).await?))
}

/// Delete an account, handing its rows to the unknown user
///
/// DELETE /api/users/:id
pub async fn delete_user(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(user_id): IdPath,
) -> ApiResult<NoContent> {
    let service = UserService::new(state.service_context());
    service.delete_user(auth.actor(), user_id).await?;
    Ok(NoContent)
}

/// POST /api/users/:id/make-admin
pub async fn make_admin(
    State(state): State<AppState>,
    _admin: AdminUser,
    IdPath(user_id): IdPath,
) -> ApiResult<Json<UserResponse>> {
    let service = UserService::new(state.service_context());
    Ok(Json(service.make_admin(user_id).await?))
}

/// GET /api/users/export
pub async fn export_users(State(state): State<AppState>, _admin: AdminUser) -> ApiResult<CsvFile> {
    let service = ExportService::new(state.service_context());
    Ok(CsvFile(service.users().await?))
}

// ============================================================================
// Advertisements owned by the user
// ============================================================================

async fn player_advertisements(
    state: &AppState,
    user_id: Snowflake,
    filter: ActivityFilter,
) -> ApiResult<Json<Vec<PlayerAdvertisementResponse>>> {
    let service = PlayerAdvertisementService::new(state.service_context());
    Ok(Json(service.list_by_owner(user_id, filter).await?))
}

async fn club_advertisements(
    state: &AppState,
    user_id: Snowflake,
    filter: ActivityFilter,
) -> ApiResult<Json<Vec<ClubAdvertisementResponse>>> {
    let service = ClubAdvertisementService::new(state.service_context());
    Ok(Json(service.list_by_owner(user_id, filter).await?))
}

/// GET /api/users/:id/player-advertisements/active
pub async fn active_player_advertisements(
    State(state): State<AppState>,
    _auth: AuthUser,
    IdPath(user_id): IdPath,
) -> ApiResult<Json<Vec<PlayerAdvertisementResponse>>> {
    player_advertisements(&state, user_id, ActivityFilter::Active).await
}

/// GET /api/users/:id/player-advertisements/inactive
pub async fn inactive_player_advertisements(
    State(state): State<AppState>,
    _auth: AuthUser,
    IdPath(user_id): IdPath,
) -> ApiResult<Json<Vec<PlayerAdvertisementResponse>>> {
    player_advertisements(&state, user_id, ActivityFilter::Inactive).await
}

/// GET /api/users/:id/club-advertisements/active
pub async fn active_club_advertisements(
    State(state): State<AppState>,
    _auth: AuthUser,
    IdPath(user_id): IdPath,
) -> ApiResult<Json<Vec<ClubAdvertisementResponse>>> {
    club_advertisements(&state, user_id, ActivityFilter::Active).await
}

/// GET /api/users/:id/club-advertisements/inactive
pub async fn inactive_club_advertisements(
    State(state): State<AppState>,
    _auth: AuthUser,
    IdPath(user_id): IdPath,
) -> ApiResult<Json<Vec<ClubAdvertisementResponse>>> {
    club_advertisements(&state, user_id, ActivityFilter::Inactive).await
}

// ============================================================================
// Favorites (self or admin)
// ============================================================================

/// GET /api/users/:id/favorite-player-advertisements/active
pub async fn active_favorite_player_advertisements(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(user_id): IdPath,
) -> ApiResult<Json<Vec<FavoritePlayerAdvertisementResponse>>> {
    let service = FavoriteService::new(state.service_context());
    let favorites = service
        .list_player_favorites(auth.actor(), user_id, ActivityFilter::Active)
        .await?;
    Ok(Json(favorites))
}

/// GET /api/users/:id/favorite-player-advertisements/inactive
pub async fn inactive_favorite_player_advertisements(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(user_id): IdPath,
) -> ApiResult<Json<Vec<FavoritePlayerAdvertisementResponse>>> {
    let service = FavoriteService::new(state.service_context());
    let favorites = service
        .list_player_favorites(auth.actor(), user_id, ActivityFilter::Inactive)
        .await?;
    Ok(Json(favorites))
}

/// GET /api/users/:id/favorite-club-advertisements/active
pub async fn active_favorite_club_advertisements(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(user_id): IdPath,
) -> ApiResult<Json<Vec<FavoriteClubAdvertisementResponse>>> {
    let service = FavoriteService::new(state.service_context());
    let favorites = service
        .list_club_favorites(auth.actor(), user_id, ActivityFilter::Active)
        .await?;
    Ok(Json(favorites))
}

/// GET /api/users/:id/favorite-club-advertisements/inactive
pub async fn inactive_favorite_club_advertisements(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(user_id): IdPath,
) -> ApiResult<Json<Vec<FavoriteClubAdvertisementResponse>>> {
    let service = FavoriteService::new(state.service_context());
    let favorites = service
        .list_club_favorites(auth.actor(), user_id, ActivityFilter::Inactive)
        .await?;
    Ok(Json(favorites))
}

// ============================================================================
// Offers (self or admin)
// ============================================================================

/// Club offers made on the user's player advertisements
///
/// GET /api/users/:id/club-offers/received
pub async fn received_club_offers(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(user_id): IdPath,
) -> ApiResult<Json<Vec<ClubOfferResponse>>> {
    let service = ClubOfferService::new(state.service_context());
    Ok(Json(service.list_received(auth.actor(), user_id).await?))
}

/// GET /api/users/:id/club-offers/sent
pub async fn sent_club_offers(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(user_id): IdPath,
) -> ApiResult<Json<Vec<ClubOfferResponse>>> {
    let service = ClubOfferService::new(state.service_context());
    Ok(Json(service.list_sent(auth.actor(), user_id).await?))
}

/// Player offers made on the user's club advertisements
///
/// GET /api/users/:id/player-offers/received
pub async fn received_player_offers(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(user_id): IdPath,
) -> ApiResult<Json<Vec<PlayerOfferResponse>>> {
    let service = PlayerOfferService::new(state.service_context());
    Ok(Json(service.list_received(auth.actor(), user_id).await?))
}

/// GET /api/users/:id/player-offers/sent
pub async fn sent_player_offers(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(user_id): IdPath,
) -> ApiResult<Json<Vec<PlayerOfferResponse>>> {
    let service = PlayerOfferService::new(state.service_context());
    Ok(Json(service.list_sent(auth.actor(), user_id).await?))
}

// ============================================================================
// Chats and career
// ============================================================================

/// Chats of the user, latest activity first
///
/// GET /api/users/:id/chats
pub async fn user_chats(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(user_id): IdPath,
) -> ApiResult<Json<Vec<ChatResponse>>> {
    let service = ChatService::new(state.service_context());
    Ok(Json(service.list_by_user(auth.actor(), user_id).await?))
}

/// GET /api/users/:id/club-history
pub async fn user_club_history(
    State(state): State<AppState>,
    _auth: AuthUser,
    IdPath(user_id): IdPath,
) -> ApiResult<Json<Vec<ClubHistoryResponse>>> {
    let service = ClubHistoryService::new(state.service_context());
    Ok(Json(service.list_by_player(user_id).await?))
}

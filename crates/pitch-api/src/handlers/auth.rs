//! Account authentication handlers
//!
//! Registration, cookie login/logout, the current user and password changes.

use axum::{extract::State, Json};
use axum_extra::extract::CookieJar;
use pitch_service::dto::{
    ChangePasswordRequest, LoginRequest, LoginResponse, RegisterRequest, UserResponse,
};
use pitch_service::AuthService;

use crate::extractors::{AuthUser, IdPath, ValidatedJson};
use crate::response::{auth_cookie, expired_auth_cookie, ApiResult, Created, NoContent};
use crate::state::AppState;

/// Register a new User-role account
///
/// POST /api/users/register
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> ApiResult<Created<Json<UserResponse>>> {
    let service = AuthService::new(state.service_context());
    let response = service.register(request).await?;
    Ok(Created(Json(response)))
}

/// Login with email and password
///
/// POST /api/users/login
///
/// The token is returned in the body and set as the auth cookie.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<(CookieJar, Json<LoginResponse>)> {
    let service = AuthService::new(state.service_context());
    let response = service.login(request).await?;

    let cookie = auth_cookie(
        state.cookie_name(),
        &response.token,
        response.expires_at,
        state.config().app.env.is_production(),
    );

    Ok((jar.add(cookie), Json(response)))
}

/// Clear the auth cookie
///
/// POST /api/users/logout
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> (CookieJar, NoContent) {
    (jar.remove(expired_auth_cookie(state.cookie_name())), NoContent)
}

/// GET /api/users/me
pub async fn me(State(state): State<AppState>, auth: AuthUser) -> ApiResult<Json<UserResponse>> {
    let service = AuthService::new(state.service_context());
    Ok(Json(service.me(auth.actor()).await?))
}

/// Change the caller's own password
///
/// PUT /api/users/:id/password
pub async fn change_password(
    State(state): State<AppState>,
    auth: AuthUser,
    IdPath(user_id): IdPath,
    ValidatedJson(request): ValidatedJson<ChangePasswordRequest>,
) -> ApiResult<NoContent> {
    let service = AuthService::new(state.service_context());
    service.change_password(auth.actor(), user_id, request).await?;
    Ok(NoContent)
}

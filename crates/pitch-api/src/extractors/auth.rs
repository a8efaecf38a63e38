//! Authentication extractors
//!
//! The JWT comes from the `Authorization: Bearer` header or the auth cookie;
//! the hub endpoint also accepts an `access_token` query parameter.

use std::marker::PhantomData;

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts, Query},
    http::request::Parts,
};
use axum_extra::{
    extract::CookieJar,
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use pitch_core::{Policy, Roles, Snowflake};
use pitch_service::Actor;
use serde::Deserialize;

use crate::response::ApiError;
use crate::state::AppState;

/// Caller authenticated under the AdminOrUser policy
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub user_id: Snowflake,
    pub roles: Roles,
}

impl AuthUser {
    pub fn new(user_id: Snowflake, roles: Roles) -> Self {
        Self { user_id, roles }
    }

    /// The caller as seen by the service layer
    pub fn actor(&self) -> Actor {
        Actor::new(self.user_id, self.roles)
    }

    /// Resolve and validate the caller's token
    async fn resolve<S>(parts: &mut Parts, state: &S, allow_query: bool) -> Result<Self, ApiError>
    where
        S: Send + Sync,
        AppState: FromRef<S>,
    {
        let app_state = AppState::from_ref(state);

        let token = bearer_token(parts, state)
            .await
            .or_else(|| cookie_token(parts, app_state.cookie_name()))
            .or_else(|| allow_query.then(|| query_token(parts)).flatten())
            .ok_or(ApiError::MissingAuth)?;

        let claims = app_state
            .jwt_service()
            .validate_token(&token)
            .inspect_err(|e| tracing::warn!(error = %e, "Rejected token"))?;

        let user = AuthUser::new(claims.user_id()?, claims.roles());
        if !Policy::AdminOrUser.allows(user.roles) {
            return Err(ApiError::Forbidden(Policy::AdminOrUser));
        }

        Ok(user)
    }
}

async fn bearer_token<S: Send + Sync>(parts: &mut Parts, state: &S) -> Option<String> {
    TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
        .await
        .ok()
        .map(|TypedHeader(Authorization(bearer))| bearer.token().to_string())
}

fn cookie_token(parts: &Parts, cookie_name: &str) -> Option<String> {
    CookieJar::from_headers(&parts.headers)
        .get(cookie_name)
        .map(|cookie| cookie.value().to_string())
        .filter(|value| !value.is_empty())
}

#[derive(Deserialize)]
struct AccessTokenQuery {
    access_token: Option<String>,
}

fn query_token(parts: &Parts) -> Option<String> {
    Query::<AccessTokenQuery>::try_from_uri(&parts.uri)
        .ok()
        .and_then(|Query(query)| query.access_token)
        .filter(|value| !value.is_empty())
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Self::resolve(parts, state, false).await
    }
}

/// A named policy narrower than AdminOrUser
pub trait PolicyRequirement: Send + Sync + 'static {
    const POLICY: Policy;
}

/// Requires the Admin role
#[derive(Debug)]
pub struct AdminOnly;

impl PolicyRequirement for AdminOnly {
    const POLICY: Policy = Policy::Admin;
}

/// Requires the User role
#[derive(Debug)]
pub struct UserOnly;

impl PolicyRequirement for UserOnly {
    const POLICY: Policy = Policy::User;
}

/// Caller whose roles satisfy `P`
#[derive(Debug)]
pub struct Authorized<P> {
    pub user: AuthUser,
    _policy: PhantomData<fn() -> P>,
}

impl<P> Authorized<P> {
    pub fn actor(&self) -> Actor {
        self.user.actor()
    }
}

/// AdminPolicy caller
pub type AdminUser = Authorized<AdminOnly>;

/// UserPolicy caller
pub type RegularUser = Authorized<UserOnly>;

#[async_trait]
impl<S, P> FromRequestParts<S> for Authorized<P>
where
    S: Send + Sync,
    P: PolicyRequirement,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let user = AuthUser::resolve(parts, state, false).await?;

        if !P::POLICY.allows(user.roles) {
            tracing::debug!(user_id = %user.user_id, policy = %P::POLICY, "Policy refused");
            return Err(ApiError::Forbidden(P::POLICY));
        }

        Ok(Self {
            user,
            _policy: PhantomData,
        })
    }
}

/// Caller of the chat hub; the token may also come from `?access_token=`
#[derive(Debug, Clone, Copy)]
pub struct HubUser(pub AuthUser);

#[async_trait]
impl<S> FromRequestParts<S> for HubUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        AuthUser::resolve(parts, state, true).await.map(HubUser)
    }
}

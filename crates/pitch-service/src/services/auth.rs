//! Authentication service
//!
//! Handles registration, login, the current-user lookup and password changes.

use pitch_common::{ensure_passwords_match, AppError};
use pitch_core::entities::User;
use pitch_core::{DomainError, Snowflake};
use tracing::{info, instrument, warn};

use crate::dto::{ChangePasswordRequest, LoginRequest, LoginResponse, RegisterRequest, UserResponse};

use super::actor::Actor;
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new `User`-role account
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<UserResponse> {
        ensure_passwords_match(&request.password, &request.confirm_password)?;

        if request.email.eq_ignore_ascii_case(User::UNKNOWN_EMAIL)
            || self.ctx.user_repo().email_exists(&request.email).await?
        {
            warn!("Registration refused: email already in use");
            return Err(DomainError::EmailAlreadyExists.into());
        }

        let password_hash = self.ctx.password_service().hash_new(&request.password)?;

        let user = User::new(
            self.ctx.generate_id(),
            request.email,
            request.first_name,
            request.last_name,
            request.phone_number,
            request.location,
        );
        self.ctx.user_repo().create(&user, &password_hash).await?;

        info!(user_id = %user.id, "User registered");
        Ok(UserResponse::from(user))
    }

    /// Verify credentials and issue a token
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<LoginResponse> {
        if request.email.eq_ignore_ascii_case(User::UNKNOWN_EMAIL) {
            warn!("Login refused: unknown user account");
            return Err(AppError::InvalidCredentials.into());
        }

        let user = self
            .ctx
            .user_repo()
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| {
                warn!("Login failed: user not found");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user.id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = %user.id, "Login failed: no password hash");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        self.ctx
            .password_service()
            .verify_or_error(&request.password, &password_hash)
            .inspect_err(|_| warn!(user_id = %user.id, "Login failed: invalid password"))?;

        let issued = self
            .ctx
            .jwt_service()
            .issue_token(user.id, &user.email, user.roles)?;

        info!(user_id = %user.id, "User logged in");
        Ok(LoginResponse {
            token: issued.token,
            expires_at: issued.expires_at,
            user: UserResponse::from(user),
        })
    }

    /// The caller's own account
    #[instrument(skip(self))]
    pub async fn me(&self, actor: Actor) -> ServiceResult<UserResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(actor.user_id)
            .await?
            .ok_or(DomainError::UserNotFound(actor.user_id))?;

        Ok(UserResponse::from(user))
    }

    /// Change the caller's password; the old one must verify
    #[instrument(skip(self, request))]
    pub async fn change_password(
        &self,
        actor: Actor,
        user_id: Snowflake,
        request: ChangePasswordRequest,
    ) -> ServiceResult<()> {
        actor.ensure_self(user_id)?;
        ensure_passwords_match(&request.new_password, &request.confirm_password)?;

        let current_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user_id)
            .await?
            .ok_or(DomainError::UserNotFound(user_id))?;

        self.ctx
            .password_service()
            .verify_or_error(&request.old_password, &current_hash)
            .map_err(|e| match e {
                AppError::InvalidCredentials => {
                    warn!(user_id = %user_id, "Password change refused: wrong password");
                    ServiceError::validation("Old password is incorrect")
                }
                other => other.into(),
            })?;

        let new_hash = self.ctx.password_service().hash_new(&request.new_password)?;
        self.ctx.user_repo().update_password(user_id, &new_hash).await?;

        info!(user_id = %user_id, "Password changed");
        Ok(())
    }
}

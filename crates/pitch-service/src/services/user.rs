//! User service
//!
//! Handles profile operations and the deletion / promotion cascade.

use pitch_core::entities::User;
use pitch_core::{DomainError, Snowflake};
use tracing::{info, instrument, warn};

use crate::dto::{UpdateUserRequest, UserResponse};

use super::actor::Actor;
use super::context::ServiceContext;
use super::error::ServiceResult;

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get user entity by ID
    #[instrument(skip(self))]
    pub async fn get_user_entity(&self, user_id: Snowflake) -> ServiceResult<User> {
        Ok(self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::UserNotFound(user_id))?)
    }

    #[instrument(skip(self))]
    pub async fn get_user(&self, user_id: Snowflake) -> ServiceResult<UserResponse> {
        self.get_user_entity(user_id).await.map(UserResponse::from)
    }

    /// Every account except the unknown user, newest first
    #[instrument(skip(self))]
    pub async fn list_users(&self) -> ServiceResult<Vec<UserResponse>> {
        let users = self.ctx.user_repo().find_all().await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    /// Replace the profile fields of an account
    #[instrument(skip(self, request))]
    pub async fn update_user(
        &self,
        actor: Actor,
        user_id: Snowflake,
        request: UpdateUserRequest,
    ) -> ServiceResult<UserResponse> {
        actor.ensure_self_or_admin(user_id)?;

        let mut user = self.get_user_entity(user_id).await?;
        if user.id == self.ctx.unknown_user_id().await? {
            return Err(DomainError::UnknownUserProtected.into());
        }

        user.first_name = request.first_name;
        user.last_name = request.last_name;
        user.phone_number = request.phone_number;
        user.location = request.location;
        self.ctx.user_repo().update(&user).await?;

        info!(user_id = %user_id, "User profile updated");
        Ok(UserResponse::from(user))
    }

    /// Hand the account's rows to the unknown user, then delete it
    #[instrument(skip(self))]
    pub async fn delete_user(&self, actor: Actor, user_id: Snowflake) -> ServiceResult<()> {
        actor.ensure_self_or_admin(user_id)?;

        let unknown_id = self.ctx.unknown_user_id().await?;
        self.ctx
            .user_repo()
            .delete_with_reassignment(user_id, unknown_id)
            .await
            .inspect_err(|e| warn!(user_id = %user_id, error = %e, "User deletion refused"))?;

        info!(user_id = %user_id, deleted_by = %actor.user_id, "User deleted");
        Ok(())
    }

    /// Hand the account's rows to the unknown user, then make it an admin
    #[instrument(skip(self))]
    pub async fn make_admin(&self, user_id: Snowflake) -> ServiceResult<UserResponse> {
        let unknown_id = self.ctx.unknown_user_id().await?;
        self.ctx
            .user_repo()
            .promote_with_reassignment(user_id, unknown_id)
            .await
            .inspect_err(|e| warn!(user_id = %user_id, error = %e, "Admin promotion refused"))?;

        info!(user_id = %user_id, "User promoted to admin");
        self.get_user(user_id).await
    }
}

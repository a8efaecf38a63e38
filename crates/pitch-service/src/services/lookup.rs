//! Lookup tables: player positions, player feet and offer statuses

use pitch_core::entities::{PlayerFoot, PlayerPosition};
use pitch_core::{DomainError, Snowflake};
use tracing::{info, instrument};

use crate::dto::{
    OfferStatusResponse, PlayerFootRequest, PlayerFootResponse, PlayerPositionRequest,
    PlayerPositionResponse,
};

use super::context::ServiceContext;
use super::error::ServiceResult;

pub struct LookupService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> LookupService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    // === Player positions ===

    #[instrument(skip(self))]
    pub async fn list_positions(&self) -> ServiceResult<Vec<PlayerPositionResponse>> {
        let positions = self.ctx.lookup_repo().find_positions().await?;
        Ok(positions.into_iter().map(PlayerPositionResponse::from).collect())
    }

    #[instrument(skip(self))]
    pub async fn get_position(&self, id: Snowflake) -> ServiceResult<PlayerPositionResponse> {
        let position = self
            .ctx
            .lookup_repo()
            .find_position(id)
            .await?
            .ok_or(DomainError::PlayerPositionNotFound(id))?;
        Ok(position.into())
    }

    #[instrument(skip(self, request))]
    pub async fn create_position(
        &self,
        request: PlayerPositionRequest,
    ) -> ServiceResult<PlayerPositionResponse> {
        let position = PlayerPosition {
            id: self.ctx.generate_id(),
            position_name: request.position_name.trim().to_string(),
        };
        self.ctx.lookup_repo().create_position(&position).await?;

        info!(position_id = %position.id, name = %position.position_name, "Player position created");
        Ok(position.into())
    }

    #[instrument(skip(self, request))]
    pub async fn update_position(
        &self,
        id: Snowflake,
        request: PlayerPositionRequest,
    ) -> ServiceResult<PlayerPositionResponse> {
        let position = PlayerPosition {
            id,
            position_name: request.position_name.trim().to_string(),
        };
        self.ctx.lookup_repo().update_position(&position).await?;

        info!(position_id = %id, "Player position updated");
        Ok(position.into())
    }

    #[instrument(skip(self))]
    pub async fn delete_position(&self, id: Snowflake) -> ServiceResult<()> {
        self.ctx.lookup_repo().delete_position(id).await?;
        info!(position_id = %id, "Player position deleted");
        Ok(())
    }

    // === Player feet ===

    #[instrument(skip(self))]
    pub async fn list_feet(&self) -> ServiceResult<Vec<PlayerFootResponse>> {
        let feet = self.ctx.lookup_repo().find_feet().await?;
        Ok(feet.into_iter().map(PlayerFootResponse::from).collect())
    }

    #[instrument(skip(self))]
    pub async fn get_foot(&self, id: Snowflake) -> ServiceResult<PlayerFootResponse> {
        let foot = self
            .ctx
            .lookup_repo()
            .find_foot(id)
            .await?
            .ok_or(DomainError::PlayerFootNotFound(id))?;
        Ok(foot.into())
    }

    #[instrument(skip(self, request))]
    pub async fn create_foot(&self, request: PlayerFootRequest) -> ServiceResult<PlayerFootResponse> {
        let foot = PlayerFoot {
            id: self.ctx.generate_id(),
            name: request.name.trim().to_string(),
        };
        self.ctx.lookup_repo().create_foot(&foot).await?;

        info!(foot_id = %foot.id, name = %foot.name, "Player foot created");
        Ok(foot.into())
    }

    #[instrument(skip(self, request))]
    pub async fn update_foot(
        &self,
        id: Snowflake,
        request: PlayerFootRequest,
    ) -> ServiceResult<PlayerFootResponse> {
        let foot = PlayerFoot {
            id,
            name: request.name.trim().to_string(),
        };
        self.ctx.lookup_repo().update_foot(&foot).await?;

        info!(foot_id = %id, "Player foot updated");
        Ok(foot.into())
    }

    #[instrument(skip(self))]
    pub async fn delete_foot(&self, id: Snowflake) -> ServiceResult<()> {
        self.ctx.lookup_repo().delete_foot(id).await?;
        info!(foot_id = %id, "Player foot deleted");
        Ok(())
    }

    // === Offer statuses (read-only) ===

    #[instrument(skip(self))]
    pub async fn list_offer_statuses(&self) -> ServiceResult<Vec<OfferStatusResponse>> {
        let statuses = self.ctx.lookup_repo().find_offer_statuses().await?;
        Ok(statuses.into_iter().map(OfferStatusResponse::from).collect())
    }

    #[instrument(skip(self))]
    pub async fn get_offer_status(&self, id: Snowflake) -> ServiceResult<OfferStatusResponse> {
        let status = self
            .ctx
            .lookup_repo()
            .find_offer_status(id)
            .await?
            .ok_or(DomainError::OfferStatusNotFound(id))?;
        Ok(status.into())
    }

    /// Fail unless the position exists
    pub(crate) async fn require_position(&self, id: Snowflake) -> ServiceResult<()> {
        match self.ctx.lookup_repo().find_position(id).await? {
            Some(_) => Ok(()),
            None => Err(DomainError::PlayerPositionNotFound(id).into()),
        }
    }

    /// Fail unless the foot exists
    pub(crate) async fn require_foot(&self, id: Snowflake) -> ServiceResult<()> {
        match self.ctx.lookup_repo().find_foot(id).await? {
            Some(_) => Ok(()),
            None => Err(DomainError::PlayerFootNotFound(id).into()),
        }
    }
}

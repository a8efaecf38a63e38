//! Player advertisement service
//!
//! A player advertises themselves to clubs for thirty days at a time.

use chrono::Utc;
use pitch_core::entities::{PlayerAdvertisement, SalaryRange};
use pitch_core::{advertisement_end_date, ActivityFilter, DomainError, Snowflake};
use tracing::{info, instrument};

use crate::dto::{PlayerAdvertisementRequest, PlayerAdvertisementResponse, Related};

use super::actor::Actor;
use super::context::ServiceContext;
use super::error::ServiceResult;
use super::lookup::LookupService;

const RESOURCE: &str = "player advertisement";

pub struct PlayerAdvertisementService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PlayerAdvertisementService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    pub(crate) async fn find(&self, id: Snowflake) -> ServiceResult<PlayerAdvertisement> {
        Ok(self
            .ctx
            .player_advertisement_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::PlayerAdvertisementNotFound(id))?)
    }

    async fn to_responses(
        &self,
        ads: &[PlayerAdvertisement],
    ) -> ServiceResult<Vec<PlayerAdvertisementResponse>> {
        let related = self.ctx.related(ads.iter().map(|ad| ad.player_id)).await?;
        Ok(related.map_all(ads, Related::player_advertisement)?)
    }

    async fn to_response(
        &self,
        ad: &PlayerAdvertisement,
    ) -> ServiceResult<PlayerAdvertisementResponse> {
        let related = self.ctx.related([ad.player_id]).await?;
        Ok(related.player_advertisement(ad)?)
    }

    async fn check_lookups(&self, request: &PlayerAdvertisementRequest) -> ServiceResult<()> {
        let lookups = LookupService::new(self.ctx);
        lookups.require_position(request.player_position_id).await?;
        lookups.require_foot(request.player_foot_id).await
    }

    #[instrument(skip(self))]
    pub async fn list_all(&self) -> ServiceResult<Vec<PlayerAdvertisementResponse>> {
        let ads = self.ctx.player_advertisement_repo().find_all().await?;
        self.to_responses(&ads).await
    }

    #[instrument(skip(self))]
    pub async fn list_active(&self) -> ServiceResult<Vec<PlayerAdvertisementResponse>> {
        let ads = self.ctx.player_advertisement_repo().find_active().await?;
        self.to_responses(&ads).await
    }

    /// A player's advertisements, active or expired
    #[instrument(skip(self))]
    pub async fn list_by_owner(
        &self,
        player_id: Snowflake,
        filter: ActivityFilter,
    ) -> ServiceResult<Vec<PlayerAdvertisementResponse>> {
        let ads = self
            .ctx
            .player_advertisement_repo()
            .find_by_owner(player_id, filter)
            .await?;
        self.to_responses(&ads).await
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: Snowflake) -> ServiceResult<PlayerAdvertisementResponse> {
        let ad = self.find(id).await?;
        self.to_response(&ad).await
    }

    #[instrument(skip(self, request))]
    pub async fn create(
        &self,
        actor: Actor,
        request: PlayerAdvertisementRequest,
    ) -> ServiceResult<PlayerAdvertisementResponse> {
        self.check_lookups(&request).await?;

        let salary_range = SalaryRange::new(
            self.ctx.generate_id(),
            request.salary_range.min,
            request.salary_range.max,
        )?;
        let now = Utc::now();
        let ad = PlayerAdvertisement {
            id: self.ctx.generate_id(),
            player_id: actor.user_id,
            player_position_id: request.player_position_id,
            league: request.league,
            region: request.region,
            age: request.age,
            height: request.height,
            player_foot_id: request.player_foot_id,
            salary_range,
            creation_date: now,
            end_date: advertisement_end_date(now),
        };
        self.ctx.player_advertisement_repo().create(&ad).await?;

        info!(advertisement_id = %ad.id, player_id = %ad.player_id, "Player advertisement created");
        self.to_response(&ad).await
    }

    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        actor: Actor,
        id: Snowflake,
        request: PlayerAdvertisementRequest,
    ) -> ServiceResult<PlayerAdvertisementResponse> {
        let mut ad = self.find(id).await?;
        actor.ensure_owner(ad.player_id, RESOURCE)?;
        self.check_lookups(&request).await?;

        ad.salary_range = SalaryRange::new(
            ad.salary_range.id,
            request.salary_range.min,
            request.salary_range.max,
        )?;
        ad.player_position_id = request.player_position_id;
        ad.league = request.league;
        ad.region = request.region;
        ad.age = request.age;
        ad.height = request.height;
        ad.player_foot_id = request.player_foot_id;
        self.ctx.player_advertisement_repo().update(&ad).await?;

        info!(advertisement_id = %id, "Player advertisement updated");
        self.to_response(&ad).await
    }

    /// Push the end date thirty days from now
    #[instrument(skip(self))]
    pub async fn renew(
        &self,
        actor: Actor,
        id: Snowflake,
    ) -> ServiceResult<PlayerAdvertisementResponse> {
        let mut ad = self.find(id).await?;
        actor.ensure_owner(ad.player_id, RESOURCE)?;

        ad.renew();
        self.ctx
            .player_advertisement_repo()
            .renew(id, ad.end_date)
            .await?;

        info!(advertisement_id = %id, end_date = %ad.end_date, "Player advertisement renewed");
        self.to_response(&ad).await
    }

    /// Delete with its offers, favorites and salary range
    #[instrument(skip(self))]
    pub async fn delete(&self, actor: Actor, id: Snowflake) -> ServiceResult<()> {
        let ad = self.find(id).await?;
        actor.ensure_owner_or_admin(ad.player_id, RESOURCE)?;

        self.ctx.player_advertisement_repo().delete(id).await?;
        info!(advertisement_id = %id, deleted_by = %actor.user_id, "Player advertisement deleted");
        Ok(())
    }
}

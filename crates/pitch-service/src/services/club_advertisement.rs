//! Club advertisement service
//!
//! A club member looks for a player for thirty days at a time.

use chrono::Utc;
use pitch_core::entities::{ClubAdvertisement, SalaryRange};
use pitch_core::{advertisement_end_date, ActivityFilter, DomainError, Snowflake};
use tracing::{info, instrument};

use crate::dto::{ClubAdvertisementRequest, ClubAdvertisementResponse, Related};

use super::actor::Actor;
use super::context::ServiceContext;
use super::error::ServiceResult;
use super::lookup::LookupService;

const RESOURCE: &str = "club advertisement";

pub struct ClubAdvertisementService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ClubAdvertisementService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    pub(crate) async fn find(&self, id: Snowflake) -> ServiceResult<ClubAdvertisement> {
        Ok(self
            .ctx
            .club_advertisement_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::ClubAdvertisementNotFound(id))?)
    }

    async fn to_responses(
        &self,
        ads: &[ClubAdvertisement],
    ) -> ServiceResult<Vec<ClubAdvertisementResponse>> {
        let related = self.ctx.related(ads.iter().map(|ad| ad.club_member_id)).await?;
        Ok(related.map_all(ads, Related::club_advertisement)?)
    }

    async fn to_response(
        &self,
        ad: &ClubAdvertisement,
    ) -> ServiceResult<ClubAdvertisementResponse> {
        let related = self.ctx.related([ad.club_member_id]).await?;
        Ok(related.club_advertisement(ad)?)
    }

    async fn check_lookups(&self, request: &ClubAdvertisementRequest) -> ServiceResult<()> {
        LookupService::new(self.ctx)
            .require_position(request.player_position_id)
            .await
    }

    #[instrument(skip(self))]
    pub async fn list_all(&self) -> ServiceResult<Vec<ClubAdvertisementResponse>> {
        let ads = self.ctx.club_advertisement_repo().find_all().await?;
        self.to_responses(&ads).await
    }

    #[instrument(skip(self))]
    pub async fn list_active(&self) -> ServiceResult<Vec<ClubAdvertisementResponse>> {
        let ads = self.ctx.club_advertisement_repo().find_active().await?;
        self.to_responses(&ads).await
    }

    /// A club member's advertisements, active or expired
    #[instrument(skip(self))]
    pub async fn list_by_owner(
        &self,
        club_member_id: Snowflake,
        filter: ActivityFilter,
    ) -> ServiceResult<Vec<ClubAdvertisementResponse>> {
        let ads = self
            .ctx
            .club_advertisement_repo()
            .find_by_owner(club_member_id, filter)
            .await?;
        self.to_responses(&ads).await
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: Snowflake) -> ServiceResult<ClubAdvertisementResponse> {
        let ad = self.find(id).await?;
        self.to_response(&ad).await
    }

    #[instrument(skip(self, request))]
    pub async fn create(
        &self,
        actor: Actor,
        request: ClubAdvertisementRequest,
    ) -> ServiceResult<ClubAdvertisementResponse> {
        self.check_lookups(&request).await?;

        let salary_range = SalaryRange::new(
            self.ctx.generate_id(),
            request.salary_range.min,
            request.salary_range.max,
        )?;
        let now = Utc::now();
        let ad = ClubAdvertisement {
            id: self.ctx.generate_id(),
            club_member_id: actor.user_id,
            player_position_id: request.player_position_id,
            club_name: request.club_name,
            league: request.league,
            region: request.region,
            salary_range,
            creation_date: now,
            end_date: advertisement_end_date(now),
        };
        self.ctx.club_advertisement_repo().create(&ad).await?;

        info!(advertisement_id = %ad.id, club_member_id = %ad.club_member_id, "Club advertisement created");
        self.to_response(&ad).await
    }

    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        actor: Actor,
        id: Snowflake,
        request: ClubAdvertisementRequest,
    ) -> ServiceResult<ClubAdvertisementResponse> {
        let mut ad = self.find(id).await?;
        actor.ensure_owner(ad.club_member_id, RESOURCE)?;
        self.check_lookups(&request).await?;

        ad.salary_range = SalaryRange::new(
            ad.salary_range.id,
            request.salary_range.min,
            request.salary_range.max,
        )?;
        ad.player_position_id = request.player_position_id;
        ad.club_name = request.club_name;
        ad.league = request.league;
        ad.region = request.region;
        self.ctx.club_advertisement_repo().update(&ad).await?;

        info!(advertisement_id = %id, "Club advertisement updated");
        self.to_response(&ad).await
    }

    /// Push the end date thirty days from now
    #[instrument(skip(self))]
    pub async fn renew(
        &self,
        actor: Actor,
        id: Snowflake,
    ) -> ServiceResult<ClubAdvertisementResponse> {
        let mut ad = self.find(id).await?;
        actor.ensure_owner(ad.club_member_id, RESOURCE)?;

        ad.renew();
        self.ctx
            .club_advertisement_repo()
            .renew(id, ad.end_date)
            .await?;

        info!(advertisement_id = %id, end_date = %ad.end_date, "Club advertisement renewed");
        self.to_response(&ad).await
    }

    /// Delete with its offers, favorites and salary range
    #[instrument(skip(self))]
    pub async fn delete(&self, actor: Actor, id: Snowflake) -> ServiceResult<()> {
        let ad = self.find(id).await?;
        actor.ensure_owner_or_admin(ad.club_member_id, RESOURCE)?;

        self.ctx.club_advertisement_repo().delete(id).await?;
        info!(advertisement_id = %id, deleted_by = %actor.user_id, "Club advertisement deleted");
        Ok(())
    }
}

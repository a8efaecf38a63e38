//! Player offer service
//!
//! A player answers a club advertisement with an offer, which the advertising
//! club member accepts or rejects.

use chrono::Utc;
use pitch_core::entities::PlayerOffer;
use pitch_core::{DomainError, OfferStatusKind, Snowflake};
use tracing::{info, instrument, warn};

use crate::dto::{CreatePlayerOfferRequest, PlayerOfferResponse, Related};

use super::actor::Actor;
use super::club_advertisement::ClubAdvertisementService;
use super::context::ServiceContext;
use super::error::ServiceResult;
use super::lookup::LookupService;

pub struct PlayerOfferService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PlayerOfferService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    async fn find(&self, id: Snowflake) -> ServiceResult<PlayerOffer> {
        Ok(self
            .ctx
            .player_offer_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::PlayerOfferNotFound(id))?)
    }

    async fn to_responses(&self, offers: &[PlayerOffer]) -> ServiceResult<Vec<PlayerOfferResponse>> {
        let related = self.ctx.related(offers.iter().map(|o| o.player_id)).await?;
        Ok(related.map_all(offers, Related::player_offer)?)
    }

    async fn to_response(&self, offer: &PlayerOffer) -> ServiceResult<PlayerOfferResponse> {
        let related = self.ctx.related([offer.player_id]).await?;
        Ok(related.player_offer(offer)?)
    }

    #[instrument(skip(self))]
    pub async fn list_all(&self) -> ServiceResult<Vec<PlayerOfferResponse>> {
        let offers = self.ctx.player_offer_repo().find_all().await?;
        self.to_responses(&offers).await
    }

    /// Offers on the user's club advertisements
    #[instrument(skip(self))]
    pub async fn list_received(
        &self,
        actor: Actor,
        user_id: Snowflake,
    ) -> ServiceResult<Vec<PlayerOfferResponse>> {
        actor.ensure_self_or_admin(user_id)?;
        let offers = self.ctx.player_offer_repo().find_received(user_id).await?;
        self.to_responses(&offers).await
    }

    #[instrument(skip(self))]
    pub async fn list_sent(
        &self,
        actor: Actor,
        user_id: Snowflake,
    ) -> ServiceResult<Vec<PlayerOfferResponse>> {
        actor.ensure_self_or_admin(user_id)?;
        let offers = self.ctx.player_offer_repo().find_sent(user_id).await?;
        self.to_responses(&offers).await
    }

    #[instrument(skip(self))]
    pub async fn get(&self, actor: Actor, id: Snowflake) -> ServiceResult<PlayerOfferResponse> {
        let offer = self.find(id).await?;
        if !actor.is_admin() && !offer.is_sent_by(actor.user_id) {
            let ad = ClubAdvertisementService::new(self.ctx)
                .find(offer.club_advertisement_id)
                .await?;
            actor.ensure_owner(ad.club_member_id, "player offer")?;
        }
        self.to_response(&offer).await
    }

    #[instrument(skip(self, request))]
    pub async fn create(
        &self,
        actor: Actor,
        request: CreatePlayerOfferRequest,
    ) -> ServiceResult<PlayerOfferResponse> {
        let ad = ClubAdvertisementService::new(self.ctx)
            .find(request.club_advertisement_id)
            .await?;

        if ad.is_owned_by(actor.user_id) {
            warn!(advertisement_id = %ad.id, "Offer refused: own advertisement");
            return Err(DomainError::SelfOffer.into());
        }
        if !ad.is_active() {
            warn!(advertisement_id = %ad.id, "Offer refused: advertisement inactive");
            return Err(DomainError::AdvertisementInactive.into());
        }
        let lookups = LookupService::new(self.ctx);
        lookups.require_position(request.player_position_id).await?;
        lookups.require_foot(request.player_foot_id).await?;
        if self
            .ctx
            .player_offer_repo()
            .has_pending(ad.id, actor.user_id)
            .await?
        {
            return Err(DomainError::DuplicateOffer.into());
        }

        let offer = PlayerOffer {
            id: self.ctx.generate_id(),
            club_advertisement_id: ad.id,
            status: OfferStatusKind::Offered,
            player_position_id: request.player_position_id,
            age: request.age,
            height: request.height,
            player_foot_id: request.player_foot_id,
            salary: request.salary,
            additional_information: request.additional_information,
            creation_date: Utc::now(),
            player_id: actor.user_id,
        };
        self.ctx.player_offer_repo().create(&offer).await?;

        info!(offer_id = %offer.id, advertisement_id = %ad.id, "Player offer sent");
        self.to_response(&offer).await
    }

    #[instrument(skip(self))]
    pub async fn accept(&self, actor: Actor, id: Snowflake) -> ServiceResult<PlayerOfferResponse> {
        self.answer(actor, id, OfferStatusKind::Accepted).await
    }

    #[instrument(skip(self))]
    pub async fn reject(&self, actor: Actor, id: Snowflake) -> ServiceResult<PlayerOfferResponse> {
        self.answer(actor, id, OfferStatusKind::Rejected).await
    }

    async fn answer(
        &self,
        actor: Actor,
        id: Snowflake,
        status: OfferStatusKind,
    ) -> ServiceResult<PlayerOfferResponse> {
        let mut offer = self.find(id).await?;
        let ad = ClubAdvertisementService::new(self.ctx)
            .find(offer.club_advertisement_id)
            .await?;
        actor.ensure_owner(ad.club_member_id, "club advertisement")?;

        offer.answer(status)?;
        self.ctx.player_offer_repo().answer(id, status).await?;

        info!(offer_id = %id, status = %status, "Player offer answered");
        self.to_response(&offer).await
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, actor: Actor, id: Snowflake) -> ServiceResult<()> {
        let offer = self.find(id).await?;
        actor.ensure_owner_or_admin(offer.player_id, "player offer")?;

        self.ctx.player_offer_repo().delete(id).await?;
        info!(offer_id = %id, deleted_by = %actor.user_id, "Player offer deleted");
        Ok(())
    }
}

//! Club offer service
//!
//! A club member answers a player advertisement with an offer, which the
//! advertising player accepts or rejects.

use chrono::Utc;
use pitch_core::entities::ClubOffer;
use pitch_core::{DomainError, OfferStatusKind, Snowflake};
use tracing::{info, instrument, warn};

use crate::dto::{ClubOfferResponse, CreateClubOfferRequest, Related};

use super::actor::Actor;
use super::context::ServiceContext;
use super::error::ServiceResult;
use super::lookup::LookupService;
use super::player_advertisement::PlayerAdvertisementService;

pub struct ClubOfferService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ClubOfferService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    async fn find(&self, id: Snowflake) -> ServiceResult<ClubOffer> {
        Ok(self
            .ctx
            .club_offer_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::ClubOfferNotFound(id))?)
    }

    async fn to_responses(&self, offers: &[ClubOffer]) -> ServiceResult<Vec<ClubOfferResponse>> {
        let related = self
            .ctx
            .related(offers.iter().map(|o| o.club_member_id))
            .await?;
        Ok(related.map_all(offers, Related::club_offer)?)
    }

    async fn to_response(&self, offer: &ClubOffer) -> ServiceResult<ClubOfferResponse> {
        let related = self.ctx.related([offer.club_member_id]).await?;
        Ok(related.club_offer(offer)?)
    }

    #[instrument(skip(self))]
    pub async fn list_all(&self) -> ServiceResult<Vec<ClubOfferResponse>> {
        let offers = self.ctx.club_offer_repo().find_all().await?;
        self.to_responses(&offers).await
    }

    /// Offers on the user's player advertisements
    #[instrument(skip(self))]
    pub async fn list_received(
        &self,
        actor: Actor,
        user_id: Snowflake,
    ) -> ServiceResult<Vec<ClubOfferResponse>> {
        actor.ensure_self_or_admin(user_id)?;
        let offers = self.ctx.club_offer_repo().find_received(user_id).await?;
        self.to_responses(&offers).await
    }

    #[instrument(skip(self))]
    pub async fn list_sent(
        &self,
        actor: Actor,
        user_id: Snowflake,
    ) -> ServiceResult<Vec<ClubOfferResponse>> {
        actor.ensure_self_or_admin(user_id)?;
        let offers = self.ctx.club_offer_repo().find_sent(user_id).await?;
        self.to_responses(&offers).await
    }

    /// Visible to the sender, the advertisement owner and admins
    #[instrument(skip(self))]
    pub async fn get(&self, actor: Actor, id: Snowflake) -> ServiceResult<ClubOfferResponse> {
        let offer = self.find(id).await?;
        if !actor.is_admin() && !offer.is_sent_by(actor.user_id) {
            let ad = PlayerAdvertisementService::new(self.ctx)
                .find(offer.player_advertisement_id)
                .await?;
            actor.ensure_owner(ad.player_id, "club offer")?;
        }
        self.to_response(&offer).await
    }

    #[instrument(skip(self, request))]
    pub async fn create(
        &self,
        actor: Actor,
        request: CreateClubOfferRequest,
    ) -> ServiceResult<ClubOfferResponse> {
        let ad = PlayerAdvertisementService::new(self.ctx)
            .find(request.player_advertisement_id)
            .await?;

        if ad.is_owned_by(actor.user_id) {
            warn!(advertisement_id = %ad.id, "Offer refused: own advertisement");
            return Err(DomainError::SelfOffer.into());
        }
        if !ad.is_active() {
            warn!(advertisement_id = %ad.id, "Offer refused: advertisement inactive");
            return Err(DomainError::AdvertisementInactive.into());
        }
        LookupService::new(self.ctx)
            .require_position(request.player_position_id)
            .await?;
        if self
            .ctx
            .club_offer_repo()
            .has_pending(ad.id, actor.user_id)
            .await?
        {
            return Err(DomainError::DuplicateOffer.into());
        }

        let offer = ClubOffer {
            id: self.ctx.generate_id(),
            player_advertisement_id: ad.id,
            status: OfferStatusKind::Offered,
            club_name: request.club_name,
            league: request.league,
            region: request.region,
            player_position_id: request.player_position_id,
            salary: request.salary,
            additional_information: request.additional_information,
            creation_date: Utc::now(),
            club_member_id: actor.user_id,
        };
        self.ctx.club_offer_repo().create(&offer).await?;

        info!(offer_id = %offer.id, advertisement_id = %ad.id, "Club offer sent");
        self.to_response(&offer).await
    }

    #[instrument(skip(self))]
    pub async fn accept(&self, actor: Actor, id: Snowflake) -> ServiceResult<ClubOfferResponse> {
        self.answer(actor, id, OfferStatusKind::Accepted).await
    }

    #[instrument(skip(self))]
    pub async fn reject(&self, actor: Actor, id: Snowflake) -> ServiceResult<ClubOfferResponse> {
        self.answer(actor, id, OfferStatusKind::Rejected).await
    }

    /// Only the advertising player answers, and only once
    async fn answer(
        &self,
        actor: Actor,
        id: Snowflake,
        status: OfferStatusKind,
    ) -> ServiceResult<ClubOfferResponse> {
        let mut offer = self.find(id).await?;
        let ad = PlayerAdvertisementService::new(self.ctx)
            .find(offer.player_advertisement_id)
            .await?;
        actor.ensure_owner(ad.player_id, "player advertisement")?;

        offer.answer(status)?;
        self.ctx.club_offer_repo().answer(id, status).await?;

        info!(offer_id = %id, status = %status, "Club offer answered");
        self.to_response(&offer).await
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, actor: Actor, id: Snowflake) -> ServiceResult<()> {
        let offer = self.find(id).await?;
        actor.ensure_owner_or_admin(offer.club_member_id, "club offer")?;

        self.ctx.club_offer_repo().delete(id).await?;
        info!(offer_id = %id, deleted_by = %actor.user_id, "Club offer deleted");
        Ok(())
    }
}

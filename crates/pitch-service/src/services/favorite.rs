//! Favorite service
//!
//! Users bookmark player and club advertisements. One service covers both
//! kinds; the [`AdvertisementKind`] picks the table.

use pitch_core::entities::{AdvertisementKind, Favorite};
use pitch_core::{ActivityFilter, DomainError, Snowflake};
use tracing::{info, instrument};

use crate::dto::{
    FavoriteCheckResponse, FavoriteClubAdvertisementResponse, FavoritePlayerAdvertisementResponse,
    FavoriteResponse,
};

use super::actor::Actor;
use super::club_advertisement::ClubAdvertisementService;
use super::context::ServiceContext;
use super::error::ServiceResult;
use super::player_advertisement::PlayerAdvertisementService;

pub struct FavoriteService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> FavoriteService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Mark an advertisement as the caller's favorite
    #[instrument(skip(self))]
    pub async fn add(
        &self,
        actor: Actor,
        kind: AdvertisementKind,
        advertisement_id: Snowflake,
    ) -> ServiceResult<FavoriteResponse> {
        match kind {
            AdvertisementKind::Player => {
                PlayerAdvertisementService::new(self.ctx)
                    .find(advertisement_id)
                    .await?;
            }
            AdvertisementKind::Club => {
                ClubAdvertisementService::new(self.ctx)
                    .find(advertisement_id)
                    .await?;
            }
        }

        let favorite = Favorite {
            id: self.ctx.generate_id(),
            kind,
            advertisement_id,
            user_id: actor.user_id,
        };
        self.ctx.favorite_repo().create(&favorite).await?;

        info!(favorite_id = %favorite.id, kind = kind.as_str(), "Favorite added");
        Ok(FavoriteResponse::from(&favorite))
    }

    #[instrument(skip(self))]
    pub async fn remove(
        &self,
        actor: Actor,
        kind: AdvertisementKind,
        id: Snowflake,
    ) -> ServiceResult<()> {
        let favorite = self
            .ctx
            .favorite_repo()
            .find_by_id(kind, id)
            .await?
            .ok_or(DomainError::FavoriteNotFound(id))?;
        actor.ensure_owner(favorite.user_id, "favorite")?;

        self.ctx.favorite_repo().delete(kind, id).await?;
        info!(favorite_id = %id, kind = kind.as_str(), "Favorite removed");
        Ok(())
    }

    /// The caller's favorite id for an advertisement, if any
    #[instrument(skip(self))]
    pub async fn check(
        &self,
        actor: Actor,
        kind: AdvertisementKind,
        advertisement_id: Snowflake,
    ) -> ServiceResult<FavoriteCheckResponse> {
        let favorite = self
            .ctx
            .favorite_repo()
            .find_for(kind, advertisement_id, actor.user_id)
            .await?;

        Ok(FavoriteCheckResponse {
            favorite_id: favorite.map(|f| f.id),
        })
    }

    #[instrument(skip(self))]
    pub async fn list_player_favorites(
        &self,
        actor: Actor,
        user_id: Snowflake,
        filter: ActivityFilter,
    ) -> ServiceResult<Vec<FavoritePlayerAdvertisementResponse>> {
        actor.ensure_self_or_admin(user_id)?;

        let favorites = self
            .ctx
            .player_advertisement_repo()
            .find_favorited_by(user_id, filter)
            .await?;
        let related = self
            .ctx
            .related(favorites.iter().map(|(_, ad)| ad.player_id))
            .await?;

        Ok(favorites
            .iter()
            .map(|(id, ad)| related.favorite_player_advertisement(*id, user_id, ad))
            .collect::<Result<Vec<_>, DomainError>>()?)
    }

    #[instrument(skip(self))]
    pub async fn list_club_favorites(
        &self,
        actor: Actor,
        user_id: Snowflake,
        filter: ActivityFilter,
    ) -> ServiceResult<Vec<FavoriteClubAdvertisementResponse>> {
        actor.ensure_self_or_admin(user_id)?;

        let favorites = self
            .ctx
            .club_advertisement_repo()
            .find_favorited_by(user_id, filter)
            .await?;
        let related = self
            .ctx
            .related(favorites.iter().map(|(_, ad)| ad.club_member_id))
            .await?;

        Ok(favorites
            .iter()
            .map(|(id, ad)| related.favorite_club_advertisement(*id, user_id, ad))
            .collect::<Result<Vec<_>, DomainError>>()?)
    }
}

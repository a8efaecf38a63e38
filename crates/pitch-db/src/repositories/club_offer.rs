//! PostgreSQL implementation of ClubOfferRepository
//!
//! Club offers are sent by club members on player advertisements.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use pitch_core::entities::ClubOffer;
use pitch_core::error::DomainError;
use pitch_core::traits::{ClubOfferRepository, RepoResult};
use pitch_core::value_objects::{OfferStatusKind, Snowflake};

use crate::mappers::offers_from_models;
use crate::models::ClubOfferModel;

use super::error::{map_db_error, map_write_error};

const OFFER_COLUMNS: &str = "co.id, co.player_advertisement_id, co.offer_status_id, \
     co.club_name, co.league, co.region, co.player_position_id, co.salary, \
     co.additional_information, co.creation_date, co.club_member_id";

#[derive(Clone)]
pub struct PgClubOfferRepository {
    pool: PgPool,
}

impl PgClubOfferRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClubOfferRepository for PgClubOfferRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<ClubOffer>> {
        let result = sqlx::query_as::<_, ClubOfferModel>(&format!(
            "SELECT {OFFER_COLUMNS} FROM club_offers co WHERE co.id = $1"
        ))
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(ClubOffer::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<ClubOffer>> {
        let result = sqlx::query_as::<_, ClubOfferModel>(&format!(
            "SELECT {OFFER_COLUMNS} FROM club_offers co ORDER BY co.creation_date DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        offers_from_models(result)
    }

    #[instrument(skip(self))]
    async fn find_received(&self, player_id: Snowflake) -> RepoResult<Vec<ClubOffer>> {
        let result = sqlx::query_as::<_, ClubOfferModel>(&format!(
            "SELECT {OFFER_COLUMNS}
             FROM club_offers co
             JOIN player_advertisements pa ON pa.id = co.player_advertisement_id
             WHERE pa.player_id = $1
             ORDER BY co.creation_date DESC"
        ))
        .bind(player_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        offers_from_models(result)
    }

    #[instrument(skip(self))]
    async fn find_sent(&self, club_member_id: Snowflake) -> RepoResult<Vec<ClubOffer>> {
        let result = sqlx::query_as::<_, ClubOfferModel>(&format!(
            "SELECT {OFFER_COLUMNS}
             FROM club_offers co
             WHERE co.club_member_id = $1
             ORDER BY co.creation_date DESC"
        ))
        .bind(club_member_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        offers_from_models(result)
    }

    #[instrument(skip(self))]
    async fn has_pending(
        &self,
        player_advertisement_id: Snowflake,
        club_member_id: Snowflake,
    ) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(
                SELECT 1 FROM club_offers
                WHERE player_advertisement_id = $1 AND club_member_id = $2
                  AND offer_status_id = $3
            )
            ",
        )
        .bind(player_advertisement_id.into_inner())
        .bind(club_member_id.into_inner())
        .bind(OfferStatusKind::Offered.id().into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn create(&self, offer: &ClubOffer) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO club_offers (id, player_advertisement_id, offer_status_id, club_name,
                                     league, region, player_position_id, salary,
                                     additional_information, creation_date, club_member_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            ",
        )
        .bind(offer.id.into_inner())
        .bind(offer.player_advertisement_id.into_inner())
        .bind(offer.status.id().into_inner())
        .bind(&offer.club_name)
        .bind(&offer.league)
        .bind(&offer.region)
        .bind(offer.player_position_id.into_inner())
        .bind(offer.salary)
        .bind(&offer.additional_information)
        .bind(offer.creation_date)
        .bind(offer.club_member_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(|e| map_write_error(e, || DomainError::DuplicateOffer))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn answer(&self, id: Snowflake, status: OfferStatusKind) -> RepoResult<()> {
        let result = sqlx::query(
            r"UPDATE club_offers SET offer_status_id = $2 WHERE id = $1 AND offer_status_id = $3",
        )
        .bind(id.into_inner())
        .bind(status.id().into_inner())
        .bind(OfferStatusKind::Offered.id().into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            let exists =
                sqlx::query_scalar::<_, bool>(r"SELECT EXISTS(SELECT 1 FROM club_offers WHERE id = $1)")
                    .bind(id.into_inner())
                    .fetch_one(&self.pool)
                    .await
                    .map_err(map_db_error)?;
            return Err(if exists {
                DomainError::OfferNotPending
            } else {
                DomainError::ClubOfferNotFound(id)
            });
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        let result = sqlx::query(r"DELETE FROM club_offers WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::ClubOfferNotFound(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn count(&self) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>(r"SELECT COUNT(*) FROM club_offers")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgClubOfferRepository>();
    }
}

//! PostgreSQL implementation of PlayerOfferRepository
//!
//! Player offers are sent by players on club advertisements.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use pitch_core::entities::PlayerOffer;
use pitch_core::error::DomainError;
use pitch_core::traits::{PlayerOfferRepository, RepoResult};
use pitch_core::value_objects::{OfferStatusKind, Snowflake};

use crate::mappers::offers_from_models;
use crate::models::PlayerOfferModel;

use super::error::{map_db_error, map_write_error};

const OFFER_COLUMNS: &str = "po.id, po.club_advertisement_id, po.offer_status_id, \
     po.player_position_id, po.age, po.height, po.player_foot_id, po.salary, \
     po.additional_information, po.creation_date, po.player_id";

#[derive(Clone)]
pub struct PgPlayerOfferRepository {
    pool: PgPool,
}

impl PgPlayerOfferRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PlayerOfferRepository for PgPlayerOfferRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<PlayerOffer>> {
        let result = sqlx::query_as::<_, PlayerOfferModel>(&format!(
            "SELECT {OFFER_COLUMNS} FROM player_offers po WHERE po.id = $1"
        ))
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(PlayerOffer::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<PlayerOffer>> {
        let result = sqlx::query_as::<_, PlayerOfferModel>(&format!(
            "SELECT {OFFER_COLUMNS} FROM player_offers po ORDER BY po.creation_date DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        offers_from_models(result)
    }

    #[instrument(skip(self))]
    async fn find_received(&self, club_member_id: Snowflake) -> RepoResult<Vec<PlayerOffer>> {
        let result = sqlx::query_as::<_, PlayerOfferModel>(&format!(
            "SELECT {OFFER_COLUMNS}
             FROM player_offers po
             JOIN club_advertisements ca ON ca.id = po.club_advertisement_id
             WHERE ca.club_member_id = $1
             ORDER BY po.creation_date DESC"
        ))
        .bind(club_member_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        offers_from_models(result)
    }

    #[instrument(skip(self))]
    async fn find_sent(&self, player_id: Snowflake) -> RepoResult<Vec<PlayerOffer>> {
        let result = sqlx::query_as::<_, PlayerOfferModel>(&format!(
            "SELECT {OFFER_COLUMNS}
             FROM player_offers po
             WHERE po.player_id = $1
             ORDER BY po.creation_date DESC"
        ))
        .bind(player_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        offers_from_models(result)
    }

    #[instrument(skip(self))]
    async fn has_pending(
        &self,
        club_advertisement_id: Snowflake,
        player_id: Snowflake,
    ) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(
                SELECT 1 FROM player_offers
                WHERE club_advertisement_id = $1 AND player_id = $2 AND offer_status_id = $3
            )
            ",
        )
        .bind(club_advertisement_id.into_inner())
        .bind(player_id.into_inner())
        .bind(OfferStatusKind::Offered.id().into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn create(&self, offer: &PlayerOffer) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO player_offers (id, club_advertisement_id, offer_status_id,
                                       player_position_id, age, height, player_foot_id, salary,
                                       additional_information, creation_date, player_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            ",
        )
        .bind(offer.id.into_inner())
        .bind(offer.club_advertisement_id.into_inner())
        .bind(offer.status.id().into_inner())
        .bind(offer.player_position_id.into_inner())
        .bind(offer.age)
        .bind(offer.height)
        .bind(offer.player_foot_id.into_inner())
        .bind(offer.salary)
        .bind(&offer.additional_information)
        .bind(offer.creation_date)
        .bind(offer.player_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(|e| map_write_error(e, || DomainError::DuplicateOffer))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn answer(&self, id: Snowflake, status: OfferStatusKind) -> RepoResult<()> {
        let result = sqlx::query(
            r"UPDATE player_offers SET offer_status_id = $2 WHERE id = $1 AND offer_status_id = $3",
        )
        .bind(id.into_inner())
        .bind(status.id().into_inner())
        .bind(OfferStatusKind::Offered.id().into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            let exists =
                sqlx::query_scalar::<_, bool>(r"SELECT EXISTS(SELECT 1 FROM player_offers WHERE id = $1)")
                    .bind(id.into_inner())
                    .fetch_one(&self.pool)
                    .await
                    .map_err(map_db_error)?;
            return Err(if exists {
                DomainError::OfferNotPending
            } else {
                DomainError::PlayerOfferNotFound(id)
            });
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        let result = sqlx::query(r"DELETE FROM player_offers WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::PlayerOfferNotFound(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn count(&self) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>(r"SELECT COUNT(*) FROM player_offers")
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
        assert_send_sync::<PgPlayerOfferRepository>();
    }
}

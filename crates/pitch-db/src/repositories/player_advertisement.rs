//! PostgreSQL implementation of PlayerAdvertisementRepository
//!
//! Every advertisement owns exactly one `salary_ranges` row, written and
//! removed in the same transaction as the advertisement.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;

use pitch_core::entities::PlayerAdvertisement;
use pitch_core::error::DomainError;
use pitch_core::traits::{ActivityFilter, PlayerAdvertisementRepository, RepoResult};
use pitch_core::value_objects::Snowflake;

use crate::models::{FavoritedPlayerAdvertisementModel, PlayerAdvertisementModel};

use super::error::{map_db_error, map_write_error, unexpected_duplicate};

const SELECT_AD: &str = r"
    SELECT pa.id, pa.player_id, pa.player_position_id, pa.league, pa.region, pa.age,
           pa.height, pa.player_foot_id, pa.salary_range_id, sr.min_salary, sr.max_salary,
           pa.creation_date, pa.end_date
    FROM player_advertisements pa
    JOIN salary_ranges sr ON sr.id = pa.salary_range_id";

/// PostgreSQL implementation of PlayerAdvertisementRepository
#[derive(Clone)]
pub struct PgPlayerAdvertisementRepository {
    pool: PgPool,
}

impl PgPlayerAdvertisementRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PlayerAdvertisementRepository for PgPlayerAdvertisementRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<PlayerAdvertisement>> {
        let result =
            sqlx::query_as::<_, PlayerAdvertisementModel>(&format!("{SELECT_AD} WHERE pa.id = $1"))
                .bind(id.into_inner())
                .fetch_optional(&self.pool)
                .await
                .map_err(map_db_error)?;

        Ok(result.map(PlayerAdvertisement::from))
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<PlayerAdvertisement>> {
        let result = sqlx::query_as::<_, PlayerAdvertisementModel>(&format!(
            "{SELECT_AD} ORDER BY pa.end_date DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.into_iter().map(PlayerAdvertisement::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_active(&self) -> RepoResult<Vec<PlayerAdvertisement>> {
        let result = sqlx::query_as::<_, PlayerAdvertisementModel>(&format!(
            "{SELECT_AD} WHERE pa.end_date >= NOW() ORDER BY pa.end_date DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.into_iter().map(PlayerAdvertisement::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_owner(
        &self,
        player_id: Snowflake,
        filter: ActivityFilter,
    ) -> RepoResult<Vec<PlayerAdvertisement>> {
        let result = sqlx::query_as::<_, PlayerAdvertisementModel>(&format!(
            "{SELECT_AD}
             WHERE pa.player_id = $1 AND (pa.end_date >= NOW()) = $2
             ORDER BY pa.end_date DESC"
        ))
        .bind(player_id.into_inner())
        .bind(filter.is_active())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.into_iter().map(PlayerAdvertisement::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_favorited_by(
        &self,
        user_id: Snowflake,
        filter: ActivityFilter,
    ) -> RepoResult<Vec<(Snowflake, PlayerAdvertisement)>> {
        let result = sqlx::query_as::<_, FavoritedPlayerAdvertisementModel>(
            r"
            SELECT f.id AS favorite_id,
                   pa.id, pa.player_id, pa.player_position_id, pa.league, pa.region, pa.age,
                   pa.height, pa.player_foot_id, pa.salary_range_id, sr.min_salary,
                   sr.max_salary, pa.creation_date, pa.end_date
            FROM favorite_player_advertisements f
            JOIN player_advertisements pa ON pa.id = f.player_advertisement_id
            JOIN salary_ranges sr ON sr.id = pa.salary_range_id
            WHERE f.user_id = $1 AND (pa.end_date >= NOW()) = $2
            ORDER BY pa.end_date DESC
            ",
        )
        .bind(user_id.into_inner())
        .bind(filter.is_active())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result
            .into_iter()
            .map(|row| {
                (
                    Snowflake::new(row.favorite_id),
                    PlayerAdvertisement::from(row.advertisement),
                )
            })
            .collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, ad: &PlayerAdvertisement) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query(r"INSERT INTO salary_ranges (id, min_salary, max_salary) VALUES ($1, $2, $3)")
            .bind(ad.salary_range.id.into_inner())
            .bind(ad.salary_range.min)
            .bind(ad.salary_range.max)
            .execute(&mut *tx)
            .await
            .map_err(|e| map_write_error(e, unexpected_duplicate))?;

        sqlx::query(
            r"
            INSERT INTO player_advertisements (id, player_id, player_position_id, league, region,
                                               age, height, player_foot_id, salary_range_id,
                                               creation_date, end_date)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            ",
        )
        .bind(ad.id.into_inner())
        .bind(ad.player_id.into_inner())
        .bind(ad.player_position_id.into_inner())
        .bind(&ad.league)
        .bind(&ad.region)
        .bind(ad.age)
        .bind(ad.height)
        .bind(ad.player_foot_id.into_inner())
        .bind(ad.salary_range.id.into_inner())
        .bind(ad.creation_date)
        .bind(ad.end_date)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_write_error(e, unexpected_duplicate))?;

        tx.commit().await.map_err(map_db_error)?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn update(&self, ad: &PlayerAdvertisement) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let result = sqlx::query(
            r"
            UPDATE player_advertisements
            SET player_position_id = $2, league = $3, region = $4, age = $5, height = $6,
                player_foot_id = $7, end_date = $8
            WHERE id = $1
            ",
        )
        .bind(ad.id.into_inner())
        .bind(ad.player_position_id.into_inner())
        .bind(&ad.league)
        .bind(&ad.region)
        .bind(ad.age)
        .bind(ad.height)
        .bind(ad.player_foot_id.into_inner())
        .bind(ad.end_date)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_write_error(e, unexpected_duplicate))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::PlayerAdvertisementNotFound(ad.id));
        }

        sqlx::query(r"UPDATE salary_ranges SET min_salary = $2, max_salary = $3 WHERE id = $1")
            .bind(ad.salary_range.id.into_inner())
            .bind(ad.salary_range.min)
            .bind(ad.salary_range.max)
            .execute(&mut *tx)
            .await
            .map_err(|e| map_write_error(e, unexpected_duplicate))?;

        tx.commit().await.map_err(map_db_error)?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn renew(&self, id: Snowflake, end_date: DateTime<Utc>) -> RepoResult<()> {
        let result = sqlx::query(r"UPDATE player_advertisements SET end_date = $2 WHERE id = $1")
            .bind(id.into_inner())
            .bind(end_date)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::PlayerAdvertisementNotFound(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let salary_range_id = sqlx::query_scalar::<_, i64>(
            r"DELETE FROM player_advertisements WHERE id = $1 RETURNING salary_range_id",
        )
        .bind(id.into_inner())
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?
        .ok_or(DomainError::PlayerAdvertisementNotFound(id))?;

        sqlx::query(r"DELETE FROM salary_ranges WHERE id = $1")
            .bind(salary_range_id)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn count(&self) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>(r"SELECT COUNT(*) FROM player_advertisements")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn count_active(&self) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>(
            r"SELECT COUNT(*) FROM player_advertisements WHERE end_date >= NOW()",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }
}

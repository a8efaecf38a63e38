//! PostgreSQL implementation of ClubAdvertisementRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;

use pitch_core::entities::ClubAdvertisement;
use pitch_core::error::DomainError;
use pitch_core::traits::{ActivityFilter, ClubAdvertisementRepository, RepoResult};
use pitch_core::value_objects::Snowflake;

use crate::models::{ClubAdvertisementModel, FavoritedClubAdvertisementModel};

use super::error::{map_db_error, map_write_error, unexpected_duplicate};

const SELECT_AD: &str = r"
    SELECT ca.id, ca.club_member_id, ca.player_position_id, ca.club_name, ca.league,
           ca.region, ca.salary_range_id, sr.min_salary, sr.max_salary,
           ca.creation_date, ca.end_date
    FROM club_advertisements ca
    JOIN salary_ranges sr ON sr.id = ca.salary_range_id";

/// PostgreSQL implementation of ClubAdvertisementRepository
#[derive(Clone)]
pub struct PgClubAdvertisementRepository {
    pool: PgPool,
}

impl PgClubAdvertisementRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClubAdvertisementRepository for PgClubAdvertisementRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<ClubAdvertisement>> {
        let result =
            sqlx::query_as::<_, ClubAdvertisementModel>(&format!("{SELECT_AD} WHERE ca.id = $1"))
                .bind(id.into_inner())
                .fetch_optional(&self.pool)
                .await
                .map_err(map_db_error)?;

        Ok(result.map(ClubAdvertisement::from))
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<ClubAdvertisement>> {
        let result = sqlx::query_as::<_, ClubAdvertisementModel>(&format!(
            "{SELECT_AD} ORDER BY ca.end_date DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.into_iter().map(ClubAdvertisement::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_active(&self) -> RepoResult<Vec<ClubAdvertisement>> {
        let result = sqlx::query_as::<_, ClubAdvertisementModel>(&format!(
            "{SELECT_AD} WHERE ca.end_date >= NOW() ORDER BY ca.end_date DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.into_iter().map(ClubAdvertisement::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_owner(
        &self,
        club_member_id: Snowflake,
        filter: ActivityFilter,
    ) -> RepoResult<Vec<ClubAdvertisement>> {
        let result = sqlx::query_as::<_, ClubAdvertisementModel>(&format!(
            "{SELECT_AD}
             WHERE ca.club_member_id = $1 AND (ca.end_date >= NOW()) = $2
             ORDER BY ca.end_date DESC"
        ))
        .bind(club_member_id.into_inner())
        .bind(filter.is_active())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.into_iter().map(ClubAdvertisement::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_favorited_by(
        &self,
        user_id: Snowflake,
        filter: ActivityFilter,
    ) -> RepoResult<Vec<(Snowflake, ClubAdvertisement)>> {
        let result = sqlx::query_as::<_, FavoritedClubAdvertisementModel>(
            r"
            SELECT f.id AS favorite_id,
                   ca.id, ca.club_member_id, ca.player_position_id, ca.club_name, ca.league,
                   ca.region, ca.salary_range_id, sr.min_salary, sr.max_salary,
                   ca.creation_date, ca.end_date
            FROM favorite_club_advertisements f
            JOIN club_advertisements ca ON ca.id = f.club_advertisement_id
            JOIN salary_ranges sr ON sr.id = ca.salary_range_id
            WHERE f.user_id = $1 AND (ca.end_date >= NOW()) = $2
            ORDER BY ca.end_date DESC
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
                    ClubAdvertisement::from(row.advertisement),
                )
            })
            .collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, ad: &ClubAdvertisement) -> RepoResult<()> {
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
            INSERT INTO club_advertisements (id, club_member_id, player_position_id, club_name,
                                             league, region, salary_range_id, creation_date,
                                             end_date)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ",
        )
        .bind(ad.id.into_inner())
        .bind(ad.club_member_id.into_inner())
        .bind(ad.player_position_id.into_inner())
        .bind(&ad.club_name)
        .bind(&ad.league)
        .bind(&ad.region)
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
    async fn update(&self, ad: &ClubAdvertisement) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let result = sqlx::query(
            r"
            UPDATE club_advertisements
            SET player_position_id = $2, club_name = $3, league = $4, region = $5, end_date = $6
            WHERE id = $1
            ",
        )
        .bind(ad.id.into_inner())
        .bind(ad.player_position_id.into_inner())
        .bind(&ad.club_name)
        .bind(&ad.league)
        .bind(&ad.region)
        .bind(ad.end_date)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_write_error(e, unexpected_duplicate))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::ClubAdvertisementNotFound(ad.id));
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
        let result = sqlx::query(r"UPDATE club_advertisements SET end_date = $2 WHERE id = $1")
            .bind(id.into_inner())
            .bind(end_date)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::ClubAdvertisementNotFound(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let salary_range_id = sqlx::query_scalar::<_, i64>(
            r"DELETE FROM club_advertisements WHERE id = $1 RETURNING salary_range_id",
        )
        .bind(id.into_inner())
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?
        .ok_or(DomainError::ClubAdvertisementNotFound(id))?;

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
        sqlx::query_scalar::<_, i64>(r"SELECT COUNT(*) FROM club_advertisements")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn count_active(&self) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>(
            r"SELECT COUNT(*) FROM club_advertisements WHERE end_date >= NOW()",
        )
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
        assert_send_sync::<PgClubAdvertisementRepository>();
    }
}

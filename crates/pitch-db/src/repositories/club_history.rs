//! PostgreSQL implementation of ClubHistoryRepository
//!
//! A history row and its achievements row are created, updated and deleted
//! together.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use pitch_core::entities::ClubHistory;
use pitch_core::error::DomainError;
use pitch_core::traits::{ClubHistoryRepository, RepoResult};
use pitch_core::value_objects::Snowflake;

use crate::models::ClubHistoryModel;

use super::error::{map_db_error, map_write_error, unexpected_duplicate};

const SELECT_HISTORY: &str = r"
    SELECT ch.id, ch.achievements_id, a.number_of_matches, a.goals, a.assists,
           a.additional_achievements, ch.club_name, ch.league, ch.region, ch.start_date,
           ch.end_date, ch.player_position_id, ch.player_id
    FROM club_histories ch
    JOIN achievements a ON a.id = ch.achievements_id";

#[derive(Clone)]
pub struct PgClubHistoryRepository {
    pool: PgPool,
}

impl PgClubHistoryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClubHistoryRepository for PgClubHistoryRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<ClubHistory>> {
        let result =
            sqlx::query_as::<_, ClubHistoryModel>(&format!("{SELECT_HISTORY} WHERE ch.id = $1"))
                .bind(id.into_inner())
                .fetch_optional(&self.pool)
                .await
                .map_err(map_db_error)?;

        Ok(result.map(ClubHistory::from))
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<ClubHistory>> {
        let result = sqlx::query_as::<_, ClubHistoryModel>(&format!(
            "{SELECT_HISTORY} ORDER BY ch.end_date DESC, ch.id DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.into_iter().map(ClubHistory::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_player(&self, player_id: Snowflake) -> RepoResult<Vec<ClubHistory>> {
        let result = sqlx::query_as::<_, ClubHistoryModel>(&format!(
            "{SELECT_HISTORY} WHERE ch.player_id = $1 ORDER BY ch.end_date DESC, ch.id DESC"
        ))
        .bind(player_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.into_iter().map(ClubHistory::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, history: &ClubHistory) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;
        let achievements = &history.achievements;

        sqlx::query(
            r"
            INSERT INTO achievements (id, number_of_matches, goals, assists,
                                      additional_achievements)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(achievements.id.into_inner())
        .bind(achievements.number_of_matches)
        .bind(achievements.goals)
        .bind(achievements.assists)
        .bind(&achievements.additional_achievements)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_write_error(e, unexpected_duplicate))?;

        sqlx::query(
            r"
            INSERT INTO club_histories (id, achievements_id, club_name, league, region,
                                        start_date, end_date, player_position_id, player_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ",
        )
        .bind(history.id.into_inner())
        .bind(achievements.id.into_inner())
        .bind(&history.club_name)
        .bind(&history.league)
        .bind(&history.region)
        .bind(history.start_date)
        .bind(history.end_date)
        .bind(history.player_position_id.into_inner())
        .bind(history.player_id.into_inner())
        .execute(&mut *tx)
        .await
        .map_err(|e| map_write_error(e, unexpected_duplicate))?;

        tx.commit().await.map_err(map_db_error)?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn update(&self, history: &ClubHistory) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;
        let achievements = &history.achievements;

        let result = sqlx::query(
            r"
            UPDATE club_histories
            SET club_name = $2, league = $3, region = $4, start_date = $5, end_date = $6,
                player_position_id = $7
            WHERE id = $1
            ",
        )
        .bind(history.id.into_inner())
        .bind(&history.club_name)
        .bind(&history.league)
        .bind(&history.region)
        .bind(history.start_date)
        .bind(history.end_date)
        .bind(history.player_position_id.into_inner())
        .execute(&mut *tx)
        .await
        .map_err(|e| map_write_error(e, unexpected_duplicate))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::ClubHistoryNotFound(history.id));
        }

        sqlx::query(
            r"
            UPDATE achievements
            SET number_of_matches = $2, goals = $3, assists = $4, additional_achievements = $5
            WHERE id = $1
            ",
        )
        .bind(achievements.id.into_inner())
        .bind(achievements.number_of_matches)
        .bind(achievements.goals)
        .bind(achievements.assists)
        .bind(&achievements.additional_achievements)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_write_error(e, unexpected_duplicate))?;

        tx.commit().await.map_err(map_db_error)?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let achievements_id = sqlx::query_scalar::<_, i64>(
            r"DELETE FROM club_histories WHERE id = $1 RETURNING achievements_id",
        )
        .bind(id.into_inner())
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?
        .ok_or(DomainError::ClubHistoryNotFound(id))?;

        sqlx::query(r"DELETE FROM achievements WHERE id = $1")
            .bind(achievements_id)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn count(&self) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>(r"SELECT COUNT(*) FROM club_histories")
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
        assert_send_sync::<PgClubHistoryRepository>();
    }
}

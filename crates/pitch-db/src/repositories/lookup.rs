//! PostgreSQL implementation of LookupRepository
//!
//! Player positions and feet are admin-editable; offer statuses are seeded
//! and read-only.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use pitch_core::entities::{OfferStatus, PlayerFoot, PlayerPosition};
use pitch_core::error::DomainError;
use pitch_core::traits::{LookupRepository, RepoResult};
use pitch_core::value_objects::Snowflake;

use crate::models::{OfferStatusModel, PlayerFootModel, PlayerPositionModel};

use super::error::{map_db_error, map_foreign_key_violation, map_unique_violation};

/// PostgreSQL implementation of LookupRepository
#[derive(Clone)]
pub struct PgLookupRepository {
    pool: PgPool,
}

impl PgLookupRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LookupRepository for PgLookupRepository {
    // =========================================================================
    // Player positions
    // =========================================================================

    #[instrument(skip(self))]
    async fn find_positions(&self) -> RepoResult<Vec<PlayerPosition>> {
        let result = sqlx::query_as::<_, PlayerPositionModel>(
            r"SELECT id, position_name FROM player_positions ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.into_iter().map(PlayerPosition::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_position(&self, id: Snowflake) -> RepoResult<Option<PlayerPosition>> {
        let result = sqlx::query_as::<_, PlayerPositionModel>(
            r"SELECT id, position_name FROM player_positions WHERE id = $1",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(PlayerPosition::from))
    }

    #[instrument(skip(self))]
    async fn create_position(&self, position: &PlayerPosition) -> RepoResult<()> {
        sqlx::query(r"INSERT INTO player_positions (id, position_name) VALUES ($1, $2)")
            .bind(position.id.into_inner())
            .bind(&position.position_name)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                map_unique_violation(e, || {
                    DomainError::NameAlreadyExists(format!(
                        "Player position '{}'",
                        position.position_name
                    ))
                })
            })?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update_position(&self, position: &PlayerPosition) -> RepoResult<()> {
        let result = sqlx::query(r"UPDATE player_positions SET position_name = $2 WHERE id = $1")
            .bind(position.id.into_inner())
            .bind(&position.position_name)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                map_unique_violation(e, || {
                    DomainError::NameAlreadyExists(format!(
                        "Player position '{}'",
                        position.position_name
                    ))
                })
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::PlayerPositionNotFound(position.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_position(&self, id: Snowflake) -> RepoResult<()> {
        let result = sqlx::query(r"DELETE FROM player_positions WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(|e| map_foreign_key_violation(e, || DomainError::InUse("Player position")))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::PlayerPositionNotFound(id));
        }

        Ok(())
    }

    // =========================================================================
    // Player feet
    // =========================================================================

    #[instrument(skip(self))]
    async fn find_feet(&self) -> RepoResult<Vec<PlayerFoot>> {
        let result =
            sqlx::query_as::<_, PlayerFootModel>(r"SELECT id, name FROM player_feet ORDER BY id")
                .fetch_all(&self.pool)
                .await
                .map_err(map_db_error)?;

        Ok(result.into_iter().map(PlayerFoot::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_foot(&self, id: Snowflake) -> RepoResult<Option<PlayerFoot>> {
        let result =
            sqlx::query_as::<_, PlayerFootModel>(r"SELECT id, name FROM player_feet WHERE id = $1")
                .bind(id.into_inner())
                .fetch_optional(&self.pool)
                .await
                .map_err(map_db_error)?;

        Ok(result.map(PlayerFoot::from))
    }

    #[instrument(skip(self))]
    async fn create_foot(&self, foot: &PlayerFoot) -> RepoResult<()> {
        sqlx::query(r"INSERT INTO player_feet (id, name) VALUES ($1, $2)")
            .bind(foot.id.into_inner())
            .bind(&foot.name)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                map_unique_violation(e, || {
                    DomainError::NameAlreadyExists(format!("Player foot '{}'", foot.name))
                })
            })?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update_foot(&self, foot: &PlayerFoot) -> RepoResult<()> {
        let result = sqlx::query(r"UPDATE player_feet SET name = $2 WHERE id = $1")
            .bind(foot.id.into_inner())
            .bind(&foot.name)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                map_unique_violation(e, || {
                    DomainError::NameAlreadyExists(format!("Player foot '{}'", foot.name))
                })
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::PlayerFootNotFound(foot.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_foot(&self, id: Snowflake) -> RepoResult<()> {
        let result = sqlx::query(r"DELETE FROM player_feet WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(|e| map_foreign_key_violation(e, || DomainError::InUse("Player foot")))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::PlayerFootNotFound(id));
        }

        Ok(())
    }

    // =========================================================================
    // Offer statuses
    // =========================================================================

    #[instrument(skip(self))]
    async fn find_offer_statuses(&self) -> RepoResult<Vec<OfferStatus>> {
        let result = sqlx::query_as::<_, OfferStatusModel>(
            r"SELECT id, status_name FROM offer_statuses ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.into_iter().map(OfferStatus::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_offer_status(&self, id: Snowflake) -> RepoResult<Option<OfferStatus>> {
        let result = sqlx::query_as::<_, OfferStatusModel>(
            r"SELECT id, status_name FROM offer_statuses WHERE id = $1",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(OfferStatus::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgLookupRepository>();
    }
}

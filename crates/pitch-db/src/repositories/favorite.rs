//! PostgreSQL implementation of FavoriteRepository
//!
//! Player and club favorites live in separate tables with the same shape.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use pitch_core::entities::{AdvertisementKind, Favorite};
use pitch_core::error::DomainError;
use pitch_core::traits::{FavoriteRepository, RepoResult};
use pitch_core::value_objects::Snowflake;

use crate::mappers::favorite_from_model;
use crate::models::FavoriteModel;

use super::error::{map_db_error, map_write_error};

/// Table and advertisement column for a favorite kind
fn table_for(kind: AdvertisementKind) -> (&'static str, &'static str) {
    match kind {
        AdvertisementKind::Player => ("favorite_player_advertisements", "player_advertisement_id"),
        AdvertisementKind::Club => ("favorite_club_advertisements", "club_advertisement_id"),
    }
}

#[derive(Clone)]
pub struct PgFavoriteRepository {
    pool: PgPool,
}

impl PgFavoriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FavoriteRepository for PgFavoriteRepository {
    #[instrument(skip(self))]
    async fn find_by_id(
        &self,
        kind: AdvertisementKind,
        id: Snowflake,
    ) -> RepoResult<Option<Favorite>> {
        let (table, column) = table_for(kind);
        let result = sqlx::query_as::<_, FavoriteModel>(&format!(
            "SELECT id, {column} AS advertisement_id, user_id FROM {table} WHERE id = $1"
        ))
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(|model| favorite_from_model(kind, model)))
    }

    #[instrument(skip(self))]
    async fn find_for(
        &self,
        kind: AdvertisementKind,
        advertisement_id: Snowflake,
        user_id: Snowflake,
    ) -> RepoResult<Option<Favorite>> {
        let (table, column) = table_for(kind);
        let result = sqlx::query_as::<_, FavoriteModel>(&format!(
            "SELECT id, {column} AS advertisement_id, user_id FROM {table}
             WHERE {column} = $1 AND user_id = $2"
        ))
        .bind(advertisement_id.into_inner())
        .bind(user_id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(|model| favorite_from_model(kind, model)))
    }

    #[instrument(skip(self))]
    async fn create(&self, favorite: &Favorite) -> RepoResult<()> {
        let (table, column) = table_for(favorite.kind);
        sqlx::query(&format!(
            "INSERT INTO {table} (id, {column}, user_id) VALUES ($1, $2, $3)"
        ))
        .bind(favorite.id.into_inner())
        .bind(favorite.advertisement_id.into_inner())
        .bind(favorite.user_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(|e| map_write_error(e, || DomainError::AlreadyFavorite))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, kind: AdvertisementKind, id: Snowflake) -> RepoResult<()> {
        let (table, _) = table_for(kind);
        let result = sqlx::query(&format!("DELETE FROM {table} WHERE id = $1"))
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::FavoriteNotFound(id));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgFavoriteRepository>();
    }

    #[test]
    fn test_table_for_kind() {
        assert_eq!(
            table_for(AdvertisementKind::Player),
            ("favorite_player_advertisements", "player_advertisement_id")
        );
        assert_eq!(table_for(AdvertisementKind::Club).1, "club_advertisement_id");
    }
}

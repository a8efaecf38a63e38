//! PostgreSQL implementation of ChatRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use pitch_core::entities::Chat;
use pitch_core::error::DomainError;
use pitch_core::traits::{ChatRepository, RepoResult};
use pitch_core::value_objects::Snowflake;

use crate::models::ChatModel;

use super::error::{map_db_error, map_write_error, unexpected_duplicate};

/// PostgreSQL implementation of ChatRepository
#[derive(Clone)]
pub struct PgChatRepository {
    pool: PgPool,
}

impl PgChatRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ChatRepository for PgChatRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Chat>> {
        let result =
            sqlx::query_as::<_, ChatModel>(r"SELECT id, user1_id, user2_id FROM chats WHERE id = $1")
                .bind(id.into_inner())
                .fetch_optional(&self.pool)
                .await
                .map_err(map_db_error)?;

        Ok(result.map(Chat::from))
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<Chat>> {
        let result = sqlx::query_as::<_, ChatModel>(
            r"SELECT id, user1_id, user2_id FROM chats ORDER BY id DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.into_iter().map(Chat::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_between(
        &self,
        user_a: Snowflake,
        user_b: Snowflake,
    ) -> RepoResult<Option<Chat>> {
        let result = sqlx::query_as::<_, ChatModel>(
            r"
            SELECT id, user1_id, user2_id
            FROM chats
            WHERE LEAST(user1_id, user2_id) = LEAST($1::BIGINT, $2::BIGINT)
              AND GREATEST(user1_id, user2_id) = GREATEST($1::BIGINT, $2::BIGINT)
            ORDER BY id
            LIMIT 1
            ",
        )
        .bind(user_a.into_inner())
        .bind(user_b.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Chat::from))
    }

    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: Snowflake) -> RepoResult<Vec<Chat>> {
        // Chats without messages sort last, newest chat first among them
        let result = sqlx::query_as::<_, ChatModel>(
            r"
            SELECT c.id, c.user1_id, c.user2_id
            FROM chats c
            LEFT JOIN LATERAL (
                SELECT MAX(m.sent_at) AS last_sent_at FROM messages m WHERE m.chat_id = c.id
            ) latest ON TRUE
            WHERE c.user1_id = $1 OR c.user2_id = $1
            ORDER BY latest.last_sent_at DESC NULLS LAST, c.id DESC
            ",
        )
        .bind(user_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.into_iter().map(Chat::from).collect())
    }

    #[instrument(skip(self))]
    async fn create_or_get(&self, chat: &Chat) -> RepoResult<(Chat, bool)> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        // Held until commit; keyed by the unordered pair
        sqlx::query(
            r"
            SELECT pg_advisory_xact_lock(hashtextextended(
                LEAST($1::BIGINT, $2::BIGINT)::TEXT || ':' || GREATEST($1::BIGINT, $2::BIGINT)::TEXT,
                0
            ))
            ",
        )
        .bind(chat.user1_id.into_inner())
        .bind(chat.user2_id.into_inner())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let existing = sqlx::query_as::<_, ChatModel>(
            r"
            SELECT id, user1_id, user2_id
            FROM chats
            WHERE LEAST(user1_id, user2_id) = LEAST($1::BIGINT, $2::BIGINT)
              AND GREATEST(user1_id, user2_id) = GREATEST($1::BIGINT, $2::BIGINT)
            ORDER BY id
            LIMIT 1
            ",
        )
        .bind(chat.user1_id.into_inner())
        .bind(chat.user2_id.into_inner())
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if let Some(existing) = existing {
            tx.commit().await.map_err(map_db_error)?;
            return Ok((Chat::from(existing), false));
        }

        sqlx::query(r"INSERT INTO chats (id, user1_id, user2_id) VALUES ($1, $2, $3)")
            .bind(chat.id.into_inner())
            .bind(chat.user1_id.into_inner())
            .bind(chat.user2_id.into_inner())
            .execute(&mut *tx)
            .await
            .map_err(|e| map_write_error(e, unexpected_duplicate))?;

        tx.commit().await.map_err(map_db_error)?;
        Ok((*chat, true))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        let result = sqlx::query(r"DELETE FROM chats WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::ChatNotFound(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn count(&self) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>(r"SELECT COUNT(*) FROM chats")
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
        assert_send_sync::<PgChatRepository>();
    }
}

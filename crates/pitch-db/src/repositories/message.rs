//! PostgreSQL implementation of MessageRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use pitch_core::entities::Message;
use pitch_core::error::DomainError;
use pitch_core::traits::{MessageRepository, RepoResult};
use pitch_core::value_objects::Snowflake;

use crate::models::MessageModel;

use super::error::{map_db_error, map_write_error, unexpected_duplicate};

/// PostgreSQL implementation of MessageRepository
#[derive(Clone)]
pub struct PgMessageRepository {
    pool: PgPool,
}

impl PgMessageRepository {
    /// Create a new PgMessageRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MessageRepository for PgMessageRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Message>> {
        let result = sqlx::query_as::<_, MessageModel>(
            r"
            SELECT id, chat_id, sender_id, receiver_id, content, sent_at
            FROM messages
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Message::from))
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<Message>> {
        let result = sqlx::query_as::<_, MessageModel>(
            r"
            SELECT id, chat_id, sender_id, receiver_id, content, sent_at
            FROM messages
            ORDER BY sent_at DESC, id DESC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.into_iter().map(Message::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_chat(&self, chat_id: Snowflake) -> RepoResult<Vec<Message>> {
        let result = sqlx::query_as::<_, MessageModel>(
            r"
            SELECT id, chat_id, sender_id, receiver_id, content, sent_at
            FROM messages
            WHERE chat_id = $1
            ORDER BY sent_at ASC, id ASC
            ",
        )
        .bind(chat_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.into_iter().map(Message::from).collect())
    }

    #[instrument(skip(self, message), fields(chat_id = %message.chat_id))]
    async fn create(&self, message: &Message) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO messages (id, chat_id, sender_id, receiver_id, content, sent_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(message.id.into_inner())
        .bind(message.chat_id.into_inner())
        .bind(message.sender_id.into_inner())
        .bind(message.receiver_id.into_inner())
        .bind(&message.content)
        .bind(message.timestamp)
        .execute(&self.pool)
        .await
        .map_err(|e| map_write_error(e, unexpected_duplicate))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        let result = sqlx::query(r"DELETE FROM messages WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::MessageNotFound(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn count(&self) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>(r"SELECT COUNT(*) FROM messages")
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
        assert_send_sync::<PgMessageRepository>();
    }
}

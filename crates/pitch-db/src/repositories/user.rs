//! PostgreSQL implementation of UserRepository

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};
use tracing::{info, instrument};

use pitch_core::entities::User;
use pitch_core::error::DomainError;
use pitch_core::traits::{RepoResult, UserRepository};
use pitch_core::value_objects::{OfferStatusKind, Roles, Snowflake};

use crate::models::UserModel;

use super::error::{map_db_error, map_unique_violation};

const USER_COLUMNS: &str =
    "id, email, first_name, last_name, phone_number, location, roles, created_at";

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Lock the user row and return its roles
    async fn lock_user(
        tx: &mut Transaction<'_, Postgres>,
        id: Snowflake,
        unknown_id: Snowflake,
    ) -> RepoResult<Roles> {
        if id == unknown_id {
            return Err(DomainError::UnknownUserProtected);
        }

        let roles =
            sqlx::query_scalar::<_, i16>(r"SELECT roles FROM users WHERE id = $1 FOR UPDATE")
                .bind(id.into_inner())
                .fetch_optional(&mut **tx)
                .await
                .map_err(map_db_error)?
                .ok_or(DomainError::UserNotFound(id))?;

        Ok(Roles::from_i16(roles))
    }

    /// Move everything the user owns to the unknown user
    ///
    /// Pending offers touching the user are rejected, their advertisements end
    /// now, favorites and career records are removed.
    async fn hand_over_rows(
        tx: &mut Transaction<'_, Postgres>,
        id: Snowflake,
        unknown_id: Snowflake,
    ) -> RepoResult<()> {
        let id = id.into_inner();
        let unknown = unknown_id.into_inner();
        let offered = OfferStatusKind::Offered.id().into_inner();
        let rejected = OfferStatusKind::Rejected.id().into_inner();

        // Pending offers sent by the user or aimed at the user's advertisements
        execute(
            tx,
            r"
            UPDATE club_offers SET offer_status_id = $2
            WHERE offer_status_id = $3
              AND (club_member_id = $1
                   OR player_advertisement_id IN
                      (SELECT id FROM player_advertisements WHERE player_id = $1))
            ",
            &[id, rejected, offered],
        )
        .await?;
        execute(
            tx,
            r"
            UPDATE player_offers SET offer_status_id = $2
            WHERE offer_status_id = $3
              AND (player_id = $1
                   OR club_advertisement_id IN
                      (SELECT id FROM club_advertisements WHERE club_member_id = $1))
            ",
            &[id, rejected, offered],
        )
        .await?;

        let reassignments = [
            r"UPDATE club_offers SET club_member_id = $2 WHERE club_member_id = $1",
            r"UPDATE player_offers SET player_id = $2 WHERE player_id = $1",
            r"
            UPDATE player_advertisements
            SET player_id = $2, end_date = LEAST(end_date, NOW())
            WHERE player_id = $1
            ",
            r"
            UPDATE club_advertisements
            SET club_member_id = $2, end_date = LEAST(end_date, NOW())
            WHERE club_member_id = $1
            ",
            // Chats already held with the unknown user
            r"
            DELETE FROM chats
            WHERE (user1_id = $1 AND user2_id = $2) OR (user1_id = $2 AND user2_id = $1)
            ",
            r"UPDATE chats SET user1_id = $2 WHERE user1_id = $1",
            r"UPDATE chats SET user2_id = $2 WHERE user2_id = $1",
            r"UPDATE messages SET sender_id = $2 WHERE sender_id = $1",
            r"UPDATE messages SET receiver_id = $2 WHERE receiver_id = $1",
            r"UPDATE problems SET requester_id = $2 WHERE requester_id = $1",
        ];
        for sql in reassignments {
            execute(tx, sql, &[id, unknown]).await?;
        }

        execute(tx, r"DELETE FROM favorite_player_advertisements WHERE user_id = $1", &[id])
            .await?;
        execute(tx, r"DELETE FROM favorite_club_advertisements WHERE user_id = $1", &[id])
            .await?;

        let achievements = sqlx::query_scalar::<_, i64>(
            r"DELETE FROM club_histories WHERE player_id = $1 RETURNING achievements_id",
        )
        .bind(id)
        .fetch_all(&mut **tx)
        .await
        .map_err(map_db_error)?;

        sqlx::query(r"DELETE FROM achievements WHERE id = ANY($1)")
            .bind(achievements)
            .execute(&mut **tx)
            .await
            .map_err(map_db_error)?;

        Ok(())
    }
}

/// Run one statement binding `params` in order
async fn execute(
    tx: &mut Transaction<'_, Postgres>,
    sql: &str,
    params: &[i64],
) -> RepoResult<u64> {
    let query = params
        .iter()
        .fold(sqlx::query(sql), |query, param| query.bind(*param));

    let result = query.execute(&mut **tx).await.map_err(map_db_error)?;
    Ok(result.rows_affected())
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
        ))
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self))]
    async fn find_by_ids(&self, ids: &[Snowflake]) -> RepoResult<Vec<User>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let raw: Vec<i64> = ids.iter().map(|id| id.into_inner()).collect();

        let result = sqlx::query_as::<_, UserModel>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE id = ANY($1)"
        ))
        .bind(raw)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.into_iter().map(User::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE LOWER(email) = LOWER($1)"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(User::from))
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<User>> {
        let result = sqlx::query_as::<_, UserModel>(&format!(
            "SELECT {USER_COLUMNS} FROM users
             WHERE LOWER(email) <> LOWER($1)
             ORDER BY created_at DESC"
        ))
        .bind(User::UNKNOWN_EMAIL)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.into_iter().map(User::from).collect())
    }

    #[instrument(skip(self))]
    async fn email_exists(&self, email: &str) -> RepoResult<bool> {
        sqlx::query_scalar::<_, bool>(
            r"SELECT EXISTS(SELECT 1 FROM users WHERE LOWER(email) = LOWER($1))",
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)
    }

    #[instrument(skip(self, password_hash))]
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO users (id, email, first_name, last_name, phone_number, location,
                               roles, password_hash, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ",
        )
        .bind(user.id.into_inner())
        .bind(&user.email)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.phone_number)
        .bind(&user.location)
        .bind(user.roles.to_i16())
        .bind(password_hash)
        .bind(user.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::EmailAlreadyExists))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update(&self, user: &User) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE users
            SET first_name = $2, last_name = $3, phone_number = $4, location = $5, roles = $6
            WHERE id = $1
            ",
        )
        .bind(user.id.into_inner())
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.phone_number)
        .bind(&user.location)
        .bind(user.roles.to_i16())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::UserNotFound(user.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_password_hash(&self, id: Snowflake) -> RepoResult<Option<String>> {
        sqlx::query_scalar::<_, String>(r"SELECT password_hash FROM users WHERE id = $1")
            .bind(id.into_inner())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self, password_hash))]
    async fn update_password(&self, id: Snowflake, password_hash: &str) -> RepoResult<()> {
        let result = sqlx::query(r"UPDATE users SET password_hash = $2 WHERE id = $1")
            .bind(id.into_inner())
            .bind(password_hash)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::UserNotFound(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_with_reassignment(
        &self,
        id: Snowflake,
        unknown_id: Snowflake,
    ) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        Self::lock_user(&mut tx, id, unknown_id).await?;
        Self::hand_over_rows(&mut tx, id, unknown_id).await?;

        sqlx::query(r"DELETE FROM users WHERE id = $1")
            .bind(id.into_inner())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;
        info!(user_id = %id, "User deleted, rows handed over to unknown user");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn promote_with_reassignment(
        &self,
        id: Snowflake,
        unknown_id: Snowflake,
    ) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let roles = Self::lock_user(&mut tx, id, unknown_id).await?;
        if roles.is_admin() {
            return Err(DomainError::AlreadyAdmin);
        }
        Self::hand_over_rows(&mut tx, id, unknown_id).await?;

        sqlx::query(r"UPDATE users SET roles = $2 WHERE id = $1")
            .bind(id.into_inner())
            .bind(Roles::ADMIN.to_i16())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;
        info!(user_id = %id, "User promoted to admin, rows handed over to unknown user");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn count(&self) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>(
            r"SELECT COUNT(*) FROM users WHERE LOWER(email) <> LOWER($1)",
        )
        .bind(User::UNKNOWN_EMAIL)
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
        assert_send_sync::<PgUserRepository>();
    }
}

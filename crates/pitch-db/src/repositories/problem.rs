//! PostgreSQL implementation of ProblemRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use pitch_core::entities::Problem;
use pitch_core::error::DomainError;
use pitch_core::traits::{ProblemRepository, RepoResult};
use pitch_core::value_objects::Snowflake;

use crate::models::ProblemModel;

use super::error::{map_db_error, map_write_error, unexpected_duplicate};

#[derive(Clone)]
pub struct PgProblemRepository {
    pool: PgPool,
}

impl PgProblemRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProblemRepository for PgProblemRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Problem>> {
        let result = sqlx::query_as::<_, ProblemModel>(
            r"
            SELECT id, title, description, is_solved, creation_date, requester_id
            FROM problems
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Problem::from))
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<Problem>> {
        let result = sqlx::query_as::<_, ProblemModel>(
            r"
            SELECT id, title, description, is_solved, creation_date, requester_id
            FROM problems
            ORDER BY creation_date DESC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.into_iter().map(Problem::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_solved(&self, is_solved: bool) -> RepoResult<Vec<Problem>> {
        let result = sqlx::query_as::<_, ProblemModel>(
            r"
            SELECT id, title, description, is_solved, creation_date, requester_id
            FROM problems
            WHERE is_solved = $1
            ORDER BY creation_date DESC
            ",
        )
        .bind(is_solved)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.into_iter().map(Problem::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, problem: &Problem) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO problems (id, title, description, is_solved, creation_date, requester_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(problem.id.into_inner())
        .bind(&problem.title)
        .bind(&problem.description)
        .bind(problem.is_solved)
        .bind(problem.creation_date)
        .bind(problem.requester_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(|e| map_write_error(e, unexpected_duplicate))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn mark_solved(&self, id: Snowflake) -> RepoResult<()> {
        let result = sqlx::query(r"UPDATE problems SET is_solved = TRUE WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::ProblemNotFound(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        let result = sqlx::query(r"DELETE FROM problems WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::ProblemNotFound(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn count(&self) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>(r"SELECT COUNT(*) FROM problems")
            .fetch_one(&self.pool)
            .await
            .map_err(map_db_error)
    }

    #[instrument(skip(self))]
    async fn count_unsolved(&self) -> RepoResult<i64> {
        sqlx::query_scalar::<_, i64>(r"SELECT COUNT(*) FROM problems WHERE NOT is_solved")
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
        assert_send_sync::<PgProblemRepository>();
    }
}

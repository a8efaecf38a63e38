//! PostgreSQL implementation of SalaryRangeRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use pitch_core::entities::SalaryRange;
use pitch_core::error::DomainError;
use pitch_core::traits::{RepoResult, SalaryRangeRepository};
use pitch_core::value_objects::Snowflake;

use crate::models::SalaryRangeModel;

use super::error::{map_db_error, map_foreign_key_violation, map_write_error, unexpected_duplicate};

#[derive(Clone)]
pub struct PgSalaryRangeRepository {
    pool: PgPool,
}

impl PgSalaryRangeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SalaryRangeRepository for PgSalaryRangeRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<SalaryRange>> {
        let result = sqlx::query_as::<_, SalaryRangeModel>(
            r"SELECT id, min_salary, max_salary FROM salary_ranges WHERE id = $1",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(SalaryRange::from))
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<SalaryRange>> {
        let result = sqlx::query_as::<_, SalaryRangeModel>(
            r"SELECT id, min_salary, max_salary FROM salary_ranges ORDER BY id DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.into_iter().map(SalaryRange::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, range: &SalaryRange) -> RepoResult<()> {
        sqlx::query(r"INSERT INTO salary_ranges (id, min_salary, max_salary) VALUES ($1, $2, $3)")
            .bind(range.id.into_inner())
            .bind(range.min)
            .bind(range.max)
            .execute(&self.pool)
            .await
            .map_err(|e| map_write_error(e, unexpected_duplicate))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update(&self, range: &SalaryRange) -> RepoResult<()> {
        let result =
            sqlx::query(r"UPDATE salary_ranges SET min_salary = $2, max_salary = $3 WHERE id = $1")
                .bind(range.id.into_inner())
                .bind(range.min)
                .bind(range.max)
                .execute(&self.pool)
                .await
                .map_err(|e| map_write_error(e, unexpected_duplicate))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::SalaryRangeNotFound(range.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        let result = sqlx::query(r"DELETE FROM salary_ranges WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(|e| map_foreign_key_violation(e, || DomainError::InUse("Salary range")))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::SalaryRangeNotFound(id));
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
        assert_send_sync::<PgSalaryRangeRepository>();
    }
}

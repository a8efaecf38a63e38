//! Salary range service (admin maintenance of the ranges owned by advertisements)

use pitch_core::entities::SalaryRange;
use pitch_core::{DomainError, Snowflake};
use tracing::{info, instrument};

use crate::dto::{SalaryRangeRequest, SalaryRangeResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

pub struct SalaryRangeService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SalaryRangeService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<Vec<SalaryRangeResponse>> {
        let ranges = self.ctx.salary_range_repo().find_all().await?;
        Ok(ranges.iter().map(SalaryRangeResponse::from).collect())
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: Snowflake) -> ServiceResult<SalaryRangeResponse> {
        let range = self
            .ctx
            .salary_range_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::SalaryRangeNotFound(id))?;
        Ok(SalaryRangeResponse::from(&range))
    }

    #[instrument(skip(self))]
    pub async fn create(&self, request: SalaryRangeRequest) -> ServiceResult<SalaryRangeResponse> {
        let range = SalaryRange::new(self.ctx.generate_id(), request.min, request.max)?;
        self.ctx.salary_range_repo().create(&range).await?;

        info!(salary_range_id = %range.id, "Salary range created");
        Ok(SalaryRangeResponse::from(&range))
    }

    #[instrument(skip(self))]
    pub async fn update(
        &self,
        id: Snowflake,
        request: SalaryRangeRequest,
    ) -> ServiceResult<SalaryRangeResponse> {
        let range = SalaryRange::new(id, request.min, request.max)?;
        self.ctx.salary_range_repo().update(&range).await?;

        info!(salary_range_id = %id, "Salary range updated");
        Ok(SalaryRangeResponse::from(&range))
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: Snowflake) -> ServiceResult<()> {
        self.ctx.salary_range_repo().delete(id).await?;
        info!(salary_range_id = %id, "Salary range deleted");
        Ok(())
    }
}

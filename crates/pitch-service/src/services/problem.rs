//! Support problem service
//!
//! Any user reports a problem; admins triage and solve them.

use pitch_core::entities::Problem;
use pitch_core::{DomainError, Snowflake};
use tracing::{info, instrument};

use crate::dto::{CreateProblemRequest, ProblemResponse, Related};

use super::actor::Actor;
use super::context::ServiceContext;
use super::error::ServiceResult;

pub struct ProblemService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ProblemService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    async fn find(&self, id: Snowflake) -> ServiceResult<Problem> {
        Ok(self
            .ctx
            .problem_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::ProblemNotFound(id))?)
    }

    async fn to_responses(&self, problems: &[Problem]) -> ServiceResult<Vec<ProblemResponse>> {
        let related = self
            .ctx
            .related(problems.iter().map(|p| p.requester_id))
            .await?;
        Ok(related.map_all(problems, Related::problem)?)
    }

    async fn to_response(&self, problem: &Problem) -> ServiceResult<ProblemResponse> {
        let related = self.ctx.related([problem.requester_id]).await?;
        Ok(related.problem(problem)?)
    }

    #[instrument(skip(self))]
    pub async fn list_all(&self) -> ServiceResult<Vec<ProblemResponse>> {
        let problems = self.ctx.problem_repo().find_all().await?;
        self.to_responses(&problems).await
    }

    #[instrument(skip(self))]
    pub async fn list_by_solved(&self, is_solved: bool) -> ServiceResult<Vec<ProblemResponse>> {
        let problems = self.ctx.problem_repo().find_by_solved(is_solved).await?;
        self.to_responses(&problems).await
    }

    #[instrument(skip(self))]
    pub async fn get(&self, actor: Actor, id: Snowflake) -> ServiceResult<ProblemResponse> {
        let problem = self.find(id).await?;
        actor.ensure_owner_or_admin(problem.requester_id, "problem")?;
        self.to_response(&problem).await
    }

    #[instrument(skip(self, request))]
    pub async fn create(
        &self,
        actor: Actor,
        request: CreateProblemRequest,
    ) -> ServiceResult<ProblemResponse> {
        let problem = Problem::new(
            self.ctx.generate_id(),
            request.title,
            request.description,
            actor.user_id,
        );
        self.ctx.problem_repo().create(&problem).await?;

        info!(problem_id = %problem.id, requester_id = %actor.user_id, "Problem reported");
        self.to_response(&problem).await
    }

    #[instrument(skip(self))]
    pub async fn solve(&self, id: Snowflake) -> ServiceResult<ProblemResponse> {
        let mut problem = self.find(id).await?;
        self.ctx.problem_repo().mark_solved(id).await?;
        problem.solve();

        info!(problem_id = %id, "Problem solved");
        self.to_response(&problem).await
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: Snowflake) -> ServiceResult<()> {
        self.ctx.problem_repo().delete(id).await?;
        info!(problem_id = %id, "Problem deleted");
        Ok(())
    }
}

//! Club history service
//!
//! Career records a player keeps on their profile, each with one
//! achievements row.

use pitch_core::entities::{Achievements, ClubHistory};
use pitch_core::{DomainError, Snowflake};
use tracing::{info, instrument};

use crate::dto::{ClubHistoryRequest, ClubHistoryResponse, Related};

use super::actor::Actor;
use super::context::ServiceContext;
use super::error::ServiceResult;
use super::lookup::LookupService;

const RESOURCE: &str = "club history";

pub struct ClubHistoryService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ClubHistoryService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    async fn find(&self, id: Snowflake) -> ServiceResult<ClubHistory> {
        Ok(self
            .ctx
            .club_history_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::ClubHistoryNotFound(id))?)
    }

    async fn to_responses(&self, rows: &[ClubHistory]) -> ServiceResult<Vec<ClubHistoryResponse>> {
        let related = self.ctx.related(rows.iter().map(|h| h.player_id)).await?;
        Ok(related.map_all(rows, Related::club_history)?)
    }

    async fn to_response(&self, history: &ClubHistory) -> ServiceResult<ClubHistoryResponse> {
        let related = self.ctx.related([history.player_id]).await?;
        Ok(related.club_history(history)?)
    }

    async fn check_request(&self, request: &ClubHistoryRequest) -> ServiceResult<()> {
        ClubHistory::check_period(request.start_date, request.end_date)?;
        LookupService::new(self.ctx)
            .require_position(request.player_position_id)
            .await
    }

    #[instrument(skip(self))]
    pub async fn list_all(&self) -> ServiceResult<Vec<ClubHistoryResponse>> {
        let rows = self.ctx.club_history_repo().find_all().await?;
        self.to_responses(&rows).await
    }

    #[instrument(skip(self))]
    pub async fn list_by_player(&self, player_id: Snowflake) -> ServiceResult<Vec<ClubHistoryResponse>> {
        let rows = self.ctx.club_history_repo().find_by_player(player_id).await?;
        self.to_responses(&rows).await
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: Snowflake) -> ServiceResult<ClubHistoryResponse> {
        let history = self.find(id).await?;
        self.to_response(&history).await
    }

    #[instrument(skip(self, request))]
    pub async fn create(
        &self,
        actor: Actor,
        request: ClubHistoryRequest,
    ) -> ServiceResult<ClubHistoryResponse> {
        self.check_request(&request).await?;

        let achievements = request.achievements;
        let history = ClubHistory {
            id: self.ctx.generate_id(),
            achievements: Achievements {
                id: self.ctx.generate_id(),
                number_of_matches: achievements.number_of_matches,
                goals: achievements.goals,
                assists: achievements.assists,
                additional_achievements: achievements.additional_achievements,
            },
            club_name: request.club_name,
            league: request.league,
            region: request.region,
            start_date: request.start_date,
            end_date: request.end_date,
            player_position_id: request.player_position_id,
            player_id: actor.user_id,
        };
        self.ctx.club_history_repo().create(&history).await?;

        info!(club_history_id = %history.id, player_id = %actor.user_id, "Club history created");
        self.to_response(&history).await
    }

    #[instrument(skip(self, request))]
    pub async fn update(
        &self,
        actor: Actor,
        id: Snowflake,
        request: ClubHistoryRequest,
    ) -> ServiceResult<ClubHistoryResponse> {
        let mut history = self.find(id).await?;
        actor.ensure_owner(history.player_id, RESOURCE)?;
        self.check_request(&request).await?;

        let achievements = request.achievements;
        history.achievements.number_of_matches = achievements.number_of_matches;
        history.achievements.goals = achievements.goals;
        history.achievements.assists = achievements.assists;
        history.achievements.additional_achievements = achievements.additional_achievements;
        history.club_name = request.club_name;
        history.league = request.league;
        history.region = request.region;
        history.start_date = request.start_date;
        history.end_date = request.end_date;
        history.player_position_id = request.player_position_id;
        self.ctx.club_history_repo().update(&history).await?;

        info!(club_history_id = %id, "Club history updated");
        self.to_response(&history).await
    }

    /// Delete the record and its achievements
    #[instrument(skip(self))]
    pub async fn delete(&self, actor: Actor, id: Snowflake) -> ServiceResult<()> {
        let history = self.find(id).await?;
        actor.ensure_owner_or_admin(history.player_id, RESOURCE)?;

        self.ctx.club_history_repo().delete(id).await?;
        info!(club_history_id = %id, deleted_by = %actor.user_id, "Club history deleted");
        Ok(())
    }
}

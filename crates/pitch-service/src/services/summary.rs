//! Admin dashboard counts

use tracing::instrument;

use crate::dto::SummaryResponse;

use super::context::ServiceContext;
use super::error::ServiceResult;

pub struct SummaryService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SummaryService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Row counts; the unknown user is not counted
    #[instrument(skip(self))]
    pub async fn summary(&self) -> ServiceResult<SummaryResponse> {
        let ctx = self.ctx;
        let (users, player_ads, active_player_ads, club_ads, active_club_ads) = tokio::try_join!(
            ctx.user_repo().count(),
            ctx.player_advertisement_repo().count(),
            ctx.player_advertisement_repo().count_active(),
            ctx.club_advertisement_repo().count(),
            ctx.club_advertisement_repo().count_active(),
        )?;
        let (club_offers, player_offers, chats, messages, club_histories, problems, unsolved) = tokio::try_join!(
            ctx.club_offer_repo().count(),
            ctx.player_offer_repo().count(),
            ctx.chat_repo().count(),
            ctx.message_repo().count(),
            ctx.club_history_repo().count(),
            ctx.problem_repo().count(),
            ctx.problem_repo().count_unsolved(),
        )?;

        Ok(SummaryResponse {
            users,
            active_player_advertisements: active_player_ads,
            player_advertisements: player_ads,
            active_club_advertisements: active_club_ads,
            club_advertisements: club_ads,
            club_offers,
            player_offers,
            chats,
            messages,
            club_histories,
            unsolved_problems: unsolved,
            problems,
        })
    }
}

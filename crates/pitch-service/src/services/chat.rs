//! Chat service
//!
//! One chat per unordered pair of users. Participants (and admins) read it.

use pitch_core::entities::Chat;
use pitch_core::{DomainError, Snowflake};
use tracing::{info, instrument, warn};

use crate::dto::{ChatLookupResponse, ChatResponse, CreateChatRequest, MessageResponse, Related};

use super::actor::Actor;
use super::context::ServiceContext;
use super::error::ServiceResult;

pub struct ChatService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ChatService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    pub(crate) async fn find(&self, id: Snowflake) -> ServiceResult<Chat> {
        Ok(self
            .ctx
            .chat_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::ChatNotFound(id))?)
    }

    /// Load a chat the caller takes part in; admins see every chat
    #[instrument(skip(self))]
    pub async fn require_access(&self, actor: Actor, id: Snowflake) -> ServiceResult<Chat> {
        let chat = self.find(id).await?;
        if !chat.involves(actor.user_id) && !actor.is_admin() {
            warn!(chat_id = %id, user_id = %actor.user_id, "Chat access refused");
            return Err(DomainError::NotParticipant.into());
        }
        Ok(chat)
    }

    async fn to_responses(&self, chats: &[Chat]) -> ServiceResult<Vec<ChatResponse>> {
        let related = self
            .ctx
            .related(chats.iter().flat_map(|c| [c.user1_id, c.user2_id]))
            .await?;
        Ok(related.map_all(chats, Related::chat)?)
    }

    async fn to_response(&self, chat: &Chat) -> ServiceResult<ChatResponse> {
        let related = self.ctx.related([chat.user1_id, chat.user2_id]).await?;
        Ok(related.chat(chat)?)
    }

    #[instrument(skip(self))]
    pub async fn list_all(&self) -> ServiceResult<Vec<ChatResponse>> {
        let chats = self.ctx.chat_repo().find_all().await?;
        self.to_responses(&chats).await
    }

    /// A user's chats, most recent message first
    #[instrument(skip(self))]
    pub async fn list_by_user(
        &self,
        actor: Actor,
        user_id: Snowflake,
    ) -> ServiceResult<Vec<ChatResponse>> {
        actor.ensure_self_or_admin(user_id)?;
        let chats = self.ctx.chat_repo().find_by_user(user_id).await?;
        self.to_responses(&chats).await
    }

    #[instrument(skip(self))]
    pub async fn get(&self, actor: Actor, id: Snowflake) -> ServiceResult<ChatResponse> {
        let chat = self.require_access(actor, id).await?;
        self.to_response(&chat).await
    }

    /// Messages of a chat, oldest first
    #[instrument(skip(self))]
    pub async fn messages(&self, actor: Actor, id: Snowflake) -> ServiceResult<Vec<MessageResponse>> {
        let chat = self.require_access(actor, id).await?;
        let messages = self.ctx.message_repo().find_by_chat(chat.id).await?;
        Ok(messages.into_iter().map(MessageResponse::from).collect())
    }

    /// Id of the caller's chat with another user, if one exists
    #[instrument(skip(self))]
    pub async fn find_between(
        &self,
        actor: Actor,
        user_id: Snowflake,
    ) -> ServiceResult<ChatLookupResponse> {
        let chat = self
            .ctx
            .chat_repo()
            .find_between(actor.user_id, user_id)
            .await?;
        Ok(ChatLookupResponse {
            chat_id: chat.map(|c| c.id),
        })
    }

    /// Open a chat with another user, or return the existing one
    ///
    /// The flag is `true` when a new chat was created.
    #[instrument(skip(self))]
    pub async fn create(
        &self,
        actor: Actor,
        request: CreateChatRequest,
    ) -> ServiceResult<(ChatResponse, bool)> {
        let other = request.user2_id;
        let chat = Chat::new(self.ctx.generate_id(), actor.user_id, other)?;

        if let Some(existing) = self.ctx.chat_repo().find_between(actor.user_id, other).await? {
            return Ok((self.to_response(&existing).await?, false));
        }

        if other == self.ctx.unknown_user_id().await? {
            return Err(DomainError::UnknownUserProtected.into());
        }
        if self.ctx.user_repo().find_by_id(other).await?.is_none() {
            return Err(DomainError::UserNotFound(other).into());
        }

        let (chat, created) = self.ctx.chat_repo().create_or_get(&chat).await?;
        if created {
            info!(chat_id = %chat.id, user1_id = %chat.user1_id, user2_id = %chat.user2_id, "Chat created");
        }
        Ok((self.to_response(&chat).await?, created))
    }

    /// Delete the chat with its messages
    #[instrument(skip(self))]
    pub async fn delete(&self, actor: Actor, id: Snowflake) -> ServiceResult<()> {
        let chat = self.require_access(actor, id).await?;
        self.ctx.chat_repo().delete(chat.id).await?;

        info!(chat_id = %id, deleted_by = %actor.user_id, "Chat deleted");
        Ok(())
    }
}

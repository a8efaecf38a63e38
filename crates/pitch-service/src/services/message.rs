//! Message service
//!
//! Persists chat messages. Fan-out to connected clients is the hub's job.

use pitch_core::entities::Message;
use pitch_core::{DomainError, Snowflake};
use tracing::{info, instrument, warn};

use crate::dto::{CreateMessageRequest, MessageResponse};

use super::actor::Actor;
use super::chat::ChatService;
use super::context::ServiceContext;
use super::error::ServiceResult;

pub struct MessageService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MessageService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    pub async fn find(&self, id: Snowflake) -> ServiceResult<Message> {
        Ok(self
            .ctx
            .message_repo()
            .find_by_id(id)
            .await?
            .ok_or(DomainError::MessageNotFound(id))?)
    }

    /// Store a message from a chat participant to the other participant
    #[instrument(skip(self, request), fields(chat_id = %request.chat_id))]
    pub async fn create(
        &self,
        actor: Actor,
        request: CreateMessageRequest,
    ) -> ServiceResult<MessageResponse> {
        let chat = ChatService::new(self.ctx).find(request.chat_id).await?;
        let receiver_id = chat.other_participant(actor.user_id).ok_or_else(|| {
            warn!(user_id = %actor.user_id, "Message refused: not a participant");
            DomainError::NotParticipant
        })?;

        let message = Message::new(
            self.ctx.generate_id(),
            chat.id,
            actor.user_id,
            receiver_id,
            request.content,
        )?;
        self.ctx.message_repo().create(&message).await?;

        info!(message_id = %message.id, "Message stored");
        Ok(MessageResponse::from(message))
    }

    /// Reload a stored message for relaying; only its sender may relay it
    #[instrument(skip(self))]
    pub async fn get_for_sender(&self, actor: Actor, id: Snowflake) -> ServiceResult<MessageResponse> {
        let message = self.find(id).await?;
        actor.ensure_owner(message.sender_id, "message")?;
        Ok(MessageResponse::from(message))
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, actor: Actor, id: Snowflake) -> ServiceResult<()> {
        let message = self.find(id).await?;
        actor.ensure_owner_or_admin(message.sender_id, "message")?;

        self.ctx.message_repo().delete(id).await?;
        info!(message_id = %id, deleted_by = %actor.user_id, "Message deleted");
        Ok(())
    }
}

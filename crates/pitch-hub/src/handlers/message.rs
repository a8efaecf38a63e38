//! SendMessage handler

use super::HandlerResult;
use crate::connection::Connection;
use crate::protocol::{HubFrame, SendMessagePayload};
use crate::server::HubState;
use pitch_service::{MessageService, ServiceError};
use std::sync::Arc;

/// Relays a stored message to its chat group
pub struct SendMessageHandler;

impl SendMessageHandler {
    /// Reload the message, check the caller sent it, then fan it out
    ///
    /// The caller always receives the relayed message, joined or not.
    pub async fn handle(
        state: &HubState,
        connection: &Arc<Connection>,
        payload: SendMessagePayload,
    ) -> HandlerResult<()> {
        let message = MessageService::new(state.service_context())
            .get_for_sender(connection.actor(), payload.id)
            .await?;

        if message.chat_id != payload.chat_id {
            tracing::warn!(
                session_id = %connection.session_id(),
                message_id = %message.id,
                chat_id = %payload.chat_id,
                "SendMessage chat does not match stored message"
            );
            return Err(ServiceError::validation("message does not belong to this chat").into());
        }

        let frame = HubFrame::receive_message(&message);
        let sent = state
            .connection_manager()
            .send_to_chat(message.chat_id, frame.clone())
            .await;

        if !connection.is_in_chat(message.chat_id).await {
            connection.send(frame).await.ok();
        }

        tracing::debug!(
            session_id = %connection.session_id(),
            message_id = %message.id,
            chat_id = %message.chat_id,
            sent = sent,
            "Message relayed"
        );

        Ok(())
    }
}

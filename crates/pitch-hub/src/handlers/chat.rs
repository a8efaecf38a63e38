//! JoinChat and LeaveChat handlers

use super::HandlerResult;
use crate::connection::Connection;
use crate::protocol::{ChatPayload, HubFrame, OpCode};
use crate::server::HubState;
use pitch_service::ChatService;
use std::sync::Arc;

/// Adds the connection to a chat group
pub struct JoinChatHandler;

impl JoinChatHandler {
    /// Only participants of the chat, or admins, may join its group
    pub async fn handle(
        state: &HubState,
        connection: &Arc<Connection>,
        payload: ChatPayload,
    ) -> HandlerResult<()> {
        let chat_id = payload.chat_id;

        ChatService::new(state.service_context())
            .require_access(connection.actor(), chat_id)
            .await
            .inspect_err(|e| {
                tracing::warn!(
                    session_id = %connection.session_id(),
                    chat_id = %chat_id,
                    error = %e,
                    "JoinChat refused"
                );
            })?;

        state
            .connection_manager()
            .join_chat(connection.session_id(), chat_id)
            .await;

        tracing::debug!(
            session_id = %connection.session_id(),
            user_id = %connection.user_id(),
            chat_id = %chat_id,
            "Joined chat"
        );

        connection.send(HubFrame::ack(OpCode::JoinChat, chat_id)).await.ok();
        Ok(())
    }
}

/// Removes the connection from a chat group
pub struct LeaveChatHandler;

impl LeaveChatHandler {
    pub async fn handle(
        state: &HubState,
        connection: &Arc<Connection>,
        payload: ChatPayload,
    ) -> HandlerResult<()> {
        let chat_id = payload.chat_id;

        state
            .connection_manager()
            .leave_chat(connection.session_id(), chat_id)
            .await;

        tracing::debug!(
            session_id = %connection.session_id(),
            chat_id = %chat_id,
            "Left chat"
        );

        connection.send(HubFrame::ack(OpCode::LeaveChat, chat_id)).await.ok();
        Ok(())
    }
}

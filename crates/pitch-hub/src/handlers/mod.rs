//! Op code handlers
//!
//! Route client frames to the handler for their op code.

mod chat;
mod error;
mod message;

pub use chat::{JoinChatHandler, LeaveChatHandler};
pub use error::{HandlerError, HandlerResult};
pub use message::SendMessageHandler;

use crate::connection::Connection;
use crate::protocol::{CloseCode, HubFrame, OpCode};
use crate::server::HubState;
use std::sync::Arc;

/// Routes client frames to handlers
pub struct FrameDispatcher;

impl FrameDispatcher {
    /// Handle one parsed client frame
    pub async fn dispatch(
        state: &HubState,
        connection: &Arc<Connection>,
        frame: HubFrame,
    ) -> HandlerResult<()> {
        match frame.op {
            OpCode::SendMessage => {
                SendMessageHandler::handle(state, connection, frame.payload()?).await
            }
            OpCode::JoinChat => JoinChatHandler::handle(state, connection, frame.payload()?).await,
            OpCode::LeaveChat => {
                LeaveChatHandler::handle(state, connection, frame.payload()?).await
            }
            // Server ops are rejected by HubFrame::parse
            op => {
                tracing::error!(op = %op, "Unhandled client op code");
                Err(CloseCode::UnknownOpcode.into())
            }
        }
    }
}

//! Chat and Message entity <-> model mappers

use pitch_core::entities::{Chat, Message};
use pitch_core::value_objects::Snowflake;

use crate::models::{ChatModel, MessageModel};

impl From<ChatModel> for Chat {
    fn from(model: ChatModel) -> Self {
        Chat {
            id: Snowflake::new(model.id),
            user1_id: Snowflake::new(model.user1_id),
            user2_id: Snowflake::new(model.user2_id),
        }
    }
}

impl From<MessageModel> for Message {
    fn from(model: MessageModel) -> Self {
        Message {
            id: Snowflake::new(model.id),
            chat_id: Snowflake::new(model.chat_id),
            sender_id: Snowflake::new(model.sender_id),
            receiver_id: Snowflake::new(model.receiver_id),
            content: model.content,
            timestamp: model.sent_at,
        }
    }
}

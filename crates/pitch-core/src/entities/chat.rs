//! Chat and Message entities - one-to-one conversations

use chrono::{DateTime, Utc};

use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Maximum message length in characters
pub const MAX_MESSAGE_LENGTH: usize = 500;

/// Conversation between two distinct users
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chat {
    pub id: Snowflake,
    pub user1_id: Snowflake,
    pub user2_id: Snowflake,
}

impl Chat {
    pub fn new(id: Snowflake, user1_id: Snowflake, user2_id: Snowflake) -> Result<Self, DomainError> {
        if user1_id == user2_id {
            return Err(DomainError::SelfChat);
        }
        Ok(Self {
            id,
            user1_id,
            user2_id,
        })
    }

    #[inline]
    pub fn involves(&self, user_id: Snowflake) -> bool {
        self.user1_id == user_id || self.user2_id == user_id
    }

    /// The participant that is not `user_id`, if `user_id` takes part
    pub fn other_participant(&self, user_id: Snowflake) -> Option<Snowflake> {
        if self.user1_id == user_id {
            Some(self.user2_id)
        } else if self.user2_id == user_id {
            Some(self.user1_id)
        } else {
            None
        }
    }
}

/// Message inside a chat
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: Snowflake,
    pub chat_id: Snowflake,
    pub sender_id: Snowflake,
    pub receiver_id: Snowflake,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    pub fn new(
        id: Snowflake,
        chat_id: Snowflake,
        sender_id: Snowflake,
        receiver_id: Snowflake,
        content: String,
    ) -> Result<Self, DomainError> {
        let length = content.chars().count();
        if length == 0 {
            return Err(DomainError::ValidationError(
                "message content cannot be empty".to_string(),
            ));
        }
        if length > MAX_MESSAGE_LENGTH {
            return Err(DomainError::ContentTooLong {
                max: MAX_MESSAGE_LENGTH,
            });
        }
        Ok(Self {
            id,
            chat_id,
            sender_id,
            receiver_id,
            content,
            timestamp: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_chat_rejected() {
        let err = Chat::new(Snowflake::new(1), Snowflake::new(2), Snowflake::new(2)).unwrap_err();
        assert!(matches!(err, DomainError::SelfChat));
    }

    #[test]
    fn test_participants() {
        let chat = Chat::new(Snowflake::new(1), Snowflake::new(2), Snowflake::new(3)).unwrap();
        assert!(chat.involves(Snowflake::new(2)));
        assert!(!chat.involves(Snowflake::new(4)));
        assert_eq!(chat.other_participant(Snowflake::new(3)), Some(Snowflake::new(2)));
        assert_eq!(chat.other_participant(Snowflake::new(4)), None);
    }

    #[test]
    fn test_message_length() {
        let ok = Message::new(
            Snowflake::new(1),
            Snowflake::new(2),
            Snowflake::new(3),
            Snowflake::new(4),
            "a".repeat(500),
        );
        assert!(ok.is_ok());

        let long = Message::new(
            Snowflake::new(1),
            Snowflake::new(2),
            Snowflake::new(3),
            Snowflake::new(4),
            "ą".repeat(501),
        );
        assert!(matches!(long, Err(DomainError::ContentTooLong { max: 500 })));

        let empty = Message::new(
            Snowflake::new(1),
            Snowflake::new(2),
            Snowflake::new(3),
            Snowflake::new(4),
            String::new(),
        );
        assert!(empty.is_err());
    }
}

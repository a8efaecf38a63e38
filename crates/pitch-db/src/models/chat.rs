//! Chat and message database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct ChatModel {
    pub id: i64,
    pub user1_id: i64,
    pub user2_id: i64,
}

#[derive(Debug, Clone, FromRow)]
pub struct MessageModel {
    pub id: i64,
    pub chat_id: i64,
    pub sender_id: i64,
    pub receiver_id: i64,
    pub content: String,
    pub sent_at: DateTime<Utc>,
}

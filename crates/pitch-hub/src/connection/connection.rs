//! A single hub connection

use crate::protocol::HubFrame;
use pitch_core::Snowflake;
use pitch_service::Actor;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::{mpsc, Notify, RwLock};

/// A registered WebSocket connection
///
/// The caller is authenticated before the upgrade, so the actor is fixed for
/// the lifetime of the connection.
pub struct Connection {
    session_id: String,
    actor: Actor,

    /// Outgoing frames, drained by the socket writer task
    sender: mpsc::Sender<HubFrame>,

    /// Chat groups this connection has joined
    chats: RwLock<HashSet<Snowflake>>,

    /// Raised when the server drops the connection
    close_signal: Notify,

    created_at: Instant,
}

impl Connection {
    pub fn new(session_id: String, actor: Actor, sender: mpsc::Sender<HubFrame>) -> Arc<Self> {
        Arc::new(Self {
            session_id,
            actor,
            sender,
            chats: RwLock::new(HashSet::new()),
            close_signal: Notify::new(),
            created_at: Instant::now(),
        })
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn actor(&self) -> Actor {
        self.actor
    }

    pub fn user_id(&self) -> Snowflake {
        self.actor.user_id
    }

    pub(crate) async fn join(&self, chat_id: Snowflake) {
        self.chats.write().await.insert(chat_id);
    }

    pub(crate) async fn leave(&self, chat_id: Snowflake) {
        self.chats.write().await.remove(&chat_id);
    }

    /// Chats currently joined
    pub async fn chats(&self) -> Vec<Snowflake> {
        self.chats.read().await.iter().copied().collect()
    }

    pub async fn is_in_chat(&self, chat_id: Snowflake) -> bool {
        self.chats.read().await.contains(&chat_id)
    }

    pub fn age(&self) -> std::time::Duration {
        self.created_at.elapsed()
    }

    /// Queue a frame for this connection
    pub async fn send(&self, frame: HubFrame) -> Result<(), mpsc::error::SendError<HubFrame>> {
        self.sender.send(frame).await
    }

    /// Queue a frame without waiting for buffer space
    pub fn try_send(&self, frame: HubFrame) -> Result<(), mpsc::error::TrySendError<HubFrame>> {
        self.sender.try_send(frame)
    }

    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }

    /// Ask the socket loop to close this connection
    pub fn close(&self) {
        self.close_signal.notify_one();
    }

    /// Resolves once [`Connection::close`] was called
    pub async fn closed(&self) {
        self.close_signal.notified().await;
    }
}

impl std::fmt::Debug for Connection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Connection")
            .field("session_id", &self.session_id)
            .field("user_id", &self.actor.user_id)
            .field("created_at", &self.created_at)
            .finish()
    }
}

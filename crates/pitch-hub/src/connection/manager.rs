//! Connection manager
//!
//! Live connections and chat groups, both in `DashMap`s.

use super::Connection;
use crate::protocol::HubFrame;
use dashmap::DashMap;
use pitch_core::Snowflake;
use pitch_service::Actor;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Registry of hub connections
pub struct ConnectionManager {
    /// Active connections by session id
    connections: DashMap<String, Arc<Connection>>,

    /// Chat id to joined session ids
    chat_groups: DashMap<Snowflake, HashSet<String>>,
}

impl ConnectionManager {
    #[must_use]
    pub fn new() -> Self {
        Self {
            connections: DashMap::new(),
            chat_groups: DashMap::new(),
        }
    }

    #[must_use]
    pub fn new_shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Register a new connection
    pub fn add_connection(
        &self,
        session_id: String,
        actor: Actor,
        sender: mpsc::Sender<HubFrame>,
    ) -> Arc<Connection> {
        let connection = Connection::new(session_id.clone(), actor, sender);
        self.connections.insert(session_id.clone(), connection.clone());

        tracing::debug!(session_id = %session_id, user_id = %actor.user_id, "Connection added");

        connection
    }

    /// Remove a connection and drop it from every chat group
    pub async fn remove_connection(&self, session_id: &str) {
        if let Some((_, connection)) = self.connections.remove(session_id) {
            for chat_id in connection.chats().await {
                self.chat_groups.alter(&chat_id, |_, mut sessions| {
                    sessions.remove(session_id);
                    sessions
                });
            }

            self.chat_groups.retain(|_, sessions| !sessions.is_empty());

            tracing::debug!(session_id = %session_id, "Connection removed");
        }
    }

    pub fn get_connection(&self, session_id: &str) -> Option<Arc<Connection>> {
        self.connections.get(session_id).map(|r| r.clone())
    }

    /// Add a connection to a chat group
    ///
    /// Returns false when the session is not registered.
    pub async fn join_chat(&self, session_id: &str, chat_id: Snowflake) -> bool {
        let Some(connection) = self.get_connection(session_id) else {
            return false;
        };

        connection.join(chat_id).await;
        self.chat_groups
            .entry(chat_id)
            .or_default()
            .insert(session_id.to_string());

        tracing::trace!(session_id = %session_id, chat_id = %chat_id, "Joined chat group");
        true
    }

    /// Remove a connection from a chat group
    pub async fn leave_chat(&self, session_id: &str, chat_id: Snowflake) -> bool {
        let Some(connection) = self.get_connection(session_id) else {
            return false;
        };

        connection.leave(chat_id).await;
        self.chat_groups.alter(&chat_id, |_, mut sessions| {
            sessions.remove(session_id);
            sessions
        });
        self.chat_groups.retain(|_, sessions| !sessions.is_empty());

        tracing::trace!(session_id = %session_id, chat_id = %chat_id, "Left chat group");
        true
    }

    /// Connections joined to a chat
    pub fn chat_connections(&self, chat_id: Snowflake) -> Vec<Arc<Connection>> {
        self.chat_groups
            .get(&chat_id)
            .map(|sessions| {
                sessions
                    .iter()
                    .filter_map(|sid| self.connections.get(sid).map(|c| c.clone()))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Send a frame to every connection joined to a chat
    ///
    /// Never waits on a slow reader: a connection whose buffer is full is
    /// removed and asked to close.
    pub async fn send_to_chat(&self, chat_id: Snowflake, frame: HubFrame) -> usize {
        let mut sent = 0;
        let mut lagging = Vec::new();

        for conn in self.chat_connections(chat_id) {
            match conn.try_send(frame.clone()) {
                Ok(()) => sent += 1,
                Err(_) => lagging.push(conn),
            }
        }

        for conn in lagging {
            tracing::warn!(
                session_id = %conn.session_id(),
                chat_id = %chat_id,
                "Dropping lagging connection"
            );
            self.remove_connection(conn.session_id()).await;
            conn.close();
        }

        tracing::trace!(chat_id = %chat_id, sent = sent, "Frame sent to chat group");

        sent
    }

    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    /// Number of chats with at least one joined connection
    pub fn chat_count(&self) -> usize {
        self.chat_groups.len()
    }

    pub fn has_session(&self, session_id: &str) -> bool {
        self.connections.contains_key(session_id)
    }
}

impl Default for ConnectionManager {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ConnectionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectionManager")
            .field("connections", &self.connections.len())
            .field("chats", &self.chat_groups.len())
            .finish()
    }
}

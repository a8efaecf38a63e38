//! # pitch-hub
//!
//! Real-time chat hub over WebSocket.
//!
//! Clients join chat groups and relay messages that were already stored
//! through the REST API; the hub reloads each message and fans it out to
//! every connection joined to the message's chat.

pub mod connection;
pub mod handlers;
pub mod protocol;
pub mod server;

pub use connection::{Connection, ConnectionManager};
pub use protocol::{CloseCode, HubFrame, OpCode};
pub use server::{serve_socket, HubState};

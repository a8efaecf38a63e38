//! Connection registry
//!
//! Tracks live connections and the chat groups they have joined.

mod connection;
mod manager;

pub use connection::Connection;
pub use manager::ConnectionManager;

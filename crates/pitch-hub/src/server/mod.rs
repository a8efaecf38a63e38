//! Hub socket entry point and state

mod handler;
mod state;

pub use handler::serve_socket;
pub use state::HubState;

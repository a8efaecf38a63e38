//! Chat hub upgrade handler

use axum::{
    extract::{State, WebSocketUpgrade},
    response::Response,
};
use tracing::debug;

use crate::extractors::HubUser;
use crate::state::AppState;

/// Upgrade an authenticated request to a hub session
///
/// The token may come from the cookie, the bearer header or `?access_token=`.
///
/// GET /hubs/chat
pub async fn chat_hub(
    State(state): State<AppState>,
    HubUser(user): HubUser,
    ws: WebSocketUpgrade,
) -> Response {
    debug!(user_id = %user.user_id, "Hub upgrade accepted");
    let hub = state.hub().clone();
    ws.on_upgrade(move |socket| pitch_hub::serve_socket(hub, socket, user.actor()))
}

//! Per-connection socket loop

use crate::connection::Connection;
use crate::handlers::FrameDispatcher;
use crate::protocol::{CloseCode, HubFrame, ReadyPayload};
use crate::server::HubState;
use axum::extract::ws::{CloseFrame, Message, WebSocket};
use futures_util::stream::SplitStream;
use futures_util::{SinkExt, StreamExt};
use pitch_service::Actor;
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};

/// Channel buffer size for outgoing frames
const FRAME_BUFFER_SIZE: usize = 100;

/// Drive an upgraded, already authenticated WebSocket until it closes
///
/// Registers the connection, sends the Ready dispatch, handles client frames
/// in order, and on exit removes the connection from every chat group.
pub async fn serve_socket(state: HubState, socket: WebSocket, actor: Actor) {
    let session_id = uuid::Uuid::new_v4().to_string();
    let (tx, mut rx) = mpsc::channel::<HubFrame>(FRAME_BUFFER_SIZE);
    let (close_tx, mut close_rx) = oneshot::channel::<CloseCode>();

    let connection = state
        .connection_manager()
        .add_connection(session_id.clone(), actor, tx);

    tracing::info!(
        session_id = %session_id,
        user_id = %actor.user_id,
        "Hub connection established"
    );

    let ready = HubFrame::ready(&ReadyPayload {
        session_id: session_id.clone(),
        user_id: actor.user_id,
    });
    connection.send(ready).await.ok();

    let (mut ws_sink, ws_stream) = socket.split();

    let session_id_send = session_id.clone();
    let send_task = tokio::spawn(async move {
        loop {
            tokio::select! {
                frame = rx.recv() => {
                    let Some(frame) = frame else { break };
                    let Ok(json) = frame.to_json() else { continue };
                    if ws_sink.send(Message::Text(json.into())).await.is_err() {
                        tracing::warn!(session_id = %session_id_send, "Failed to write frame");
                        break;
                    }
                }
                code = &mut close_rx => {
                    let close = code.ok().map(|code| CloseFrame {
                        code: code.as_u16(),
                        reason: code.description().into(),
                    });
                    let _ = ws_sink.send(Message::Close(close)).await;
                    break;
                }
            }
        }

        let _ = ws_sink.close().await;
    });

    let close_code = receive_frames(&state, &connection, ws_stream).await;

    state.connection_manager().remove_connection(&session_id).await;
    drop(connection);

    if let Some(code) = close_code {
        tracing::debug!(session_id = %session_id, close_code = %code, "Closing connection");
        let _ = close_tx.send(code);
    } else {
        drop(close_tx);
    }
    let _ = send_task.await;

    tracing::info!(session_id = %session_id, "Hub connection closed");
}

/// Read client frames until the client leaves or a frame forces a close
async fn receive_frames(
    state: &HubState,
    connection: &Arc<Connection>,
    mut stream: SplitStream<WebSocket>,
) -> Option<CloseCode> {
    loop {
        let msg = tokio::select! {
            msg = stream.next() => msg,
            () = connection.closed() => {
                tracing::debug!(
                    session_id = %connection.session_id(),
                    "Connection dropped by the server"
                );
                return None;
            }
        };
        let msg = msg?;

        match msg {
            Ok(Message::Text(text)) => {
                if let Err(code) = handle_text_frame(state, connection, &text).await {
                    return Some(code);
                }
            }
            Ok(Message::Binary(_)) => {
                tracing::debug!(
                    session_id = %connection.session_id(),
                    "Binary frames not supported"
                );
                return Some(CloseCode::DecodeError);
            }
            Ok(Message::Ping(_) | Message::Pong(_)) => {}
            Ok(Message::Close(_)) => {
                tracing::debug!(session_id = %connection.session_id(), "Client closed connection");
                return None;
            }
            Err(e) => {
                tracing::warn!(
                    session_id = %connection.session_id(),
                    error = %e,
                    "WebSocket error"
                );
                return None;
            }
        }
    }
}

/// Parse and handle one text frame
///
/// Refused operations answer with an Error frame and keep the connection.
async fn handle_text_frame(
    state: &HubState,
    connection: &Arc<Connection>,
    text: &str,
) -> Result<(), CloseCode> {
    let frame = HubFrame::parse(text).inspect_err(|code| {
        tracing::debug!(
            session_id = %connection.session_id(),
            close_code = %code,
            "Rejected client frame"
        );
    })?;

    tracing::trace!(session_id = %connection.session_id(), op = %frame.op, "Received frame");

    match FrameDispatcher::dispatch(state, connection, frame).await {
        Ok(()) => Ok(()),
        Err(e) => {
            if let Some(error_frame) = e.to_error_frame() {
                connection.send(error_frame).await.ok();
                return Ok(());
            }
            tracing::warn!(
                session_id = %connection.session_id(),
                error = %e,
                "Handler error"
            );
            Err(e.to_close_code().unwrap_or(CloseCode::UnknownError))
        }
    }
}

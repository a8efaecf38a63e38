//! Chat hub integration tests
//!
//! Drives `/hubs/chat` over a real WebSocket next to the REST chat routes.
//!
//! Run with: cargo test -p integration-tests --test hub_tests

use std::time::Duration;

use futures_util::{SinkExt, StreamExt};
use integration_tests::{
    assert_json, assert_status, check_test_env, fixtures::*, Session, TestServer,
};
use reqwest::StatusCode;
use serde_json::{json, Value};
use tokio::net::TcpStream;
use tokio_tungstenite::{
    connect_async,
    tungstenite::{self, Message},
    MaybeTlsStream, WebSocketStream,
};

type HubSocket = WebSocketStream<MaybeTlsStream<TcpStream>>;

const FRAME_TIMEOUT: Duration = Duration::from_secs(5);

/// Connect and consume the `Ready` dispatch
async fn connect(server: &TestServer, session: &Session) -> HubSocket {
    let (mut socket, _) = connect_async(server.hub_url(&session.token))
        .await
        .expect("hub upgrade failed");

    let ready = next_frame(&mut socket).await;
    assert_eq!(ready["op"], 0);
    assert_eq!(ready["t"], "Ready");
    assert_eq!(ready["d"]["user_id"], session.id());
    socket
}

/// Next JSON text frame, skipping pings
async fn next_frame(socket: &mut HubSocket) -> Value {
    loop {
        let message = tokio::time::timeout(FRAME_TIMEOUT, socket.next())
            .await
            .expect("timed out waiting for a frame")
            .expect("socket closed")
            .expect("socket error");

        match message {
            Message::Text(text) => return serde_json::from_str(&text).expect("frame is not JSON"),
            Message::Ping(_) | Message::Pong(_) => continue,
            other => panic!("unexpected message: {other:?}"),
        }
    }
}

/// Wait for the close frame and return its code
async fn close_code(socket: &mut HubSocket) -> u16 {
    loop {
        let message = tokio::time::timeout(FRAME_TIMEOUT, socket.next())
            .await
            .expect("timed out waiting for close")
            .expect("socket ended without a close frame")
            .expect("socket error");

        if let Message::Close(frame) = message {
            return frame.map(|f| u16::from(f.code)).unwrap_or_default();
        }
    }
}

async fn send(socket: &mut HubSocket, frame: Value) {
    socket
        .send(Message::Text(frame.to_string()))
        .await
        .expect("send failed");
}

async fn open_chat(first: &Session, second: &Session) -> ChatResponse {
    let request = CreateChatRequest {
        user2_id: second.id().to_string(),
    };
    let response = first.post("/api/chats", &request).await.unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

// ============================================================================
// REST chat routes
// ============================================================================

#[tokio::test]
async fn test_chat_create_is_idempotent() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let alice = server.register_user().await.unwrap();
    let bob = server.register_user().await.unwrap();
    let eve = server.register_user().await.unwrap();

    let chat = open_chat(&alice, &bob).await;
    assert_eq!(chat.user1.id, alice.id());
    assert_eq!(chat.user2.id, bob.id());

    // The same pair from either side gets the existing chat
    let request = CreateChatRequest {
        user2_id: alice.id().to_string(),
    };
    let response = bob.post("/api/chats", &request).await.unwrap();
    let existing: ChatResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(existing.id, chat.id);

    let response = alice
        .post(
            "/api/chats",
            &CreateChatRequest {
                user2_id: alice.id().to_string(),
            },
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let response = alice
        .get(&format!("/api/chats/between/{}", bob.id()))
        .await
        .unwrap();
    let lookup: ChatLookupResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(lookup.chat_id.as_deref(), Some(chat.id.as_str()));

    let response = alice
        .get(&format!("/api/chats/between/{}", eve.id()))
        .await
        .unwrap();
    let lookup: ChatLookupResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(lookup.chat_id.is_none());

    // Outsiders see nothing
    let response = eve.get(&format!("/api/chats/{}", chat.id)).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_concurrent_chat_create_yields_one_chat() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let alice = server.register_user().await.unwrap();
    let bob = server.register_user().await.unwrap();

    let to_bob = CreateChatRequest {
        user2_id: bob.id().to_string(),
    };
    let to_alice = CreateChatRequest {
        user2_id: alice.id().to_string(),
    };
    let (from_alice, from_bob) = tokio::join!(
        alice.post("/api/chats", &to_bob),
        bob.post("/api/chats", &to_alice),
    );
    let from_alice = from_alice.unwrap();
    let from_bob = from_bob.unwrap();

    let mut statuses = vec![from_alice.status(), from_bob.status()];
    statuses.sort();
    assert_eq!(statuses, vec![StatusCode::OK, StatusCode::CREATED]);

    let first: ChatResponse = from_alice.json().await.unwrap();
    let second: ChatResponse = from_bob.json().await.unwrap();
    assert_eq!(first.id, second.id);
}

#[tokio::test]
async fn test_messages_are_stored_in_order() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let alice = server.register_user().await.unwrap();
    let bob = server.register_user().await.unwrap();
    let eve = server.register_user().await.unwrap();
    let chat = open_chat(&alice, &bob).await;

    for (sender, content) in [(&alice, "Hello"), (&bob, "Hi there"), (&alice, "Trial on Monday?")] {
        let request = CreateMessageRequest {
            chat_id: chat.id.clone(),
            content: content.to_string(),
        };
        let response = sender.post("/api/messages", &request).await.unwrap();
        assert_status(response, StatusCode::CREATED).await.unwrap();
    }

    let outsider = CreateMessageRequest {
        chat_id: chat.id.clone(),
        content: "Let me in".to_string(),
    };
    let response = eve.post("/api/messages", &outsider).await.unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = bob
        .get(&format!("/api/chats/{}/messages", chat.id))
        .await
        .unwrap();
    let messages: Vec<MessageResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    let contents: Vec<&str> = messages.iter().map(|m| m.content.as_str()).collect();
    assert_eq!(contents, ["Hello", "Hi there", "Trial on Monday?"]);
    assert_eq!(messages[0].receiver_id, bob.id());
    assert_eq!(messages[1].receiver_id, alice.id());

    let response = alice
        .get(&format!("/api/users/{}/chats", alice.id()))
        .await
        .unwrap();
    let chats: Vec<ChatResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(chats.iter().any(|c| c.id == chat.id));

    // Deleting the chat takes its messages along
    let response = alice.delete(&format!("/api/chats/{}", chat.id)).await.unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
    let response = alice
        .get(&format!("/api/chats/{}/messages", chat.id))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Hub
// ============================================================================

#[tokio::test]
async fn test_hub_rejects_unauthenticated_upgrade() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let url = format!("ws://{}/hubs/chat", server.addr);

    match connect_async(url).await {
        Err(tungstenite::Error::Http(response)) => {
            assert_eq!(response.status().as_u16(), 401);
        }
        other => panic!("expected HTTP 401, got {other:?}"),
    }
}

#[tokio::test]
async fn test_hub_fans_out_to_joined_connections() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let alice = server.register_user().await.unwrap();
    let bob = server.register_user().await.unwrap();
    let chat = open_chat(&alice, &bob).await;

    let mut alice_socket = connect(&server, &alice).await;
    let mut bob_socket = connect(&server, &bob).await;

    for socket in [&mut alice_socket, &mut bob_socket] {
        send(socket, json!({ "op": 2, "d": { "chat_id": chat.id } })).await;
        let ack = next_frame(socket).await;
        assert_eq!(ack["op"], 4);
        assert_eq!(ack["d"]["op"], 2);
        assert_eq!(ack["d"]["chat_id"], chat.id.as_str());
    }

    let request = CreateMessageRequest {
        chat_id: chat.id.clone(),
        content: "See you at training".to_string(),
    };
    let response = alice.post("/api/messages", &request).await.unwrap();
    let message: MessageResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    send(
        &mut alice_socket,
        json!({ "op": 1, "d": { "id": message.id, "chat_id": chat.id } }),
    )
    .await;

    for socket in [&mut alice_socket, &mut bob_socket] {
        let frame = next_frame(socket).await;
        assert_eq!(frame["op"], 0);
        assert_eq!(frame["t"], "ReceiveMessage");
        assert_eq!(frame["d"]["id"], message.id.as_str());
        assert_eq!(frame["d"]["content"], "See you at training");
        assert_eq!(frame["d"]["sender_id"], alice.id());
    }
}

#[tokio::test]
async fn test_hub_refuses_relay_by_non_sender() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let alice = server.register_user().await.unwrap();
    let bob = server.register_user().await.unwrap();
    let eve = server.register_user().await.unwrap();
    let chat = open_chat(&alice, &bob).await;

    let request = CreateMessageRequest {
        chat_id: chat.id.clone(),
        content: "Private".to_string(),
    };
    let response = alice.post("/api/messages", &request).await.unwrap();
    let message: MessageResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Joining a chat you are not part of is refused but keeps the session
    let mut eve_socket = connect(&server, &eve).await;
    send(&mut eve_socket, json!({ "op": 2, "d": { "chat_id": chat.id } })).await;
    let error = next_frame(&mut eve_socket).await;
    assert_eq!(error["op"], 5);

    // Bob did not send the message, so the hub refuses to relay it
    let mut bob_socket = connect(&server, &bob).await;
    send(
        &mut bob_socket,
        json!({ "op": 1, "d": { "id": message.id, "chat_id": chat.id } }),
    )
    .await;
    let error = next_frame(&mut bob_socket).await;
    assert_eq!(error["op"], 5);
    assert!(error["d"]["message"].is_string());
}

#[tokio::test]
async fn test_hub_closes_on_protocol_errors() {
    if !check_test_env().await {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let alice = server.register_user().await.unwrap();

    let mut socket = connect(&server, &alice).await;
    send(&mut socket, json!({ "op": 4, "d": {} })).await;
    assert_eq!(close_code(&mut socket).await, 4001);

    let mut socket = connect(&server, &alice).await;
    socket
        .send(Message::Text("not json".to_string()))
        .await
        .unwrap();
    assert_eq!(close_code(&mut socket).await, 4002);

    let mut socket = connect(&server, &alice).await;
    send(&mut socket, json!({ "op": 2, "d": { "wrong": true } })).await;
    assert_eq!(close_code(&mut socket).await, 4002);
}

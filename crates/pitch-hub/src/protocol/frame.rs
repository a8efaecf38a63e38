//! Frame envelope and payloads
//!
//! Every frame is a JSON text message `{ "op", "t"?, "d"? }`.

use pitch_core::Snowflake;
use pitch_service::dto::MessageResponse;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{CloseCode, OpCode};

/// Event name for a relayed chat message
pub const EVENT_RECEIVE_MESSAGE: &str = "ReceiveMessage";

/// Event name sent once after the connection is registered
pub const EVENT_READY: &str = "Ready";

/// Hub frame
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HubFrame {
    pub op: OpCode,

    /// Event name (Dispatch only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub t: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub d: Option<Value>,
}

/// Envelope read before the op code is checked
#[derive(Deserialize)]
struct RawFrame {
    op: u8,
    #[serde(default)]
    t: Option<String>,
    #[serde(default)]
    d: Option<Value>,
}

impl HubFrame {
    // === Server frames ===

    #[must_use]
    pub fn dispatch(event: impl Into<String>, data: Value) -> Self {
        Self {
            op: OpCode::Dispatch,
            t: Some(event.into()),
            d: Some(data),
        }
    }

    #[must_use]
    pub fn ready(payload: &ReadyPayload) -> Self {
        Self::dispatch(EVENT_READY, to_value(payload))
    }

    #[must_use]
    pub fn receive_message(message: &MessageResponse) -> Self {
        Self::dispatch(EVENT_RECEIVE_MESSAGE, to_value(message))
    }

    #[must_use]
    pub fn ack(op: OpCode, chat_id: Snowflake) -> Self {
        Self {
            op: OpCode::Ack,
            t: None,
            d: Some(to_value(&AckPayload { op, chat_id })),
        }
    }

    #[must_use]
    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            op: OpCode::Error,
            t: None,
            d: Some(to_value(&ErrorPayload {
                code: code.into(),
                message: message.into(),
            })),
        }
    }

    // === Client frames ===

    /// Parse a client text frame
    ///
    /// Malformed JSON gives [`CloseCode::DecodeError`]; an op the client may
    /// not send gives [`CloseCode::UnknownOpcode`].
    pub fn parse(text: &str) -> Result<Self, CloseCode> {
        let raw: RawFrame = serde_json::from_str(text).map_err(|_| CloseCode::DecodeError)?;

        let op = OpCode::from_u8(raw.op)
            .filter(|op| op.is_client_op())
            .ok_or(CloseCode::UnknownOpcode)?;

        Ok(Self { op, t: raw.t, d: raw.d })
    }

    /// Decode the `d` field for this op
    pub fn payload<T: DeserializeOwned>(&self) -> Result<T, CloseCode> {
        let data = self.d.clone().ok_or(CloseCode::DecodeError)?;
        serde_json::from_value(data).map_err(|_| CloseCode::DecodeError)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

fn to_value<T: Serialize>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or_default()
}

// === Payloads ===

/// `d` of the Ready dispatch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadyPayload {
    pub session_id: String,
    pub user_id: Snowflake,
}

/// `d` of SendMessage
///
/// Clients send the whole stored message; only the ids are read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendMessagePayload {
    pub id: Snowflake,
    pub chat_id: Snowflake,
}

/// `d` of JoinChat and LeaveChat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatPayload {
    pub chat_id: Snowflake,
}

/// `d` of Ack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AckPayload {
    pub op: OpCode,
    pub chat_id: Snowflake,
}

/// `d` of Error
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorPayload {
    pub code: String,
    pub message: String,
}

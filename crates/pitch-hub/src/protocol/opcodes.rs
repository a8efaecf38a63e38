//! Hub operation codes

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Hub operation codes
///
/// Carried in the `op` field of every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum OpCode {
    /// Server delivers an event (server only)
    Dispatch = 0,
    /// Relay a stored message to its chat (client only)
    SendMessage = 1,
    /// Join a chat group (client only)
    JoinChat = 2,
    /// Leave a chat group (client only)
    LeaveChat = 3,
    /// Join/leave acknowledged (server only)
    Ack = 4,
    /// Recoverable failure (server only)
    Error = 5,
}

impl OpCode {
    #[must_use]
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Dispatch),
            1 => Some(Self::SendMessage),
            2 => Some(Self::JoinChat),
            3 => Some(Self::LeaveChat),
            4 => Some(Self::Ack),
            5 => Some(Self::Error),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Check if this op code can be sent by the client
    #[must_use]
    pub const fn is_client_op(self) -> bool {
        matches!(self, Self::SendMessage | Self::JoinChat | Self::LeaveChat)
    }

    /// Check if this op code can be sent by the server
    #[must_use]
    pub const fn is_server_op(self) -> bool {
        matches!(self, Self::Dispatch | Self::Ack | Self::Error)
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Dispatch => "Dispatch",
            Self::SendMessage => "SendMessage",
            Self::JoinChat => "JoinChat",
            Self::LeaveChat => "LeaveChat",
            Self::Ack => "Ack",
            Self::Error => "Error",
        }
    }
}

impl Serialize for OpCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.as_u8())
    }
}

impl<'de> Deserialize<'de> for OpCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = u8::deserialize(deserializer)?;
        Self::from_u8(value)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid op code: {value}")))
    }
}

impl std::fmt::Display for OpCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name(), self.as_u8())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opcode_from_u8() {
        assert_eq!(OpCode::from_u8(0), Some(OpCode::Dispatch));
        assert_eq!(OpCode::from_u8(1), Some(OpCode::SendMessage));
        assert_eq!(OpCode::from_u8(2), Some(OpCode::JoinChat));
        assert_eq!(OpCode::from_u8(3), Some(OpCode::LeaveChat));
        assert_eq!(OpCode::from_u8(4), Some(OpCode::Ack));
        assert_eq!(OpCode::from_u8(5), Some(OpCode::Error));
        assert_eq!(OpCode::from_u8(6), None);
        assert_eq!(OpCode::from_u8(255), None);
    }

    #[test]
    fn test_direction() {
        for op in [OpCode::SendMessage, OpCode::JoinChat, OpCode::LeaveChat] {
            assert!(op.is_client_op());
            assert!(!op.is_server_op());
        }
        for op in [OpCode::Dispatch, OpCode::Ack, OpCode::Error] {
            assert!(op.is_server_op());
            assert!(!op.is_client_op());
        }
    }

    #[test]
    fn test_opcode_serialization() {
        assert_eq!(serde_json::to_string(&OpCode::Ack).unwrap(), "4");
        let op: OpCode = serde_json::from_str("2").unwrap();
        assert_eq!(op, OpCode::JoinChat);
        assert!(serde_json::from_str::<OpCode>("9").is_err());
    }

    #[test]
    fn test_opcode_display() {
        assert_eq!(OpCode::JoinChat.to_string(), "JoinChat (2)");
    }
}

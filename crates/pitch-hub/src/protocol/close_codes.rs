//! WebSocket close codes used by the hub

/// Hub close codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum CloseCode {
    /// Internal failure while handling a frame
    UnknownError = 4000,
    /// Op code is unknown or not sendable by clients
    UnknownOpcode = 4001,
    /// Frame is not valid JSON or its payload does not match the op
    DecodeError = 4002,
}

impl CloseCode {
    #[must_use]
    pub fn from_u16(value: u16) -> Option<Self> {
        match value {
            4000 => Some(Self::UnknownError),
            4001 => Some(Self::UnknownOpcode),
            4002 => Some(Self::DecodeError),
            _ => None,
        }
    }

    #[must_use]
    pub const fn as_u16(self) -> u16 {
        self as u16
    }

    /// Close reason sent with the close frame
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::UnknownError => "Internal error",
            Self::UnknownOpcode => "Unknown op code",
            Self::DecodeError => "Invalid payload",
        }
    }
}

impl std::fmt::Display for CloseCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.description(), self.as_u16())
    }
}

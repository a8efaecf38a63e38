//! Handler error types

use crate::protocol::{CloseCode, HubFrame};
use pitch_service::ServiceError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HandlerError {
    /// The frame cannot be processed; the connection is closed
    #[error("Protocol error: {0}")]
    Protocol(CloseCode),

    #[error(transparent)]
    Service(#[from] ServiceError),
}

impl From<CloseCode> for HandlerError {
    fn from(code: CloseCode) -> Self {
        Self::Protocol(code)
    }
}

impl HandlerError {
    /// Whether the client gets an Error frame and the connection stays open
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Protocol(_) => false,
            Self::Service(e) => e.status_code() < 500,
        }
    }

    /// Close code for unrecoverable errors
    pub fn to_close_code(&self) -> Option<CloseCode> {
        match self {
            Self::Protocol(code) => Some(*code),
            Self::Service(_) if !self.is_recoverable() => Some(CloseCode::UnknownError),
            Self::Service(_) => None,
        }
    }

    /// Error frame for recoverable errors
    pub fn to_error_frame(&self) -> Option<HubFrame> {
        match self {
            Self::Service(e) if self.is_recoverable() => {
                Some(HubFrame::error(e.error_code(), e.to_string()))
            }
            _ => None,
        }
    }
}

pub type HandlerResult<T> = Result<T, HandlerError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::OpCode;
    use pitch_core::DomainError;

    #[test]
    fn test_protocol_error_closes() {
        let err = HandlerError::from(CloseCode::DecodeError);
        assert!(!err.is_recoverable());
        assert_eq!(err.to_close_code(), Some(CloseCode::DecodeError));
        assert!(err.to_error_frame().is_none());
    }

    #[test]
    fn test_refused_operation_becomes_error_frame() {
        let err = HandlerError::from(ServiceError::from(DomainError::NotParticipant));
        assert!(err.is_recoverable());
        assert_eq!(err.to_close_code(), None);

        let frame = err.to_error_frame().unwrap();
        assert_eq!(frame.op, OpCode::Error);
        assert_eq!(frame.d.unwrap()["code"], "NOT_PARTICIPANT");
    }

    #[test]
    fn test_internal_failure_closes_with_4000() {
        let err = HandlerError::from(ServiceError::internal("boom"));
        assert_eq!(err.to_close_code(), Some(CloseCode::UnknownError));
        assert!(err.to_error_frame().is_none());
    }
}

//! Hub protocol definitions
//!
//! Op codes, the frame envelope, payloads and close codes.

mod close_codes;
mod frame;
mod opcodes;

pub use close_codes::CloseCode;
pub use frame::{
    AckPayload, ChatPayload, ErrorPayload, HubFrame, ReadyPayload, SendMessagePayload,
    EVENT_READY, EVENT_RECEIVE_MESSAGE,
};
pub use opcodes::OpCode;

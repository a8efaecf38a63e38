//! Value objects - immutable types that represent domain concepts

mod offer_status;
mod roles;
mod snowflake;

pub use offer_status::OfferStatusKind;
pub use roles::{Policy, Roles};
pub use snowflake::{Snowflake, SnowflakeGenerator, SnowflakeParseError};

//! # pitch-core
//!
//! Domain layer containing entities, value objects and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    advertisement_end_date, Achievements, AdvertisementKind, Chat, ClubAdvertisement,
    ClubHistory, ClubOffer, Favorite, Message, OfferStatus, PlayerAdvertisement, PlayerFoot,
    PlayerOffer, PlayerPosition, Problem, SalaryRange, User, ADVERTISEMENT_DURATION_DAYS,
    MAX_MESSAGE_LENGTH,
};
pub use error::DomainError;
pub use traits::{
    ActivityFilter, ChatRepository, ClubAdvertisementRepository, ClubHistoryRepository,
    ClubOfferRepository, FavoriteRepository, LookupRepository, MessageRepository,
    PlayerAdvertisementRepository, PlayerOfferRepository, ProblemRepository, RepoResult,
    SalaryRangeRepository, UserRepository,
};
pub use value_objects::{
    OfferStatusKind, Policy, Roles, Snowflake, SnowflakeGenerator, SnowflakeParseError,
};

//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in pitch-core.
//! Each repository handles database operations for a specific domain entity.

mod chat;
mod club_advertisement;
mod club_history;
mod club_offer;
mod error;
mod favorite;
mod lookup;
mod message;
mod player_advertisement;
mod player_offer;
mod problem;
mod salary_range;
mod user;

pub use chat::PgChatRepository;
pub use club_advertisement::PgClubAdvertisementRepository;
pub use club_history::PgClubHistoryRepository;
pub use club_offer::PgClubOfferRepository;
pub use favorite::PgFavoriteRepository;
pub use lookup::PgLookupRepository;
pub use message::PgMessageRepository;
pub use player_advertisement::PgPlayerAdvertisementRepository;
pub use player_offer::PgPlayerOfferRepository;
pub use problem::PgProblemRepository;
pub use salary_range::PgSalaryRangeRepository;
pub use user::PgUserRepository;

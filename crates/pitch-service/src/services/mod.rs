//! Business logic services
//!
//! Each service borrows the [`ServiceContext`], checks ownership and business
//! rules, and maps entities to response DTOs.

pub mod actor;
pub mod auth;
pub mod chat;
pub mod club_advertisement;
pub mod club_history;
pub mod club_offer;
pub mod context;
pub mod error;
pub mod export;
pub mod favorite;
pub mod lookup;
pub mod message;
pub mod player_advertisement;
pub mod player_offer;
pub mod problem;
pub mod salary_range;
pub mod seed;
pub mod summary;
pub mod user;

// Re-export all services for convenience
pub use actor::Actor;
pub use auth::AuthService;
pub use chat::ChatService;
pub use club_advertisement::ClubAdvertisementService;
pub use club_history::ClubHistoryService;
pub use club_offer::ClubOfferService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use export::{CsvExport, ExportService};
pub use favorite::FavoriteService;
pub use lookup::LookupService;
pub use message::MessageService;
pub use player_advertisement::PlayerAdvertisementService;
pub use player_offer::PlayerOfferService;
pub use problem::ProblemService;
pub use salary_range::SalaryRangeService;
pub use seed::SeedService;
pub use summary::SummaryService;
pub use user::UserService;

//! Database models - SQLx-compatible structs for PostgreSQL tables

mod advertisement;
mod chat;
mod club_history;
mod favorite;
mod lookup;
mod offer;
mod problem;
mod user;

pub use advertisement::{
    ClubAdvertisementModel, FavoritedClubAdvertisementModel, FavoritedPlayerAdvertisementModel,
    PlayerAdvertisementModel,
};
pub use chat::{ChatModel, MessageModel};
pub use club_history::ClubHistoryModel;
pub use favorite::FavoriteModel;
pub use lookup::{OfferStatusModel, PlayerFootModel, PlayerPositionModel, SalaryRangeModel};
pub use offer::{ClubOfferModel, PlayerOfferModel};
pub use problem::ProblemModel;
pub use user::UserModel;

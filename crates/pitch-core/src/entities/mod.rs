//! Domain entities - core business objects

mod advertisement;
mod chat;
mod club_history;
mod favorite;
mod lookup;
mod offer;
mod problem;
mod salary_range;
mod user;

pub use advertisement::{
    advertisement_end_date, AdvertisementKind, ClubAdvertisement, PlayerAdvertisement,
    ADVERTISEMENT_DURATION_DAYS,
};
pub use chat::{Chat, Message, MAX_MESSAGE_LENGTH};
pub use club_history::{Achievements, ClubHistory};
pub use favorite::Favorite;
pub use lookup::{OfferStatus, PlayerFoot, PlayerPosition};
pub use offer::{ClubOffer, PlayerOffer};
pub use problem::Problem;
pub use salary_range::SalaryRange;
pub use user::User;

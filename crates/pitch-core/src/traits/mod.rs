//! Repository traits (ports)

mod repositories;

pub use repositories::{
    ActivityFilter, ChatRepository, ClubAdvertisementRepository, ClubHistoryRepository,
    ClubOfferRepository, FavoriteRepository, LookupRepository, MessageRepository,
    PlayerAdvertisementRepository, PlayerOfferRepository, ProblemRepository, RepoResult,
    SalaryRangeRepository, UserRepository,
};

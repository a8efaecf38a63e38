//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{
    AchievementsRequest, ChangePasswordRequest, ClubAdvertisementRequest, ClubHistoryRequest,
    CreateChatRequest, CreateClubOfferRequest, CreateFavoriteRequest, CreateMessageRequest,
    CreatePlayerOfferRequest, CreateProblemRequest, LoginRequest, PlayerAdvertisementRequest,
    PlayerFootRequest, PlayerPositionRequest, RegisterRequest, SalaryRangeRequest,
    UpdateUserRequest,
};

pub use responses::{
    AchievementsResponse, ChatLookupResponse, ChatResponse, ClubAdvertisementResponse,
    ClubHistoryResponse, ClubOfferResponse, FavoriteCheckResponse,
    FavoriteClubAdvertisementResponse, FavoritePlayerAdvertisementResponse, FavoriteResponse,
    HealthChecks, HealthResponse, LoginResponse, MessageResponse, OfferStatusResponse,
    PlayerAdvertisementResponse, PlayerFootResponse, PlayerOfferResponse, PlayerPositionResponse,
    ProblemResponse, ReadinessResponse, SalaryRangeResponse, SummaryResponse, UserResponse,
    UserSummaryResponse,
};

pub use mappers::Related;

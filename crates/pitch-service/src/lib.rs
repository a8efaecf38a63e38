//! # pitch-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use services::{
    Actor, AuthService, ChatService, ClubAdvertisementService, ClubHistoryService,
    ClubOfferService, CsvExport, ExportService, FavoriteService, LookupService, MessageService,
    PlayerAdvertisementService, PlayerOfferService, ProblemService, SalaryRangeService,
    SeedService, ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult,
    SummaryService, UserService,
};

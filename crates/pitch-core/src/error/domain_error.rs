//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::Snowflake;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(Snowflake),

    #[error("Player position not found: {0}")]
    PlayerPositionNotFound(Snowflake),

    #[error("Player foot not found: {0}")]
    PlayerFootNotFound(Snowflake),

    #[error("Offer status not found: {0}")]
    OfferStatusNotFound(Snowflake),

    #[error("Salary range not found: {0}")]
    SalaryRangeNotFound(Snowflake),

    #[error("Player advertisement not found: {0}")]
    PlayerAdvertisementNotFound(Snowflake),

    #[error("Club advertisement not found: {0}")]
    ClubAdvertisementNotFound(Snowflake),

    #[error("Club offer not found: {0}")]
    ClubOfferNotFound(Snowflake),

    #[error("Player offer not found: {0}")]
    PlayerOfferNotFound(Snowflake),

    #[error("Favorite not found: {0}")]
    FavoriteNotFound(Snowflake),

    #[error("Club history not found: {0}")]
    ClubHistoryNotFound(Snowflake),

    #[error("Chat not found: {0}")]
    ChatNotFound(Snowflake),

    #[error("Message not found: {0}")]
    MessageNotFound(Snowflake),

    #[error("Problem not found: {0}")]
    ProblemNotFound(Snowflake),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Minimum salary cannot exceed maximum salary")]
    InvalidSalaryRange,

    #[error("Start date cannot be after end date")]
    InvalidDateRange,

    #[error("Content too long: max {max} characters")]
    ContentTooLong { max: usize },

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Not the owner of this {0}")]
    NotOwner(&'static str),

    #[error("Not a participant of this chat")]
    NotParticipant,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Email already in use")]
    EmailAlreadyExists,

    #[error("{0} already exists")]
    NameAlreadyExists(String),

    #[error("Advertisement is already a favorite")]
    AlreadyFavorite,

    #[error("A pending offer for this advertisement already exists")]
    DuplicateOffer,

    #[error("Offer has already been answered")]
    OfferNotPending,

    #[error("User is already an admin")]
    AlreadyAdmin,

    #[error("{0} is still referenced and cannot be removed")]
    InUse(&'static str),

    // =========================================================================
    // Business Rule Violations
    // =========================================================================
    #[error("Cannot make an offer on your own advertisement")]
    SelfOffer,

    #[error("Advertisement is no longer active")]
    AdvertisementInactive,

    #[error("Cannot start a chat with yourself")]
    SelfChat,

    #[error("The unknown user cannot be modified")]
    UnknownUserProtected,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::PlayerPositionNotFound(_) => "UNKNOWN_PLAYER_POSITION",
            Self::PlayerFootNotFound(_) => "UNKNOWN_PLAYER_FOOT",
            Self::OfferStatusNotFound(_) => "UNKNOWN_OFFER_STATUS",
            Self::SalaryRangeNotFound(_) => "UNKNOWN_SALARY_RANGE",
            Self::PlayerAdvertisementNotFound(_) => "UNKNOWN_PLAYER_ADVERTISEMENT",
            Self::ClubAdvertisementNotFound(_) => "UNKNOWN_CLUB_ADVERTISEMENT",
            Self::ClubOfferNotFound(_) => "UNKNOWN_CLUB_OFFER",
            Self::PlayerOfferNotFound(_) => "UNKNOWN_PLAYER_OFFER",
            Self::FavoriteNotFound(_) => "UNKNOWN_FAVORITE",
            Self::ClubHistoryNotFound(_) => "UNKNOWN_CLUB_HISTORY",
            Self::ChatNotFound(_) => "UNKNOWN_CHAT",
            Self::MessageNotFound(_) => "UNKNOWN_MESSAGE",
            Self::ProblemNotFound(_) => "UNKNOWN_PROBLEM",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::PasswordMismatch => "PASSWORD_MISMATCH",
            Self::InvalidSalaryRange => "INVALID_SALARY_RANGE",
            Self::InvalidDateRange => "INVALID_DATE_RANGE",
            Self::ContentTooLong { .. } => "CONTENT_TOO_LONG",

            // Authorization
            Self::NotOwner(_) => "NOT_OWNER",
            Self::NotParticipant => "NOT_PARTICIPANT",

            // Conflict
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            Self::NameAlreadyExists(_) => "NAME_ALREADY_EXISTS",
            Self::AlreadyFavorite => "ALREADY_FAVORITE",
            Self::DuplicateOffer => "DUPLICATE_OFFER",
            Self::OfferNotPending => "OFFER_NOT_PENDING",
            Self::AlreadyAdmin => "ALREADY_ADMIN",
            Self::InUse(_) => "IN_USE",

            // Business Rules
            Self::SelfOffer => "SELF_OFFER",
            Self::AdvertisementInactive => "ADVERTISEMENT_INACTIVE",
            Self::SelfChat => "SELF_CHAT",
            Self::UnknownUserProtected => "UNKNOWN_USER_PROTECTED",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::PlayerPositionNotFound(_)
                | Self::PlayerFootNotFound(_)
                | Self::OfferStatusNotFound(_)
                | Self::SalaryRangeNotFound(_)
                | Self::PlayerAdvertisementNotFound(_)
                | Self::ClubAdvertisementNotFound(_)
                | Self::ClubOfferNotFound(_)
                | Self::PlayerOfferNotFound(_)
                | Self::FavoriteNotFound(_)
                | Self::ClubHistoryNotFound(_)
                | Self::ChatNotFound(_)
                | Self::MessageNotFound(_)
                | Self::ProblemNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::InvalidEmail
                | Self::PasswordMismatch
                | Self::InvalidSalaryRange
                | Self::InvalidDateRange
                | Self::ContentTooLong { .. }
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::NotOwner(_) | Self::NotParticipant)
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::EmailAlreadyExists
                | Self::NameAlreadyExists(_)
                | Self::AlreadyFavorite
                | Self::DuplicateOffer
                | Self::OfferNotPending
                | Self::AlreadyAdmin
                | Self::InUse(_)
        )
    }

    /// Check if this is a business rule violation
    pub fn is_business_rule(&self) -> bool {
        matches!(
            self,
            Self::SelfOffer
                | Self::AdvertisementInactive
                | Self::SelfChat
                | Self::UnknownUserProtected
        )
    }

    /// HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        if self.is_not_found() {
            404
        } else if self.is_authorization() {
            403
        } else if self.is_validation() || self.is_business_rule() {
            400
        } else if self.is_conflict() {
            409
        } else {
            500
        }
    }
}

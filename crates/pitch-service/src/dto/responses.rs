//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Snowflake IDs are serialized as strings for JavaScript compatibility.

use chrono::{DateTime, NaiveDate, Utc};
use pitch_core::{Roles, Snowflake};
use serde::{Deserialize, Serialize};

// ============================================================================
// User Responses
// ============================================================================

/// Full account view
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: Snowflake,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub location: String,
    pub roles: Roles,
    pub created_at: DateTime<Utc>,
}

/// User embedded in other resources
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserSummaryResponse {
    pub id: Snowflake,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

/// Login result; the token is also set as a cookie
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub user: UserResponse,
}

// ============================================================================
// Lookup Responses
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerPositionResponse {
    pub id: Snowflake,
    pub position_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerFootResponse {
    pub id: Snowflake,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OfferStatusResponse {
    pub id: Snowflake,
    pub status_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalaryRangeResponse {
    pub id: Snowflake,
    pub min: f64,
    pub max: f64,
}

// ============================================================================
// Advertisement Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct PlayerAdvertisementResponse {
    pub id: Snowflake,
    pub player: UserSummaryResponse,
    pub player_position: PlayerPositionResponse,
    pub league: String,
    pub region: String,
    pub age: i32,
    pub height: i32,
    pub player_foot: PlayerFootResponse,
    pub salary_range: SalaryRangeResponse,
    pub creation_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClubAdvertisementResponse {
    pub id: Snowflake,
    pub club_member: UserSummaryResponse,
    pub player_position: PlayerPositionResponse,
    pub club_name: String,
    pub league: String,
    pub region: String,
    pub salary_range: SalaryRangeResponse,
    pub creation_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub is_active: bool,
}

// ============================================================================
// Offer Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct ClubOfferResponse {
    pub id: Snowflake,
    pub player_advertisement_id: Snowflake,
    pub offer_status: OfferStatusResponse,
    pub club_name: String,
    pub league: String,
    pub region: String,
    pub player_position: PlayerPositionResponse,
    pub salary: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_information: Option<String>,
    pub creation_date: DateTime<Utc>,
    pub club_member: UserSummaryResponse,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerOfferResponse {
    pub id: Snowflake,
    pub club_advertisement_id: Snowflake,
    pub offer_status: OfferStatusResponse,
    pub player_position: PlayerPositionResponse,
    pub age: i32,
    pub height: i32,
    pub player_foot: PlayerFootResponse,
    pub salary: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_information: Option<String>,
    pub creation_date: DateTime<Utc>,
    pub player: UserSummaryResponse,
}

// ============================================================================
// Favorite Responses
// ============================================================================

/// A newly added favorite
#[derive(Debug, Clone, Serialize)]
pub struct FavoriteResponse {
    pub id: Snowflake,
    pub advertisement_id: Snowflake,
    pub user_id: Snowflake,
}

#[derive(Debug, Clone, Serialize)]
pub struct FavoritePlayerAdvertisementResponse {
    pub id: Snowflake,
    pub user_id: Snowflake,
    pub player_advertisement: PlayerAdvertisementResponse,
}

#[derive(Debug, Clone, Serialize)]
pub struct FavoriteClubAdvertisementResponse {
    pub id: Snowflake,
    pub user_id: Snowflake,
    pub club_advertisement: ClubAdvertisementResponse,
}

/// `favorite_id` is `null` when the caller has not marked the advertisement
#[derive(Debug, Clone, Serialize)]
pub struct FavoriteCheckResponse {
    pub favorite_id: Option<Snowflake>,
}

// ============================================================================
// Club History Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct AchievementsResponse {
    pub id: Snowflake,
    pub number_of_matches: i32,
    pub goals: i32,
    pub assists: i32,
    pub additional_achievements: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ClubHistoryResponse {
    pub id: Snowflake,
    pub achievements: AchievementsResponse,
    pub club_name: String,
    pub league: String,
    pub region: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub player_position: PlayerPositionResponse,
    pub player: UserSummaryResponse,
}

// ============================================================================
// Chat Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct ChatResponse {
    pub id: Snowflake,
    pub user1: UserSummaryResponse,
    pub user2: UserSummaryResponse,
}

/// `chat_id` is `null` when the two users have no chat yet
#[derive(Debug, Clone, Serialize)]
pub struct ChatLookupResponse {
    pub chat_id: Option<Snowflake>,
}

/// A stored message, also the hub's `ReceiveMessage` payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub id: Snowflake,
    pub chat_id: Snowflake,
    pub sender_id: Snowflake,
    pub receiver_id: Snowflake,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

// ============================================================================
// Problem Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct ProblemResponse {
    pub id: Snowflake,
    pub title: String,
    pub description: String,
    pub is_solved: bool,
    pub creation_date: DateTime<Utc>,
    pub requester: UserSummaryResponse,
}

// ============================================================================
// Admin Responses
// ============================================================================

/// Row counts for the admin dashboard
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SummaryResponse {
    pub users: i64,
    pub active_player_advertisements: i64,
    pub player_advertisements: i64,
    pub active_club_advertisements: i64,
    pub club_advertisements: i64,
    pub club_offers: i64,
    pub player_offers: i64,
    pub chats: i64,
    pub messages: i64,
    pub club_histories: i64,
    pub unsolved_problems: i64,
    pub problems: i64,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}

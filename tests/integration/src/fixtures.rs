//! Test fixtures and data generators
//!
//! Provides reusable request bodies and the slices of response bodies the
//! tests inspect. Ids travel as strings.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Seeded lookup ids
pub const POSITION_GOALKEEPER: &str = "1";
pub const POSITION_CENTER_BACK: &str = "3";
pub const FOOT_RIGHT: &str = "2";

/// A suffix unique within the run and across runs against the same database
pub fn unique_suffix() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();
    format!("{millis}{}", COUNTER.fetch_add(1, Ordering::SeqCst))
}

// ============================================================================
// Accounts
// ============================================================================

#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub location: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            email: format!("player{suffix}@example.com"),
            first_name: "Jan".to_string(),
            last_name: format!("Tester{suffix}"),
            phone_number: "600100200".to_string(),
            location: "Krakow".to_string(),
            password: "TestPass123!".to_string(),
            confirm_password: "TestPass123!".to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub expires_at: String,
    pub user: UserResponse,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub roles: Vec<String>,
}

/// User embedded in other resources
#[derive(Debug, Clone, Deserialize)]
pub struct UserSummary {
    pub id: String,
    pub email: String,
}

// ============================================================================
// Advertisements
// ============================================================================

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SalaryRange {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Serialize)]
pub struct PlayerAdvertisementRequest {
    pub player_position_id: String,
    pub league: String,
    pub region: String,
    pub age: i32,
    pub height: i32,
    pub player_foot_id: String,
    pub salary_range: SalaryRange,
}

impl PlayerAdvertisementRequest {
    pub fn sample() -> Self {
        Self {
            player_position_id: POSITION_GOALKEEPER.to_string(),
            league: "Ekstraklasa".to_string(),
            region: "Malopolska".to_string(),
            age: 24,
            height: 190,
            player_foot_id: FOOT_RIGHT.to_string(),
            salary_range: SalaryRange {
                min: 5000.0,
                max: 8000.0,
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ClubAdvertisementRequest {
    pub player_position_id: String,
    pub club_name: String,
    pub league: String,
    pub region: String,
    pub salary_range: SalaryRange,
}

impl ClubAdvertisementRequest {
    pub fn sample() -> Self {
        Self {
            player_position_id: POSITION_CENTER_BACK.to_string(),
            club_name: format!("KS Test {}", unique_suffix()),
            league: "I liga".to_string(),
            region: "Slask".to_string(),
            salary_range: SalaryRange {
                min: 3000.0,
                max: 6000.0,
            },
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct PlayerAdvertisementResponse {
    pub id: String,
    pub player: UserSummary,
    pub league: String,
    pub end_date: String,
    pub is_active: bool,
}

#[derive(Debug, Deserialize)]
pub struct ClubAdvertisementResponse {
    pub id: String,
    pub club_member: UserSummary,
    pub club_name: String,
    pub is_active: bool,
}

// ============================================================================
// Offers
// ============================================================================

#[derive(Debug, Serialize)]
pub struct CreateClubOfferRequest {
    pub player_advertisement_id: String,
    pub club_name: String,
    pub league: String,
    pub region: String,
    pub player_position_id: String,
    pub salary: f64,
    pub additional_information: Option<String>,
}

impl CreateClubOfferRequest {
    pub fn for_advertisement(player_advertisement_id: &str) -> Self {
        Self {
            player_advertisement_id: player_advertisement_id.to_string(),
            club_name: "Wisla Test".to_string(),
            league: "Ekstraklasa".to_string(),
            region: "Malopolska".to_string(),
            player_position_id: POSITION_GOALKEEPER.to_string(),
            salary: 6500.0,
            additional_information: Some("Two year contract".to_string()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CreatePlayerOfferRequest {
    pub club_advertisement_id: String,
    pub player_position_id: String,
    pub age: i32,
    pub height: i32,
    pub player_foot_id: String,
    pub salary: f64,
    pub additional_information: Option<String>,
}

impl CreatePlayerOfferRequest {
    pub fn for_advertisement(club_advertisement_id: &str) -> Self {
        Self {
            club_advertisement_id: club_advertisement_id.to_string(),
            player_position_id: POSITION_CENTER_BACK.to_string(),
            age: 27,
            height: 186,
            player_foot_id: FOOT_RIGHT.to_string(),
            salary: 4500.0,
            additional_information: None,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct OfferStatus {
    pub id: String,
    pub status_name: String,
}

/// Fields shared by club and player offers
#[derive(Debug, Deserialize)]
pub struct OfferResponse {
    pub id: String,
    pub offer_status: OfferStatus,
    pub salary: f64,
}

// ============================================================================
// Favorites
// ============================================================================

#[derive(Debug, Serialize)]
pub struct CreateFavoriteRequest {
    pub advertisement_id: String,
}

#[derive(Debug, Deserialize)]
pub struct FavoriteResponse {
    pub id: String,
    pub advertisement_id: String,
    pub user_id: String,
}

#[derive(Debug, Deserialize)]
pub struct FavoriteCheckResponse {
    pub favorite_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct FavoritePlayerAdvertisementResponse {
    pub id: String,
    pub player_advertisement: PlayerAdvertisementResponse,
}

// ============================================================================
// Club history
// ============================================================================

#[derive(Debug, Serialize)]
pub struct AchievementsRequest {
    pub number_of_matches: i32,
    pub goals: i32,
    pub assists: i32,
    pub additional_achievements: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ClubHistoryRequest {
    pub club_name: String,
    pub league: String,
    pub region: String,
    pub start_date: String,
    pub end_date: String,
    pub player_position_id: String,
    pub achievements: AchievementsRequest,
}

impl ClubHistoryRequest {
    pub fn sample() -> Self {
        Self {
            club_name: "Cracovia".to_string(),
            league: "Ekstraklasa".to_string(),
            region: "Malopolska".to_string(),
            start_date: "2019-07-01".to_string(),
            end_date: "2022-06-30".to_string(),
            player_position_id: POSITION_GOALKEEPER.to_string(),
            achievements: AchievementsRequest {
                number_of_matches: 64,
                goals: 0,
                assists: 2,
                additional_achievements: Some("Cup winner".to_string()),
            },
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AchievementsResponse {
    pub number_of_matches: i32,
    pub goals: i32,
    pub assists: i32,
}

#[derive(Debug, Deserialize)]
pub struct ClubHistoryResponse {
    pub id: String,
    pub club_name: String,
    pub player: UserSummary,
    pub achievements: AchievementsResponse,
}

// ============================================================================
// Chats and messages
// ============================================================================

#[derive(Debug, Serialize)]
pub struct CreateChatRequest {
    pub user2_id: String,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub id: String,
    pub user1: UserSummary,
    pub user2: UserSummary,
}

#[derive(Debug, Deserialize)]
pub struct ChatLookupResponse {
    pub chat_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CreateMessageRequest {
    pub chat_id: String,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct MessageResponse {
    pub id: String,
    pub chat_id: String,
    pub sender_id: String,
    pub receiver_id: String,
    pub content: String,
}

// ============================================================================
// Problems
// ============================================================================

#[derive(Debug, Serialize)]
pub struct CreateProblemRequest {
    pub title: String,
    pub description: String,
}

impl CreateProblemRequest {
    pub fn sample() -> Self {
        Self {
            title: "Cannot renew advertisement".to_string(),
            description: "Renew keeps failing on my club advertisement".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ProblemResponse {
    pub id: String,
    pub title: String,
    pub is_solved: bool,
    pub requester: UserSummary,
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

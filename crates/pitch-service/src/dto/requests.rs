//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.
//! Ids are accepted as JSON strings or numbers.

use chrono::NaiveDate;
use pitch_core::Snowflake;
use serde::Deserialize;
use validator::{Validate, ValidationError};

fn non_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("must not be blank".into()));
    }
    Ok(())
}

fn finite(value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::new("finite").with_message("must be a number".into()));
    }
    Ok(())
}

// ============================================================================
// Account Requests
// ============================================================================

/// Account registration request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email(message = "Invalid email format"), length(max = 256))]
    pub email: String,

    #[validate(length(min = 1, max = 50, message = "First name must be 1-50 characters"))]
    pub first_name: String,

    #[validate(length(min = 1, max = 50, message = "Last name must be 1-50 characters"))]
    pub last_name: String,

    #[validate(length(min = 1, max = 20, message = "Phone number must be 1-20 characters"))]
    pub phone_number: String,

    #[validate(length(min = 1, max = 100, message = "Location must be 1-100 characters"))]
    pub location: String,

    pub password: String,

    pub confirm_password: String,
}

/// Login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Profile update; every field is replaced
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, max = 50, message = "First name must be 1-50 characters"))]
    pub first_name: String,

    #[validate(length(min = 1, max = 50, message = "Last name must be 1-50 characters"))]
    pub last_name: String,

    #[validate(length(min = 1, max = 20, message = "Phone number must be 1-20 characters"))]
    pub phone_number: String,

    #[validate(length(min = 1, max = 100, message = "Location must be 1-100 characters"))]
    pub location: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ChangePasswordRequest {
    #[validate(length(min = 1, message = "Old password is required"))]
    pub old_password: String,

    pub new_password: String,

    pub confirm_password: String,
}

// ============================================================================
// Lookup Requests
// ============================================================================

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PlayerPositionRequest {
    #[validate(
        length(min = 1, max = 50, message = "Position name must be 1-50 characters"),
        custom(function = "non_blank")
    )]
    pub position_name: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PlayerFootRequest {
    #[validate(
        length(min = 1, max = 20, message = "Name must be 1-20 characters"),
        custom(function = "non_blank")
    )]
    pub name: String,
}

/// Salary bounds; `min <= max` is checked by the service
#[derive(Debug, Clone, Copy, Deserialize, Validate)]
pub struct SalaryRangeRequest {
    #[validate(range(min = 0.0, message = "Minimum salary cannot be negative"), custom(function = "finite"))]
    pub min: f64,

    #[validate(range(min = 0.0, message = "Maximum salary cannot be negative"), custom(function = "finite"))]
    pub max: f64,
}

// ============================================================================
// Advertisement Requests
// ============================================================================

/// Create or update a player advertisement
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PlayerAdvertisementRequest {
    pub player_position_id: Snowflake,

    #[validate(length(min = 1, max = 30, message = "League must be 1-30 characters"))]
    pub league: String,

    #[validate(length(min = 1, max = 30, message = "Region must be 1-30 characters"))]
    pub region: String,

    #[validate(range(min = 14, max = 100, message = "Age must be between 14 and 100"))]
    pub age: i32,

    #[validate(range(min = 100, max = 250, message = "Height must be between 100 and 250 cm"))]
    pub height: i32,

    pub player_foot_id: Snowflake,

    #[validate(nested)]
    pub salary_range: SalaryRangeRequest,
}

/// Create or update a club advertisement
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ClubAdvertisementRequest {
    pub player_position_id: Snowflake,

    #[validate(length(min = 1, max = 100, message = "Club name must be 1-100 characters"))]
    pub club_name: String,

    #[validate(length(min = 1, max = 30, message = "League must be 1-30 characters"))]
    pub league: String,

    #[validate(length(min = 1, max = 30, message = "Region must be 1-30 characters"))]
    pub region: String,

    #[validate(nested)]
    pub salary_range: SalaryRangeRequest,
}

// ============================================================================
// Offer Requests
// ============================================================================

/// A club member's offer on a player advertisement
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateClubOfferRequest {
    pub player_advertisement_id: Snowflake,

    #[validate(length(min = 1, max = 100, message = "Club name must be 1-100 characters"))]
    pub club_name: String,

    #[validate(length(min = 1, max = 30, message = "League must be 1-30 characters"))]
    pub league: String,

    #[validate(length(min = 1, max = 30, message = "Region must be 1-30 characters"))]
    pub region: String,

    pub player_position_id: Snowflake,

    #[validate(range(min = 0.0, message = "Salary cannot be negative"), custom(function = "finite"))]
    pub salary: f64,

    #[validate(length(max = 500, message = "Additional information must be at most 500 characters"))]
    pub additional_information: Option<String>,
}

/// A player's offer on a club advertisement
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePlayerOfferRequest {
    pub club_advertisement_id: Snowflake,

    pub player_position_id: Snowflake,

    #[validate(range(min = 14, max = 100, message = "Age must be between 14 and 100"))]
    pub age: i32,

    #[validate(range(min = 100, max = 250, message = "Height must be between 100 and 250 cm"))]
    pub height: i32,

    pub player_foot_id: Snowflake,

    #[validate(range(min = 0.0, message = "Salary cannot be negative"), custom(function = "finite"))]
    pub salary: f64,

    #[validate(length(max = 500, message = "Additional information must be at most 500 characters"))]
    pub additional_information: Option<String>,
}

// ============================================================================
// Favorite Requests
// ============================================================================

#[derive(Debug, Clone, Copy, Deserialize, Validate)]
pub struct CreateFavoriteRequest {
    pub advertisement_id: Snowflake,
}

// ============================================================================
// Club History Requests
// ============================================================================

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AchievementsRequest {
    #[validate(range(min = 0, message = "Number of matches cannot be negative"))]
    pub number_of_matches: i32,

    #[validate(range(min = 0, message = "Goals cannot be negative"))]
    pub goals: i32,

    #[validate(range(min = 0, message = "Assists cannot be negative"))]
    pub assists: i32,

    #[validate(length(max = 500, message = "Additional achievements must be at most 500 characters"))]
    pub additional_achievements: Option<String>,
}

/// Create or update a club history record; `start_date <= end_date`
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ClubHistoryRequest {
    #[validate(length(min = 1, max = 100, message = "Club name must be 1-100 characters"))]
    pub club_name: String,

    #[validate(length(min = 1, max = 30, message = "League must be 1-30 characters"))]
    pub league: String,

    #[validate(length(min = 1, max = 30, message = "Region must be 1-30 characters"))]
    pub region: String,

    pub start_date: NaiveDate,

    pub end_date: NaiveDate,

    pub player_position_id: Snowflake,

    #[validate(nested)]
    pub achievements: AchievementsRequest,
}

// ============================================================================
// Chat Requests
// ============================================================================

#[derive(Debug, Clone, Copy, Deserialize, Validate)]
pub struct CreateChatRequest {
    pub user2_id: Snowflake,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateMessageRequest {
    pub chat_id: Snowflake,

    #[validate(
        length(min = 1, max = 500, message = "Message must be 1-500 characters"),
        custom(function = "non_blank")
    )]
    pub content: String,
}

// ============================================================================
// Problem Requests
// ============================================================================

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProblemRequest {
    #[validate(length(min = 1, max = 100, message = "Title must be 1-100 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = 500, message = "Description must be 1-500 characters"))]
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_validation() {
        let request: RegisterRequest = serde_json::from_value(serde_json::json!({
            "email": "not-an-email",
            "first_name": "",
            "last_name": "Nowak",
            "phone_number": "123",
            "location": "Gdansk",
            "password": "Secret#1",
            "confirm_password": "Secret#1"
        }))
        .unwrap();

        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("first_name"));
        assert!(!fields.contains_key("last_name"));
    }

    #[test]
    fn test_player_advertisement_ranges() {
        let request: PlayerAdvertisementRequest = serde_json::from_value(serde_json::json!({
            "player_position_id": "10",
            "league": "Ekstraklasa",
            "region": "Pomorze",
            "age": 13,
            "height": 260,
            "player_foot_id": 2,
            "salary_range": { "min": -5.0, "max": 10.0 }
        }))
        .unwrap();

        assert_eq!(request.player_position_id, Snowflake::new(10));
        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("age"));
        assert!(fields.contains_key("height"));
        assert!(errors.errors().contains_key("salary_range"));
    }

    #[test]
    fn test_blank_message_rejected() {
        let request = CreateMessageRequest {
            chat_id: Snowflake::new(1),
            content: "   ".to_string(),
        };
        assert!(request.validate().is_err());

        let request = CreateMessageRequest {
            chat_id: Snowflake::new(1),
            content: "x".repeat(501),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_club_history_dates_parse() {
        let request: ClubHistoryRequest = serde_json::from_value(serde_json::json!({
            "club_name": "Lechia",
            "league": "I liga",
            "region": "Pomorze",
            "start_date": "2019-07-01",
            "end_date": "2021-06-30",
            "player_position_id": "3",
            "achievements": {
                "number_of_matches": 40,
                "goals": 2,
                "assists": 5,
                "additional_achievements": null
            }
        }))
        .unwrap();

        assert!(request.validate().is_ok());
        assert_eq!(request.start_date, NaiveDate::from_ymd_opt(2019, 7, 1).unwrap());
    }
}

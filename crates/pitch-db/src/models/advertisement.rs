//! Advertisement database models
//!
//! Rows are always read joined with their `salary_ranges` row.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// `player_advertisements` joined with `salary_ranges`
#[derive(Debug, Clone, FromRow)]
pub struct PlayerAdvertisementModel {
    pub id: i64,
    pub player_id: i64,
    pub player_position_id: i64,
    pub league: String,
    pub region: String,
    pub age: i32,
    pub height: i32,
    pub player_foot_id: i64,
    pub salary_range_id: i64,
    pub min_salary: f64,
    pub max_salary: f64,
    pub creation_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

/// `club_advertisements` joined with `salary_ranges`
#[derive(Debug, Clone, FromRow)]
pub struct ClubAdvertisementModel {
    pub id: i64,
    pub club_member_id: i64,
    pub player_position_id: i64,
    pub club_name: String,
    pub league: String,
    pub region: String,
    pub salary_range_id: i64,
    pub min_salary: f64,
    pub max_salary: f64,
    pub creation_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

/// A player advertisement reached through a user's favorite
#[derive(Debug, Clone, FromRow)]
pub struct FavoritedPlayerAdvertisementModel {
    pub favorite_id: i64,
    #[sqlx(flatten)]
    pub advertisement: PlayerAdvertisementModel,
}

/// A club advertisement reached through a user's favorite
#[derive(Debug, Clone, FromRow)]
pub struct FavoritedClubAdvertisementModel {
    pub favorite_id: i64,
    #[sqlx(flatten)]
    pub advertisement: ClubAdvertisementModel,
}

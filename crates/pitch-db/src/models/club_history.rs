//! Club history database model (joined with achievements)

use chrono::NaiveDate;
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct ClubHistoryModel {
    pub id: i64,
    pub achievements_id: i64,
    pub number_of_matches: i32,
    pub goals: i32,
    pub assists: i32,
    pub additional_achievements: Option<String>,
    pub club_name: String,
    pub league: String,
    pub region: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub player_position_id: i64,
    pub player_id: i64,
}

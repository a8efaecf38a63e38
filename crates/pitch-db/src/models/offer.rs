//! Offer database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct ClubOfferModel {
    pub id: i64,
    pub player_advertisement_id: i64,
    pub offer_status_id: i64,
    pub club_name: String,
    pub league: String,
    pub region: String,
    pub player_position_id: i64,
    pub salary: f64,
    pub additional_information: Option<String>,
    pub creation_date: DateTime<Utc>,
    pub club_member_id: i64,
}

#[derive(Debug, Clone, FromRow)]
pub struct PlayerOfferModel {
    pub id: i64,
    pub club_advertisement_id: i64,
    pub offer_status_id: i64,
    pub player_position_id: i64,
    pub age: i32,
    pub height: i32,
    pub player_foot_id: i64,
    pub salary: f64,
    pub additional_information: Option<String>,
    pub creation_date: DateTime<Utc>,
    pub player_id: i64,
}

//! Lookup table models

use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct PlayerPositionModel {
    pub id: i64,
    pub position_name: String,
}

#[derive(Debug, Clone, FromRow)]
pub struct PlayerFootModel {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, FromRow)]
pub struct OfferStatusModel {
    pub id: i64,
    pub status_name: String,
}

#[derive(Debug, Clone, FromRow)]
pub struct SalaryRangeModel {
    pub id: i64,
    pub min_salary: f64,
    pub max_salary: f64,
}

//! Problem database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct ProblemModel {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub is_solved: bool,
    pub creation_date: DateTime<Utc>,
    pub requester_id: i64,
}

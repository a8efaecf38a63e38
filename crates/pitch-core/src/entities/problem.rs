//! Problem - a support request sent to the administrators

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    pub id: Snowflake,
    pub title: String,
    pub description: String,
    pub is_solved: bool,
    pub creation_date: DateTime<Utc>,
    pub requester_id: Snowflake,
}

impl Problem {
    pub fn new(id: Snowflake, title: String, description: String, requester_id: Snowflake) -> Self {
        Self {
            id,
            title,
            description,
            is_solved: false,
            creation_date: Utc::now(),
            requester_id,
        }
    }

    pub fn solve(&mut self) {
        self.is_solved = true;
    }
}

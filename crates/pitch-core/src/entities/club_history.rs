//! Club history - a player's past club with the achievements earned there

use chrono::NaiveDate;

use crate::error::DomainError;
use crate::value_objects::Snowflake;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Achievements {
    pub id: Snowflake,
    pub number_of_matches: i32,
    pub goals: i32,
    pub assists: i32,
    pub additional_achievements: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClubHistory {
    pub id: Snowflake,
    pub achievements: Achievements,
    pub club_name: String,
    pub league: String,
    pub region: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub player_position_id: Snowflake,
    pub player_id: Snowflake,
}

impl ClubHistory {
    /// Check that the period does not end before it starts
    pub fn check_period(start_date: NaiveDate, end_date: NaiveDate) -> Result<(), DomainError> {
        if start_date > end_date {
            return Err(DomainError::InvalidDateRange);
        }
        Ok(())
    }

    #[inline]
    pub fn is_owned_by(&self, user_id: Snowflake) -> bool {
        self.player_id == user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_period() {
        let start = NaiveDate::from_ymd_opt(2020, 7, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2022, 6, 30).unwrap();
        assert!(ClubHistory::check_period(start, end).is_ok());
        assert!(ClubHistory::check_period(start, start).is_ok());
        assert!(matches!(
            ClubHistory::check_period(end, start),
            Err(DomainError::InvalidDateRange)
        ));
    }
}

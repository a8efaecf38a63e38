//! Advertisements - a player looking for a club, or a club looking for a player

use chrono::{DateTime, Duration, Utc};

use super::SalaryRange;
use crate::value_objects::Snowflake;

/// Days an advertisement stays active after creation or renewal
pub const ADVERTISEMENT_DURATION_DAYS: i64 = 30;

/// End date for an advertisement published at `from`
pub fn advertisement_end_date(from: DateTime<Utc>) -> DateTime<Utc> {
    from + Duration::days(ADVERTISEMENT_DURATION_DAYS)
}

/// Which advertisement table a favorite or offer points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdvertisementKind {
    Player,
    Club,
}

impl AdvertisementKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Player => "PlayerAdvertisement",
            Self::Club => "ClubAdvertisement",
        }
    }
}

/// A player advertising themselves to clubs
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerAdvertisement {
    pub id: Snowflake,
    pub player_id: Snowflake,
    pub player_position_id: Snowflake,
    pub league: String,
    pub region: String,
    pub age: i32,
    pub height: i32,
    pub player_foot_id: Snowflake,
    pub salary_range: SalaryRange,
    pub creation_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

/// A club member advertising an open position
#[derive(Debug, Clone, PartialEq)]
pub struct ClubAdvertisement {
    pub id: Snowflake,
    pub club_member_id: Snowflake,
    pub player_position_id: Snowflake,
    pub club_name: String,
    pub league: String,
    pub region: String,
    pub salary_range: SalaryRange,
    pub creation_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

impl PlayerAdvertisement {
    #[inline]
    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        self.end_date >= now
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.is_active_at(Utc::now())
    }

    #[inline]
    pub fn is_owned_by(&self, user_id: Snowflake) -> bool {
        self.player_id == user_id
    }

    /// Extend the advertisement for another full period from now
    pub fn renew(&mut self) {
        self.end_date = advertisement_end_date(Utc::now());
    }
}

impl ClubAdvertisement {
    #[inline]
    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        self.end_date >= now
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.is_active_at(Utc::now())
    }

    #[inline]
    pub fn is_owned_by(&self, user_id: Snowflake) -> bool {
        self.club_member_id == user_id
    }

    pub fn renew(&mut self) {
        self.end_date = advertisement_end_date(Utc::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player_ad(end_date: DateTime<Utc>) -> PlayerAdvertisement {
        PlayerAdvertisement {
            id: Snowflake::new(10),
            player_id: Snowflake::new(1),
            player_position_id: Snowflake::new(10),
            league: "Ekstraklasa".to_string(),
            region: "Mazowieckie".to_string(),
            age: 24,
            height: 182,
            player_foot_id: Snowflake::new(2),
            salary_range: SalaryRange {
                id: Snowflake::new(11),
                min: 1000.0,
                max: 2000.0,
            },
            creation_date: end_date - Duration::days(ADVERTISEMENT_DURATION_DAYS),
            end_date,
        }
    }

    #[test]
    fn test_end_date_is_thirty_days_out() {
        let now = Utc::now();
        assert_eq!(advertisement_end_date(now) - now, Duration::days(30));
    }

    #[test]
    fn test_active_boundary() {
        let now = Utc::now();
        let ad = player_ad(now);
        assert!(ad.is_active_at(now));
        assert!(!ad.is_active_at(now + Duration::seconds(1)));
    }

    #[test]
    fn test_renew_reactivates() {
        let mut ad = player_ad(Utc::now() - Duration::days(3));
        assert!(!ad.is_active());
        ad.renew();
        assert!(ad.is_active());
        assert!(ad.end_date > Utc::now() + Duration::days(29));
    }

    #[test]
    fn test_ownership() {
        let ad = player_ad(Utc::now());
        assert!(ad.is_owned_by(Snowflake::new(1)));
        assert!(!ad.is_owned_by(Snowflake::new(2)));
    }
}

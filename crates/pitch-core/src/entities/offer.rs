//! Offers - answers to advertisements from the opposite party

use chrono::{DateTime, Utc};

use crate::error::DomainError;
use crate::value_objects::{OfferStatusKind, Snowflake};

/// A club member's offer on a player advertisement
#[derive(Debug, Clone, PartialEq)]
pub struct ClubOffer {
    pub id: Snowflake,
    pub player_advertisement_id: Snowflake,
    pub status: OfferStatusKind,
    pub club_name: String,
    pub league: String,
    pub region: String,
    pub player_position_id: Snowflake,
    pub salary: f64,
    pub additional_information: Option<String>,
    pub creation_date: DateTime<Utc>,
    pub club_member_id: Snowflake,
}

/// A player's offer on a club advertisement
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerOffer {
    pub id: Snowflake,
    pub club_advertisement_id: Snowflake,
    pub status: OfferStatusKind,
    pub player_position_id: Snowflake,
    pub age: i32,
    pub height: i32,
    pub player_foot_id: Snowflake,
    pub salary: f64,
    pub additional_information: Option<String>,
    pub creation_date: DateTime<Utc>,
    pub player_id: Snowflake,
}

/// Move a pending offer to its answer
fn answer(current: OfferStatusKind, to: OfferStatusKind) -> Result<OfferStatusKind, DomainError> {
    if !current.is_pending() {
        return Err(DomainError::OfferNotPending);
    }
    if to.is_pending() {
        return Err(DomainError::ValidationError(
            "an offer can only be accepted or rejected".to_string(),
        ));
    }
    Ok(to)
}

impl ClubOffer {
    #[inline]
    pub fn is_sent_by(&self, user_id: Snowflake) -> bool {
        self.club_member_id == user_id
    }

    pub fn answer(&mut self, status: OfferStatusKind) -> Result<(), DomainError> {
        self.status = answer(self.status, status)?;
        Ok(())
    }
}

impl PlayerOffer {
    #[inline]
    pub fn is_sent_by(&self, user_id: Snowflake) -> bool {
        self.player_id == user_id
    }

    pub fn answer(&mut self, status: OfferStatusKind) -> Result<(), DomainError> {
        self.status = answer(self.status, status)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn club_offer() -> ClubOffer {
        ClubOffer {
            id: Snowflake::new(1),
            player_advertisement_id: Snowflake::new(2),
            status: OfferStatusKind::Offered,
            club_name: "Legia".to_string(),
            league: "Ekstraklasa".to_string(),
            region: "Mazowieckie".to_string(),
            player_position_id: Snowflake::new(10),
            salary: 1500.0,
            additional_information: None,
            creation_date: Utc::now(),
            club_member_id: Snowflake::new(3),
        }
    }

    #[test]
    fn test_accept_pending() {
        let mut offer = club_offer();
        offer.answer(OfferStatusKind::Accepted).unwrap();
        assert_eq!(offer.status, OfferStatusKind::Accepted);
    }

    #[test]
    fn test_cannot_answer_twice() {
        let mut offer = club_offer();
        offer.answer(OfferStatusKind::Rejected).unwrap();
        let err = offer.answer(OfferStatusKind::Accepted).unwrap_err();
        assert!(matches!(err, DomainError::OfferNotPending));
    }

    #[test]
    fn test_cannot_answer_with_offered() {
        let mut offer = club_offer();
        assert!(offer.answer(OfferStatusKind::Offered).is_err());
        assert_eq!(offer.status, OfferStatusKind::Offered);
    }

    #[test]
    fn test_sender() {
        assert!(club_offer().is_sent_by(Snowflake::new(3)));
        assert!(!club_offer().is_sent_by(Snowflake::new(2)));
    }
}

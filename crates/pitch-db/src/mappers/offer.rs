//! Offer entity <-> model mappers
//!
//! Status ids outside the seeded set are reported instead of guessed.

use pitch_core::entities::{ClubOffer, PlayerOffer};
use pitch_core::error::DomainError;
use pitch_core::value_objects::{OfferStatusKind, Snowflake};

use crate::models::{ClubOfferModel, PlayerOfferModel};

fn status_from_id(id: i64) -> Result<OfferStatusKind, DomainError> {
    let id = Snowflake::new(id);
    OfferStatusKind::from_id(id).ok_or(DomainError::OfferStatusNotFound(id))
}

impl TryFrom<ClubOfferModel> for ClubOffer {
    type Error = DomainError;

    fn try_from(model: ClubOfferModel) -> Result<Self, Self::Error> {
        Ok(ClubOffer {
            id: Snowflake::new(model.id),
            player_advertisement_id: Snowflake::new(model.player_advertisement_id),
            status: status_from_id(model.offer_status_id)?,
            club_name: model.club_name,
            league: model.league,
            region: model.region,
            player_position_id: Snowflake::new(model.player_position_id),
            salary: model.salary,
            additional_information: model.additional_information,
            creation_date: model.creation_date,
            club_member_id: Snowflake::new(model.club_member_id),
        })
    }
}

impl TryFrom<PlayerOfferModel> for PlayerOffer {
    type Error = DomainError;

    fn try_from(model: PlayerOfferModel) -> Result<Self, Self::Error> {
        Ok(PlayerOffer {
            id: Snowflake::new(model.id),
            club_advertisement_id: Snowflake::new(model.club_advertisement_id),
            status: status_from_id(model.offer_status_id)?,
            player_position_id: Snowflake::new(model.player_position_id),
            age: model.age,
            height: model.height,
            player_foot_id: Snowflake::new(model.player_foot_id),
            salary: model.salary,
            additional_information: model.additional_information,
            creation_date: model.creation_date,
            player_id: Snowflake::new(model.player_id),
        })
    }
}

/// Convert a list of offer rows, failing on the first unknown status
pub fn offers_from_models<M, E>(models: Vec<M>) -> Result<Vec<E>, DomainError>
where
    E: TryFrom<M, Error = DomainError>,
{
    models.into_iter().map(E::try_from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn model(status: i64) -> ClubOfferModel {
        ClubOfferModel {
            id: 1,
            player_advertisement_id: 2,
            offer_status_id: status,
            club_name: "Wisla".to_string(),
            league: "I liga".to_string(),
            region: "Malopolska".to_string(),
            player_position_id: 10,
            salary: 900.0,
            additional_information: Some("Trial first".to_string()),
            creation_date: Utc::now(),
            club_member_id: 3,
        }
    }

    #[test]
    fn test_known_status() {
        let offer = ClubOffer::try_from(model(2)).unwrap();
        assert_eq!(offer.status, OfferStatusKind::Accepted);
        assert_eq!(offer.club_member_id, Snowflake::new(3));
    }

    #[test]
    fn test_unknown_status() {
        let err = ClubOffer::try_from(model(9)).unwrap_err();
        assert!(matches!(err, DomainError::OfferStatusNotFound(_)));
    }

    #[test]
    fn test_list_conversion() {
        let offers: Vec<ClubOffer> = offers_from_models(vec![model(1), model(3)]).unwrap();
        assert_eq!(offers.len(), 2);
        assert!(offers_from_models::<_, ClubOffer>(vec![model(1), model(0)]).is_err());
    }
}

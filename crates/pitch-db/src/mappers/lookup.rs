//! Lookup entity <-> model mappers

use pitch_core::entities::{OfferStatus, PlayerFoot, PlayerPosition, SalaryRange};
use pitch_core::value_objects::Snowflake;

use crate::models::{OfferStatusModel, PlayerFootModel, PlayerPositionModel, SalaryRangeModel};

impl From<PlayerPositionModel> for PlayerPosition {
    fn from(model: PlayerPositionModel) -> Self {
        PlayerPosition {
            id: Snowflake::new(model.id),
            position_name: model.position_name,
        }
    }
}

impl From<PlayerFootModel> for PlayerFoot {
    fn from(model: PlayerFootModel) -> Self {
        PlayerFoot {
            id: Snowflake::new(model.id),
            name: model.name,
        }
    }
}

impl From<OfferStatusModel> for OfferStatus {
    fn from(model: OfferStatusModel) -> Self {
        OfferStatus {
            id: Snowflake::new(model.id),
            status_name: model.status_name,
        }
    }
}

impl From<SalaryRangeModel> for SalaryRange {
    fn from(model: SalaryRangeModel) -> Self {
        SalaryRange {
            id: Snowflake::new(model.id),
            min: model.min_salary,
            max: model.max_salary,
        }
    }
}

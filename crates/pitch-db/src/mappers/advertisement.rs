//! Advertisement entity <-> model mappers

use pitch_core::entities::{ClubAdvertisement, PlayerAdvertisement, SalaryRange};
use pitch_core::value_objects::Snowflake;

use crate::models::{ClubAdvertisementModel, PlayerAdvertisementModel};

impl From<PlayerAdvertisementModel> for PlayerAdvertisement {
    fn from(model: PlayerAdvertisementModel) -> Self {
        PlayerAdvertisement {
            id: Snowflake::new(model.id),
            player_id: Snowflake::new(model.player_id),
            player_position_id: Snowflake::new(model.player_position_id),
            league: model.league,
            region: model.region,
            age: model.age,
            height: model.height,
            player_foot_id: Snowflake::new(model.player_foot_id),
            salary_range: SalaryRange {
                id: Snowflake::new(model.salary_range_id),
                min: model.min_salary,
                max: model.max_salary,
            },
            creation_date: model.creation_date,
            end_date: model.end_date,
        }
    }
}

impl From<ClubAdvertisementModel> for ClubAdvertisement {
    fn from(model: ClubAdvertisementModel) -> Self {
        ClubAdvertisement {
            id: Snowflake::new(model.id),
            club_member_id: Snowflake::new(model.club_member_id),
            player_position_id: Snowflake::new(model.player_position_id),
            club_name: model.club_name,
            league: model.league,
            region: model.region,
            salary_range: SalaryRange {
                id: Snowflake::new(model.salary_range_id),
                min: model.min_salary,
                max: model.max_salary,
            },
            creation_date: model.creation_date,
            end_date: model.end_date,
        }
    }
}

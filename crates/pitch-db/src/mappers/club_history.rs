//! Club history entity <-> model mapper

use pitch_core::entities::{Achievements, ClubHistory};
use pitch_core::value_objects::Snowflake;

use crate::models::ClubHistoryModel;

impl From<ClubHistoryModel> for ClubHistory {
    fn from(model: ClubHistoryModel) -> Self {
        ClubHistory {
            id: Snowflake::new(model.id),
            achievements: Achievements {
                id: Snowflake::new(model.achievements_id),
                number_of_matches: model.number_of_matches,
                goals: model.goals,
                assists: model.assists,
                additional_achievements: model.additional_achievements,
            },
            club_name: model.club_name,
            league: model.league,
            region: model.region,
            start_date: model.start_date,
            end_date: model.end_date,
            player_position_id: Snowflake::new(model.player_position_id),
            player_id: Snowflake::new(model.player_id),
        }
    }
}

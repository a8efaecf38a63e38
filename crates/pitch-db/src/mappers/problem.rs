//! Problem entity <-> model mapper

use pitch_core::entities::Problem;
use pitch_core::value_objects::Snowflake;

use crate::models::ProblemModel;

impl From<ProblemModel> for Problem {
    fn from(model: ProblemModel) -> Self {
        Problem {
            id: Snowflake::new(model.id),
            title: model.title,
            description: model.description,
            is_solved: model.is_solved,
            creation_date: model.creation_date,
            requester_id: Snowflake::new(model.requester_id),
        }
    }
}

//! User entity <-> model mapper

use pitch_core::entities::User;
use pitch_core::value_objects::{Roles, Snowflake};

use crate::models::UserModel;

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: Snowflake::new(model.id),
            email: model.email,
            first_name: model.first_name,
            last_name: model.last_name,
            phone_number: model.phone_number,
            location: model.location,
            roles: Roles::from_i16(model.roles),
            created_at: model.created_at,
        }
    }
}

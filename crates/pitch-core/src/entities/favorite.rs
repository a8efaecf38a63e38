//! Favorite - a user's bookmark of an advertisement

use super::AdvertisementKind;
use crate::value_objects::Snowflake;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Favorite {
    pub id: Snowflake,
    pub kind: AdvertisementKind,
    pub advertisement_id: Snowflake,
    pub user_id: Snowflake,
}

impl Favorite {
    #[inline]
    pub fn is_owned_by(&self, user_id: Snowflake) -> bool {
        self.user_id == user_id
    }
}

//! Favorite entity <-> model mapper

use pitch_core::entities::{AdvertisementKind, Favorite};
use pitch_core::value_objects::Snowflake;

use crate::models::FavoriteModel;

/// Build a favorite from its row; the table it came from decides the kind
pub fn favorite_from_model(kind: AdvertisementKind, model: FavoriteModel) -> Favorite {
    Favorite {
        id: Snowflake::new(model.id),
        kind,
        advertisement_id: Snowflake::new(model.advertisement_id),
        user_id: Snowflake::new(model.user_id),
    }
}

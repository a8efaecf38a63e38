//! Favorite database model
//!
//! Both favorite tables select their advertisement column as `advertisement_id`.

use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct FavoriteModel {
    pub id: i64,
    pub advertisement_id: i64,
    pub user_id: i64,
}

//! Entity to model mappers
//!
//! `From<Model> for Entity` (or `TryFrom` where a column holds an enum id)
//! converts database rows into domain objects.

mod advertisement;
mod chat;
mod club_history;
mod favorite;
mod lookup;
mod offer;
mod problem;
mod user;

pub use favorite::favorite_from_model;
pub use offer::offers_from_models;

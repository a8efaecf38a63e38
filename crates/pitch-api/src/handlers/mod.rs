//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod admin;
pub mod auth;
pub mod chats;
pub mod club_advertisements;
pub mod club_history;
pub mod club_offers;
pub mod favorites;
pub mod health;
pub mod hub;
pub mod lookups;
pub mod messages;
pub mod player_advertisements;
pub mod player_offers;
pub mod problems;
pub mod salary_ranges;
pub mod users;

//! Axum extractors for request handling
//!
//! Authentication with named policies, id path segments, and validated JSON.

mod auth;
mod path;
mod validated;

pub use auth::{
    AdminOnly, AdminUser, AuthUser, Authorized, HubUser, PolicyRequirement, RegularUser,
    UserOnly,
};
pub use path::IdPath;
pub use validated::ValidatedJson;

//! Integration test utilities for the pitch server
//!
//! This crate provides helpers for running end-to-end tests against
//! the REST API and the chat hub.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;

//! # pitch-db
//!
//! Database layer implementing the pitch-core repository traits with
//! PostgreSQL via SQLx.
//!
//! - Connection pool and migrations
//! - Row models with SQLx `FromRow` derives
//! - Model to entity mappers
//! - Repository implementations
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pitch_db::{create_pool, run_migrations, PgUserRepository, PoolConfig};
//! use pitch_core::traits::UserRepository;
//!
//! async fn example(config: &pitch_common::AppConfig) -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&PoolConfig::from(&config.database)).await?;
//!     run_migrations(&pool).await?;
//!     let users = PgUserRepository::new(pool);
//!     let total = users.count().await?;
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

pub use pool::{create_pool, run_migrations, PgPool, PoolConfig};
pub use repositories::{
    PgChatRepository, PgClubAdvertisementRepository, PgClubHistoryRepository,
    PgClubOfferRepository, PgFavoriteRepository, PgLookupRepository, PgMessageRepository,
    PgPlayerAdvertisementRepository, PgPlayerOfferRepository, PgProblemRepository,
    PgSalaryRangeRepository, PgUserRepository,
};

//! Configuration structs

mod app_config;

pub use app_config::{
    AdminSeedConfig, AppConfig, AppSettings, ConfigError, CorsConfig, DatabaseConfig,
    Environment, JwtConfig, RateLimitConfig, ServerConfig, SnowflakeConfig,
};

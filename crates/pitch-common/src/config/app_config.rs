//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file when present).

use serde::Deserialize;
use std::env;
use std::str::FromStr;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    /// Administrator ensured at startup, when configured
    pub admin: Option<AdminSeedConfig>,
    pub rate_limit: RateLimitConfig,
    pub cors: CorsConfig,
    pub snowflake: SnowflakeConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default)]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }

    /// Parse an `APP_ENV` value, case-insensitive
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "production" | "prod" => Some(Self::Production),
            "staging" => Some(Self::Staging),
            "development" | "dev" => Some(Self::Development),
            _ => None,
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Database configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    /// Apply pending migrations on startup
    #[serde(default = "default_run_migrations")]
    pub run_migrations: bool,
}

/// JWT and auth cookie configuration
#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    #[serde(default = "default_issuer")]
    pub valid_issuer: String,
    #[serde(default = "default_audience")]
    pub valid_audience: String,
    /// Token lifetime in days
    #[serde(default = "default_expire_days")]
    pub expire_days: i64,
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
}

/// Credentials of the administrator created at startup
#[derive(Clone, Deserialize)]
pub struct AdminSeedConfig {
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for AdminSeedConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminSeedConfig")
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

/// Rate limiting configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitConfig {
    #[serde(default = "default_requests_per_second")]
    pub requests_per_second: u32,
    #[serde(default = "default_burst")]
    pub burst: u32,
}

/// CORS configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

/// Snowflake ID generator configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SnowflakeConfig {
    #[serde(default)]
    pub worker_id: u16,
}

// Default value functions
fn default_app_name() -> String {
    "pitch".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_max_connections() -> u32 {
    20
}

fn default_min_connections() -> u32 {
    5
}

fn default_run_migrations() -> bool {
    true
}

fn default_issuer() -> String {
    "pitch-api".to_string()
}

fn default_audience() -> String {
    "pitch-client".to_string()
}

fn default_expire_days() -> i64 {
    7
}

/// Longest accepted token lifetime, ten years
const MAX_EXPIRE_DAYS: i64 = 3650;

fn default_cookie_name() -> String {
    "AuthToken".to_string()
}

fn default_requests_per_second() -> u32 {
    10
}

fn default_burst() -> u32 {
    50
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing or invalid
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_source(|key| env::var(key).ok())
    }

    /// Build the configuration from a key lookup
    ///
    /// # Errors
    /// Returns an error if required keys are missing or a value does not parse
    pub fn from_source<F>(get: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = match get("APP_ENV") {
            Some(value) => Environment::parse(&value)
                .ok_or(ConfigError::InvalidValue("APP_ENV", value))?,
            None => Environment::default(),
        };

        let expire_days: i64 =
            parse_var(&get, "JWT_EXPIRE_DAYS")?.unwrap_or_else(default_expire_days);
        if !(1..=MAX_EXPIRE_DAYS).contains(&expire_days) {
            return Err(ConfigError::InvalidValue(
                "JWT_EXPIRE_DAYS",
                expire_days.to_string(),
            ));
        }

        let worker_id: u16 = parse_var(&get, "WORKER_ID")?.unwrap_or(0);
        if worker_id >= 1024 {
            return Err(ConfigError::InvalidValue("WORKER_ID", worker_id.to_string()));
        }

        let admin = match (get("ADMIN_EMAIL"), get("ADMIN_PASSWORD")) {
            (Some(email), Some(password)) if !email.is_empty() && !password.is_empty() => {
                Some(AdminSeedConfig { email, password })
            }
            _ => None,
        };

        Ok(Self {
            app: AppSettings {
                name: get("APP_NAME").unwrap_or_else(default_app_name),
                env,
            },
            api: ServerConfig {
                host: get("API_HOST").unwrap_or_else(default_host),
                port: parse_var(&get, "API_PORT")?
                    .ok_or(ConfigError::MissingVar("API_PORT"))?,
            },
            database: DatabaseConfig {
                url: get("DATABASE_URL").ok_or(ConfigError::MissingVar("DATABASE_URL"))?,
                max_connections: parse_var(&get, "DATABASE_MAX_CONNECTIONS")?
                    .unwrap_or_else(default_max_connections),
                min_connections: parse_var(&get, "DATABASE_MIN_CONNECTIONS")?
                    .unwrap_or_else(default_min_connections),
                run_migrations: parse_var(&get, "DATABASE_RUN_MIGRATIONS")?
                    .unwrap_or_else(default_run_migrations),
            },
            jwt: JwtConfig {
                secret: get("JWT_SECRET").ok_or(ConfigError::MissingVar("JWT_SECRET"))?,
                valid_issuer: get("JWT_VALID_ISSUER").unwrap_or_else(default_issuer),
                valid_audience: get("JWT_VALID_AUDIENCE").unwrap_or_else(default_audience),
                expire_days,
                cookie_name: get("AUTH_COOKIE_NAME").unwrap_or_else(default_cookie_name),
            },
            admin,
            rate_limit: RateLimitConfig {
                requests_per_second: parse_var(&get, "RATE_LIMIT_REQUESTS_PER_SECOND")?
                    .unwrap_or_else(default_requests_per_second),
                burst: parse_var(&get, "RATE_LIMIT_BURST")?.unwrap_or_else(default_burst),
            },
            cors: CorsConfig {
                allowed_origins: get("CORS_ALLOWED_ORIGINS")
                    .map(|s| {
                        s.split(',')
                            .map(str::trim)
                            .filter(|s| !s.is_empty())
                            .map(String::from)
                            .collect()
                    })
                    .unwrap_or_default(),
            },
            snowflake: SnowflakeConfig { worker_id },
        })
    }
}

/// Parse an optional variable; a present but malformed value is an error
fn parse_var<T, F>(get: &F, key: &'static str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    get(key)
        .map(|value| {
            value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue(key, value.clone()))
        })
        .transpose()
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        AppConfig::from_source(|key| map.get(key).cloned())
    }

    const REQUIRED: [(&str, &str); 3] = [
        ("API_PORT", "8080"),
        ("DATABASE_URL", "postgres://localhost/pitch"),
        ("JWT_SECRET", "secret"),
    ];

    #[test]
    fn test_environment_parse() {
        assert_eq!(Environment::parse("Production"), Some(Environment::Production));
        assert_eq!(Environment::parse("dev"), Some(Environment::Development));
        assert_eq!(Environment::parse("qa"), None);
        assert!(Environment::Production.is_production());
        assert!(Environment::Development.is_development());
    }

    #[test]
    fn test_server_address() {
        let config = ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 8080,
        };
        assert_eq!(config.address(), "0.0.0.0:8080");
    }

    #[test]
    fn test_defaults() {
        let config = load(&REQUIRED).unwrap();
        assert_eq!(config.app.name, "pitch");
        assert_eq!(config.app.env, Environment::Development);
        assert_eq!(config.api.address(), "127.0.0.1:8080");
        assert_eq!(config.database.max_connections, 20);
        assert_eq!(config.database.min_connections, 5);
        assert!(config.database.run_migrations);
        assert_eq!(config.jwt.valid_issuer, "pitch-api");
        assert_eq!(config.jwt.valid_audience, "pitch-client");
        assert_eq!(config.jwt.expire_days, 7);
        assert_eq!(config.jwt.cookie_name, "AuthToken");
        assert!(config.admin.is_none());
        assert_eq!(config.rate_limit.requests_per_second, 10);
        assert_eq!(config.rate_limit.burst, 50);
        assert!(config.cors.allowed_origins.is_empty());
        assert_eq!(config.snowflake.worker_id, 0);
    }

    #[test]
    fn test_missing_required() {
        let err = load(&REQUIRED[..2]).unwrap_err();
        assert!(matches!(err, ConfigError::MissingVar("JWT_SECRET")));

        let err = load(&REQUIRED[1..]).unwrap_err();
        assert!(matches!(err, ConfigError::MissingVar("API_PORT")));
    }

    #[test]
    fn test_invalid_values() {
        let mut vars = REQUIRED.to_vec();
        vars.push(("JWT_EXPIRE_DAYS", "0"));
        assert!(matches!(
            load(&vars),
            Err(ConfigError::InvalidValue("JWT_EXPIRE_DAYS", _))
        ));

        let mut vars = REQUIRED.to_vec();
        vars.push(("JWT_EXPIRE_DAYS", "9223372036854775807"));
        assert!(matches!(
            load(&vars),
            Err(ConfigError::InvalidValue("JWT_EXPIRE_DAYS", _))
        ));

        let mut vars = REQUIRED.to_vec();
        vars.push(("JWT_EXPIRE_DAYS", "3650"));
        assert_eq!(load(&vars).unwrap().jwt.expire_days, MAX_EXPIRE_DAYS);

        let mut vars = REQUIRED.to_vec();
        vars.push(("DATABASE_RUN_MIGRATIONS", "maybe"));
        assert!(load(&vars).is_err());

        let mut vars = REQUIRED.to_vec();
        vars.push(("WORKER_ID", "2048"));
        assert!(load(&vars).is_err());
    }

    #[test]
    fn test_overrides() {
        let mut vars = REQUIRED.to_vec();
        vars.extend([
            ("APP_ENV", "production"),
            ("JWT_VALID_ISSUER", "issuer"),
            ("JWT_EXPIRE_DAYS", "14"),
            ("ADMIN_EMAIL", "admin@pitch.dev"),
            ("ADMIN_PASSWORD", "Admin123!"),
            ("CORS_ALLOWED_ORIGINS", "http://a.dev, http://b.dev,"),
        ]);
        let config = load(&vars).unwrap();
        assert!(config.app.env.is_production());
        assert_eq!(config.jwt.valid_issuer, "issuer");
        assert_eq!(config.jwt.expire_days, 14);
        assert_eq!(
            config.admin.map(|a| a.email),
            Some("admin@pitch.dev".to_string())
        );
        assert_eq!(config.cors.allowed_origins, vec!["http://a.dev", "http://b.dev"]);
    }

    #[test]
    fn test_admin_requires_both_values() {
        let mut vars = REQUIRED.to_vec();
        vars.push(("ADMIN_EMAIL", "admin@pitch.dev"));
        assert!(load(&vars).unwrap().admin.is_none());
    }
}

//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers, making HTTP requests with a
//! cookie-aware client, and asserting on responses.

use std::net::SocketAddr;
use std::ops::Deref;
use std::time::Duration;

use anyhow::{Context, Result};
use pitch_api::{create_app, create_app_state, AppState};
use pitch_common::AppConfig;
use reqwest::{Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tokio::net::TcpListener;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use crate::fixtures::{LoginRequest, LoginResponse, RegisterRequest, UserResponse};

/// Admin account seeded when ADMIN_EMAIL/ADMIN_PASSWORD are not set
pub const DEFAULT_ADMIN_EMAIL: &str = "admin@pitch.test";
pub const DEFAULT_ADMIN_PASSWORD: &str = "Admin123!";

// Migrations and seeding race when several servers start at once
static SETUP_LOCK: Mutex<()> = Mutex::const_new(());

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    admin_email: String,
    admin_password: String,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server on a random local port
    pub async fn start() -> Result<Self> {
        let config = test_config()?;
        Self::start_with_config(config).await
    }

    /// Start a test server with custom config
    pub async fn start_with_config(config: AppConfig) -> Result<Self> {
        let (admin_email, admin_password) = config
            .admin
            .as_ref()
            .map(|admin| (admin.email.clone(), admin.password.clone()))
            .context("test config must seed an admin")?;

        let state = {
            let _guard = SETUP_LOCK.lock().await;
            create_app_state(config).await?
        };
        let app = create_app(state)?;

        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        Ok(Self {
            addr,
            admin_email,
            admin_password,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Hub URL carrying the token as a query parameter
    pub fn hub_url(&self, token: &str) -> String {
        format!("ws://{}/hubs/chat?access_token={}", self.addr, token)
    }

    /// A fresh client with an empty cookie jar
    pub fn client(&self) -> Result<ApiClient> {
        let client = Client::builder()
            .cookie_store(true)
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(ApiClient {
            base_url: self.base_url(),
            client,
        })
    }

    /// Register a unique account and log it in
    pub async fn register_user(&self) -> Result<Session> {
        let request = RegisterRequest::unique();
        let client = self.client()?;

        let response = client.post("/api/users/register", &request).await?;
        assert_status(response, StatusCode::CREATED).await?;

        self.login(&request.email, &request.password).await
    }

    /// Log in; the returned session carries the auth cookie
    pub async fn login(&self, email: &str, password: &str) -> Result<Session> {
        let api = self.client()?;
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        let response = api.post("/api/users/login", &request).await?;
        let login: LoginResponse = assert_json(response, StatusCode::OK).await?;

        Ok(Session {
            api,
            user: login.user,
            token: login.token,
        })
    }

    /// Log in as the seeded admin
    pub async fn login_admin(&self) -> Result<Session> {
        self.login(&self.admin_email, &self.admin_password).await
    }
}

/// Application state over the test database, for driving services directly
pub async fn test_state() -> Result<AppState> {
    let config = test_config()?;
    let _guard = SETUP_LOCK.lock().await;
    Ok(create_app_state(config).await?)
}

/// HTTP client bound to one test server
pub struct ApiClient {
    base_url: String,
    client: Client,
}

impl ApiClient {
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        Ok(self.client.get(self.url(path)).send().await?)
    }

    /// Make a GET request with a bearer token instead of the cookie
    pub async fn get_bearer(&self, path: &str, token: &str) -> Result<Response> {
        Ok(self
            .client
            .get(self.url(path))
            .bearer_auth(token)
            .send()
            .await?)
    }

    /// Make a POST request with JSON body
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        Ok(self.client.post(self.url(path)).json(body).send().await?)
    }

    /// Make a POST request without a body
    pub async fn post_empty(&self, path: &str) -> Result<Response> {
        Ok(self.client.post(self.url(path)).send().await?)
    }

    /// Make a PUT request with JSON body
    pub async fn put<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        Ok(self.client.put(self.url(path)).json(body).send().await?)
    }

    /// Make a PUT request without a body
    pub async fn put_empty(&self, path: &str) -> Result<Response> {
        Ok(self.client.put(self.url(path)).send().await?)
    }

    /// Make a DELETE request
    pub async fn delete(&self, path: &str) -> Result<Response> {
        Ok(self.client.delete(self.url(path)).send().await?)
    }
}

/// A logged-in account
pub struct Session {
    pub api: ApiClient,
    pub user: UserResponse,
    pub token: String,
}

impl Session {
    pub fn id(&self) -> &str {
        &self.user.id
    }
}

impl Deref for Session {
    type Target = ApiClient;

    fn deref(&self) -> &ApiClient {
        &self.api
    }
}

/// Create a test configuration
///
/// Environment values win, except that the server binds a random port, runs
/// migrations, stays in development mode (no `Secure` cookie over plain
/// http) and gets a rate limit high enough for parallel tests.
pub fn test_config() -> Result<AppConfig> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_source(|key| match key {
        "API_PORT" => Some("0".to_string()),
        "APP_ENV" => Some("development".to_string()),
        "DATABASE_RUN_MIGRATIONS" => Some("true".to_string()),
        "RATE_LIMIT_REQUESTS_PER_SECOND" | "RATE_LIMIT_BURST" => Some("10000".to_string()),
        "JWT_SECRET" => std::env::var(key)
            .ok()
            .or_else(|| Some("integration-test-secret-at-least-32-bytes".to_string())),
        "ADMIN_EMAIL" => std::env::var(key)
            .ok()
            .or_else(|| Some(DEFAULT_ADMIN_EMAIL.to_string())),
        "ADMIN_PASSWORD" => std::env::var(key)
            .ok()
            .or_else(|| Some(DEFAULT_ADMIN_PASSWORD.to_string())),
        _ => std::env::var(key).ok(),
    })
    .map_err(|e| anyhow::anyhow!("Config error: {}", e))?;

    Ok(config)
}

/// Helper to check if test environment is available
pub async fn check_test_env() -> bool {
    dotenvy::dotenv().ok();

    if std::env::var("DATABASE_URL").is_err() {
        eprintln!("Skipping test: DATABASE_URL not set");
        return false;
    }

    true
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(
    response: Response,
    expected_status: StatusCode,
) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(())
}

//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::sync::Arc;

use axum::Router;
use pitch_common::{AppConfig, AppError, JwtService, PasswordService};
use pitch_core::SnowflakeGenerator;
use pitch_db::{create_pool, run_migrations, PoolConfig};
use pitch_service::{SeedService, ServiceContextBuilder};
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::middleware::{apply_middleware, apply_middleware_with_config};
use crate::response::ApiError;
use crate::routes::{create_router, health_routes, hub_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
///
/// Health checks and the hub upgrade skip CORS, compression and the rate limit.
pub fn create_app(state: AppState) -> Result<Router, AppError> {
    let config = state.config();
    let api = apply_middleware_with_config(
        create_router(),
        &config.rate_limit,
        &config.cors,
        config.app.env.is_production(),
    )?;

    let router = apply_middleware(health_routes().merge(hub_routes()))
        .merge(api)
        .fallback(route_not_found);

    Ok(router.with_state(state))
}

async fn route_not_found() -> ApiError {
    ApiError::App(AppError::NotFound("route".to_string()))
}

/// Initialize all dependencies and create AppState
///
/// Connects to PostgreSQL, applies migrations when enabled and seeds the
/// unknown user plus the configured admin.
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    info!("Connecting to PostgreSQL...");
    let pool = create_pool(&PoolConfig::from(&config.database))
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    if config.database.run_migrations {
        run_migrations(&pool)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        info!("Database migrations applied");
    }

    let jwt_service = Arc::new(JwtService::new(&config.jwt));
    let password_service = Arc::new(PasswordService::default());
    let snowflake_generator = Arc::new(SnowflakeGenerator::new(config.snowflake.worker_id));

    let service_context = ServiceContextBuilder::new()
        .postgres(pool)
        .jwt_service(jwt_service)
        .password_service(password_service)
        .snowflake_generator(snowflake_generator)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    if config.admin.is_none() {
        warn!("ADMIN_EMAIL not set, no admin account will be seeded");
    }
    SeedService::new(&service_context)
        .run(config.admin.as_ref())
        .await?;

    Ok(AppState::new(service_context, config))
}

/// Serve the application on an already bound listener until Ctrl+C
pub async fn run_server(app: Router, listener: TcpListener) -> Result<(), AppError> {
    let addr = listener
        .local_addr()
        .map_err(|e| AppError::Config(format!("Failed to read listener address: {e}")))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    info!("Server stopped");
    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = format!("{}:{}", config.api.host, config.api.port);

    let state = create_app_state(config).await?;
    let app = create_app(state)?;

    info!("Starting HTTP server on {}", addr);
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    run_server(app, listener).await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
